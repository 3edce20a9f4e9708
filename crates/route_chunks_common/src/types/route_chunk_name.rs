use std::fmt::Display;

pub const ROUTE_CHUNK_QUERY_STRING_PREFIX: &str = "?route-chunk=";

/// Route module exports that may be split into their own chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteChunkExportName {
  ClientAction = 0,
  ClientLoader = 1,
  ClientMiddleware = 2,
  HydrateFallback = 3,
}

impl RouteChunkExportName {
  pub const ALL: [Self; 4] =
    [Self::ClientAction, Self::ClientLoader, Self::ClientMiddleware, Self::HydrateFallback];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::ClientAction => "clientAction",
      Self::ClientLoader => "clientLoader",
      Self::ClientMiddleware => "clientMiddleware",
      Self::HydrateFallback => "HydrateFallback",
    }
  }

  pub fn from_export_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|export_name| export_name.as_str() == name)
  }

  /// Suffix of the build entry that holds this chunk, e.g. `routes/home-client-loader`.
  pub fn entry_suffix(self) -> &'static str {
    match self {
      Self::ClientAction => "client-action",
      Self::ClientLoader => "client-loader",
      Self::ClientMiddleware => "client-middleware",
      Self::HydrateFallback => "hydrate-fallback",
    }
  }

  pub fn entry_name(self, route_id: &str) -> String {
    format!("{route_id}-{}", self.entry_suffix())
  }
}

impl Display for RouteChunkExportName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// `main` is the route module minus every export that was split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteChunkName {
  Main,
  Export(RouteChunkExportName),
}

impl RouteChunkName {
  pub const ALL: [Self; 5] = [
    Self::Main,
    Self::Export(RouteChunkExportName::ClientAction),
    Self::Export(RouteChunkExportName::ClientLoader),
    Self::Export(RouteChunkExportName::ClientMiddleware),
    Self::Export(RouteChunkExportName::HydrateFallback),
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Main => "main",
      Self::Export(export_name) => export_name.as_str(),
    }
  }

  pub fn from_chunk_name(name: &str) -> Option<Self> {
    if name == "main" {
      Some(Self::Main)
    } else {
      RouteChunkExportName::from_export_name(name).map(Self::Export)
    }
  }

  pub fn query_string(self) -> String {
    format!("{ROUTE_CHUNK_QUERY_STRING_PREFIX}{}", self.as_str())
  }
}

impl From<RouteChunkExportName> for RouteChunkName {
  fn from(value: RouteChunkExportName) -> Self {
    Self::Export(value)
  }
}

impl Display for RouteChunkName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[test]
fn test_chunk_names() {
  for name in RouteChunkName::ALL {
    assert_eq!(RouteChunkName::from_chunk_name(name.as_str()), Some(name));
  }
  assert_eq!(RouteChunkName::from_chunk_name("default"), None);
  assert_eq!(RouteChunkName::Main.query_string(), "?route-chunk=main");
  assert_eq!(
    RouteChunkExportName::HydrateFallback.entry_name("routes/home"),
    "routes/home-hydrate-fallback"
  );
}
