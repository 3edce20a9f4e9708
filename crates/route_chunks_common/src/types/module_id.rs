use std::path::Path;

use arcstr::ArcStr;
use route_chunks_utils::path_ext::PathExt;

use crate::{ModuleType, ROUTE_CHUNK_QUERY_STRING_PREFIX, RouteChunkName};

/// Id of a route module as the host bundler sees it: an absolute (or app-relative)
/// file path, optionally followed by a query string such as `?route-chunk=main`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  /// The id without its query string.
  pub fn file_path(&self) -> &str {
    self.0.split_once('?').map_or(self.0.as_str(), |(path, _query)| path)
  }

  pub fn module_type(&self) -> ModuleType {
    ModuleType::from_path(Path::new(self.file_path()))
  }

  /// Normalized, forward-slashed path relative to `app_directory`, without query string.
  /// Used both as the analysis cache key and to recognize the root route module.
  pub fn stabilize(&self, app_directory: &Path) -> String {
    Path::new(self.file_path()).relative_slash_path(app_directory)
  }

  pub fn with_route_chunk(&self, chunk_name: RouteChunkName) -> ModuleId {
    ModuleId::new(format!("{}{}", self.0, chunk_name.query_string()))
  }

  pub fn is_route_chunk(&self) -> bool {
    RouteChunkName::ALL.iter().any(|chunk_name| self.0.ends_with(&chunk_name.query_string()))
  }

  /// Reads the `route-chunk` query value up to the next `&`.
  pub fn route_chunk_name(&self) -> Option<RouteChunkName> {
    let (_, query) = self.0.split_once(ROUTE_CHUNK_QUERY_STRING_PREFIX)?;
    let chunk_name = query.split('&').next().unwrap_or_default();
    RouteChunkName::from_chunk_name(chunk_name)
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl From<&str> for ModuleId {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for ModuleId {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}

#[test]
fn test_route_chunk_query() {
  use crate::RouteChunkExportName;

  let id = ModuleId::new("/app/routes/home.tsx");
  assert!(!id.is_route_chunk());
  assert_eq!(id.route_chunk_name(), None);

  let chunk_id = id.with_route_chunk(RouteChunkExportName::ClientLoader.into());
  assert_eq!(&*chunk_id, "/app/routes/home.tsx?route-chunk=clientLoader");
  assert!(chunk_id.is_route_chunk());
  assert_eq!(chunk_id.route_chunk_name(), Some(RouteChunkExportName::ClientLoader.into()));
  assert_eq!(chunk_id.file_path(), "/app/routes/home.tsx");
  assert_eq!(chunk_id.module_type(), ModuleType::Tsx);

  let with_more_params = ModuleId::new("/app/routes/home.tsx?route-chunk=main&v=123");
  assert_eq!(with_more_params.route_chunk_name(), Some(RouteChunkName::Main));
  assert!(!with_more_params.is_route_chunk());

  assert_eq!(ModuleId::new("/app/home.tsx?route-chunk=default").route_chunk_name(), None);
}

#[test]
fn test_stabilize() {
  let app_directory = Path::new("/app");
  assert_eq!(ModuleId::new("/app/routes/home.tsx").stabilize(app_directory), "routes/home.tsx");
  assert_eq!(ModuleId::new("/app/root.tsx?route-chunk=main").stabilize(app_directory), "root.tsx");
  assert_eq!(ModuleId::new("root.tsx").stabilize(app_directory), "root.tsx");
}
