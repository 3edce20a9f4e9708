use std::path::Path;

use oxc::span::SourceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
  Js,
  Jsx,
  Ts,
  Tsx,
}

impl ModuleType {
  /// Unknown extensions are treated as JavaScript.
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some("tsx") => Self::Tsx,
      Some("ts" | "mts") => Self::Ts,
      Some("jsx") => Self::Jsx,
      _ => Self::Js,
    }
  }

  pub fn source_type(self) -> SourceType {
    let module = SourceType::default().with_module(true);
    match self {
      // Route modules written as `.js` commonly contain JSX.
      Self::Js | Self::Jsx => module.with_jsx(true),
      Self::Ts => module.with_typescript(true),
      Self::Tsx => module.with_typescript(true).with_jsx(true),
    }
  }
}

#[test]
fn test_from_path() {
  assert_eq!(ModuleType::from_path(Path::new("app/routes/home.tsx")), ModuleType::Tsx);
  assert_eq!(ModuleType::from_path(Path::new("app/routes/home.mts")), ModuleType::Ts);
  assert_eq!(ModuleType::from_path(Path::new("app/routes/home.jsx")), ModuleType::Jsx);
  assert_eq!(ModuleType::from_path(Path::new("app/routes/home.mjs")), ModuleType::Js);
  assert_eq!(ModuleType::from_path(Path::new("app/routes/home")), ModuleType::Js);
}
