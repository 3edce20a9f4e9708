use std::fmt::Display;

/// Raised in enforce mode when some requested route exports could not be split
/// into their own chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplittableRouteExports {
  /// Route module path relative to the app directory.
  pub module: String,
  pub export_names: Vec<String>,
}

impl Display for UnsplittableRouteExports {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let plural = self.export_names.len() > 1;

    writeln!(f, "Error splitting route module: {}", self.module)?;
    writeln!(f)?;
    for name in &self.export_names {
      writeln!(f, "- {name}")?;
    }
    writeln!(f)?;
    write!(
      f,
      "{} could not be split into {} because {} code with other exports. You should extract any shared code into its own module and then import it within the route module.",
      if plural { "These exports" } else { "This export" },
      if plural { "their own chunks" } else { "its own chunk" },
      if plural { "they share" } else { "it shares" },
    )
  }
}

impl std::error::Error for UnsplittableRouteExports {}

#[test]
fn singular_message() {
  let event = UnsplittableRouteExports {
    module: "routes/home.tsx".to_string(),
    export_names: vec!["clientLoader".to_string()],
  };
  let message = event.to_string();
  assert!(message.starts_with("Error splitting route module: routes/home.tsx\n\n- clientLoader\n\n"));
  assert!(message.contains("This export could not be split into its own chunk because it shares"));
}

#[test]
fn plural_message() {
  let event = UnsplittableRouteExports {
    module: "routes/shared.tsx".to_string(),
    export_names: vec!["clientAction".to_string(), "clientLoader".to_string()],
  };
  let message = event.to_string();
  assert!(message.contains("- clientAction\n- clientLoader\n"));
  assert!(message.contains("These exports could not be split into their own chunks because they share"));
}
