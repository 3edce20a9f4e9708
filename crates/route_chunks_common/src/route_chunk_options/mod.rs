pub mod normalized_route_chunk_options;
pub mod split_route_modules;

use std::path::PathBuf;

use serde::Deserialize;

use crate::SplitRouteModules;

/// Route chunk settings as they appear in the framework config, e.g.
/// `{ "splitRouteModules": "enforce", "appDirectory": "app" }`.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteChunkOptions {
  pub split_route_modules: Option<SplitRouteModules>,
  pub app_directory: Option<PathBuf>,
  /// Path of the root route module, relative to `app_directory`.
  pub root_route_file: Option<String>,
}

#[test]
fn deserialize_from_camel_case_json() {
  let options: RouteChunkOptions = serde_json::from_str(
    r#"{ "splitRouteModules": "enforce", "appDirectory": "/app", "rootRouteFile": "root.jsx" }"#,
  )
  .unwrap();
  assert_eq!(options.split_route_modules, Some(SplitRouteModules::Enforce));
  assert_eq!(options.app_directory, Some(PathBuf::from("/app")));
  assert_eq!(options.root_route_file.as_deref(), Some("root.jsx"));

  let options: RouteChunkOptions = serde_json::from_str("{}").unwrap();
  assert_eq!(options.split_route_modules, None);
}
