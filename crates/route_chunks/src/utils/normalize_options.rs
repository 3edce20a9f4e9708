use std::path::PathBuf;

use route_chunks_common::{NormalizedRouteChunkOptions, RouteChunkOptions};
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: RouteChunkOptions) -> NormalizedRouteChunkOptions {
  let app_directory = raw_options.app_directory.unwrap_or_else(|| PathBuf::from("app"));

  NormalizedRouteChunkOptions {
    split_route_modules: raw_options.split_route_modules.unwrap_or_default(),
    app_directory: app_directory.absolutize().normalize(),
    root_route_file: raw_options.root_route_file.unwrap_or_else(|| "root.tsx".to_string()),
  }
}

#[test]
fn test_normalize_options() {
  use route_chunks_common::SplitRouteModules;

  let options = normalize_options(RouteChunkOptions::default());
  assert_eq!(options.split_route_modules, SplitRouteModules::Off);
  assert!(options.app_directory.is_absolute());
  assert!(options.app_directory.ends_with("app"));
  assert_eq!(options.root_route_file, "root.tsx");

  let options = normalize_options(RouteChunkOptions {
    split_route_modules: Some(SplitRouteModules::Enforce),
    app_directory: Some(PathBuf::from("/project/src/../app")),
    root_route_file: Some("root.jsx".to_string()),
  });
  assert!(options.is_enforced());
  assert_eq!(options.app_directory, PathBuf::from("/project/app"));
  assert_eq!(options.root_route_file, "root.jsx");
}
