use std::path::PathBuf;

use crate::SplitRouteModules;

#[derive(Debug, Clone)]
pub struct NormalizedRouteChunkOptions {
  pub split_route_modules: SplitRouteModules,
  pub app_directory: PathBuf,
  pub root_route_file: String,
}

impl NormalizedRouteChunkOptions {
  #[inline]
  pub fn is_enabled(&self) -> bool {
    self.split_route_modules.is_enabled()
  }

  #[inline]
  pub fn is_enforced(&self) -> bool {
    self.split_route_modules.is_enforced()
  }
}
