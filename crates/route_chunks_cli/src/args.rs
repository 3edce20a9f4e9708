use std::path::PathBuf;

use clap::Args;
use route_chunks::{RouteChunkName, RouteChunkOptions};

use crate::types::split_route_modules::SplitRouteModules;

#[derive(Args)]
pub struct OptionsArgs {
  /// Directory the route module ids are made relative to.
  #[clap(long, default_value = "app")]
  pub app_directory: PathBuf,

  /// Root route module, relative to the app directory. It is never split.
  #[clap(long, default_value = "root.tsx")]
  pub root_route_file: String,

  #[clap(long, value_enum, default_value = "on")]
  pub split_route_modules: SplitRouteModules,
}

impl From<OptionsArgs> for RouteChunkOptions {
  fn from(args: OptionsArgs) -> Self {
    RouteChunkOptions {
      split_route_modules: Some(args.split_route_modules.into()),
      app_directory: Some(args.app_directory),
      root_route_file: Some(args.root_route_file),
    }
  }
}

pub fn parse_chunk_name(value: &str) -> Result<RouteChunkName, String> {
  RouteChunkName::from_chunk_name(value).ok_or_else(|| {
    let expected = RouteChunkName::ALL.map(RouteChunkName::as_str).join(", ");
    format!("unknown route chunk {value:?}, expected one of: {expected}")
  })
}
