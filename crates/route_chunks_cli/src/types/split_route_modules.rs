use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum SplitRouteModules {
  Off,
  On,
  Enforce,
}

impl From<SplitRouteModules> for route_chunks::SplitRouteModules {
  fn from(value: SplitRouteModules) -> Self {
    match value {
      SplitRouteModules::Off => route_chunks::SplitRouteModules::Off,
      SplitRouteModules::On => route_chunks::SplitRouteModules::On,
      SplitRouteModules::Enforce => route_chunks::SplitRouteModules::Enforce,
    }
  }
}
