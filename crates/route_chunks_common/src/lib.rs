mod route_chunk_options;
mod types;

pub use crate::{
  route_chunk_options::{
    RouteChunkOptions, normalized_route_chunk_options::NormalizedRouteChunkOptions,
    split_route_modules::SplitRouteModules,
  },
  types::{
    module_id::ModuleId,
    module_type::ModuleType,
    raw_idx::StmtIdx,
    route_chunk_info::{RouteChunkExportFlags, RouteChunkInfo},
    route_chunk_name::{ROUTE_CHUNK_QUERY_STRING_PREFIX, RouteChunkExportName, RouteChunkName},
  },
};
