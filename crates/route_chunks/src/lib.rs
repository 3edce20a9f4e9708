mod cache;
mod chunkability;
mod codegen;
mod module_analysis;
mod route_chunk_analyzer;
mod route_chunks;
mod utils;

pub use crate::{
  cache::{CacheVersion, RouteChunkCache, get_or_compute, try_get_or_compute},
  chunkability::is_chunkable,
  module_analysis::{
    ExportDependencies, ExportDependencyMap, build_export_dependencies, stmt_info::PartRef,
  },
  route_chunk_analyzer::RouteChunkAnalyzer,
  route_chunks::{
    detect_route_chunks, detect_route_chunks_for_modules, detect_route_chunks_if_enabled,
    extract_chunk, get_route_chunk_code, get_route_chunk_if_enabled, is_root_route_module,
    omit_chunks, route_chunk_validity, validate_route_chunks,
  },
  utils::normalize_options::normalize_options,
};
pub use route_chunks_common::*;
pub use route_chunks_error::{BuildError, BuildResult, UnsplittableRouteExports};
