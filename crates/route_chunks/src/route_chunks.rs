use arcstr::ArcStr;
use route_chunks_common::{
  ModuleId, ModuleType, NormalizedRouteChunkOptions, RouteChunkExportFlags, RouteChunkExportName,
  RouteChunkInfo, RouteChunkName,
};
use route_chunks_error::{BuildResult, UnsplittableRouteExports};
use route_chunks_utils::rayon::{IntoParallelRefIterator, ParallelIterator};

use crate::{cache::RouteChunkCache, route_chunk_analyzer::RouteChunkAnalyzer};

/// Chunkability of every splittable route export of a module.
pub fn detect_route_chunks(
  cache: Option<&RouteChunkCache>,
  cache_key: &str,
  code: &str,
  module_type: ModuleType,
) -> BuildResult<RouteChunkInfo> {
  let analyzer = RouteChunkAnalyzer::new(cache, cache_key, code, module_type);
  let mut flags = RouteChunkExportFlags::default();
  for export_name in RouteChunkExportName::ALL {
    flags[export_name] = analyzer.has_chunkable_export(export_name.as_str())?;
  }
  Ok(RouteChunkInfo::from_flags(flags))
}

/// Code of one chunk of a route module. `main` is the module minus every
/// chunkable route export.
pub fn get_route_chunk_code(
  cache: Option<&RouteChunkCache>,
  cache_key: &str,
  code: &str,
  module_type: ModuleType,
  chunk_name: RouteChunkName,
) -> BuildResult<Option<ArcStr>> {
  let analyzer = RouteChunkAnalyzer::new(cache, cache_key, code, module_type);
  match chunk_name {
    RouteChunkName::Main => {
      analyzer.omit_chunked_exports(&RouteChunkExportName::ALL.map(RouteChunkExportName::as_str))
    }
    RouteChunkName::Export(export_name) => analyzer.chunked_export(export_name.as_str()),
  }
}

/// Uncached: the module holding only `export_name` and what it depends on.
pub fn extract_chunk(
  code: &str,
  module_type: ModuleType,
  export_name: &str,
) -> BuildResult<Option<ArcStr>> {
  RouteChunkAnalyzer::new(None, "", code, module_type).chunked_export(export_name)
}

/// Uncached: the module without the chunkable exports among `export_names`.
pub fn omit_chunks(
  code: &str,
  module_type: ModuleType,
  export_names: &[&str],
) -> BuildResult<Option<ArcStr>> {
  RouteChunkAnalyzer::new(None, "", code, module_type).omit_chunked_exports(export_names)
}

pub fn is_root_route_module(options: &NormalizedRouteChunkOptions, id: &ModuleId) -> bool {
  id.stabilize(&options.app_directory) == options.root_route_file
}

pub fn detect_route_chunks_if_enabled(
  cache: Option<&RouteChunkCache>,
  options: &NormalizedRouteChunkOptions,
  id: &ModuleId,
  code: &str,
) -> BuildResult<RouteChunkInfo> {
  if !options.is_enabled() {
    return Ok(RouteChunkInfo::default());
  }
  if is_root_route_module(options, id) {
    tracing::debug!("Skipping route chunk detection for the root route module {}", &**id);
    return Ok(RouteChunkInfo::default());
  }
  // Cheap check before parsing: a module never mentioning any route export has nothing to split.
  if !RouteChunkExportName::ALL.iter().any(|export_name| code.contains(export_name.as_str())) {
    tracing::trace!("No route chunk export mentioned in {}", &**id);
    return Ok(RouteChunkInfo::default());
  }

  let cache_key = id.stabilize(&options.app_directory);
  let info = detect_route_chunks(cache, &cache_key, code, id.module_type())?;
  tracing::debug!("Route chunks of {cache_key}: {:?}", info.chunked_exports);
  Ok(info)
}

/// Analyzes many route modules in parallel against one shared cache.
pub fn detect_route_chunks_for_modules(
  cache: Option<&RouteChunkCache>,
  options: &NormalizedRouteChunkOptions,
  modules: &[(ModuleId, String)],
) -> Vec<BuildResult<RouteChunkInfo>> {
  modules
    .par_iter()
    .map(|(id, code)| detect_route_chunks_if_enabled(cache, options, id, code))
    .collect()
}

/// `None` when splitting is disabled or nothing is left for the chunk.
pub fn get_route_chunk_if_enabled(
  cache: Option<&RouteChunkCache>,
  options: &NormalizedRouteChunkOptions,
  id: &ModuleId,
  chunk_name: RouteChunkName,
  code: &str,
) -> BuildResult<Option<ArcStr>> {
  if !options.is_enabled() {
    return Ok(None);
  }
  let cache_key = id.stabilize(&options.app_directory);
  get_route_chunk_code(cache, &cache_key, code, id.module_type(), chunk_name)
}

/// A route export is valid when the module does not have it or when it was split out.
pub fn route_chunk_validity(
  cache: Option<&RouteChunkCache>,
  options: &NormalizedRouteChunkOptions,
  id: &ModuleId,
  code: &str,
  info: &RouteChunkInfo,
) -> BuildResult<RouteChunkExportFlags> {
  let cache_key = id.stabilize(&options.app_directory);
  let analyzer = RouteChunkAnalyzer::new(cache, &cache_key, code, id.module_type());
  let export_dependencies = analyzer.export_dependencies()?;
  Ok(RouteChunkExportFlags::from_fn(|export_name| {
    !export_dependencies.contains_key(export_name.as_str())
      || info.has_route_chunk_by_export_name[export_name]
  }))
}

/// Fails with every invalid export listed. The root route module is never split,
/// so it always passes.
pub fn validate_route_chunks(
  options: &NormalizedRouteChunkOptions,
  id: &ModuleId,
  valid: RouteChunkExportFlags,
) -> BuildResult<()> {
  if is_root_route_module(options, id) {
    return Ok(());
  }
  let export_names = valid
    .iter()
    .filter(|(_, is_valid)| !is_valid)
    .map(|(export_name, _)| export_name.as_str().to_string())
    .collect::<Vec<_>>();
  if export_names.is_empty() {
    return Ok(());
  }
  let module = id.stabilize(&options.app_directory);
  Err(UnsplittableRouteExports { module, export_names }.into())
}
