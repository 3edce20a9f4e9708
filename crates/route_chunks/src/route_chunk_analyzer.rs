use std::sync::Arc;

use arcstr::ArcStr;
use itertools::Itertools;
use oxc::span::SourceType;
use route_chunks_common::ModuleType;
use route_chunks_ecmascript::{EcmaAst, EcmaCompiler};
use route_chunks_error::BuildResult;
use rustc_hash::FxHashSet;

use crate::{
  cache::{CacheVersion, RouteChunkCache, try_get_or_compute},
  chunkability::is_chunkable,
  codegen,
  module_analysis::{ExportDependencyMap, build_export_dependencies},
};

/// Route chunk queries against one version of one module.
///
/// Every query goes through the cache (when there is one) under the module's
/// cache key, so repeated queries against unchanged source text are cheap.
pub struct RouteChunkAnalyzer<'a> {
  cache: Option<&'a RouteChunkCache>,
  cache_key: &'a str,
  code: &'a str,
  version: CacheVersion,
  source_type: SourceType,
}

impl<'a> RouteChunkAnalyzer<'a> {
  pub fn new(
    cache: Option<&'a RouteChunkCache>,
    cache_key: &'a str,
    code: &'a str,
    module_type: ModuleType,
  ) -> Self {
    Self {
      cache,
      cache_key,
      code,
      version: CacheVersion::of(code),
      source_type: module_type.source_type(),
    }
  }

  fn key(&self, operation: &str) -> String {
    format!("{}::{operation}", self.cache_key)
  }

  /// The parsed module. Shared between queries, so never mutated.
  pub fn parse(&self) -> BuildResult<Arc<EcmaAst>> {
    try_get_or_compute(self.cache, self.key("codeToAst"), self.version, || {
      EcmaCompiler::parse(self.code, self.source_type)
    })
  }

  pub fn export_dependencies(&self) -> BuildResult<Arc<ExportDependencyMap>> {
    try_get_or_compute(self.cache, self.key("getExportDependencies"), self.version, || {
      let ast = self.parse()?;
      Ok(build_export_dependencies(&ast))
    })
  }

  pub fn has_chunkable_export(&self, export_name: &str) -> BuildResult<bool> {
    let key = self.key(&format!("hasChunkableExport::{export_name}"));
    let chunkable = try_get_or_compute(self.cache, key, self.version, || -> BuildResult<_> {
      Ok(is_chunkable(&*self.export_dependencies()?, export_name))
    })?;
    Ok(*chunkable)
  }

  /// Code of the chunk holding only `export_name`, or `None` if it cannot be split out.
  pub fn chunked_export(&self, export_name: &str) -> BuildResult<Option<ArcStr>> {
    let key = self.key(&format!("getChunkedExport::{export_name}"));
    let code = try_get_or_compute(self.cache, key, self.version, || -> BuildResult<_> {
      if !self.has_chunkable_export(export_name)? {
        return Ok(None);
      }
      let export_dependencies = self.export_dependencies()?;
      let ast = self.parse()?;
      Ok(export_dependencies.get(export_name).map(|dependencies| {
        ArcStr::from(codegen::extract_chunk(&ast, dependencies, export_name))
      }))
    })?;
    Ok((*code).clone())
  }

  /// Code of the module without those of `export_names` that can be split out.
  /// `None` if nothing would be left.
  pub fn omit_chunked_exports(&self, export_names: &[&str]) -> BuildResult<Option<ArcStr>> {
    let key = self.key(&format!("omitChunkedExports::{}", export_names.iter().join(",")));
    let code = try_get_or_compute(self.cache, key, self.version, || -> BuildResult<_> {
      let mut omitted = FxHashSet::default();
      for export_name in export_names {
        if self.has_chunkable_export(export_name)? {
          omitted.insert(*export_name);
        }
      }
      let export_dependencies = self.export_dependencies()?;
      let ast = self.parse()?;
      Ok(codegen::omit_chunked_exports(&ast, &export_dependencies, &omitted).map(ArcStr::from))
    })?;
    Ok((*code).clone())
  }
}
