mod module_scanner;
mod reference_closure;
pub mod stmt_info;

use arcstr::ArcStr;
use oxc::semantic::SemanticBuilder;
use route_chunks_common::StmtIdx;
use route_chunks_ecmascript::EcmaAst;
use route_chunks_utils::indexmap::{FxIndexMap, FxIndexSet};
use rustc_hash::FxHashSet;

use self::{
  module_scanner::ModuleScanner, reference_closure::collect_export_dependencies,
  stmt_info::PartRef,
};

/// Everything needed to evaluate one export on its own.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportDependencies {
  /// The exporting statement plus every statement its closure reaches.
  pub top_level_statements: FxIndexSet<StmtIdx>,
  /// `top_level_statements` without imports and exports. Two exports sharing one
  /// of these cannot be separated.
  pub top_level_non_module_statements: FxIndexSet<StmtIdx>,
  pub imported_identifier_names: FxHashSet<ArcStr>,
  /// Declarators of `export const`/`export let` statements reached by the closure,
  /// the export's own declarator included.
  pub exported_variable_declarators: FxIndexSet<PartRef>,
}

/// Export name to its dependency set, in source order.
pub type ExportDependencyMap = FxIndexMap<ArcStr, ExportDependencies>;

/// Builds the dependency set of every export of the module.
///
/// Works on a private copy of `ast`: semantic analysis writes symbol and
/// reference ids into the tree, and the cached tree must stay untouched.
pub fn build_export_dependencies(ast: &EcmaAst) -> ExportDependencyMap {
  let mut ast = ast.clone_with_another_arena();

  let scoping = ast.program.with_mut(|fields| {
    let ret = SemanticBuilder::new().build(fields.program);
    if !ret.errors.is_empty() {
      tracing::debug!("Semantic analysis reported {} diagnostic(s)", ret.errors.len());
    }
    ret.semantic.into_scoping()
  });

  let scan_result = ModuleScanner::new(&scoping).scan(ast.program());

  let mut export_dependencies = ExportDependencyMap::default();
  for export in &scan_result.exports {
    let dependencies =
      collect_export_dependencies(&scan_result.stmt_infos, export.stmt_idx, export.root_part());
    export_dependencies.insert(export.name.clone(), dependencies);
  }

  tracing::trace!(
    "Collected dependencies of {} export(s) over {} statement(s)",
    export_dependencies.len(),
    scan_result.stmt_infos.len()
  );
  export_dependencies
}

#[cfg(test)]
mod tests {
  use oxc::span::SourceType;
  use route_chunks_ecmascript::EcmaCompiler;

  use super::*;

  fn analyze(source: &str) -> ExportDependencyMap {
    let ast = EcmaCompiler::parse(source, SourceType::mjs()).unwrap();
    build_export_dependencies(&ast)
  }

  fn stmts(indices: &[usize]) -> FxIndexSet<StmtIdx> {
    indices.iter().copied().map(StmtIdx::from_usize).collect()
  }

  #[test]
  fn every_export_has_dependencies() {
    let deps = analyze(
      "export const a = 1, b = 2;
       export function c() {}
       export default class {}
       const d = 1;
       export { d, d as e };
       export * as f from './f';
       export * from './g';",
    );
    let names = deps.keys().map(ArcStr::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "b", "c", "default", "d", "e", "f"]);
  }

  #[test]
  fn closure_follows_references_transitively() {
    let deps = analyze(
      "import { json } from 'router';
       const base = 1;
       const helper = () => base + 1;
       export const clientLoader = () => json(helper());
       export function HydrateFallback() { return null; }",
    );
    let loader = &deps["clientLoader"];
    assert_eq!(loader.top_level_statements, stmts(&[0, 1, 2, 3]));
    assert_eq!(loader.top_level_non_module_statements, stmts(&[1, 2]));
    assert!(loader.imported_identifier_names.contains("json"));
    assert_eq!(loader.exported_variable_declarators.len(), 1);

    let fallback = &deps["HydrateFallback"];
    assert_eq!(fallback.top_level_statements, stmts(&[4]));
    assert!(fallback.top_level_non_module_statements.is_empty());
    assert!(fallback.exported_variable_declarators.is_empty());
  }

  #[test]
  fn property_assignments_after_the_declaration_are_included() {
    let deps = analyze(
      "function Route() { return null; }
       Route.displayName = 'Route';
       export default Route;",
    );
    assert_eq!(deps["default"].top_level_non_module_statements, stmts(&[0, 1]));
  }

  #[test]
  fn cyclic_references_terminate() {
    let deps = analyze(
      "function isEven(n) { return n === 0 ? true : isOdd(n - 1); }
       function isOdd(n) { return n === 0 ? false : isEven(n - 1); }
       export const clientAction = () => isEven(2);",
    );
    assert_eq!(deps["clientAction"].top_level_non_module_statements, stmts(&[0, 1]));
  }

  #[test]
  fn nested_scopes_do_not_leak_into_the_closure() {
    let deps = analyze(
      "const value = 1;
       export const clientAction = () => { const value = 2; return value; };",
    );
    assert!(deps["clientAction"].top_level_non_module_statements.is_empty());
  }

  #[test]
  fn destructured_exports_share_their_declarator() {
    let deps = analyze("export const { a, b: [c, ...d] } = obj;");
    let names = deps.keys().map(ArcStr::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "c", "d"]);
    assert_eq!(deps["a"].exported_variable_declarators, deps["d"].exported_variable_declarators);
  }

  #[test]
  fn re_exports_from_other_modules_have_no_local_dependencies() {
    let deps = analyze("const clientLoader = 1; export { clientLoader } from './loader';");
    assert_eq!(deps["clientLoader"].top_level_statements, stmts(&[1]));
  }
}
