use itertools::{Either, Itertools};
use oxc::ast::ast::{Declaration, ExportNamedDeclaration, Statement};
use route_chunks_common::StmtIdx;
use route_chunks_ecmascript::{
  ArenaVecExt, DeclarationExt, EcmaAst, EcmaCompiler, ImportSpecifierExt, WithMutFields,
};
use rustc_hash::FxHashSet;

use crate::module_analysis::{ExportDependencies, ExportDependencyMap, stmt_info::PartRef};

/// Prints the module without the exports in `omitted` and the code only they use.
///
/// Every name in `omitted` must be chunkable. Returns `None` when nothing is left.
pub fn omit_chunked_exports(
  ast: &EcmaAst,
  export_dependencies: &ExportDependencyMap,
  omitted: &FxHashSet<&str>,
) -> Option<String> {
  let is_omitted = |name: &str| omitted.contains(name);
  let (omitted_deps, retained_deps): (Vec<&ExportDependencies>, Vec<&ExportDependencies>) =
    export_dependencies.iter().partition_map(|(name, deps)| {
      if is_omitted(name) { Either::Left(deps) } else { Either::Right(deps) }
    });

  let omitted_statements = omitted_deps
    .iter()
    .flat_map(|deps| deps.top_level_non_module_statements.iter().copied())
    .collect::<FxHashSet<StmtIdx>>();
  let omitted_declarators = omitted_deps
    .iter()
    .flat_map(|deps| deps.exported_variable_declarators.iter().copied())
    .collect::<FxHashSet<PartRef>>();

  // Kept while a retained export needs it, even if an omitted one uses it too.
  let is_import_needed = |local_name: &str| {
    retained_deps.iter().any(|deps| deps.imported_identifier_names.contains(local_name))
      || !omitted_deps.iter().any(|deps| deps.imported_identifier_names.contains(local_name))
  };

  let mut ast = ast.clone_with_another_arena();
  let is_empty = ast.program.with_mut(|WithMutFields { program, .. }| {
    program.body.retain_enumerated(|idx, stmt| {
      let stmt_idx = StmtIdx::from_usize(idx);
      if omitted_statements.contains(&stmt_idx) {
        return false;
      }
      match stmt {
        Statement::ImportDeclaration(decl) => match &mut decl.specifiers {
          Some(specifiers) if !specifiers.is_empty() => {
            specifiers.retain_enumerated(|_, specifier| {
              is_import_needed(specifier.local_binding().name.as_str())
            });
            !specifiers.is_empty()
          }
          _ => true,
        },
        Statement::ExportAllDeclaration(decl) => {
          !decl.exported.as_ref().is_some_and(|exported| is_omitted(exported.name().as_str()))
        }
        Statement::ExportDefaultDeclaration(_) => !is_omitted("default"),
        Statement::ExportNamedDeclaration(decl) => {
          let decl: &mut ExportNamedDeclaration = decl;
          match &mut decl.declaration {
            Some(Declaration::VariableDeclaration(var_decl)) => {
              var_decl.declarations.retain_enumerated(|part_idx, _| {
                !omitted_declarators.contains(&PartRef::new(stmt_idx, part_idx))
              });
              !var_decl.declarations.is_empty()
            }
            Some(declaration) => !declaration.declared_name().is_some_and(is_omitted),
            None if decl.specifiers.is_empty() => true,
            None => {
              decl
                .specifiers
                .retain_enumerated(|_, specifier| !is_omitted(specifier.exported.name().as_str()));
              !decl.specifiers.is_empty()
            }
          }
        }
        _ => true,
      }
    });
    program.body.is_empty()
  });

  (!is_empty).then(|| EcmaCompiler::print(&ast))
}

#[cfg(test)]
mod tests {
  use oxc::span::SourceType;

  use super::*;
  use crate::module_analysis::build_export_dependencies;

  fn omit(source: &str, omitted: &[&str]) -> Option<String> {
    let ast = EcmaCompiler::parse(source, SourceType::mjs()).unwrap();
    let deps = build_export_dependencies(&ast);
    omit_chunked_exports(&ast, &deps, &omitted.iter().copied().collect())
  }

  #[test]
  fn removes_exclusive_code_and_unused_imports() {
    let code = omit(
      "import { json, redirect } from 'router';
       import './styles.css';
       const helper = () => redirect('/');
       export const clientAction = async () => helper();
       export const clientLoader = async () => json(1);
       export default function Route() { return null; }",
      &["clientAction"],
    )
    .unwrap();
    assert!(code.contains("import { json } from"));
    assert!(code.contains("styles.css"));
    assert!(code.contains("clientLoader"));
    assert!(code.contains("export default function Route"));
    for dropped in ["redirect", "helper", "clientAction"] {
      assert!(!code.contains(dropped), "{dropped} should not be in {code}");
    }
  }

  #[test]
  fn imports_shared_with_retained_exports_are_kept() {
    let code = omit(
      "import { json } from 'router';
       export const clientAction = async () => json(1);
       export const clientLoader = async () => json(2);",
      &["clientAction"],
    )
    .unwrap();
    assert!(code.contains("import { json } from"));
    assert!(!code.contains("clientAction"));
  }

  #[test]
  fn drops_only_matching_declarators_and_specifiers() {
    let code = omit(
      "export const clientAction = () => 1, loader = () => 2;
       function fallback() { return null; }
       const meta = () => [];
       export { fallback as HydrateFallback, meta };
       export * from './shared';",
      &["clientAction", "HydrateFallback"],
    )
    .unwrap();
    assert!(code.contains("loader = () => 2"));
    assert!(code.contains("meta"));
    assert!(code.contains("export * from"));
    for dropped in ["clientAction", "fallback", "HydrateFallback"] {
      assert!(!code.contains(dropped), "{dropped} should not be in {code}");
    }
  }

  #[test]
  fn empty_module_is_none() {
    assert_eq!(omit("export const clientAction = () => {};", &["clientAction"]), None);
  }
}
