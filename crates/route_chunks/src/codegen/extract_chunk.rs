use oxc::ast::ast::{Declaration, ExportNamedDeclaration, Statement};
use route_chunks_common::StmtIdx;
use route_chunks_ecmascript::{
  ArenaVecExt, DeclarationExt, EcmaAst, EcmaCompiler, ImportSpecifierExt, WithMutFields,
};

use crate::module_analysis::{ExportDependencies, stmt_info::PartRef};

/// Prints a module holding `export_name` and nothing but what it needs.
pub fn extract_chunk(
  ast: &EcmaAst,
  dependencies: &ExportDependencies,
  export_name: &str,
) -> String {
  let mut ast = ast.clone_with_another_arena();

  ast.program.with_mut(|WithMutFields { program, .. }| {
    program.body.retain_enumerated(|idx, stmt| {
      let stmt_idx = StmtIdx::from_usize(idx);
      if !dependencies.top_level_statements.contains(&stmt_idx) {
        return false;
      }
      match stmt {
        Statement::ImportDeclaration(decl) => {
          let Some(specifiers) = &mut decl.specifiers else {
            return false;
          };
          let imported_names = &dependencies.imported_identifier_names;
          specifiers.retain_enumerated(|_, specifier| {
            imported_names.contains(specifier.local_binding().name.as_str())
          });
          !specifiers.is_empty()
        }
        Statement::ExportAllDeclaration(decl) => {
          decl.exported.as_ref().is_some_and(|exported| exported.name() == export_name)
        }
        Statement::ExportDefaultDeclaration(_) => export_name == "default",
        Statement::ExportNamedDeclaration(decl) => {
          let decl: &mut ExportNamedDeclaration = decl;
          match &mut decl.declaration {
            Some(Declaration::VariableDeclaration(var_decl)) => {
              let declarators = &dependencies.exported_variable_declarators;
              var_decl.declarations.retain_enumerated(|part_idx, _| {
                declarators.contains(&PartRef::new(stmt_idx, part_idx))
              });
              !var_decl.declarations.is_empty()
            }
            Some(declaration) => declaration.declared_name() == Some(export_name),
            None => {
              decl
                .specifiers
                .retain_enumerated(|_, specifier| specifier.exported.name() == export_name);
              !decl.specifiers.is_empty()
            }
          }
        }
        _ => true,
      }
    });
  });

  EcmaCompiler::print(&ast)
}

#[cfg(test)]
mod tests {
  use oxc::span::SourceType;
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::module_analysis::build_export_dependencies;

  fn extract(source: &str, export_name: &str) -> String {
    let ast = EcmaCompiler::parse(source, SourceType::mjs()).unwrap();
    let deps = build_export_dependencies(&ast);
    extract_chunk(&ast, &deps[export_name], export_name)
  }

  #[test]
  fn keeps_only_the_closure() {
    let code = extract(
      "import { json, redirect } from 'router';
       import './styles.css';
       const helper = () => json(1);
       export const clientLoader = async () => helper();
       export const clientAction = async () => redirect('/');
       export default function Route() { return null; }",
      "clientLoader",
    );
    assert!(code.contains("import { json } from"));
    assert!(code.contains("const helper = () => json(1);"));
    assert!(code.contains("export const clientLoader = async () => helper();"));
    for dropped in ["redirect", "styles.css", "clientAction", "Route"] {
      assert!(!code.contains(dropped), "{dropped} should not be in {code}");
    }
  }

  #[test]
  fn drops_sibling_declarators_and_specifiers() {
    let code = extract(
      "export const clientLoader = () => 1, clientAction = () => 2;
       const a = 1, b = 2;
       export { a as HydrateFallback, b };",
      "HydrateFallback",
    );
    assert!(code.contains("const a = 1, b = 2;"));
    assert!(code.contains("a as HydrateFallback"));
    assert!(!code.contains("clientLoader"));
    assert!(!code.contains("export { a as HydrateFallback, b }"));

    let code =
      extract("export const clientLoader = () => 1, clientAction = () => 2;", "clientAction");
    assert_eq!(code.trim(), "export const clientAction = () => 2;");
  }

  #[test]
  fn default_export_keeps_its_property_assignments() {
    let code = extract(
      "function Route() { return null; }
       Route.displayName = 'Route';
       export default Route;",
      "default",
    );
    assert!(code.contains("Route.displayName"));
    assert!(code.contains("export default Route"));
  }
}
