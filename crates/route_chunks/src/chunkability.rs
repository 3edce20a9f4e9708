use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use crate::module_analysis::ExportDependencyMap;

/// Whether `export_name` can be moved into its own chunk without changing the
/// behavior of any other export.
pub fn is_chunkable(export_dependencies: &ExportDependencyMap, export_name: &str) -> bool {
  let Some(dependencies) = export_dependencies.get(export_name) else {
    return false;
  };
  let others = || export_dependencies.iter().filter(|(name, _)| name.as_str() != export_name);

  // Shared code would either be duplicated into the chunk or disappear from the main module.
  let own_statements = &dependencies.top_level_non_module_statements;
  if others().any(|(_, other)| {
    sets_intersect(&other.top_level_non_module_statements, own_statements)
  }) {
    return false;
  }

  match dependencies.exported_variable_declarators.len() {
    0 => true,
    // Depends on another exported declarator, which has to stay where it is.
    1 => {
      let own_declarators = &dependencies.exported_variable_declarators;
      !others()
        .any(|(_, other)| sets_intersect(&other.exported_variable_declarators, own_declarators))
    }
    _ => false,
  }
}

fn sets_intersect<T, S>(a: &IndexSet<T, S>, b: &IndexSet<T, S>) -> bool
where
  T: Hash + Eq,
  S: BuildHasher,
{
  let (smaller, larger) = if a.len() > b.len() { (b, a) } else { (a, b) };
  smaller.iter().any(|item| larger.contains(item))
}

#[cfg(test)]
mod tests {
  use oxc::span::SourceType;
  use route_chunks_ecmascript::EcmaCompiler;

  use super::*;
  use crate::module_analysis::build_export_dependencies;

  fn chunkable_exports(source: &str) -> Vec<String> {
    let ast = EcmaCompiler::parse(source, SourceType::mjs()).unwrap();
    let deps = build_export_dependencies(&ast);
    deps.keys().filter(|name| is_chunkable(&deps, name)).map(ToString::to_string).collect()
  }

  #[test]
  fn missing_export_is_not_chunkable() {
    let ast = EcmaCompiler::parse("export const a = 1;", SourceType::mjs()).unwrap();
    assert!(!is_chunkable(&build_export_dependencies(&ast), "clientLoader"));
  }

  #[test]
  fn shared_statements_conflict() {
    let chunkable = chunkable_exports(
      "const shared = () => {};
       export const clientAction = async () => shared();
       export const clientLoader = async () => shared();
       export default function Route() { return null; }",
    );
    assert_eq!(chunkable, vec!["default"]);
  }

  #[test]
  fn shared_imports_do_not_conflict() {
    let chunkable = chunkable_exports(
      "import { json } from 'router';
       export const clientAction = async () => json(1);
       export const clientLoader = async () => json(2);",
    );
    assert_eq!(chunkable, vec!["clientAction", "clientLoader"]);
  }

  #[test]
  fn destructured_exports_are_not_chunkable() {
    let chunkable = chunkable_exports(
      "export const { clientAction, clientLoader } = createHandlers();
       export const clientMiddleware = [];",
    );
    assert_eq!(chunkable, vec!["clientMiddleware"]);
  }

  #[test]
  fn depending_on_another_exported_declarator() {
    let chunkable = chunkable_exports(
      "export const clientLoader = async () => null;
       export const clientAction = async () => clientLoader();",
    );
    assert!(chunkable.is_empty());
  }

  #[test]
  fn test_sets_intersect() {
    let a = [1, 2, 3].into_iter().collect::<IndexSet<_>>();
    let b = [3, 4].into_iter().collect::<IndexSet<_>>();
    let c = [5].into_iter().collect::<IndexSet<_>>();
    assert!(sets_intersect(&a, &b));
    assert!(sets_intersect(&b, &a));
    assert!(!sets_intersect(&a, &c));
  }
}
