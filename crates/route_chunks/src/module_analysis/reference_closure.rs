use arcstr::ArcStr;
use oxc::semantic::SymbolId;
use route_chunks_common::StmtIdx;
use route_chunks_utils::indexmap::FxIndexSet;
use rustc_hash::FxHashSet;

use super::{
  ExportDependencies,
  stmt_info::{PartRef, StmtInfos, TopLevelStmtKind},
};

struct Context<'a> {
  stmt_infos: &'a StmtInfos,
  visited_parts: FxHashSet<PartRef>,
  visited_symbols: FxHashSet<SymbolId>,
  worklist: Vec<PartRef>,
}

impl Context<'_> {
  fn enqueue(&mut self, part_ref: PartRef) {
    if self.visited_parts.insert(part_ref) {
      self.worklist.push(part_ref);
    }
  }

  fn include_symbol(&mut self, symbol_id: SymbolId) {
    if !self.visited_symbols.insert(symbol_id) {
      return;
    }
    let stmt_infos = self.stmt_infos;
    stmt_infos.declared_parts_by_symbol(symbol_id).iter().for_each(|part| self.enqueue(*part));
    stmt_infos.plain_references_by_symbol(symbol_id).iter().for_each(|part| self.enqueue(*part));
  }

  fn include_part(&mut self, part_ref: PartRef) {
    let part = self.stmt_infos.part(part_ref);
    for symbol_id in part.declared_symbols.iter().chain(&part.referenced_symbols) {
      self.include_symbol(*symbol_id);
    }
  }
}

/// Computes the dependency set of the export bound at `root`.
///
/// This is a reachability walk over parts: a part pulls in every part declaring
/// a symbol it touches, plus every plain statement mentioning that symbol. The
/// visited sets make cycles (mutual recursion, forward references) terminate.
pub fn collect_export_dependencies(
  stmt_infos: &StmtInfos,
  export_stmt_idx: StmtIdx,
  root: PartRef,
) -> ExportDependencies {
  let mut ctx = Context {
    stmt_infos,
    visited_parts: FxHashSet::default(),
    visited_symbols: FxHashSet::default(),
    worklist: vec![],
  };
  ctx.enqueue(root);
  while let Some(part_ref) = ctx.worklist.pop() {
    ctx.include_part(part_ref);
  }

  let mut parts = ctx.visited_parts.into_iter().collect::<Vec<_>>();
  parts.sort_unstable();

  let mut top_level_statements = FxIndexSet::default();
  top_level_statements.insert(export_stmt_idx);
  let mut imported_identifier_names = FxHashSet::<ArcStr>::default();
  let mut exported_variable_declarators = FxIndexSet::default();

  for part_ref in parts {
    top_level_statements.insert(part_ref.stmt_idx);
    match stmt_infos.get(part_ref.stmt_idx).kind {
      TopLevelStmtKind::Import => {
        if let Some(name) = &stmt_infos.part(part_ref).imported_local_name {
          imported_identifier_names.insert(name.clone());
        }
      }
      TopLevelStmtKind::ExportVariables => {
        exported_variable_declarators.insert(part_ref);
      }
      _ => {}
    }
  }
  top_level_statements.sort_unstable();

  let top_level_non_module_statements = top_level_statements
    .iter()
    .copied()
    .filter(|stmt_idx| !stmt_infos.get(*stmt_idx).kind.is_module_declaration())
    .collect();

  ExportDependencies {
    top_level_statements,
    top_level_non_module_statements,
    imported_identifier_names,
    exported_variable_declarators,
  }
}
