use arcstr::ArcStr;
use oxc::semantic::SymbolId;
use oxc_index::IndexVec;
use route_chunks_common::StmtIdx;
use rustc_hash::FxHashMap;

/// A declarator, specifier or whole statement. The unit the reference closure walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartRef {
  pub stmt_idx: StmtIdx,
  pub part_idx: usize,
}

impl PartRef {
  pub fn new(stmt_idx: StmtIdx, part_idx: usize) -> Self {
    Self { stmt_idx, part_idx }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelStmtKind {
  /// One part per import specifier.
  Import,
  /// `export * from "..."`. Nothing to resolve locally, so it has no parts.
  ExportAll,
  ExportDefault,
  /// `export const a = 1, { b } = c;`. One part per declarator.
  ExportVariables,
  /// `export function`, `export class`, TypeScript declarations and `export * as ns from`.
  ExportDeclaration,
  /// `export { a, b as c }`. One part per specifier.
  ExportSpecifiers,
  /// Anything that is neither an import nor an export. Always a single part.
  Plain,
}

impl TopLevelStmtKind {
  pub fn is_module_declaration(self) -> bool {
    !matches!(self, Self::Plain)
  }
}

#[derive(Debug, Default)]
pub struct StmtPartInfo {
  /// Module root scope symbols bound by this part.
  pub declared_symbols: Vec<SymbolId>,
  /// Module root scope symbols read or written anywhere inside this part, nested
  /// functions included.
  pub referenced_symbols: Vec<SymbolId>,
  pub imported_local_name: Option<ArcStr>,
}

#[derive(Debug)]
pub struct StmtInfo {
  pub kind: TopLevelStmtKind,
  pub parts: Vec<StmtPartInfo>,
}

#[derive(Debug, Default)]
pub struct StmtInfos {
  infos: IndexVec<StmtIdx, StmtInfo>,
  declared_parts_by_symbol: FxHashMap<SymbolId, Vec<PartRef>>,
  plain_references_by_symbol: FxHashMap<SymbolId, Vec<PartRef>>,
}

impl StmtInfos {
  pub fn add_stmt_info(&mut self, info: StmtInfo) -> StmtIdx {
    let stmt_idx = self.infos.next_idx();
    for (part_idx, part) in info.parts.iter().enumerate() {
      let part_ref = PartRef::new(stmt_idx, part_idx);
      for symbol_id in &part.declared_symbols {
        self.declared_parts_by_symbol.entry(*symbol_id).or_default().push(part_ref);
      }
      if !info.kind.is_module_declaration() {
        for symbol_id in &part.referenced_symbols {
          self.plain_references_by_symbol.entry(*symbol_id).or_default().push(part_ref);
        }
      }
    }
    self.infos.push(info)
  }

  pub fn get(&self, stmt_idx: StmtIdx) -> &StmtInfo {
    &self.infos[stmt_idx]
  }

  pub fn part(&self, part_ref: PartRef) -> &StmtPartInfo {
    &self.infos[part_ref.stmt_idx].parts[part_ref.part_idx]
  }

  pub fn declared_parts_by_symbol(&self, symbol_id: SymbolId) -> &[PartRef] {
    self.declared_parts_by_symbol.get(&symbol_id).map_or(&[], Vec::as_slice)
  }

  /// Non-module statements that mention the symbol, e.g. `Component.displayName = "Home"`.
  pub fn plain_references_by_symbol(&self, symbol_id: SymbolId) -> &[PartRef] {
    self.plain_references_by_symbol.get(&symbol_id).map_or(&[], Vec::as_slice)
  }

  pub fn len(&self) -> usize {
    self.infos.len()
  }
}
