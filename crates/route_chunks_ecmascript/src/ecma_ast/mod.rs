pub mod program_cell;

use std::fmt::Debug;

use arcstr::ArcStr;
use oxc::{
  allocator::{Allocator, CloneIn},
  ast::ast::Program,
  span::SourceType,
};

use self::program_cell::{ProgramCell, ProgramCellDependent, ProgramCellOwner};

/// - To access `&mut ast::Program`, use `ast.program.with_mut(|fields| { fields.program; })`.
/// - Never mutate a shared `EcmaAst`. Take a private copy with
///   [`EcmaAst::clone_with_another_arena`] first. Semantic analysis counts as
///   mutation, as it writes symbol and reference ids into the tree.
pub struct EcmaAst {
  pub program: ProgramCell,
  pub source_type: SourceType,
}

impl EcmaAst {
  pub fn source(&self) -> &ArcStr {
    &self.program.borrow_owner().source
  }

  pub fn program(&self) -> &Program {
    &self.program.borrow_dependent().program
  }

  /// Deep copies the tree into a fresh arena. Semantic ids are not carried over.
  pub fn clone_with_another_arena(&self) -> EcmaAst {
    let owner = ProgramCellOwner { source: self.source().clone(), allocator: Allocator::default() };
    let program = ProgramCell::new(owner, |owner| ProgramCellDependent {
      program: self.program().clone_in(&owner.allocator),
    });
    EcmaAst { program, source_type: self.source_type }
  }
}

impl Debug for EcmaAst {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EcmaAst")
      .field("source", &self.source())
      .field("statements", &self.program().body.len())
      .finish_non_exhaustive()
  }
}

// The arena is only written while the cell is exclusively borrowed through `with_mut`.
unsafe impl Send for EcmaAst {}
unsafe impl Sync for EcmaAst {}
