use arcstr::ArcStr;
use oxc::{codegen::Codegen, parser::Parser, span::SourceType};
use route_chunks_error::BuildResult;

use crate::ecma_ast::{
  EcmaAst,
  program_cell::{ProgramCell, ProgramCellDependent, ProgramCellOwner},
};

pub struct EcmaCompiler;

impl EcmaCompiler {
  pub fn parse(source: impl Into<ArcStr>, source_type: SourceType) -> BuildResult<EcmaAst> {
    let allocator = oxc::allocator::Allocator::default();
    let owner = ProgramCellOwner { source: source.into(), allocator };
    let program = ProgramCell::try_new(owner, |owner| {
      let ret = Parser::new(&owner.allocator, &owner.source, source_type).parse();
      if ret.panicked || !ret.errors.is_empty() {
        Err(anyhow::anyhow!("Failed to parse, got: {:?}", ret.errors))
      } else {
        Ok(ProgramCellDependent { program: ret.program })
      }
    })?;

    Ok(EcmaAst { program, source_type })
  }

  pub fn print(ast: &EcmaAst) -> String {
    Codegen::new().build(ast.program()).code
  }
}

#[test]
fn basic_test() {
  let ast = EcmaCompiler::parse("const a = 1;", SourceType::mjs()).unwrap();
  assert_eq!(EcmaCompiler::print(&ast), "const a = 1;\n");
}

#[test]
fn parse_error_is_reported() {
  let err = EcmaCompiler::parse("export const = ;", SourceType::mjs()).unwrap_err();
  assert_eq!(err.len(), 1);
  assert!(err[0].to_string().starts_with("Failed to parse"));
}

#[test]
fn clone_is_independent_of_the_original() {
  let ast = EcmaCompiler::parse("const a = 1;\nconst b = 2;", SourceType::mjs()).unwrap();
  let mut cloned = ast.clone_with_another_arena();
  cloned.program.with_mut(|fields| {
    fields.program.body.remove(0);
  });
  assert_eq!(EcmaCompiler::print(&cloned), "const b = 2;\n");
  assert_eq!(EcmaCompiler::print(&ast), "const a = 1;\nconst b = 2;\n");
}
