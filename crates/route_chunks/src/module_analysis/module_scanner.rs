use arcstr::ArcStr;
use oxc::{
  ast::ast::{
    self, Declaration, ExportNamedDeclaration, ImportDeclaration, ModuleExportName, Statement,
  },
  ast_visit::Visit,
  semantic::{Scoping, SymbolId},
};
use route_chunks_common::StmtIdx;
use route_chunks_ecmascript::{BindingPatternExt, DeclarationExt, ImportSpecifierExt};

use super::stmt_info::{PartRef, StmtInfo, StmtInfos, StmtPartInfo, TopLevelStmtKind};

/// How an export is bound, which decides the part its closure starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
  Default,
  Declarator { index: usize },
  Declaration,
  Specifier { index: usize },
}

#[derive(Debug)]
pub struct LocalExport {
  pub name: ArcStr,
  pub stmt_idx: StmtIdx,
  pub kind: ExportKind,
}

impl LocalExport {
  pub fn root_part(&self) -> PartRef {
    let part_idx = match self.kind {
      ExportKind::Default | ExportKind::Declaration => 0,
      ExportKind::Declarator { index } | ExportKind::Specifier { index } => index,
    };
    PartRef::new(self.stmt_idx, part_idx)
  }
}

#[derive(Debug, Default)]
pub struct ScanResult {
  pub stmt_infos: StmtInfos,
  pub exports: Vec<LocalExport>,
}

pub struct ModuleScanner<'me> {
  scoping: &'me Scoping,
  result: ScanResult,
}

impl<'me> ModuleScanner<'me> {
  pub fn new(scoping: &'me Scoping) -> Self {
    Self { scoping, result: ScanResult::default() }
  }

  pub fn scan(mut self, program: &ast::Program<'_>) -> ScanResult {
    for (idx, stmt) in program.body.iter().enumerate() {
      let stmt_idx = StmtIdx::from_usize(idx);
      let info = self.scan_stmt(stmt_idx, stmt);
      self.result.stmt_infos.add_stmt_info(info);
    }
    self.result
  }

  fn scan_stmt(&mut self, stmt_idx: StmtIdx, stmt: &Statement<'_>) -> StmtInfo {
    match stmt {
      Statement::ImportDeclaration(decl) => self.scan_import_decl(decl),
      Statement::ExportAllDeclaration(decl) => match &decl.exported {
        Some(exported) => {
          self.add_export(exported.name().as_str(), stmt_idx, ExportKind::Declaration);
          StmtInfo {
            kind: TopLevelStmtKind::ExportDeclaration,
            parts: vec![StmtPartInfo::default()],
          }
        }
        None => StmtInfo { kind: TopLevelStmtKind::ExportAll, parts: vec![] },
      },
      Statement::ExportDefaultDeclaration(_) => {
        self.add_export("default", stmt_idx, ExportKind::Default);
        StmtInfo {
          kind: TopLevelStmtKind::ExportDefault,
          parts: vec![self.collect(|collector| collector.visit_statement(stmt))],
        }
      }
      Statement::ExportNamedDeclaration(decl) => self.scan_export_named_decl(stmt_idx, decl),
      _ if stmt.as_module_declaration().is_some() => StmtInfo {
        kind: TopLevelStmtKind::ExportDeclaration,
        parts: vec![self.collect(|collector| collector.visit_statement(stmt))],
      },
      _ => StmtInfo {
        kind: TopLevelStmtKind::Plain,
        parts: vec![self.collect(|collector| collector.visit_statement(stmt))],
      },
    }
  }

  fn scan_import_decl(&mut self, decl: &ImportDeclaration<'_>) -> StmtInfo {
    let parts = decl
      .specifiers
      .iter()
      .flatten()
      .map(|specifier| {
        let local = specifier.local_binding();
        let mut part = self.collect(|collector| collector.visit_binding_identifier(local));
        part.imported_local_name = Some(local.name.as_str().into());
        part
      })
      .collect();
    StmtInfo { kind: TopLevelStmtKind::Import, parts }
  }

  fn scan_export_named_decl(
    &mut self,
    stmt_idx: StmtIdx,
    decl: &ExportNamedDeclaration<'_>,
  ) -> StmtInfo {
    match &decl.declaration {
      Some(Declaration::VariableDeclaration(var_decl)) => {
        let mut parts = Vec::with_capacity(var_decl.declarations.len());
        for (index, declarator) in var_decl.declarations.iter().enumerate() {
          for ident in declarator.id.binding_identifiers_in_order() {
            self.add_export(ident.name.as_str(), stmt_idx, ExportKind::Declarator { index });
          }
          parts.push(self.collect(|collector| collector.visit_variable_declarator(declarator)));
        }
        StmtInfo { kind: TopLevelStmtKind::ExportVariables, parts }
      }
      Some(declaration) => {
        if let Some(name) = declaration.declared_name() {
          self.add_export(name, stmt_idx, ExportKind::Declaration);
        }
        StmtInfo {
          kind: TopLevelStmtKind::ExportDeclaration,
          parts: vec![self.collect(|collector| collector.visit_declaration(declaration))],
        }
      }
      None => {
        let mut parts = Vec::with_capacity(decl.specifiers.len());
        for (index, specifier) in decl.specifiers.iter().enumerate() {
          self.add_export(specifier.exported.name().as_str(), stmt_idx, ExportKind::Specifier {
            index,
          });
          // `export { a } from "./mod"` names a binding of another module.
          let part = match &specifier.local {
            ModuleExportName::IdentifierReference(ident) if decl.source.is_none() => {
              self.collect(|collector| collector.visit_identifier_reference(ident))
            }
            _ => StmtPartInfo::default(),
          };
          parts.push(part);
        }
        StmtInfo { kind: TopLevelStmtKind::ExportSpecifiers, parts }
      }
    }
  }

  fn add_export(&mut self, name: &str, stmt_idx: StmtIdx, kind: ExportKind) {
    self.result.exports.push(LocalExport { name: name.into(), stmt_idx, kind });
  }

  fn collect(&self, visit: impl FnOnce(&mut SymbolCollector<'me>)) -> StmtPartInfo {
    let mut collector = SymbolCollector { scoping: self.scoping, part: StmtPartInfo::default() };
    visit(&mut collector);
    collector.part
  }
}

/// Records the module root scope symbols a part declares and references.
struct SymbolCollector<'me> {
  scoping: &'me Scoping,
  part: StmtPartInfo,
}

impl SymbolCollector<'_> {
  fn is_root_symbol(&self, symbol_id: SymbolId) -> bool {
    self.scoping.symbol_scope_id(symbol_id) == self.scoping.root_scope_id()
  }
}

impl<'ast> Visit<'ast> for SymbolCollector<'_> {
  fn visit_binding_identifier(&mut self, ident: &ast::BindingIdentifier<'ast>) {
    if let Some(symbol_id) = ident.symbol_id.get() {
      if self.is_root_symbol(symbol_id) {
        self.part.declared_symbols.push(symbol_id);
      }
    }
  }

  fn visit_identifier_reference(&mut self, ident: &ast::IdentifierReference<'ast>) {
    let Some(reference_id) = ident.reference_id.get() else {
      return;
    };
    if let Some(symbol_id) = self.scoping.get_reference(reference_id).symbol_id() {
      if self.is_root_symbol(symbol_id) {
        self.part.referenced_symbols.push(symbol_id);
      }
    }
  }
}
