use oxc::ast::ast::Declaration;

pub trait DeclarationExt {
  /// Name of a single-binding declaration (`function`, `class`, `enum`, `type`, `interface`).
  /// `None` for variable declarations and the declaration forms that do not bind one identifier.
  fn declared_name(&self) -> Option<&str>;
}

impl DeclarationExt for Declaration<'_> {
  fn declared_name(&self) -> Option<&str> {
    let ident = match self {
      Declaration::FunctionDeclaration(func) => func.id.as_ref()?,
      Declaration::ClassDeclaration(class) => class.id.as_ref()?,
      Declaration::TSEnumDeclaration(decl) => &decl.id,
      Declaration::TSTypeAliasDeclaration(decl) => &decl.id,
      Declaration::TSInterfaceDeclaration(decl) => &decl.id,
      _ => return None,
    };
    Some(ident.name.as_str())
  }
}
