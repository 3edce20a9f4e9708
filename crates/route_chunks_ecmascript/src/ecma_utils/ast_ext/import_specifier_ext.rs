use oxc::ast::ast::{BindingIdentifier, ImportDeclarationSpecifier};

pub trait ImportSpecifierExt<'ast> {
  fn local_binding(&self) -> &BindingIdentifier<'ast>;
}

impl<'ast> ImportSpecifierExt<'ast> for ImportDeclarationSpecifier<'ast> {
  fn local_binding(&self) -> &BindingIdentifier<'ast> {
    match self {
      ImportDeclarationSpecifier::ImportSpecifier(specifier) => &specifier.local,
      ImportDeclarationSpecifier::ImportDefaultSpecifier(specifier) => &specifier.local,
      ImportDeclarationSpecifier::ImportNamespaceSpecifier(specifier) => &specifier.local,
    }
  }
}
