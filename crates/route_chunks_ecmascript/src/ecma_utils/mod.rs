mod arena_vec_ext;
mod ast_ext;

pub use {
  arena_vec_ext::ArenaVecExt,
  ast_ext::{
    binding_pattern_ext::BindingPatternExt, declaration_ext::DeclarationExt,
    import_specifier_ext::ImportSpecifierExt,
  },
};
