pub mod binding_pattern_ext;
pub mod declaration_ext;
pub mod import_specifier_ext;
