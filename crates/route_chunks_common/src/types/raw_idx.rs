oxc_index::define_index_type! {
  /// Position of a statement in `Program.body`. Stable for a given source text,
  /// so it identifies the same statement in every parse and clone of that text.
  #[derive(Default)]
  pub struct StmtIdx = u32;
}
