use oxc::allocator::Vec as ArenaVec;

pub trait ArenaVecExt<T> {
  /// Like `retain`, but the predicate also receives the element's original index
  /// and may mutate the element it keeps.
  fn retain_enumerated(&mut self, keep: impl FnMut(usize, &mut T) -> bool);
}

impl<T> ArenaVecExt<T> for ArenaVec<'_, T> {
  fn retain_enumerated(&mut self, mut keep: impl FnMut(usize, &mut T) -> bool) {
    // Walk backwards so removals never shift an index that is yet to be visited.
    for idx in (0..self.len()).rev() {
      if !keep(idx, &mut self[idx]) {
        self.remove(idx);
      }
    }
  }
}

#[test]
fn test_retain_enumerated() {
  let allocator = oxc::allocator::Allocator::default();
  let mut items = ArenaVec::from_iter_in([10, 11, 12, 13], &allocator);
  items.retain_enumerated(|idx, item| {
    *item += 1;
    idx % 2 == 0
  });
  assert_eq!(items.iter().copied().collect::<Vec<_>>(), vec![11, 13]);
}
