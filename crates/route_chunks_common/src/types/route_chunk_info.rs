use std::ops::{Index, IndexMut};

use crate::RouteChunkExportName;

/// One flag per [`RouteChunkExportName`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouteChunkExportFlags([bool; 4]);

impl RouteChunkExportFlags {
  pub fn from_fn(mut f: impl FnMut(RouteChunkExportName) -> bool) -> Self {
    Self(RouteChunkExportName::ALL.map(&mut f))
  }

  pub fn iter(&self) -> impl Iterator<Item = (RouteChunkExportName, bool)> + '_ {
    RouteChunkExportName::ALL.into_iter().map(|name| (name, self[name]))
  }
}

impl Index<RouteChunkExportName> for RouteChunkExportFlags {
  type Output = bool;

  fn index(&self, name: RouteChunkExportName) -> &Self::Output {
    &self.0[name as usize]
  }
}

impl IndexMut<RouteChunkExportName> for RouteChunkExportFlags {
  fn index_mut(&mut self, name: RouteChunkExportName) -> &mut Self::Output {
    &mut self.0[name as usize]
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteChunkInfo {
  pub has_route_chunks: bool,
  pub has_route_chunk_by_export_name: RouteChunkExportFlags,
  /// Chunkable exports, in [`RouteChunkExportName::ALL`] order.
  pub chunked_exports: Vec<RouteChunkExportName>,
}

impl RouteChunkInfo {
  pub fn from_flags(flags: RouteChunkExportFlags) -> Self {
    let chunked_exports =
      flags.iter().filter_map(|(name, is_chunked)| is_chunked.then_some(name)).collect::<Vec<_>>();
    Self {
      has_route_chunks: !chunked_exports.is_empty(),
      has_route_chunk_by_export_name: flags,
      chunked_exports,
    }
  }
}

#[test]
fn test_from_flags() {
  let info = RouteChunkInfo::from_flags(RouteChunkExportFlags::from_fn(|name| {
    matches!(name, RouteChunkExportName::HydrateFallback | RouteChunkExportName::ClientAction)
  }));
  assert!(info.has_route_chunks);
  assert_eq!(
    info.chunked_exports,
    vec![RouteChunkExportName::ClientAction, RouteChunkExportName::HydrateFallback]
  );
  assert!(!info.has_route_chunk_by_export_name[RouteChunkExportName::ClientLoader]);

  let info = RouteChunkInfo::from_flags(RouteChunkExportFlags::default());
  assert_eq!(info, RouteChunkInfo::default());
}
