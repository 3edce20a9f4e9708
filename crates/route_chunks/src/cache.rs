use std::{any::Any, fmt::Debug, sync::Arc};

use dashmap::DashMap;
use route_chunks_utils::xxhash::xxhash_128;

/// Content hash of the source text a cached value was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheVersion(u128);

impl CacheVersion {
  pub fn of(source: &str) -> Self {
    Self(xxhash_128(source.as_bytes()))
  }
}

struct CacheEntry {
  version: CacheVersion,
  value: Arc<dyn Any + Send + Sync>,
}

/// Memoizes route chunk analysis across calls.
///
/// Create one per build or dev session and pass it to every call. Entries are
/// keyed by `<cache key>::<operation>[::<params>]` and are replaced as soon as
/// the source text of the module changes.
#[derive(Default)]
pub struct RouteChunkCache {
  entries: DashMap<String, CacheEntry>,
}

impl RouteChunkCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn clear(&self) {
    self.entries.clear();
  }

  fn get<T: Send + Sync + 'static>(&self, key: &str, version: CacheVersion) -> Option<Arc<T>> {
    let entry = self.entries.get(key)?;
    if entry.version != version {
      return None;
    }
    Arc::clone(&entry.value).downcast::<T>().ok()
  }

  fn insert<T: Send + Sync + 'static>(&self, key: String, version: CacheVersion, value: Arc<T>) {
    self.entries.insert(key, CacheEntry { version, value });
  }
}

impl Debug for RouteChunkCache {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RouteChunkCache").field("entries", &self.entries.len()).finish()
  }
}

/// Returns the value cached under `key` if it was computed from the same source
/// version, otherwise computes and stores it. Without a cache it always computes.
///
/// No lock is held while `compute` runs, so it may read the cache itself.
/// Concurrent misses compute the same value and the last write wins.
pub fn get_or_compute<T: Send + Sync + 'static>(
  cache: Option<&RouteChunkCache>,
  key: String,
  version: CacheVersion,
  compute: impl FnOnce() -> T,
) -> Arc<T> {
  let Some(cache) = cache else {
    return Arc::new(compute());
  };
  if let Some(value) = cache.get(&key, version) {
    tracing::trace!("Route chunk cache hit: {key}");
    return value;
  }
  tracing::trace!("Route chunk cache miss: {key}");
  let value = Arc::new(compute());
  cache.insert(key, version, Arc::clone(&value));
  value
}

/// Like [`get_or_compute`], but failures are returned and never cached.
pub fn try_get_or_compute<T: Send + Sync + 'static, E>(
  cache: Option<&RouteChunkCache>,
  key: String,
  version: CacheVersion,
  compute: impl FnOnce() -> Result<T, E>,
) -> Result<Arc<T>, E> {
  let Some(cache) = cache else {
    return compute().map(Arc::new);
  };
  if let Some(value) = cache.get(&key, version) {
    tracing::trace!("Route chunk cache hit: {key}");
    return Ok(value);
  }
  tracing::trace!("Route chunk cache miss: {key}");
  let value = Arc::new(compute()?);
  cache.insert(key, version, Arc::clone(&value));
  Ok(value)
}

#[test]
fn test_get_or_compute() {
  let cache = RouteChunkCache::new();
  let v1 = CacheVersion::of("export const a = 1;");
  let v2 = CacheVersion::of("export const a = 2;");

  let first = get_or_compute(Some(&cache), "a::op".to_string(), v1, || 1);
  let second = get_or_compute(Some(&cache), "a::op".to_string(), v1, || 10);
  assert!(Arc::ptr_eq(&first, &second));
  assert_eq!(*second, 1);

  let recomputed = get_or_compute(Some(&cache), "a::op".to_string(), v2, || 2);
  assert_eq!(*recomputed, 2);
  assert_eq!(cache.len(), 1);

  let uncached = get_or_compute(None, "a::op".to_string(), v2, || 3);
  assert_eq!(*uncached, 3);
}

#[test]
fn test_try_get_or_compute_does_not_cache_errors() {
  let cache = RouteChunkCache::new();
  let version = CacheVersion::of("");
  let failed = try_get_or_compute::<i32, _>(Some(&cache), "a::op".to_string(), version, || Err(()));
  assert!(failed.is_err());
  assert!(cache.is_empty());

  let value = try_get_or_compute::<_, ()>(Some(&cache), "a::op".to_string(), version, || Ok(1));
  assert_eq!(value.map(|value| *value), Ok(1));
  assert_eq!(cache.len(), 1);
}
