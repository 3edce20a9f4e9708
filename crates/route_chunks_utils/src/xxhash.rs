use xxhash_rust::xxh3::xxh3_128;

/// 128-bit content hash, used as the version token of cached analysis results.
pub fn xxhash_128(input: &[u8]) -> u128 {
  xxh3_128(input)
}

#[test]
fn test_xxhash_128() {
  assert_eq!(xxhash_128(b"export const a = 1;"), xxhash_128(b"export const a = 1;"));
  assert_ne!(xxhash_128(b"export const a = 1;"), xxhash_128(b"export const a = 2;"));
}
