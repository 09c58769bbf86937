#![no_main]

use hashes::fast::{FarmHash32, FarmHash64, city, farm, fingerprint};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(4, input.len()));
  let mut seed = 0u32;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u32) << (i * 8);
  }

  // The fingerprints are fixed aliases of the portable selection.
  assert_eq!(fingerprint::fingerprint32(data), FarmHash32::hash(data));
  assert_eq!(FarmHash32::hash_with_seed(seed, data), farm::hash32_with_seed(data, seed));
  assert_eq!(fingerprint::fingerprint128(data), city::hash128(data));
  if data.len() <= 32 {
    assert_eq!(fingerprint::fingerprint64(data), city::hash64(data));
  }

  let _ = FarmHash64::hash_with_seed(u64::from(seed), data);
  let _ = farm::hash128_with_seed(data, u128::from(seed));
});
