#![no_main]

use hashes::fast::{CityHash64, CityHash128, city};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(8, input.len()));
  let mut seed = 0u64;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u64) << (i * 8);
  }

  // Every length must stay in bounds; the seeded forms fold the seed in after
  // hashing.
  let _ = city::hash32(data);
  assert_eq!(
    CityHash64::hash_with_seed(seed, data),
    city::hash64_with_seeds(data, 0x9ae1_6a3b_2f90_404f, seed)
  );

  let h128 = CityHash128::hash_with_seed(u128::from(seed), data);
  assert_eq!(h128, city::hash128_with_seed(data, u128::from(seed)));

  #[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
  {
    let r = city::crc::hash_crc256(data);
    if data.len() > 900 {
      assert_eq!(city::crc::hash_crc128(data), u128::from(r[2]) | (u128::from(r[3]) << 64));
    } else {
      assert_eq!(city::crc::hash_crc128(data), city::hash128(data));
    }
  }
});
