//! farmhashcc: FarmHash's 128-bit member is CityHash128 v1.1 unchanged. Its
//! unseeded form is pinned as Fingerprint128.

pub(crate) use crate::fast::city::{hash128 as city_hash128, hash128_with_seed as city_hash128_with_seed};

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fast::mix::{high64, low64, uint128};

  #[test]
  fn abc_fingerprint() {
    let h = city_hash128(b"abc");
    assert_eq!(low64(h), 4_143_508_125_394_299_908);
    assert_eq!(high64(h), 11_566_915_719_555_882_565);
  }

  #[test]
  fn long_prefix_becomes_the_seed() {
    let data: [u8; 200] = core::array::from_fn(|i| i as u8);
    let first = u64::from_le_bytes(core::array::from_fn(|i| data[i]));
    let second = u64::from_le_bytes(core::array::from_fn(|i| data[8 + i]));
    let seed = uint128(first, second.wrapping_add(crate::fast::mix::K0));
    assert_eq!(city_hash128(&data), city_hash128_with_seed(&data[16..], seed));
  }
}
