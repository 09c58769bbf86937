//! FarmHash fingerprints: hashes whose values are frozen forever.
//!
//! Unlike [`farm`](super::farm) entry points, these are pinned to one
//! sub-hash each and may be persisted.

use traits::Fingerprint;

use super::farm::{cc_hash128, mk_hash32, na_hash64};

/// Fingerprint32 of `s`.
#[inline]
#[must_use]
pub fn fingerprint32(s: &[u8]) -> u32 {
  mk_hash32(s)
}

/// Fingerprint64 of `s`.
#[inline]
#[must_use]
pub fn fingerprint64(s: &[u8]) -> u64 {
  na_hash64(s)
}

/// Fingerprint128 of `s`, first word in the low 64 bits.
#[inline]
#[must_use]
pub fn fingerprint128(s: &[u8]) -> u128 {
  cc_hash128(s)
}

/// Fingerprint32 (FarmHash `mk`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Fingerprint32;

/// Fingerprint64 (FarmHash `na`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Fingerprint64;

/// Fingerprint128 (FarmHash `cc`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Fingerprint128;

impl Fingerprint for Fingerprint32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn fingerprint(data: &[u8]) -> u32 {
    fingerprint32(data)
  }
}

impl Fingerprint for Fingerprint64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn fingerprint(data: &[u8]) -> u64 {
    fingerprint64(data)
  }
}

impl Fingerprint for Fingerprint128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;

  #[inline]
  fn fingerprint(data: &[u8]) -> u128 {
    fingerprint128(data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fast::mix::{high64, low64};

  #[test]
  fn pinned_values() {
    assert_eq!(Fingerprint32::fingerprint(b"abc"), 795_041_479);
    assert_eq!(Fingerprint64::fingerprint(b"abc"), 2_640_714_258_260_161_385);
    let h = Fingerprint128::fingerprint(b"abc");
    assert_eq!(low64(h), 4_143_508_125_394_299_908);
    assert_eq!(high64(h), 11_566_915_719_555_882_565);
  }

  #[test]
  fn farm64_agrees_with_fingerprint64_outside_xo_bands() {
    let data: [u8; 300] = core::array::from_fn(|i| (i * 13) as u8);
    for len in [0, 7, 16, 31, 97, 200, 256] {
      assert_eq!(crate::fast::farm::hash64(&data[..len]), fingerprint64(&data[..len]), "len={len}");
    }
  }
}
