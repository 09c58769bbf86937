//! Inputs and seeds shared by the known-answer tests.
#![allow(dead_code)]

pub const SEED64: u64 = 0x0123_4567_89ab_cdef;
pub const SEED0: u64 = 1_234_567;
pub const SEED1: u64 = 0xc3a5_c85c_97cb_3127;
pub const SEED32: u32 = 0x89ab_cdef;

/// The byte stream the vectors were generated from: the top byte of a 64-bit
/// LCG (Knuth's MMIX constants) started from the fractional digits of pi.
pub fn lcg_bytes(len: usize) -> Vec<u8> {
  let mut x: u64 = 0x243f_6a88_85a3_08d3;
  (0..len)
    .map(|_| {
      x = x
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
      (x >> 56) as u8
    })
    .collect()
}

/// Splits a core 128-bit digest into its `(first, second)` words.
pub fn pair(h: u128) -> (u64, u64) {
  (h as u64, (h >> 64) as u64)
}

/// `(SEED0, SEED1)` packed as a core 128-bit seed.
pub fn seed128() -> u128 {
  u128::from(SEED0) | (u128::from(SEED1) << 64)
}
