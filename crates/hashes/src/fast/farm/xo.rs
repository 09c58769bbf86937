//! farmhashxo: the portable FarmHash64 selection. Covers 33 to 96 bytes
//! itself and hands everything else to `na` or `uo`.

use super::{na, uo};
use crate::{
  fast::mix::{K1, K2, rotate, shift_mix},
  util::fetch64,
};

/// Hashes the 32-byte window at `s[off..off + 32]`.
fn h32(s: &[u8], off: usize, mul: u64, seed0: u64, seed1: u64) -> u64 {
  let a = fetch64(s, off).wrapping_mul(K1);
  let b = fetch64(s, off + 8);
  let c = fetch64(s, off + 24).wrapping_mul(mul);
  let d = fetch64(s, off + 16).wrapping_mul(K2);
  let u = rotate(a.wrapping_add(b), 43)
    .wrapping_add(rotate(c, 30))
    .wrapping_add(d)
    .wrapping_add(seed0);
  let v = a
    .wrapping_add(rotate(b.wrapping_add(K2), 18))
    .wrapping_add(c)
    .wrapping_add(seed1);
  let a = shift_mix((u ^ v).wrapping_mul(mul));
  shift_mix((v ^ a).wrapping_mul(mul))
}

fn hash_len33to64(s: &[u8]) -> u64 {
  let len = s.len();
  let mul0 = K2.wrapping_sub(30);
  let mul1 = mul0.wrapping_add(2 * len as u64);
  let h0 = h32(s, 0, mul0, 0, 0);
  let h1 = h32(s, len - 32, mul1, 0, 0);
  h1.wrapping_mul(mul1).wrapping_add(h0).wrapping_mul(mul1)
}

fn hash_len65to96(s: &[u8]) -> u64 {
  let len = s.len();
  let mul0 = K2.wrapping_sub(114);
  let mul1 = mul0.wrapping_add(2 * len as u64);
  let h0 = h32(s, 0, mul0, 0, 0);
  let h1 = h32(s, 32, mul1, 0, 0);
  let h2 = h32(s, len - 32, mul1, h0, h1);
  h2.wrapping_mul(9)
    .wrapping_add(h0 >> 17)
    .wrapping_add(h1 >> 21)
    .wrapping_mul(mul1)
}

pub(super) fn hash64(s: &[u8]) -> u64 {
  match s.len() {
    0..=16 => na::hash_len0to16(s),
    17..=32 => na::hash_len17to32(s),
    33..=64 => hash_len33to64(s),
    65..=96 => hash_len65to96(s),
    97..=256 => na::hash64(s),
    _ => uo::hash64(s),
  }
}
