//! farmhashuo: the long-input (> 256 bytes) path of FarmHash64.

use super::na;
use crate::{
  fast::mix::{K2, hash_len16_mul, rotate, shift_mix, weak_hash_len32_with_seeds},
  util::fetch64,
};

#[inline(always)]
fn h(x: u64, y: u64, mul: u64, r: u32) -> u64 {
  let a = shift_mix((x ^ y).wrapping_mul(mul));
  let b = (y ^ a).wrapping_mul(mul);
  rotate(b, r).wrapping_mul(mul)
}

pub(super) fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
  let len = s.len();
  if len <= 64 {
    return na::hash64_with_seeds(s, seed0, seed1);
  }

  let mut x = seed0;
  let mut y = seed1.wrapping_mul(K2).wrapping_add(113);
  let mut z = shift_mix(y.wrapping_mul(K2)).wrapping_mul(K2);
  let mut v = (seed0, seed1);
  let mut w = (0u64, 0u64);
  let mut u = x.wrapping_sub(z);
  x = x.wrapping_mul(K2);
  let mul = K2.wrapping_add(u & 0x82);

  let end = ((len - 1) / 64) * 64;
  let mut off = 0;
  while off != end {
    let a0 = fetch64(s, off);
    let a1 = fetch64(s, off + 8);
    let a2 = fetch64(s, off + 16);
    let a3 = fetch64(s, off + 24);
    let a4 = fetch64(s, off + 32);
    let a5 = fetch64(s, off + 40);
    let a6 = fetch64(s, off + 48);
    let a7 = fetch64(s, off + 56);
    x = x.wrapping_add(a0.wrapping_add(a1));
    y = y.wrapping_add(a2);
    z = z.wrapping_add(a3);
    v.0 = v.0.wrapping_add(a4);
    v.1 = v.1.wrapping_add(a5.wrapping_add(a1));
    w.0 = w.0.wrapping_add(a6);
    w.1 = w.1.wrapping_add(a7);

    x = rotate(x, 26).wrapping_mul(9);
    y = rotate(y, 29);
    z = z.wrapping_mul(mul);
    v.0 = rotate(v.0, 33);
    v.1 = rotate(v.1, 30);
    w.0 = (w.0 ^ x).wrapping_mul(9);
    z = rotate(z, 32).wrapping_add(w.1);
    w.1 = w.1.wrapping_add(z);
    z = z.wrapping_mul(9);
    core::mem::swap(&mut u, &mut y);

    z = z.wrapping_add(a0.wrapping_add(a6));
    v.0 = v.0.wrapping_add(a2);
    v.1 = v.1.wrapping_add(a3);
    w.0 = w.0.wrapping_add(a4);
    w.1 = w.1.wrapping_add(a5.wrapping_add(a6));
    x = x.wrapping_add(a1);
    y = y.wrapping_add(a7);

    y = y.wrapping_add(v.0);
    v.0 = v.0.wrapping_add(x.wrapping_sub(y));
    v.1 = v.1.wrapping_add(w.0);
    w.0 = w.0.wrapping_add(v.1);
    w.1 = w.1.wrapping_add(x.wrapping_sub(y));
    x = x.wrapping_add(w.1);
    w.1 = rotate(w.1, 34);
    core::mem::swap(&mut u, &mut z);
    off += 64;
  }

  // Final round over the last 64 bytes, overlapping the loop when needed.
  let off = len - 64;
  u = u.wrapping_mul(9);
  v.1 = rotate(v.1, 28);
  v.0 = rotate(v.0, 20);
  w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
  u = u.wrapping_add(y);
  y = y.wrapping_add(u);
  x = rotate(y.wrapping_sub(x).wrapping_add(v.0).wrapping_add(fetch64(s, off + 8)), 37).wrapping_mul(mul);
  y = rotate(y ^ v.1 ^ fetch64(s, off + 48), 42).wrapping_mul(mul);
  x ^= w.1.wrapping_mul(9);
  y = y.wrapping_add(v.0).wrapping_add(fetch64(s, off + 40));
  z = rotate(z.wrapping_add(w.0), 33).wrapping_mul(mul);
  v = weak_hash_len32_with_seeds(s, off, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
  w = weak_hash_len32_with_seeds(s, off + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, off + 16)));
  h(
    hash_len16_mul(v.0.wrapping_add(x), w.0 ^ y, mul)
      .wrapping_add(z)
      .wrapping_sub(u),
    h(v.1.wrapping_add(y), w.1.wrapping_add(z), K2, 30) ^ x,
    K2,
    31,
  )
}

pub(super) fn hash64(s: &[u8]) -> u64 {
  if s.len() <= 64 {
    na::hash64(s)
  } else {
    hash64_with_seeds(s, 81, 0)
  }
}
