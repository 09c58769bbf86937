//! CityHash64 and its seeded forms.

use crate::{
  fast::mix::{K0, K1, K2, LongState, hash_len16, hash_len16_mul, rotate, shift_mix, weak_hash_len32_with_seeds},
  util::{fetch32, fetch64},
};

/// Short-input mixer shared with CityHash128 and FarmHash's `na` family.
pub(crate) fn hash_len0to16(s: &[u8]) -> u64 {
  let len = s.len();
  if len >= 8 {
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch64(s, 0).wrapping_add(K2);
    let b = fetch64(s, len - 8);
    let c = rotate(b, 37).wrapping_mul(mul).wrapping_add(a);
    let d = rotate(a, 25).wrapping_add(b).wrapping_mul(mul);
    return hash_len16_mul(c, d, mul);
  }
  if len >= 4 {
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = u64::from(fetch32(s, 0));
    return hash_len16_mul((len as u64).wrapping_add(a << 3), u64::from(fetch32(s, len - 4)), mul);
  }
  if let (Some(&a), Some(&b), Some(&c)) = (s.first(), s.get(len >> 1), s.last()) {
    let y = u32::from(a) + (u32::from(b) << 8);
    let z = len as u32 + (u32::from(c) << 2);
    return shift_mix(u64::from(y).wrapping_mul(K2) ^ u64::from(z).wrapping_mul(K0)).wrapping_mul(K2);
  }
  K2
}

/// 17 to 32 bytes. Also FarmHash's.
pub(crate) fn hash_len17to32(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let a = fetch64(s, 0).wrapping_mul(K1);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(mul);
  let d = fetch64(s, len - 16).wrapping_mul(K2);
  hash_len16_mul(
    rotate(a.wrapping_add(b), 43)
      .wrapping_add(rotate(c, 30))
      .wrapping_add(d),
    a.wrapping_add(rotate(b.wrapping_add(K2), 18)).wrapping_add(c),
    mul,
  )
}

fn hash_len33to64(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let a = fetch64(s, 0).wrapping_mul(K2);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 24);
  let d = fetch64(s, len - 32);
  let e = fetch64(s, 16).wrapping_mul(K2);
  let f = fetch64(s, 24).wrapping_mul(9);
  let g = fetch64(s, len - 8);
  let h = fetch64(s, len - 16).wrapping_mul(mul);
  let u = rotate(a.wrapping_add(g), 43).wrapping_add(rotate(b, 30).wrapping_add(c).wrapping_mul(9));
  let v = (a.wrapping_add(g) ^ d).wrapping_add(f).wrapping_add(1);
  let w = u.wrapping_add(v).wrapping_mul(mul).swap_bytes().wrapping_add(h);
  let x = rotate(e.wrapping_add(f), 42).wrapping_add(c);
  let y = v
    .wrapping_add(w)
    .wrapping_mul(mul)
    .swap_bytes()
    .wrapping_add(g)
    .wrapping_mul(mul);
  let z = e.wrapping_add(f).wrapping_add(c);
  let a = x
    .wrapping_add(z)
    .wrapping_mul(mul)
    .wrapping_add(y)
    .swap_bytes()
    .wrapping_add(b);
  let b = shift_mix(z.wrapping_add(a).wrapping_mul(mul).wrapping_add(d).wrapping_add(h)).wrapping_mul(mul);
  b.wrapping_add(x)
}

/// CityHash64 of `s`.
#[must_use]
pub fn hash64(s: &[u8]) -> u64 {
  let len = s.len();
  if len <= 32 {
    return if len <= 16 { hash_len0to16(s) } else { hash_len17to32(s) };
  }
  if len <= 64 {
    return hash_len33to64(s);
  }

  // The tail is folded in up front from the last 64 bytes, so the loop below
  // only ever reads whole chunks.
  let x = fetch64(s, len - 40);
  let y = fetch64(s, len - 16).wrapping_add(fetch64(s, len - 56));
  let z = hash_len16(fetch64(s, len - 48).wrapping_add(len as u64), fetch64(s, len - 24));
  let v = weak_hash_len32_with_seeds(s, len - 64, len as u64, z);
  let w = weak_hash_len32_with_seeds(s, len - 32, y.wrapping_add(K1), x);
  let mut st = LongState {
    x: x.wrapping_mul(K1).wrapping_add(fetch64(s, 0)),
    y,
    z,
    v,
    w,
  };

  let chunked = (len - 1) & !63;
  let mut off = 0;
  while off < chunked {
    st.round(s, off);
    off += 64;
  }

  let LongState { x, y, z, v, w } = st;
  hash_len16(
    hash_len16(v.0, w.0)
      .wrapping_add(shift_mix(y).wrapping_mul(K1))
      .wrapping_add(z),
    hash_len16(v.1, w.1).wrapping_add(x),
  )
}

/// CityHash64 of `s`, with `seed0` and `seed1` folded into the digest.
#[inline]
#[must_use]
pub fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash_len16(hash64(s).wrapping_sub(seed0), seed1)
}

/// CityHash64 of `s`, with `seed` folded into the digest.
#[inline]
#[must_use]
pub fn hash64_with_seed(s: &[u8], seed: u64) -> u64 {
  hash64_with_seeds(s, K2, seed)
}
