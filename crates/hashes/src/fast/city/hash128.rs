//! CityHash128 and CityHash128WithSeed.

#![allow(clippy::indexing_slicing)] // Seed-prefix slicing after explicit length checks

use super::hash64::hash_len0to16;
use crate::{
  fast::mix::{K0, K1, LongState, hash_len16, high64, low64, rotate, shift_mix, uint128, weak_hash_len32_with_seeds},
  util::fetch64,
};

/// CityMurmur: the short-input (< 128 bytes) path of CityHash128.
fn city_murmur(s: &[u8], seed: u128) -> u128 {
  let len = s.len();
  let mut a = low64(seed);
  let mut b = high64(seed);
  let mut c;
  let mut d;

  if len <= 16 {
    a = shift_mix(a.wrapping_mul(K1)).wrapping_mul(K1);
    c = b.wrapping_mul(K1).wrapping_add(hash_len0to16(s));
    d = shift_mix(a.wrapping_add(if len >= 8 { fetch64(s, 0) } else { c }));
  } else {
    c = hash_len16(fetch64(s, len - 8).wrapping_add(K1), a);
    d = hash_len16(b.wrapping_add(len as u64), c.wrapping_add(fetch64(s, len - 16)));
    a = a.wrapping_add(d);
    // 16-byte strides while more than 16 bytes remain past the stride start.
    let mut off = 0;
    loop {
      a ^= shift_mix(fetch64(s, off).wrapping_mul(K1)).wrapping_mul(K1);
      a = a.wrapping_mul(K1);
      b ^= a;
      c ^= shift_mix(fetch64(s, off + 8).wrapping_mul(K1)).wrapping_mul(K1);
      c = c.wrapping_mul(K1);
      d ^= c;
      off += 16;
      if off + 16 >= len {
        break;
      }
    }
  }

  a = hash_len16(a, c);
  b = hash_len16(d, b);
  uint128(a ^ b, hash_len16(b, a))
}

/// CityHash128 of `s` with a 128-bit `seed` (first word in the low 64 bits).
#[must_use]
pub fn hash128_with_seed(s: &[u8], seed: u128) -> u128 {
  let mut len = s.len();
  if len < 128 {
    return city_murmur(s, seed);
  }

  let x = low64(seed);
  let y = high64(seed);
  let z = (len as u64).wrapping_mul(K1);
  let vf = rotate(y ^ K1, 49).wrapping_mul(K1).wrapping_add(fetch64(s, 0));
  let vs = rotate(vf, 42).wrapping_mul(K1).wrapping_add(fetch64(s, 8));
  let wf = rotate(y.wrapping_add(z), 35).wrapping_mul(K1).wrapping_add(x);
  let ws = rotate(x.wrapping_add(fetch64(s, 88)), 53).wrapping_mul(K1);
  let mut st = LongState {
    x,
    y,
    z,
    v: (vf, vs),
    w: (wf, ws),
  };

  // Two 64-byte rounds per iteration.
  let mut off = 0;
  loop {
    st.round(s, off);
    st.round(s, off + 64);
    off += 128;
    len -= 128;
    if len < 128 {
      break;
    }
  }

  let LongState {
    mut x,
    mut y,
    mut z,
    mut v,
    mut w,
  } = st;
  x = x.wrapping_add(rotate(v.0.wrapping_add(z), 49).wrapping_mul(K0));
  y = y.wrapping_mul(K0).wrapping_add(rotate(w.1, 37));
  z = z.wrapping_mul(K0).wrapping_add(rotate(w.0, 27));
  w.0 = w.0.wrapping_mul(9);
  v.0 = v.0.wrapping_mul(K0);

  // Up to 127 tail bytes, consumed 32 at a time from the end. The last pass
  // may reach back into bytes the chunk loop already covered.
  let end = off + len;
  let mut tail_done = 0;
  while tail_done < len {
    tail_done += 32;
    let at = end - tail_done;
    y = rotate(x.wrapping_add(y), 42).wrapping_mul(K0).wrapping_add(v.1);
    w.0 = w.0.wrapping_add(fetch64(s, at + 16));
    x = x.wrapping_mul(K0).wrapping_add(w.0);
    z = z.wrapping_add(w.1).wrapping_add(fetch64(s, at));
    w.1 = w.1.wrapping_add(v.0);
    v = weak_hash_len32_with_seeds(s, at, v.0.wrapping_add(z), v.1);
    v.0 = v.0.wrapping_mul(K0);
  }

  x = hash_len16(x, v.0);
  y = hash_len16(y.wrapping_add(z), w.0);
  uint128(
    hash_len16(x.wrapping_add(v.1), w.1).wrapping_add(y),
    hash_len16(x.wrapping_add(w.1), y.wrapping_add(v.1)),
  )
}

/// CityHash128 of `s`. Also pinned as Fingerprint128.
#[must_use]
pub fn hash128(s: &[u8]) -> u128 {
  if s.len() >= 16 {
    hash128_with_seed(&s[16..], uint128(fetch64(s, 0), fetch64(s, 8).wrapping_add(K0)))
  } else {
    hash128_with_seed(s, uint128(K0, K1))
  }
}
