//! farmhashna: the 64-bit FarmHash core. Its unseeded form is pinned as
//! Fingerprint64. Inputs up to 32 bytes go through CityHash64's helpers, so
//! `na` and CityHash64 agree there.

pub(super) use crate::fast::city::{hash_len0to16, hash_len17to32};
use crate::{
  fast::mix::{K0, K1, K2, LongState, hash_len16, hash_len16_mul, rotate, shift_mix, weak_hash_len32_with_seeds},
  util::fetch64,
};

fn hash_len33to64(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let a = fetch64(s, 0).wrapping_mul(K2);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(mul);
  let d = fetch64(s, len - 16).wrapping_mul(K2);
  let y = rotate(a.wrapping_add(b), 43)
    .wrapping_add(rotate(c, 30))
    .wrapping_add(d);
  let z = hash_len16_mul(y, a.wrapping_add(rotate(b.wrapping_add(K2), 18)).wrapping_add(c), mul);
  let e = fetch64(s, 16).wrapping_mul(mul);
  let f = fetch64(s, 24);
  let g = y.wrapping_add(fetch64(s, len - 32)).wrapping_mul(mul);
  let h = z.wrapping_add(fetch64(s, len - 24)).wrapping_mul(mul);
  hash_len16_mul(
    rotate(e.wrapping_add(f), 43)
      .wrapping_add(rotate(g, 30))
      .wrapping_add(h),
    e.wrapping_add(rotate(f.wrapping_add(a), 18)).wrapping_add(g),
    mul,
  )
}

pub(crate) fn hash64(s: &[u8]) -> u64 {
  const SEED: u64 = 81;
  let len = s.len();
  if len <= 32 {
    return if len <= 16 { hash_len0to16(s) } else { hash_len17to32(s) };
  }
  if len <= 64 {
    return hash_len33to64(s);
  }

  let y = SEED.wrapping_mul(K1).wrapping_add(113);
  let z = shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2);
  let mut st = LongState {
    x: SEED.wrapping_mul(K2).wrapping_add(fetch64(s, 0)),
    y,
    z,
    v: (0, 0),
    w: (0, 0),
  };

  // Leaves 1 to 64 bytes for the final round, which re-reads the last 64.
  let end = ((len - 1) / 64) * 64;
  let mut off = 0;
  while off != end {
    st.round(s, off);
    off += 64;
  }

  let LongState {
    mut x,
    mut y,
    mut z,
    mut v,
    mut w,
  } = st;
  let mul = K1.wrapping_add((z & 0xff) << 1);
  let off = len - 64;
  w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
  v.0 = v.0.wrapping_add(w.0);
  w.0 = w.0.wrapping_add(v.0);
  x = rotate(x.wrapping_add(y).wrapping_add(v.0).wrapping_add(fetch64(s, off + 8)), 37).wrapping_mul(mul);
  y = rotate(y.wrapping_add(v.1).wrapping_add(fetch64(s, off + 48)), 42).wrapping_mul(mul);
  x ^= w.1.wrapping_mul(9);
  y = y.wrapping_add(v.0.wrapping_mul(9)).wrapping_add(fetch64(s, off + 40));
  z = rotate(z.wrapping_add(w.0), 33).wrapping_mul(mul);
  v = weak_hash_len32_with_seeds(s, off, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
  w = weak_hash_len32_with_seeds(s, off + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, off + 16)));
  core::mem::swap(&mut z, &mut x);
  hash_len16_mul(
    hash_len16_mul(v.0, w.0, mul)
      .wrapping_add(shift_mix(y).wrapping_mul(K0))
      .wrapping_add(z),
    hash_len16_mul(v.1, w.1, mul).wrapping_add(x),
    mul,
  )
}

pub(crate) fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash_len16(hash64(s).wrapping_sub(seed0), seed1)
}

pub(crate) fn hash64_with_seed(s: &[u8], seed: u64) -> u64 {
  hash64_with_seeds(s, K2, seed)
}
