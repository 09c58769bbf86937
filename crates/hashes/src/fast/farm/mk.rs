//! farmhashmk: the portable 32-bit FarmHash, also pinned as Fingerprint32.

#![allow(clippy::indexing_slicing)] // Seeded split at a checked 24-byte boundary

use crate::{
  fast::mix::{C1, finish32, fmix, mur, mur_step, rotate32, scramble32},
  util::fetch32,
};

fn hash32_len13to24(s: &[u8], seed: u32) -> u32 {
  let len = s.len();
  let mut a = fetch32(s, (len >> 1) - 4);
  let b = fetch32(s, 4);
  let c = fetch32(s, len - 8);
  let d = fetch32(s, len >> 1);
  let e = fetch32(s, 0);
  let f = fetch32(s, len - 4);
  let mut h = d.wrapping_mul(C1).wrapping_add(len as u32).wrapping_add(seed);
  a = rotate32(a, 12).wrapping_add(f);
  h = mur(c, h).wrapping_add(a);
  a = rotate32(a, 3).wrapping_add(c);
  h = mur(e, h).wrapping_add(a);
  a = rotate32(a.wrapping_add(f), 12).wrapping_add(d);
  h = mur(b ^ seed, h).wrapping_add(a);
  fmix(h)
}

fn hash32_len0to4(s: &[u8], seed: u32) -> u32 {
  let mut b = seed;
  let mut c: u32 = 9;
  for &byte in s {
    // Signed char semantics, as in CityHash32.
    b = b.wrapping_mul(C1).wrapping_add(byte as i8 as u32);
    c ^= b;
  }
  fmix(mur(b, mur(s.len() as u32, c)))
}

fn hash32_len5to12(s: &[u8], seed: u32) -> u32 {
  let len = s.len();
  let mut a = len as u32;
  let mut b = (len as u32).wrapping_mul(5);
  let mut c: u32 = 9;
  let d = b.wrapping_add(seed);
  a = a.wrapping_add(fetch32(s, 0));
  b = b.wrapping_add(fetch32(s, len - 4));
  c = c.wrapping_add(fetch32(s, (len >> 1) & 4));
  fmix(seed ^ mur(c, mur(b, mur(a, d))))
}

pub(crate) fn hash32(s: &[u8]) -> u32 {
  let len = s.len();
  if len <= 24 {
    return if len <= 12 {
      if len <= 4 { hash32_len0to4(s, 0) } else { hash32_len5to12(s, 0) }
    } else {
      hash32_len13to24(s, 0)
    };
  }

  let mut h = len as u32;
  let mut g = C1.wrapping_mul(len as u32);
  let mut f = g;
  let a0 = scramble32(fetch32(s, len - 4));
  let a1 = scramble32(fetch32(s, len - 8));
  let a2 = scramble32(fetch32(s, len - 16));
  let a3 = scramble32(fetch32(s, len - 12));
  let a4 = scramble32(fetch32(s, len - 20));
  h = mur_step(h ^ a0);
  h = mur_step(h ^ a2);
  g = mur_step(g ^ a1);
  g = mur_step(g ^ a3);
  f = rotate32(f.wrapping_add(a4), 19).wrapping_add(113);

  let iters = (len - 1) / 20;
  let mut off = 0;
  for _ in 0..iters {
    let a = fetch32(s, off);
    let b = fetch32(s, off + 4);
    let c = fetch32(s, off + 8);
    let d = fetch32(s, off + 12);
    let e = fetch32(s, off + 16);
    h = h.wrapping_add(a);
    g = g.wrapping_add(b);
    f = f.wrapping_add(c);
    h = mur(d, h).wrapping_add(e);
    g = mur(c, g).wrapping_add(a);
    f = mur(b.wrapping_add(e.wrapping_mul(C1)), f).wrapping_add(d);
    f = f.wrapping_add(g);
    g = g.wrapping_add(f);
    off += 20;
  }
  finish32(h, g, f)
}

pub(crate) fn hash32_with_seed(s: &[u8], seed: u32) -> u32 {
  let len = s.len();
  if len <= 24 {
    return if len >= 13 {
      hash32_len13to24(s, seed.wrapping_mul(C1))
    } else if len >= 5 {
      hash32_len5to12(s, seed)
    } else {
      hash32_len0to4(s, seed)
    };
  }
  let h = hash32_len13to24(&s[..24], seed ^ len as u32);
  mur(hash32(&s[24..]).wrapping_add(seed), h)
}
