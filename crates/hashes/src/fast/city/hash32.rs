//! CityHash32.

#![allow(clippy::indexing_slicing)] // Length-dispatched byte reads

use crate::{
  fast::mix::{C1, finish32, fmix, mur, mur_rotate, mur_step, rotate32, scramble32},
  util::fetch32,
};

fn hash32_len0to4(s: &[u8]) -> u32 {
  let mut b: u32 = 0;
  let mut c: u32 = 9;
  for &byte in s {
    // Bytes are mixed in as signed chars.
    b = b.wrapping_mul(C1).wrapping_add(byte as i8 as u32);
    c ^= b;
  }
  fmix(mur(b, mur(s.len() as u32, c)))
}

fn hash32_len5to12(s: &[u8]) -> u32 {
  let len = s.len();
  let mut a = len as u32;
  let mut b = (len as u32).wrapping_mul(5);
  let mut c: u32 = 9;
  let d = b;
  a = a.wrapping_add(fetch32(s, 0));
  b = b.wrapping_add(fetch32(s, len - 4));
  c = c.wrapping_add(fetch32(s, (len >> 1) & 4));
  fmix(mur(c, mur(b, mur(a, d))))
}

fn hash32_len13to24(s: &[u8]) -> u32 {
  let len = s.len();
  let a = fetch32(s, (len >> 1) - 4);
  let b = fetch32(s, 4);
  let c = fetch32(s, len - 8);
  let d = fetch32(s, len >> 1);
  let e = fetch32(s, 0);
  let f = fetch32(s, len - 4);
  let h = len as u32;
  fmix(mur(f, mur(e, mur(d, mur(c, mur(b, mur(a, h)))))))
}

/// CityHash32 of `s`.
#[must_use]
pub fn hash32(s: &[u8]) -> u32 {
  let len = s.len();
  if len <= 24 {
    return if len <= 12 {
      if len <= 4 { hash32_len0to4(s) } else { hash32_len5to12(s) }
    } else {
      hash32_len13to24(s)
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
  f = mur_step(f.wrapping_add(a4));

  let iters = (len - 1) / 20;
  let mut off = 0;
  for _ in 0..iters {
    let a0 = scramble32(fetch32(s, off));
    let a1 = fetch32(s, off + 4);
    let a2 = scramble32(fetch32(s, off + 8));
    let a3 = scramble32(fetch32(s, off + 12));
    let a4 = fetch32(s, off + 16);
    h ^= a0;
    h = mur_rotate(h, 18);
    f = f.wrapping_add(a1);
    f = rotate32(f, 19).wrapping_mul(C1);
    g = g.wrapping_add(a2);
    g = mur_rotate(g, 18);
    h = mur_step(h ^ a3.wrapping_add(a1));
    g ^= a4;
    g = g.swap_bytes().wrapping_mul(5);
    h = h.wrapping_add(a4.wrapping_mul(5));
    h = h.swap_bytes();
    f = f.wrapping_add(a0);
    (f, h, g) = (g, f, h);
    off += 20;
  }

  finish32(h, g, f)
}
