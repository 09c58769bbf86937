//! SSE4.2 chunk processor behind CityHashCrc256.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::x86_64::_mm_crc32_u64;

use crate::{
  fast::mix::{K0, hash_len16, rotate, shift_mix},
  util::fetch64,
};

/// Bytes consumed by one iteration of the main loop (six 40-byte chunks).
pub(super) const BLOCK_LEN: usize = 240;
const CHUNK_LEN: usize = 40;

/// Eight mixing lanes plus three CRC32 streams (`x`, `y`, `z`).
struct State {
  a: u64,
  b: u64,
  c: u64,
  d: u64,
  e: u64,
  f: u64,
  g: u64,
  h: u64,
  x: u64,
  y: u64,
  z: u64,
}

/// `(a, b, c) <- (c, a, b)`.
#[inline(always)]
fn permute3(a: &mut u64, b: &mut u64, c: &mut u64) {
  core::mem::swap(a, b);
  core::mem::swap(a, c);
}

impl State {
  /// Mixes `s[off..off + 40]` into the lanes and the CRC streams, then
  /// rotates `e` by `r`.
  ///
  /// # Safety
  /// Caller must ensure the CPU supports the `sse4.2` target feature.
  #[inline]
  #[target_feature(enable = "sse4.2")]
  unsafe fn chunk(&mut self, s: &[u8], off: usize, r: u32) {
    permute3(&mut self.x, &mut self.z, &mut self.y);
    self.b = self.b.wrapping_add(fetch64(s, off));
    self.c = self.c.wrapping_add(fetch64(s, off + 8));
    self.d = self.d.wrapping_add(fetch64(s, off + 16));
    self.e = self.e.wrapping_add(fetch64(s, off + 24));
    self.f = self.f.wrapping_add(fetch64(s, off + 32));
    self.a = self.a.wrapping_add(self.b);
    self.h = self.h.wrapping_add(self.f);
    self.b = self.b.wrapping_add(self.c);
    self.f = self.f.wrapping_add(self.d);
    self.g = self.g.wrapping_add(self.e);
    self.e = self.e.wrapping_add(self.z);
    self.g = self.g.wrapping_add(self.x);
    self.z = _mm_crc32_u64(self.z, self.b.wrapping_add(self.g));
    self.y = _mm_crc32_u64(self.y, self.e.wrapping_add(self.h));
    self.x = _mm_crc32_u64(self.x, self.f.wrapping_add(self.a));
    self.e = rotate(self.e, r);
    self.c = self.c.wrapping_add(self.e);
  }
}

/// 256-bit digest of an input of at least [`BLOCK_LEN`] bytes.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[target_feature(enable = "sse4.2")]
unsafe fn crc256_long_unchecked(s: &[u8], seed: u32) -> [u64; 4] {
  debug_assert!(s.len() >= BLOCK_LEN);
  let len = s.len();
  let seed = u64::from(seed);
  let mut result = [0u64; 4];

  let b = fetch64(s, 96).wrapping_add(K0);
  let c = hash_len16(b, len as u64);
  let d = fetch64(s, 120).wrapping_mul(K0).wrapping_add(len as u64);
  result[0] = c;
  result[1] = d;
  let mut st = State {
    a: fetch64(s, 56).wrapping_add(K0),
    b,
    c,
    d,
    e: fetch64(s, 184).wrapping_add(seed),
    f: 0,
    g: 0,
    h: c.wrapping_add(d),
    x: seed,
    y: 0,
    z: 0,
  };

  let blocks = len / BLOCK_LEN;
  let mut off = 0;
  for _ in 0..blocks {
    // SAFETY: the enclosing function carries the `sse4.2` feature.
    unsafe {
      st.chunk(s, off, 0);
      permute3(&mut st.a, &mut st.h, &mut st.c);
      st.chunk(s, off + CHUNK_LEN, 33);
      permute3(&mut st.a, &mut st.h, &mut st.f);
      st.chunk(s, off + 2 * CHUNK_LEN, 0);
      permute3(&mut st.b, &mut st.h, &mut st.f);
      st.chunk(s, off + 3 * CHUNK_LEN, 42);
      permute3(&mut st.g, &mut st.a, &mut st.b);
      st.chunk(s, off + 4 * CHUNK_LEN, 0);
      permute3(&mut st.g, &mut st.b, &mut st.c);
      st.chunk(s, off + 5 * CHUNK_LEN, 33);
      permute3(&mut st.g, &mut st.a, &mut st.f);
    }
    off += BLOCK_LEN;
  }

  let mut rest = len - blocks * BLOCK_LEN;
  while rest >= CHUNK_LEN {
    // SAFETY: the enclosing function carries the `sse4.2` feature.
    unsafe { st.chunk(s, off, 29) };
    st.e ^= rotate(st.a, 20);
    st.h = st.h.wrapping_add(rotate(st.b, 30));
    st.g ^= rotate(st.c, 40);
    st.f = st.f.wrapping_add(rotate(st.d, 34));
    permute3(&mut st.c, &mut st.h, &mut st.g);
    off += CHUNK_LEN;
    rest -= CHUNK_LEN;
  }
  if rest > 0 {
    // Final partial chunk: re-read the last 40 bytes of the input.
    // SAFETY: the enclosing function carries the `sse4.2` feature.
    unsafe { st.chunk(s, len - CHUNK_LEN, 33) };
    st.e ^= rotate(st.a, 43);
    st.h = st.h.wrapping_add(rotate(st.b, 42));
    st.g ^= rotate(st.c, 41);
    st.f = st.f.wrapping_add(rotate(st.d, 40));
  }

  let State {
    mut a,
    mut b,
    mut c,
    mut d,
    mut e,
    f,
    mut g,
    mut h,
    mut x,
    mut y,
    mut z,
  } = st;
  result[0] ^= h;
  result[1] ^= g;
  g = g.wrapping_add(h);
  a = hash_len16(a, g.wrapping_add(z));
  x = x.wrapping_add(y << 32);
  b = b.wrapping_add(x);
  c = hash_len16(c, z).wrapping_add(h);
  d = hash_len16(d, e.wrapping_add(result[0]));
  g = g.wrapping_add(e);
  h = h.wrapping_add(hash_len16(x, f));
  e = hash_len16(a, d).wrapping_add(g);
  z = hash_len16(b, c).wrapping_add(a);
  y = hash_len16(g, h).wrapping_add(c);
  result[0] = e.wrapping_add(z).wrapping_add(y).wrapping_add(x);
  a = shift_mix(a.wrapping_add(y).wrapping_mul(K0)).wrapping_mul(K0).wrapping_add(b);
  result[1] = result[1].wrapping_add(a.wrapping_add(result[0]));
  a = shift_mix(a.wrapping_mul(K0)).wrapping_mul(K0).wrapping_add(c);
  result[2] = a.wrapping_add(result[1]);
  a = shift_mix(a.wrapping_add(d).wrapping_mul(K0)).wrapping_mul(K0);
  result[3] = a.wrapping_add(result[2]);
  result
}

/// CityHashCrc256 over an input of at least [`BLOCK_LEN`] bytes.
#[inline]
pub(super) fn crc256_long(s: &[u8], seed: u32) -> [u64; 4] {
  // SAFETY: this module is only compiled when `target_feature = "sse4.2"`.
  unsafe { crc256_long_unchecked(s, seed) }
}
