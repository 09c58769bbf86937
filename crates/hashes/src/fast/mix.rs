//! Primitive mixers shared by the CityHash and FarmHash families.
//!
//! Everything here is a pure function over fixed-width integers with
//! wraparound arithmetic. The constants are part of the digest contract:
//! changing any of them changes every digest.

use crate::util::fetch64;

/// 64-bit multiplicative constants shared by both families.
pub(crate) const K0: u64 = 0xc3a5_c85c_97cb_3127;
pub(crate) const K1: u64 = 0xb492_b66f_be98_f273;
pub(crate) const K2: u64 = 0x9ae1_6a3b_2f90_404f;

/// Murmur-inspired multiplier of [`hash128_to_64`].
pub(crate) const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

/// Murmur3 32-bit constants.
pub(crate) const C1: u32 = 0xcc9e_2d51;
pub(crate) const C2: u32 = 0x1b87_3593;
const MUR_ADD: u32 = 0xe654_6b64;

#[inline(always)]
pub(crate) const fn rotate(val: u64, shift: u32) -> u64 {
  val.rotate_right(shift)
}

#[inline(always)]
pub(crate) const fn rotate32(val: u32, shift: u32) -> u32 {
  val.rotate_right(shift)
}

#[inline(always)]
pub(crate) const fn shift_mix(val: u64) -> u64 {
  val ^ (val >> 47)
}

/// Folds a 128-bit value (as `lo`, `hi` words) into 64 bits.
#[inline(always)]
pub(crate) const fn hash128_to_64(lo: u64, hi: u64) -> u64 {
  hash_len16_mul(lo, hi, K_MUL)
}

#[inline(always)]
pub(crate) const fn hash_len16(u: u64, v: u64) -> u64 {
  hash128_to_64(u, v)
}

#[inline(always)]
pub(crate) const fn hash_len16_mul(u: u64, v: u64, mul: u64) -> u64 {
  let mut a = (u ^ v).wrapping_mul(mul);
  a ^= a >> 47;
  let mut b = (v ^ a).wrapping_mul(mul);
  b ^= b >> 47;
  b.wrapping_mul(mul)
}

/// Mixes 32 bytes of words into a seeded pair. Weak on its own; callers
/// post-mix the result.
#[inline(always)]
pub(crate) const fn weak_hash_len32_with_seeds_words(
  w: u64,
  x: u64,
  y: u64,
  z: u64,
  mut a: u64,
  mut b: u64,
) -> (u64, u64) {
  a = a.wrapping_add(w);
  b = rotate(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x).wrapping_add(y);
  b = b.wrapping_add(rotate(a, 44));
  (a.wrapping_add(z), b.wrapping_add(c))
}

/// [`weak_hash_len32_with_seeds_words`] over `input[offset..offset + 32]`.
#[inline(always)]
pub(crate) fn weak_hash_len32_with_seeds(input: &[u8], offset: usize, a: u64, b: u64) -> (u64, u64) {
  weak_hash_len32_with_seeds_words(
    fetch64(input, offset),
    fetch64(input, offset + 8),
    fetch64(input, offset + 16),
    fetch64(input, offset + 24),
    a,
    b,
  )
}

/// Murmur3 finalizer.
#[inline(always)]
pub(crate) const fn fmix(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// One Murmur3 mixing round of `a` into `h`.
#[inline(always)]
pub(crate) const fn mur(mut a: u32, mut h: u32) -> u32 {
  a = a.wrapping_mul(C1);
  a = rotate32(a, 17);
  a = a.wrapping_mul(C2);
  h ^= a;
  h = rotate32(h, 19);
  h.wrapping_mul(5).wrapping_add(MUR_ADD)
}

/// The rotate-multiply-add tail of [`mur`], without pre-scrambling an input.
#[inline(always)]
pub(crate) const fn mur_step(h: u32) -> u32 {
  mur_rotate(h, 19)
}

#[inline(always)]
pub(crate) const fn mur_rotate(h: u32, shift: u32) -> u32 {
  rotate32(h, shift).wrapping_mul(5).wrapping_add(MUR_ADD)
}

/// Scrambles a 32-bit word the way Murmur3 does before mixing it in.
#[inline(always)]
pub(crate) const fn scramble32(a: u32) -> u32 {
  rotate32(a.wrapping_mul(C1), 17).wrapping_mul(C2)
}

/// Packs a `(first, second)` word pair into the `u128` layout used for
/// 128-bit digests and seeds: `first` in the low 64 bits.
#[inline(always)]
pub(crate) const fn uint128(first: u64, second: u64) -> u128 {
  (first as u128) | ((second as u128) << 64)
}

#[inline(always)]
pub(crate) const fn low64(x: u128) -> u64 {
  x as u64
}

#[inline(always)]
pub(crate) const fn high64(x: u128) -> u64 {
  (x >> 64) as u64
}

/// Final mixing shared by the 32-bit long paths.
#[inline(always)]
pub(crate) const fn finish32(mut h: u32, mut g: u32, mut f: u32) -> u32 {
  g = rotate32(g, 11).wrapping_mul(C1);
  g = rotate32(g, 17).wrapping_mul(C1);
  f = rotate32(f, 11).wrapping_mul(C1);
  f = rotate32(f, 17).wrapping_mul(C1);
  h = mur_step(h.wrapping_add(g));
  h = rotate32(h, 17).wrapping_mul(C1);
  h = mur_step(h.wrapping_add(f));
  rotate32(h, 17).wrapping_mul(C1)
}

/// Rolling state of the 64-byte chunk loop shared by the CityHash64,
/// CityHash128 and FarmHash long paths.
#[derive(Clone, Copy)]
pub(crate) struct LongState {
  pub(crate) x: u64,
  pub(crate) y: u64,
  pub(crate) z: u64,
  pub(crate) v: (u64, u64),
  pub(crate) w: (u64, u64),
}

impl LongState {
  /// Folds `s[off..off + 64]` into the state.
  #[inline(always)]
  pub(crate) fn round(&mut self, s: &[u8], off: usize) {
    let Self { x, y, z, v, w } = self;
    *x = rotate(x.wrapping_add(*y).wrapping_add(v.0).wrapping_add(fetch64(s, off + 8)), 37).wrapping_mul(K1);
    *y = rotate(y.wrapping_add(v.1).wrapping_add(fetch64(s, off + 48)), 42).wrapping_mul(K1);
    *x ^= w.1;
    *y = y.wrapping_add(v.0).wrapping_add(fetch64(s, off + 40));
    *z = rotate(z.wrapping_add(w.0), 33).wrapping_mul(K1);
    *v = weak_hash_len32_with_seeds(s, off, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
    *w = weak_hash_len32_with_seeds(s, off + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, off + 16)));
    core::mem::swap(z, x);
  }
}
