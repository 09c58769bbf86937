//! FarmHash (**NOT CRYPTO**), portable selection.
//!
//! FarmHash is a family of sub-hashes; the public entry points pick one per
//! width:
//!
//! | Entry point | Sub-hash |
//! |---|---|
//! | [`hash32`], [`hash32_with_seed`] | `mk` |
//! | [`hash64`] | `xo` (delegating to `na` and `uo` by length) |
//! | [`hash64_with_seed`], [`hash64_with_seeds`] | `na` |
//! | [`hash128`], [`hash128_with_seed`] | `cc` |
//!
//! The SIMD variants that FarmHash selects on SSE4.1/AES-capable builds are
//! not implemented; digests are identical on every target.

use traits::FastHash;

mod cc;
mod mk;
mod na;
mod uo;
mod xo;

// The fingerprints pin individual sub-hashes rather than the selection above.
pub(crate) use cc::city_hash128 as cc_hash128;
pub(crate) use mk::hash32 as mk_hash32;
pub(crate) use na::hash64 as na_hash64;

/// FarmHash32 of `s`.
#[inline]
#[must_use]
pub fn hash32(s: &[u8]) -> u32 {
  mk::hash32(s)
}

/// FarmHash32 of `s` with `seed` mixed in.
#[inline]
#[must_use]
pub fn hash32_with_seed(s: &[u8], seed: u32) -> u32 {
  mk::hash32_with_seed(s, seed)
}

/// FarmHash64 of `s`.
#[inline]
#[must_use]
pub fn hash64(s: &[u8]) -> u64 {
  xo::hash64(s)
}

/// FarmHash64 of `s` with `seed` mixed in.
#[inline]
#[must_use]
pub fn hash64_with_seed(s: &[u8], seed: u64) -> u64 {
  na::hash64_with_seed(s, seed)
}

/// FarmHash64 of `s` with two seeds mixed in.
#[inline]
#[must_use]
pub fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
  na::hash64_with_seeds(s, seed0, seed1)
}

/// FarmHash128 of `s`.
#[inline]
#[must_use]
pub fn hash128(s: &[u8]) -> u128 {
  cc::city_hash128(s)
}

/// FarmHash128 of `s` with a 128-bit `seed` (first word in the low 64 bits).
#[inline]
#[must_use]
pub fn hash128_with_seed(s: &[u8], seed: u128) -> u128 {
  cc::city_hash128_with_seed(s, seed)
}

/// FarmHash32; seeded with `Hash32WithSeed` semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarmHash32;

/// FarmHash64; seeded with `Hash64WithSeed` semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarmHash64;

/// FarmHash128; seeded with `Hash128WithSeed` semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarmHash128;

impl FastHash for FarmHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash(data: &[u8]) -> u32 {
    hash32(data)
  }

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    hash32_with_seed(data, seed)
  }
}

impl FastHash for FarmHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash(data: &[u8]) -> u64 {
    hash64(data)
  }

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    hash64_with_seed(data, seed)
  }
}

impl FastHash for FarmHash128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;
  type Seed = u128;

  #[inline]
  fn hash(data: &[u8]) -> u128 {
    hash128(data)
  }

  #[inline]
  fn hash_with_seed(seed: u128, data: &[u8]) -> u128 {
    hash128_with_seed(data, seed)
  }
}
