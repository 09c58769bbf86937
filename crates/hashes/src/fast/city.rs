//! CityHash v1.1 (**NOT CRYPTO**).
//!
//! Portable scalar implementation of CityHash32, CityHash64 (plus the
//! one- and two-seed forms), and CityHash128. On x86_64 builds compiled with
//! SSE4.2 the [`crc`] module adds CityHashCrc128 and CityHashCrc256.
//!
//! 128-bit digests and seeds are `u128` with the first word of the pair in the
//! low 64 bits.

use traits::FastHash;

#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
pub mod crc;
mod hash128;
mod hash32;
mod hash64;
#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
mod x86_64;

pub use hash32::hash32;
pub use hash64::{hash64, hash64_with_seed, hash64_with_seeds};
pub use hash128::{hash128, hash128_with_seed};
pub(crate) use hash64::{hash_len0to16, hash_len17to32};

/// Whether the CRC-accelerated entry points were compiled into this build.
pub const CRC_AVAILABLE: bool = cfg!(all(target_arch = "x86_64", target_feature = "sse4.2"));

/// CityHash32. Has no seeded form.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash32;

/// CityHash64; seeded with `CityHash64WithSeed` semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash64;

/// CityHash128; seeded with `CityHash128WithSeed` semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash128;

impl FastHash for CityHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = ();

  #[inline]
  fn hash_with_seed((): (), data: &[u8]) -> u32 {
    hash32(data)
  }
}

impl FastHash for CityHash64 {
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

impl FastHash for CityHash128 {
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
