//! CRC32-accelerated CityHash: CityHashCrc128, CityHashCrc128WithSeed and
//! CityHashCrc256.
//!
//! Only compiled for x86_64 targets built with SSE4.2 enabled. There is no
//! portable fallback: builds without the instruction set do not export these
//! functions at all, and [`CRC_AVAILABLE`](super::CRC_AVAILABLE) is `false`.

#![allow(clippy::indexing_slicing)] // Short-input padding into a fixed block

use platform::caps::x86;
use traits::{FastHash, UnsupportedCapability};

use super::{
  hash128, hash128_with_seed,
  x86_64::{BLOCK_LEN, crc256_long},
};
use crate::fast::mix::{K0, hash_len16, high64, low64, rotate, uint128};

/// Inputs up to this length hash with plain CityHash128 in the 128-bit forms.
const CRC128_THRESHOLD: usize = 900;

/// Kernel name reported by dispatch introspection.
pub const KERNEL: &str = "x86_64/sse4.2-crc32";

/// Capabilities the CRC kernel needs at runtime.
#[inline]
#[must_use]
pub const fn required_caps() -> platform::Caps {
  x86::CRC32_READY
}

/// Confirm the running CPU can execute the CRC kernel.
///
/// The build already assumes SSE4.2, so this only fails when a binary built
/// for a newer CPU is started on an older one, or under Miri.
pub fn check() -> Result<(), UnsupportedCapability> {
  if platform::caps().has(required_caps()) {
    Ok(())
  } else {
    Err(UnsupportedCapability::new("sse4.2"))
  }
}

/// CityHashCrc256 of `s`. Word 0 of the result is the first word produced.
#[must_use]
pub fn hash_crc256(s: &[u8]) -> [u64; 4] {
  if s.len() >= BLOCK_LEN {
    return crc256_long(s, 0);
  }
  // Short inputs are zero-padded to one block; the complemented length seeds
  // the CRC streams so distinct lengths stay distinct.
  let mut buf = [0u8; BLOCK_LEN];
  buf[..s.len()].copy_from_slice(s);
  crc256_long(&buf, !(s.len() as u32))
}

/// CityHashCrc128 of `s`.
#[must_use]
pub fn hash_crc128(s: &[u8]) -> u128 {
  if s.len() <= CRC128_THRESHOLD {
    return hash128(s);
  }
  let r = hash_crc256(s);
  uint128(r[2], r[3])
}

/// CityHashCrc128WithSeed of `s`; `seed` uses the same packing as
/// [`hash128_with_seed`].
#[must_use]
pub fn hash_crc128_with_seed(s: &[u8], seed: u128) -> u128 {
  if s.len() <= CRC128_THRESHOLD {
    return hash128_with_seed(s, seed);
  }
  let r = hash_crc256(s);
  let u = high64(seed).wrapping_add(r[0]);
  let v = low64(seed).wrapping_add(r[1]);
  uint128(
    hash_len16(u, v.wrapping_add(r[2])),
    hash_len16(rotate(v, 32), u.wrapping_mul(K0).wrapping_add(r[3])),
  )
}

/// CityHashCrc128; seeded with `CityHashCrc128WithSeed` semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHashCrc128;

/// CityHashCrc256. Has no seeded form.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHashCrc256;

impl FastHash for CityHashCrc128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;
  type Seed = u128;

  #[inline]
  fn hash(data: &[u8]) -> u128 {
    hash_crc128(data)
  }

  #[inline]
  fn hash_with_seed(seed: u128, data: &[u8]) -> u128 {
    hash_crc128_with_seed(data, seed)
  }
}

impl FastHash for CityHashCrc256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u64; 4];
  type Seed = ();

  #[inline]
  fn hash_with_seed((): (), data: &[u8]) -> [u64; 4] {
    hash_crc256(data)
  }
}
