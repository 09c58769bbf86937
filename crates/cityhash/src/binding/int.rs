//! Host integers returned by binding calls.
//!
//! 128-bit digests cross the boundary as `first << 64 | second`, where the
//! core keeps `first` in the low word. 256-bit digests put word 0 in the most
//! significant position.

use core::fmt;

/// A digest as the host sees it: an unsigned integer of fixed width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostInt {
  U32(u32),
  U64(u64),
  U128(u128),
  /// Four 64-bit words, most significant first.
  U256([u64; 4]),
}

impl HostInt {
  /// Host form of a core 128-bit digest.
  #[inline]
  #[must_use]
  pub const fn from_digest128(core: u128) -> Self {
    Self::U128(swap_words(core))
  }

  /// Width of the integer in bits.
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::U32(_) => 32,
      Self::U64(_) => 64,
      Self::U128(_) => 128,
      Self::U256(_) => 256,
    }
  }

  /// The value as a `u128` if it fits, for use as a seed argument.
  #[must_use]
  pub const fn to_u128(self) -> Option<u128> {
    match self {
      Self::U32(v) => Some(v as u128),
      Self::U64(v) => Some(v as u128),
      Self::U128(v) => Some(v),
      Self::U256([0, 0, hi, lo]) => Some(((hi as u128) << 64) | lo as u128),
      Self::U256(_) => None,
    }
  }
}

/// Converts between the host and core 128-bit layouts. The mapping is its own
/// inverse, so host seeds go through it too.
#[inline]
pub(crate) const fn swap_words(v: u128) -> u128 {
  v.rotate_left(64)
}

/// Writes a 256-bit value in decimal by repeated division by 10^19.
fn fmt_u256(words: [u64; 4], f: &mut fmt::Formatter<'_>) -> fmt::Result {
  const CHUNK: u64 = 10_000_000_000_000_000_000;
  // 2^256 < 10^78, so five 19-digit chunks always suffice.
  let mut chunks = [0u64; 5];
  let mut n = words;
  let mut used = 0;
  for slot in &mut chunks {
    let mut rem: u128 = 0;
    for w in &mut n {
      let cur = (rem << 64) | u128::from(*w);
      *w = (cur / u128::from(CHUNK)) as u64;
      rem = cur % u128::from(CHUNK);
    }
    *slot = rem as u64;
    used += 1;
    if n == [0; 4] {
      break;
    }
  }
  let mut rest = chunks.iter().take(used).rev();
  if let Some(first) = rest.next() {
    write!(f, "{first}")?;
  }
  for chunk in rest {
    write!(f, "{chunk:019}")?;
  }
  Ok(())
}

impl fmt::Display for HostInt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::U32(v) => write!(f, "{v}"),
      Self::U64(v) => write!(f, "{v}"),
      Self::U128(v) => write!(f, "{v}"),
      Self::U256(words) => fmt_u256(words, f),
    }
  }
}
