//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot. CityHash and FarmHash are defined over
/// whole buffers and have no incremental form.
///
/// Several families define the unseeded digest independently of any seed
/// (CityHash64 is not `CityHash64WithSeed(_, 0)`), so implementors override
/// [`hash`](FastHash::hash) whenever that holds.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (`()` for families without a seeded form).
  type Seed: Copy + Debug + Default;

  /// Compute the unseeded hash of `data`.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::FastHash;

  struct SumHash;

  impl FastHash for SumHash {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;
    type Seed = u64;

    fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
      data.iter().fold(seed, |acc, &b| acc.wrapping_add(u64::from(b)))
    }
  }

  struct OffsetHash;

  impl FastHash for OffsetHash {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;
    type Seed = u64;

    fn hash(data: &[u8]) -> u64 {
      Self::hash_with_seed(7, data) ^ 1
    }

    fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
      SumHash::hash_with_seed(seed, data)
    }
  }

  #[test]
  fn default_hash_uses_default_seed() {
    assert_eq!(SumHash::hash(b"abc"), SumHash::hash_with_seed(0, b"abc"));
  }

  #[test]
  fn overridden_hash_is_independent_of_default_seed() {
    assert_ne!(OffsetHash::hash(b"abc"), OffsetHash::hash_with_seed(0, b"abc"));
    assert_eq!(OffsetHash::hash(b""), 7 ^ 1);
  }
}
