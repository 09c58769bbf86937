//! Stable fingerprints.

use core::fmt::Debug;

/// An unseeded hash whose output is a persisted-data contract.
///
/// Unlike [`FastHash`](crate::FastHash) families, whose constants may be tuned
/// between releases, a fingerprint must return the same value for the same
/// bytes on every platform and in every version. Values may be stored on disk
/// and compared across builds.
pub trait Fingerprint {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Fingerprint output type.
  type Output: Copy + Eq + Debug + Default;

  /// Compute the fingerprint of `data`.
  #[must_use]
  fn fingerprint(data: &[u8]) -> Self::Output;
}
