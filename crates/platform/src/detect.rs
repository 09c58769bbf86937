//! CPU detection.
//!
//! - Compile-time detection (via `cfg!(target_feature = "...")`)
//! - Runtime detection (via `is_x86_feature_detected!` with `std`)
//! - Caching in a `OnceLock` (std) or per-call detection (no_std)
//! - Miri fallback (always returns portable caps)

use crate::caps::Caps;

/// Get detected CPU capabilities.
///
/// Compile-time features are always included. With `std`, runtime detection
/// is added on top and cached after the first call.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  // Miri cannot interpret SIMD intrinsics, so always return portable.
  #[cfg(miri)]
  {
    Caps::NONE
  }

  #[cfg(all(not(miri), feature = "std"))]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Caps> = OnceLock::new();
    *CACHED.get_or_init(detect_uncached)
  }

  #[cfg(all(not(miri), not(feature = "std")))]
  {
    detect_uncached()
  }
}

/// Detect capabilities without caching.
#[inline]
#[must_use]
pub fn detect_uncached() -> Caps {
  #[allow(unused_mut)]
  let mut caps = compile_time();

  #[cfg(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86")))]
  {
    caps |= runtime_x86();
  }

  #[cfg(all(feature = "std", target_arch = "aarch64"))]
  {
    caps |= runtime_aarch64();
  }

  caps
}

/// Features the compiler was allowed to assume for this build.
///
/// A kernel gated on `cfg(target_feature = ...)` is only present in the binary
/// when its bits are set here.
#[must_use]
pub const fn compile_time() -> Caps {
  use crate::caps::{aarch64, x86};

  let mut bits = Caps::NONE;

  if cfg!(target_feature = "sse2") {
    bits = bits.union(x86::SSE2);
  }
  if cfg!(target_feature = "ssse3") {
    bits = bits.union(x86::SSSE3);
  }
  if cfg!(target_feature = "sse4.1") {
    bits = bits.union(x86::SSE41);
  }
  if cfg!(target_feature = "sse4.2") {
    bits = bits.union(x86::SSE42);
  }
  if cfg!(target_feature = "popcnt") {
    bits = bits.union(x86::POPCNT);
  }
  if cfg!(target_feature = "aes") && cfg!(any(target_arch = "x86_64", target_arch = "x86")) {
    bits = bits.union(x86::AESNI);
  }
  if cfg!(target_feature = "pclmulqdq") {
    bits = bits.union(x86::PCLMULQDQ);
  }
  if cfg!(target_feature = "avx2") {
    bits = bits.union(x86::AVX2);
  }

  if cfg!(target_feature = "neon") {
    bits = bits.union(aarch64::NEON);
  }
  if cfg!(target_feature = "aes") && cfg!(target_arch = "aarch64") {
    bits = bits.union(aarch64::AES);
  }
  if cfg!(target_feature = "crc") {
    bits = bits.union(aarch64::CRC);
  }

  bits
}

#[cfg(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86")))]
fn runtime_x86() -> Caps {
  use crate::caps::x86;

  let mut bits = Caps::NONE;

  if std::arch::is_x86_feature_detected!("sse2") {
    bits |= x86::SSE2;
  }
  if std::arch::is_x86_feature_detected!("ssse3") {
    bits |= x86::SSSE3;
  }
  if std::arch::is_x86_feature_detected!("sse4.1") {
    bits |= x86::SSE41;
  }
  if std::arch::is_x86_feature_detected!("sse4.2") {
    bits |= x86::SSE42;
  }
  if std::arch::is_x86_feature_detected!("popcnt") {
    bits |= x86::POPCNT;
  }
  if std::arch::is_x86_feature_detected!("aes") {
    bits |= x86::AESNI;
  }
  if std::arch::is_x86_feature_detected!("pclmulqdq") {
    bits |= x86::PCLMULQDQ;
  }
  if std::arch::is_x86_feature_detected!("avx2") {
    bits |= x86::AVX2;
  }

  bits
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn runtime_aarch64() -> Caps {
  use crate::caps::aarch64;

  let mut bits = Caps::NONE;

  if std::arch::is_aarch64_feature_detected!("neon") {
    bits |= aarch64::NEON;
  }
  if std::arch::is_aarch64_feature_detected!("aes") {
    bits |= aarch64::AES;
  }
  if std::arch::is_aarch64_feature_detected!("crc") {
    bits |= aarch64::CRC;
  }

  bits
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn detected_caps_include_compile_time_caps() {
    assert!(detect_uncached().has(compile_time()));
  }

  #[test]
  #[cfg(not(miri))]
  fn cached_caps_match_fresh_detection() {
    assert_eq!(caps(), detect_uncached());
    assert_eq!(caps(), caps());
  }

  #[test]
  #[cfg(target_arch = "x86_64")]
  fn x86_64_baseline_has_sse2() {
    assert!(compile_time().has(crate::caps::x86::SSE2));
  }

  #[test]
  #[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
  fn sse42_builds_report_crc32() {
    assert!(compile_time().has(crate::caps::x86::CRC32_READY));
  }
}
