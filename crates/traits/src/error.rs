//! Error types shared across the workspace.
//!
//! Hashing itself never fails. The only failure a caller can observe is a
//! kernel that was compiled in but cannot run on the current CPU, which is
//! reported when the kernel is looked up, never in the middle of a hash.

use core::fmt;

/// A required CPU capability is missing.
///
/// Returned when an entry point that only exists on hardware-accelerated
/// builds (for example the SSE4.2 CRC32 family) is requested on a host whose
/// CPU does not provide the instruction set, or whose use has been disabled by
/// configuration.
///
/// # Examples
///
/// ```
/// use traits::UnsupportedCapability;
///
/// fn require(present: bool) -> Result<(), UnsupportedCapability> {
///   if present { Ok(()) } else { Err(UnsupportedCapability::new("sse4.2")) }
/// }
///
/// let err = require(false).unwrap_err();
/// assert_eq!(err.feature(), "sse4.2");
/// assert_eq!(err.to_string(), "unsupported CPU capability: sse4.2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UnsupportedCapability {
  feature: &'static str,
}

impl UnsupportedCapability {
  /// Create an error naming the missing `feature`.
  #[inline]
  #[must_use]
  pub const fn new(feature: &'static str) -> Self {
    Self { feature }
  }

  /// Name of the missing capability (for example `"sse4.2"`).
  #[inline]
  #[must_use]
  pub const fn feature(&self) -> &'static str {
    self.feature
  }
}

impl fmt::Display for UnsupportedCapability {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unsupported CPU capability: {}", self.feature)
  }
}

impl core::error::Error for UnsupportedCapability {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(
      UnsupportedCapability::new("sse4.2").to_string(),
      "unsupported CPU capability: sse4.2"
    );
  }

  #[test]
  fn debug_names_feature() {
    let dbg = format!("{:?}", UnsupportedCapability::new("sse4.2"));
    assert_eq!(dbg, "UnsupportedCapability { feature: \"sse4.2\" }");
  }

  #[test]
  fn equality_is_by_feature() {
    assert_eq!(UnsupportedCapability::new("sse4.2"), UnsupportedCapability::new("sse4.2"));
    assert_ne!(UnsupportedCapability::new("sse4.2"), UnsupportedCapability::new("crc"));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<UnsupportedCapability>();
    assert_sync::<UnsupportedCapability>();
    assert_error::<UnsupportedCapability>();
  }

  #[test]
  fn has_no_source() {
    use core::error::Error;

    assert!(UnsupportedCapability::new("sse4.2").source().is_none());
  }
}
