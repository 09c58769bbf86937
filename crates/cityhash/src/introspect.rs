//! Dispatch introspection: which kernels this build and host can run.
//!
//! ```
//! use cityhash::DispatchInfo;
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//! if !info.crc_compiled() {
//!   assert!(!info.crc_available());
//! }
//! ```

use core::fmt;

use crate::binding::{Config, CrcMode};

/// Platform description plus the state of the CRC kernel.
#[derive(Clone, Copy)]
pub struct DispatchInfo {
  platform: platform::Description,
  crc_mode: CrcMode,
}

impl DispatchInfo {
  /// Dispatch info under the process configuration ([`Config::current`]).
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    Self::with_config(Config::current())
  }

  #[must_use]
  pub fn with_config(config: Config) -> Self {
    Self {
      platform: platform::describe(),
      crc_mode: config.crc,
    }
  }

  #[inline]
  #[must_use]
  pub fn platform(&self) -> platform::Description {
    self.platform
  }

  /// Whether CityHashCrc128/256 were compiled into this build.
  #[inline]
  #[must_use]
  pub const fn crc_compiled(&self) -> bool {
    hashes::fast::city::CRC_AVAILABLE
  }

  #[inline]
  #[must_use]
  pub const fn crc_mode(&self) -> CrcMode {
    self.crc_mode
  }

  /// Whether `cityhashcrc` would load right now.
  #[must_use]
  pub fn crc_available(&self) -> bool {
    self.crc_compiled()
      && self.crc_mode == CrcMode::Auto
      && self.platform.detected.has(platform::caps::x86::CRC32_READY)
  }

  /// Name of the CRC kernel, or `"unavailable"`.
  #[must_use]
  pub fn crc_kernel(&self) -> &'static str {
    #[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
    if self.crc_available() {
      return hashes::fast::city::crc::KERNEL;
    }
    "unavailable"
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} crc={} (mode={})",
      self.platform,
      self.crc_kernel(),
      self.crc_mode.as_str()
    )
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("platform", &format_args!("{}", self.platform))
      .field("crc_compiled", &self.crc_compiled())
      .field("crc_mode", &self.crc_mode)
      .field("crc_kernel", &self.crc_kernel())
      .finish()
  }
}
