//! CPU capability detection for the cityhash workspace.
//!
//! This crate is the single place where the workspace asks what the CPU can
//! do. The hash kernels themselves are selected at compile time; detection is
//! used to refuse loading a compiled-in kernel on a CPU that cannot run it and
//! to report the dispatch state.
//!
//! # Main Entry Point
//!
//! ```
//! use platform::caps::x86;
//!
//! let caps = platform::caps();
//! let crc_compiled = platform::compile_time_caps().has(x86::CRC32_READY);
//! if crc_compiled {
//!   assert!(caps.has(x86::CRC32_READY));
//! }
//! println!("{}", platform::describe());
//! ```
//!
//! # Design
//!
//! 1. **Compile-time first**: features the compiler may assume are read via `cfg!`.
//! 2. **Cached otherwise**: runtime detection is cached in `OnceLock` (std).
//! 3. **Miri-safe**: under Miri, always returns portable-only caps.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

use core::fmt;

pub use caps::{Arch, Caps};

/// Get detected CPU capabilities (compile-time plus runtime, cached).
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::caps()
}

/// Capabilities the build was compiled to assume.
#[inline]
#[must_use]
pub const fn compile_time_caps() -> Caps {
  detect::compile_time()
}

/// Detect capabilities, bypassing the cache.
#[inline]
#[must_use]
pub fn detect_uncached() -> Caps {
  detect::detect_uncached()
}

/// Human-readable summary of the current platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  pub arch: Arch,
  /// Features detected on the running CPU.
  pub detected: Caps,
  /// Features the build assumes.
  pub compiled: Caps,
}

/// Describe the current platform.
#[must_use]
pub fn describe() -> Description {
  Description {
    arch: Arch::current(),
    detected: caps(),
    compiled: compile_time_caps(),
  }
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} detected={} compiled={}", self.arch, self.detected, self.compiled)
  }
}
