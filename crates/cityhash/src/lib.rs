//! CityHash v1.1, FarmHash and the FarmHash fingerprints.
//!
//! Pure-function, non-cryptographic hashes over byte buffers. The CRC32
//! variants (CityHashCrc128/256) exist only in x86_64 builds compiled with
//! SSE4.2; there is no software fallback.
//!
//! # Quick Start
//!
//! ```
//! use cityhash::{CityHash64, FastHash, Fingerprint, Fingerprint128};
//!
//! let h = CityHash64::hash(b"abc");
//! assert_eq!(h, 2_640_714_258_260_161_385);
//!
//! // Seeded form: CityHash64WithSeed.
//! let seeded = CityHash64::hash_with_seed(1, b"just a string");
//! assert_eq!(seeded, 4_671_661_537_843_966_296);
//!
//! // Fingerprints never change between versions or platforms.
//! let fp = Fingerprint128::fingerprint(b"abc");
//! assert_eq!(fp as u64, 4_143_508_125_394_299_908);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Runtime CPU detection, `CITYHASH_CRC` override, `cityhash64-lines` |
//!
//! # Host binding
//!
//! [`binding`] exposes the `cityhash`, `cityhashcrc` and `farmhash` function
//! tables a scripting runtime would import, with host-side argument checking.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod binding;
mod introspect;

#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
pub use hashes::fast::{CityHashCrc128, CityHashCrc256};
pub use hashes::{
  FastHash, Fingerprint,
  fast::{
    CityHash32, CityHash64, CityHash128, FarmHash32, FarmHash64, FarmHash128, Fingerprint32, Fingerprint64,
    Fingerprint128, city, farm, fingerprint,
  },
};
pub use introspect::DispatchInfo;
pub use traits::UnsupportedCapability;

/// Whether CityHashCrc128/256 were compiled into this build.
pub const CRC_AVAILABLE: bool = hashes::fast::city::CRC_AVAILABLE;
