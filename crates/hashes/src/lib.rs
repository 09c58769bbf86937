//! CityHash and FarmHash non-cryptographic hash families.
//!
//! This crate is `no_std` compatible and has no library dependencies outside
//! the workspace. Dev-only dependencies are used for property testing and
//! benchmarking.
//!
//! # Families
//!
//! - [`fast::city`] - CityHash v1.1 (32/64/128-bit, plus the SSE4.2 CRC
//!   variants on builds that enable it).
//! - [`fast::farm`] - FarmHash, portable selection.
//! - [`fast::fingerprint`] - Fingerprint32/64/128, frozen forever.
//!
//! ```
//! use hashes::{FastHash, Fingerprint, fast::{CityHash64, Fingerprint64}};
//!
//! assert_eq!(CityHash64::hash(b"abc"), 2_640_714_258_260_161_385);
//! assert_eq!(Fingerprint64::fingerprint(b"abc"), 2_640_714_258_260_161_385);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod fast;

mod util;

pub use traits::{FastHash, Fingerprint};
