//! Core hashing traits for the cityhash workspace.
//!
//! This crate provides the traits every hash family in the workspace conforms
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot, optionally seeded non-cryptographic hashes | CityHash64, FarmHash128 |
//! | [`Fingerprint`] | Unseeded hashes whose output is frozen forever | Fingerprint32, Fingerprint128 |
//!
//! # Error Types
//!
//! - [`UnsupportedCapability`] - a compiled-in kernel needs a CPU feature the host lacks
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
mod fingerprint;

pub use error::UnsupportedCapability;
pub use fast_hash::FastHash;
pub use fingerprint::Fingerprint;
