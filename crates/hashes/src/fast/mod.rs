//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! Do not use these hashes for signatures, MACs, key derivation, or anything
//! that must withstand an adversary choosing the input.

pub mod city;
pub mod farm;
pub mod fingerprint;
mod mix;

pub use city::{CityHash32, CityHash64, CityHash128};
#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
pub use city::crc::{CityHashCrc128, CityHashCrc256};
pub use farm::{FarmHash32, FarmHash64, FarmHash128};
pub use fingerprint::{Fingerprint32, Fingerprint64, Fingerprint128};
