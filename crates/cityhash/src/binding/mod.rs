//! Host binding layer.
//!
//! Models the three extension modules a scripting runtime would import:
//! `cityhash`, `cityhashcrc` and `farmhash`. Each call converts its data
//! argument to a byte view exactly once ([`HostValue::as_buffer`]), runs the
//! core hash, and returns a fixed-width [`HostInt`].
//!
//! ```
//! use cityhash::binding::{HostInt, HostValue, Module};
//!
//! let farm = Module::load("farmhash")?;
//! let fp = farm.call("Fingerprint64", &[HostValue::Str("abc")])?;
//! assert_eq!(fp, HostInt::U64(2_640_714_258_260_161_385));
//!
//! let err = farm.call("FarmHash64", &[HostValue::List(vec![])]).unwrap_err();
//! assert_eq!(err.to_string(), "FarmHash64() argument must be a bytes-like object or str, not 'list'");
//! # Ok::<(), cityhash::binding::BindingError>(())
//! ```

mod config;
mod error;
mod int;
mod registry;
mod value;

pub use config::{Config, CrcMode};
pub use error::BindingError;
pub use int::HostInt;
pub use registry::{Entry, Module};
pub use value::HostValue;
