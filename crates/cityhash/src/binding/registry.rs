//! Module registry: the `cityhash`, `cityhashcrc` and `farmhash` function
//! tables.

#![allow(clippy::indexing_slicing)] // Arguments indexed after the arity check

use alloc::string::ToString;
use core::{fmt, ops::RangeInclusive};

use hashes::fast::{city, farm, fingerprint};

use super::{BindingError, Config, HostInt, HostValue, int::swap_words};

/// How an entry consumes its arguments after the data buffer.
#[derive(Clone, Copy)]
enum Kernel {
  Plain(fn(&[u8]) -> HostInt),
  Seed32(fn(&[u8], u32) -> HostInt),
  Seed64(fn(&[u8], u64) -> HostInt),
  Seeds64(fn(&[u8], u64, u64) -> HostInt),
  Seed128(fn(&[u8], u128) -> HostInt),
}

/// One callable function of a module.
#[derive(Clone, Copy)]
pub struct Entry {
  name: &'static str,
  kernel: Kernel,
}

impl Entry {
  const fn new(name: &'static str, kernel: Kernel) -> Self {
    Self { name, kernel }
  }

  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Accepted positional argument counts. Seeds are optional and default to 0.
  #[must_use]
  pub const fn arity(&self) -> RangeInclusive<usize> {
    match self.kernel {
      Kernel::Plain(_) => 1..=1,
      Kernel::Seed32(_) | Kernel::Seed64(_) | Kernel::Seed128(_) => 1..=2,
      Kernel::Seeds64(_) => 1..=3,
    }
  }

  /// Call with host arguments: the data buffer, then any seeds.
  ///
  /// # Errors
  ///
  /// [`BindingError::Arity`] for a wrong argument count and
  /// [`BindingError::InvalidArgument`] for a non-buffer data argument, a
  /// non-integer seed, or a seed too wide for the function. Nothing is hashed
  /// when an error is returned.
  pub fn call(&self, args: &[HostValue<'_>]) -> Result<HostInt, BindingError> {
    let arity = self.arity();
    if !arity.contains(&args.len()) {
      return Err(BindingError::Arity {
        function: self.name,
        expected: arity,
        got: args.len(),
      });
    }
    let data = args[0].as_buffer(self.name)?;
    Ok(match self.kernel {
      Kernel::Plain(f) => f(data),
      Kernel::Seed32(f) => f(data, seed_arg(args, 1, self.name)?),
      Kernel::Seed64(f) => f(data, seed_arg(args, 1, self.name)?),
      Kernel::Seeds64(f) => f(data, seed_arg(args, 1, self.name)?, seed_arg(args, 2, self.name)?),
      Kernel::Seed128(f) => f(data, swap_words(seed_arg(args, 1, self.name)?)),
    })
  }
}

/// Seed argument `i`, narrowed to the width the kernel takes. Omitted seeds are
/// 0; an integer that does not fit is rejected rather than truncated.
fn seed_arg<T: TryFrom<u128>>(args: &[HostValue<'_>], i: usize, function: &'static str) -> Result<T, BindingError> {
  let wide = args.get(i).map_or(Ok(0), |v| v.as_seed(function))?;
  T::try_from(wide).map_err(|_| BindingError::InvalidArgument { function, got: "int" })
}

impl fmt::Debug for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Entry")
      .field("name", &self.name)
      .field("arity", &self.arity())
      .finish()
  }
}

static CITYHASH: &[Entry] = &[
  Entry::new("CityHash32", Kernel::Plain(|s| HostInt::U32(city::hash32(s)))),
  Entry::new("CityHash64", Kernel::Plain(|s| HostInt::U64(city::hash64(s)))),
  Entry::new(
    "CityHash64WithSeed",
    Kernel::Seed64(|s, seed| HostInt::U64(city::hash64_with_seed(s, seed))),
  ),
  Entry::new(
    "CityHash64WithSeeds",
    Kernel::Seeds64(|s, seed0, seed1| HostInt::U64(city::hash64_with_seeds(s, seed0, seed1))),
  ),
  Entry::new(
    "CityHash128",
    Kernel::Plain(|s| HostInt::from_digest128(city::hash128(s))),
  ),
  Entry::new(
    "CityHash128WithSeed",
    Kernel::Seed128(|s, seed| HostInt::from_digest128(city::hash128_with_seed(s, seed))),
  ),
];

#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
static CITYHASHCRC: &[Entry] = &[
  Entry::new(
    "CityHashCrc128",
    Kernel::Plain(|s| HostInt::from_digest128(city::crc::hash_crc128(s))),
  ),
  Entry::new(
    "CityHashCrc128WithSeed",
    Kernel::Seed128(|s, seed| HostInt::from_digest128(city::crc::hash_crc128_with_seed(s, seed))),
  ),
  Entry::new(
    "CityHashCrc256",
    Kernel::Plain(|s| HostInt::U256(city::crc::hash_crc256(s))),
  ),
];

static FARMHASH: &[Entry] = &[
  Entry::new("FarmHash32", Kernel::Plain(|s| HostInt::U32(farm::hash32(s)))),
  Entry::new(
    "FarmHash32WithSeed",
    Kernel::Seed32(|s, seed| HostInt::U32(farm::hash32_with_seed(s, seed))),
  ),
  Entry::new("FarmHash64", Kernel::Plain(|s| HostInt::U64(farm::hash64(s)))),
  Entry::new(
    "FarmHash64WithSeed",
    Kernel::Seed64(|s, seed| HostInt::U64(farm::hash64_with_seed(s, seed))),
  ),
  Entry::new(
    "FarmHash64WithSeeds",
    Kernel::Seeds64(|s, seed0, seed1| HostInt::U64(farm::hash64_with_seeds(s, seed0, seed1))),
  ),
  Entry::new(
    "FarmHash128",
    Kernel::Plain(|s| HostInt::from_digest128(farm::hash128(s))),
  ),
  Entry::new(
    "FarmHash128WithSeed",
    Kernel::Seed128(|s, seed| HostInt::from_digest128(farm::hash128_with_seed(s, seed))),
  ),
  Entry::new(
    "Fingerprint32",
    Kernel::Plain(|s| HostInt::U32(fingerprint::fingerprint32(s))),
  ),
  Entry::new(
    "Fingerprint64",
    Kernel::Plain(|s| HostInt::U64(fingerprint::fingerprint64(s))),
  ),
  Entry::new(
    "Fingerprint128",
    Kernel::Plain(|s| HostInt::from_digest128(fingerprint::fingerprint128(s))),
  ),
];

/// A loaded module: a named table of functions.
#[derive(Clone, Copy)]
pub struct Module {
  name: &'static str,
  entries: &'static [Entry],
}

impl Module {
  /// Names of every module this build knows about, loadable or not.
  pub const NAMES: [&'static str; 3] = ["cityhash", "cityhashcrc", "farmhash"];

  /// Load a module using [`Config::current`].
  ///
  /// # Errors
  ///
  /// See [`Module::load_with`].
  pub fn load(name: &str) -> Result<Self, BindingError> {
    Self::load_with(name, Config::current())
  }

  /// Load a module with an explicit configuration.
  ///
  /// # Errors
  ///
  /// [`BindingError::UnknownModule`] for an unknown name, and
  /// [`BindingError::Unsupported`] when `cityhashcrc` is requested on a build
  /// or CPU without SSE4.2, or with CRC disabled by `config`.
  pub fn load_with(name: &str, config: Config) -> Result<Self, BindingError> {
    match name {
      "cityhash" => Ok(Self {
        name: "cityhash",
        entries: CITYHASH,
      }),
      "farmhash" => Ok(Self {
        name: "farmhash",
        entries: FARMHASH,
      }),
      "cityhashcrc" => load_crc(config),
      other => Err(BindingError::UnknownModule(other.to_string())),
    }
  }

  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Function names in registration order.
  pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.entries.iter().map(Entry::name)
  }

  #[must_use]
  pub fn function(&self, name: &str) -> Option<&'static Entry> {
    self.entries.iter().find(|e| e.name == name)
  }

  /// Look up `name` and call it with `args`.
  ///
  /// # Errors
  ///
  /// [`BindingError::UnknownFunction`], or any error from [`Entry::call`].
  pub fn call(&self, name: &str, args: &[HostValue<'_>]) -> Result<HostInt, BindingError> {
    self
      .function(name)
      .ok_or_else(|| BindingError::UnknownFunction(name.to_string()))?
      .call(args)
  }
}

impl fmt::Debug for Module {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Module")
      .field("name", &self.name)
      .field("functions", &self.entries.len())
      .finish()
  }
}

#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
fn load_crc(config: Config) -> Result<Module, BindingError> {
  if config.crc == super::CrcMode::Off {
    return Err(traits::UnsupportedCapability::new("sse4.2").into());
  }
  city::crc::check()?;
  Ok(Module {
    name: "cityhashcrc",
    entries: CITYHASHCRC,
  })
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "sse4.2")))]
fn load_crc(_config: Config) -> Result<Module, BindingError> {
  Err(traits::UnsupportedCapability::new("sse4.2").into())
}
