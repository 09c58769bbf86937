//! Binding configuration (programmatic + environment overrides).
//!
//! The only knob is whether the CRC module may load. Hardware support is
//! still required either way; configuration can only switch it off.

/// Whether `cityhashcrc` may load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrcMode {
  /// Load when the build and the CPU both support SSE4.2.
  #[default]
  Auto,
  /// Never load; behave as if SSE4.2 were absent.
  Off,
}

impl CrcMode {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Off => "off",
    }
  }

  /// Parse an override value. Unknown values yield `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("off")
      || value.eq_ignore_ascii_case("0")
      || value.eq_ignore_ascii_case("false")
      || value.eq_ignore_ascii_case("disable")
    {
      return Some(Self::Off);
    }
    None
  }
}

/// Full binding configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Config {
  pub crc: CrcMode,
}

impl Config {
  /// Configuration from the environment, read once per process.
  ///
  /// `CITYHASH_CRC=auto|off` (also `0`, `false`, `disable`). Unset or
  /// unrecognised values mean `auto`. Without `std` this is always the default.
  #[must_use]
  pub fn current() -> Self {
    overrides()
  }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Config {
  let crc = std::env::var("CITYHASH_CRC")
    .ok()
    .and_then(|v| CrcMode::parse(&v))
    .unwrap_or_default();
  Config { crc }
}

#[cfg(feature = "std")]
fn overrides() -> Config {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Config> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Config {
  Config::default()
}
