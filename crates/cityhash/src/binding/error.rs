//! Errors raised by the binding layer.

use alloc::string::String;
use core::{fmt, ops::RangeInclusive};

use traits::UnsupportedCapability;

/// Failure to load a module or call one of its functions.
///
/// Hashing itself never fails; every variant is raised before any input byte
/// is read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindingError {
  /// An argument had the wrong host type (e.g. a list where a buffer is required).
  InvalidArgument {
    /// Function being called.
    function: &'static str,
    /// Host type name of the offending argument.
    got: &'static str,
  },
  /// Wrong number of positional arguments.
  Arity {
    function: &'static str,
    expected: RangeInclusive<usize>,
    got: usize,
  },
  /// The module has no function with this name.
  UnknownFunction(String),
  /// No module with this name exists.
  UnknownModule(String),
  /// The module needs a CPU capability this build or host cannot provide.
  Unsupported(UnsupportedCapability),
}

impl fmt::Display for BindingError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidArgument { function, got } => {
        write!(f, "{function}() argument must be a bytes-like object or str, not '{got}'")
      }
      Self::Arity { function, expected, got } => {
        if expected.start() == expected.end() {
          write!(f, "{function}() takes exactly {} argument(s) ({got} given)", expected.start())
        } else {
          write!(
            f,
            "{function}() takes {} to {} arguments ({got} given)",
            expected.start(),
            expected.end()
          )
        }
      }
      Self::UnknownFunction(name) => write!(f, "no function named '{name}'"),
      Self::UnknownModule(name) => write!(f, "no module named '{name}'"),
      Self::Unsupported(cap) => write!(f, "{cap}"),
    }
  }
}

impl core::error::Error for BindingError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Unsupported(cap) => Some(cap),
      _ => None,
    }
  }
}

impl From<UnsupportedCapability> for BindingError {
  #[inline]
  fn from(cap: UnsupportedCapability) -> Self {
    Self::Unsupported(cap)
  }
}

#[cfg(test)]
mod tests {
  use alloc::string::ToString;

  use super::*;

  #[test]
  fn messages() {
    let e = BindingError::InvalidArgument {
      function: "CityHash64",
      got: "list",
    };
    assert_eq!(
      e.to_string(),
      "CityHash64() argument must be a bytes-like object or str, not 'list'"
    );

    let e = BindingError::Arity {
      function: "CityHash32",
      expected: 1..=1,
      got: 2,
    };
    assert_eq!(e.to_string(), "CityHash32() takes exactly 1 argument(s) (2 given)");

    let e = BindingError::Arity {
      function: "CityHash64WithSeeds",
      expected: 1..=3,
      got: 0,
    };
    assert_eq!(e.to_string(), "CityHash64WithSeeds() takes 1 to 3 arguments (0 given)");
  }

  #[test]
  fn unsupported_exposes_source() {
    use core::error::Error as _;

    let e = BindingError::from(UnsupportedCapability::new("sse4.2"));
    assert_eq!(e.to_string(), "unsupported CPU capability: sse4.2");
    assert!(e.source().is_some());
    assert_eq!(
      BindingError::UnknownModule("nope".into()).to_string(),
      "no module named 'nope'"
    );
  }
}
