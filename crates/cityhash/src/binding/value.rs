//! Host argument values and the single buffer conversion boundary.

use alloc::vec::Vec;

use super::BindingError;

/// An argument as the host runtime hands it over.
///
/// Buffer-like values borrow their bytes for the duration of one call only;
/// nothing here is retained past [`Module::call`](super::Module::call).
#[derive(Debug)]
pub enum HostValue<'a> {
  /// Immutable byte string.
  Bytes(&'a [u8]),
  /// Mutable byte array, viewed read-only while hashing.
  ByteArray(&'a mut Vec<u8>),
  /// A contiguous buffer exported by another object.
  MemoryView(&'a [u8]),
  /// Text, hashed as its UTF-8 encoding.
  Str(&'a str),
  /// Arbitrary-precision integer, used for seeds. A value wider than the seed
  /// a function takes is rejected, never masked.
  Int(u128),
  List(Vec<HostValue<'a>>),
  None,
}

impl HostValue<'_> {
  /// Host type name, as reported in argument errors.
  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    match self {
      Self::Bytes(_) => "bytes",
      Self::ByteArray(_) => "bytearray",
      Self::MemoryView(_) => "memoryview",
      Self::Str(_) => "str",
      Self::Int(_) => "int",
      Self::List(_) => "list",
      Self::None => "NoneType",
    }
  }

  /// Borrow the bytes of a buffer-like value.
  ///
  /// # Errors
  ///
  /// [`BindingError::InvalidArgument`] when the value is not buffer-like.
  pub fn as_buffer(&self, function: &'static str) -> Result<&[u8], BindingError> {
    match self {
      Self::Bytes(b) | Self::MemoryView(b) => Ok(*b),
      Self::ByteArray(v) => Ok(v.as_slice()),
      Self::Str(s) => Ok(s.as_bytes()),
      other => Err(BindingError::InvalidArgument {
        function,
        got: other.type_name(),
      }),
    }
  }

  /// Read an integer seed argument.
  ///
  /// # Errors
  ///
  /// [`BindingError::InvalidArgument`] when the value is not an integer.
  pub fn as_seed(&self, function: &'static str) -> Result<u128, BindingError> {
    match self {
      Self::Int(v) => Ok(*v),
      other => Err(BindingError::InvalidArgument {
        function,
        got: other.type_name(),
      }),
    }
  }
}

impl<'a> From<&'a [u8]> for HostValue<'a> {
  #[inline]
  fn from(b: &'a [u8]) -> Self {
    Self::Bytes(b)
  }
}

impl<'a> From<&'a str> for HostValue<'a> {
  #[inline]
  fn from(s: &'a str) -> Self {
    Self::Str(s)
  }
}

impl From<u64> for HostValue<'_> {
  #[inline]
  fn from(v: u64) -> Self {
    Self::Int(u128::from(v))
  }
}

impl From<u128> for HostValue<'_> {
  #[inline]
  fn from(v: u128) -> Self {
    Self::Int(v)
  }
}
