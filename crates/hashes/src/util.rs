#![allow(clippy::indexing_slicing)] // Callers bound `offset`; an out-of-range load is a bug and panics

/// Little-endian 64-bit load at `offset`.
#[inline(always)]
pub(crate) fn fetch64(input: &[u8], offset: usize) -> u64 {
  let mut word = [0u8; 8];
  word.copy_from_slice(&input[offset..offset + 8]);
  u64::from_le_bytes(word)
}

/// Little-endian 32-bit load at `offset`.
#[inline(always)]
pub(crate) fn fetch32(input: &[u8], offset: usize) -> u32 {
  let mut word = [0u8; 4];
  word.copy_from_slice(&input[offset..offset + 4]);
  u32::from_le_bytes(word)
}
