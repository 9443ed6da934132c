// src/a5_index/string_conv.rs

use crate::types::{A5Error, A5Index};

/// Parses a hexadecimal cell index, with or without leading zeros.
///
/// The string is not checked for being a valid cell; see `is_valid_cell`.
pub fn string_to_a5_index(s: &str) -> Result<A5Index, A5Error> {
  if s.is_empty() {
    return Err(A5Error::InvalidString);
  }
  u64::from_str_radix(s, 16)
    .map(A5Index)
    .map_err(|_| A5Error::InvalidString)
}

/// Lowercase hexadecimal form of a cell index, without prefix or padding.
#[must_use]
pub fn a5_index_to_string(index: A5Index) -> String {
  format!("{:x}", index.0)
}
