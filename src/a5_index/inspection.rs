// src/a5_index/inspection.rs

use super::{deserialize, serialize};
use crate::constants::{FIRST_HILBERT_RESOLUTION, MAX_RESOLUTION, NUM_ORIGINS, NUM_ORIGIN_SEGMENTS};
use crate::math::extensions::_ipow4;
use crate::types::{A5Cell, A5Error, A5Index};

/// Whether `index` is a canonical cell identifier.
///
/// Decoding must succeed and re-encoding must reproduce the same bits.
#[must_use]
pub fn is_valid_cell(index: A5Index) -> bool {
  match deserialize(index) {
    Ok(cell) => serialize(&cell) == Ok(index),
    Err(_) => false,
  }
}

/// Number of cells covering the sphere at `resolution`.
pub fn get_num_cells(resolution: i32) -> Result<u64, A5Error> {
  match resolution {
    r if !(0..=MAX_RESOLUTION).contains(&r) => Err(A5Error::InvalidResolution),
    0 => Ok(1),
    1 => Ok(NUM_ORIGINS as u64),
    r => Ok(NUM_ORIGIN_SEGMENTS * _ipow4(r - FIRST_HILBERT_RESOLUTION + 1)),
  }
}

/// The 12 face cells at resolution 1, in curve order.
#[must_use]
pub fn get_res1_cells() -> Vec<A5Index> {
  (0..NUM_ORIGINS as u8)
    .filter_map(|origin_id| {
      serialize(&A5Cell {
        origin_id,
        segment: 0,
        s: 0,
        resolution: 1,
      })
      .ok()
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::WORLD_CELL;

  #[test]
  fn test_get_num_cells() {
    assert_eq!(get_num_cells(0), Ok(1));
    assert_eq!(get_num_cells(1), Ok(12));
    assert_eq!(get_num_cells(2), Ok(60));
    assert_eq!(get_num_cells(3), Ok(240));
    assert_eq!(get_num_cells(MAX_RESOLUTION), Ok(60 * (1u64 << 56)));
    assert_eq!(get_num_cells(-1), Err(A5Error::InvalidResolution));
    assert_eq!(get_num_cells(31), Err(A5Error::InvalidResolution));
  }

  #[test]
  fn test_get_res1_cells() {
    let cells = get_res1_cells();
    assert_eq!(cells.len(), 12);
    for (i, cell) in cells.iter().enumerate() {
      assert!(is_valid_cell(*cell));
      assert_eq!(cell.0 >> 58, i as u64, "curve order");
    }
  }

  #[test]
  fn test_is_valid_cell() {
    assert!(is_valid_cell(WORLD_CELL));
    assert!(is_valid_cell(A5Index(0x4f08_0000_0000_0000)));
    assert!(!is_valid_cell(A5Index(1u64 << 58)), "no marker");
    assert!(!is_valid_cell(A5Index(0xffff_ffff_ffff_ffff)), "top field out of range");
  }
}
