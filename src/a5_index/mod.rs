// src/a5_index/mod.rs

//! The 64-bit cell identifier.
//!
//! Layout, most significant bit first:
//! - 6 bits: `5 * origin + segment` (just `origin` at resolution 1), where
//!   `segment` is counted from the origin's first quintant;
//! - `2 * (resolution - 2)` bits of Hilbert offset, from resolution 3 onwards;
//! - a single marker bit;
//! - zeros.
//!
//! The marker position encodes the resolution. Index 0 is the world cell.

pub mod inspection;
pub mod string_conv;

use crate::constants::{
  FIRST_HILBERT_RESOLUTION, HILBERT_START_BIT, MAX_RESOLUTION, NUM_ORIGINS, NUM_ORIGIN_SEGMENTS, NUM_QUINTANTS,
  REMOVAL_MASK,
};
use crate::math::extensions::_mod5;
use crate::origins::ORIGINS;
use crate::types::{A5Cell, A5Error, A5Index, WORLD_CELL};

pub use inspection::{get_num_cells, get_res1_cells, is_valid_cell};
pub use string_conv::{a5_index_to_string, string_to_a5_index};

/// Number of Hilbert offset bits used at `resolution`.
#[inline]
#[must_use]
pub(crate) const fn _hilbert_bits(resolution: i32) -> u32 {
  if resolution < FIRST_HILBERT_RESOLUTION {
    0
  } else {
    2 * (resolution - FIRST_HILBERT_RESOLUTION + 1) as u32
  }
}

/// Distance of the marker bit below the top field.
#[inline]
const fn _marker_depth(resolution: i32) -> u32 {
  if resolution < FIRST_HILBERT_RESOLUTION {
    resolution as u32
  } else {
    _hilbert_bits(resolution) + 1
  }
}

/// Reads the resolution from the marker bit.
///
/// Fails with `MalformedIdentifier` if there is no marker or it sits where no
/// resolution puts it.
pub fn get_resolution(index: A5Index) -> Result<i32, A5Error> {
  if index == WORLD_CELL {
    return Ok(0);
  }
  let low = index.0 & REMOVAL_MASK;
  if low == 0 {
    return Err(A5Error::MalformedIdentifier);
  }
  let depth = HILBERT_START_BIT - low.trailing_zeros();
  if depth < FIRST_HILBERT_RESOLUTION as u32 {
    return Ok(depth as i32);
  }
  if depth % 2 == 0 {
    return Err(A5Error::MalformedIdentifier);
  }
  let resolution = (depth - 1) as i32 / 2 + FIRST_HILBERT_RESOLUTION - 1;
  if resolution > MAX_RESOLUTION {
    return Err(A5Error::MalformedIdentifier);
  }
  Ok(resolution)
}

/// Encodes a cell.
///
/// `s` is ignored below resolution 3, as is `segment` at resolution 1 and
/// everything at resolution 0.
pub fn serialize(cell: &A5Cell) -> Result<A5Index, A5Error> {
  let resolution = cell.resolution;
  if !(0..=MAX_RESOLUTION).contains(&resolution) {
    return Err(A5Error::InvalidResolution);
  }
  if resolution == 0 {
    return Ok(WORLD_CELL);
  }
  if cell.segment >= NUM_QUINTANTS {
    return Err(A5Error::MalformedIdentifier);
  }

  let origin = cell.origin()?;
  let top = if resolution == 1 {
    u64::from(origin.id)
  } else {
    let relative = _mod5(i32::from(cell.segment) - i32::from(origin.first_quintant));
    5 * u64::from(origin.id) + u64::from(relative)
  };
  let mut index = top << HILBERT_START_BIT;

  if resolution >= FIRST_HILBERT_RESOLUTION {
    let bits = _hilbert_bits(resolution);
    if cell.s >= 1u64 << bits {
      return Err(A5Error::OffsetOverflow);
    }
    index |= cell.s << (HILBERT_START_BIT - bits);
  }

  index |= 1u64 << (HILBERT_START_BIT - _marker_depth(resolution));
  Ok(A5Index(index))
}

/// Decodes an index into its cell.
pub fn deserialize(index: A5Index) -> Result<A5Cell, A5Error> {
  let resolution = get_resolution(index)?;
  if resolution == 0 {
    return Ok(A5Cell::default());
  }

  let top = index.0 >> HILBERT_START_BIT;
  let (origin_id, segment) = if resolution == 1 {
    if top >= NUM_ORIGINS as u64 {
      return Err(A5Error::MalformedIdentifier);
    }
    (top as u8, 0)
  } else {
    if top >= NUM_ORIGIN_SEGMENTS {
      return Err(A5Error::MalformedIdentifier);
    }
    let origin = &ORIGINS[(top / 5) as usize];
    let segment = _mod5((top % 5) as i32 + i32::from(origin.first_quintant));
    (origin.id, segment)
  };

  // Bits between the top field and the marker carry nothing below resolution 3.
  if resolution == 2 && index.0 & (1u64 << (HILBERT_START_BIT - 1)) != 0 {
    return Err(A5Error::MalformedIdentifier);
  }

  let bits = _hilbert_bits(resolution);
  let s = if bits == 0 {
    0
  } else {
    (index.0 & REMOVAL_MASK) >> (HILBERT_START_BIT - bits)
  };

  Ok(A5Cell {
    origin_id,
    segment,
    s,
    resolution,
  })
}
