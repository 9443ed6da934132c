// src/hierarchy/parent_child.rs

use crate::a5_index::{deserialize, serialize};
use crate::constants::{FIRST_HILBERT_RESOLUTION, MAX_CHILDREN, MAX_RESOLUTION, NUM_ORIGINS, NUM_QUINTANTS};
use crate::math::extensions::_ipow4;
use crate::origins::ORIGINS;
use crate::types::{A5Cell, A5Error, A5Index};
use log::trace;

/// Origins and segments a cell fans out over on its way to `child_res`,
/// plus the number of Hilbert levels to descend.
struct ChildSpan {
  origins: Vec<u8>,
  segments: Vec<u8>,
  levels: i32,
}

fn _child_span(cell: &A5Cell, child_res: i32) -> Result<ChildSpan, A5Error> {
  if child_res <= cell.resolution || child_res > MAX_RESOLUTION {
    return Err(A5Error::InvalidResolution);
  }

  let origins = if cell.resolution == 0 {
    (0..NUM_ORIGINS as u8).collect()
  } else {
    vec![cell.origin_id]
  };
  let segments = if (cell.resolution == 0 && child_res > 1) || cell.resolution == 1 {
    (0..NUM_QUINTANTS).collect()
  } else {
    vec![cell.segment]
  };
  let levels = (child_res - cell.resolution.max(FIRST_HILBERT_RESOLUTION - 1)).max(0);

  Ok(ChildSpan {
    origins,
    segments,
    levels,
  })
}

fn _span_size(span: &ChildSpan) -> u64 {
  span.origins.len() as u64 * span.segments.len() as u64 * _ipow4(span.levels)
}

/// Parent of `index` at `parent_res`, or one level up when `None`.
pub fn cell_to_parent(index: A5Index, parent_res: Option<i32>) -> Result<A5Index, A5Error> {
  let cell = deserialize(index)?;
  let parent_res = parent_res.unwrap_or(cell.resolution - 1);
  if parent_res < 0 || parent_res >= cell.resolution {
    return Err(A5Error::InvalidResolution);
  }

  let shift = 2 * (cell.resolution - parent_res) as u32;
  serialize(&A5Cell {
    s: cell.s.checked_shr(shift).unwrap_or(0),
    resolution: parent_res,
    ..cell
  })
}

/// All descendants of `index` at `child_res`, or one level down when `None`, in curve order.
///
/// Fails with `MemoryBounds` when there would be more than `MAX_CHILDREN` of
/// them; `cell_to_children_size` gives the count without allocating.
pub fn cell_to_children(index: A5Index, child_res: Option<i32>) -> Result<Vec<A5Index>, A5Error> {
  let cell = deserialize(index)?;
  let child_res = child_res.unwrap_or(cell.resolution + 1);
  let span = _child_span(&cell, child_res)?;
  let total = _span_size(&span);
  if total > MAX_CHILDREN {
    return Err(A5Error::MemoryBounds);
  }
  let total = usize::try_from(total).map_err(|_| A5Error::MemoryBounds)?;
  let per_segment = _ipow4(span.levels);
  let shifted = cell.s << (2 * span.levels as u32);

  let mut children = Vec::with_capacity(total);
  for &origin_id in &span.origins {
    let origin = &ORIGINS[usize::from(origin_id)];
    for &segment in &span.segments {
      for i in 0..per_segment {
        children.push(serialize(&A5Cell {
          origin_id: origin.id,
          segment,
          s: shifted + i,
          resolution: child_res,
        })?);
      }
    }
  }
  trace!("{} children of {:x} at resolution {child_res}", children.len(), index.0);
  Ok(children)
}

/// Number of cells `cell_to_children` would return.
pub fn cell_to_children_size(index: A5Index, child_res: Option<i32>) -> Result<u64, A5Error> {
  let cell = deserialize(index)?;
  let span = _child_span(&cell, child_res.unwrap_or(cell.resolution + 1))?;
  Ok(_span_size(&span))
}
