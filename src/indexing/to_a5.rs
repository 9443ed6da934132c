// src/indexing/to_a5.rs

use crate::a5_index::serialize;
use crate::constants::{
  CELL_SEARCH_SAMPLES, CELL_SEARCH_SCALE_DEG, FIRST_HILBERT_RESOLUTION, MAX_RESOLUTION, TWO_PI_OVER_5,
};
use crate::coords::transforms::{face_to_ij, from_lon_lat, to_cartesian, to_lon_lat, to_polar, to_spherical};
use crate::hilbert::ij_to_s;
use crate::indexing::from_a5::_cell_contains;
use crate::lonlat::{_validate_lon_lat, degs_to_rads};
use crate::math::extensions::_pow2;
use crate::math::vec2d::{_v2d_rotate, _v2d_scale};
use crate::math::vec3d::{_v3d_cross, _v3d_length, _v3d_normalize};
use crate::origins::{find_nearest_origin, get_quintant, quintant_to_segment};
use crate::projections::dodecahedron::unproject_dodecahedron;
use crate::types::{A5Cell, A5Error, A5Index, LonLat, Vec3d};
use log::{debug, trace};

/// Cell whose face-local coordinates contain `ll`, without checking the cell's
/// projected boundary. Near cell edges the warp can make this a neighbor.
pub(crate) fn _estimate(ll: &LonLat, resolution: i32) -> A5Cell {
  let spherical = from_lon_lat(ll);
  let origin = find_nearest_origin(&spherical);
  let face_point = unproject_dodecahedron(&spherical, &origin.quat, origin.angle, resolution);
  let quintant = get_quintant(&to_polar(&face_point));
  let so = quintant_to_segment(quintant, origin);

  if resolution < FIRST_HILBERT_RESOLUTION {
    return A5Cell {
      origin_id: origin.id,
      segment: so.segment,
      s: 0,
      resolution,
    };
  }

  let hilbert_resolution = resolution - FIRST_HILBERT_RESOLUTION + 1;
  let in_first_quintant = _v2d_rotate(&face_point, -f64::from(quintant) * TWO_PI_OVER_5);
  let scaled = _v2d_scale(&in_first_quintant, _pow2(hilbert_resolution));
  let s = ij_to_s(&face_to_ij(&scaled), hilbert_resolution, so.orientation);

  A5Cell {
    origin_id: origin.id,
    segment: so.segment,
    s,
    resolution,
  }
}

/// The exact point followed by a spiral of nearby points in its tangent plane.
///
/// The spiral radius grows to about one cell size, so a miss by the estimate
/// is covered by a neighboring sample.
fn _search_samples(ll: &LonLat, hilbert_resolution: i32) -> Vec<LonLat> {
  let center = to_cartesian(&from_lon_lat(ll));
  let mut east = _v3d_cross(&Vec3d { x: 0.0, y: 0.0, z: 1.0 }, &center);
  if _v3d_length(&east) < 1e-9 {
    east = Vec3d { x: 1.0, y: 0.0, z: 0.0 };
  }
  let east = _v3d_normalize(&east);
  let north = _v3d_cross(&center, &east);

  let max_radius = degs_to_rads(CELL_SEARCH_SCALE_DEG) * _pow2(-hilbert_resolution);
  let mut samples = Vec::with_capacity(CELL_SEARCH_SAMPLES + 1);
  samples.push(*ll);
  for i in 0..CELL_SEARCH_SAMPLES {
    let radius = i as f64 / CELL_SEARCH_SAMPLES as f64 * max_radius;
    let (sin_r, cos_r) = radius.sin_cos();
    let (sin_a, cos_a) = (i as f64).sin_cos();
    let p = Vec3d {
      x: cos_r * center.x + sin_r * (cos_a * east.x + sin_a * north.x),
      y: cos_r * center.y + sin_r * (cos_a * east.y + sin_a * north.y),
      z: cos_r * center.z + sin_r * (cos_a * east.z + sin_a * north.z),
    };
    samples.push(to_lon_lat(&to_spherical(&p)));
  }
  samples
}

/// Finds the cell containing `ll` (degrees) at `resolution`.
pub fn lon_lat_to_cell(ll: &LonLat, resolution: i32) -> Result<A5Index, A5Error> {
  if !(0..=MAX_RESOLUTION).contains(&resolution) {
    return Err(A5Error::InvalidResolution);
  }
  _validate_lon_lat(ll)?;

  if resolution < FIRST_HILBERT_RESOLUTION {
    return serialize(&_estimate(ll, resolution));
  }

  let point = to_cartesian(&from_lon_lat(ll));
  let hilbert_resolution = resolution - FIRST_HILBERT_RESOLUTION + 1;
  let mut seen: Vec<A5Index> = Vec::with_capacity(CELL_SEARCH_SAMPLES + 1);
  let mut best: Option<(f64, A5Index)> = None;

  for sample in _search_samples(ll, hilbert_resolution) {
    let cell = _estimate(&sample, resolution);
    let index = serialize(&cell)?;
    if seen.contains(&index) {
      continue;
    }
    seen.push(index);

    let score = _cell_contains(&cell, &point)?;
    if score >= 0.0 {
      trace!("{ll:?} resolved to {:x} after {} candidates", index.0, seen.len());
      return Ok(index);
    }
    if best.map_or(true, |(best_score, _)| score > best_score) {
      best = Some((score, index));
    }
  }

  debug!("no candidate contains {ll:?} at resolution {resolution}; using the closest");
  best.map(|(_, index)| index).ok_or(A5Error::InvalidLonLat)
}
