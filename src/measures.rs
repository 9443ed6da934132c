// src/measures.rs

use crate::a5_index::{deserialize, get_num_cells};
use crate::constants::{AUTHALIC_RADIUS_EARTH_KM, M_PI};
use crate::indexing::from_a5::_cell_polygon;
use crate::types::{A5Error, A5Index};

/// Area of the unit sphere.
const SPHERE_AREA_RADS2: f64 = 4.0 * M_PI;

/// Average cell area at `resolution` in steradians.
///
/// Cells are equal-area by construction up to the warp's residual distortion,
/// so this is also the nominal area of any single cell.
pub fn get_cell_area_avg_rads2(resolution: i32) -> Result<f64, A5Error> {
  Ok(SPHERE_AREA_RADS2 / get_num_cells(resolution)? as f64)
}

/// Average cell area at `resolution` in square kilometers.
pub fn get_cell_area_avg_km2(resolution: i32) -> Result<f64, A5Error> {
  Ok(get_cell_area_avg_rads2(resolution)? * AUTHALIC_RADIUS_EARTH_KM * AUTHALIC_RADIUS_EARTH_KM)
}

/// Average cell area at `resolution` in square meters.
pub fn get_cell_area_avg_m2(resolution: i32) -> Result<f64, A5Error> {
  Ok(get_cell_area_avg_km2(resolution)? * 1_000_000.0)
}

/// Area of a cell in steradians, from its spherical polygon.
pub fn cell_area_rads2(index: A5Index) -> Result<f64, A5Error> {
  let cell = deserialize(index)?;
  if cell.resolution == 0 {
    return Ok(SPHERE_AREA_RADS2);
  }
  Ok(_cell_polygon(&cell)?.area())
}

/// Area of a cell in square kilometers on the authalic sphere.
pub fn cell_area_km2(index: A5Index) -> Result<f64, A5Error> {
  Ok(cell_area_rads2(index)? * AUTHALIC_RADIUS_EARTH_KM * AUTHALIC_RADIUS_EARTH_KM)
}

/// Area of a cell in square meters on the authalic sphere.
pub fn cell_area_m2(index: A5Index) -> Result<f64, A5Error> {
  Ok(cell_area_km2(index)? * 1_000_000.0)
}
