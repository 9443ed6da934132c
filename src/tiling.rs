// src/tiling.rs

//! Planar cell shapes on a dodecahedron face.

use crate::constants::TWO_PI_OVER_5;
use crate::coords::transforms::ij_to_face;
use crate::hilbert::{NO, YES};
use crate::math::extensions::_pow2;
use crate::math::vec2d::_v2d_rotate;
use crate::pentagon::{PentagonShape, PENTAGON, TRIANGLE, V, W};
use crate::types::{Anchor, Vec2d};

/// Pentagon of the cell at Hilbert resolution `resolution` named by `anchor` in `quintant`.
#[must_use]
pub fn get_pentagon_vertices(resolution: i32, quintant: u8, anchor: &Anchor) -> PentagonShape {
  let mut pentagon = PENTAGON.clone();
  let flips = anchor.flips;

  if flips == [NO, YES] {
    pentagon = pentagon.rotate180();
  }

  let flip_sum = flips[0] + flips[1];
  if ((flip_sum == -2 || flip_sum == 2) && anchor.k > 1) || (flip_sum == 0 && (anchor.k == 0 || anchor.k == 3)) {
    pentagon = pentagon.reflect_y();
  }

  if flips == [YES, YES] {
    pentagon = pentagon.rotate180();
  } else if flips[0] == YES {
    pentagon = pentagon.translate(&Vec2d { x: -W.x, y: -W.y });
  } else if flips[1] == YES {
    pentagon = pentagon.translate(&W);
  }

  pentagon
    .translate(&ij_to_face(&anchor.offset))
    .scale(_pow2(-resolution))
    .rotate(f64::from(quintant) * TWO_PI_OVER_5)
}

/// The (u, v, w) triangle of `quintant`.
#[must_use]
pub fn get_quintant_vertices(quintant: u8) -> PentagonShape {
  TRIANGLE.rotate(f64::from(quintant) * TWO_PI_OVER_5)
}

/// The whole face pentagon.
#[must_use]
pub fn get_face_vertices() -> PentagonShape {
  let vertices = (0..5).map(|q| _v2d_rotate(&V, f64::from(q) * TWO_PI_OVER_5)).collect();
  PentagonShape::new(vertices)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hilbert::s_to_anchor;
  use crate::math::vec2d::_v2d_almost_equals;
  use crate::types::Orientation;

  #[test]
  fn test_face_is_five_quintants() {
    let face = get_face_vertices();
    assert_eq!(face.vertices().len(), 5);
    let quintant_area = get_quintant_vertices(0).signed_area();
    assert!((face.signed_area() - 5.0 * quintant_area).abs() < 1e-12);
  }

  #[test]
  fn test_quintant_rotation() {
    let q1 = get_quintant_vertices(1);
    let expected = _v2d_rotate(&V, TWO_PI_OVER_5);
    assert!(q1.vertices().iter().any(|p| _v2d_almost_equals(p, &expected, 1e-12)));
  }

  #[test]
  fn test_children_area_sums_to_quintant() {
    // Each Hilbert level quarters the area; 4^h pentagons cover a quintant.
    for resolution in 1..=3 {
      let count = 1u64 << (2 * resolution);
      let total: f64 = (0..count)
        .map(|s| get_pentagon_vertices(resolution, 0, &s_to_anchor(s, resolution, Orientation::UV)).signed_area())
        .sum();
      let quintant = get_quintant_vertices(0).signed_area();
      assert!((total - quintant).abs() < 1e-12, "resolution {resolution}: {total} vs {quintant}");
    }
  }

  #[test]
  fn test_pentagons_wind_counter_clockwise() {
    for s in 0..16 {
      for orientation in [Orientation::UV, Orientation::WU, Orientation::VW] {
        let pentagon = get_pentagon_vertices(2, 3, &s_to_anchor(s, 2, orientation));
        assert!(pentagon.signed_area() > 0.0, "s = {s}, {orientation:?}");
      }
    }
  }
}
