// src/origins.rs

//! The 12 dodecahedron faces, their order along the global curve and the
//! mapping between geometric quintants and Hilbert segments.

use crate::constants::{DISTANCE_TO_EDGE, INTERHEDRAL_ANGLE, M_PI, NUM_ORIGINS, PI_OVER_5, TWO_PI_OVER_5};
use crate::coords::transforms::{quat_from_spherical, to_cartesian};
use crate::math::extensions::_mod5;
use crate::math::quat::{_quat_conjugate, _quat_mul, _quat_rotate_v3d, _quat_rotation_to};
use crate::types::{A5Cell, A5Error, Orientation, Origin, Polar, Quat, Spherical, Vec2d, Vec3d};
use log::trace;
use once_cell::sync::Lazy;

use Orientation::{UV, UW, VU, VW, WU, WV};

const CLOCKWISE_FAN: [Orientation; 5] = [VU, UW, VW, VW, VW];
const CLOCKWISE_STEP: [Orientation; 5] = [WU, UW, VW, VW, UV];
const COUNTER_STEP: [Orientation; 5] = [WU, UV, WV, WV, UW];
const COUNTER_JUMP: [Orientation; 5] = [VU, UV, WV, WU, UW];

/// Quintant cycle of each origin, by construction order.
const QUINTANT_ORIENTATIONS: [[Orientation; 5]; NUM_ORIGINS] = [
  CLOCKWISE_FAN,
  COUNTER_JUMP,
  COUNTER_STEP,
  CLOCKWISE_STEP,
  COUNTER_STEP,
  COUNTER_JUMP,
  COUNTER_STEP,
  CLOCKWISE_STEP,
  CLOCKWISE_STEP,
  CLOCKWISE_STEP,
  COUNTER_JUMP,
  COUNTER_JUMP,
];

/// First quintant of each origin, by construction order.
const QUINTANT_FIRST: [u8; NUM_ORIGINS] = [4, 2, 3, 2, 0, 4, 3, 2, 2, 0, 3, 0];

/// Construction index of the origin at each position of the global curve.
const ORIGIN_ORDER: [usize; NUM_ORIGINS] = [0, 1, 2, 4, 3, 5, 7, 8, 6, 11, 10, 9];

fn _build_origin(construction_id: usize, axis: Spherical, angle: f64) -> Origin {
  let orientation = QUINTANT_ORIENTATIONS[construction_id];
  Origin {
    id: construction_id as u8,
    axis,
    quat: quat_from_spherical(&axis),
    angle,
    orientation,
    first_quintant: QUINTANT_FIRST[construction_id],
    clockwise: orientation == CLOCKWISE_FAN || orientation == CLOCKWISE_STEP,
  }
}

/// All origins, indexed by id.
pub static ORIGINS: Lazy<Vec<Origin>> = Lazy::new(|| {
  let mut built = Vec::with_capacity(NUM_ORIGINS);
  built.push(_build_origin(0, Spherical { theta: 0.0, phi: 0.0 }, 0.0));
  for i in 0..5 {
    let alpha = f64::from(i) * TWO_PI_OVER_5;
    let upper = Spherical {
      theta: alpha,
      phi: INTERHEDRAL_ANGLE,
    };
    let lower = Spherical {
      theta: alpha + PI_OVER_5,
      phi: M_PI - INTERHEDRAL_ANGLE,
    };
    built.push(_build_origin(built.len(), upper, PI_OVER_5));
    built.push(_build_origin(built.len(), lower, PI_OVER_5));
  }
  built.push(_build_origin(built.len(), Spherical { theta: 0.0, phi: M_PI }, 0.0));

  ORIGIN_ORDER
    .iter()
    .enumerate()
    .map(|(id, &construction_id)| Origin {
      id: id as u8,
      ..built[construction_id].clone()
    })
    .collect()
});

impl A5Cell {
  /// The origin this cell lies on.
  ///
  /// Fails with `MalformedIdentifier` when `origin_id` is 12 or more.
  #[inline]
  pub fn origin(&self) -> Result<&'static Origin, A5Error> {
    ORIGINS
      .get(usize::from(self.origin_id))
      .ok_or(A5Error::MalformedIdentifier)
  }
}

/// A Hilbert segment and the curve orientation inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOrientation {
  pub segment: u8,
  pub orientation: Orientation,
}

/// A face point carried onto a neighboring face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePoint {
  /// Point relative to the unfolded center of the neighboring face.
  pub offset: Vec2d,
  /// Rotation of the unfolded neighboring face.
  pub interface_quat: Quat,
}

/// A geometric quintant and the curve orientation inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuintantOrientation {
  pub quintant: u8,
  pub orientation: Orientation,
}

#[inline]
fn _step(origin: &Origin) -> i32 {
  if origin.clockwise {
    -1
  } else {
    1
  }
}

/// Maps a geometric quintant (0-4, counter-clockwise from the face x axis) to its segment.
#[must_use]
pub fn quintant_to_segment(quintant: u8, origin: &Origin) -> SegmentOrientation {
  let first = i32::from(origin.first_quintant);
  let delta = _mod5(i32::from(quintant) - first);
  let face_relative = _mod5(_step(origin) * i32::from(delta));
  SegmentOrientation {
    segment: _mod5(first + i32::from(face_relative)),
    orientation: origin.orientation[usize::from(face_relative)],
  }
}

/// Inverse of `quintant_to_segment`.
#[must_use]
pub fn segment_to_quintant(segment: u8, origin: &Origin) -> QuintantOrientation {
  let first = i32::from(origin.first_quintant);
  let face_relative = _mod5(i32::from(segment) - first);
  QuintantOrientation {
    quintant: _mod5(first + _step(origin) * i32::from(face_relative)),
    orientation: origin.orientation[usize::from(face_relative)],
  }
}

/// Quintant containing a face point given in polar coordinates.
#[inline]
#[must_use]
pub fn get_quintant(polar: &Polar) -> u8 {
  _mod5((polar.gamma / TWO_PI_OVER_5).round() as i32)
}

/// Haversine-style distance that preserves ordering, without the final `asin`.
#[inline]
fn _haversine(a: &Spherical, b: &Spherical) -> f64 {
  let dphi = ((b.phi - a.phi) / 2.0).sin();
  let dtheta = ((b.theta - a.theta) / 2.0).sin();
  dphi * dphi + a.phi.sin() * b.phi.sin() * dtheta * dtheta
}

/// Origin whose axis is closest to `point`. Ties go to the lower id.
#[must_use]
pub fn find_nearest_origin(point: &Spherical) -> &'static Origin {
  let mut nearest = &ORIGINS[0];
  let mut min_distance = f64::INFINITY;
  for origin in ORIGINS.iter() {
    let distance = _haversine(point, &origin.axis);
    if distance < min_distance {
      min_distance = distance;
      nearest = origin;
    }
  }
  trace!("nearest origin to {point:?} is {}", nearest.id);
  nearest
}

/// Point of `from`'s face re-expressed relative to the face of `to`.
///
/// `point` is in `from`'s gnomonic frame (after the in-plane angle). The face
/// of `to` is unfolded across the shared edge so its center sits at distance
/// `2 * DISTANCE_TO_EDGE`. Returns the point relative to that center together
/// with the rotation of the unfolded face.
#[must_use]
pub fn move_point_to_face(point: &Vec2d, from: &Origin, to: &Origin) -> FacePoint {
  let local = _quat_rotate_v3d(&_quat_conjugate(&from.quat), &to_cartesian(&to.axis));
  let len = local.x.hypot(local.y);
  let scale = 2.0 * DISTANCE_TO_EDGE / len;
  let offset = Vec2d {
    x: point.x - local.x * scale,
    y: point.y - local.y * scale,
  };
  let north = Vec3d { x: 0.0, y: 0.0, z: 1.0 };
  FacePoint {
    offset,
    interface_quat: _quat_mul(&from.quat, &_quat_rotation_to(&north, &local)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::coords::transforms::from_lon_lat;
  use crate::math::vec3d::_point_square_dist;
  use crate::types::LonLat;

  #[test]
  fn test_origin_table() {
    assert_eq!(ORIGINS.len(), NUM_ORIGINS);
    for (i, origin) in ORIGINS.iter().enumerate() {
      assert_eq!(usize::from(origin.id), i, "ids follow the curve order");
    }
    assert!(ORIGINS[0].axis.phi.abs() < 1e-15, "origin 0 is the north pole");
    assert!((ORIGINS[9].axis.phi - M_PI).abs() < 1e-15, "origin 9 is the south pole");

    let firsts: Vec<u8> = ORIGINS.iter().map(|o| o.first_quintant).collect();
    assert_eq!(firsts, vec![4, 2, 3, 0, 2, 4, 2, 2, 3, 0, 3, 0]);
    let clockwise: Vec<bool> = ORIGINS.iter().map(|o| o.clockwise).collect();
    assert_eq!(
      clockwise,
      vec![true, false, false, false, true, false, true, true, false, false, false, true]
    );
  }

  #[test]
  fn test_quat_points_north_to_axis() {
    let north = Vec3d { x: 0.0, y: 0.0, z: 1.0 };
    for origin in ORIGINS.iter() {
      let rotated = _quat_rotate_v3d(&origin.quat, &north);
      assert!(_point_square_dist(&rotated, &to_cartesian(&origin.axis)) < 1e-24);
    }
  }

  #[test]
  fn test_quintant_segment_round_trip() {
    for origin in ORIGINS.iter() {
      let mut segments = Vec::new();
      for quintant in 0..5 {
        let so = quintant_to_segment(quintant, origin);
        let qo = segment_to_quintant(so.segment, origin);
        assert_eq!(qo.quintant, quintant, "origin {}", origin.id);
        assert_eq!(qo.orientation, so.orientation, "origin {}", origin.id);
        segments.push(so.segment);
      }
      segments.sort_unstable();
      assert_eq!(segments, vec![0, 1, 2, 3, 4], "segments are a permutation");
    }
  }

  #[test]
  fn test_first_quintant_is_first_segment_slot() {
    for origin in ORIGINS.iter() {
      let so = quintant_to_segment(origin.first_quintant, origin);
      assert_eq!(so.segment, origin.first_quintant);
      assert_eq!(so.orientation, origin.orientation[0]);
    }
  }

  #[test]
  fn test_get_quintant() {
    assert_eq!(get_quintant(&Polar { rho: 0.1, gamma: 0.1 }), 0);
    assert_eq!(get_quintant(&Polar { rho: 0.1, gamma: TWO_PI_OVER_5 }), 1);
    assert_eq!(get_quintant(&Polar { rho: 0.1, gamma: -TWO_PI_OVER_5 }), 4);
    assert_eq!(get_quintant(&Polar { rho: 0.1, gamma: M_PI - 0.01 }), 2);
  }

  #[test]
  fn test_cell_origin() {
    let cell = A5Cell {
      origin_id: 11,
      segment: 0,
      s: 0,
      resolution: 1,
    };
    assert_eq!(cell.origin().map(|o| o.id), Ok(11));
    let bad = A5Cell { origin_id: 12, ..cell };
    assert_eq!(bad.origin(), Err(A5Error::MalformedIdentifier));
    let worse = A5Cell { origin_id: u8::MAX, ..cell };
    assert_eq!(worse.origin(), Err(A5Error::MalformedIdentifier));
  }

  #[test]
  fn test_find_nearest_origin() {
    for origin in ORIGINS.iter() {
      assert_eq!(find_nearest_origin(&origin.axis).id, origin.id);
    }
    assert_eq!(find_nearest_origin(&from_lon_lat(&LonLat::new(0.0, 0.0))).id, 3);
  }

  #[test]
  fn test_move_point_to_face_neighbours() {
    let north = Vec3d { x: 0.0, y: 0.0, z: 1.0 };
    let from = &ORIGINS[0];
    for to in ORIGINS.iter().filter(|o| (o.axis.phi - INTERHEDRAL_ANGLE).abs() < 1e-9) {
      let FacePoint { offset, interface_quat } = move_point_to_face(&Vec2d::default(), from, to);
      let len = offset.x.hypot(offset.y);
      assert!((len - 2.0 * DISTANCE_TO_EDGE).abs() < 1e-12, "face center is one face away");
      let axis = _quat_rotate_v3d(&interface_quat, &north);
      assert!(
        _point_square_dist(&axis, &to_cartesian(&to.axis)) < 1e-20,
        "interface rotation points at origin {}",
        to.id
      );
    }
  }
}
