// src/projections/dodecahedron.rs

//! Face coordinates <-> the sphere.
//!
//! A face point is warped, rotated by the face's in-plane angle, projected
//! gnomonically about the north pole and finally rotated onto the face axis.

use crate::coords::transforms::{to_cartesian, to_face, to_polar, to_spherical};
use crate::math::quat::{_quat_conjugate, _quat_rotate_v3d};
use crate::projections::gnomonic::{project_gnomonic, unproject_gnomonic};
use crate::projections::warp::{get_warp_type, unwarp_polar, warp_polar};
use crate::types::{Polar, Quat, Spherical, Vec2d};

/// Projects an unwarped face point of the face with rotation `quat` and in-plane `angle`.
#[must_use]
pub fn project_dodecahedron(unwarped: &Vec2d, quat: &Quat, angle: f64, resolution: i32) -> Spherical {
  let warped = warp_polar(&to_polar(unwarped), get_warp_type(resolution));
  let rotated = Polar {
    rho: warped.rho,
    gamma: warped.gamma + angle,
  };
  let local = to_cartesian(&project_gnomonic(&rotated));
  to_spherical(&_quat_rotate_v3d(quat, &local))
}

/// Inverse of `project_dodecahedron`.
///
/// `spherical` must lie on the hemisphere centered on the face axis.
#[must_use]
pub fn unproject_dodecahedron(spherical: &Spherical, quat: &Quat, angle: f64, resolution: i32) -> Vec2d {
  let local = _quat_rotate_v3d(&_quat_conjugate(quat), &to_cartesian(spherical));
  let polar = unproject_gnomonic(&to_spherical(&local));
  let unrotated = Polar {
    rho: polar.rho,
    gamma: polar.gamma - angle,
  };
  to_face(&unwarp_polar(&unrotated, get_warp_type(resolution)))
}
