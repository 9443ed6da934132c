// src/coords/transforms.rs

use crate::constants::{LONGITUDE_OFFSET, M_180_PI, M_PI_180, M_PI_2};
use crate::coords::authalic::{authalic_to_geodetic, geodetic_to_authalic};
use crate::math::quat::_quat_rotation_to;
use crate::math::vec2d::_mat2_mul_v2d;
use crate::pentagon::{BASIS, BASIS_INVERSE};
use crate::types::{LonLat, Polar, Quat, Spherical, Vec2d, Vec3d};

/// Face (x, y) to polar (rho, gamma).
#[inline]
#[must_use]
pub fn to_polar(p: &Vec2d) -> Polar {
  Polar {
    rho: p.x.hypot(p.y),
    gamma: p.y.atan2(p.x),
  }
}

/// Polar (rho, gamma) to face (x, y).
#[inline]
#[must_use]
pub fn to_face(p: &Polar) -> Vec2d {
  let (sin, cos) = p.gamma.sin_cos();
  Vec2d {
    x: p.rho * cos,
    y: p.rho * sin,
  }
}

/// Face (x, y) to lattice (i, j).
#[inline]
#[must_use]
pub fn face_to_ij(p: &Vec2d) -> Vec2d {
  _mat2_mul_v2d(&BASIS_INVERSE, p)
}

/// Lattice (i, j) to face (x, y).
#[inline]
#[must_use]
pub fn ij_to_face(ij: &Vec2d) -> Vec2d {
  _mat2_mul_v2d(&BASIS, ij)
}

/// Spherical coordinates to a unit vector.
#[inline]
#[must_use]
pub fn to_cartesian(s: &Spherical) -> Vec3d {
  let (sin_phi, cos_phi) = s.phi.sin_cos();
  let (sin_theta, cos_theta) = s.theta.sin_cos();
  Vec3d {
    x: sin_phi * cos_theta,
    y: sin_phi * sin_theta,
    z: cos_phi,
  }
}

/// Unit vector to spherical coordinates.
///
/// The polar angle comes from `atan2` rather than `acos(z)`, which loses all
/// precision within about 1e-8 rad of the poles.
#[inline]
#[must_use]
pub fn to_spherical(v: &Vec3d) -> Spherical {
  Spherical {
    theta: v.y.atan2(v.x),
    phi: v.x.hypot(v.y).atan2(v.z),
  }
}

/// Geodetic longitude/latitude in degrees to spherical coordinates on the authalic sphere.
#[must_use]
pub fn from_lon_lat(ll: &LonLat) -> Spherical {
  Spherical {
    theta: (ll.lon + LONGITUDE_OFFSET) * M_PI_180,
    phi: M_PI_2 - geodetic_to_authalic(ll.lat * M_PI_180),
  }
}

/// Spherical coordinates on the authalic sphere to longitude/latitude in degrees.
///
/// Longitude is wrapped into [-180, 180).
#[must_use]
pub fn to_lon_lat(s: &Spherical) -> LonLat {
  let lon = s.theta * M_180_PI - LONGITUDE_OFFSET;
  LonLat {
    lon: (lon + 180.0).rem_euclid(360.0) - 180.0,
    lat: authalic_to_geodetic(M_PI_2 - s.phi) * M_180_PI,
  }
}

/// Rotation taking the north pole onto `axis`.
#[must_use]
pub fn quat_from_spherical(axis: &Spherical) -> Quat {
  let north = Vec3d { x: 0.0, y: 0.0, z: 1.0 };
  _quat_rotation_to(&north, &to_cartesian(axis))
}
