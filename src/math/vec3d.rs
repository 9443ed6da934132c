// src/math/vec3d.rs

use crate::types::Vec3d;

#[inline]
#[must_use]
pub(crate) fn _v3d_dot(a: &Vec3d, b: &Vec3d) -> f64 {
  a.x * b.x + a.y * b.y + a.z * b.z
}

#[inline]
#[must_use]
pub(crate) fn _v3d_cross(a: &Vec3d, b: &Vec3d) -> Vec3d {
  Vec3d {
    x: a.y * b.z - a.z * b.y,
    y: a.z * b.x - a.x * b.z,
    z: a.x * b.y - a.y * b.x,
  }
}

#[inline]
#[must_use]
pub(crate) fn _v3d_sub(a: &Vec3d, b: &Vec3d) -> Vec3d {
  Vec3d {
    x: a.x - b.x,
    y: a.y - b.y,
    z: a.z - b.z,
  }
}

#[inline]
#[must_use]
pub(crate) fn _v3d_scale(v: &Vec3d, s: f64) -> Vec3d {
  Vec3d {
    x: v.x * s,
    y: v.y * s,
    z: v.z * s,
  }
}

#[inline]
#[must_use]
pub(crate) fn _v3d_length(v: &Vec3d) -> f64 {
  _v3d_dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`. The zero vector is returned unchanged.
#[inline]
#[must_use]
pub(crate) fn _v3d_normalize(v: &Vec3d) -> Vec3d {
  let len = _v3d_length(v);
  if len == 0.0 {
    return *v;
  }
  _v3d_scale(v, 1.0 / len)
}

/// Calculate the square of the Euclidean distance between two 3D coordinates.
#[inline]
#[must_use]
pub(crate) fn _point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  let d = _v3d_sub(v1, v2);
  _v3d_dot(&d, &d)
}
