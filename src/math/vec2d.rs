// src/math/vec2d.rs

use crate::types::{Mat2, Vec2d};

/// Calculates the magnitude of a 2D Cartesian vector.
#[inline]
#[must_use]
pub(crate) fn _v2d_mag(v: &Vec2d) -> f64 {
  (v.x * v.x + v.y * v.y).sqrt()
}

#[inline]
#[must_use]
pub(crate) fn _v2d_add(a: &Vec2d, b: &Vec2d) -> Vec2d {
  Vec2d {
    x: a.x + b.x,
    y: a.y + b.y,
  }
}

#[inline]
#[must_use]
pub(crate) fn _v2d_sub(a: &Vec2d, b: &Vec2d) -> Vec2d {
  Vec2d {
    x: a.x - b.x,
    y: a.y - b.y,
  }
}

#[inline]
#[must_use]
pub(crate) fn _v2d_scale(v: &Vec2d, s: f64) -> Vec2d {
  Vec2d { x: v.x * s, y: v.y * s }
}

/// Rotates `v` counter-clockwise about the origin by `angle` radians.
#[inline]
#[must_use]
pub(crate) fn _v2d_rotate(v: &Vec2d, angle: f64) -> Vec2d {
  let (sin, cos) = angle.sin_cos();
  Vec2d {
    x: cos * v.x - sin * v.y,
    y: sin * v.x + cos * v.y,
  }
}

/// Z component of the 3D cross product of two planar vectors.
#[inline]
#[must_use]
pub(crate) fn _v2d_cross(a: &Vec2d, b: &Vec2d) -> f64 {
  a.x * b.y - a.y * b.x
}

/// Checks if two 2D vectors are equal within `epsilon` on each axis.
#[inline]
#[must_use]
pub(crate) fn _v2d_almost_equals(v1: &Vec2d, v2: &Vec2d, epsilon: f64) -> bool {
  (v1.x - v2.x).abs() < epsilon && (v1.y - v2.y).abs() < epsilon
}

/// Builds a matrix from its two columns.
#[inline]
#[must_use]
pub(crate) fn _mat2_from_columns(c0: &Vec2d, c1: &Vec2d) -> Mat2 {
  Mat2 {
    m00: c0.x,
    m01: c1.x,
    m10: c0.y,
    m11: c1.y,
  }
}

#[inline]
#[must_use]
pub(crate) fn _mat2_mul_v2d(m: &Mat2, v: &Vec2d) -> Vec2d {
  Vec2d {
    x: m.m00 * v.x + m.m01 * v.y,
    y: m.m10 * v.x + m.m11 * v.y,
  }
}

/// Inverse of a 2x2 matrix. The matrix must not be singular.
#[inline]
#[must_use]
pub(crate) fn _mat2_inverse(m: &Mat2) -> Mat2 {
  let det = m.m00 * m.m11 - m.m01 * m.m10;
  Mat2 {
    m00: m.m11 / det,
    m01: -m.m01 / det,
    m10: -m.m10 / det,
    m11: m.m00 / det,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::M_PI_2;

  #[test]
  fn test_v2d_mag() {
    let v = Vec2d { x: 3.0, y: 4.0 };
    let mag = _v2d_mag(&v);
    assert!((mag - 5.0).abs() < f64::EPSILON, "magnitude as expected");
  }

  #[test]
  fn test_v2d_rotate() {
    let v = Vec2d { x: 1.0, y: 0.0 };
    let r = _v2d_rotate(&v, M_PI_2);
    assert!(
      _v2d_almost_equals(&r, &Vec2d { x: 0.0, y: 1.0 }, 1e-15),
      "quarter turn maps x onto y"
    );
  }

  #[test]
  fn test_v2d_cross() {
    let a = Vec2d { x: 1.0, y: 0.0 };
    let b = Vec2d { x: 0.0, y: 2.0 };
    assert!((_v2d_cross(&a, &b) - 2.0).abs() < f64::EPSILON, "counter-clockwise is positive");
    assert!((_v2d_cross(&b, &a) + 2.0).abs() < f64::EPSILON, "clockwise is negative");
  }

  #[test]
  fn test_mat2_inverse() {
    let m = _mat2_from_columns(&Vec2d { x: 2.0, y: 1.0 }, &Vec2d { x: -1.0, y: 3.0 });
    let inv = _mat2_inverse(&m);
    let v = Vec2d { x: 0.3, y: -1.7 };
    let back = _mat2_mul_v2d(&inv, &_mat2_mul_v2d(&m, &v));
    assert!(_v2d_almost_equals(&back, &v, 1e-12), "inverse undoes the matrix");
  }

  #[test]
  fn test_v2d_almost_equals() {
    let v1 = Vec2d { x: 3.0, y: 4.0 };
    let v2 = Vec2d { x: 3.0, y: 4.0 };
    let v3 = Vec2d { x: 3.5, y: 4.0 };
    assert!(_v2d_almost_equals(&v1, &v2, f64::EPSILON), "true for equal vectors");
    assert!(!_v2d_almost_equals(&v1, &v3, f64::EPSILON), "false for different x");
  }
}
