// src/polygon.rs

//! Convex polygons on the unit sphere, as produced by projecting a cell's pentagon.

use crate::constants::MAX_BOUNDARY_SEGMENTS;
use crate::math::quat::{_quat_rotate_v3d, _quat_rotation_to, _quat_slerp, QUAT_IDENTITY};
use crate::math::vec3d::{_v3d_cross, _v3d_dot, _v3d_length, _v3d_normalize, _v3d_sub};
use crate::types::Vec3d;

/// Ordered unit vectors, counter-clockwise seen from outside the sphere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SphericalPolygonShape {
  vertices: Vec<Vec3d>,
}

impl SphericalPolygonShape {
  /// Builds a polygon, reversing the vertex order if it winds clockwise.
  #[must_use]
  pub fn new(mut vertices: Vec<Vec3d>) -> Self {
    if vertices.len() >= 3 {
      let e1 = _v3d_sub(&vertices[1], &vertices[0]);
      let e2 = _v3d_sub(&vertices[2], &vertices[1]);
      if _v3d_dot(&_v3d_cross(&e1, &e2), &vertices[0]) < 0.0 {
        vertices.reverse();
      }
    }
    Self { vertices }
  }

  #[must_use]
  pub fn vertices(&self) -> &[Vec3d] {
    &self.vertices
  }

  /// Point at fraction `t` of the way around the boundary.
  ///
  /// Every edge takes an equal share of `t`; within an edge the point moves
  /// along the great circle. `t` wraps, so 1 is the first vertex again.
  #[must_use]
  pub fn slerp(&self, t: f64) -> Vec3d {
    let n = self.vertices.len();
    if n == 0 {
      return Vec3d::default();
    }
    let scaled = t.rem_euclid(1.0) * n as f64;
    let edge = (scaled.floor() as usize).min(n - 1);
    let fraction = scaled - edge as f64;

    let start = &self.vertices[edge];
    let end = &self.vertices[(edge + 1) % n];
    let rotation = _quat_slerp(&QUAT_IDENTITY, &_quat_rotation_to(start, end), fraction);
    _quat_rotate_v3d(&rotation, start)
  }

  /// Densified boundary with `segments_per_edge` points per edge.
  ///
  /// The count is clamped to [1, `MAX_BOUNDARY_SEGMENTS`]. A closed ring
  /// repeats the first point at the end.
  #[must_use]
  pub fn get_boundary(&self, segments_per_edge: u32, closed_ring: bool) -> Vec<Vec3d> {
    let segments_per_edge = segments_per_edge.clamp(1, MAX_BOUNDARY_SEGMENTS) as usize;
    let total = self.vertices.len() * segments_per_edge;
    let mut points = Vec::with_capacity(total + 1);
    for i in 0..total {
      let t = i as f64 / total as f64;
      points.push(if i % segments_per_edge == 0 {
        self.vertices[i / segments_per_edge]
      } else {
        self.slerp(t)
      });
    }
    if closed_ring {
      if let Some(&first) = points.first() {
        points.push(first);
      }
    }
    points
  }

  /// Signed containment score of unit vector `point`.
  ///
  /// The smallest sine of the angle between `point` and any edge, measured at
  /// the edge's vertices. Non-negative inside or on the boundary.
  #[must_use]
  pub fn contains_point(&self, point: &Vec3d) -> f64 {
    let n = self.vertices.len();
    let mut score = f64::INFINITY;
    for i in 0..n {
      let v = &self.vertices[i];
      let next = &self.vertices[(i + 1) % n];
      let prev = &self.vertices[(i + n - 1) % n];

      let to_point = _v3d_sub(point, v);
      if _v3d_length(&to_point) == 0.0 {
        return 0.0;
      }
      let t = _v3d_normalize(&to_point);
      let a = _v3d_normalize(&_v3d_sub(next, v));
      let b = _v3d_normalize(&_v3d_sub(prev, v));

      let s1 = _v3d_dot(&_v3d_cross(&a, &t), v);
      let s2 = _v3d_dot(&_v3d_cross(&t, &b), v);
      score = score.min(s1).min(s2);
    }
    score
  }

  /// Area in steradians, summed over a fan of spherical triangles.
  #[must_use]
  pub fn area(&self) -> f64 {
    let Some(apex) = self.vertices.first() else {
      return 0.0;
    };
    let total: f64 = self
      .vertices
      .windows(2)
      .skip(1)
      .map(|pair| _triangle_area(apex, &pair[0], &pair[1]))
      .sum();
    total.abs()
  }
}

/// Signed solid angle of triangle (a, b, c) via the Van Oosterom-Strackee formula.
fn _triangle_area(a: &Vec3d, b: &Vec3d, c: &Vec3d) -> f64 {
  let numerator = _v3d_dot(a, &_v3d_cross(b, c));
  let denominator = 1.0 + _v3d_dot(a, b) + _v3d_dot(b, c) + _v3d_dot(c, a);
  2.0 * numerator.atan2(denominator)
}
