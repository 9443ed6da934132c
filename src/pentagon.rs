// src/pentagon.rs

//! The tiling primitive: an irregular pentagon on the face lattice, the
//! (u, v, w) quintant triangle, and the lattice basis derived from them.

use crate::constants::{DISTANCE_TO_EDGE, PHI, PI_OVER_10, PI_OVER_5};
use crate::math::vec2d::{
  _mat2_from_columns, _mat2_inverse, _v2d_add, _v2d_cross, _v2d_mag, _v2d_rotate, _v2d_scale, _v2d_sub,
};
use crate::types::{Mat2, Vec2d};
use once_cell::sync::Lazy;

/// Planar polygon in face coordinates.
///
/// Every transform returns a new shape; winding is counter-clockwise unless a
/// reflection has just been applied and not yet corrected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PentagonShape {
  vertices: Vec<Vec2d>,
}

impl PentagonShape {
  /// Builds a shape, reversing the vertex order if it winds clockwise.
  #[must_use]
  pub fn new(vertices: Vec<Vec2d>) -> Self {
    let mut shape = Self { vertices };
    if shape.signed_area() < 0.0 {
      shape.vertices.reverse();
    }
    shape
  }

  #[must_use]
  pub fn vertices(&self) -> &[Vec2d] {
    &self.vertices
  }

  /// Shoelace area, positive for counter-clockwise winding.
  #[must_use]
  pub fn signed_area(&self) -> f64 {
    let n = self.vertices.len();
    let twice: f64 = (0..n)
      .map(|i| _v2d_cross(&self.vertices[i], &self.vertices[(i + 1) % n]))
      .sum();
    twice / 2.0
  }

  #[must_use]
  pub fn translate(&self, t: &Vec2d) -> Self {
    self.map(|v| _v2d_add(v, t))
  }

  #[must_use]
  pub fn scale(&self, s: f64) -> Self {
    self.map(|v| _v2d_scale(v, s))
  }

  /// Rotates counter-clockwise about the face center.
  #[must_use]
  pub fn rotate(&self, angle: f64) -> Self {
    self.map(|v| _v2d_rotate(v, angle))
  }

  #[must_use]
  pub fn rotate180(&self) -> Self {
    self.map(|v| Vec2d { x: -v.x, y: -v.y })
  }

  /// Mirrors across the x axis and reverses the vertex order to keep the winding.
  #[must_use]
  pub fn reflect_y(&self) -> Self {
    let mut vertices: Vec<Vec2d> = self.vertices.iter().map(|v| Vec2d { x: v.x, y: -v.y }).collect();
    vertices.reverse();
    Self { vertices }
  }

  /// Mean of the vertices.
  #[must_use]
  pub fn center(&self) -> Vec2d {
    let n = self.vertices.len() as f64;
    let sum = self.vertices.iter().fold(Vec2d::default(), |acc, v| _v2d_add(&acc, v));
    _v2d_scale(&sum, 1.0 / n)
  }

  /// Whether `point` is inside or on the boundary. Assumes a convex shape.
  #[must_use]
  pub fn contains_point(&self, point: &Vec2d) -> bool {
    let n = self.vertices.len();
    (0..n).all(|i| {
      let a = &self.vertices[i];
      let b = &self.vertices[(i + 1) % n];
      _v2d_cross(&_v2d_sub(b, a), &_v2d_sub(point, a)) >= 0.0
    })
  }

  fn map(&self, f: impl Fn(&Vec2d) -> Vec2d) -> Self {
    Self {
      vertices: self.vertices.iter().map(f).collect(),
    }
  }
}

/// Vertex `c` of the unscaled pentagon; found as a circle intersection.
const RAW_C: Vec2d = Vec2d {
  x: 0.788_596_668_178_700_6,
  y: 1.614_910_802_423_776_4,
};
/// Vertex `d` of the unscaled pentagon; found as a circle intersection.
const RAW_D: Vec2d = Vec2d {
  x: 1.617_101_365_938_794_5,
  y: 1.054_928_690_397_459,
};

/// Rotation aligning the pentagon's growth direction with the x axis.
static BASIS_ROTATION: Lazy<f64> = Lazy::new(|| PI_OVER_5 - RAW_C.y.atan2(RAW_C.x));

/// The tiling pentagon, scaled so its edge-midpoint distance is `2 * DISTANCE_TO_EDGE`.
pub static PENTAGON: Lazy<PentagonShape> = Lazy::new(|| {
  let raw = [
    Vec2d { x: 0.0, y: 0.0 },
    Vec2d { x: 0.0, y: 1.0 },
    RAW_C,
    RAW_D,
    Vec2d {
      x: PI_OVER_10.cos(),
      y: PI_OVER_10.sin(),
    },
  ];
  let edge_midpoint_d = 2.0 * _v2d_mag(&RAW_C) * PI_OVER_5.cos();
  let scale = 2.0 * DISTANCE_TO_EDGE / edge_midpoint_d;
  let vertices = raw
    .iter()
    .map(|v| _v2d_rotate(&_v2d_scale(v, scale), *BASIS_ROTATION))
    .collect();
  PentagonShape::new(vertices)
});

/// Distance from `u` to `v` (and to `w`).
const TRIANGLE_SIDE: f64 = DISTANCE_TO_EDGE / (PHI / 2.0); // cos(pi / 5) = phi / 2

/// Triangle vertex `v`, at +pi/5 from the quintant bisector.
pub static V: Lazy<Vec2d> = Lazy::new(|| Vec2d {
  x: TRIANGLE_SIDE * PI_OVER_5.cos(),
  y: TRIANGLE_SIDE * PI_OVER_5.sin(),
});

/// Triangle vertex `w`, at -pi/5 from the quintant bisector.
pub static W: Lazy<Vec2d> = Lazy::new(|| Vec2d {
  x: TRIANGLE_SIDE * PI_OVER_5.cos(),
  y: -TRIANGLE_SIDE * PI_OVER_5.sin(),
});

/// Quintant 0 of the face: `u` at the face center, `v` and `w` on the face edge.
pub static TRIANGLE: Lazy<PentagonShape> = Lazy::new(|| PentagonShape::new(vec![Vec2d::default(), *V, *W]));

/// Lattice (i, j) to face (x, y): columns `v` and `w`.
pub static BASIS: Lazy<Mat2> = Lazy::new(|| _mat2_from_columns(&V, &W));

/// Face (x, y) to lattice (i, j).
pub static BASIS_INVERSE: Lazy<Mat2> = Lazy::new(|| _mat2_inverse(&BASIS));
