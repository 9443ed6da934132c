//! Core A5 data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents an A5 cell index.
/// This is a 64-bit unsigned integer; see `a5_index` for the bit layout.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct A5Index(pub u64);

/// The single resolution 0 cell, covering the whole sphere.
pub const WORLD_CELL: A5Index = A5Index(0);

/// Longitude/latitude coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LonLat {
  /// Longitude in degrees.
  pub lon: f64,
  /// Latitude in degrees.
  pub lat: f64,
}

impl LonLat {
  #[inline]
  #[must_use]
  pub const fn new(lon: f64, lat: f64) -> Self {
    Self { lon, lat }
  }
}

/// Spherical coordinates in radians.
///
/// `theta` is the azimuth and `phi` the polar angle measured from the north pole
/// (colatitude, not latitude).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spherical {
  /// Azimuthal angle.
  pub theta: f64,
  /// Polar angle from the north pole.
  pub phi: f64,
}

/// Polar coordinates on a dodecahedron face.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polar {
  /// Distance from the face center.
  pub rho: f64,
  /// Angle from the face x axis.
  pub gamma: f64,
}

/// 2D floating-point vector. Also used for lattice (i, j) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Rotation quaternion, stored as (x, y, z, w).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quat {
  pub x: f64,
  pub y: f64,
  pub z: f64,
  pub w: f64,
}

impl Default for Quat {
  fn default() -> Self {
    Self {
      x: 0.0,
      y: 0.0,
      z: 0.0,
      w: 1.0,
    }
  }
}

/// Row-major 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat2 {
  pub m00: f64,
  pub m01: f64,
  pub m10: f64,
  pub m11: f64,
}

/// Hilbert curve orientation of a segment.
///
/// The name lists the triangle vertices the curve enters and leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Orientation {
  UV = 0,
  VU = 1,
  UW = 2,
  WU = 3,
  VW = 4,
  WV = 5,
}

/// Which warp coefficient set a resolution uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum WarpType {
  /// Resolutions below 5.
  Low = 0,
  /// Resolutions 5 and above.
  High = 1,
}

/// Flip state of one Hilbert axis: `YES` (-1) or `NO` (1).
pub type Flip = i8;

/// Decoded position of a Hilbert offset inside a segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
  /// Least significant quaternary digit.
  pub k: u8,
  /// Lattice (i, j) offset of the sub-triangle.
  pub offset: Vec2d,
  /// Flip state after the last digit.
  pub flips: [Flip; 2],
}

/// One of the 12 dodecahedron faces and its local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
  /// Position along the global curve (0-11).
  pub id: u8,
  /// Face normal.
  pub axis: Spherical,
  /// Rotation taking the north pole onto `axis`.
  pub quat: Quat,
  /// In-plane rotation of the face pentagon.
  pub angle: f64,
  /// Hilbert orientation per face-relative quintant.
  pub orientation: [Orientation; 5],
  /// Quintant the local curve starts in.
  pub first_quintant: u8,
  /// Whether the curve visits the quintants clockwise.
  pub clockwise: bool,
}

/// Decoded cell handle.
///
/// `s` is only meaningful from `FIRST_HILBERT_RESOLUTION` onwards and is 0 below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct A5Cell {
  /// Origin (face) id, 0-11.
  pub origin_id: u8,
  /// Hilbert segment within the face, 0-4.
  pub segment: u8,
  /// Offset along the segment's Hilbert curve.
  pub s: u64,
  /// Resolution, 0-30.
  pub resolution: i32,
}

/// Options for `cell_to_boundary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryOptions {
  /// Repeat the first vertex at the end of the ring.
  pub closed_ring: bool,
  /// Points per edge. `None` picks a count from the resolution.
  pub segments: Option<u32>,
}

impl Default for BoundaryOptions {
  fn default() -> Self {
    Self {
      closed_ring: true,
      segments: None,
    }
  }
}

/// Represents an A5 error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum A5Error {
  /// Resolution argument was outside of acceptable range, or a hierarchy step went the wrong way.
  #[error("resolution is out of range for this operation")]
  InvalidResolution = 1,
  /// Hilbert offset does not fit in the bits available at the resolution.
  #[error("hilbert offset is too large for the resolution")]
  OffsetOverflow = 2,
  /// Index does not decode to a valid origin, segment and resolution.
  #[error("cell index is malformed")]
  MalformedIdentifier = 3,
  /// Longitude or latitude was not finite or outside of acceptable range.
  #[error("longitude/latitude is out of range")]
  InvalidLonLat = 4,
  /// String could not be parsed as a hexadecimal cell index.
  #[error("string is not a hexadecimal cell index")]
  InvalidString = 5,
  /// Requested output is larger than the crate will allocate in one call.
  #[error("requested output exceeds the allocation limit")]
  MemoryBounds = 6,
}
