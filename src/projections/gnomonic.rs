// src/projections/gnomonic.rs

use crate::types::{Polar, Spherical};

/// Face polar coordinates to spherical coordinates about the face normal.
///
/// The face plane is tangent to the unit sphere at the north pole.
#[inline]
#[must_use]
pub fn project_gnomonic(p: &Polar) -> Spherical {
  Spherical {
    theta: p.gamma,
    phi: p.rho.atan(),
  }
}

/// Inverse of `project_gnomonic`. Only valid on the northern hemisphere.
#[inline]
#[must_use]
pub fn unproject_gnomonic(s: &Spherical) -> Polar {
  Polar {
    rho: s.phi.tan(),
    gamma: s.theta,
  }
}
