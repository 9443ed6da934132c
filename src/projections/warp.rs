// src/projections/warp.rs

//! Area-equalizing distortion applied to face coordinates before the gnomonic projection.
//!
//! The angular part pulls points toward the quintant bisectors and the radial
//! part rescales the distance to the face edge by a quartic in the warped
//! angle. Points on the face edge stay on the edge, so the face pentagon maps
//! onto itself and neighboring faces still meet.

use crate::constants::{DISTANCE_TO_EDGE, PI_OVER_5, TWO_PI_OVER_5, WARP_HIGH_RESOLUTION};
use crate::types::{Polar, WarpType};

/// Calibration data for one warp regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpCoefficients {
  /// Scale applied to the angle inside `tan`.
  pub beta_scale: f64,
  /// Constant term of the radial quartic.
  pub c0: f64,
  /// Quadratic term of the radial quartic.
  pub c2: f64,
  /// Quartic term of the radial quartic.
  pub c4: f64,
}

/// Fitted on the areas of resolution 4 cells.
const LOW: WarpCoefficients = WarpCoefficients {
  beta_scale: 0.488_775_8,
  c0: -0.172_736_9,
  c2: -0.098_512_8,
  c4: -0.036_856_5,
};

/// Fitted on the area scale of the projection over a quintant.
const HIGH: WarpCoefficients = WarpCoefficients {
  beta_scale: 0.525_166_6,
  c0: -0.198_745_3,
  c2: 0.002_900_4,
  c4: -0.060_565_6,
};

impl WarpType {
  #[must_use]
  pub fn coefficients(self) -> &'static WarpCoefficients {
    match self {
      WarpType::Low => &LOW,
      WarpType::High => &HIGH,
    }
  }
}

/// Coefficient set used at `resolution`.
#[inline]
#[must_use]
pub fn get_warp_type(resolution: i32) -> WarpType {
  if resolution < WARP_HIGH_RESOLUTION {
    WarpType::Low
  } else {
    WarpType::High
  }
}

/// Offset of `gamma` from the nearest multiple of 2pi/5, in [-pi/5, pi/5].
#[inline]
#[must_use]
pub fn normalize_gamma(gamma: f64) -> f64 {
  let segment = gamma / TWO_PI_OVER_5;
  (segment - segment.round()) * TWO_PI_OVER_5
}

#[inline]
fn _scaler(c: &WarpCoefficients) -> f64 {
  (PI_OVER_5 * c.beta_scale).tan() / PI_OVER_5
}

#[inline]
fn _radial_factor(warped_beta: f64, c: &WarpCoefficients) -> f64 {
  let b = warped_beta / PI_OVER_5;
  let b2 = b * b;
  c.c0 + c.c2 * b2 + c.c4 * b2 * b2
}

/// Warps a polar face coordinate.
#[must_use]
pub fn warp_polar(p: &Polar, warp_type: WarpType) -> Polar {
  let c = warp_type.coefficients();
  let beta = normalize_gamma(p.gamma);
  let warped_beta = (beta * c.beta_scale).tan() / _scaler(c);

  // Fraction of the way to the face edge along the quintant bisector.
  let t = p.rho * beta.cos() / DISTANCE_TO_EDGE;
  let q = _radial_factor(warped_beta, c);
  let warped_t = t * (1.0 + q * (1.0 - t));

  Polar {
    rho: warped_t * DISTANCE_TO_EDGE / warped_beta.cos(),
    gamma: p.gamma + warped_beta - beta,
  }
}

/// Exact inverse of `warp_polar`.
#[must_use]
pub fn unwarp_polar(p: &Polar, warp_type: WarpType) -> Polar {
  let c = warp_type.coefficients();
  let warped_beta = normalize_gamma(p.gamma);
  let beta = (warped_beta * _scaler(c)).atan() / c.beta_scale;

  let warped_t = p.rho * warped_beta.cos() / DISTANCE_TO_EDGE;
  let q = _radial_factor(warped_beta, c);
  // Root of q t^2 - (1 + q) t + warped_t = 0 that is continuous at q = 0.
  let discriminant = ((1.0 + q) * (1.0 + q) - 4.0 * q * warped_t).max(0.0);
  let t = 2.0 * warped_t / ((1.0 + q) + discriminant.sqrt());

  Polar {
    rho: t * DISTANCE_TO_EDGE / beta.cos(),
    gamma: p.gamma - (warped_beta - beta),
  }
}
