// src/coords/authalic.rs

//! Geodetic <-> authalic latitude on the WGS84 ellipsoid.
//!
//! Both directions are order-6 Fourier series in the third flattening, summed
//! with Clenshaw's recurrence. Projecting authalic latitudes onto the sphere
//! keeps cell areas equal on the ellipsoid.

/// Series coefficients taking geodetic latitude to authalic latitude.
#[rustfmt::skip]
const GEODETIC_TO_AUTHALIC: [f64; 6] = [
  -2.239_209_838_678_639_4e-3,
   2.130_860_651_325_021_7e-6,
  -2.559_257_686_421_274_2e-9,
   3.370_196_526_780_283_7e-12,
  -4.667_545_312_611_248_7e-15,
   6.674_928_703_848_159_6e-18,
];

/// Series coefficients taking authalic latitude back to geodetic latitude.
#[rustfmt::skip]
const AUTHALIC_TO_GEODETIC: [f64; 6] = [
  2.239_208_996_354_165_7e-3,
  2.883_197_804_860_755_6e-6,
  5.086_220_739_972_660_3e-9,
  1.020_181_237_781_610_0e-11,
  2.191_287_230_676_771_8e-14,
  4.928_423_548_252_380_6e-17,
];

/// Sums `phi + sum(c[k] * sin(2(k+1) phi))` with Clenshaw's recurrence.
#[inline]
fn _apply_coefficients(phi: f64, coefficients: &[f64; 6]) -> f64 {
  let (sin_phi, cos_phi) = phi.sin_cos();
  // cos(2 phi)
  let x = 2.0 * (cos_phi - sin_phi) * (cos_phi + sin_phi);

  let mut u0 = 0.0;
  let mut u1 = 0.0;
  for &c in coefficients.iter().rev() {
    let t = x * u0 - u1 + c;
    u1 = u0;
    u0 = t;
  }

  phi + 2.0 * sin_phi * cos_phi * u0
}

/// Converts a geodetic latitude (radians) to an authalic latitude (radians).
#[must_use]
pub fn geodetic_to_authalic(phi: f64) -> f64 {
  _apply_coefficients(phi, &GEODETIC_TO_AUTHALIC)
}

/// Converts an authalic latitude (radians) to a geodetic latitude (radians).
#[must_use]
pub fn authalic_to_geodetic(phi: f64) -> f64 {
  _apply_coefficients(phi, &AUTHALIC_TO_GEODETIC)
}
