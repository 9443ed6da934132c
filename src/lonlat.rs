// src/lonlat.rs

use crate::constants::{AUTHALIC_RADIUS_EARTH_KM, M_180_PI, M_PI_180};
use crate::types::{A5Error, LonLat};

/// Latitude beyond which a ring center is treated as a pole and gives no usable longitude.
const POLAR_CENTER_LAT: f64 = 89.99;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Rejects non-finite coordinates and latitudes beyond the poles.
pub(crate) fn _validate_lon_lat(ll: &LonLat) -> Result<(), A5Error> {
  if !ll.lon.is_finite() || !ll.lat.is_finite() || ll.lat.abs() > 90.0 {
    return Err(A5Error::InvalidLonLat);
  }
  Ok(())
}

/// Wraps a longitude into [-180, 180).
#[inline]
#[must_use]
pub(crate) fn _wrap_lon(lon: f64) -> f64 {
  (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Great circle distance in radians between two points, by the haversine formula.
#[must_use]
pub fn great_circle_distance_rads(a: &LonLat, b: &LonLat) -> f64 {
  let (lat_a, lat_b) = (degs_to_rads(a.lat), degs_to_rads(b.lat));
  let sin_lat_half = ((lat_b - lat_a) * 0.5).sin();
  let sin_lon_half = (degs_to_rads(b.lon - a.lon) * 0.5).sin();
  let h = sin_lat_half * sin_lat_half + lat_a.cos() * lat_b.cos() * sin_lon_half * sin_lon_half;
  let h = h.clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great circle distance in kilometers on the authalic sphere.
#[must_use]
pub fn great_circle_distance_km(a: &LonLat, b: &LonLat) -> f64 {
  great_circle_distance_rads(a, b) * AUTHALIC_RADIUS_EARTH_KM
}

/// Great circle distance in meters on the authalic sphere.
#[must_use]
pub fn great_circle_distance_m(a: &LonLat, b: &LonLat) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

/// Shifts longitudes by whole turns so the ring has no jump across the antimeridian.
///
/// Every longitude ends up within 180 degrees of the ring's center longitude,
/// which itself lies in [-180, 180). Near the poles the first point's longitude
/// stands in for the center.
#[must_use]
pub fn normalize_longitudes(ring: &[LonLat]) -> Vec<LonLat> {
  let Some(first) = ring.first() else {
    return Vec::new();
  };

  let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
  for p in ring {
    let (sin_lat, cos_lat) = degs_to_rads(p.lat).sin_cos();
    let (sin_lon, cos_lon) = degs_to_rads(p.lon).sin_cos();
    x += cos_lat * cos_lon;
    y += cos_lat * sin_lon;
    z += sin_lat;
  }
  let center_lat = rads_to_degs(z.atan2(x.hypot(y)));
  let center_lon = if center_lat.abs() > POLAR_CENTER_LAT || (x == 0.0 && y == 0.0) {
    first.lon
  } else {
    rads_to_degs(y.atan2(x))
  };
  let center_lon = _wrap_lon(center_lon);

  ring
    .iter()
    .map(|p| {
      let mut lon = p.lon;
      while lon - center_lon > 180.0 {
        lon -= 360.0;
      }
      while lon - center_lon < -180.0 {
        lon += 360.0;
      }
      LonLat::new(lon, p.lat)
    })
    .collect()
}
