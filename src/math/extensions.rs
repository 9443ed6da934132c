// src/math/extensions.rs

/// 4 raised to `exp`, as used for Hilbert offsets. `exp` must be below 32.
#[inline]
#[must_use]
pub(crate) fn _ipow4(exp: i32) -> u64 {
  debug_assert!((0..32).contains(&exp));
  1u64 << (2 * exp)
}

/// 2 raised to `exp` as a float. Negative exponents give fractions.
#[inline]
#[must_use]
pub(crate) fn _pow2(exp: i32) -> f64 {
  2f64.powi(exp)
}

/// Remainder of `value` modulo 5, always in `0..5`.
#[inline]
#[must_use]
pub(crate) fn _mod5(value: i32) -> u8 {
  value.rem_euclid(5) as u8
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ipow4() {
    assert_eq!(_ipow4(0), 1, "4^0");
    assert_eq!(_ipow4(1), 4, "4^1");
    assert_eq!(_ipow4(3), 64, "4^3");
    assert_eq!(_ipow4(29), 1u64 << 58, "4^29");
  }

  #[test]
  fn test_pow2() {
    assert!((_pow2(3) - 8.0).abs() < f64::EPSILON, "2^3");
    assert!((_pow2(-2) - 0.25).abs() < f64::EPSILON, "2^-2");
  }

  #[test]
  fn test_mod5() {
    assert_eq!(_mod5(7), 2);
    assert_eq!(_mod5(-1), 4);
    assert_eq!(_mod5(-10), 0);
  }
}
