// src/hilbert.rs

//! Hilbert curve over the triangular lattice of a quintant.
//!
//! Each level splits a triangle into four, numbered by one quaternary digit.
//! Two flip bits track how the current triangle is mirrored relative to the
//! top-level one. Digit shifting rewrites pairs of adjacent digits so the curve
//! stays continuous across sub-triangle boundaries.

use crate::constants::MAX_HILBERT_RESOLUTION;
use crate::math::extensions::_ipow4;
use crate::types::{Anchor, Flip, Orientation, Vec2d};

pub const YES: Flip = -1;
pub const NO: Flip = 1;

/// Flip bits toggled by each quaternary digit.
const FLIPS: [[Flip; 2]; 4] = [[NO, NO], [NO, YES], [NO, NO], [YES, NO]];

/// Offset applied when swapping i and j on a flipped axis.
const FLIP_SHIFT: Vec2d = Vec2d { x: -1.0, y: 1.0 };

const PATTERN: [u8; 8] = [0, 1, 3, 4, 5, 6, 7, 2];
const PATTERN_FLIPPED: [u8; 8] = [0, 1, 2, 7, 3, 4, 5, 6];
const PATTERN_REVERSED: [u8; 8] = [0, 1, 7, 2, 3, 4, 5, 6];
const PATTERN_FLIPPED_REVERSED: [u8; 8] = [0, 1, 2, 4, 5, 6, 7, 3];

impl Orientation {
  /// Curve runs from the far end, so offsets count down.
  #[inline]
  #[must_use]
  pub fn reverse(self) -> bool {
    matches!(self, Orientation::VU | Orientation::WU | Orientation::VW)
  }

  /// Curve is mirrored across the u-v edge.
  #[inline]
  #[must_use]
  pub fn invert_j(self) -> bool {
    matches!(self, Orientation::WV | Orientation::VW)
  }

  /// i and j swap roles.
  #[inline]
  #[must_use]
  pub fn flip_ij(self) -> bool {
    matches!(self, Orientation::WU | Orientation::UW)
  }
}

#[inline]
fn _compose_flips(a: [Flip; 2], b: [Flip; 2]) -> [Flip; 2] {
  [a[0] * b[0], a[1] * b[1]]
}

/// Flip bits contributed by `digit`.
#[inline]
#[must_use]
pub fn quaternary_to_flips(digit: u8) -> [Flip; 2] {
  FLIPS[usize::from(digit & 3)]
}

/// Lattice (k, j) position of sub-triangle `digit` under `flips`.
#[must_use]
pub fn quaternary_to_kj(digit: u8, flips: [Flip; 2]) -> Vec2d {
  let (p, q) = match (flips[0], flips[1]) {
    (NO, NO) => (Vec2d { x: 1.0, y: 0.0 }, Vec2d { x: 0.0, y: 1.0 }),
    (YES, NO) => (Vec2d { x: 0.0, y: -1.0 }, Vec2d { x: -1.0, y: 0.0 }),
    (NO, YES) => (Vec2d { x: 0.0, y: 1.0 }, Vec2d { x: 1.0, y: 0.0 }),
    _ => (Vec2d { x: -1.0, y: 0.0 }, Vec2d { x: 0.0, y: -1.0 }),
  };
  match digit {
    0 => Vec2d::default(),
    1 => p,
    2 => Vec2d {
      x: p.x + q.x,
      y: p.y + q.y,
    },
    _ => Vec2d {
      x: 2.0 * p.x + q.x,
      y: 2.0 * p.y + q.y,
    },
  }
}

#[inline]
fn _kj_to_ij(kj: &Vec2d) -> Vec2d {
  Vec2d {
    x: kj.x - kj.y,
    y: kj.y,
  }
}

/// Sub-triangle digit containing `ij`, with `ij` relative to the current pivot in level units.
#[must_use]
pub fn ij_to_quaternary(ij: &Vec2d, flips: [Flip; 2]) -> u8 {
  let (u, v) = (ij.x, ij.y);
  let a = if flips[0] == YES { -(u + v) } else { u + v };
  let b = if flips[1] == YES { -u } else { u };
  let c = if flips[0] == YES { -v } else { v };

  if flips[0] + flips[1] == 0 {
    if c < 1.0 {
      0
    } else if b > 1.0 {
      3
    } else if a > 1.0 {
      2
    } else {
      1
    }
  } else if a < 1.0 {
    0
  } else if b > 1.0 {
    3
  } else if c > 1.0 {
    2
  } else {
    1
  }
}

/// Rewrites digits `i` and `i - 1` where the plain curve would jump.
pub(crate) fn _shift_digits(digits: &mut [u8], i: usize, flips: [Flip; 2], invert_j: bool, pattern: &[u8; 8]) {
  if i == 0 {
    return;
  }
  let parent = digits[i];
  let child = digits[i - 1];

  let (needs_shift, first) = if invert_j != (flips[0] + flips[1] == 0) {
    (parent == 1 || parent == 2, parent == 1)
  } else {
    (parent < 2, parent == 0)
  };
  if !needs_shift {
    return;
  }

  let src = if first { child } else { child + 4 };
  let dst = pattern[usize::from(src)];
  digits[i - 1] = dst % 4;
  digits[i] = (parent + 4 + dst / 4 - src / 4) % 4;
}

fn _s_to_anchor(s: u64, resolution: usize, invert_j: bool, flip_ij: bool) -> Anchor {
  let mut digits = Vec::with_capacity(resolution);
  let mut rest = s;
  while rest > 0 || digits.len() < resolution {
    digits.push((rest % 4) as u8);
    rest >>= 2;
  }

  let pattern = if flip_ij { &PATTERN_FLIPPED } else { &PATTERN };
  let mut flips = [NO, NO];
  for i in (0..digits.len()).rev() {
    _shift_digits(&mut digits, i, flips, invert_j, pattern);
    flips = _compose_flips(flips, quaternary_to_flips(digits[i]));
  }

  flips = [NO, NO];
  let mut offset = Vec2d::default();
  for &digit in digits.iter().rev() {
    let child = quaternary_to_kj(digit, flips);
    offset = Vec2d {
      x: offset.x * 2.0 + child.x,
      y: offset.y * 2.0 + child.y,
    };
    flips = _compose_flips(flips, quaternary_to_flips(digit));
  }

  Anchor {
    k: digits.first().copied().unwrap_or(0),
    offset: _kj_to_ij(&offset),
    flips,
  }
}

/// Decodes Hilbert offset `s` into the sub-triangle it names.
///
/// Callers guarantee `resolution <= MAX_HILBERT_RESOLUTION` and `s < 4^resolution`;
/// `deserialize` enforces both for every cell.
#[must_use]
pub(crate) fn s_to_anchor(s: u64, resolution: i32, orientation: Orientation) -> Anchor {
  debug_assert!((0..=MAX_HILBERT_RESOLUTION).contains(&resolution), "hilbert resolution {resolution}");
  debug_assert!(s < _ipow4(resolution), "offset {s} out of range");
  let resolution = resolution.max(0) as usize;
  let s = if orientation.reverse() {
    (1u64 << (2 * resolution)) - s - 1
  } else {
    s
  };
  let mut anchor = _s_to_anchor(s, resolution, orientation.invert_j(), orientation.flip_ij());

  if orientation.flip_ij() {
    let Vec2d { x: i, y: j } = anchor.offset;
    anchor.offset = Vec2d { x: j, y: i };
    if anchor.flips[0] == YES {
      anchor.offset.x += FLIP_SHIFT.x;
      anchor.offset.y += FLIP_SHIFT.y;
    }
    if anchor.flips[1] == YES {
      anchor.offset.x -= FLIP_SHIFT.x;
      anchor.offset.y -= FLIP_SHIFT.y;
    }
  }

  if orientation.invert_j() {
    let Vec2d { x: i, y: j } = anchor.offset;
    anchor.offset.y = (1u64 << resolution) as f64 - (i + j);
    anchor.flips[0] = -anchor.flips[0];
  }

  anchor
}

fn _ij_to_s(ij: &Vec2d, invert_j: bool, flip_ij: bool, resolution: usize) -> u64 {
  let mut digits = vec![0u8; resolution];
  let mut flips = [NO, NO];
  let mut pivot = Vec2d::default();

  for i in (0..resolution).rev() {
    let scale = (1u64 << i) as f64;
    let relative = Vec2d {
      x: (ij.x - pivot.x) / scale,
      y: (ij.y - pivot.y) / scale,
    };
    let digit = ij_to_quaternary(&relative, flips);
    digits[i] = digit;

    let child = _kj_to_ij(&quaternary_to_kj(digit, flips));
    pivot.x += child.x * scale;
    pivot.y += child.y * scale;
    flips = _compose_flips(flips, quaternary_to_flips(digit));
  }

  // The flip state carries over from the descent.
  let pattern = if flip_ij {
    &PATTERN_FLIPPED_REVERSED
  } else {
    &PATTERN_REVERSED
  };
  for i in 0..resolution {
    flips = _compose_flips(flips, quaternary_to_flips(digits[i]));
    _shift_digits(&mut digits, i, flips, invert_j, pattern);
  }

  digits
    .iter()
    .rev()
    .fold(0u64, |acc, &digit| (acc << 2) | u64::from(digit))
}

/// Hilbert offset of the sub-triangle containing lattice point `ij`.
///
/// Callers guarantee `resolution <= MAX_HILBERT_RESOLUTION`. The result is
/// always below `4^resolution`.
#[must_use]
pub(crate) fn ij_to_s(ij: &Vec2d, resolution: i32, orientation: Orientation) -> u64 {
  debug_assert!((0..=MAX_HILBERT_RESOLUTION).contains(&resolution), "hilbert resolution {resolution}");
  let resolution = resolution.max(0) as usize;
  let mut ij = *ij;
  if orientation.flip_ij() {
    ij = Vec2d { x: ij.y, y: ij.x };
  }
  if orientation.invert_j() {
    ij.y = (1u64 << resolution) as f64 - (ij.x + ij.y);
  }

  let s = _ij_to_s(&ij, orientation.invert_j(), orientation.flip_ij(), resolution);
  if orientation.reverse() {
    (1u64 << (2 * resolution)) - s - 1
  } else {
    s
  }
}
