//! A5 core library constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// 2 * pi / 5, the angle of one quintant.
pub const TWO_PI_OVER_5: f64 = 2.0 * consts::PI / 5.0;
/// pi / 5
pub const PI_OVER_5: f64 = consts::PI / 5.0;
/// pi / 10
pub const PI_OVER_10: f64 = consts::PI / 10.0;

/// Golden ratio, (1 + sqrt(5)) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Distance from a face center to the middle of one of its edges, in gnomonic units.
pub const DISTANCE_TO_EDGE: f64 = PHI - 1.0;

/// Angle between a face normal and the normal of an adjacent face (atan(2)).
pub const INTERHEDRAL_ANGLE: f64 = 1.107_148_717_794_090_4;

/// Longitude added before projecting, in degrees.
/// Puts the most populated land early on the global curve.
pub const LONGITUDE_OFFSET: f64 = 93.0;

/// Epsilon for floating point comparisons in face space.
pub const EPSILON: f64 = 1e-12;

// A5 grid system constants

/// Number of dodecahedron faces.
pub const NUM_ORIGINS: usize = 12;
/// Number of quintants (and segments) per face.
pub const NUM_QUINTANTS: u8 = 5;
/// First resolution encoded with a Hilbert offset.
pub const FIRST_HILBERT_RESOLUTION: i32 = 3;
/// Maximum A5 resolution. Resolution 31 would need a 65-bit index.
pub const MAX_RESOLUTION: i32 = 30;
/// Deepest Hilbert resolution whose offsets fit in the 58 bits below the origin/segment field.
pub const MAX_HILBERT_RESOLUTION: i32 = 29;
/// Warp coefficients switch from `Low` to `High` at this resolution.
pub const WARP_HIGH_RESOLUTION: i32 = 5;

// Index bit layout

/// Bit offset of the origin/segment field; the 58 bits below it hold S and the marker.
pub const HILBERT_START_BIT: u32 = 58;
/// 1's in the 58 bits below the origin/segment field.
pub const REMOVAL_MASK: u64 = (1u64 << HILBERT_START_BIT) - 1;
/// Number of valid values of the origin/segment field.
pub const NUM_ORIGIN_SEGMENTS: u64 = 60;

/// Samples tried by `lon_lat_to_cell` around the target, excluding the target itself.
pub const CELL_SEARCH_SAMPLES: usize = 25;
/// Radius in degrees of the sample spiral at Hilbert resolution 0.
pub const CELL_SEARCH_SCALE_DEG: f64 = 50.0;

// Output limits

/// Most cells `cell_to_children` returns in one call (4^12, all resolution 14
/// descendants of a resolution 2 cell).
pub const MAX_CHILDREN: u64 = 1 << 24;
/// Most points per edge `cell_to_boundary` generates.
pub const MAX_BOUNDARY_SEGMENTS: u32 = 1 << 12;

/// Earth authalic radius in meters.
pub const AUTHALIC_RADIUS_EARTH_M: f64 = 6_371_007.2;
/// Earth authalic radius in kilometers.
pub const AUTHALIC_RADIUS_EARTH_KM: f64 = AUTHALIC_RADIUS_EARTH_M / 1000.0;
