#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Errors are documented on A5Error
#![allow(clippy::cast_possible_truncation)] // Bit fields and digit counts, review carefully
#![allow(clippy::cast_precision_loss)] // Lattice coordinates stay far below 2^52
#![allow(clippy::cast_sign_loss)] // Review carefully
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended
#![allow(clippy::unreadable_literal)] // Series coefficients are clearer this way
#![allow(clippy::similar_names)] // Can be common in math-heavy code
#![allow(clippy::wildcard_imports)] // Allow for re-exporting from modules

//! `xs-a5` is a Rust implementation of the A5 pentagonal discrete global grid.
//!
//! The sphere is split into the 12 faces of a dodecahedron, each face into 5
//! quintants, and each quintant recursively into pentagonal cells ordered
//! along a Hilbert curve. Cells are equal-area and are named by 64-bit
//! identifiers; nearby cells usually get numerically close identifiers.

// Declare modules
pub mod a5_index;
pub mod constants;
pub mod coords;
pub mod hierarchy;
pub mod hilbert;
pub mod indexing;
pub mod lonlat;
pub mod math;
pub mod measures;
pub mod origins;
pub mod pentagon;
pub mod polygon;
pub mod projections;
pub mod tiling;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::MAX_RESOLUTION;
pub use lonlat::{
  degs_to_rads, great_circle_distance_km, great_circle_distance_m, great_circle_distance_rads, normalize_longitudes,
  rads_to_degs,
};
pub use types::{
  A5Cell, A5Error, A5Index, Anchor, BoundaryOptions, LonLat, Orientation, Origin, Polar, Spherical, Vec2d, Vec3d,
  WarpType, WORLD_CELL,
};

pub use a5_index::inspection::{get_num_cells, get_res1_cells, is_valid_cell};
pub use a5_index::string_conv::{a5_index_to_string, string_to_a5_index};
pub use a5_index::{deserialize, get_resolution, serialize};
pub use coords::authalic::{authalic_to_geodetic, geodetic_to_authalic};
pub use hierarchy::{cell_to_children, cell_to_children_size, cell_to_parent};
pub use indexing::{cell_contains_point, cell_to_boundary, cell_to_lon_lat, lon_lat_to_cell};
pub use measures::{
  cell_area_km2, cell_area_m2, cell_area_rads2, get_cell_area_avg_km2, get_cell_area_avg_m2, get_cell_area_avg_rads2,
};
