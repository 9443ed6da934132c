// src/indexing/mod.rs

pub mod from_a5;
pub mod to_a5;

// Re-export public functions from submodules for easier access
pub use from_a5::{cell_contains_point, cell_to_boundary, cell_to_lon_lat};
pub use to_a5::lon_lat_to_cell;
