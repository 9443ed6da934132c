// src/projections/mod.rs

pub mod dodecahedron;
pub mod gnomonic;
pub mod warp;

pub use dodecahedron::{project_dodecahedron, unproject_dodecahedron};
