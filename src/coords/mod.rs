// src/coords/mod.rs

pub mod authalic;
pub mod transforms;
