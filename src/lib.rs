// src/lib.rs

pub mod attacks;
pub mod config;
pub mod core;
pub mod curve;
pub mod integer_math;
pub mod relations;

pub use relations::search::{guess_relations, guess_relations_with_config};
