//! Helpers shared by the puzzle solutions

pub mod dp_cache;
pub mod grid;
pub mod text;
