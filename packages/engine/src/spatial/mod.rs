//! Spatial storage for the universe.

pub mod grid;
