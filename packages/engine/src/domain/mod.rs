//! Domain types: what a cell is, how it evolves, and how a universe is seeded.

pub mod cell;
pub mod seed;
