//! **wayfind-core** — coordinates and cost grids for the wayfind searches.
//!
//! This crate provides the value types the search algorithms in
//! `wayfind-paths` operate on: the unsigned grid coordinate [`Coord`] and
//! the immutable, optionally tiled cost surface [`WeightedGrid`].

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Coord;
pub use grid::{MAX_COST, WeightedGrid};
