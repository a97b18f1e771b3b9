use std::fmt;

use crate::geom::Coord;

/// Errors that can occur when building a [`WeightedGrid`](crate::WeightedGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A base cost outside `1..=9`.
    CostOutOfRange { at: Coord, cost: i32 },
    /// A tile multiplier of zero.
    ZeroTiles,
    /// A tile multiplier whose tiled dimensions would overflow.
    TooLarge { tiles: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::CostOutOfRange { at, cost } => {
                write!(f, "grid: cost {cost} at {at} is outside 1..=9")
            }
            Self::ZeroTiles => write!(f, "grid: tile multiplier must be at least 1"),
            Self::TooLarge { tiles } => write!(f, "grid: tile multiplier {tiles} is too large"),
        }
    }
}

impl std::error::Error for GridError {}
