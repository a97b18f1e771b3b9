use std::fmt;

use wayfind_core::Coord;

/// Ways a single search invocation can fail. All of them are final: the
/// search does not retry or fall back to a partial answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal lies outside the grid.
    OutOfBounds(Coord),
    /// The grid frontier drained before the goal was finalized.
    UnreachableGoal { start: Coord, goal: Coord },
    /// The state frontier drained without reaching a goal state.
    NoSolution { expanded: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "search: {c} is outside the grid"),
            Self::UnreachableGoal { start, goal } => {
                write!(f, "search: no path from {start} to {goal}")
            }
            Self::NoSolution { expanded } => write!(
                f,
                "search: no goal state reachable ({expanded} states expanded)"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
