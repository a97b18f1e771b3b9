use std::hash::Hash;

use wayfind_core::{Coord, WeightedGrid};

/// A rectangular cost surface searched with 4-way moves.
pub trait CostGrid {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Cost of stepping onto `c`. Only called for in-bounds coordinates.
    fn cost_at(&self, c: Coord) -> u64;

    /// Whether `c` is inside the grid.
    #[inline]
    fn contains(&self, c: Coord) -> bool {
        c.x < self.width() && c.y < self.height()
    }
}

impl CostGrid for WeightedGrid {
    #[inline]
    fn width(&self) -> usize {
        WeightedGrid::width(self)
    }

    #[inline]
    fn height(&self) -> usize {
        WeightedGrid::height(self)
    }

    #[inline]
    fn cost_at(&self, c: Coord) -> u64 {
        u64::from(self.cost(c))
    }
}

/// A discrete state graph explored lazily from a start state.
///
/// States are compared by value: two configurations that mean the same
/// thing must be equal and hash equally, whatever moves produced them.
pub trait StateSpace {
    type State: Clone + Eq + Hash;

    /// Whether `state` ends the search.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Append `(transition_cost, next_state)` pairs reachable from `state`
    /// into `buf`. The caller clears `buf` before calling.
    fn expand(&self, state: &Self::State, buf: &mut Vec<(u64, Self::State)>);

    /// Lower bound on the remaining cost from `state` to any goal.
    ///
    /// Must never overestimate, and must not fall by more than the cost of
    /// any single transition (consistent), since finalized states are never
    /// reopened. The default of zero gives plain Dijkstra.
    fn estimate(&self, _state: &Self::State) -> u64 {
        0
    }
}
