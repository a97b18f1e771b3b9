//! Shortest-path searches over tiled cost grids and implicit state graphs.
//!
//! - **Grid Dijkstra** between two cells ([`grid::find_min_cost`],
//!   [`grid::find_min_path`]) or from one cell to all ([`grid::distance_map`])
//! - **State-space search** over caller-defined states
//!   ([`state::search`], [`state::find_min_cost`]), Dijkstra or A*
//!
//! Both share one skeleton: a cost-ordered [`Frontier`] that accepts
//! duplicate entries, and a finalized set that discards stale ones on pop.
//! Every search owns its frontier and finalized set, so calls are
//! independent of each other.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`CostGrid`] | grid searches |
//! | [`StateSpace`] | state-space search (override `estimate` for A*) |

mod error;
mod frontier;
pub mod grid;
pub mod state;
mod stats;
mod traits;

pub use error::SearchError;
pub use frontier::{EmptyFrontier, Frontier};
pub use grid::{DistanceMap, GridPath};
pub use state::{FnSpace, Solution};
pub use stats::SearchStats;
pub use traits::{CostGrid, StateSpace};
