//! Dijkstra shortest path on a [`CostGrid`] with 4-way moves.
//!
//! Entering a cell costs that cell's weight; the start cell is free. Stale
//! frontier entries are skipped when popped instead of being decreased in
//! place.

use wayfind_core::Coord;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::stats::SearchStats;
use crate::traits::CostGrid;

const NO_PARENT: usize = usize::MAX;

/// A cheapest route, start and goal included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPath {
    pub cost: u64,
    pub steps: Vec<Coord>,
    pub stats: SearchStats,
}

/// Minimum cost of reaching `goal` from `start`.
pub fn find_min_cost<G: CostGrid>(
    grid: &G,
    start: Coord,
    goal: Coord,
) -> Result<u64, SearchError> {
    let mut run = Run::new(grid, start)?;
    let gi = run.index_of(goal)?;
    match run.settle(Some(gi)) {
        Some(cost) => {
            log::debug!("grid {start} -> {goal}: cost {cost} ({})", run.stats);
            Ok(cost)
        }
        None => Err(run.unreachable(goal)),
    }
}

/// Like [`find_min_cost`] but also returns the route taken.
///
/// Among several cheapest routes, the one reported is the first to reach
/// the goal under the frontier's FIFO tie-breaking.
pub fn find_min_path<G: CostGrid>(
    grid: &G,
    start: Coord,
    goal: Coord,
) -> Result<GridPath, SearchError> {
    let mut run = Run::new(grid, start)?;
    let gi = run.index_of(goal)?;
    let Some(cost) = run.settle(Some(gi)) else {
        return Err(run.unreachable(goal));
    };

    let mut steps = Vec::new();
    let mut ci = gi;
    while ci != NO_PARENT {
        steps.push(run.point(ci));
        ci = run.parent[ci];
    }
    steps.reverse();

    log::debug!(
        "grid {start} -> {goal}: cost {cost} over {} steps ({})",
        steps.len(),
        run.stats
    );
    Ok(GridPath {
        cost,
        steps,
        stats: run.stats,
    })
}

/// Cheapest cost from `start` to every cell of the grid.
pub fn distance_map<G: CostGrid>(grid: &G, start: Coord) -> Result<DistanceMap, SearchError> {
    let mut run = Run::new(grid, start)?;
    run.settle(None);
    log::debug!("grid distance map from {start}: {}", run.stats);
    Ok(DistanceMap {
        width: run.width,
        costs: run.settled,
        stats: run.stats,
    })
}

/// Result of [`distance_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMap {
    width: usize,
    costs: Vec<Option<u64>>,
    stats: SearchStats,
}

impl DistanceMap {
    /// Cheapest cost to `c`, or `None` if `c` is outside the grid or was
    /// never reached.
    pub fn cost_to(&self, c: Coord) -> Option<u64> {
        if c.x >= self.width {
            return None;
        }
        self.costs.get(c.y * self.width + c.x).copied().flatten()
    }

    /// Number of cells reached.
    pub fn reached(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

// ---------------------------------------------------------------------------
// Per-invocation search state
// ---------------------------------------------------------------------------

struct Run<'g, G> {
    grid: &'g G,
    width: usize,
    start: Coord,
    // cost at finalization, indexed by flat cell index
    settled: Vec<Option<u64>>,
    parent: Vec<usize>,
    frontier: Frontier<(usize, usize)>,
    stats: SearchStats,
}

impl<'g, G: CostGrid> Run<'g, G> {
    fn new(grid: &'g G, start: Coord) -> Result<Self, SearchError> {
        if !grid.contains(start) {
            return Err(SearchError::OutOfBounds(start));
        }
        let width = grid.width();
        let len = width * grid.height();
        let mut run = Self {
            grid,
            width,
            start,
            settled: vec![None; len],
            parent: vec![NO_PARENT; len],
            frontier: Frontier::new(),
            stats: SearchStats::default(),
        };
        let si = run.idx(start);
        run.frontier.push(0, (si, NO_PARENT));
        run.stats.pushed += 1;
        Ok(run)
    }

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        c.y * self.width + c.x
    }

    #[inline]
    fn point(&self, i: usize) -> Coord {
        Coord::new(i % self.width, i / self.width)
    }

    fn index_of(&self, c: Coord) -> Result<usize, SearchError> {
        if self.grid.contains(c) {
            Ok(self.idx(c))
        } else {
            Err(SearchError::OutOfBounds(c))
        }
    }

    fn unreachable(&self, goal: Coord) -> SearchError {
        log::debug!("grid {} -> {goal}: unreachable ({})", self.start, self.stats);
        SearchError::UnreachableGoal {
            start: self.start,
            goal,
        }
    }

    /// Pop and finalize until `goal` is finalized (returning its cost) or
    /// the frontier drains.
    fn settle(&mut self, goal: Option<usize>) -> Option<u64> {
        while let Ok((cost, (ci, from))) = self.frontier.pop_min() {
            if self.settled[ci].is_some() {
                self.stats.stale += 1;
                continue;
            }
            self.settled[ci] = Some(cost);
            self.parent[ci] = from;
            self.stats.finalized += 1;

            let cp = self.point(ci);
            log::trace!("finalized {cp} at {cost}");
            if goal == Some(ci) {
                return Some(cost);
            }

            self.stats.expanded += 1;
            for np in cp.neighbors_4() {
                if !self.grid.contains(np) {
                    continue;
                }
                let ni = self.idx(np);
                if self.settled[ni].is_some() {
                    continue;
                }
                self.frontier.push(cost + self.grid.cost_at(np), (ni, ci));
                self.stats.pushed += 1;
            }
        }
        None
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wayfind_core::WeightedGrid;

    #[test]
    fn grid_path_round_trip() {
        let g = WeightedGrid::from_rows(&[[1, 2], [3, 4]], 1).unwrap();
        let path = find_min_path(&g, Coord::ZERO, Coord::new(1, 1)).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: GridPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn distance_map_round_trip() {
        let g = WeightedGrid::from_rows(&[[1, 2], [3, 4]], 2).unwrap();
        let map = distance_map(&g, Coord::ZERO).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let back: DistanceMap = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
        assert_eq!(back.cost_to(Coord::new(1, 1)), Some(6));
        assert_eq!(back.reached(), 16);
    }
}
