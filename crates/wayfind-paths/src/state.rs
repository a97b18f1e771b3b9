//! Best-first search over an implicit state graph.
//!
//! Same skeleton as the grid search: a cost-ordered [`Frontier`] that
//! tolerates duplicates, and a finalized set keyed on state value so each
//! state is expanded at most once. With a non-zero
//! [`estimate`](StateSpace::estimate) this is A*.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::stats::SearchStats;
use crate::traits::StateSpace;

/// A cheapest goal state and what it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    pub cost: u64,
    pub state: S,
    pub stats: SearchStats,
}

/// Search `space` from `initial` until a goal state is finalized.
///
/// The first goal state popped from the frontier is returned; with
/// non-negative transition costs and a consistent estimate its cost is
/// minimal.
pub fn search<P: StateSpace>(
    space: &P,
    initial: P::State,
) -> Result<Solution<P::State>, SearchError> {
    let mut stats = SearchStats::default();
    let mut frontier = Frontier::new();
    let mut finalized: HashSet<P::State> = HashSet::new();
    let mut buf = Vec::new();

    frontier.push(space.estimate(&initial), (0, initial));
    stats.pushed += 1;

    while let Ok((_, (cost, state))) = frontier.pop_min() {
        if finalized.contains(&state) {
            stats.stale += 1;
            continue;
        }
        finalized.insert(state.clone());
        stats.finalized += 1;

        if space.is_goal(&state) {
            log::debug!("state search: goal at cost {cost} ({stats})");
            return Ok(Solution { cost, state, stats });
        }

        buf.clear();
        space.expand(&state, &mut buf);
        stats.expanded += 1;
        for (step, next) in buf.drain(..) {
            if finalized.contains(&next) {
                continue;
            }
            let g = cost + step;
            frontier.push(g + space.estimate(&next), (g, next));
            stats.pushed += 1;
        }

        if stats.expanded % 100_000 == 0 {
            log::trace!(
                "state search: {} queued, cost frontier at {cost}",
                frontier.len()
            );
        }
    }

    log::debug!("state search: exhausted ({stats})");
    Err(SearchError::NoSolution {
        expanded: stats.expanded,
    })
}

/// Minimum cost from `initial` to any state accepted by `is_goal`, where
/// `expand` yields `(transition_cost, next_state)` pairs.
pub fn find_min_cost<S, I, G, E>(initial: S, is_goal: G, expand: E) -> Result<u64, SearchError>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (u64, S)>,
    G: Fn(&S) -> bool,
    E: Fn(&S) -> I,
{
    search(&FnSpace::new(is_goal, expand), initial).map(|s| s.cost)
}

/// A [`StateSpace`] made of a goal predicate and an expansion closure.
pub struct FnSpace<S, I, G, E> {
    is_goal: G,
    expand: E,
    _marker: PhantomData<fn(&S) -> I>,
}

impl<S, I, G, E> FnSpace<S, I, G, E>
where
    I: IntoIterator<Item = (u64, S)>,
    G: Fn(&S) -> bool,
    E: Fn(&S) -> I,
{
    pub fn new(is_goal: G, expand: E) -> Self {
        Self {
            is_goal,
            expand,
            _marker: PhantomData,
        }
    }
}

impl<S, I, G, E> StateSpace for FnSpace<S, I, G, E>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (u64, S)>,
    G: Fn(&S) -> bool,
    E: Fn(&S) -> I,
{
    type State = S;

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn expand(&self, state: &S, buf: &mut Vec<(u64, S)>) {
        buf.extend((self.expand)(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    // A -1-> B -1-> C -10-> D, plus A -5-> C and C -1-> A.
    fn edges(s: &char) -> Vec<(u64, char)> {
        match s {
            'A' => vec![(1, 'B'), (5, 'C')],
            'B' => vec![(1, 'C')],
            'C' => vec![(1, 'A'), (10, 'D')],
            _ => vec![],
        }
    }

    #[test]
    fn start_is_goal() {
        assert_eq!(find_min_cost('A', |s| *s == 'A', edges), Ok(0));
    }

    #[test]
    fn cheaper_route_through_cycle_wins() {
        assert_eq!(find_min_cost('A', |s| *s == 'D', edges), Ok(12));
    }

    #[test]
    fn each_state_expanded_once() {
        let calls = Cell::new(0);
        let seen = RefCell::new(HashSet::new());
        let space = FnSpace::new(
            |s: &char| *s == 'D',
            |s: &char| {
                calls.set(calls.get() + 1);
                seen.borrow_mut().insert(*s);
                edges(s)
            },
        );
        let sol = search(&space, 'A').unwrap();
        assert_eq!(sol.cost, 12);
        assert_eq!(sol.state, 'D');
        assert_eq!(calls.get(), 3);
        assert_eq!(calls.get(), seen.borrow().len());
        assert_eq!(sol.stats.expanded, calls.get());
        assert_eq!(sol.stats.finalized, sol.stats.expanded + 1);
        // C was queued at 5 and at 2; the 5 copy is popped stale
        assert_eq!(sol.stats.stale, 1);
        assert_eq!(sol.stats.pushed, 5);
    }

    #[test]
    fn exhausted_graph_reports_no_solution() {
        let chain = |n: &u32| if *n < 4 { vec![(1, n + 1)] } else { vec![] };
        assert_eq!(
            find_min_cost(0u32, |_| false, chain),
            Err(SearchError::NoSolution { expanded: 5 })
        );
    }

    #[test]
    fn cycles_without_goal_terminate() {
        let ring = |n: &u8| [(1, (n + 1) % 7), (3, (n + 6) % 7)];
        let err = find_min_cost(0u8, |_| false, ring).unwrap_err();
        assert_eq!(err, SearchError::NoSolution { expanded: 7 });
        assert!(err.to_string().contains("7 states"));
    }

    #[test]
    fn zero_cost_transitions() {
        let free = |n: &u8| match n {
            0 => vec![(0, 1), (4, 3)],
            1 => vec![(0, 2)],
            2 => vec![(1, 3)],
            _ => vec![],
        };
        assert_eq!(find_min_cost(0u8, |n| *n == 3, free), Ok(1));
    }

    // -----------------------------------------------------------------------
    // Four-room burrow: amphipods A-D must be sorted into rooms 0-3.
    // -----------------------------------------------------------------------

    const HALL: usize = 11;
    const ENERGY: [u64; 5] = [0, 1, 10, 100, 1000];

    const SMALL: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########";

    struct Burrow {
        depth: usize,
        astar: bool,
    }

    #[inline]
    fn door(room: usize) -> usize {
        2 + 2 * room
    }

    #[inline]
    fn is_door(h: usize) -> bool {
        (2..=8).contains(&h) && h % 2 == 0
    }

    /// Room rows top to bottom, kinds as 1-4.
    fn parse(diagram: &str) -> Vec<Vec<u8>> {
        diagram
            .lines()
            .filter_map(|l| {
                let b = l.as_bytes();
                let row = [3, 5, 7, 9].map(|i| b.get(i).copied().unwrap_or(b'#'));
                row.iter()
                    .all(|c| (b'A'..=b'D').contains(c))
                    .then(|| row.iter().map(|c| c - b'A' + 1).collect::<Vec<u8>>())
            })
            .collect()
    }

    fn unfold(rows: &[Vec<u8>]) -> Vec<Vec<u8>> {
        vec![
            rows[0].clone(),
            vec![4, 3, 2, 1],
            vec![4, 2, 1, 3],
            rows[1].clone(),
        ]
    }

    /// Hallway cells first, then each room top to bottom; 0 is empty.
    fn initial(rows: &[Vec<u8>]) -> Vec<u8> {
        let mut state = vec![0; HALL];
        for room in 0..4 {
            state.extend(rows.iter().map(|r| r[room]));
        }
        state
    }

    impl Burrow {
        fn room<'s>(&self, state: &'s [u8], r: usize) -> &'s [u8] {
            &state[HALL + r * self.depth..HALL + (r + 1) * self.depth]
        }
    }

    impl StateSpace for Burrow {
        type State = Vec<u8>;

        fn is_goal(&self, state: &Vec<u8>) -> bool {
            (0..4).all(|r| self.room(state, r).iter().all(|&k| usize::from(k) == r + 1))
        }

        fn expand(&self, state: &Vec<u8>, buf: &mut Vec<(u64, Vec<u8>)>) {
            // room -> hallway
            for r in 0..4 {
                let room = self.room(state, r);
                let Some(s) = room.iter().position(|&k| k != 0) else {
                    continue;
                };
                if room[s..].iter().all(|&k| usize::from(k) == r + 1) {
                    continue;
                }
                let kind = room[s];
                let d = door(r);
                let mut stop = |h: usize| {
                    let mut next = state.clone();
                    next[HALL + r * self.depth + s] = 0;
                    next[h] = kind;
                    let steps = (s + 1 + h.abs_diff(d)) as u64;
                    buf.push((steps * ENERGY[usize::from(kind)], next));
                };
                for h in (0..d).rev() {
                    if state[h] != 0 {
                        break;
                    }
                    if !is_door(h) {
                        stop(h);
                    }
                }
                for h in d + 1..HALL {
                    if state[h] != 0 {
                        break;
                    }
                    if !is_door(h) {
                        stop(h);
                    }
                }
            }

            // hallway -> home room
            for h in 0..HALL {
                let kind = state[h];
                if kind == 0 {
                    continue;
                }
                let r = usize::from(kind) - 1;
                let room = self.room(state, r);
                if room.iter().any(|&k| k != 0 && k != kind) {
                    continue;
                }
                let d = door(r);
                let between = if h < d { h + 1..d + 1 } else { d..h };
                if state[between].iter().any(|&k| k != 0) {
                    continue;
                }
                let t = room.iter().take_while(|&&k| k == 0).count() - 1;
                let mut next = state.clone();
                next[h] = 0;
                next[HALL + r * self.depth + t] = kind;
                let steps = (h.abs_diff(d) + t + 1) as u64;
                buf.push((steps * ENERGY[usize::from(kind)], next));
            }
        }

        fn estimate(&self, state: &Vec<u8>) -> u64 {
            if !self.astar {
                return 0;
            }
            let mut total = 0;
            for (h, &kind) in state[..HALL].iter().enumerate() {
                if kind != 0 {
                    let d = door(usize::from(kind) - 1);
                    total += (h.abs_diff(d) + 1) as u64 * ENERGY[usize::from(kind)];
                }
            }
            for r in 0..4 {
                let room = self.room(state, r);
                for (s, &kind) in room.iter().enumerate() {
                    if kind == 0 {
                        continue;
                    }
                    let home = usize::from(kind) - 1;
                    let steps = if home != r {
                        s + 1 + door(r).abs_diff(door(home)) + 1
                    } else if room[s..].iter().any(|&k| k != kind) {
                        s + 4
                    } else {
                        0
                    };
                    total += steps as u64 * ENERGY[usize::from(kind)];
                }
            }
            total
        }
    }

    #[test]
    fn burrow_parses() {
        let rows = parse(SMALL);
        assert_eq!(rows, vec![vec![2, 3, 2, 4], vec![1, 4, 3, 1]]);
        let state = initial(&rows);
        assert_eq!(state.len(), HALL + 8);
        assert_eq!(&state[HALL..HALL + 2], &[2, 1]);
    }

    #[test]
    fn burrow_sorted_is_goal() {
        let space = Burrow {
            depth: 2,
            astar: false,
        };
        let done = initial(&[vec![1, 2, 3, 4], vec![1, 2, 3, 4]]);
        assert!(space.is_goal(&done));
        assert_eq!(search(&space, done).map(|s| s.cost), Ok(0));
        assert!(!space.is_goal(&initial(&parse(SMALL))));
    }

    #[test]
    fn burrow_depth_two() {
        let space = Burrow {
            depth: 2,
            astar: false,
        };
        let sol = search(&space, initial(&parse(SMALL))).unwrap();
        assert_eq!(sol.cost, 12521);
        assert!(space.is_goal(&sol.state));
        assert_eq!(sol.stats.finalized, sol.stats.expanded + 1);
    }

    #[test]
    fn burrow_estimate_keeps_cost_and_prunes() {
        let start = initial(&parse(SMALL));
        let plain = search(
            &Burrow {
                depth: 2,
                astar: false,
            },
            start.clone(),
        )
        .unwrap();
        let guided = search(
            &Burrow {
                depth: 2,
                astar: true,
            },
            start,
        )
        .unwrap();
        assert_eq!(guided.cost, plain.cost);
        assert!(guided.stats.expanded < plain.stats.expanded);
    }

    #[test]
    fn burrow_depth_four() {
        let rows = unfold(&parse(SMALL));
        let space = Burrow {
            depth: 4,
            astar: true,
        };
        assert_eq!(search(&space, initial(&rows)).map(|s| s.cost), Ok(44169));
    }
}
