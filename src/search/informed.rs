//! Informed search: best-first graph search and A*

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::rc::Rc;

use log::{info, trace, warn};

use crate::error::SearchError;

use super::frontier::PriorityFrontier;
use super::node::Node;
use super::problem::{Outcome, Problem, SearchLimits, SearchStats};

type SearchOutcome<P> = Outcome<<P as Problem>::State, <P as Problem>::Action>;

/// Best-first graph search ordered by `f` (smallest first).
///
/// A child whose state is neither explored nor queued is pushed. A child whose
/// state is already queued replaces the queued entry when its `f` is strictly
/// lower.
///
/// Frontier errors can only come from a broken membership invariant and are
/// passed through unchanged.
pub fn best_first_search<P, F>(
    problem: &P,
    f: F,
    limits: &SearchLimits,
    stats: &mut SearchStats,
) -> Result<SearchOutcome<P>, SearchError>
where
    P: Problem,
    F: FnMut(&Rc<Node<P::State, P::Action>>) -> i64,
{
    let root = Rc::new(Node::root(problem.initial()));
    let mut queued: HashSet<P::State> = HashSet::from([root.state.clone()]);
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut frontier = PriorityFrontier::min(f);
    frontier.push(root);

    while !frontier.is_empty() {
        if stats.timed_out(limits) {
            warn!("best-first search timed out after {} nodes", stats.nodes_generated);
            return Ok(Outcome::timed_out(stats));
        }

        let node = frontier.pop()?;
        queued.remove(&node.state);
        explored.insert(node.state.clone());

        if problem.goal_test(&node.state) {
            info!(
                "best-first search reached goal at depth {} ({} nodes)",
                node.depth(),
                stats.nodes_generated
            );
            return Ok(Outcome::solved(node, stats));
        }

        let children = Node::expand(&node, problem);
        stats.nodes_generated += children.len() as u64;
        for child in children {
            if !explored.contains(&child.state) && !queued.contains(&child.state) {
                queued.insert(child.state.clone());
                frontier.push(child);
            } else if queued.contains(&child.state)
                && frontier.key_of(&child) < frontier.get(&child)?
            {
                trace!("shorter path to queued state {:?}", child.state);
                frontier.remove(&child)?;
                frontier.push(child);
            }
        }
    }

    Ok(Outcome::NoSolution)
}

/// Heuristic values cached per state for the lifetime of one search run.
#[derive(Debug)]
pub struct HeuristicCache<S, H> {
    h: H,
    values: HashMap<S, u32>,
}

impl<S, H> HeuristicCache<S, H>
where
    S: Clone + Eq + Hash,
    H: Fn(&S) -> u32,
{
    pub fn new(h: H) -> Self {
        Self {
            h,
            values: HashMap::new(),
        }
    }

    /// Cached `h(state)`, computed on first request
    pub fn get(&mut self, state: &S) -> u32 {
        if let Some(&v) = self.values.get(state) {
            return v;
        }
        let v = (self.h)(state);
        self.values.insert(state.clone(), v);
        v
    }

    /// Number of distinct states scored so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A* search: best-first with `f(n) = depth(n) + h(n)` and unit step costs.
///
/// `h` is memoised per state for this run only.
pub fn astar_search<P, H>(
    problem: &P,
    h: H,
    limits: &SearchLimits,
    stats: &mut SearchStats,
) -> Result<SearchOutcome<P>, SearchError>
where
    P: Problem,
    H: Fn(&P::State) -> u32,
{
    let mut cache = HeuristicCache::new(h);
    best_first_search(
        problem,
        |n: &Rc<Node<P::State, P::Action>>| n.depth() as i64 + i64::from(cache.get(&n.state)),
        limits,
        stats,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::uninformed::breadth_first_search;
    use std::cell::Cell;
    use std::time::Duration;

    /// Grid walk on a `size` x `size` board from the top-left to the
    /// bottom-right corner.
    struct Grid {
        size: i32,
    }

    impl Problem for Grid {
        type State = (i32, i32);
        type Action = (i32, i32);

        fn initial(&self) -> (i32, i32) {
            (0, 0)
        }

        fn actions(&self, &(r, c): &(i32, i32)) -> Vec<(i32, i32)> {
            [(1, 0), (0, 1), (-1, 0), (0, -1)]
                .into_iter()
                .filter(|(dr, dc)| {
                    let (nr, nc) = (r + dr, c + dc);
                    (0..self.size).contains(&nr) && (0..self.size).contains(&nc)
                })
                .collect()
        }

        fn result(&self, &(r, c): &(i32, i32), (dr, dc): (i32, i32)) -> (i32, i32) {
            (r + dr, c + dc)
        }

        fn goal_test(&self, state: &(i32, i32)) -> bool {
            *state == (self.size - 1, self.size - 1)
        }
    }

    fn manhattan_to_corner(size: i32) -> impl Fn(&(i32, i32)) -> u32 {
        move |&(r, c)| ((size - 1 - r) + (size - 1 - c)) as u32
    }

    #[test]
    fn test_astar_finds_optimal_path() {
        let problem = Grid { size: 5 };
        let mut stats = SearchStats::start();
        let outcome = astar_search(
            &problem,
            manhattan_to_corner(5),
            &SearchLimits::default(),
            &mut stats,
        )
        .unwrap();
        assert_eq!(outcome.path_len(), Some(8));
    }

    #[test]
    fn test_astar_with_zero_heuristic_matches_bfs() {
        let problem = Grid { size: 4 };
        let mut stats = SearchStats::start();
        let astar = astar_search(&problem, |_| 0, &SearchLimits::default(), &mut stats).unwrap();
        let mut stats = SearchStats::start();
        let bfs = breadth_first_search(&problem, &SearchLimits::default(), &mut stats);
        assert_eq!(astar.path_len(), bfs.path_len());
    }

    #[test]
    fn test_heuristic_is_memoised() {
        let calls = Cell::new(0u32);
        let mut cache = HeuristicCache::new(|s: &u8| {
            calls.set(calls.get() + 1);
            u32::from(*s)
        });
        assert_eq!(cache.get(&3), 3);
        assert_eq!(cache.get(&3), 3);
        assert_eq!(cache.get(&4), 4);
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_astar_informed_generates_fewer_nodes() {
        let problem = Grid { size: 6 };
        let mut informed = SearchStats::start();
        astar_search(&problem, manhattan_to_corner(6), &SearchLimits::default(), &mut informed)
            .unwrap();
        let mut blind = SearchStats::start();
        astar_search(&problem, |_| 0, &SearchLimits::default(), &mut blind).unwrap();
        assert!(informed.nodes_generated <= blind.nodes_generated);
    }

    #[test]
    fn test_best_first_timeout() {
        let problem = Grid { size: 5 };
        let mut stats = SearchStats::start();
        let outcome = best_first_search(
            &problem,
            |n| n.depth() as i64,
            &SearchLimits::with_timeout(Duration::ZERO),
            &mut stats,
        )
        .unwrap();
        assert!(matches!(outcome, Outcome::TimedOut { .. }));
    }

    /// Directed graph given as adjacency lists; an action names the target.
    struct Graph {
        edges: &'static [(char, &'static [char])],
    }

    impl Problem for Graph {
        type State = char;
        type Action = char;

        fn initial(&self) -> char {
            'S'
        }

        fn actions(&self, state: &char) -> Vec<char> {
            self.edges
                .iter()
                .find(|(from, _)| from == state)
                .map(|(_, to)| to.to_vec())
                .unwrap_or_default()
        }

        fn result(&self, _state: &char, action: char) -> char {
            action
        }

        fn goal_test(&self, state: &char) -> bool {
            *state == 'G'
        }
    }

    #[test]
    fn test_queued_state_replaced_by_shorter_path() {
        // X is queued first at depth 3 via S-A-C, then reached at depth 2 via
        // S-B. The high estimate on B delays it until X is already queued.
        let problem = Graph {
            edges: &[
                ('S', &['A', 'B']),
                ('A', &['C']),
                ('C', &['X']),
                ('B', &['X']),
                ('X', &['G']),
            ],
        };
        let h = |s: &char| if *s == 'B' { 2 } else { 0 };

        let mut stats = SearchStats::start();
        let outcome = astar_search(&problem, h, &SearchLimits::default(), &mut stats).unwrap();
        assert_eq!(outcome.path(), Some(vec!['B', 'X', 'G']));
        assert_eq!(outcome.path_len(), Some(3));
    }

    #[test]
    fn test_best_first_exhausts_without_goal() {
        struct Island;
        impl Problem for Island {
            type State = u8;
            type Action = u8;
            fn initial(&self) -> u8 {
                0
            }
            fn actions(&self, state: &u8) -> Vec<u8> {
                if *state < 3 {
                    vec![1]
                } else {
                    Vec::new()
                }
            }
            fn result(&self, state: &u8, action: u8) -> u8 {
                state + action
            }
            fn goal_test(&self, _state: &u8) -> bool {
                false
            }
        }

        let mut stats = SearchStats::start();
        let outcome =
            best_first_search(&Island, |n| n.depth() as i64, &SearchLimits::default(), &mut stats)
                .unwrap();
        assert!(matches!(outcome, Outcome::NoSolution));
        assert_eq!(stats.nodes_generated, 3);
    }
}
