//! Uninformed graph search: breadth-first and iterative deepening
//!
//! Both algorithms poll the run's deadline once per frontier pop. An expansion
//! that has already started always finishes; the next iteration then returns
//! [`Outcome::TimedOut`] with the statistics gathered so far.

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use log::{debug, info, warn};

use super::node::Node;
use super::problem::{Outcome, Problem, SearchLimits, SearchStats};

type SearchOutcome<P> = Outcome<<P as Problem>::State, <P as Problem>::Action>;

/// Breadth-first graph search.
///
/// Keeps a FIFO queue, a set mirroring the queue's states for O(1) "already
/// queued" checks, and a visited set. The goal test happens when a node is
/// dequeued.
pub fn breadth_first_search<P: Problem>(
    problem: &P,
    limits: &SearchLimits,
    stats: &mut SearchStats,
) -> SearchOutcome<P> {
    let root = Rc::new(Node::root(problem.initial()));
    let mut queued: HashSet<P::State> = HashSet::from([root.state.clone()]);
    let mut frontier: VecDeque<Rc<Node<P::State, P::Action>>> = VecDeque::from([root]);
    let mut visited: HashSet<P::State> = HashSet::new();

    while !frontier.is_empty() {
        if stats.timed_out(limits) {
            warn!("BFS timed out after {} nodes", stats.nodes_generated);
            return Outcome::timed_out(stats);
        }

        let Some(node) = frontier.pop_front() else {
            break;
        };
        queued.remove(&node.state);
        visited.insert(node.state.clone());

        if problem.goal_test(&node.state) {
            info!(
                "BFS reached goal at depth {} ({} nodes)",
                node.depth(),
                stats.nodes_generated
            );
            return Outcome::solved(node, stats);
        }

        let children = Node::expand(&node, problem);
        stats.nodes_generated += children.len() as u64;
        for child in children {
            if !visited.contains(&child.state) && !queued.contains(&child.state) {
                queued.insert(child.state.clone());
                frontier.push_back(child);
            }
        }
    }

    Outcome::NoSolution
}

/// Result of a single depth-limited pass
#[derive(Debug, Clone)]
pub enum DepthLimited<S, A> {
    /// Some branch was cut off by the limit; a deeper pass may succeed
    Cutoff,
    /// Anything other than a cutoff ends the deepening loop
    Done(Outcome<S, A>),
}

/// Depth-limited DFS with an explicit stack.
///
/// A node deeper than `limit` marks the pass as cut off instead of being
/// expanded. A node whose state repeats one of its ancestors is not expanded
/// either; states seen on other branches may be revisited.
pub fn depth_limited_search<P: Problem>(
    problem: &P,
    limit: usize,
    limits: &SearchLimits,
    stats: &mut SearchStats,
) -> DepthLimited<P::State, P::Action> {
    let mut stack = vec![Rc::new(Node::root(problem.initial()))];
    let mut cutoff = false;

    while let Some(node) = stack.pop() {
        if stats.timed_out(limits) {
            warn!("depth-limited search timed out at limit {limit}");
            return DepthLimited::Done(Outcome::timed_out(stats));
        }

        if problem.goal_test(&node.state) {
            return DepthLimited::Done(Outcome::solved(node, stats));
        }

        if node.depth() > limit {
            cutoff = true;
        } else if !node.closes_cycle() {
            let children = Node::expand(&node, problem);
            stats.nodes_generated += children.len() as u64;
            stack.extend(children);
        }
    }

    if cutoff {
        DepthLimited::Cutoff
    } else {
        DepthLimited::Done(Outcome::NoSolution)
    }
}

/// Iterative deepening: depth-limited passes with limits 0, 1, 2, ...
///
/// The deadline covers the whole run, not each pass.
pub fn iterative_deepening_search<P: Problem>(
    problem: &P,
    limits: &SearchLimits,
    stats: &mut SearchStats,
) -> SearchOutcome<P> {
    let mut limit = 0;
    loop {
        debug!(
            "IDS depth limit {limit} ({} nodes so far)",
            stats.nodes_generated
        );
        if let DepthLimited::Done(outcome) = depth_limited_search(problem, limit, limits, stats) {
            if let Some(len) = outcome.path_len() {
                info!("IDS reached goal at depth {len} ({} nodes)", stats.nodes_generated);
            }
            return outcome;
        }
        limit += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Counter on 0..=max with +1 / *2 moves; goal is `target`.
    struct Doubling {
        max: u32,
        target: u32,
    }

    impl Problem for Doubling {
        type State = u32;
        type Action = char;

        fn initial(&self) -> u32 {
            1
        }

        fn actions(&self, state: &u32) -> Vec<char> {
            let mut actions = Vec::new();
            if state + 1 <= self.max {
                actions.push('+');
            }
            if state * 2 <= self.max {
                actions.push('*');
            }
            actions
        }

        fn result(&self, state: &u32, action: char) -> u32 {
            match action {
                '+' => state + 1,
                _ => state * 2,
            }
        }

        fn goal_test(&self, state: &u32) -> bool {
            *state == self.target
        }
    }

    #[test]
    fn test_bfs_finds_shortest_path() {
        let problem = Doubling { max: 100, target: 10 };
        let mut stats = SearchStats::start();
        let outcome = breadth_first_search(&problem, &SearchLimits::default(), &mut stats);

        // 1 -> 2 -> 4 -> 5 -> 10
        assert_eq!(outcome.path_len(), Some(4));
        assert!(stats.nodes_generated > 0);
    }

    #[test]
    fn test_bfs_goal_at_root() {
        let problem = Doubling { max: 10, target: 1 };
        let mut stats = SearchStats::start();
        let outcome = breadth_first_search(&problem, &SearchLimits::default(), &mut stats);
        assert_eq!(outcome.path_len(), Some(0));
        assert_eq!(stats.nodes_generated, 0);
    }

    #[test]
    fn test_bfs_exhausts_finite_space() {
        let problem = Doubling { max: 20, target: 50 };
        let mut stats = SearchStats::start();
        let outcome = breadth_first_search(&problem, &SearchLimits::default(), &mut stats);
        assert!(matches!(outcome, Outcome::NoSolution));
    }

    #[test]
    fn test_zero_timeout_stops_before_first_pop() {
        let problem = Doubling { max: 100, target: 99 };
        let limits = SearchLimits::with_timeout(Duration::ZERO);

        let mut stats = SearchStats::start();
        let outcome = breadth_first_search(&problem, &limits, &mut stats);
        assert!(matches!(
            outcome,
            Outcome::TimedOut { nodes_generated: 0, .. }
        ));

        let mut stats = SearchStats::start();
        let outcome = iterative_deepening_search(&problem, &limits, &mut stats);
        assert!(matches!(outcome, Outcome::TimedOut { .. }));
    }

    #[test]
    fn test_depth_limited_cutoff() {
        let problem = Doubling { max: 100, target: 10 };
        let mut stats = SearchStats::start();
        let pass = depth_limited_search(&problem, 2, &SearchLimits::default(), &mut stats);
        assert!(matches!(pass, DepthLimited::Cutoff));
    }

    #[test]
    fn test_depth_limited_failure_when_space_is_small() {
        // Reachable states 1, 2 only; target never appears and nothing is cut off.
        let problem = Doubling { max: 2, target: 7 };
        let mut stats = SearchStats::start();
        let pass = depth_limited_search(&problem, 10, &SearchLimits::default(), &mut stats);
        assert!(matches!(pass, DepthLimited::Done(Outcome::NoSolution)));
    }

    #[test]
    fn test_ids_matches_bfs_length() {
        for target in [2, 7, 12, 31] {
            let problem = Doubling { max: 64, target };
            let mut bfs_stats = SearchStats::start();
            let bfs = breadth_first_search(&problem, &SearchLimits::default(), &mut bfs_stats);
            let mut ids_stats = SearchStats::start();
            let ids = iterative_deepening_search(&problem, &SearchLimits::default(), &mut ids_stats);
            assert_eq!(bfs.path_len(), ids.path_len(), "target {target}");
        }
    }
}
