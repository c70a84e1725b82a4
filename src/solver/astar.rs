//! A* search with a closed set and a node budget
//!
//! The frontier is a binary min-heap on `f`. There is no decrease-key: a state
//! may sit in the frontier more than once, and whichever copy is popped first
//! wins. Children whose canonical string is already closed are never pushed.

use super::node::{NodeId, PuzzleState, SearchTree};
use super::outcome::{SearchResult, SearchStatus};
use super::strategy::Algorithm;
use crate::core::{Board, Direction, Heuristic};
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry ordered so that `BinaryHeap` pops the lowest `f` first
///
/// `order` is an insertion counter; among equal `f` the older entry wins.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    order: u64,
    id: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run A* from `root`
///
/// Stops with `Solved` on the first popped node that matches the solved
/// layout, with `BudgetExceeded` once the closed set holds more than
/// `node_budget` states (returning the node just popped), or with `Exhausted`
/// if the frontier empties first (returning the last node popped).
#[must_use]
pub fn solve_astar(heuristic: Heuristic, root: Board, node_budget: usize) -> SearchResult {
    let mut tree = SearchTree::new();
    let mut root_state = PuzzleState::root(root);
    root_state.set_evaluation(0, heuristic);
    let root_f = root_state.f();
    let root_id = tree.insert(root_state);

    let mut frontier = BinaryHeap::new();
    let mut closed: FxHashSet<String> = FxHashSet::default();
    let mut order = 0u64;
    let mut nodes_visited = 0usize;
    let mut last = root_id;

    frontier.push(FrontierEntry {
        f: root_f,
        order,
        id: root_id,
    });

    let status = loop {
        let Some(FrontierEntry { id, .. }) = frontier.pop() else {
            debug!("A* frontier empty after {nodes_visited} nodes");
            break SearchStatus::Exhausted;
        };
        last = id;
        nodes_visited += 1;

        let current = &tree[id];
        closed.insert(current.canonical_string());
        trace!(
            "A* pop {} g={} f={}",
            current.board(),
            current.g(),
            current.f()
        );

        if current.is_goal() {
            break SearchStatus::Solved;
        }

        if closed.len() > node_budget {
            debug!(
                "A* node budget of {node_budget} exceeded ({} closed)",
                closed.len()
            );
            break SearchStatus::BudgetExceeded;
        }

        let children: Vec<PuzzleState> = Direction::ALL
            .into_iter()
            .filter(|&direction| current.is_valid_move(direction))
            .filter_map(|direction| current.child(id, direction, heuristic).ok())
            .filter(|child| !closed.contains(&child.canonical_string()))
            .collect();

        for child in children {
            order += 1;
            let f = child.f();
            let child_id = tree.insert(child);
            frontier.push(FrontierEntry {
                f,
                order,
                id: child_id,
            });
        }
    };

    SearchResult::new(
        Algorithm::AStar(heuristic),
        tree,
        last,
        status,
        nodes_visited,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DEFAULT_NODE_BUDGET;

    fn board(layout: &str) -> Board {
        Board::parse(layout).unwrap()
    }

    #[test]
    fn frontier_pops_lowest_f_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry {
            f: 5,
            order: 0,
            id: NodeId(0),
        });
        heap.push(FrontierEntry {
            f: 3,
            order: 2,
            id: NodeId(2),
        });
        heap.push(FrontierEntry {
            f: 3,
            order: 1,
            id: NodeId(1),
        });

        let popped: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|e| e.id)).collect();
        assert_eq!(popped, vec![NodeId(1), NodeId(2), NodeId(0)]);
    }

    #[test]
    fn solved_root_returns_immediately() {
        for heuristic in [Heuristic::MisplacedTiles, Heuristic::Manhattan] {
            let result = solve_astar(heuristic, Board::solved(), DEFAULT_NODE_BUDGET);
            assert_eq!(result.status(), SearchStatus::Solved);
            assert!(result.trace().is_empty());
            assert_eq!(result.nodes_visited(), 1);
        }
    }

    #[test]
    fn one_move_from_solved() {
        for heuristic in [Heuristic::MisplacedTiles, Heuristic::Manhattan] {
            let result = solve_astar(heuristic, board("1b2 345 678"), DEFAULT_NODE_BUDGET);
            assert!(result.is_solved());
            assert_eq!(result.trace().moves(), &[Direction::Left]);
            assert!(result.board().is_solved());
        }
    }

    #[test]
    fn both_heuristics_find_optimal_length() {
        // Four moves from solved
        let start = board("312 475 b68");
        let h1 = solve_astar(Heuristic::MisplacedTiles, start, DEFAULT_NODE_BUDGET);
        let h2 = solve_astar(Heuristic::Manhattan, start, DEFAULT_NODE_BUDGET);
        assert!(h1.is_solved() && h2.is_solved());
        assert_eq!(h1.trace().len(), 4);
        assert_eq!(h2.trace().len(), 4);
        assert_eq!(h1.trace().replay(&start), Ok(Board::solved()));
        assert_eq!(h2.trace().replay(&start), Ok(Board::solved()));
    }

    #[test]
    fn manhattan_visits_no_more_than_misplaced() {
        // Twenty moves from solved
        let start = board("736 4b2 185");
        let h1 = solve_astar(Heuristic::MisplacedTiles, start, DEFAULT_NODE_BUDGET);
        let h2 = solve_astar(Heuristic::Manhattan, start, DEFAULT_NODE_BUDGET);
        assert!(h1.is_solved() && h2.is_solved());
        assert_eq!(h1.trace().len(), 20);
        assert_eq!(h2.trace().len(), 20);
        assert!(h2.nodes_visited() <= h1.nodes_visited());
    }

    #[test]
    fn unsolvable_board_exceeds_budget() {
        let result = solve_astar(Heuristic::Manhattan, board("b21 345 678"), 200);
        assert_eq!(result.status(), SearchStatus::BudgetExceeded);
        assert!(!result.board().is_solved());
        assert!(result.nodes_visited() > 200);
    }

    #[test]
    fn unsolvable_board_exhausts_frontier_under_large_budget() {
        // Only half of the 9! arrangements are reachable
        let result = solve_astar(Heuristic::Manhattan, board("b21 345 678"), 1_000_000);
        assert_eq!(result.status(), SearchStatus::Exhausted);
        assert_ne!(result.status(), SearchStatus::BudgetExceeded);
        assert!(!result.board().is_solved());
        assert_eq!(result.tree()[result.terminal_id()].board(), result.board());
        assert!(result.tree().len() >= 181_440);
    }

    #[test]
    fn zero_budget_stops_after_root() {
        let result = solve_astar(Heuristic::MisplacedTiles, board("1b2 345 678"), 0);
        assert_eq!(result.status(), SearchStatus::BudgetExceeded);
        assert_eq!(result.nodes_visited(), 1);
        assert!(result.terminal().is_root());
        assert_eq!(result.terminal_id().index(), 0);
        assert!(!result.tree().is_empty());
    }
}
