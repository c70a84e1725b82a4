//! Local beam search
//!
//! Each generation keeps the `width` best candidates by `f = g + h2` and
//! replaces the pool with all of their successors. The only cycle control is
//! the ban on immediately reversing the previous move; there is no visited
//! set, so states can reappear in later generations.
//!
//! Every generated node counts against the node budget, which is what stops
//! the search on unsolvable boards where the pool never empties.

use super::node::{NodeId, PuzzleState, SearchTree};
use super::outcome::{SearchResult, SearchStatus};
use super::strategy::Algorithm;
use crate::core::{Board, Heuristic};
use log::{debug, trace};

/// Beam search always ranks candidates by Manhattan distance
pub const BEAM_HEURISTIC: Heuristic = Heuristic::Manhattan;

/// Successors of `id` other than the one undoing its own move, inserted into `tree`
fn expand(tree: &mut SearchTree, id: NodeId) -> Vec<NodeId> {
    let parent = &tree[id];
    let backtrack = parent.move_taken().map(|direction| direction.opposite());

    let children: Vec<PuzzleState> = parent
        .board()
        .valid_moves()
        .filter(|&direction| Some(direction) != backtrack)
        .filter_map(|direction| parent.child(id, direction, BEAM_HEURISTIC).ok())
        .collect();

    children.into_iter().map(|child| tree.insert(child)).collect()
}

/// Run local beam search of the given width from `root`
///
/// Stops with `Solved` when a kept candidate matches the solved layout, with
/// `Stalled` if the candidate pool ever empties, and with `BudgetExceeded`
/// once more than `node_budget` nodes have been generated. On the two unsolved
/// outcomes the terminal node is the best candidate of the last generation
/// kept (or the root).
#[must_use]
pub fn solve_beam(width: usize, root: Board, node_budget: usize) -> SearchResult {
    let algorithm = Algorithm::Beam { width };
    let mut tree = SearchTree::new();
    let mut root_state = PuzzleState::root(root);
    root_state.set_evaluation(0, BEAM_HEURISTIC);
    let root_id = tree.insert(root_state);

    if tree[root_id].is_goal() {
        return SearchResult::new(algorithm, tree, root_id, SearchStatus::Solved, 0);
    }

    let mut pool = expand(&mut tree, root_id);
    let mut generated = pool.len();
    let mut best = root_id;
    let mut generation = 0usize;

    let status = loop {
        if pool.is_empty() {
            debug!("Beam stalled after {generation} generations");
            break SearchStatus::Stalled;
        }
        generation += 1;

        // Stable sort: equal f keeps generation order
        pool.sort_by_key(|&id| tree[id].f());
        pool.truncate(width);

        if let Some(&front) = pool.first() {
            best = front;
        }
        if let Some(&goal) = pool.iter().find(|&&id| tree[id].is_goal()) {
            best = goal;
            break SearchStatus::Solved;
        }

        if generated > node_budget {
            debug!("Beam node budget of {node_budget} exceeded ({generated} generated)");
            break SearchStatus::BudgetExceeded;
        }

        let mut next = Vec::with_capacity(pool.len() * 3);
        for &id in &pool {
            next.extend(expand(&mut tree, id));
        }
        generated += next.len();
        trace!(
            "Beam generation {generation}: kept {}, best f={}, {} successors",
            pool.len(),
            tree[best].f(),
            next.len()
        );
        pool = next;
    };

    SearchResult::new(algorithm, tree, best, status, generated)
}
