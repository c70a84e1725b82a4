//! Search nodes and the arena that owns them
//!
//! Every node a search creates lives in a `SearchTree`. Parent links are
//! `NodeId`s into that arena, so a terminal node's ancestry stays reachable for
//! as long as the tree does, and nothing is reference counted.

use crate::core::{Board, Direction, Heuristic, MoveError};
use std::ops::Index;

/// Handle to a node inside a `SearchTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A board plus the bookkeeping A* and beam search need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    board: Board,
    g: u32,
    f: u32,
    parent: Option<NodeId>,
    move_taken: Option<Direction>,
}

impl PuzzleState {
    /// A root node: no parent, no move, `g = f = 0` until evaluated
    #[must_use]
    pub const fn root(board: Board) -> Self {
        Self {
            board,
            g: 0,
            f: 0,
            parent: None,
            move_taken: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Path cost from the root
    #[inline]
    #[must_use]
    pub const fn g(&self) -> u32 {
        self.g
    }

    /// Cached `g + h`
    #[inline]
    #[must_use]
    pub const fn f(&self) -> u32 {
        self.f
    }

    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direction that produced this node, `None` for a root
    #[inline]
    #[must_use]
    pub const fn move_taken(&self) -> Option<Direction> {
        self.move_taken
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none() && self.move_taken.is_none()
    }

    #[must_use]
    pub const fn is_valid_move(&self, direction: Direction) -> bool {
        self.board.is_valid_move(direction)
    }

    /// Unlinked successor: moved grid and move label, no parent, zero costs
    ///
    /// # Errors
    /// Returns `MoveError::Blocked` if the move leaves the grid.
    pub fn apply_move(&self, direction: Direction) -> Result<Self, MoveError> {
        let board = self.board.apply_move(direction)?;
        Ok(Self {
            board,
            g: 0,
            f: 0,
            parent: None,
            move_taken: Some(direction),
        })
    }

    /// Fully linked successor of this node, which lives at `self_id`
    ///
    /// Sets `g = self.g + 1`, evaluates `f` with `heuristic` and records the
    /// parent link and move label.
    ///
    /// # Errors
    /// Returns `MoveError::Blocked` if the move leaves the grid.
    pub fn child(
        &self,
        self_id: NodeId,
        direction: Direction,
        heuristic: Heuristic,
    ) -> Result<Self, MoveError> {
        let mut child = self.apply_move(direction)?;
        child.parent = Some(self_id);
        child.set_evaluation(self.g + 1, heuristic);
        Ok(child)
    }

    #[must_use]
    pub fn misplaced_tiles(&self) -> u32 {
        self.board.misplaced_tiles()
    }

    #[must_use]
    pub fn manhattan_distance(&self) -> u32 {
        self.board.manhattan_distance()
    }

    #[must_use]
    pub fn heuristic(&self, heuristic: Heuristic) -> u32 {
        self.board.heuristic(heuristic)
    }

    /// Set `g` and recompute `f = g + h`
    pub fn set_evaluation(&mut self, g: u32, heuristic: Heuristic) {
        self.g = g;
        self.f = g + self.heuristic(heuristic);
    }

    /// Exact goal test, independent of the guiding heuristic
    #[inline]
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.misplaced_tiles() == 0
    }

    #[must_use]
    pub fn canonical_string(&self) -> String {
        self.board.canonical_string()
    }
}

/// Arena owning every node created during one search
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<PuzzleState>,
}

impl SearchTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Take ownership of `state` and return its handle
    pub fn insert(&mut self, state: PuzzleState) -> NodeId {
        self.nodes.push(state);
        NodeId(self.nodes.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&PuzzleState> {
        self.nodes.get(id.0)
    }

    /// Number of nodes created so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` up to its root, `id` first
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &PuzzleState> + '_ {
        std::iter::successors(self.get(id), |node| node.parent().and_then(|p| self.get(p)))
    }
}

impl Index<NodeId> for SearchTree {
    type Output = PuzzleState;

    /// # Panics
    /// Panics if `id` was issued by a different tree.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_links() {
        let root = PuzzleState::root(Board::solved());
        assert!(root.is_root());
        assert_eq!(root.g(), 0);
        assert_eq!(root.parent(), None);
        assert_eq!(root.move_taken(), None);
    }

    #[test]
    fn set_evaluation_adds_heuristic() {
        let mut state = PuzzleState::root(Board::parse("12b 345 678").unwrap());
        state.set_evaluation(3, Heuristic::Manhattan);
        assert_eq!(state.g(), 3);
        assert_eq!(state.f(), 5);

        state.set_evaluation(3, Heuristic::MisplacedTiles);
        assert_eq!(state.f(), 5);
    }

    #[test]
    fn child_links_back_to_parent() {
        let mut tree = SearchTree::new();
        let mut root = PuzzleState::root(Board::solved());
        root.set_evaluation(0, Heuristic::Manhattan);
        let root_id = tree.insert(root);

        let child = tree[root_id]
            .child(root_id, Direction::Right, Heuristic::Manhattan)
            .unwrap();
        assert_eq!(child.g(), 1);
        assert_eq!(child.f(), 2);
        assert_eq!(child.parent(), Some(root_id));
        assert_eq!(child.move_taken(), Some(Direction::Right));
        assert!(!child.is_root());

        let child_id = tree.insert(child);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.ancestry(child_id).count(), 2);
    }

    #[test]
    fn child_rejects_blocked_move() {
        let root = PuzzleState::root(Board::solved());
        let result = root.child(NodeId(0), Direction::Up, Heuristic::Manhattan);
        assert_eq!(
            result,
            Err(MoveError::Blocked {
                direction: Direction::Up
            })
        );
    }

    #[test]
    fn goal_test_is_exact() {
        assert!(PuzzleState::root(Board::solved()).is_goal());
        assert!(!PuzzleState::root(Board::parse("1b2 345 678").unwrap()).is_goal());
    }

    #[test]
    fn get_out_of_range_is_none() {
        let tree = SearchTree::new();
        assert!(tree.is_empty());
        assert!(tree.get(NodeId(0)).is_none());
    }
}
