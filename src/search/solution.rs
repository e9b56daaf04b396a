//! Search results: reconstructed path plus visitation log.

use super::node::{Node, NodeArena, NodeId};
use super::types::{Action, SearchState};

/// Outcome of one search call.
///
/// Owns the node arena, so every node on the path (and its ancestors)
/// outlives the search. A failed search is a `Solution` whose
/// [`goal_node`](Solution::goal_node) is `None` — callers must check the
/// sentinel; exhausting the frontier is not an error.
#[derive(Debug)]
pub struct Solution<S, A> {
    arena: NodeArena<S, A>,
    goal: Option<NodeId>,
    path: Vec<NodeId>,
    visited: Vec<S>,
}

impl<S: SearchState, A: Action<S>> Solution<S, A> {
    /// Success: reconstructs the root→goal path by walking parent indices.
    pub(crate) fn found(arena: NodeArena<S, A>, goal: NodeId, visited: Vec<S>) -> Self {
        let path = arena.path_to(goal);
        Self {
            arena,
            goal: Some(goal),
            path,
            visited,
        }
    }

    /// Failure: frontier exhausted without meeting a goal or bound.
    pub(crate) fn failure(arena: NodeArena<S, A>, visited: Vec<S>) -> Self {
        Self {
            arena,
            goal: None,
            path: Vec::new(),
            visited,
        }
    }

    pub fn is_found(&self) -> bool {
        self.goal.is_some()
    }

    pub fn goal_id(&self) -> Option<NodeId> {
        self.goal
    }

    pub fn goal_node(&self) -> Option<&Node<S, A>> {
        self.goal.map(|id| self.arena.get(id))
    }

    pub fn arena(&self) -> &NodeArena<S, A> {
        &self.arena
    }

    /// Node ids from root to goal; empty on failure.
    pub fn path_ids(&self) -> &[NodeId] {
        &self.path
    }

    /// Nodes from root to goal in order.
    pub fn path(&self) -> impl Iterator<Item = &Node<S, A>> + '_ {
        self.path.iter().map(|&id| self.arena.get(id))
    }

    /// Number of nodes on the path (root included); zero on failure.
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Accumulated path cost at the goal node; zero on failure.
    pub fn total_cost(&self) -> f64 {
        self.goal_node().map_or(0.0, |n| n.path_cost)
    }

    /// States in the order the search expanded them.
    pub fn visited(&self) -> &[S] {
        &self.visited
    }

    /// One description line per path step that has a generating action.
    pub fn describe_path(&self, viewpoint: &str) -> Vec<String> {
        self.path()
            .filter_map(|node| node.action.as_ref())
            .map(|action| action.describe(viewpoint))
            .collect()
    }
}
