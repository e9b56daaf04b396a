//! Read-only view over a node's ancestor chain.

use std::cell::OnceCell;

use super::node::{Node, NodeArena, NodeId};
use super::types::{Action, SearchState};

/// The ordered sequence of actions leading from the root to one node.
///
/// Used by schedule-level evaluators to score a node mid-search: it exposes
/// the end state, the step count, and the set of entities impacted anywhere
/// along the chain. Impacted-entity discovery walks the chain once and is
/// memoized for the lifetime of the view.
pub struct Schedule<'a, S, A> {
    arena: &'a NodeArena<S, A>,
    node: NodeId,
    impacted: OnceCell<Vec<String>>,
}

impl<'a, S: SearchState, A: Action<S>> Schedule<'a, S, A> {
    pub fn new(arena: &'a NodeArena<S, A>, node: NodeId) -> Self {
        Self {
            arena,
            node,
            impacted: OnceCell::new(),
        }
    }

    pub fn node(&self) -> &Node<S, A> {
        self.arena.get(self.node)
    }

    /// The state at the end of the schedule.
    pub fn end_state(&self) -> &S {
        &self.node().state
    }

    /// Schedule length: the node's depth (root = 1).
    pub fn steps(&self) -> usize {
        self.arena.depth(self.node)
    }

    /// Entities impacted by any action along the chain, in discovery order
    /// (end of schedule first), each listed once.
    pub fn impacted_entities(&self) -> &[String] {
        self.impacted.get_or_init(|| {
            let mut seen: Vec<String> = Vec::new();
            for node in self.arena.ancestors(self.node) {
                if let Some(action) = &node.action {
                    for entity in action.impacted_entities() {
                        if !seen.contains(&entity) {
                            seen.push(entity);
                        }
                    }
                }
            }
            seen
        })
    }
}
