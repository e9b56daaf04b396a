//! Depth-first search.

use std::collections::HashSet;

use super::config::SearchConfig;
use super::node::NodeArena;
use super::solution::Solution;
use super::strategy::{expand, goal_hashes};
use super::types::{Action, SearchState};

/// Depth-first search: LIFO frontier, goal test on dequeue.
///
/// Tree mode re-expands duplicate states; graph mode skips children whose
/// content hash was already generated. Fails (no goal node) when the
/// frontier empties.
pub struct DepthFirst;

impl DepthFirst {
    pub fn search<S: SearchState, A: Action<S>>(
        config: &SearchConfig,
        initial: S,
        actions: &[A],
        goals: &[S],
    ) -> Solution<S, A> {
        config.validate().expect("invalid SearchConfig");
        if config.tree_based {
            Self::search_tree(initial, actions, goals)
        } else {
            Self::search_graph(initial, actions, goals)
        }
    }

    fn search_graph<S: SearchState, A: Action<S>>(
        initial: S,
        actions: &[A],
        goals: &[S],
    ) -> Solution<S, A> {
        let goal_set = goal_hashes(goals);
        let mut arena = NodeArena::new();
        let mut visited = Vec::new();
        let root = arena.root(initial);
        let mut reached: HashSet<_> = HashSet::new();
        reached.insert(arena.get(root).content_hash);
        let mut frontier = vec![root];

        while let Some(node) = frontier.pop() {
            visited.push(arena.get(node).state.clone());
            if goal_set.contains(&arena.get(node).content_hash) {
                return Solution::found(arena, node, visited);
            }
            for child in expand(&mut arena, actions, node) {
                if reached.insert(arena.get(child).content_hash) {
                    frontier.push(child);
                }
            }
        }
        Solution::failure(arena, visited)
    }

    fn search_tree<S: SearchState, A: Action<S>>(
        initial: S,
        actions: &[A],
        goals: &[S],
    ) -> Solution<S, A> {
        let goal_set = goal_hashes(goals);
        let mut arena = NodeArena::new();
        let mut visited = Vec::new();
        let root = arena.root(initial);
        let mut frontier = vec![root];

        while let Some(node) = frontier.pop() {
            visited.push(arena.get(node).state.clone());
            if goal_set.contains(&arena.get(node).content_hash) {
                return Solution::found(arena, node, visited);
            }
            frontier.extend(expand(&mut arena, actions, node));
        }
        Solution::failure(arena, visited)
    }
}
