//! Breadth-first search.

use std::collections::{HashSet, VecDeque};

use super::config::SearchConfig;
use super::node::NodeArena;
use super::solution::Solution;
use super::strategy::{expand, goal_hashes};
use super::types::{Action, SearchState};

/// Breadth-first search: FIFO frontier, goal test at generation time.
///
/// Unlike depth-first search, a generated child that matches a goal stops
/// the search immediately, so with uniform step costs the returned path is
/// the shallowest one. The initial state is goal-tested before the loop.
pub struct BreadthFirst;

impl BreadthFirst {
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
        let mut visited: Vec<S> = Vec::new();
        let root = arena.root(initial);
        if goal_set.contains(&arena.get(root).content_hash) {
            visited.push(arena.get(root).state.clone());
            return Solution::found(arena, root, visited);
        }
        let mut reached: HashSet<_> = HashSet::new();
        reached.insert(arena.get(root).content_hash);
        let mut frontier = VecDeque::from([root]);

        while let Some(node) = frontier.pop_front() {
            visited.push(arena.get(node).state.clone());
            for child in expand(&mut arena, actions, node) {
                let hash = arena.get(child).content_hash;
                if goal_set.contains(&hash) {
                    visited.push(arena.get(child).state.clone());
                    return Solution::found(arena, child, visited);
                }
                if reached.insert(hash) {
                    frontier.push_back(child);
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
        let mut visited: Vec<S> = Vec::new();
        let root = arena.root(initial);
        if goal_set.contains(&arena.get(root).content_hash) {
            visited.push(arena.get(root).state.clone());
            return Solution::found(arena, root, visited);
        }
        let mut frontier = VecDeque::from([root]);

        while let Some(node) = frontier.pop_front() {
            visited.push(arena.get(node).state.clone());
            for child in expand(&mut arena, actions, node) {
                if goal_set.contains(&arena.get(child).content_hash) {
                    visited.push(arena.get(child).state.clone());
                    return Solution::found(arena, child, visited);
                }
                frontier.push_back(child);
            }
        }
        Solution::failure(arena, visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{sample_graph, ExplicitEdge, GraphState};

    #[test]
    fn test_bfs_returns_shallowest_goal() {
        let (initial, edges, goals) = sample_graph();
        let solution = BreadthFirst::search(&SearchConfig::default(), initial, &edges, &goals);
        assert!(solution.is_found());
        // Shallowest goal is G1 at depth 4 (S -> A -> C -> G1).
        let names: Vec<&str> = solution.path().map(|n| n.state.name()).collect();
        assert_eq!(names, vec!["S", "A", "C", "G1"]);
    }

    #[test]
    fn test_bfs_minimizes_steps_under_uniform_cost() {
        // Uniform costs: BFS must find the 2-step route even though a
        // 3-step route exists and is generated first.
        let edges = vec![
            ExplicitEdge::new("S", "A", 1.0),
            ExplicitEdge::new("A", "B", 1.0),
            ExplicitEdge::new("B", "G", 1.0),
            ExplicitEdge::new("S", "C", 1.0),
            ExplicitEdge::new("C", "G", 1.0),
        ];
        let goals = vec![GraphState::new("G")];
        let solution =
            BreadthFirst::search(&SearchConfig::default(), GraphState::new("S"), &edges, &goals);
        assert_eq!(solution.steps(), 3, "S -> C -> G is the shallowest route");
    }

    #[test]
    fn test_goal_recognized_at_generation() {
        let (initial, edges, goals) = sample_graph();
        let solution = BreadthFirst::search(&SearchConfig::default(), initial, &edges, &goals);
        // G1 is generated while expanding C; deeper nodes (E) are never
        // expanded, and the goal state closes the visitation log.
        let names: Vec<&str> = solution.visited().iter().map(GraphState::name).collect();
        assert_eq!(names.last(), Some(&"G1"));
        assert!(!names.contains(&"E"), "search stops before expanding E");
    }

    #[test]
    fn test_initial_state_checked_before_loop() {
        let (_, edges, _) = sample_graph();
        let goals = vec![GraphState::new("S")];
        let solution =
            BreadthFirst::search(&SearchConfig::default(), GraphState::new("S"), &edges, &goals);
        assert!(solution.is_found());
        assert_eq!(solution.steps(), 1);
    }

    #[test]
    fn test_bfs_fails_without_goal() {
        let (initial, edges, _) = sample_graph();
        let goals = vec![GraphState::new("Nowhere")];
        let solution = BreadthFirst::search(&SearchConfig::default(), initial, &edges, &goals);
        assert!(!solution.is_found());
    }
}
