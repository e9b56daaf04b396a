//! Bounded heuristic depth-first search.

use std::collections::HashSet;

use tracing::{debug, info};

use super::config::SearchConfig;
use super::frontier::{Order, RankedFrontier};
use super::node::{NodeArena, NodeId};
use super::solution::Solution;
use super::strategy::expand;
use super::types::{Action, Heuristic, SearchState};

/// Depth-first control with heuristic bias: children of each expansion are
/// ranked by the heuristic before being pushed, so the most promising child
/// sits on top of the stack without global priority ordering.
///
/// There is no goal test. The depth bound is the sole termination
/// condition: the first node popped at `depth >= depth_bound` is returned
/// as the solution. If the frontier empties first, the most recently
/// expanded node is returned instead — this strategy has no failure mode.
pub struct HeuristicDepthFirst;

impl HeuristicDepthFirst {
    pub fn search<S: SearchState, A: Action<S>>(
        config: &SearchConfig,
        initial: S,
        actions: &[A],
        heuristic: &dyn Heuristic<S, A>,
    ) -> Solution<S, A> {
        config.validate().expect("invalid SearchConfig");
        info!(
            max_frontier_size = config.max_frontier_size,
            depth_bound = config.depth_bound,
            "searching depth-first with heuristic bias"
        );
        if config.tree_based {
            Self::search_tree(config, initial, actions, heuristic)
        } else {
            Self::search_graph(config, initial, actions, heuristic)
        }
    }

    fn search_graph<S: SearchState, A: Action<S>>(
        config: &SearchConfig,
        initial: S,
        actions: &[A],
        heuristic: &dyn Heuristic<S, A>,
    ) -> Solution<S, A> {
        let mut arena = NodeArena::new();
        let mut visited: Vec<S> = Vec::new();
        let root = arena.root(initial);
        let mut reached: HashSet<_> = HashSet::new();
        reached.insert(arena.get(root).content_hash);
        let mut frontier = vec![root];
        let mut high_water = 1usize;
        let mut expansions = 0u64;
        let mut last = root;

        while let Some(node) = frontier.pop() {
            last = node;
            visited.push(arena.get(node).state.clone());
            if arena.depth(node) >= config.depth_bound {
                info!(high_water, "depth bound reached");
                return Solution::found(arena, node, visited);
            }
            expansions += 1;
            if expansions % 10 == 0 {
                info!(expansions, "expansion progress");
            }
            let room = config.max_frontier_size.saturating_sub(frontier.len());
            for child in ordered_children(&mut arena, actions, heuristic, node, room) {
                if reached.insert(arena.get(child).content_hash) {
                    frontier.push(child);
                } else {
                    debug!("child already reached");
                }
            }
            high_water = high_water.max(frontier.len());
        }
        info!(high_water, "frontier exhausted");
        Solution::found(arena, last, visited)
    }

    fn search_tree<S: SearchState, A: Action<S>>(
        config: &SearchConfig,
        initial: S,
        actions: &[A],
        heuristic: &dyn Heuristic<S, A>,
    ) -> Solution<S, A> {
        let mut arena = NodeArena::new();
        let mut visited: Vec<S> = Vec::new();
        let root = arena.root(initial);
        let mut frontier = vec![root];
        let mut high_water = 1usize;
        let mut last = root;

        while let Some(node) = frontier.pop() {
            last = node;
            visited.push(arena.get(node).state.clone());
            if arena.depth(node) >= config.depth_bound {
                info!(high_water, "depth bound reached");
                return Solution::found(arena, node, visited);
            }
            let room = config.max_frontier_size.saturating_sub(frontier.len());
            frontier.extend(ordered_children(&mut arena, actions, heuristic, node, room));
            high_water = high_water.max(frontier.len());
        }
        info!(high_water, "frontier exhausted");
        Solution::found(arena, last, visited)
    }
}

/// Expands `node`, keeps the `room` heuristically best children, and
/// returns them worst-first so a plain stack pops the best child first.
fn ordered_children<S: SearchState, A: Action<S>>(
    arena: &mut NodeArena<S, A>,
    actions: &[A],
    heuristic: &dyn Heuristic<S, A>,
    node: NodeId,
    room: usize,
) -> Vec<NodeId> {
    let mut ranked = RankedFrontier::new(Order::MaxFirst);
    for child in expand(arena, actions, node) {
        ranked.push(child, heuristic.evaluate(arena, child));
    }
    let mut ordered = ranked.drain_sorted();
    ordered.truncate(room);
    ordered.reverse();
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{sample_graph, sample_heuristic_value, ExplicitEdge, GraphState};

    fn table_heuristic() -> impl Heuristic<GraphState, ExplicitEdge> {
        |arena: &NodeArena<GraphState, ExplicitEdge>, id: NodeId| {
            sample_heuristic_value(arena.get(id).state.name())
        }
    }

    #[test]
    fn test_depth_bound_one_returns_root() {
        let (initial, edges, _) = sample_graph();
        let heuristic = table_heuristic();
        let config = SearchConfig::default().with_depth_bound(1);
        let solution = HeuristicDepthFirst::search(&config, initial, &edges, &heuristic);
        assert!(solution.is_found());
        let goal = solution.goal_id().unwrap();
        assert_eq!(solution.arena().depth(goal), 1, "root is returned before any expansion");
        assert_eq!(solution.goal_node().unwrap().state.name(), "S");
    }

    #[test]
    fn test_best_child_explored_first() {
        let (initial, edges, _) = sample_graph();
        let heuristic = table_heuristic();
        let config = SearchConfig::default().with_depth_bound(3);
        let solution = HeuristicDepthFirst::search(&config, initial, &edges, &heuristic);
        // S expands to A (h=4) and D (h=5); max-biased DFS dives into D.
        let names: Vec<&str> = solution.visited().iter().map(GraphState::name).collect();
        assert_eq!(names[1], "D");
    }

    #[test]
    fn test_returns_node_at_exact_bound() {
        let (initial, edges, _) = sample_graph();
        let heuristic = table_heuristic();
        let config = SearchConfig::default().with_depth_bound(3);
        let solution = HeuristicDepthFirst::search(&config, initial, &edges, &heuristic);
        let goal = solution.goal_id().unwrap();
        assert_eq!(solution.arena().depth(goal), 3);
    }

    #[test]
    fn test_exhausted_frontier_returns_last_expanded_node() {
        // Dead-end graph: the bound is unreachable, yet the strategy still
        // reports the node it stopped on.
        let edges = vec![ExplicitEdge::new("S", "A", 1.0)];
        let heuristic = |_: &NodeArena<GraphState, ExplicitEdge>, _: NodeId| 0.0;
        let config = SearchConfig::default().with_depth_bound(50);
        let solution =
            HeuristicDepthFirst::search(&config, GraphState::new("S"), &edges, &heuristic);
        assert!(solution.is_found());
        assert_eq!(solution.goal_node().unwrap().state.name(), "A");
    }

    #[test]
    fn test_reached_mode_skips_duplicate_children() {
        // A <-> S loop: graph mode must not bounce between the two states.
        let edges = vec![
            ExplicitEdge::new("S", "A", 1.0),
            ExplicitEdge::new("A", "S", 1.0),
        ];
        let heuristic = |_: &NodeArena<GraphState, ExplicitEdge>, _: NodeId| 0.0;
        let config = SearchConfig::default().with_depth_bound(10);
        let solution =
            HeuristicDepthFirst::search(&config, GraphState::new("S"), &edges, &heuristic);
        assert_eq!(solution.visited().len(), 2, "S and A each expand once");
    }

    #[test]
    fn test_tree_mode_runs_to_the_bound_on_a_loop() {
        let edges = vec![
            ExplicitEdge::new("S", "A", 1.0),
            ExplicitEdge::new("A", "S", 1.0),
        ];
        let heuristic = |_: &NodeArena<GraphState, ExplicitEdge>, _: NodeId| 0.0;
        let config = SearchConfig::default().with_depth_bound(4).with_tree_based(true);
        let solution = HeuristicDepthFirst::search(&config, GraphState::new("S"), &edges, &heuristic);
        let goal = solution.goal_id().unwrap();
        assert_eq!(solution.arena().depth(goal), 4);
    }
}
