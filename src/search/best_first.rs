//! The ranked-frontier strategies: uniform-cost, greedy best-first, and
//! best-first with a reached set.
//!
//! One expansion core serves all three; they differ only in the frontier key
//! (accumulated path cost vs. heuristic) and extraction direction.

use std::collections::HashMap;

use tracing::{debug, info};

use super::config::SearchConfig;
use super::frontier::{Order, RankedFrontier};
use super::node::{NodeArena, NodeId};
use super::solution::Solution;
use super::strategy::{expand, goal_hashes};
use super::types::{Action, ContentHash, Heuristic, SearchState};

enum KeySource<'a, S, A> {
    PathCost,
    Heuristic(&'a dyn Heuristic<S, A>),
}

impl<S: SearchState, A: Action<S>> KeySource<'_, S, A> {
    fn key(&self, arena: &NodeArena<S, A>, node: NodeId) -> f64 {
        match self {
            KeySource::PathCost => arena.get(node).path_cost,
            KeySource::Heuristic(h) => h.evaluate(arena, node),
        }
    }
}

/// Shared loop: pop the extreme node, goal-test it, cut off at the depth
/// bound, expand, and admit children under the frontier cap.
///
/// Graph mode keeps the best path cost per content hash; a child is admitted
/// only when its hash is unseen or its path cost strictly improves the
/// stored one, and a popped node that has since been dominated is skipped
/// without expansion.
fn ranked_search<S: SearchState, A: Action<S>>(
    config: &SearchConfig,
    order: Order,
    key: KeySource<'_, S, A>,
    initial: S,
    actions: &[A],
    goals: &[S],
) -> Solution<S, A> {
    config.validate().expect("invalid SearchConfig");
    info!(
        max_frontier_size = config.max_frontier_size,
        depth_bound = config.depth_bound,
        "searching with ranked frontier"
    );

    let goal_set = goal_hashes(goals);
    let mut arena = NodeArena::new();
    let mut visited: Vec<S> = Vec::new();
    let root = arena.root(initial);
    let mut frontier = RankedFrontier::new(order);
    frontier.push(root, key.key(&arena, root));
    let mut reached: Option<HashMap<ContentHash, f64>> = if config.tree_based {
        None
    } else {
        let mut map = HashMap::new();
        map.insert(arena.get(root).content_hash, 0.0);
        Some(map)
    };

    while let Some(node) = frontier.pop() {
        if let Some(map) = &reached {
            if let Some(&best) = map.get(&arena.get(node).content_hash) {
                if arena.get(node).path_cost > best {
                    continue; // dominated duplicate left behind by a cheaper admission
                }
            }
        }
        visited.push(arena.get(node).state.clone());
        if goal_set.contains(&arena.get(node).content_hash) {
            info!(high_water = frontier.high_water(), "goal reached");
            return Solution::found(arena, node, visited);
        }
        if arena.depth(node) >= config.depth_bound {
            info!(high_water = frontier.high_water(), "depth bound reached");
            return Solution::found(arena, node, visited);
        }
        for child in expand(&mut arena, actions, node) {
            let child_key = key.key(&arena, child);
            match &mut reached {
                Some(map) => {
                    let hash = arena.get(child).content_hash;
                    let cost = arena.get(child).path_cost;
                    let improves = map.get(&hash).is_none_or(|&prev| cost < prev);
                    if improves {
                        map.insert(hash, cost);
                        if !frontier.push_bounded(child, child_key, config.max_frontier_size) {
                            debug!("frontier full, child dropped");
                        }
                    }
                }
                None => {
                    if !frontier.push_bounded(child, child_key, config.max_frontier_size) {
                        debug!("frontier full, child dropped");
                    }
                }
            }
        }
    }
    info!(high_water = frontier.high_water(), "frontier exhausted");
    Solution::failure(arena, visited)
}

/// Uniform-cost search: frontier keyed by accumulated path cost, lowest
/// first, goal test on dequeue. Optimal for non-negative costs.
pub struct UniformCost;

impl UniformCost {
    pub fn search<S: SearchState, A: Action<S>>(
        config: &SearchConfig,
        initial: S,
        actions: &[A],
        goals: &[S],
    ) -> Solution<S, A> {
        ranked_search(config, Order::MinFirst, KeySource::PathCost, initial, actions, goals)
    }
}

/// Greedy best-first search: frontier keyed by the heuristic alone, lowest
/// first (distance-style heuristics), goal test on dequeue.
pub struct GreedyBestFirst;

impl GreedyBestFirst {
    pub fn search<S: SearchState, A: Action<S>>(
        config: &SearchConfig,
        initial: S,
        actions: &[A],
        heuristic: &dyn Heuristic<S, A>,
        goals: &[S],
    ) -> Solution<S, A> {
        ranked_search(
            config,
            Order::MinFirst,
            KeySource::Heuristic(heuristic),
            initial,
            actions,
            goals,
        )
    }
}

/// Best-first search over a utility-style heuristic: highest key first.
///
/// This is the strategy the trading domain drives with expected utility.
/// `goals` may be empty, in which case only the depth bound terminates the
/// search with a node.
pub struct BestFirst;

impl BestFirst {
    pub fn search<S: SearchState, A: Action<S>>(
        config: &SearchConfig,
        initial: S,
        actions: &[A],
        heuristic: &dyn Heuristic<S, A>,
        goals: &[S],
    ) -> Solution<S, A> {
        ranked_search(
            config,
            Order::MaxFirst,
            KeySource::Heuristic(heuristic),
            initial,
            actions,
            goals,
        )
    }
}
