//! Strategy registry and the shared expansion step.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

use super::config::SearchConfig;
use super::node::{NodeArena, NodeId};
use super::solution::Solution;
use super::types::{Action, ContentHash, Heuristic, SearchState};
use super::{BestFirst, BreadthFirst, DepthFirst, GreedyBestFirst, HeuristicDepthFirst, UniformCost};

/// The six search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    GreedyBestFirst,
    BestFirst,
    HeuristicDepthFirst,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::DepthFirst => "DepthFirst",
            StrategyKind::BreadthFirst => "BreadthFirst",
            StrategyKind::UniformCost => "UniformCost",
            StrategyKind::GreedyBestFirst => "GreedyBestFirst",
            StrategyKind::BestFirst => "BestFirst",
            StrategyKind::HeuristicDepthFirst => "HeuristicDepthFirst",
        }
    }

    /// Whether the strategy needs a heuristic to run.
    pub fn is_informed(self) -> bool {
        matches!(
            self,
            StrategyKind::GreedyBestFirst | StrategyKind::BestFirst | StrategyKind::HeuristicDepthFirst
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DepthFirst" | "DepthFirstSearch" => Ok(StrategyKind::DepthFirst),
            "BreadthFirst" | "BreadthFirstSearch" => Ok(StrategyKind::BreadthFirst),
            "UniformCost" | "UniformCostSearch" => Ok(StrategyKind::UniformCost),
            "GreedyBestFirst" | "GreedyBestFirstSearch" => Ok(StrategyKind::GreedyBestFirst),
            "BestFirst" | "BestFirstSearch" => Ok(StrategyKind::BestFirst),
            "HeuristicDepthFirst" | "HeuristicDepthFirstSearch" => {
                Ok(StrategyKind::HeuristicDepthFirst)
            }
            other => Err(SearchError::UnrecognizedStrategy(other.to_string())),
        }
    }
}

/// Runs the selected strategy over one search call.
///
/// `heuristic` may be `None` for the uninformed strategies; passing `None`
/// to an informed strategy is a fatal wiring error. `goals` may be empty for
/// the purely bound-driven strategies.
pub fn search<S: SearchState, A: Action<S>>(
    kind: StrategyKind,
    config: &SearchConfig,
    initial: S,
    actions: &[A],
    heuristic: Option<&dyn Heuristic<S, A>>,
    goals: &[S],
) -> Result<Solution<S, A>, SearchError> {
    fn informed<S: SearchState, A: Action<S>>(
        h: Option<&dyn Heuristic<S, A>>,
        kind: StrategyKind,
    ) -> Result<&dyn Heuristic<S, A>, SearchError> {
        h.ok_or(SearchError::MissingHeuristic(kind.name()))
    }
    match kind {
        StrategyKind::DepthFirst => Ok(DepthFirst::search(config, initial, actions, goals)),
        StrategyKind::BreadthFirst => Ok(BreadthFirst::search(config, initial, actions, goals)),
        StrategyKind::UniformCost => Ok(UniformCost::search(config, initial, actions, goals)),
        StrategyKind::GreedyBestFirst => Ok(GreedyBestFirst::search(
            config,
            initial,
            actions,
            informed(heuristic, kind)?,
            goals,
        )),
        StrategyKind::BestFirst => Ok(BestFirst::search(
            config,
            initial,
            actions,
            informed(heuristic, kind)?,
            goals,
        )),
        StrategyKind::HeuristicDepthFirst => Ok(HeuristicDepthFirst::search(
            config,
            initial,
            actions,
            informed(heuristic, kind)?,
        )),
    }
}

/// Applies every action to `node`'s state, allocating a child for each
/// applicable one with `path_cost = parent + action.cost`. Children come
/// back in action order; inapplicable actions are skipped.
pub(crate) fn expand<S: SearchState, A: Action<S>>(
    arena: &mut NodeArena<S, A>,
    actions: &[A],
    node: NodeId,
) -> Vec<NodeId> {
    let parent_cost = arena.get(node).path_cost;
    let successors: Vec<(usize, S)> = actions
        .iter()
        .enumerate()
        .filter_map(|(i, action)| action.apply(&arena.get(node).state).map(|s| (i, s)))
        .collect();
    successors
        .into_iter()
        .map(|(i, state)| {
            let action = &actions[i];
            arena.push(state, Some(node), Some(action.clone()), parent_cost + action.cost())
        })
        .collect()
}

/// Content hashes of the goal states, for dequeue/generation goal tests.
pub(crate) fn goal_hashes<S: SearchState>(goals: &[S]) -> HashSet<ContentHash> {
    goals.iter().map(SearchState::content_hash).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{sample_graph, sample_heuristic_value, ExplicitEdge, GraphState};

    #[test]
    fn test_strategy_names_round_trip() {
        for kind in [
            StrategyKind::DepthFirst,
            StrategyKind::BreadthFirst,
            StrategyKind::UniformCost,
            StrategyKind::GreedyBestFirst,
            StrategyKind::BestFirst,
            StrategyKind::HeuristicDepthFirst,
        ] {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unrecognized_strategy_is_fatal() {
        let err = "SimulatedAnnealing".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, SearchError::UnrecognizedStrategy(name) if name == "SimulatedAnnealing"));
    }

    #[test]
    fn test_informed_strategy_without_heuristic_errors() {
        let (initial, edges, goals) = sample_graph();
        let err = search(
            StrategyKind::GreedyBestFirst,
            &SearchConfig::default(),
            initial,
            &edges,
            None,
            &goals,
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::MissingHeuristic(_)));
    }

    #[test]
    fn test_dispatch_runs_uninformed_strategy() {
        let (initial, edges, goals) = sample_graph();
        let solution = search(
            StrategyKind::BreadthFirst,
            &SearchConfig::default(),
            initial,
            &edges,
            None,
            &goals,
        )
        .unwrap();
        assert!(solution.is_found());
    }

    #[test]
    fn test_dispatch_runs_informed_strategy() {
        let (initial, edges, goals) = sample_graph();
        let heuristic = |arena: &NodeArena<GraphState, ExplicitEdge>, id: NodeId| {
            sample_heuristic_value(arena.get(id).state.name())
        };
        let solution = search(
            StrategyKind::GreedyBestFirst,
            &SearchConfig::default(),
            initial,
            &edges,
            Some(&heuristic),
            &goals,
        )
        .unwrap();
        assert!(solution.is_found());
    }

    #[test]
    fn test_expand_skips_inapplicable_actions() {
        let (initial, edges, _) = sample_graph();
        let mut arena: NodeArena<GraphState, ExplicitEdge> = NodeArena::new();
        let root = arena.root(initial);
        let children = expand(&mut arena, &edges, root);
        let names: Vec<&str> = children.iter().map(|&id| arena.get(id).state.name()).collect();
        assert_eq!(names, vec!["A", "D"], "only S-edges apply at the root");
        assert!((arena.get(children[1]).path_cost - 4.0).abs() < 1e-12);
    }
}
