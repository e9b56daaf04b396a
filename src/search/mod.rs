//! Generic informed/uninformed graph-search engine.
//!
//! Six strategies share one expansion contract: apply every action's
//! preconditions to the current state, build a child per applicable action
//! with `path_cost = parent + action.cost`, and manage the not-yet-expanded
//! nodes in a strategy-specific frontier. A `tree_based` flag selects
//! between tree expansion (duplicates re-expanded) and graph expansion
//! (deduplication by state content hash).
//!
//! - [`DepthFirst`]: LIFO frontier, goal test on dequeue.
//! - [`BreadthFirst`]: FIFO frontier, goal test at generation — shallowest
//!   solution under uniform step costs.
//! - [`UniformCost`]: frontier keyed by path cost, optimal for non-negative
//!   costs.
//! - [`GreedyBestFirst`]: frontier keyed by the heuristic alone, lowest
//!   first.
//! - [`BestFirst`]: highest heuristic first with a best-cost reached set;
//!   the variant driven by the trading domain's expected utility.
//! - [`HeuristicDepthFirst`]: depth-first control with per-expansion
//!   heuristic ranking; the depth bound is the only termination condition.
//!
//! All searches are synchronous and single-threaded; the frontier and
//! reached set belong exclusively to the running call.

mod best_first;
mod bfs;
mod config;
mod dfs;
mod frontier;
mod heuristic_dfs;
mod node;
mod schedule;
mod solution;
mod strategy;
mod types;

pub use best_first::{BestFirst, GreedyBestFirst, UniformCost};
pub use bfs::BreadthFirst;
pub use config::{SearchConfig, DEFAULT_DEPTH_BOUND, DEFAULT_MAX_FRONTIER_SIZE};
pub use dfs::DepthFirst;
pub use frontier::{Order, RankedFrontier};
pub use heuristic_dfs::HeuristicDepthFirst;
pub use node::{Node, NodeArena, NodeId};
pub use schedule::Schedule;
pub use solution::Solution;
pub use strategy::{search, StrategyKind};
pub use types::{Action, ContentHash, ContentHasher, Heuristic, SearchState};
