//! Generic graph-search engine with an expected-utility schedule evaluator.
//!
//! Two tightly coupled subsystems:
//!
//! - **Search** ([`search`]): a family of informed and uninformed
//!   strategies — depth-first, breadth-first, uniform-cost, greedy
//!   best-first, best-first with a reached set, and bounded heuristic
//!   depth-first — sharing one expansion contract over a pluggable state,
//!   action and heuristic model. States are identified by a deterministic
//!   content hash; frontiers break key ties by insertion order.
//! - **Evaluation** ([`eval`]): linear state-quality scoring and a
//!   stochastic schedule evaluator (reward, length discount, logistic
//!   acceptance, expected utility). In the applied trading domain the
//!   expected utility is itself the heuristic that drives the search.
//!
//! The applied domain lives in [`world`] (countries, resource transfers and
//! transforms) and [`scheduler`] (repeated shuffled searches ranked by
//! expected utility); [`graph`] provides the explicit-graph formulation for
//! enumerated state spaces.
//!
//! # Architecture
//!
//! The engine is synchronous and single-threaded: each search call owns its
//! frontier, reached set and node arena outright, and runs to a goal, a
//! bound, or exhaustion before returning. Callers wanting several candidate
//! schedules invoke the engine repeatedly (see
//! [`scheduler::country_scheduler`]).

pub mod error;
pub mod eval;
pub mod graph;
pub mod scheduler;
pub mod search;
pub mod world;

pub use error::SearchError;
