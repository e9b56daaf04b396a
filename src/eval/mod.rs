//! State-quality and expected-utility evaluation.
//!
//! [`StateEvaluator`] scores a single country linearly; [`ScheduleEvaluator`]
//! turns a whole schedule into an expected utility via the
//! reward → discount → logistic-acceptance pipeline. The
//! [`ExpectedUtilityHeuristic`] feeds that score back into the search
//! strategies, coupling evaluation and search in the applied domain.

mod report;
mod schedule;
mod state;

pub use report::{describe_with_utility, solution_rows, ScheduleRow};
pub use schedule::{EvaluatorConfig, ExpectedUtilityHeuristic, ScheduleEvaluator, WorldSchedule};
pub use state::StateEvaluator;
