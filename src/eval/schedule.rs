//! Expected-utility evaluation of trading schedules.

use std::cell::RefCell;
use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::search::{Heuristic, NodeArena, NodeId, Schedule};
use crate::world::{Country, TradeAction, WorldState};

/// A schedule view over the trading domain.
pub type WorldSchedule<'a> = Schedule<'a, WorldState, TradeAction>;

/// Numeric knobs of the expected-utility model.
///
/// # Examples
///
/// ```
/// use world_trader::eval::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default()
///     .with_length_impact(0.95)
///     .with_force_self_accept(true);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Utility granted when a schedule is rejected. Negative: rejection
    /// hurts.
    pub failed_impact: f64,

    /// Per-step discount base in (0, 1); longer schedules are worth less.
    pub length_impact: f64,

    /// Logistic midpoint `x₀`: the discounted reward at which acceptance
    /// is a coin flip. Shifting negative makes acceptance more likely.
    pub logistic_midpoint: f64,

    /// Logistic growth `k`: steepness of the acceptance curve.
    pub logistic_growth: f64,

    /// Treat the evaluating country's own schedules as always accepted.
    pub force_self_accept: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            failed_impact: -0.35,
            length_impact: 0.999,
            logistic_midpoint: 0.0,
            logistic_growth: 1.0,
            force_self_accept: false,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_failed_impact(mut self, v: f64) -> Self {
        self.failed_impact = v;
        self
    }

    pub fn with_length_impact(mut self, v: f64) -> Self {
        self.length_impact = v;
        self
    }

    pub fn with_logistic_midpoint(mut self, v: f64) -> Self {
        self.logistic_midpoint = v;
        self
    }

    pub fn with_logistic_growth(mut self, v: f64) -> Self {
        self.logistic_growth = v;
        self
    }

    pub fn with_force_self_accept(mut self, v: bool) -> Self {
        self.force_self_accept = v;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.length_impact > 0.0 && self.length_impact < 1.0) {
            return Err(format!(
                "length_impact must be in (0, 1), got {}",
                self.length_impact
            ));
        }
        if !self.logistic_growth.is_finite() {
            return Err("logistic_growth must be finite".into());
        }
        Ok(())
    }
}

/// Converts a schedule into an expected-utility score.
///
/// The pipeline: per-country state-quality reward, discounted by schedule
/// length, pushed through a logistic acceptance curve per impacted country,
/// multiplied into a joint success probability, and blended with the
/// failure penalty.
///
/// The initial quality per country is computed once and cached; the cache
/// is written at most once per key and the evaluator is single-threaded by
/// contract, matching the engine's resource model.
pub struct ScheduleEvaluator {
    initial_state: WorldState,
    quality_fn: Box<dyn Fn(&Country) -> f64>,
    self_country: String,
    config: EvaluatorConfig,
    initial_quality: RefCell<BTreeMap<String, f64>>,
}

impl ScheduleEvaluator {
    pub fn new(
        initial_state: WorldState,
        quality_fn: impl Fn(&Country) -> f64 + 'static,
        self_country: impl Into<String>,
        config: EvaluatorConfig,
    ) -> Self {
        config.validate().expect("invalid EvaluatorConfig");
        Self {
            initial_state,
            quality_fn: Box::new(quality_fn),
            self_country: self_country.into(),
            config,
            initial_quality: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn self_country(&self) -> &str {
        &self.self_country
    }

    /// Quality of one country under the configured scoring function.
    pub fn state_quality(&self, country: &Country) -> f64 {
        (self.quality_fn)(country)
    }

    fn quality_of(&self, state: &WorldState, country: &str) -> f64 {
        match state.country(country) {
            Some(c) => (self.quality_fn)(c),
            None => {
                debug!(country, "country missing from state, quality 0");
                0.0
            }
        }
    }

    fn initial_state_quality(&self, country: &str) -> f64 {
        if let Some(&quality) = self.initial_quality.borrow().get(country) {
            return quality;
        }
        let quality = self.quality_of(&self.initial_state, country);
        info!(country, quality, "calculated initial state quality");
        self.initial_quality
            .borrow_mut()
            .insert(country.to_string(), quality);
        quality
    }

    /// `quality(end state) − quality(initial state)` for one country.
    pub fn undiscounted_reward(&self, country: &str, schedule: &WorldSchedule<'_>) -> f64 {
        let start = self.initial_state_quality(country);
        let end = self.quality_of(schedule.end_state(), country);
        end - start
    }

    /// Undiscounted reward scaled by `length_impact ^ steps`.
    pub fn discounted_reward(&self, country: &str, schedule: &WorldSchedule<'_>) -> f64 {
        let discount = self.config.length_impact.powi(schedule.steps() as i32);
        self.undiscounted_reward(country, schedule) * discount
    }

    /// The logistic curve `1 / (1 + e^(−k·(x − x₀)))`.
    ///
    /// An overflowing exponent saturates to `+∞`, driving the probability
    /// to 0 rather than failing.
    pub fn logistic(&self, x: f64) -> f64 {
        let exponent = -self.config.logistic_growth * (x - self.config.logistic_midpoint);
        1.0 / (1.0 + exponent.exp())
    }

    /// Probability that one impacted country accepts the schedule.
    pub fn logistic_success(&self, country: &str, schedule: &WorldSchedule<'_>) -> f64 {
        if self.config.force_self_accept && country == self.self_country {
            return 1.0;
        }
        self.logistic(self.discounted_reward(country, schedule))
    }

    /// Joint acceptance probability: impacted countries accept
    /// independently.
    pub fn schedule_success_probability(&self, schedule: &WorldSchedule<'_>) -> f64 {
        schedule
            .impacted_entities()
            .iter()
            .map(|country| self.logistic_success(country, schedule))
            .product()
    }

    /// `p·discounted_reward + (1 − p)·failed_impact` for the given country.
    pub fn expected_utility(&self, country: &str, schedule: &WorldSchedule<'_>) -> f64 {
        let discounted_reward = self.discounted_reward(country, schedule);
        let success = self.schedule_success_probability(schedule);
        success * discounted_reward + (1.0 - success) * self.config.failed_impact
    }

    /// Logs each impacted country's acceptance probability.
    pub fn log_country_probabilities(&self, schedule: &WorldSchedule<'_>) {
        for country in schedule.impacted_entities() {
            let probability = self.logistic_success(country, schedule);
            info!(country = %country, probability, "country schedule acceptance");
        }
    }

    /// Logs each impacted country's resource diff and quality change.
    pub fn log_country_state_diffs(&self, schedule: &WorldSchedule<'_>) {
        for country in schedule.impacted_entities() {
            let (Some(start), Some(end)) = (
                self.initial_state.country(country),
                schedule.end_state().country(country),
            ) else {
                continue;
            };
            let diff = Country::diff_resource_quantities(start, end);
            let reward = self.undiscounted_reward(country, schedule);
            info!(country = %country, ?diff, reward, "country state diff");
        }
    }
}

/// The heuristic that closes the loop: a node is scored by the expected
/// utility of its schedule from the evaluator's own country's viewpoint.
pub struct ExpectedUtilityHeuristic<'a> {
    evaluator: &'a ScheduleEvaluator,
}

impl<'a> ExpectedUtilityHeuristic<'a> {
    pub fn new(evaluator: &'a ScheduleEvaluator) -> Self {
        Self { evaluator }
    }
}

impl Heuristic<WorldState, TradeAction> for ExpectedUtilityHeuristic<'_> {
    fn evaluate(&self, arena: &NodeArena<WorldState, TradeAction>, node: NodeId) -> f64 {
        let schedule = Schedule::new(arena, node);
        self.evaluator
            .expected_utility(self.evaluator.self_country(), &schedule)
    }
}
