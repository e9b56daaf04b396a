//! Applied orchestration: repeated schedule searches for one country.
//!
//! The engine runs one search at a time; candidate variety comes from
//! running several independent searches with shuffled action orders and
//! ranking the resulting schedules by expected utility.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::error::SearchError;
use crate::eval::{EvaluatorConfig, ExpectedUtilityHeuristic, ScheduleEvaluator, StateEvaluator};
use crate::search::{search, Schedule, SearchConfig, Solution, StrategyKind};
use crate::world::{
    ResourceQuantity, ResourceTemplate, TradeAction, TransferDirection, TransformTemplate,
    WorldState,
};

/// Configuration of one scheduling session.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Number of independent searches to run.
    pub num_schedules: usize,

    /// Shuffle the action order before each run, removing ordering bias
    /// between equally scored branches.
    pub shuffle: bool,

    /// Seed for the action shuffling; a random seed is drawn when absent.
    pub seed: Option<u64>,

    /// Transfers are generated for quantities `1..=max_transfer_quantity`
    /// of a single resource per action.
    pub max_transfer_quantity: i64,

    /// Transforms are generated for multipliers
    /// `1..=max_transform_multiplier` of each template.
    pub max_transform_multiplier: i64,

    /// Strategy driving each run.
    pub strategy: StrategyKind,

    pub search: SearchConfig,
    pub evaluator: EvaluatorConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_schedules: 1,
            shuffle: true,
            seed: None,
            max_transfer_quantity: 5,
            max_transform_multiplier: 1,
            strategy: StrategyKind::BestFirst,
            search: SearchConfig::default(),
            evaluator: EvaluatorConfig::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn with_num_schedules(mut self, n: usize) -> Self {
        self.num_schedules = n;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_transfer_quantity(mut self, q: i64) -> Self {
        self.max_transfer_quantity = q;
        self
    }

    pub fn with_max_transform_multiplier(mut self, m: i64) -> Self {
        self.max_transform_multiplier = m;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_evaluator(mut self, evaluator: EvaluatorConfig) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Validates the configuration, including the nested search and
    /// evaluator knobs.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_schedules == 0 {
            return Err("num_schedules must be at least 1".into());
        }
        if self.max_transfer_quantity < 1 {
            return Err("max_transfer_quantity must be at least 1".into());
        }
        if self.max_transform_multiplier < 1 {
            return Err("max_transform_multiplier must be at least 1".into());
        }
        self.search.validate()?;
        self.evaluator.validate()
    }
}

/// A completed schedule and its score, ordered best first in the session
/// result.
#[derive(Debug)]
pub struct RankedSolution {
    pub expected_utility: f64,
    pub solution: Solution<WorldState, TradeAction>,
}

/// Transfer actions for every transferable resource, quantity
/// `1..=max_quantity`, both directions, against every other country. Each
/// action moves a single resource, which keeps the branching factor linear
/// in the resource count.
pub fn build_transfer_actions(
    resources: &[ResourceTemplate],
    world: &WorldState,
    self_country: &str,
    max_quantity: i64,
) -> Vec<TradeAction> {
    let mut actions = Vec::new();
    for resource in resources.iter().filter(|r| r.transferable()) {
        for quantity in 1..=max_quantity {
            for other in world.countries().filter(|c| c.name != self_country) {
                for direction in [TransferDirection::Send, TransferDirection::Receive] {
                    actions.push(TradeAction::transfer(
                        vec![ResourceQuantity::new(resource.name.clone(), quantity)],
                        direction,
                        self_country,
                        &other.name,
                    ));
                }
            }
        }
    }
    actions
}

/// Transform actions for every template at multipliers
/// `1..=max_multiplier`, targeting the scheduling country.
pub fn build_transform_actions(
    templates: &[TransformTemplate],
    target_country: &str,
    max_multiplier: i64,
) -> Vec<TradeAction> {
    templates
        .iter()
        .flat_map(|t| TradeAction::transforms_from_template(t, target_country, max_multiplier))
        .collect()
}

/// Runs the full scheduling session for `self_country` and returns the
/// candidate schedules ranked by expected utility, best first.
///
/// Searches that exhaust without producing a node are logged and skipped;
/// they do not fail the session.
pub fn country_scheduler(
    config: &SchedulerConfig,
    world: &WorldState,
    resources: &[ResourceTemplate],
    templates: &[TransformTemplate],
    self_country: &str,
) -> Result<Vec<RankedSolution>, SearchError> {
    config.validate().expect("invalid SchedulerConfig");
    if world.country(self_country).is_none() {
        return Err(SearchError::UnknownCountry(self_country.to_string()));
    }

    let mut actions = build_transfer_actions(resources, world, self_country, config.max_transfer_quantity);
    actions.extend(build_transform_actions(
        templates,
        self_country,
        config.max_transform_multiplier,
    ));
    info!(total = actions.len(), "actions built");

    let state_evaluator = StateEvaluator::new(resources);
    let evaluator = ScheduleEvaluator::new(
        world.clone(),
        move |country| state_evaluator.state_quality(country),
        self_country,
        config.evaluator.clone(),
    );
    if let Some(start) = world.country(self_country) {
        info!(quality = evaluator.state_quality(start), "start country state quality");
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut ranked = Vec::new();
    for run in 1..=config.num_schedules {
        if config.shuffle {
            actions.shuffle(&mut rng);
        }
        let heuristic = ExpectedUtilityHeuristic::new(&evaluator);
        let solution = search(
            config.strategy,
            &config.search,
            world.clone(),
            &actions,
            Some(&heuristic),
            &[],
        )?;
        let Some(goal) = solution.goal_id() else {
            warn!(run, "search exhausted without a schedule");
            continue;
        };
        let schedule = Schedule::new(solution.arena(), goal);
        let expected_utility = evaluator.expected_utility(self_country, &schedule);
        evaluator.log_country_probabilities(&schedule);
        evaluator.log_country_state_diffs(&schedule);
        info!(run, expected_utility, "schedule complete");
        ranked.push(RankedSolution {
            expected_utility,
            solution,
        });
    }

    ranked.sort_by(|a, b| b.expected_utility.total_cmp(&a.expected_utility));
    Ok(ranked)
}
