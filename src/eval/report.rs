//! Derived solution views for external writers.

use crate::search::{Action, Schedule, Solution};
use crate::world::{ActionKind, TradeAction, WorldState};

use super::schedule::ScheduleEvaluator;

/// One row of the tabular schedule report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRow {
    /// Depth of the node that the action produced (root = 1, so action
    /// rows start at 2).
    pub step: usize,
    pub action_kind: ActionKind,
    pub expected_utility: f64,
    pub state_quality: f64,
}

/// Tabular view of a solution: one row per action step, scored from the
/// evaluator's own country's viewpoint. Serialization is the caller's
/// concern.
pub fn solution_rows(
    solution: &Solution<WorldState, TradeAction>,
    evaluator: &ScheduleEvaluator,
) -> Vec<ScheduleRow> {
    let self_country = evaluator.self_country();
    solution
        .path_ids()
        .iter()
        .enumerate()
        .filter_map(|(index, &id)| {
            let node = solution.arena().get(id);
            let action = node.action.as_ref()?;
            let quality = node
                .state
                .country(self_country)
                .map_or(0.0, |c| evaluator.state_quality(c));
            let schedule = Schedule::new(solution.arena(), id);
            Some(ScheduleRow {
                step: index + 1,
                action_kind: action.kind(),
                expected_utility: evaluator.expected_utility(self_country, &schedule),
                state_quality: quality,
            })
        })
        .collect()
}

/// Human-readable step listing: each action described from the viewpoint
/// country with its expected utility appended.
pub fn describe_with_utility(
    solution: &Solution<WorldState, TradeAction>,
    evaluator: &ScheduleEvaluator,
) -> Vec<String> {
    let self_country = evaluator.self_country();
    solution
        .path_ids()
        .iter()
        .filter_map(|&id| {
            let node = solution.arena().get(id);
            let action = node.action.as_ref()?;
            let schedule = Schedule::new(solution.arena(), id);
            let eu = evaluator.expected_utility(self_country, &schedule);
            Some(format!("{} EU: {}", action.describe(self_country), eu))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvaluatorConfig;
    use crate::search::{Action, NodeArena};
    use crate::world::{Country, ResourceQuantity, TransferDirection};

    fn world() -> WorldState {
        WorldState::new()
            .with_country(Country::new("Atlantis").with_resource("Timber", 100))
            .with_country(Country::new("Carpania").with_resource("Timber", 10))
    }

    fn two_step_solution() -> Solution<WorldState, TradeAction> {
        let mut arena = NodeArena::new();
        let root = arena.root(world());
        let receive = TradeAction::transfer(
            vec![ResourceQuantity::new("Timber", 5)],
            TransferDirection::Receive,
            "Atlantis",
            "Carpania",
        );
        let s1 = receive.apply(&world()).unwrap();
        let n1 = arena.push(s1.clone(), Some(root), Some(receive.clone()), 0.0);
        let s2 = receive.apply(&s1).unwrap();
        let n2 = arena.push(s2, Some(n1), Some(receive), 0.0);
        Solution::found(arena, n2, Vec::new())
    }

    fn evaluator() -> ScheduleEvaluator {
        ScheduleEvaluator::new(
            world(),
            |c: &Country| c.resource("Timber") as f64,
            "Atlantis",
            EvaluatorConfig::default(),
        )
    }

    #[test]
    fn test_rows_skip_root_and_number_by_depth() {
        let solution = two_step_solution();
        let rows = solution_rows(&solution, &evaluator());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].step, 2);
        assert_eq!(rows[1].step, 3);
        assert!(rows.iter().all(|r| r.action_kind == ActionKind::Transfer));
    }

    #[test]
    fn test_rows_track_growing_quality() {
        let solution = two_step_solution();
        let rows = solution_rows(&solution, &evaluator());
        assert_eq!(rows[0].state_quality, 105.0);
        assert_eq!(rows[1].state_quality, 110.0);
        // Draining the counterparty tanks its acceptance probability, so
        // the expected utility drops even as self quality grows.
        assert!(rows[1].expected_utility < rows[0].expected_utility);
    }

    #[test]
    fn test_describe_lines_carry_utility_suffix() {
        let solution = two_step_solution();
        let lines = describe_with_utility(&solution, &evaluator());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("(TRANSFER Carpania self ((Timber 5))) EU: "));
    }
}
