//! Explicit-graph problem formulation.
//!
//! For enumerated state spaces the state is just a name and every action is
//! an edge with a precondition on its source state. This is the formulation
//! the uninformed strategies and the optimality tests run against; the
//! implicit trading formulation lives in [`crate::world`].

use crate::search::{Action, ContentHash, ContentHasher, SearchState};

/// A named state in an explicitly enumerated graph.
///
/// Identity is the name: the content hash digests the name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphState {
    name: String,
}

impl GraphState {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SearchState for GraphState {
    fn content_hash(&self) -> ContentHash {
        let mut hasher = ContentHasher::new();
        hasher.write_str(&self.name);
        hasher.finish()
    }
}

/// A directed edge: applicable exactly when the current state is `from`,
/// producing `to` at the given cost.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitEdge {
    from: String,
    to: String,
    cost: f64,
}

impl ExplicitEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, cost: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
        }
    }

    pub fn from_state(&self) -> &str {
        &self.from
    }

    pub fn to_state(&self) -> &str {
        &self.to
    }
}

impl Action<GraphState> for ExplicitEdge {
    fn preconditions_hold(&self, state: &GraphState) -> bool {
        state.name == self.from
    }

    fn apply(&self, state: &GraphState) -> Option<GraphState> {
        if self.preconditions_hold(state) {
            Some(GraphState::new(self.to.clone()))
        } else {
            None
        }
    }

    fn cost(&self) -> f64 {
        self.cost
    }

    fn impacted_entities(&self) -> Vec<String> {
        vec![self.from.clone(), self.to.clone()]
    }

    fn describe(&self, viewpoint: &str) -> String {
        let name = |state: &str| {
            if state == viewpoint {
                "self".to_string()
            } else {
                state.to_string()
            }
        };
        format!("(EDGE {} {} {})", name(&self.from), name(&self.to), self.cost)
    }
}

/// The eight-state graph with goals G1/G2 used across the strategy tests.
#[cfg(test)]
pub(crate) fn sample_graph() -> (GraphState, Vec<ExplicitEdge>, Vec<GraphState>) {
    let edges = vec![
        ExplicitEdge::new("S", "A", 1.0),
        ExplicitEdge::new("S", "D", 4.0),
        ExplicitEdge::new("A", "B", 2.0),
        ExplicitEdge::new("A", "C", 2.0),
        ExplicitEdge::new("B", "D", 2.0),
        ExplicitEdge::new("C", "E", 4.0),
        ExplicitEdge::new("C", "G1", 5.0),
        ExplicitEdge::new("D", "E", 2.0),
        ExplicitEdge::new("E", "G1", 2.0),
        ExplicitEdge::new("E", "G2", 1.0),
    ];
    let goals = vec![GraphState::new("G1"), GraphState::new("G2")];
    (GraphState::new("S"), edges, goals)
}

/// Straight-line distance style table for the sample graph.
#[cfg(test)]
pub(crate) fn sample_heuristic_value(name: &str) -> f64 {
    match name {
        "S" => 7.0,
        "A" => 4.0,
        "B" => 2.0,
        "C" => 3.0,
        "D" => 5.0,
        "E" => 2.0,
        _ => 0.0,
    }
}
