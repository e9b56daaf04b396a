//! Linear state-quality scoring.

use std::collections::BTreeMap;

use tracing::debug;

use crate::world::{Country, ResourceTemplate};

/// Scores a country as the weighted sum of its resource quantities, with
/// weights taken from the resource template table at construction.
#[derive(Debug, Clone)]
pub struct StateEvaluator {
    weights: BTreeMap<String, f64>,
    factors: BTreeMap<String, String>,
}

impl StateEvaluator {
    pub fn new(resources: &[ResourceTemplate]) -> Self {
        let mut weights = BTreeMap::new();
        let mut factors = BTreeMap::new();
        for resource in resources {
            weights.insert(resource.name.clone(), resource.weight);
            factors.insert(resource.name.clone(), resource.factor.clone());
        }
        Self { weights, factors }
    }

    /// The factor class of a resource, if the template table carries it.
    pub fn factor(&self, resource: &str) -> Option<&str> {
        self.factors.get(resource).map(String::as_str)
    }

    /// `Σ quantity × weight` over the country's resources.
    ///
    /// Resources without a template weigh nothing.
    pub fn state_quality(&self, country: &Country) -> f64 {
        country
            .resources
            .iter()
            .map(|(name, &quantity)| match self.weights.get(name) {
                Some(weight) => quantity as f64 * weight,
                None => {
                    debug!(resource = %name, "no weight for resource, scoring 0");
                    0.0
                }
            })
            .sum()
    }
}
