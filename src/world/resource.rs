//! Resource quantities and the templates that describe them.

use std::fmt;

/// Resources that can never be transferred between countries.
pub const NONTRANSFERABLE_RESOURCES: &[&str] = &["Population"];

/// A named amount of one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceQuantity {
    pub name: String,
    pub quantity: i64,
}

impl ResourceQuantity {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl fmt::Display for ResourceQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.quantity)
    }
}

/// Static description of a resource: its quality weight and factor class.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceTemplate {
    pub name: String,
    pub weight: f64,
    pub factor: String,
}

impl ResourceTemplate {
    pub fn new(name: impl Into<String>, weight: f64, factor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            factor: factor.into(),
        }
    }

    /// Whether transfer actions may move this resource.
    pub fn transferable(&self) -> bool {
        !NONTRANSFERABLE_RESOURCES.contains(&self.name.as_str())
    }
}

/// A named production recipe: inputs consumed, outputs produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformTemplate {
    pub name: String,
    pub inputs: Vec<ResourceQuantity>,
    pub outputs: Vec<ResourceQuantity>,
}

impl TransformTemplate {
    pub fn new(
        name: impl Into<String>,
        inputs: Vec<ResourceQuantity>,
        outputs: Vec<ResourceQuantity>,
    ) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
        }
    }

    /// The same recipe with every input and output quantity multiplied.
    pub fn scaled(&self, multiplier: i64) -> Self {
        let scale = |quantities: &[ResourceQuantity]| {
            quantities
                .iter()
                .map(|rq| ResourceQuantity::new(rq.name.clone(), rq.quantity * multiplier))
                .collect()
        };
        Self {
            name: self.name.clone(),
            inputs: scale(&self.inputs),
            outputs: scale(&self.outputs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_is_not_transferable() {
        assert!(!ResourceTemplate::new("Population", 1.0, "Existence").transferable());
        assert!(ResourceTemplate::new("Timber", 0.5, "Materials").transferable());
    }

    #[test]
    fn test_scaled_template_multiplies_both_sides() {
        let template = TransformTemplate::new(
            "housing",
            vec![
                ResourceQuantity::new("Timber", 5),
                ResourceQuantity::new("Metal", 1),
            ],
            vec![ResourceQuantity::new("Housing", 1)],
        );
        let doubled = template.scaled(2);
        assert_eq!(doubled.inputs[0].quantity, 10);
        assert_eq!(doubled.inputs[1].quantity, 2);
        assert_eq!(doubled.outputs[0].quantity, 2);
        assert_eq!(doubled.name, "housing");
    }

    #[test]
    fn test_resource_quantity_display() {
        assert_eq!(ResourceQuantity::new("Housing", 3).to_string(), "Housing 3");
    }
}
