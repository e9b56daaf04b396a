//! Trading actions: resource transfers and transforms.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::search::Action;

use super::country::WorldState;
use super::resource::{ResourceQuantity, TransformTemplate};

/// Which side of a transfer the viewpoint country is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    Send,
    Receive,
}

impl TransferDirection {
    /// The country that gives up the resources.
    pub fn sending_country<'a>(self, self_country: &'a str, other_country: &'a str) -> &'a str {
        match self {
            TransferDirection::Send => self_country,
            TransferDirection::Receive => other_country,
        }
    }

    /// The country that obtains the resources.
    pub fn receiving_country<'a>(self, self_country: &'a str, other_country: &'a str) -> &'a str {
        match self {
            TransferDirection::Send => other_country,
            TransferDirection::Receive => self_country,
        }
    }
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransferDirection::Send => "Send",
            TransferDirection::Receive => "Receive",
        })
    }
}

impl FromStr for TransferDirection {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Send" | "SEND" => Ok(TransferDirection::Send),
            "Receive" | "RECEIVE" => Ok(TransferDirection::Receive),
            other => Err(SearchError::UnrecognizedDirection(other.to_string())),
        }
    }
}

/// Action classification used by report rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Transfer,
    Transform,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Transfer => "TRANSFER",
            ActionKind::Transform => "TRANSFORM",
        })
    }
}

/// A trading-domain action over a [`WorldState`].
///
/// Preconditions, transition, cost and reporting metadata are all decided
/// by the variant; there is no open-ended action hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeAction {
    /// Move resource quantities from `sender` to `receiver`.
    Transfer {
        sender: String,
        receiver: String,
        direction: TransferDirection,
        resources: Vec<ResourceQuantity>,
        cost: f64,
    },
    /// Run a production recipe inside `target`.
    Transform {
        target: String,
        template: TransformTemplate,
        cost: f64,
    },
}

impl TradeAction {
    /// Builds a transfer between the viewpoint country and another, with the
    /// sender/receiver decided by `direction`.
    pub fn transfer(
        resources: Vec<ResourceQuantity>,
        direction: TransferDirection,
        self_country: &str,
        other_country: &str,
    ) -> Self {
        TradeAction::Transfer {
            sender: direction.sending_country(self_country, other_country).to_string(),
            receiver: direction
                .receiving_country(self_country, other_country)
                .to_string(),
            direction,
            resources,
            cost: 0.0,
        }
    }

    /// One transform per multiplier `1..=quantity_max`, each with the
    /// template's quantities pre-multiplied.
    pub fn transforms_from_template(
        template: &TransformTemplate,
        target_country: &str,
        quantity_max: i64,
    ) -> Vec<Self> {
        (1..=quantity_max)
            .map(|multiplier| TradeAction::Transform {
                target: target_country.to_string(),
                template: template.scaled(multiplier),
                cost: 0.0,
            })
            .collect()
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            TradeAction::Transfer { .. } => ActionKind::Transfer,
            TradeAction::Transform { .. } => ActionKind::Transform,
        }
    }
}

fn viewpoint_name<'a>(country: &'a str, viewpoint: &str) -> &'a str {
    if country == viewpoint {
        "self"
    } else {
        country
    }
}

fn quantities(resources: &[ResourceQuantity]) -> String {
    resources
        .iter()
        .map(|rq| format!("({rq})"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Action<WorldState> for TradeAction {
    fn preconditions_hold(&self, state: &WorldState) -> bool {
        match self {
            TradeAction::Transfer {
                sender, resources, ..
            } => state.country(sender).is_some_and(|country| {
                resources
                    .iter()
                    .all(|rq| country.has_resource_quantity(&rq.name, rq.quantity))
            }),
            TradeAction::Transform {
                target, template, ..
            } => state.country(target).is_some_and(|country| {
                template
                    .inputs
                    .iter()
                    .all(|rq| country.has_resource_quantity(&rq.name, rq.quantity))
            }),
        }
    }

    fn apply(&self, state: &WorldState) -> Option<WorldState> {
        if !self.preconditions_hold(state) {
            return None;
        }
        let mut next = state.clone();
        match self {
            TradeAction::Transfer {
                sender,
                receiver,
                resources,
                ..
            } => {
                for rq in resources {
                    let from = next.country_mut(sender)?;
                    *from.resources.entry(rq.name.clone()).or_insert(0) -= rq.quantity;
                    let to = next.country_mut(receiver)?;
                    *to.resources.entry(rq.name.clone()).or_insert(0) += rq.quantity;
                }
            }
            TradeAction::Transform {
                target, template, ..
            } => {
                let country = next.country_mut(target)?;
                for input in &template.inputs {
                    *country.resources.entry(input.name.clone()).or_insert(0) -= input.quantity;
                }
                for output in &template.outputs {
                    *country.resources.entry(output.name.clone()).or_insert(0) += output.quantity;
                }
            }
        }
        Some(next)
    }

    fn cost(&self) -> f64 {
        match self {
            TradeAction::Transfer { cost, .. } | TradeAction::Transform { cost, .. } => *cost,
        }
    }

    fn impacted_entities(&self) -> Vec<String> {
        match self {
            TradeAction::Transfer {
                sender, receiver, ..
            } => vec![sender.clone(), receiver.clone()],
            TradeAction::Transform { target, .. } => vec![target.clone()],
        }
    }

    fn describe(&self, viewpoint: &str) -> String {
        match self {
            TradeAction::Transfer {
                sender,
                receiver,
                resources,
                ..
            } => format!(
                "(TRANSFER {} {} ({}))",
                viewpoint_name(sender, viewpoint),
                viewpoint_name(receiver, viewpoint),
                quantities(resources)
            ),
            TradeAction::Transform {
                target, template, ..
            } => format!(
                "(TRANSFORM {} {} (INPUTS {}) (OUTPUTS {}))",
                template.name,
                viewpoint_name(target, viewpoint),
                quantities(&template.inputs),
                quantities(&template.outputs)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::country::Country;

    fn world() -> WorldState {
        WorldState::new()
            .with_country(
                Country::new("Atlantis")
                    .with_resource("Timber", 100)
                    .with_resource("Metal", 20),
            )
            .with_country(Country::new("Carpania").with_resource("Timber", 10))
    }

    fn send_timber(quantity: i64) -> TradeAction {
        TradeAction::transfer(
            vec![ResourceQuantity::new("Timber", quantity)],
            TransferDirection::Send,
            "Atlantis",
            "Carpania",
        )
    }

    #[test]
    fn test_direction_decides_sender_and_receiver() {
        let send = send_timber(5);
        let TradeAction::Transfer { sender, receiver, .. } = &send else {
            panic!("expected transfer");
        };
        assert_eq!((sender.as_str(), receiver.as_str()), ("Atlantis", "Carpania"));

        let receive = TradeAction::transfer(
            vec![ResourceQuantity::new("Timber", 5)],
            TransferDirection::Receive,
            "Atlantis",
            "Carpania",
        );
        let TradeAction::Transfer { sender, receiver, .. } = &receive else {
            panic!("expected transfer");
        };
        assert_eq!((sender.as_str(), receiver.as_str()), ("Carpania", "Atlantis"));
    }

    #[test]
    fn test_transfer_moves_quantities() {
        let next = send_timber(30).apply(&world()).unwrap();
        assert_eq!(next.country("Atlantis").unwrap().resource("Timber"), 70);
        assert_eq!(next.country("Carpania").unwrap().resource("Timber"), 40);
        // Untouched resources survive.
        assert_eq!(next.country("Atlantis").unwrap().resource("Metal"), 20);
    }

    #[test]
    fn test_transfer_inapplicable_when_sender_short() {
        assert_eq!(send_timber(101).apply(&world()), None);
        assert!(send_timber(100).apply(&world()).is_some());
    }

    #[test]
    fn test_missing_resource_renders_inapplicable() {
        let action = TradeAction::transfer(
            vec![ResourceQuantity::new("Uranium", 1)],
            TransferDirection::Send,
            "Atlantis",
            "Carpania",
        );
        assert!(!action.preconditions_hold(&world()));
        assert_eq!(action.apply(&world()), None);
    }

    #[test]
    fn test_missing_country_renders_inapplicable() {
        let action = TradeAction::transfer(
            vec![ResourceQuantity::new("Timber", 1)],
            TransferDirection::Send,
            "Mu",
            "Carpania",
        );
        assert_eq!(action.apply(&world()), None);
    }

    #[test]
    fn test_transform_consumes_inputs_and_produces_outputs() {
        let template = TransformTemplate::new(
            "housing",
            vec![
                ResourceQuantity::new("Timber", 5),
                ResourceQuantity::new("Metal", 1),
            ],
            vec![ResourceQuantity::new("Housing", 1)],
        );
        let actions = TradeAction::transforms_from_template(&template, "Atlantis", 3);
        assert_eq!(actions.len(), 3);

        let next = actions[2].apply(&world()).unwrap();
        let atlantis = next.country("Atlantis").unwrap();
        assert_eq!(atlantis.resource("Timber"), 85);
        assert_eq!(atlantis.resource("Metal"), 17);
        assert_eq!(atlantis.resource("Housing"), 3);
    }

    #[test]
    fn test_transform_inapplicable_when_inputs_short() {
        let template = TransformTemplate::new(
            "alloys",
            vec![ResourceQuantity::new("Metal", 21)],
            vec![ResourceQuantity::new("Alloys", 1)],
        );
        let actions = TradeAction::transforms_from_template(&template, "Atlantis", 1);
        assert_eq!(actions[0].apply(&world()), None);
    }

    #[test]
    fn test_impacted_entities_by_variant() {
        assert_eq!(send_timber(1).impacted_entities(), vec!["Atlantis", "Carpania"]);
        let template = TransformTemplate::new("x", vec![], vec![]);
        let transform = &TradeAction::transforms_from_template(&template, "Atlantis", 1)[0];
        assert_eq!(transform.impacted_entities(), vec!["Atlantis"]);
    }

    #[test]
    fn test_describe_substitutes_self() {
        let action = send_timber(3);
        assert_eq!(
            action.describe("Atlantis"),
            "(TRANSFER self Carpania ((Timber 3)))"
        );
        assert_eq!(
            action.describe("Carpania"),
            "(TRANSFER Atlantis self ((Timber 3)))"
        );
    }

    #[test]
    fn test_describe_transform() {
        let template = TransformTemplate::new(
            "housing",
            vec![ResourceQuantity::new("Timber", 5)],
            vec![ResourceQuantity::new("Housing", 1)],
        );
        let action = &TradeAction::transforms_from_template(&template, "Atlantis", 1)[0];
        assert_eq!(
            action.describe("Atlantis"),
            "(TRANSFORM housing self (INPUTS (Timber 5)) (OUTPUTS (Housing 1)))"
        );
    }

    #[test]
    fn test_unrecognized_direction_is_fatal() {
        assert!("Send".parse::<TransferDirection>().is_ok());
        let err = "Sideways".parse::<TransferDirection>().unwrap_err();
        assert!(matches!(err, SearchError::UnrecognizedDirection(d) if d == "Sideways"));
    }
}
