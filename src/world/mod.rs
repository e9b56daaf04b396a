//! The resource-trading domain.
//!
//! States are world snapshots (country name → resource holdings), identified
//! by a sorted-key content hash. Actions are resource transfers between two
//! countries or production transforms inside one country, built from
//! resource and transform templates.

mod action;
mod country;
mod resource;

pub use action::{ActionKind, TradeAction, TransferDirection};
pub use country::{Country, WorldState};
pub use resource::{
    ResourceQuantity, ResourceTemplate, TransformTemplate, NONTRANSFERABLE_RESOURCES,
};
