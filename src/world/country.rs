//! Countries and the world snapshot they form.

use std::collections::BTreeMap;

use crate::search::{ContentHash, ContentHasher, SearchState};

use super::resource::ResourceQuantity;

/// One country and its resource holdings.
///
/// Resources live in a `BTreeMap` so that every iteration — including the
/// canonical serialization feeding the content hash — runs in sorted key
/// order regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    pub name: String,
    pub resources: BTreeMap<String, i64>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: BTreeMap::new(),
        }
    }

    pub fn with_resource(mut self, name: impl Into<String>, quantity: i64) -> Self {
        self.resources.insert(name.into(), quantity);
        self
    }

    /// Current amount of a resource; zero when the country does not carry it.
    pub fn resource(&self, name: &str) -> i64 {
        self.resources.get(name).copied().unwrap_or(0)
    }

    /// Whether the country holds at least `quantity` of `name`.
    ///
    /// A resource the country does not carry fails the check instead of
    /// being an error: action generation is untrusted.
    pub fn has_resource_quantity(&self, name: &str, quantity: i64) -> bool {
        self.resource(name) >= quantity
    }

    /// Per-resource change from `start` to `end`, omitting zero deltas.
    pub fn diff_resource_quantities(start: &Country, end: &Country) -> Vec<ResourceQuantity> {
        end.resources
            .iter()
            .map(|(name, &final_quantity)| (name, final_quantity - start.resource(name)))
            .filter(|&(_, change)| change != 0)
            .map(|(name, change)| ResourceQuantity::new(name.clone(), change))
            .collect()
    }
}

/// The world: a mapping from country name to country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    countries: BTreeMap<String, Country>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.insert(country);
        self
    }

    pub fn insert(&mut self, country: Country) {
        self.countries.insert(country.name.clone(), country);
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.get(name)
    }

    pub(crate) fn country_mut(&mut self, name: &str) -> Option<&mut Country> {
        self.countries.get_mut(name)
    }

    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl FromIterator<Country> for WorldState {
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        let mut world = WorldState::new();
        for country in iter {
            world.insert(country);
        }
        world
    }
}

impl SearchState for WorldState {
    /// Canonical digest: countries in sorted name order, each followed by
    /// its resources in sorted name order.
    fn content_hash(&self) -> ContentHash {
        let mut hasher = ContentHasher::new();
        for (name, country) in &self.countries {
            hasher.write_str(name);
            for (resource, &quantity) in &country.resources {
                hasher.write_str(resource);
                hasher.write_i64(quantity);
            }
        }
        hasher.finish()
    }
}
