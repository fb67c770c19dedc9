// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Portfolio state: the single owner of the city collection
//!
//! All mutation goes through [`Portfolio::apply`]; every command touches at
//! most one record. A command naming an unknown city is a silent no-op, so
//! the core degrades gracefully even if the presentation layer's guards
//! fail. The `version` counter advances on every effective collection
//! mutation and keys the view cache.

use crate::city::{City, CityId};
use crate::command::Command;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The authoritative city collection plus the selected-city pointer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    cities: Vec<City>,
    selected: Option<CityId>,
    #[serde(default)]
    version: u64,
}

impl Portfolio {
    /// Build a portfolio from a loaded collection. The first city starts
    /// out selected, as on a dashboard load.
    pub fn new(cities: Vec<City>) -> Self {
        let selected = cities.first().map(|c| c.id.clone());
        Portfolio {
            cities,
            selected,
            version: 0,
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Collection version. Bumped once per effective mutation; selection
    /// moves do not count, since no view depends on the pointer.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: &CityId) -> Option<&City> {
        self.cities.iter().find(|c| &c.id == id)
    }

    pub fn selected(&self) -> Option<&City> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Apply one command. Returns whether anything changed; unknown city
    /// IDs leave the portfolio untouched.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::SetStage { city_id, stage } => self.update(&city_id, |city| {
                city.current_status = stage;
            }),
            Command::SetPriority { city_id, value } => self.update(&city_id, |city| {
                city.is_priority = value;
            }),
            Command::SetTemperature {
                city_id,
                temperature,
            } => self.update(&city_id, |city| {
                city.temperature = Some(temperature);
            }),
            Command::AddInteraction {
                city_id,
                interaction,
            } => self.update(&city_id, |city| {
                city.interactions.push(interaction);
            }),
            Command::Select { city_id } => {
                if self.cities.iter().any(|c| c.id == city_id) {
                    self.selected = Some(city_id);
                    true
                } else {
                    debug!(city = %city_id, "select for unknown city ignored");
                    false
                }
            }
        }
    }

    fn update(&mut self, id: &CityId, mutate: impl FnOnce(&mut City)) -> bool {
        match self.cities.iter_mut().find(|c| &c.id == id) {
            Some(city) => {
                mutate(city);
                self.version += 1;
                debug!(city = %id, version = self.version, "portfolio updated");
                true
            }
            None => {
                debug!(city = %id, "command for unknown city ignored");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "portfolio_tests.rs"]
mod tests;
