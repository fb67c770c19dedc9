// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! City filter predicates
//!
//! A city passes when every active predicate matches. Empty search text,
//! empty stage/temperature sets, and an unset priority flag each mean
//! "no restriction".

use funil_core::{City, Stage, Temperature};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The user-selected predicates for the city list
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSet {
    /// Substring match against name or state; empty matches all
    pub search: String,
    /// Allowed stages; empty means no restriction
    pub stages: BTreeSet<Stage>,
    /// Tri-state priority filter: None means no restriction
    pub priority: Option<bool>,
    /// Allowed temperatures; empty means no restriction. An unclassified
    /// city never matches a non-empty set.
    pub temperatures: BTreeSet<Temperature>,
}

impl FilterSet {
    /// True when no predicate is active, so "empty result" stays
    /// distinguishable from "no filters applied".
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty()
            && self.stages.is_empty()
            && self.priority.is_none()
            && self.temperatures.is_empty()
    }

    /// Logical AND of all active predicates
    pub fn matches(&self, city: &City) -> bool {
        self.matches_search(city)
            && self.matches_stage(city)
            && self.matches_priority(city)
            && self.matches_temperature(city)
    }

    fn matches_search(&self, city: &City) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = normalize_lookup(&self.search);
        normalize_lookup(&city.name).contains(&needle)
            || normalize_lookup(&city.state).contains(&needle)
    }

    fn matches_stage(&self, city: &City) -> bool {
        self.stages.is_empty() || self.stages.contains(&city.current_status)
    }

    fn matches_priority(&self, city: &City) -> bool {
        self.priority.map_or(true, |wanted| city.is_priority == wanted)
    }

    fn matches_temperature(&self, city: &City) -> bool {
        if self.temperatures.is_empty() {
            return true;
        }
        city.temperature
            .is_some_and(|t| self.temperatures.contains(&t))
    }
}

/// Case- and accent-insensitive fold: NFD, combining marks stripped,
/// Unicode lowercase. Shared by search matching and name collation.
pub fn normalize_lookup(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
