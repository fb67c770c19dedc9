// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sort keys and comparators for the city list
//!
//! Each key defines the only ordering rule applied; ties are left to the
//! caller's stable sort, which preserves input order.

use crate::filter::normalize_lookup;
use funil_core::{City, Temperature};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The available sort keys. `Name` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Temperature,
    Priority,
    Status,
    LastVisit,
    NextVisit,
}

impl SortKey {
    /// Whether views under this key are bucketed
    pub fn groups(self) -> bool {
        matches!(
            self,
            SortKey::Priority | SortKey::Status | SortKey::Temperature | SortKey::NextVisit
        )
    }

    /// Compare two cities under this key
    pub fn compare(self, a: &City, b: &City) -> Ordering {
        match self {
            // Accent-folded lowercase collation, the closest portable
            // approximation of the pt-BR locale compare
            SortKey::Name => normalize_lookup(&a.name).cmp(&normalize_lookup(&b.name)),

            // Priority cities first; deliberately no secondary key
            SortKey::Priority => b.is_priority.cmp(&a.is_priority),

            // hot < warm < cold < unset
            SortKey::Temperature => {
                temperature_rank(a.temperature).cmp(&temperature_rank(b.temperature))
            }

            // Funnel order reversed: closed deals first
            SortKey::Status => a
                .current_status
                .sort_rank()
                .cmp(&b.current_status.sort_rank()),

            // Most recent first; never-visited cities last
            SortKey::LastVisit => match (a.last_visit, b.last_visit) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },

            // Soonest first; unscheduled cities last
            SortKey::NextVisit => match (a.next_visit, b.next_visit) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Name => "name",
            SortKey::Temperature => "temperature",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
            SortKey::LastVisit => "last-visit",
            SortKey::NextVisit => "next-visit",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "temperature" => Ok(SortKey::Temperature),
            "priority" => Ok(SortKey::Priority),
            "status" => Ok(SortKey::Status),
            "last-visit" | "last_visit" => Ok(SortKey::LastVisit),
            "next-visit" | "next_visit" => Ok(SortKey::NextVisit),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

/// Sort rank for an optional temperature: hot < warm < cold < unset
pub(crate) fn temperature_rank(temperature: Option<Temperature>) -> u8 {
    match temperature {
        Some(Temperature::Hot) => 0,
        Some(Temperature::Warm) => 1,
        Some(Temperature::Cold) => 2,
        None => 3,
    }
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
