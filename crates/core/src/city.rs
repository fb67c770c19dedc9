// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! City and interaction records
//!
//! Cities are identified by an opaque string ID and carry an append-only
//! interaction timeline. The JSON wire form is camelCase, matching the
//! product's fixture format.

use crate::stage::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a city account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityId(pub String);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CityId {
    fn from(s: String) -> Self {
        CityId(s)
    }
}

impl From<&str> for CityId {
    fn from(s: &str) -> Self {
        CityId(s.to_string())
    }
}

/// Unique identifier for a timeline interaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionId(pub String);

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InteractionId {
    fn from(s: String) -> Self {
        InteractionId(s)
    }
}

impl From<&str> for InteractionId {
    fn from(s: &str) -> Self {
        InteractionId(s.to_string())
    }
}

/// Commercial heat classification, orthogonal to the funnel stage.
/// Declaration order is the list-sort order (hot first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Warm,
    Cold,
}

impl Temperature {
    /// Product label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            Temperature::Hot => "Quente",
            Temperature::Warm => "Morna",
            Temperature::Cold => "Fria",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wire = match self {
            Temperature::Hot => "hot",
            Temperature::Warm => "warm",
            Temperature::Cold => "cold",
        };
        write!(f, "{}", wire)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown temperature: {0}")]
pub struct ParseTemperatureError(pub String);

impl FromStr for Temperature {
    type Err = ParseTemperatureError;

    // Accepts the wire names and the pt-BR labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" | "quente" => Ok(Temperature::Hot),
            "warm" | "morna" => Ok(Temperature::Warm),
            "cold" | "fria" => Ok(Temperature::Cold),
            _ => Err(ParseTemperatureError(s.to_string())),
        }
    }
}

/// The kind of a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Audio,
    Note,
    Visit,
    Cta,
    Image,
}

/// A timestamped timeline entry attached to a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: InteractionId,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    /// Text content, or a URL for audio/image entries
    pub content: String,
    /// Set by convention only on audio entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author: String,
}

/// A municipal account moving through the funnel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state: String,
    pub population: u64,
    pub current_status: Stage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_visit: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(default)]
    pub is_priority: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl City {
    /// Create a new account at the top of the funnel with an empty timeline.
    pub fn new(
        id: impl Into<CityId>,
        name: impl Into<String>,
        state: impl Into<String>,
        population: u64,
    ) -> Self {
        City {
            id: id.into(),
            name: name.into(),
            state: state.into(),
            population,
            current_status: Stage::Quero,
            last_visit: None,
            next_visit: None,
            next_action: None,
            is_priority: false,
            temperature: None,
            interactions: Vec::new(),
        }
    }

    pub fn with_status(self, stage: Stage) -> Self {
        Self {
            current_status: stage,
            ..self
        }
    }

    pub fn with_priority(self) -> Self {
        Self {
            is_priority: true,
            ..self
        }
    }

    pub fn with_temperature(self, temperature: Temperature) -> Self {
        Self {
            temperature: Some(temperature),
            ..self
        }
    }

    pub fn with_last_visit(self, at: DateTime<Utc>) -> Self {
        Self {
            last_visit: Some(at),
            ..self
        }
    }

    pub fn with_next_visit(self, at: DateTime<Utc>) -> Self {
        Self {
            next_visit: Some(at),
            ..self
        }
    }

    pub fn with_next_action(self, note: impl Into<String>) -> Self {
        Self {
            next_action: Some(note.into()),
            ..self
        }
    }

    /// Per-stage pipeline progress for this city.
    pub fn progress(&self) -> [(Stage, crate::stage::StageStatus); 6] {
        crate::stage::pipeline_progress(self.current_status)
    }
}

#[cfg(test)]
#[path = "city_tests.rs"]
mod tests;
