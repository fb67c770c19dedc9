// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Funnel stages and per-stage progress derivation
//!
//! A city account moves through six fixed stages. Declaration order is
//! funnel progress order: Quero first, Contrato last. The city list sorts
//! and groups in the *reverse* order (closed deals first), which is why
//! `sort_rank` exists separately from `funnel_index`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the six fixed funnel stages.
///
/// Stage names are the product's pt-BR labels and double as the wire form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Stage {
    Quero,
    Devo,
    Posso,
    Quantitativo,
    Prefeito,
    Contrato,
}

impl Stage {
    /// All stages in funnel progress order.
    pub const ALL: [Stage; 6] = [
        Stage::Quero,
        Stage::Devo,
        Stage::Posso,
        Stage::Quantitativo,
        Stage::Prefeito,
        Stage::Contrato,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Quero => "Quero",
            Stage::Devo => "Devo",
            Stage::Posso => "Posso",
            Stage::Quantitativo => "Quantitativo",
            Stage::Prefeito => "Prefeito",
            Stage::Contrato => "Contrato",
        }
    }

    /// Position in funnel progress order: Quero is 0, Contrato is 5.
    pub fn funnel_index(self) -> usize {
        self as usize
    }

    /// Rank in list-sort order: funnel order reversed, so Contrato is 0.
    pub fn sort_rank(self) -> usize {
        Self::ALL.len() - 1 - self.funnel_index()
    }

    /// Derive this stage's visual status for a city currently at `current`.
    pub fn status_against(self, current: Stage) -> StageStatus {
        StageStatus::of(self.funnel_index(), current.funnel_index())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quero" => Ok(Stage::Quero),
            "devo" => Ok(Stage::Devo),
            "posso" => Ok(Stage::Posso),
            "quantitativo" => Ok(Stage::Quantitativo),
            "prefeito" => Ok(Stage::Prefeito),
            "contrato" => Ok(Stage::Contrato),
            _ => Err(ParseStageError(s.to_string())),
        }
    }
}

/// Visual/logical status of a stage node relative to a city's current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Current,
    Upcoming,
}

impl StageStatus {
    /// Status of the stage at `index` given the current stage index.
    pub fn of(index: usize, current_index: usize) -> StageStatus {
        match index.cmp(&current_index) {
            Ordering::Less => StageStatus::Completed,
            Ordering::Equal => StageStatus::Current,
            Ordering::Greater => StageStatus::Upcoming,
        }
    }
}

/// The full pipeline view for a city at `current`: every stage paired with
/// its derived status, in funnel progress order.
pub fn pipeline_progress(current: Stage) -> [(Stage, StageStatus); 6] {
    let mut out = [(Stage::Quero, StageStatus::Upcoming); 6];
    for (i, stage) in Stage::ALL.into_iter().enumerate() {
        out[i] = (stage, stage.status_against(current));
    }
    out
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
