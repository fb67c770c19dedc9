// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User actions on the portfolio
//!
//! Every mutation the presentation layer can request is an explicit,
//! serializable command. The portfolio applies commands; nothing else
//! writes to the city collection.

use crate::city::{CityId, Interaction, Temperature};
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

/// Commands that mutate the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move a city to any funnel stage. Backward jumps are allowed; the
    /// pipeline UI lets any stage node be clicked directly.
    SetStage { city_id: CityId, stage: Stage },

    /// Set the priority flag to an explicit value
    SetPriority { city_id: CityId, value: bool },

    /// Classify commercial heat. The UI only ever sets a temperature,
    /// never clears one.
    SetTemperature {
        city_id: CityId,
        temperature: Temperature,
    },

    /// Append one entry to a city's timeline
    AddInteraction {
        city_id: CityId,
        interaction: Interaction,
    },

    /// Move the selected-city pointer
    Select { city_id: CityId },
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
