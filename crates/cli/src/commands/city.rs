// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-city commands: show, stage/flag mutations, timeline appends
//!
//! Mutations apply one command to the loaded portfolio and print the
//! outcome. Unknown city IDs are reported but never fail the process;
//! the core treats them as no-ops.

use crate::output::{self, OutputFormat};
use anyhow::Result;
use funil_core::{
    City, CityId, Clock, Command, IdGen, Interaction, InteractionId, InteractionKind, Portfolio,
    SystemClock, UuidIdGen,
};

pub fn show(portfolio: &Portfolio, city_id: Option<&str>, format: OutputFormat) -> Result<()> {
    let city = match city_id {
        Some(id) => portfolio.get(&CityId::from(id)),
        None => portfolio.selected(),
    };
    match city {
        Some(city) => output::print_city(city, format)?,
        None => println!("City not found: {}", city_id.unwrap_or("<none selected>")),
    }
    Ok(())
}

pub fn set_stage(
    portfolio: Portfolio,
    city_id: &str,
    stage: &str,
    format: OutputFormat,
) -> Result<()> {
    let stage = stage.parse()?;
    apply(
        portfolio,
        Command::SetStage {
            city_id: city_id.into(),
            stage,
        },
        city_id,
        format,
        |city| format!("{} → {}", city.name, city.current_status),
    )
}

pub fn set_priority(
    portfolio: Portfolio,
    city_id: &str,
    value: bool,
    format: OutputFormat,
) -> Result<()> {
    apply(
        portfolio,
        Command::SetPriority {
            city_id: city_id.into(),
            value,
        },
        city_id,
        format,
        |city| {
            if city.is_priority {
                format!("{}: prioridade ativada", city.name)
            } else {
                format!("{}: prioridade removida", city.name)
            }
        },
    )
}

pub fn set_temperature(
    portfolio: Portfolio,
    city_id: &str,
    temperature: &str,
    format: OutputFormat,
) -> Result<()> {
    let temperature: funil_core::Temperature = temperature.parse()?;
    apply(
        portfolio,
        Command::SetTemperature {
            city_id: city_id.into(),
            temperature,
        },
        city_id,
        format,
        move |city| format!("{}: {}", city.name, temperature.label()),
    )
}

pub fn add_interaction(
    portfolio: Portfolio,
    city_id: &str,
    kind: InteractionKind,
    text: String,
    author: String,
    format: OutputFormat,
) -> Result<()> {
    let interaction = Interaction {
        id: InteractionId::from(UuidIdGen.next()),
        kind,
        content: text,
        duration: None,
        created_at: SystemClock.now(),
        author,
    };
    apply(
        portfolio,
        Command::AddInteraction {
            city_id: city_id.into(),
            interaction,
        },
        city_id,
        format,
        |city| format!("{}: {} interações", city.name, city.interactions.len()),
    )
}

fn apply(
    mut portfolio: Portfolio,
    command: Command,
    city_id: &str,
    format: OutputFormat,
    summary: impl FnOnce(&City) -> String,
) -> Result<()> {
    let changed = portfolio.apply(command);
    match format {
        OutputFormat::Text => {
            if changed {
                match portfolio.get(&CityId::from(city_id)) {
                    Some(city) => println!("{}", summary(city)),
                    None => println!("City not found: {} (no change)", city_id),
                }
            } else {
                println!("City not found: {} (no change)", city_id);
            }
        }
        // JSON mode always prints the (possibly unchanged) collection so
        // invocations compose through files
        OutputFormat::Json => output::print_cities(portfolio.cities())?,
    }
    Ok(())
}
