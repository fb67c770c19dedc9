// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use anyhow::Result;
use clap::ValueEnum;
use funil_core::{City, StageStatus};
use funil_engine::View;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render a computed view. The empty case gets an explicit message, never
/// a silent empty list.
pub fn print_view(view: &View, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Text => match view {
            View::Empty => println!("Nenhuma cidade encontrada."),
            View::Flat(cities) => {
                for city in cities {
                    println!("{}", city_line(city));
                }
            }
            View::Grouped(buckets) => {
                for bucket in buckets {
                    println!("{} ({})", bucket.label, bucket.cities.len());
                    for city in &bucket.cities {
                        println!("  {}", city_line(city));
                    }
                }
            }
        },
    }
    Ok(())
}

/// One city with pipeline progress and timeline
pub fn print_city(city: &City, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(city)?),
        OutputFormat::Text => {
            println!("{}, {}", city.name, city.state);
            println!("ID: {}", city.id);
            println!("Population: {}", city.population);
            println!("Pipeline: {}", pipeline_line(city));
            if city.is_priority {
                println!("Priority: yes");
            }
            if let Some(temperature) = city.temperature {
                println!("Temperature: {}", temperature.label());
            }
            if let Some(last) = city.last_visit {
                println!("Last visit: {}", last.format("%Y-%m-%d %H:%M"));
            }
            if let Some(next) = city.next_visit {
                println!("Next visit: {}", next.format("%Y-%m-%d %H:%M"));
            }
            if let Some(action) = &city.next_action {
                println!("Next action: {}", action);
            }
            if !city.interactions.is_empty() {
                println!("Timeline:");
                for interaction in &city.interactions {
                    println!(
                        "  {}  {:<5}  {:<14}  {}",
                        interaction.created_at.format("%Y-%m-%d %H:%M"),
                        kind_tag(interaction),
                        interaction.author,
                        interaction.content
                    );
                }
            }
        }
    }
    Ok(())
}

/// The full collection as JSON, for file-composed mutations
pub fn print_cities(cities: &[City]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(cities)?);
    Ok(())
}

fn city_line(city: &City) -> String {
    let mut line = format!(
        "{:<24} {:<2} {:>9}  {}",
        city.name, city.state, city.population, city.current_status
    );
    if city.is_priority {
        line.push_str("  ★");
    }
    if let Some(temperature) = city.temperature {
        line.push_str("  ");
        line.push_str(temperature.label());
    }
    line
}

fn pipeline_line(city: &City) -> String {
    city.progress()
        .iter()
        .map(|(stage, status)| {
            let marker = match status {
                StageStatus::Completed => '✓',
                StageStatus::Current => '●',
                StageStatus::Upcoming => '·',
            };
            format!("[{}] {}", marker, stage)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn kind_tag(interaction: &funil_core::Interaction) -> &'static str {
    use funil_core::InteractionKind;
    match interaction.kind {
        InteractionKind::Audio => "audio",
        InteractionKind::Note => "note",
        InteractionKind::Visit => "visit",
        InteractionKind::Cta => "cta",
        InteractionKind::Image => "image",
    }
}
