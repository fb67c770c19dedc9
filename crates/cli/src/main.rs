// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! funil - sales funnel for municipal accounts
//!
//! Stateless by design: each invocation loads a city collection (built-in
//! seed or `--file`), runs one view or one mutation, and prints the
//! result. Mutations emit the updated collection so invocations compose
//! through files.

mod commands;
mod fixture;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{city, list};
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "funil",
    version,
    about = "Sales funnel dashboard for municipal accounts"
)]
struct Cli {
    /// Read the city collection from this JSON file instead of the seed data
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cities with filtering, sorting, and grouping
    List(list::ListArgs),
    /// Show one city: details, pipeline progress, and timeline
    Show {
        /// City ID; defaults to the selected city
        city_id: Option<String>,
    },
    /// Move a city to a funnel stage
    SetStage { city_id: String, stage: String },
    /// Set the priority flag
    SetPriority {
        city_id: String,
        /// on or off
        #[arg(value_parser = ["on", "off"])]
        value: String,
    },
    /// Classify commercial heat (hot, warm, cold)
    SetTemperature { city_id: String, temperature: String },
    /// Append a note to the city timeline
    AddNote {
        city_id: String,
        text: String,
        #[arg(long, default_value = "Carlos Silva")]
        author: String,
    },
    /// Record a completed visit on the timeline
    AddVisit {
        city_id: String,
        text: String,
        #[arg(long, default_value = "Carlos Silva")]
        author: String,
    },
    /// Record a follow-up action request on the timeline
    AddCta {
        city_id: String,
        text: String,
        #[arg(long, default_value = "Carlos Silva")]
        author: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("FUNIL_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let portfolio = fixture::load(cli.file.as_deref())?;

    match cli.command {
        Commands::List(args) => list::handle(args, &portfolio, cli.format),
        Commands::Show { city_id } => city::show(&portfolio, city_id.as_deref(), cli.format),
        Commands::SetStage { city_id, stage } => {
            city::set_stage(portfolio, &city_id, &stage, cli.format)
        }
        Commands::SetPriority { city_id, value } => {
            city::set_priority(portfolio, &city_id, value == "on", cli.format)
        }
        Commands::SetTemperature {
            city_id,
            temperature,
        } => city::set_temperature(portfolio, &city_id, &temperature, cli.format),
        Commands::AddNote {
            city_id,
            text,
            author,
        } => city::add_interaction(
            portfolio,
            &city_id,
            funil_core::InteractionKind::Note,
            text,
            author,
            cli.format,
        ),
        Commands::AddVisit {
            city_id,
            text,
            author,
        } => city::add_interaction(
            portfolio,
            &city_id,
            funil_core::InteractionKind::Visit,
            text,
            author,
            cli.format,
        ),
        Commands::AddCta {
            city_id,
            text,
            author,
        } => city::add_interaction(
            portfolio,
            &city_id,
            funil_core::InteractionKind::Cta,
            text,
            author,
            cli.format,
        ),
    }
}
