// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List command: the filtered, sorted, grouped city view

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use funil_core::{Portfolio, SystemClock};
use funil_engine::{view, FilterSet, SortKey};

#[derive(Args)]
pub struct ListArgs {
    /// Substring match against name or state (case/accent-insensitive)
    #[arg(long, default_value = "")]
    search: String,

    /// Restrict to these stages (repeatable)
    #[arg(long = "status")]
    statuses: Vec<String>,

    /// true: only priority cities; false: only non-priority
    #[arg(long)]
    priority: Option<bool>,

    /// Restrict to these temperatures (repeatable)
    #[arg(long = "temperature")]
    temperatures: Vec<String>,

    /// Sort key: name, temperature, priority, status, last-visit, next-visit
    #[arg(long, default_value = "name")]
    sort: SortKey,
}

pub fn handle(args: ListArgs, portfolio: &Portfolio, format: OutputFormat) -> Result<()> {
    let mut filters = FilterSet {
        search: args.search,
        ..Default::default()
    };
    filters.priority = args.priority;
    for status in &args.statuses {
        filters.stages.insert(status.parse()?);
    }
    for temperature in &args.temperatures {
        filters.temperatures.insert(temperature.parse()?);
    }

    let result = view(portfolio.cities(), &filters, args.sort, &SystemClock);
    output::print_view(&result, format)?;
    Ok(())
}
