// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seed data and fixture loading
//!
//! The built-in collection is a deterministic, hand-written subset of the
//! product's demo portfolio; `--file` replaces it with arbitrary JSON.

use anyhow::{Context, Result};
use funil_core::{City, Portfolio};
use std::path::Path;

const SEED_JSON: &str = include_str!("seed.json");

pub fn load(path: Option<&Path>) -> Result<Portfolio> {
    let cities: Vec<City> = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading city file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing city file {}", path.display()))?
        }
        None => serde_json::from_str(SEED_JSON).context("parsing built-in seed data")?,
    };
    tracing::debug!(count = cities.len(), "loaded city collection");
    Ok(Portfolio::new(cities))
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
