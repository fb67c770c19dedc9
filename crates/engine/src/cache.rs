// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-keyed memoization of the computed view
//!
//! The cache key hashes everything the view depends on: the portfolio's
//! collection version, the filter set, the sort key, and the clock's
//! date (next-visit buckets shift at midnight). Any mutation bumps the
//! version, so stale views cannot be served.

use crate::filter::FilterSet;
use crate::sort::SortKey;
use crate::view::{view, View};
use chrono::NaiveDate;
use funil_core::{Clock, Portfolio};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Memoizes the most recent view computation
#[derive(Debug, Default)]
pub struct ViewCache {
    key: Option<u64>,
    cached: Option<View>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached view when nothing it depends on has changed,
    /// recompute otherwise. Semantically a pass-through: the result is
    /// always identical to a fresh `view` call.
    pub fn get(
        &mut self,
        portfolio: &Portfolio,
        filters: &FilterSet,
        sort: SortKey,
        clock: &impl Clock,
    ) -> &View {
        let key = cache_key(portfolio.version(), filters, sort, clock.now().date_naive());
        if self.key != Some(key) {
            self.key = Some(key);
            self.cached = None;
        }
        self.cached
            .get_or_insert_with(|| view(portfolio.cities(), filters, sort, clock))
    }
}

fn cache_key(version: u64, filters: &FilterSet, sort: SortKey, today: NaiveDate) -> u64 {
    let mut hasher = DefaultHasher::new();
    version.hash(&mut hasher);
    filters.hash(&mut hasher);
    sort.hash(&mut hasher);
    today.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
