// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The derived city view: filter, then stable sort, then bucket
//!
//! `view` is a pure function over its inputs: identical arguments yield
//! identical output, and the input collection is never mutated. Callers
//! recompute on every state change; `ViewCache` memoizes when that
//! matters.

use crate::filter::FilterSet;
use crate::group::{fixed_labels, label_for, Bucket};
use crate::sort::SortKey;
use funil_core::{City, Clock};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a view computation. An empty filter result is its own case so
/// the presentation layer renders an explicit empty state rather than an
/// empty group list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Empty,
    Flat(Vec<City>),
    Grouped(Vec<Bucket>),
}

impl View {
    /// Total number of cities in the view
    pub fn len(&self) -> usize {
        match self {
            View::Empty => 0,
            View::Flat(cities) => cities.len(),
            View::Grouped(buckets) => buckets.iter().map(|b| b.cities.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, View::Empty)
    }

    /// All cities in view order, ignoring bucket boundaries
    pub fn cities(&self) -> Vec<&City> {
        match self {
            View::Empty => Vec::new(),
            View::Flat(cities) => cities.iter().collect(),
            View::Grouped(buckets) => buckets.iter().flat_map(|b| b.cities.iter()).collect(),
        }
    }
}

/// Compute the ordered, optionally bucketed view of the collection.
pub fn view(cities: &[City], filters: &FilterSet, sort: SortKey, clock: &impl Clock) -> View {
    let mut selected: Vec<City> = cities
        .iter()
        .filter(|city| filters.matches(city))
        .cloned()
        .collect();

    if selected.is_empty() {
        debug!(sort = %sort, "view: no city passed the filter");
        return View::Empty;
    }

    // Stable sort: equal keys keep input order
    selected.sort_by(|a, b| sort.compare(a, b));
    debug!(
        total = cities.len(),
        shown = selected.len(),
        sort = %sort,
        "view recomputed"
    );

    if !sort.groups() {
        return View::Flat(selected);
    }

    let today = clock.now().date_naive();
    View::Grouped(bucketize(selected, sort, today))
}

/// Split an already-sorted list into labeled buckets.
///
/// Keys with a closed label domain (priority, temperature) emit their full
/// fixed bucket set, empty buckets included. The open-domain keys rely on
/// labels being monotone in the sort order: runs of equal labels are
/// contiguous, and only buckets with members materialize.
fn bucketize(sorted: Vec<City>, sort: SortKey, today: chrono::NaiveDate) -> Vec<Bucket> {
    if let Some(labels) = fixed_labels(sort) {
        let mut buckets: Vec<Bucket> = labels
            .into_iter()
            .map(|label| Bucket {
                label: label.to_string(),
                cities: Vec::new(),
            })
            .collect();
        for city in sorted {
            let Some(label) = label_for(&city, sort, today) else {
                continue;
            };
            if let Some(bucket) = buckets.iter_mut().find(|b| b.label == label) {
                bucket.cities.push(city);
            }
        }
        return buckets;
    }

    let mut buckets: Vec<Bucket> = Vec::new();
    for city in sorted {
        let Some(label) = label_for(&city, sort, today) else {
            continue;
        };
        match buckets.last_mut() {
            Some(bucket) if bucket.label == label => bucket.cities.push(city),
            _ => buckets.push(Bucket {
                label,
                cities: vec![city],
            }),
        }
    }
    buckets
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
