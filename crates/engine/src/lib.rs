// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! funil-engine: the filter/sort/group view engine
//!
//! A pure function from (city collection, filter set, sort key, clock) to
//! an ordered, optionally bucketed view, plus a version-keyed cache for
//! callers that recompute on every state change.

pub mod cache;
pub mod filter;
pub mod group;
pub mod sort;
pub mod view;

// Re-exports
pub use cache::ViewCache;
pub use filter::FilterSet;
pub use group::Bucket;
pub use sort::{ParseSortKeyError, SortKey};
pub use view::{view, View};
