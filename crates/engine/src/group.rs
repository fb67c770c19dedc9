// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bucket labels for grouped views
//!
//! Labels are the product's pt-BR strings. Every labeling function is
//! total: unset values land in a deterministic last bucket.

use crate::sort::SortKey;
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use funil_core::{City, Temperature};
use serde::{Deserialize, Serialize};

/// One labeled group of cities in a grouped view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub cities: Vec<City>,
}

pub const PRIORITIZED: &str = "Priorizadas";
pub const NOT_PRIORITIZED: &str = "Não priorizadas";
pub const NO_TEMPERATURE: &str = "Sem temperatura";
pub const OVERDUE: &str = "Atrasada";
pub const TODAY: &str = "Hoje";
pub const TOMORROW: &str = "Amanhã";
pub const LATER: &str = "Mais tarde";
pub const UNSCHEDULED: &str = "Sem visita agendada";

/// The complete bucket label set for keys that group over a closed value
/// domain. These keys emit every bucket even when empty; keys grouping
/// over open domains (status, next visit) only emit buckets with members.
pub fn fixed_labels(key: SortKey) -> Option<Vec<&'static str>> {
    match key {
        SortKey::Priority => Some(vec![PRIORITIZED, NOT_PRIORITIZED]),
        SortKey::Temperature => Some(vec![
            Temperature::Hot.label(),
            Temperature::Warm.label(),
            Temperature::Cold.label(),
            NO_TEMPERATURE,
        ]),
        _ => None,
    }
}

/// Bucket label for a city under a grouping key; `None` for flat keys.
pub fn label_for(city: &City, key: SortKey, today: NaiveDate) -> Option<String> {
    match key {
        SortKey::Priority => Some(priority_label(city.is_priority).to_string()),
        SortKey::Status => Some(city.current_status.name().to_string()),
        SortKey::Temperature => Some(temperature_label(city.temperature).to_string()),
        SortKey::NextVisit => Some(next_visit_label(city.next_visit, today)),
        SortKey::Name | SortKey::LastVisit => None,
    }
}

pub fn priority_label(is_priority: bool) -> &'static str {
    if is_priority {
        PRIORITIZED
    } else {
        NOT_PRIORITIZED
    }
}

pub fn temperature_label(temperature: Option<Temperature>) -> &'static str {
    match temperature {
        Some(t) => t.label(),
        None => NO_TEMPERATURE,
    }
}

/// Calendar relation of a scheduled visit to `today`: overdue, today,
/// tomorrow, a weekday name for dates within the coming week, or "later".
pub fn next_visit_label(next_visit: Option<DateTime<Utc>>, today: NaiveDate) -> String {
    let Some(next) = next_visit else {
        return UNSCHEDULED.to_string();
    };
    let date = next.date_naive();
    match (date - today).num_days() {
        days if days < 0 => OVERDUE.to_string(),
        0 => TODAY.to_string(),
        1 => TOMORROW.to_string(),
        days if days < 7 => weekday_name(date.weekday()).to_string(),
        _ => LATER.to_string(),
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
