// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! funil-core: domain model for the municipal-accounts sales funnel
//!
//! This crate provides:
//! - The fixed six-stage funnel and per-stage progress derivation
//! - City and interaction records
//! - The portfolio state object and its command set
//! - Clock and ID-generation abstractions for deterministic tests

pub mod city;
pub mod clock;
pub mod command;
pub mod id;
pub mod portfolio;
pub mod stage;

// Re-exports
pub use city::{
    City, CityId, Interaction, InteractionId, InteractionKind, ParseTemperatureError, Temperature,
};
pub use clock::{Clock, FakeClock, SystemClock};
pub use command::Command;
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use portfolio::Portfolio;
pub use stage::{pipeline_progress, ParseStageError, Stage, StageStatus};
