// ABOUTME: Re-exports command modules for fittrack-cli
// ABOUTME: Provides status, logging, profile, usage, forecast, and achievement commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod achievements;
pub mod forecast;
pub mod log;
pub mod profile;
pub mod status;
pub mod usage;

use chrono::Local;
use fittrack::dates::{local_date_key, DayKey};

/// Today's calendar day in the local timezone
pub fn today() -> DayKey {
    local_date_key(&Local::now())
}
