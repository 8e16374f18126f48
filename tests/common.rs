// ABOUTME: Shared test utilities for fittrack integration tests
// ABOUTME: Provides day keys, workout builders, and engines over an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fittrack`

use fittrack::dates::DayKey;
use fittrack::engine::FitnessEngine;
use fittrack::models::{ExerciseSet, ProgressPoint, WorkoutRecord};
use fittrack::storage::InMemoryStore;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference day used across tests
pub fn base_day() -> DayKey {
    DayKey::from_ymd(2025, 3, 3).expect("valid date")
}

/// `base_day()` shifted by `offset` days
pub fn day(offset: i64) -> DayKey {
    base_day().offset_days(offset).expect("date in range")
}

/// Completed workout with a given RPE on `day(offset)`
pub fn workout(offset: i64, intensity: f64) -> WorkoutRecord {
    WorkoutRecord::completed(day(offset), intensity)
}

/// Completed squat session with one set
pub fn squat_session(offset: i64, weight: f64, reps: u32) -> WorkoutRecord {
    workout(offset, 7.0).with_set(ExerciseSet::new("squat", weight, reps))
}

/// Weight entries following `start + slope * i` on consecutive days
pub fn weight_series(start: f64, slope_per_day: f64, days: i64, last_offset: i64) -> Vec<ProgressPoint> {
    (0..days)
        .map(|i| {
            let offset = last_offset - (days - 1) + i;
            let weight = slope_per_day.mul_add(i as f64, start);
            ProgressPoint::new(day(offset), weight)
        })
        .collect()
}

/// Engine over an empty unbounded in-memory store
pub fn memory_engine() -> FitnessEngine<InMemoryStore> {
    init_test_logging();
    FitnessEngine::with_defaults(InMemoryStore::new())
}
