// ABOUTME: Persistent trackers that own one store key each and expose typed views
// ABOUTME: Storage failures are logged and absorbed so a check cycle always completes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Trackers
//!
//! Each tracker loads its document once, keeps it in memory, and writes it
//! back after every change. A failed write (quota, I/O) keeps the in-memory
//! value and logs a warning.

/// Achievement unlocks, progress counters, and notifications
pub mod achievement_tracker;
/// Profile document
pub mod profile_store;
/// Body-weight log
pub mod progress_log;
/// Streak singleton
pub mod streak_tracker;
/// First use, premium visits, and completed goals
pub mod usage;
/// Workout log
pub mod workout_log;

pub use achievement_tracker::AchievementTracker;
pub use profile_store::ProfileStore;
pub use progress_log::ProgressLog;
pub use streak_tracker::StreakTracker;
pub use usage::UsageTracker;
pub use workout_log::WorkoutLog;

use crate::storage::{save_json, KeyValueStore};
use serde::Serialize;
use tracing::warn;

/// Write `value` under `key`, logging instead of failing; returns whether it was stored
pub(crate) fn persist<S, T>(store: &mut S, key: &str, value: &T) -> bool
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    match save_json(store, key, value) {
        Ok(()) => true,
        Err(e) => {
            warn!(
                key,
                error = %e,
                quota_exceeded = e.is_quota_exceeded(),
                "Failed to persist tracker state; keeping in-memory value"
            );
            false
        }
    }
}
