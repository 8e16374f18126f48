// ABOUTME: Persisted streak singleton advanced once per check cycle
// ABOUTME: Malformed stored state resets to an empty streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::storage_keys;
use crate::storage::{load_or_default, KeyValueStore};
use fittrack_core::dates::DayKey;
use fittrack_core::models::StreakState;
use fittrack_intelligence::streak::StreakCounter;

/// Stored streak state
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakTracker {
    state: StreakState,
}

impl StreakTracker {
    /// Load the state; a malformed document yields the empty streak
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            state: load_or_default(store, storage_keys::STREAK),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> StreakState {
        self.state
    }

    /// Advance for `today` and persist when the state changed
    pub fn check<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        today: DayKey,
        has_workout_today: bool,
    ) -> StreakState {
        let next = StreakCounter::advance(today, has_workout_today, &self.state);
        if next != self.state {
            self.state = next;
            persist(store, storage_keys::STREAK, &self.state);
        }
        self.state
    }
}
