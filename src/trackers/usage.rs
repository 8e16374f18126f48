// ABOUTME: Usage ledger tracker for first use, premium visits, and completed goals
// ABOUTME: Feeds the goal and ethics achievement rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::storage_keys;
use crate::storage::{load_or_default, KeyValueStore};
use fittrack_core::dates::DayKey;
use fittrack_core::models::UsageLedger;
use tracing::{debug, info};

/// Persisted usage facts
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    ledger: UsageLedger,
}

impl UsageTracker {
    /// Load the ledger; a malformed document yields an empty ledger
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            ledger: load_or_default(store, storage_keys::USAGE),
        }
    }

    /// Current ledger
    #[must_use]
    pub const fn ledger(&self) -> &UsageLedger {
        &self.ledger
    }

    /// Record first use on `today` if not yet recorded
    pub fn touch<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, today: DayKey) {
        if self.ledger.touch(today) {
            debug!(today = %today, "First use recorded");
            persist(store, storage_keys::USAGE, &self.ledger);
        }
    }

    /// Record that the premium section was opened
    pub fn visit_premium<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        if !self.ledger.premium_visited {
            self.ledger.premium_visited = true;
            info!("Premium section visited");
            persist(store, storage_keys::USAGE, &self.ledger);
        }
    }

    /// Mark a goal complete; returns `false` if it was already complete
    pub fn complete_goal<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        goal_id: &str,
        day: DayKey,
    ) -> bool {
        if !self.ledger.complete_goal(goal_id, day) {
            debug!(goal_id, "Goal already completed");
            return false;
        }
        info!(goal_id, day = %day, "Goal completed");
        persist(store, storage_keys::USAGE, &self.ledger);
        true
    }

    /// Number of completed goals
    #[must_use]
    pub fn completed_goals(&self) -> u32 {
        u32::try_from(self.ledger.completed_goals.len()).unwrap_or(u32::MAX)
    }
}
