// ABOUTME: Achievement unlock records, progress counters, and pending notifications
// ABOUTME: Unlocks are stamped once and only removed by an explicit reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::storage_keys;
use crate::storage::{load_or_default, KeyValueStore};
use chrono::{DateTime, Utc};
use fittrack_core::models::{
    AchievementDefinition, AchievementProgress, AchievementUnlocks, UnlockRecord,
};
use fittrack_intelligence::achievements::{AchievementCatalog, AchievementRules, DerivedState};
use tracing::{debug, info, warn};

/// Unlock and progress bookkeeping over a catalog
#[derive(Debug, Clone)]
pub struct AchievementTracker {
    catalog: AchievementCatalog,
    unlocks: AchievementUnlocks,
    progress: AchievementProgress,
}

impl AchievementTracker {
    /// Load unlocks and progress; malformed documents yield empty maps
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, catalog: AchievementCatalog) -> Self {
        Self {
            catalog,
            unlocks: load_or_default(store, storage_keys::ACHIEVEMENT_UNLOCKS),
            progress: load_or_default(store, storage_keys::ACHIEVEMENT_PROGRESS),
        }
    }

    /// Catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Every unlock record
    #[must_use]
    pub const fn unlocks(&self) -> &AchievementUnlocks {
        &self.unlocks
    }

    /// Unlock record for `id`
    #[must_use]
    pub fn unlock_record(&self, id: &str) -> Option<&UnlockRecord> {
        self.unlocks.get(id)
    }

    /// Whether `id` is unlocked
    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocks.contains_key(id)
    }

    /// Stored progress counter for `id`
    #[must_use]
    pub fn progress(&self, id: &str) -> Option<u32> {
        self.progress.get(id).copied()
    }

    /// Unlock `id` at `now`
    ///
    /// Returns `true` only on the first unlock. Unknown ids are rejected
    /// with a warning and leave state unchanged.
    pub fn unlock<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: &str,
        now: DateTime<Utc>,
    ) -> bool {
        if !self.catalog.contains(id) {
            warn!(achievement = id, "Ignoring unlock for unknown achievement");
            return false;
        }
        if self.unlocks.contains_key(id) {
            debug!(achievement = id, "Achievement already unlocked");
            return false;
        }
        self.unlocks.insert(
            id.to_owned(),
            UnlockRecord {
                unlocked_at: now,
                notified: false,
            },
        );
        info!(achievement = id, unlocked_at = %now, "Achievement unlocked");
        persist(store, storage_keys::ACHIEVEMENT_UNLOCKS, &self.unlocks);
        true
    }

    /// Record a progress counter for `id`; returns whether it changed
    ///
    /// Unknown ids are rejected with a warning.
    pub fn set_progress<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: &str,
        value: u32,
    ) -> bool {
        if !self.catalog.contains(id) {
            warn!(achievement = id, "Ignoring progress for unknown achievement");
            return false;
        }
        if self.progress.get(id) == Some(&value) {
            return false;
        }
        self.progress.insert(id.to_owned(), value);
        persist(store, storage_keys::ACHIEVEMENT_PROGRESS, &self.progress);
        true
    }

    /// Run the check pass and return newly unlocked ids in check order
    ///
    /// Progress counters are refreshed for definitions that have one.
    pub fn check_all<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        state: &DerivedState,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let ordered: Vec<AchievementDefinition> =
            self.catalog.ordered().into_iter().cloned().collect();

        let mut progress_changed = false;
        let mut newly_unlocked = Vec::new();
        for definition in &ordered {
            if let Some(current) = AchievementRules::progress(definition, state) {
                let capped = definition.target().map_or(current, |t| current.min(t));
                if self.progress.get(&definition.id) != Some(&capped) {
                    self.progress.insert(definition.id.clone(), capped);
                    progress_changed = true;
                }
            }
            if !self.is_unlocked(&definition.id) && AchievementRules::evaluate(definition, state) {
                self.unlocks.insert(
                    definition.id.clone(),
                    UnlockRecord {
                        unlocked_at: now,
                        notified: false,
                    },
                );
                info!(achievement = %definition.id, "Achievement unlocked");
                newly_unlocked.push(definition.id.clone());
            }
        }

        if progress_changed {
            persist(store, storage_keys::ACHIEVEMENT_PROGRESS, &self.progress);
        }
        if !newly_unlocked.is_empty() {
            persist(store, storage_keys::ACHIEVEMENT_UNLOCKS, &self.unlocks);
        }
        newly_unlocked
    }

    /// Unlocked definitions not yet shown to the user, in check order
    #[must_use]
    pub fn pending_notifications(&self) -> Vec<&AchievementDefinition> {
        self.catalog
            .ordered()
            .into_iter()
            .filter(|d| self.unlocks.get(&d.id).is_some_and(|r| !r.notified))
            .collect()
    }

    /// Mark an unlock as shown; returns whether anything changed
    pub fn mark_notified<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, id: &str) -> bool {
        match self.unlocks.get_mut(id) {
            Some(record) if !record.notified => {
                record.notified = true;
                persist(store, storage_keys::ACHIEVEMENT_UNLOCKS, &self.unlocks);
                true
            }
            _ => false,
        }
    }

    /// Remove every unlock and progress counter
    pub fn reset<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        warn!(
            unlocked = self.unlocks.len(),
            "Resetting all achievement unlocks and progress"
        );
        self.unlocks.clear();
        self.progress.clear();
        for key in [
            storage_keys::ACHIEVEMENT_UNLOCKS,
            storage_keys::ACHIEVEMENT_PROGRESS,
        ] {
            if let Err(e) = store.remove(key) {
                warn!(key, error = %e, "Failed to remove achievement state");
            }
        }
    }
}
