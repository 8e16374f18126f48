// ABOUTME: Append-only workout log persisted under a single key
// ABOUTME: Validates records before appending and serves the workout source queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::storage::{load_or_default, KeyValueStore};
use fittrack_core::models::WorkoutRecord;
use fittrack_intelligence::sources::WorkoutSource;
use tracing::info;

/// Workout records in insertion order
#[derive(Debug, Clone, Default)]
pub struct WorkoutLog {
    records: Vec<WorkoutRecord>,
}

impl WorkoutLog {
    /// Load the log; a malformed document yields an empty log
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            records: load_or_default(store, storage_keys::WORKOUTS),
        }
    }

    /// Validate and append a record
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range values; storage failures
    /// are logged only
    pub fn append<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        record: WorkoutRecord,
    ) -> AppResult<()> {
        record.validate()?;
        info!(
            date = %record.date,
            completed = record.completed,
            sets = record.exercises.len(),
            "Workout logged"
        );
        self.records.push(record);
        persist(store, storage_keys::WORKOUTS, &self.records);
        Ok(())
    }

    /// Number of records, completed or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl WorkoutSource for WorkoutLog {
    fn all(&self) -> &[WorkoutRecord] {
        &self.records
    }
}
