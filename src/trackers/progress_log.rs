// ABOUTME: Body-weight log persisted under a single key, kept oldest first
// ABOUTME: Serves windowed queries for the weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::storage::{load_or_default, KeyValueStore};
use fittrack_core::models::ProgressPoint;
use fittrack_intelligence::sources::ProgressSource;
use tracing::info;

/// Weight entries ordered by date
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    entries: Vec<ProgressPoint>,
}

impl ProgressLog {
    /// Load the log; a malformed document yields an empty log
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut entries: Vec<ProgressPoint> = load_or_default(store, storage_keys::PROGRESS);
        entries.sort_by_key(|p| p.date);
        Self { entries }
    }

    /// Validate and insert an entry after any entries of the same or earlier day
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive or non-finite weight
    pub fn record<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        point: ProgressPoint,
    ) -> AppResult<()> {
        point.validate()?;
        let index = self.entries.partition_point(|p| p.date <= point.date);
        self.entries.insert(index, point);
        info!(date = %point.date, weight = point.weight, "Weight logged");
        persist(store, storage_keys::PROGRESS, &self.entries);
        Ok(())
    }

    /// Most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&ProgressPoint> {
        self.entries.last()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressSource for ProgressLog {
    fn entries(&self) -> &[ProgressPoint] {
        &self.entries
    }
}
