// ABOUTME: User profile document persisted under a single key
// ABOUTME: Supplies goal, habits, and health markers to readiness and achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::storage_keys;
use crate::storage::{load_json, KeyValueStore};
use fittrack_core::models::UserProfile;
use fittrack_intelligence::sources::ProfileSource;
use tracing::{info, warn};

/// Stored profile, absent until first saved
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: Option<UserProfile>,
}

impl ProfileStore {
    /// Load the profile; a malformed document counts as no profile
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let profile = load_json(store, storage_keys::PROFILE).unwrap_or_else(|e| {
            warn!(error = %e, "Stored profile unusable; treating as absent");
            None
        });
        Self { profile }
    }

    /// Replace the profile
    pub fn save<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, profile: UserProfile) {
        info!(
            completed = profile.completed,
            goal = ?profile.goal,
            "Profile updated"
        );
        persist(store, storage_keys::PROFILE, &profile);
        self.profile = Some(profile);
    }

    /// Whether a profile exists and is marked complete
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.completed)
    }
}

impl ProfileSource for ProfileStore {
    fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }
}
