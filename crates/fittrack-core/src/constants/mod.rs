// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for storage keys, achievement ids, and calendar limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! This module organizes application constants by domain for better maintainability.

/// Cache-related constants (TTL, sizes)
pub mod cache;

/// Keys under which the trackers persist their JSON blobs
pub mod storage_keys {
    /// Append-only workout log
    pub const WORKOUTS: &str = "fittrack.workouts";
    /// Body-weight entries
    pub const PROGRESS: &str = "fittrack.progress";
    /// User profile
    pub const PROFILE: &str = "fittrack.profile";
    /// First-use day, premium visit flag, and completed goals
    pub const USAGE: &str = "fittrack.usage";
    /// Streak singleton
    pub const STREAK: &str = "fittrack.streak";
    /// Achievement unlock records
    pub const ACHIEVEMENT_UNLOCKS: &str = "fittrack.achievements.unlocked";
    /// Achievement progress counters
    pub const ACHIEVEMENT_PROGRESS: &str = "fittrack.achievements.progress";
}

/// Identifiers of the built-in achievement catalog
pub mod achievement_ids {
    /// Profile filled in
    pub const PROFILE_COMPLETE: &str = "profile_complete";
    /// First completed workout
    pub const FIRST_WORKOUT: &str = "first_workout";
    /// Ten completed workouts
    pub const TEN_WORKOUTS: &str = "ten_workouts";
    /// Three-day streak
    pub const THREE_DAY_STREAK: &str = "three_day_streak";
    /// Seven-day streak
    pub const WEEK_STREAK: &str = "week_streak";
    /// Thirty-day streak
    pub const MONTH_STREAK: &str = "month_streak";
    /// Body weight moving toward the stated goal
    pub const WEIGHT_PROGRESS: &str = "weight_progress";
    /// First goal completed
    pub const FIRST_GOAL: &str = "first_goal";
    /// Used the app for a month without opening the premium section
    pub const PRIVACY_GUARDIAN: &str = "privacy_guardian";
}

/// Storage limits
pub mod storage {
    /// Default quota for the local store, matching the common 5 MiB browser limit
    pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

    /// Default file name of the JSON file store
    pub const DEFAULT_STORE_FILE: &str = "store.json";

    /// Directory created under the platform data directory
    pub const DATA_DIR_NAME: &str = "fittrack";
}

/// Service identification used in structured logs
pub mod service_names {
    /// Service name reported in log records
    pub const FITTRACK: &str = "fittrack";
}
