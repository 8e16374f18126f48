// ABOUTME: Core data models for workouts, weight progress, profiles, streaks, and achievements
// ABOUTME: All persisted models serialize as camelCase JSON to match the stored blobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records owned by the trackers. Workouts and weight entries are append-only;
//! streak and unlock state are small singletons rewritten on each check cycle.

/// Achievement definitions and unlock records
pub mod achievement;
/// Body-weight progress entries
pub mod progress;
/// User profile and health markers
pub mod profile;
/// Streak singleton
pub mod streak;
/// First-use day, premium visit flag, completed goals
pub mod usage;
/// Workout records and exercise sets
pub mod workout;

pub use achievement::{
    AchievementDefinition, AchievementProgress, AchievementType, AchievementUnlocks, UnlockRecord,
};
pub use progress::ProgressPoint;
pub use profile::{ChronicCondition, FitnessGoal, HabitFrequency, UserProfile};
pub use streak::StreakState;
pub use usage::{CompletedGoal, UsageLedger};
pub use workout::{ExerciseSet, WorkoutRecord};
