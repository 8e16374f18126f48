// ABOUTME: Achievement definitions, unlock records, and progress counters
// ABOUTME: Definitions are static configuration; unlock records are created once and never re-dated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of condition an achievement is gated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementType {
    /// Profile completion
    Profile,
    /// First completed workout
    Workout,
    /// Streak length reaching `min_streak`
    Streak,
    /// Completed workouts reaching `threshold`
    WorkoutCount,
    /// Body weight moving toward the stated goal
    Progress,
    /// Completed goals reaching `threshold`
    Goal,
    /// `min_days` of use without visiting the premium section
    Ethics,
}

impl AchievementType {
    /// Position of this type in the fixed check pass
    #[must_use]
    pub const fn check_order(self) -> u8 {
        match self {
            Self::Profile => 0,
            Self::Workout => 1,
            Self::WorkoutCount => 2,
            Self::Streak => 3,
            Self::Progress => 4,
            Self::Goal => 5,
            Self::Ethics => 6,
        }
    }
}

/// Static achievement definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    /// Unique key
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Condition kind
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    /// Count threshold for `workout_count` and `goal`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    /// Streak length for `streak`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_streak: Option<u32>,
    /// Days of use for `ethics`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_days: Option<u32>,
}

impl AchievementDefinition {
    /// Create a definition without a numeric condition
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        achievement_type: AchievementType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            achievement_type,
            threshold: None,
            min_streak: None,
            min_days: None,
        }
    }

    /// Set the count threshold
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the streak length
    #[must_use]
    pub fn with_min_streak(mut self, min_streak: u32) -> Self {
        self.min_streak = Some(min_streak);
        self
    }

    /// Set the days-of-use requirement
    #[must_use]
    pub fn with_min_days(mut self, min_days: u32) -> Self {
        self.min_days = Some(min_days);
        self
    }

    /// Numeric target used for progress reporting, if the type has one
    #[must_use]
    pub const fn target(&self) -> Option<u32> {
        match self.achievement_type {
            AchievementType::Streak => self.min_streak,
            AchievementType::WorkoutCount | AchievementType::Goal => self.threshold,
            AchievementType::Ethics => self.min_days,
            AchievementType::Profile | AchievementType::Workout | AchievementType::Progress => {
                None
            }
        }
    }
}

/// Unlock stamp for one achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRecord {
    /// When the achievement was first unlocked
    pub unlocked_at: DateTime<Utc>,
    /// Whether the user has been shown the unlock
    #[serde(default)]
    pub notified: bool,
}

/// Unlock records keyed by achievement id
pub type AchievementUnlocks = BTreeMap<String, UnlockRecord>;

/// Progress counters keyed by achievement id
pub type AchievementProgress = BTreeMap<String, u32>;
