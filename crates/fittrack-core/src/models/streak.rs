// ABOUTME: Persisted workout streak singleton
// ABOUTME: Tracks the last day with a workout, the current streak, and the longest streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dates::DayKey;
use serde::{Deserialize, Serialize};

/// Streak state, rewritten at most once per calendar day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    /// Last calendar day that had a completed workout
    pub last_workout_date: Option<DayKey>,
    /// Consecutive-day count with one-day grace
    pub current_streak: u32,
    /// Highest `current_streak` ever reached
    #[serde(default)]
    pub longest_streak: u32,
}
