// ABOUTME: Usage ledger with first-use day, premium section visits, and completed goals
// ABOUTME: Supplies the goal and ethics achievement inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dates::DayKey;
use serde::{Deserialize, Serialize};

/// A goal the user marked as done
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGoal {
    /// Goal identifier
    pub goal_id: String,
    /// Day it was completed
    pub completed_on: DayKey,
}

/// App usage facts persisted alongside the logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageLedger {
    /// First day the app was opened
    pub first_seen: Option<DayKey>,
    /// Whether the premium/paywall section was ever opened
    pub premium_visited: bool,
    /// Goals completed so far
    pub completed_goals: Vec<CompletedGoal>,
}

impl UsageLedger {
    /// Record the first-use day if none is stored yet; returns whether it changed
    pub fn touch(&mut self, today: DayKey) -> bool {
        if self.first_seen.is_some() {
            return false;
        }
        self.first_seen = Some(today);
        true
    }

    /// Days elapsed since first use, `None` before the first touch
    #[must_use]
    pub fn days_since_first_use(&self, today: DayKey) -> Option<i64> {
        self.first_seen
            .map(|first| first.days_until(today).max(0))
    }

    /// Mark a goal complete; returns `false` if it was already recorded
    pub fn complete_goal(&mut self, goal_id: &str, day: DayKey) -> bool {
        if self.completed_goals.iter().any(|g| g.goal_id == goal_id) {
            return false;
        }
        self.completed_goals.push(CompletedGoal {
            goal_id: goal_id.to_owned(),
            completed_on: day,
        });
        true
    }
}
