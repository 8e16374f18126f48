// ABOUTME: Achievement catalog and unlock predicates over derived state
// ABOUTME: Rules are pure checks; unlock bookkeeping lives with the persistent tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Achievements
//!
//! The catalog is static configuration. Each definition is checked against a
//! [`DerivedState`] snapshot, so evaluating one rule never changes the inputs
//! of another.

use fittrack_core::constants::achievement_ids;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{AchievementDefinition, AchievementType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Threshold for `ten_workouts`
pub const TEN_WORKOUTS_THRESHOLD: u32 = 10;
/// Streak tiers in days
pub const STREAK_TIERS: [u32; 3] = [3, 7, 30];
/// Days of use for `privacy_guardian`
pub const PRIVACY_GUARDIAN_DAYS: u32 = 30;

/// Values the unlock predicates read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedState {
    /// Profile marked complete
    pub profile_complete: bool,
    /// Completed workouts logged
    pub total_workouts: u32,
    /// Current streak after today's check
    pub current_streak: u32,
    /// Goals marked complete
    pub completed_goals: u32,
    /// Days since first use, `None` before first use is recorded
    pub days_since_first_use: Option<i64>,
    /// Premium section ever opened
    pub premium_visited: bool,
    /// Weight trend favorable to the goal
    pub weight_toward_goal: bool,
}

/// Unlock predicates
pub struct AchievementRules;

impl AchievementRules {
    /// Whether `definition` should unlock now
    ///
    /// A numeric type without its numeric condition never unlocks.
    #[must_use]
    pub fn evaluate(definition: &AchievementDefinition, state: &DerivedState) -> bool {
        match definition.achievement_type {
            AchievementType::Profile => state.profile_complete,
            AchievementType::Workout => state.total_workouts >= 1,
            AchievementType::Progress => state.weight_toward_goal,
            AchievementType::Ethics => {
                !state.premium_visited
                    && definition.min_days.is_some_and(|min| {
                        state
                            .days_since_first_use
                            .is_some_and(|days| days >= i64::from(min))
                    })
            }
            AchievementType::Streak | AchievementType::WorkoutCount | AchievementType::Goal => {
                match (definition.target(), Self::progress(definition, state)) {
                    (Some(target), Some(current)) => current >= target,
                    _ => false,
                }
            }
        }
    }

    /// Current value of the counter a definition is gated on
    #[must_use]
    pub fn progress(definition: &AchievementDefinition, state: &DerivedState) -> Option<u32> {
        match definition.achievement_type {
            AchievementType::Streak => Some(state.current_streak),
            AchievementType::WorkoutCount => Some(state.total_workouts),
            AchievementType::Goal => Some(state.completed_goals),
            AchievementType::Ethics if !state.premium_visited => state
                .days_since_first_use
                .map(|days| u32::try_from(days.max(0)).unwrap_or(u32::MAX)),
            AchievementType::Ethics
            | AchievementType::Profile
            | AchievementType::Workout
            | AchievementType::Progress => None,
        }
    }
}

/// Static set of achievement definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementCatalog {
    definitions: Vec<AchievementDefinition>,
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        let [three, seven, thirty] = STREAK_TIERS;
        let definitions = vec![
            AchievementDefinition::new(
                achievement_ids::PROFILE_COMPLETE,
                "All About You",
                "Completed your profile",
                AchievementType::Profile,
            ),
            AchievementDefinition::new(
                achievement_ids::FIRST_WORKOUT,
                "First Step",
                "Logged your first workout",
                AchievementType::Workout,
            ),
            AchievementDefinition::new(
                achievement_ids::TEN_WORKOUTS,
                "Getting Serious",
                "Completed 10 workouts",
                AchievementType::WorkoutCount,
            )
            .with_threshold(TEN_WORKOUTS_THRESHOLD),
            AchievementDefinition::new(
                achievement_ids::THREE_DAY_STREAK,
                "On a Roll",
                "Worked out 3 days in a row",
                AchievementType::Streak,
            )
            .with_min_streak(three),
            AchievementDefinition::new(
                achievement_ids::WEEK_STREAK,
                "Full Week",
                "Worked out 7 days in a row",
                AchievementType::Streak,
            )
            .with_min_streak(seven),
            AchievementDefinition::new(
                achievement_ids::MONTH_STREAK,
                "Unstoppable",
                "Worked out 30 days in a row",
                AchievementType::Streak,
            )
            .with_min_streak(thirty),
            AchievementDefinition::new(
                achievement_ids::WEIGHT_PROGRESS,
                "Moving the Needle",
                "Your weight is trending toward your goal",
                AchievementType::Progress,
            ),
            AchievementDefinition::new(
                achievement_ids::FIRST_GOAL,
                "Goal Getter",
                "Completed your first goal",
                AchievementType::Goal,
            )
            .with_threshold(1),
            AchievementDefinition::new(
                achievement_ids::PRIVACY_GUARDIAN,
                "Privacy Guardian",
                "A month of tracking without ever opening the premium section",
                AchievementType::Ethics,
            )
            .with_min_days(PRIVACY_GUARDIAN_DAYS),
        ];
        Self { definitions }
    }
}

impl AchievementCatalog {
    /// Build a catalog from definitions
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when two definitions share an id and
    /// `InvalidInput` for an empty id
    pub fn new(definitions: Vec<AchievementDefinition>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            if definition.id.trim().is_empty() {
                return Err(AppError::invalid_input("Achievement id must not be empty"));
            }
            if !seen.insert(definition.id.as_str()) {
                return Err(AppError::already_exists(format!(
                    "Achievement '{}'",
                    definition.id
                )));
            }
        }
        Ok(Self { definitions })
    }

    /// Parse a JSON array of definitions
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON and any error from [`Self::new`]
    pub fn from_json(json: &str) -> AppResult<Self> {
        let definitions: Vec<AchievementDefinition> = serde_json::from_str(json)?;
        Self::new(definitions)
    }

    /// Look up a definition
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AchievementDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Whether `id` is defined
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &AchievementDefinition> {
        self.definitions.iter()
    }

    /// Definitions in check-pass order: by type, then ascending target
    #[must_use]
    pub fn ordered(&self) -> Vec<&AchievementDefinition> {
        let mut ordered: Vec<&AchievementDefinition> = self.definitions.iter().collect();
        ordered.sort_by_key(|d| (d.achievement_type.check_order(), d.target().unwrap_or(0)));
        ordered
    }

    /// Evaluate a single definition by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an id outside the catalog
    pub fn evaluate(&self, id: &str, state: &DerivedState) -> AppResult<bool> {
        self.get(id)
            .map(|definition| AchievementRules::evaluate(definition, state))
            .ok_or_else(|| AppError::not_found(format!("Achievement '{id}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_check_order() {
        let catalog = AchievementCatalog::default();
        let ids: Vec<&str> = catalog.ordered().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "profile_complete",
                "first_workout",
                "ten_workouts",
                "three_day_streak",
                "week_streak",
                "month_streak",
                "weight_progress",
                "first_goal",
                "privacy_guardian",
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let def = AchievementDefinition::new("x", "X", "", AchievementType::Workout);
        assert!(AchievementCatalog::new(vec![def.clone(), def]).is_err());
    }

    #[test]
    fn test_ethics_requires_no_premium_visit() {
        let catalog = AchievementCatalog::default();
        let mut state = DerivedState {
            days_since_first_use: Some(30),
            ..DerivedState::default()
        };
        assert!(catalog.evaluate("privacy_guardian", &state).unwrap());
        state.premium_visited = true;
        assert!(!catalog.evaluate("privacy_guardian", &state).unwrap());
    }
}
