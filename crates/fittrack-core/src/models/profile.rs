// ABOUTME: User profile with fitness goal, injuries, chronic conditions, and lab markers
// ABOUTME: Habit and condition enums tolerate unknown stored values instead of failing to load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Body-composition goal stated in the profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    /// Lose body weight
    Lose,
    /// Keep body weight stable
    #[default]
    Maintain,
    /// Gain body weight
    Gain,
}

/// How often a habit (smoking, alcohol) occurs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    /// Not at all
    #[default]
    Never,
    /// A few times a month or less
    Occasionally,
    /// Most weeks
    Weekly,
    /// Every day
    Daily,
}

/// Chronic condition reported in the profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChronicCondition {
    /// Heart disease
    Cardiac,
    /// High blood pressure
    Hypertension,
    /// Type 1 or type 2 diabetes
    Diabetes,
    /// Asthma
    Asthma,
    /// Anything else
    #[serde(other)]
    Other,
}

impl ChronicCondition {
    /// Whether this condition lowers training readiness
    #[must_use]
    pub const fn affects_readiness(&self) -> bool {
        matches!(self, Self::Cardiac | Self::Hypertension | Self::Diabetes)
    }
}

/// User profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Whether onboarding was finished
    pub completed: bool,
    /// Stated body-composition goal
    pub goal: FitnessGoal,
    /// Free-text injury list
    pub injuries: Vec<String>,
    /// Chronic conditions
    pub chronic_conditions: Vec<ChronicCondition>,
    /// Smoking frequency
    pub smoking: HabitFrequency,
    /// Alcohol frequency
    pub alcohol: HabitFrequency,
    /// Hemoglobin in g/L
    pub hemoglobin: Option<f64>,
    /// Vitamin D (25-OH) in ng/mL
    #[serde(rename = "vitaminD")]
    pub vitamin_d: Option<f64>,
}
