// ABOUTME: Workout record model with exercise sets, session RPE, and soreness
// ABOUTME: Records are created on workout completion and never modified afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dates::DayKey;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Highest accepted session RPE
pub const MAX_INTENSITY: f64 = 10.0;

/// Highest accepted soreness rating
pub const MAX_DOMS: u8 = 5;

/// One performed set of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    /// Exercise identifier (e.g. `"squat"`)
    pub id: String,
    /// Load lifted in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Repetitions in reserve, when the user reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir: Option<u32>,
}

impl ExerciseSet {
    /// Create a set without an RIR rating
    #[must_use]
    pub fn new(id: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self {
            id: id.into(),
            weight,
            reps,
            rir: None,
        }
    }

    /// Attach a reps-in-reserve rating
    #[must_use]
    pub fn with_rir(mut self, rir: u32) -> Self {
        self.rir = Some(rir);
        self
    }
}

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Local calendar day of the session
    pub date: DayKey,
    /// Sets in the order they were performed
    #[serde(default)]
    pub exercises: Vec<ExerciseSet>,
    /// Whether the session was finished
    pub completed: bool,
    /// Session RPE (0-10)
    pub intensity: f64,
    /// Delayed-onset muscle soreness reported after the session (0-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doms: Option<u8>,
}

impl WorkoutRecord {
    /// Create a completed session with no sets yet
    #[must_use]
    pub const fn completed(date: DayKey, intensity: f64) -> Self {
        Self {
            date,
            exercises: Vec::new(),
            completed: true,
            intensity,
            doms: None,
        }
    }

    /// Append a performed set
    #[must_use]
    pub fn with_set(mut self, set: ExerciseSet) -> Self {
        self.exercises.push(set);
        self
    }

    /// Attach a soreness rating
    #[must_use]
    pub fn with_doms(mut self, doms: u8) -> Self {
        self.doms = Some(doms);
        self
    }

    /// Check ranges before the record is appended to the log
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for an intensity outside 0-10, a soreness
    /// rating above 5, or a negative or non-finite set weight
    pub fn validate(&self) -> AppResult<()> {
        if !self.intensity.is_finite() || !(0.0..=MAX_INTENSITY).contains(&self.intensity) {
            return Err(AppError::out_of_range(format!(
                "Workout intensity {} must be between 0 and {MAX_INTENSITY}",
                self.intensity
            )));
        }
        if let Some(doms) = self.doms {
            if doms > MAX_DOMS {
                return Err(AppError::out_of_range(format!(
                    "Soreness rating {doms} must be between 0 and {MAX_DOMS}"
                )));
            }
        }
        for set in &self.exercises {
            if set.id.trim().is_empty() {
                return Err(AppError::invalid_input("Exercise id must not be empty"));
            }
            if !set.weight.is_finite() || set.weight < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "Weight {} for exercise '{}' must be a non-negative number",
                    set.weight, set.id
                )));
            }
        }
        Ok(())
    }
}
