// ABOUTME: Argument parsers for fittrack-cli
// ABOUTME: Parses set notation and profile enums from command-line strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::errors::{AppError, AppResult};
use fittrack::models::{ChronicCondition, ExerciseSet, FitnessGoal, HabitFrequency};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse `exercise:weightxreps` with an optional `@rir` suffix
///
/// # Errors
///
/// Returns an invalid-format error describing the expected notation
pub fn set(raw: &str) -> AppResult<ExerciseSet> {
    let invalid = || {
        AppError::invalid_format(format!(
            "Set '{raw}' must look like exercise:weightxreps or exercise:weightxreps@rir"
        ))
    };

    let (exercise, load) = raw.split_once(':').ok_or_else(invalid)?;
    let (load, rir) = match load.split_once('@') {
        Some((load, rir)) => (load, Some(rir.trim().parse::<u32>().map_err(|_| invalid())?)),
        None => (load, None),
    };
    let (weight, reps) = load
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
    let reps: u32 = reps.trim().parse().map_err(|_| invalid())?;

    let set = ExerciseSet::new(exercise.trim(), weight, reps);
    Ok(match rir {
        Some(rir) => set.with_rir(rir),
        None => set,
    })
}

/// Parse a weight goal
///
/// # Errors
///
/// Returns a message listing the accepted values
pub fn goal(raw: &str) -> Result<FitnessGoal, String> {
    lowercase_enum(raw, "lose, maintain, gain")
}

/// Parse a habit frequency
///
/// # Errors
///
/// Returns a message listing the accepted values
pub fn habit(raw: &str) -> Result<HabitFrequency, String> {
    lowercase_enum(raw, "never, occasionally, weekly, daily")
}

/// Parse a chronic condition; unknown names map to `other`
///
/// # Errors
///
/// Returns a message for an empty value
pub fn condition(raw: &str) -> Result<ChronicCondition, String> {
    if raw.trim().is_empty() {
        return Err("condition must not be empty".into());
    }
    lowercase_enum(raw, "cardiac, hypertension, diabetes, asthma, other")
}

fn lowercase_enum<T: DeserializeOwned>(raw: &str, accepted: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(raw.trim().to_ascii_lowercase()))
        .map_err(|_| format!("'{raw}' is not one of: {accepted}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_with_rir() {
        let parsed = set("squat:100x5@2").unwrap();
        assert_eq!(parsed.id, "squat");
        assert!((parsed.weight - 100.0).abs() < f64::EPSILON);
        assert_eq!(parsed.reps, 5);
        assert_eq!(parsed.rir, Some(2));
    }

    #[test]
    fn test_set_rejects_missing_reps() {
        assert!(set("bench:80").is_err());
        assert!(set("bench80x5").is_err());
    }

    #[test]
    fn test_profile_enums() {
        assert_eq!(goal("Lose").unwrap(), FitnessGoal::Lose);
        assert_eq!(habit("weekly").unwrap(), HabitFrequency::Weekly);
        assert_eq!(condition("gout").unwrap(), ChronicCondition::Other);
        assert!(goal("bulk").is_err());
    }
}
