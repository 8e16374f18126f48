// ABOUTME: Profile command for fittrack-cli
// ABOUTME: Merges command-line fields into the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::engine::FitnessEngine;
use fittrack::intelligence::sources::ProfileSource;
use fittrack::models::{ChronicCondition, FitnessGoal, HabitFrequency};
use fittrack::storage::KeyValueStore;
use tracing::warn;

use crate::helpers::display::Output;

/// Fields supplied on the command line; `None` keeps the stored value
pub struct ProfileUpdate {
    pub goal: Option<FitnessGoal>,
    pub smoking: Option<HabitFrequency>,
    pub alcohol: Option<HabitFrequency>,
    pub hemoglobin: Option<f64>,
    pub vitamin_d: Option<f64>,
    pub conditions: Vec<ChronicCondition>,
    pub injuries: Vec<String>,
    pub complete: bool,
}

/// Merge `update` into the stored profile and save it
pub fn update<S: KeyValueStore>(
    engine: &mut FitnessEngine<S>,
    output: &Output,
    update: ProfileUpdate,
) {
    let mut profile = engine.profile().profile().cloned().unwrap_or_default();

    if let Some(goal) = update.goal {
        profile.goal = goal;
    }
    if let Some(smoking) = update.smoking {
        profile.smoking = smoking;
    }
    if let Some(alcohol) = update.alcohol {
        profile.alcohol = alcohol;
    }
    if update.hemoglobin.is_some() {
        profile.hemoglobin = update.hemoglobin;
    }
    if update.vitamin_d.is_some() {
        profile.vitamin_d = update.vitamin_d;
    }
    if !update.conditions.is_empty() {
        profile.chronic_conditions = update.conditions;
    }
    if !update.injuries.is_empty() {
        profile.injuries = update.injuries;
    }
    profile.completed |= update.complete;

    engine.update_profile(profile.clone());
    if let Err(e) = output.emit(&profile, || {
        println!(
            "Profile saved (goal: {:?}, complete: {})",
            profile.goal, profile.completed
        );
    }) {
        warn!(error = %e, "Could not print profile");
    }
}
