// ABOUTME: Workout and weight logging commands for fittrack-cli
// ABOUTME: Validates input, appends to the logs, and runs a check cycle after a workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::Local;
use fittrack::dates::DayKey;
use fittrack::engine::FitnessEngine;
use fittrack::models::{ProgressPoint, WorkoutRecord};
use fittrack::storage::KeyValueStore;
use serde_json::json;
use tracing::info;

use super::today;
use crate::helpers::display::Output;
use crate::helpers::parse;

/// Arguments of `log-workout`
pub struct WorkoutInput {
    /// Session RPE
    pub intensity: f64,
    /// Session day, today when absent
    pub date: Option<DayKey>,
    /// Raw set notation
    pub sets: Vec<String>,
    /// Soreness rating
    pub doms: Option<u8>,
    /// Whether the session was finished
    pub completed: bool,
}

/// Append a workout and run the check cycle
pub fn workout<S: KeyValueStore>(
    engine: &mut FitnessEngine<S>,
    output: &Output,
    input: WorkoutInput,
) -> Result<()> {
    let date = input.date.unwrap_or_else(today);
    let mut record = WorkoutRecord::completed(date, input.intensity);
    record.completed = input.completed;
    record.doms = input.doms;
    for raw in &input.sets {
        record = record.with_set(parse::set(raw)?);
    }
    let sets = record.exercises.len();
    engine.log_workout(record)?;
    info!(date = %date, sets, "Workout recorded from CLI");

    let report = engine.run_check(&Local::now());
    output.emit(&report, || {
        println!("Logged workout on {date} ({sets} set(s))");
        println!("Streak: {} day(s)", report.streak.current_streak);
        for id in &report.newly_unlocked {
            println!("Achievement unlocked: {id}");
        }
    })
}

/// Append a weigh-in
pub fn weight<S: KeyValueStore>(
    engine: &mut FitnessEngine<S>,
    output: &Output,
    weight: f64,
    date: Option<DayKey>,
) -> Result<()> {
    let date = date.unwrap_or_else(today);
    engine.log_weight(ProgressPoint::new(date, weight))?;
    output.emit(&json!({ "date": date, "weight": weight }), || {
        println!("Logged {weight:.1} kg on {date}");
    })
}
