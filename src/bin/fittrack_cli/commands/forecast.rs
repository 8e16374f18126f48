// ABOUTME: Forecast commands for fittrack-cli
// ABOUTME: Projects body weight and one-rep max with the regression-based analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::engine::FitnessEngine;
use fittrack::intelligence::strength_progress::{OneRepMaxForecast, StrengthProgressAnalyzer};
use fittrack::intelligence::weight_trend::WeightForecast;
use fittrack::storage::KeyValueStore;
use serde::Serialize;

use super::today;
use crate::helpers::display::Output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StrengthReport<'a> {
    exercise: &'a str,
    sessions: usize,
    forecast: Option<OneRepMaxForecast>,
    target: Option<f64>,
    weeks_to_target: Option<f64>,
}

/// Print the body-weight forecast
pub fn weight<S: KeyValueStore>(
    engine: &FitnessEngine<S>,
    output: &Output,
    weeks: Option<u32>,
) -> Result<()> {
    let weeks = weeks.unwrap_or(engine.config().trend.weeks_ahead);
    let forecast: Option<WeightForecast> = engine.weight_forecast(today(), weeks);

    output.emit(&forecast, || match &forecast {
        Some(f) => {
            println!("Current weight: {:.1} kg", f.current_weight);
            println!(
                "Trend: {:?} ({:+.2} kg/week, r\u{b2} {:.2})",
                f.direction, f.weekly_change, f.fit.r_squared
            );
            println!("In {} week(s): {:.1} kg", f.weeks_ahead, f.projected_weight);
        }
        None => println!("Not enough weigh-ins in the trend window for a forecast"),
    })
}

/// Print the one-rep max forecast for an exercise
pub fn strength<S: KeyValueStore>(
    engine: &FitnessEngine<S>,
    output: &Output,
    exercise: &str,
    weeks: Option<u32>,
    target: Option<f64>,
) -> Result<()> {
    let weeks = weeks.unwrap_or(engine.config().strength.weeks_ahead);
    let sessions = engine.one_rep_max_history(exercise).len();
    let forecast = engine.one_rep_max_forecast(exercise, weeks);
    let weeks_to_target = forecast
        .as_ref()
        .zip(target)
        .and_then(|(f, t)| StrengthProgressAnalyzer::weeks_to_target(f, t));

    let report = StrengthReport {
        exercise,
        sessions,
        forecast,
        target,
        weeks_to_target,
    };

    output.emit(&report, || match &report.forecast {
        Some(f) => {
            println!("{exercise}: estimated 1RM {:.1} kg over {sessions} session(s)", f.current_one_rm);
            println!("Trend: {:?} ({:+.2} kg/week)", f.trend, f.weekly_change());
            println!("In {} week(s): {:.1} kg", f.weeks_ahead, f.predicted_one_rm);
            if let Some(t) = target {
                match weeks_to_target {
                    Some(w) => println!("Target {t:.1} kg reachable in about {w:.1} week(s)"),
                    None => println!("Target {t:.1} kg is not reachable on the current trend"),
                }
            }
        }
        None => println!("{exercise}: need at least two sessions with distinct dates for a forecast"),
    })
}
