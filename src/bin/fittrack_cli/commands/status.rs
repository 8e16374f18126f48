// ABOUTME: Status command for fittrack-cli
// ABOUTME: Runs the check cycle and reports streak, readiness, and pending achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::Local;
use fittrack::dates::local_date_key;
use fittrack::engine::{CheckReport, FitnessEngine};
use fittrack::intelligence::readiness::ReadinessAssessment;
use fittrack::storage::KeyValueStore;
use serde::Serialize;
use std::time::Instant;

use crate::helpers::display::{display_readiness, display_unlock, divider, Output};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    check: CheckReport,
    longest_streak: u32,
    readiness: Option<ReadinessAssessment>,
    notified: Vec<String>,
}

/// Run today's check and print the summary
pub fn run<S: KeyValueStore>(engine: &mut FitnessEngine<S>, output: &Output) -> Result<()> {
    let now = Local::now();
    let check = engine.run_check(&now);
    let readiness = engine.readiness(local_date_key(&now), Instant::now());

    let pending: Vec<_> = engine
        .achievements()
        .pending_notifications()
        .into_iter()
        .cloned()
        .collect();

    let report = StatusReport {
        longest_streak: check.streak.longest_streak,
        check,
        readiness,
        notified: pending.iter().map(|d| d.id.clone()).collect(),
    };

    output.emit(&report, || {
        println!("Fittrack status for {}", report.check.today);
        divider(40);
        println!(
            "Streak: {} day(s) (longest {})",
            report.check.streak.current_streak, report.longest_streak
        );
        match &report.readiness {
            Some(assessment) => display_readiness(assessment),
            None => println!("Readiness: no data yet - log a workout or a weigh-in"),
        }
        for definition in &pending {
            display_unlock(definition);
        }
    })?;

    for definition in &pending {
        engine.mark_notified(&definition.id);
    }
    Ok(())
}
