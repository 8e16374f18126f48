// ABOUTME: Achievement listing and reset commands for fittrack-cli
// ABOUTME: Shows every catalog entry with unlock state and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use fittrack::engine::FitnessEngine;
use fittrack::storage::KeyValueStore;
use serde::Serialize;
use serde_json::json;

use crate::helpers::display::{divider, Output};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AchievementRow {
    id: String,
    title: String,
    description: String,
    unlocked_at: Option<DateTime<Utc>>,
    progress: Option<u32>,
    target: Option<u32>,
}

/// List every achievement in check order
pub fn list<S: KeyValueStore>(engine: &FitnessEngine<S>, output: &Output) -> Result<()> {
    let tracker = engine.achievements();
    let rows: Vec<AchievementRow> = tracker
        .catalog()
        .ordered()
        .into_iter()
        .map(|def| AchievementRow {
            id: def.id.clone(),
            title: def.title.clone(),
            description: def.description.clone(),
            unlocked_at: tracker.unlock_record(&def.id).map(|r| r.unlocked_at),
            progress: tracker.progress(&def.id),
            target: def.target(),
        })
        .collect();

    output.emit(&rows, || {
        println!("Achievements");
        divider(40);
        for row in &rows {
            let mark = if row.unlocked_at.is_some() { "x" } else { " " };
            let counter = match (row.progress, row.target) {
                (Some(p), Some(t)) => format!(" ({p}/{t})"),
                _ => String::new(),
            };
            println!("[{mark}] {}{counter} - {}", row.title, row.description);
        }
    })
}

/// Remove all unlocks and progress counters
pub fn reset<S: KeyValueStore>(
    engine: &mut FitnessEngine<S>,
    output: &Output,
    confirmed: bool,
) -> Result<()> {
    if !confirmed {
        bail!("Refusing to reset achievements without --yes");
    }
    engine.reset_achievements();
    output.emit(&json!({ "reset": true }), || {
        println!("All achievements reset");
    })
}
