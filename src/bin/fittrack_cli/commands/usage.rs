// ABOUTME: Goal completion and premium visit commands for fittrack-cli
// ABOUTME: Updates the usage ledger behind the goal and ethics achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::engine::FitnessEngine;
use fittrack::storage::KeyValueStore;
use serde_json::json;
use tracing::warn;

use super::today;
use crate::helpers::display::Output;

/// Mark a goal complete
pub fn goal_complete<S: KeyValueStore>(
    engine: &mut FitnessEngine<S>,
    output: &Output,
    goal_id: &str,
) -> Result<()> {
    let recorded = engine.complete_goal(goal_id, today());
    output.emit(&json!({ "goalId": goal_id, "recorded": recorded }), || {
        if recorded {
            println!("Goal '{goal_id}' completed");
        } else {
            println!("Goal '{goal_id}' was already completed");
        }
    })
}

/// Record a premium section visit
pub fn premium_visit<S: KeyValueStore>(engine: &mut FitnessEngine<S>, output: &Output) {
    engine.visit_premium_section();
    if output
        .emit(&json!({ "premiumVisited": true }), || {
            println!("Premium section visit recorded");
        })
        .is_err()
    {
        warn!("Could not print premium visit result");
    }
}
