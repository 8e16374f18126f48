// ABOUTME: Output formatting helpers for fittrack-cli
// ABOUTME: Prints either human-readable text or JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::intelligence::readiness::ReadinessAssessment;
use fittrack::models::AchievementDefinition;
use serde::Serialize;

/// Output mode chosen on the command line
pub struct Output {
    json: bool,
}

impl Output {
    /// Create an output sink
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON in JSON mode, otherwise run `human`
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }
}

/// Print a readiness assessment with its breakdown
pub fn display_readiness(assessment: &ReadinessAssessment) {
    println!(
        "Readiness: {}/10 ({:?} intensity)",
        assessment.score, assessment.intensity
    );
    for adjustment in &assessment.adjustments {
        println!("   {:+.2}  {}", adjustment.delta, adjustment.reason);
    }
    for limitation in &assessment.limitations {
        println!("   note: {limitation}");
    }
}

/// Print a newly unlocked achievement
pub fn display_unlock(definition: &AchievementDefinition) {
    println!("Achievement unlocked: {} - {}", definition.title, definition.description);
}

/// Print a section divider
pub fn divider(width: usize) {
    println!("{}", "=".repeat(width));
}
