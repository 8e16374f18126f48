// ABOUTME: Readiness scoring table configuration
// ABOUTME: Base score, per-factor adjustments, recovery signals, and weekly consistency targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Readiness Configuration
//!
//! The defaults reproduce the adaptive scoring table: start at 7, move by
//! whole points per factor, subtract the biological penalty, then clamp.

use fittrack_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Lowest score the scorer may ever report
pub const READINESS_SCORE_FLOOR: f64 = 1.0;

/// Highest score the scorer may ever report
pub const READINESS_SCORE_CEILING: f64 = 10.0;

/// Readiness scoring table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Starting score before adjustments
    pub base_score: f64,
    /// Lowest reported score
    pub min_score: f64,
    /// Highest reported score
    pub max_score: f64,
    /// Fatigue thresholds and their adjustments
    pub fatigue: FatigueThresholds,
    /// Adjustment when the weight trend works against the goal
    pub adverse_trend_penalty: f64,
    /// Adjustment when the weight trend supports the goal
    pub favorable_trend_bonus: f64,
    /// Adjustment when weekly workout days fall short of the target
    pub insufficient_consistency_penalty: f64,
    /// Adjustment when weekly workout days meet the target
    pub sufficient_consistency_bonus: f64,
    /// Adjustment when the last session calls for recovery
    pub recovery_penalty: f64,
    /// Signals that raise the recovery flag
    pub recovery: RecoverySignals,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            base_score: 7.0,
            min_score: READINESS_SCORE_FLOOR,
            max_score: READINESS_SCORE_CEILING,
            fatigue: FatigueThresholds::default(),
            adverse_trend_penalty: 1.0,
            favorable_trend_bonus: 1.0,
            insufficient_consistency_penalty: 2.0,
            sufficient_consistency_bonus: 1.0,
            recovery_penalty: 2.0,
            recovery: RecoverySignals::default(),
        }
    }
}

/// Fatigue is the mean session RPE over a short trailing window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueThresholds {
    /// Trailing window in days, today included
    pub window_days: u32,
    /// Fatigue strictly above this subtracts `high_penalty`
    pub high: f64,
    /// Fatigue strictly below this adds `low_bonus`
    pub low: f64,
    /// Points removed for high fatigue
    pub high_penalty: f64,
    /// Points added for low fatigue
    pub low_bonus: f64,
}

impl Default for FatigueThresholds {
    fn default() -> Self {
        Self {
            window_days: 3,
            high: 6.0,
            low: 3.0,
            high_penalty: 2.0,
            low_bonus: 1.0,
        }
    }
}

/// Last-session signals that call for a recovery day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoverySignals {
    /// Session RPE at or above this raises the flag
    pub rpe_threshold: f64,
    /// Soreness at or above this raises the flag
    pub doms_threshold: u8,
    /// The last session only counts if it is at most this many days old
    pub window_days: u32,
}

impl Default for RecoverySignals {
    fn default() -> Self {
        Self {
            rpe_threshold: 9.0,
            doms_threshold: 4,
            window_days: 2,
        }
    }
}

/// Distinct workout days expected per trailing week, by goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsistencyTargets {
    /// Trailing window in days, today included
    pub window_days: u32,
    /// Target when losing weight
    pub lose: u32,
    /// Target when maintaining weight
    pub maintain: u32,
    /// Target when gaining weight
    pub gain: u32,
}

impl ConsistencyTargets {
    /// Weekly target for a goal
    #[must_use]
    pub const fn target_for(&self, goal: FitnessGoal) -> u32 {
        match goal {
            FitnessGoal::Lose => self.lose,
            FitnessGoal::Maintain => self.maintain,
            FitnessGoal::Gain => self.gain,
        }
    }
}

impl Default for ConsistencyTargets {
    fn default() -> Self {
        Self {
            window_days: 7,
            lose: 4,
            maintain: 3,
            gain: 4,
        }
    }
}
