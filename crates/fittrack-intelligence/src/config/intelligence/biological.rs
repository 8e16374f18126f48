// ABOUTME: Biological penalty configuration for readiness scoring
// ABOUTME: Per-habit, per-marker, and per-condition penalties with a hard cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Penalties derived from the user profile, summed then capped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BiologicalPenaltyConfig {
    /// Upper bound of the summed penalty
    pub cap: f64,
    /// Smoking penalty for occasionally / weekly / daily
    pub smoking: HabitPenalties,
    /// Alcohol penalty for occasionally / weekly / daily
    pub alcohol: HabitPenalties,
    /// Hemoglobin below this (g/L) is penalized
    pub hemoglobin_floor: f64,
    /// Penalty for low hemoglobin
    pub low_hemoglobin_penalty: f64,
    /// Vitamin D below this (ng/mL) is penalized
    pub vitamin_d_floor: f64,
    /// Penalty for low vitamin D
    pub low_vitamin_d_penalty: f64,
    /// Penalty per cardiac, hypertension, or diabetes entry
    pub chronic_condition_penalty: f64,
}

impl Default for BiologicalPenaltyConfig {
    fn default() -> Self {
        Self {
            cap: 3.0,
            smoking: HabitPenalties {
                occasionally: 0.5,
                weekly: 0.75,
                daily: 1.5,
            },
            alcohol: HabitPenalties {
                occasionally: 0.25,
                weekly: 0.5,
                daily: 1.0,
            },
            hemoglobin_floor: 120.0,
            low_hemoglobin_penalty: 0.5,
            vitamin_d_floor: 20.0,
            low_vitamin_d_penalty: 0.5,
            chronic_condition_penalty: 0.5,
        }
    }
}

/// Penalty per habit frequency; `never` is always zero
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitPenalties {
    /// A few times a month
    pub occasionally: f64,
    /// Every week
    pub weekly: f64,
    /// Every day
    pub daily: f64,
}
