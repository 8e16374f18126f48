// ABOUTME: Trend configuration for weight forecasting and one-rep max projection
// ABOUTME: Window lengths, stability bands, and Epley/RIR constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Body-weight trend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightTrendConfig {
    /// Trailing window of progress entries fed to the regression
    pub window_days: u32,
    /// Weekly change (kg) inside which the trend counts as stable
    pub stability_band_kg_per_week: f64,
    /// Default forecast horizon in weeks
    pub weeks_ahead: u32,
}

impl Default for WeightTrendConfig {
    fn default() -> Self {
        Self {
            window_days: 14,
            stability_band_kg_per_week: 0.1,
            weeks_ahead: 4,
        }
    }
}

/// One-rep max estimation and trend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    /// Epley divisor in `weight * (1 + reps / divisor)`
    pub epley_divisor: f64,
    /// RIR at or above this inflates the estimate
    pub rir_correction_threshold: u32,
    /// Fractional increase per rep in reserve
    pub rir_correction_per_rep: f64,
    /// Weekly slope (kg) beyond which the trend is growth or decline
    pub trend_slope_band: f64,
    /// Default forecast horizon in weeks
    pub weeks_ahead: u32,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            epley_divisor: 30.0,
            rir_correction_threshold: 2,
            rir_correction_per_rep: 0.03,
            trend_slope_band: 0.05,
            weeks_ahead: 4,
        }
    }
}
