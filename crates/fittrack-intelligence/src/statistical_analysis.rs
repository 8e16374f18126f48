// ABOUTME: Ordinary least-squares regression used by the weight and strength forecasts
// ABOUTME: Detects insufficient, degenerate, and non-finite input instead of producing NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Statistical analysis
//!
//! Closed-form least squares over every supplied point, no windowing or
//! weighting. Callers choose the window and the x scale (days or weeks).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of points for a fit
pub const MIN_REGRESSION_POINTS: usize = 2;

/// One observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionPoint {
    /// Independent variable (time offset)
    pub x: f64,
    /// Observed value
    pub y: f64,
}

impl RegressionPoint {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for RegressionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionFit {
    /// Change in y per unit of x
    pub slope: f64,
    /// Value at x = 0
    pub intercept: f64,
    /// Coefficient of determination, 0 when y has no variance
    pub r_squared: f64,
    /// Number of points fitted
    pub sample_size: usize,
}

impl RegressionFit {
    /// Evaluate the line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Reasons a fit could not be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegressionError {
    /// Fewer points than a line needs
    #[error("insufficient data for regression: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Points required
        required: usize,
        /// Points supplied
        actual: usize,
    },
    /// Every point shares the same x, so the slope is undefined
    #[error("cannot fit a line: zero variance in x")]
    ZeroVariance,
    /// A coordinate was NaN or infinite
    #[error("regression input contains a non-finite value")]
    NonFiniteInput,
}

/// Least-squares fitting
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit a line through `points`
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for fewer than two points, `ZeroVariance`
    /// when all x values coincide, and `NonFiniteInput` for NaN or infinite
    /// coordinates
    pub fn linear_regression(points: &[RegressionPoint]) -> Result<RegressionFit, RegressionError> {
        if points.len() < MIN_REGRESSION_POINTS {
            return Err(RegressionError::InsufficientData {
                required: MIN_REGRESSION_POINTS,
                actual: points.len(),
            });
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(RegressionError::NonFiniteInput);
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

        // Centered sums keep precision when x is a large day offset
        let (sxx, sxy) = points.iter().fold((0.0_f64, 0.0_f64), |(sxx, sxy), p| {
            let dx = p.x - mean_x;
            (dx.mul_add(dx, sxx), dx.mul_add(p.y - mean_y, sxy))
        });

        // Tolerances scale with the raw sums of squares so the checks are unit-free
        let x_magnitude = points.iter().map(|p| p.x * p.x).sum::<f64>();
        if sxx <= f64::EPSILON * x_magnitude {
            return Err(RegressionError::ZeroVariance);
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let (rss, tss) = points.iter().fold((0.0_f64, 0.0_f64), |(rss, tss), p| {
            let residual = p.y - slope.mul_add(p.x, intercept);
            let deviation = p.y - mean_y;
            (residual.mul_add(residual, rss), deviation.mul_add(deviation, tss))
        });

        let y_magnitude = points.iter().map(|p| p.y * p.y).sum::<f64>();
        let r_squared = if tss <= f64::EPSILON * y_magnitude {
            0.0
        } else {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        };

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(RegressionError::NonFiniteInput);
        }

        Ok(RegressionFit {
            slope,
            intercept,
            r_squared,
            sample_size: points.len(),
        })
    }

    /// Fit a line, or `None` when no meaningful line exists
    #[must_use]
    pub fn fit(points: &[RegressionPoint]) -> Option<RegressionFit> {
        Self::linear_regression(points).ok()
    }
}
