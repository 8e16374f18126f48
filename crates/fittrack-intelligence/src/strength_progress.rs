// ABOUTME: One-rep max estimation with RIR correction and per-exercise strength forecasting
// ABOUTME: Builds session-best history from the workout log and projects it in weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength progress
//!
//! Each set is converted to an estimated one-rep max with the Epley formula.
//! Sets left with two or more reps in reserve were submaximal, so their
//! estimate is raised by a fixed fraction per rep in reserve.

use crate::config::StrengthConfig;
use crate::sources::WorkoutSource;
use crate::statistical_analysis::{RegressionFit, RegressionPoint, StatisticalAnalyzer};
use fittrack_core::dates::DayKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DAYS_PER_WEEK: f64 = 7.0;

/// Session-best estimated one-rep max for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxPoint {
    /// Session day
    pub date: DayKey,
    /// Best estimate across the session's sets
    pub one_rep_max: f64,
}

/// Direction of the one-rep max trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTrend {
    /// Weekly slope above the band
    Growth,
    /// Weekly slope within the band
    Stability,
    /// Weekly slope below the negative band
    Decline,
}

impl StrengthTrend {
    /// Classify a weekly slope
    #[must_use]
    pub fn from_slope(slope: f64, band: f64) -> Self {
        if slope > band {
            Self::Growth
        } else if slope < -band {
            Self::Decline
        } else {
            Self::Stability
        }
    }
}

/// Projected one-rep max
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxForecast {
    /// Fit with x in weeks since the first session
    pub fit: RegressionFit,
    /// Week offset of the latest session
    pub latest_week: f64,
    /// Latest session-best estimate
    pub current_one_rm: f64,
    /// Forecast horizon
    pub weeks_ahead: u32,
    /// Estimate `weeks_ahead` weeks after the latest session
    pub predicted_one_rm: f64,
    /// Classified trend
    pub trend: StrengthTrend,
}

impl OneRepMaxForecast {
    /// Fitted change per week
    #[must_use]
    pub const fn weekly_change(&self) -> f64 {
        self.fit.slope
    }
}

/// One-rep max estimation and forecasting
#[derive(Debug, Clone, Default)]
pub struct StrengthProgressAnalyzer {
    config: StrengthConfig,
}

impl StrengthProgressAnalyzer {
    /// Create an analyzer with explicit settings
    #[must_use]
    pub const fn new(config: StrengthConfig) -> Self {
        Self { config }
    }

    /// Epley estimate, raised by the RIR correction when `rir` meets the threshold
    ///
    /// Zero reps or a non-positive load yields 0.
    #[must_use]
    pub fn estimate_one_rep_max(&self, weight: f64, reps: u32, rir: Option<u32>) -> f64 {
        if reps == 0 || !weight.is_finite() || weight <= 0.0 {
            return 0.0;
        }
        let epley = weight * (1.0 + f64::from(reps) / self.config.epley_divisor);
        match rir {
            Some(rir) if rir >= self.config.rir_correction_threshold => {
                epley * self.config.rir_correction_per_rep.mul_add(f64::from(rir), 1.0)
            }
            _ => epley,
        }
    }

    /// Best estimate per completed session for `exercise`, oldest first
    #[must_use]
    pub fn one_rep_max_history<W>(&self, workouts: &W, exercise: &str) -> Vec<OneRepMaxPoint>
    where
        W: WorkoutSource + ?Sized,
    {
        let mut history: Vec<OneRepMaxPoint> = workouts
            .all()
            .iter()
            .filter(|w| w.completed)
            .filter_map(|w| {
                w.exercises
                    .iter()
                    .filter(|set| set.id == exercise)
                    .map(|set| self.estimate_one_rep_max(set.weight, set.reps, set.rir))
                    .filter(|estimate| *estimate > 0.0)
                    .reduce(f64::max)
                    .map(|one_rep_max| OneRepMaxPoint {
                        date: w.date,
                        one_rep_max,
                    })
            })
            .collect();
        history.sort_by_key(|p| p.date);
        history
    }

    /// Forecast using the configured horizon
    #[must_use]
    pub fn forecast(&self, history: &[OneRepMaxPoint]) -> Option<OneRepMaxForecast> {
        self.predict_future_one_rm(history, self.config.weeks_ahead)
    }

    /// Project the history `weeks_ahead` weeks past the latest session
    ///
    /// Returns `None` with fewer than two sessions or when every session
    /// falls on the same day.
    #[must_use]
    pub fn predict_future_one_rm(
        &self,
        history: &[OneRepMaxPoint],
        weeks_ahead: u32,
    ) -> Option<OneRepMaxForecast> {
        let first = history.first()?.date;
        let latest = history.last()?;

        let week_of = |date: DayKey| first.days_until(date) as f64 / DAYS_PER_WEEK;
        let points: Vec<RegressionPoint> = history
            .iter()
            .map(|p| RegressionPoint::new(week_of(p.date), p.one_rep_max))
            .collect();

        let fit = match StatisticalAnalyzer::linear_regression(&points) {
            Ok(fit) => fit,
            Err(e) => {
                debug!(sessions = history.len(), error = %e, "No strength trend available");
                return None;
            }
        };

        let latest_week = week_of(latest.date);
        Some(OneRepMaxForecast {
            fit,
            latest_week,
            current_one_rm: latest.one_rep_max,
            weeks_ahead,
            predicted_one_rm: fit.predict(latest_week + f64::from(weeks_ahead)),
            trend: StrengthTrend::from_slope(fit.slope, self.config.trend_slope_band),
        })
    }

    /// Weeks after the latest session until the fitted line reaches `target`
    ///
    /// `Some(0.0)` when the target is already met, `None` when the trend is
    /// flat or falling.
    #[must_use]
    pub fn weeks_to_target(forecast: &OneRepMaxForecast, target: f64) -> Option<f64> {
        if forecast.current_one_rm >= target {
            return Some(0.0);
        }
        if forecast.fit.slope <= 0.0 {
            return None;
        }
        let week_reached = (target - forecast.fit.intercept) / forecast.fit.slope;
        Some((week_reached - forecast.latest_week).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley_without_reserve() {
        let analyzer = StrengthProgressAnalyzer::default();
        let estimate = analyzer.estimate_one_rep_max(100.0, 5, None);
        assert!((estimate - 116.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_rir_below_threshold_is_uncorrected() {
        let analyzer = StrengthProgressAnalyzer::default();
        let plain = analyzer.estimate_one_rep_max(100.0, 5, None);
        assert!((analyzer.estimate_one_rep_max(100.0, 5, Some(1)) - plain).abs() < f64::EPSILON);
        assert!((analyzer.estimate_one_rep_max(100.0, 5, Some(2)) - plain * 1.06).abs() < 1e-9);
    }

    #[test]
    fn test_zero_reps_is_zero() {
        let analyzer = StrengthProgressAnalyzer::default();
        assert!(analyzer.estimate_one_rep_max(100.0, 0, None).abs() < f64::EPSILON);
    }
}
