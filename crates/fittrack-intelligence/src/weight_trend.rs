// ABOUTME: Body-weight trend forecasting over a trailing window of progress entries
// ABOUTME: Classifies weekly change and compares it against the user's goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightTrendConfig;
use crate::sources::ProgressSource;
use crate::statistical_analysis::{RegressionFit, RegressionPoint, StatisticalAnalyzer};
use fittrack_core::dates::DayKey;
use fittrack_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DAYS_PER_WEEK: f64 = 7.0;

/// Direction of the weekly weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDirection {
    /// Weekly change below the negative stability band
    Losing,
    /// Weekly change inside the band
    Stable,
    /// Weekly change above the band
    Gaining,
}

impl WeightDirection {
    /// Classify a weekly change in kilograms
    #[must_use]
    pub fn from_weekly_change(kg_per_week: f64, band: f64) -> Self {
        if kg_per_week > band {
            Self::Gaining
        } else if kg_per_week < -band {
            Self::Losing
        } else {
            Self::Stable
        }
    }
}

/// How the trend relates to the stated goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendAlignment {
    /// Moving toward the goal
    Favorable,
    /// Moving away from the goal
    Adverse,
    /// Neither; counts as no signal
    Neutral,
}

impl TrendAlignment {
    /// Compare a direction with a goal
    ///
    /// A stable weight is neutral for lose/gain goals, favorable for maintain.
    #[must_use]
    pub const fn for_goal(direction: WeightDirection, goal: FitnessGoal) -> Self {
        match (goal, direction) {
            (FitnessGoal::Lose, WeightDirection::Losing)
            | (FitnessGoal::Gain, WeightDirection::Gaining)
            | (FitnessGoal::Maintain, WeightDirection::Stable) => Self::Favorable,
            (FitnessGoal::Lose, WeightDirection::Gaining)
            | (FitnessGoal::Gain, WeightDirection::Losing)
            | (FitnessGoal::Maintain, WeightDirection::Losing | WeightDirection::Gaining) => {
                Self::Adverse
            }
            (FitnessGoal::Lose | FitnessGoal::Gain, WeightDirection::Stable) => Self::Neutral,
        }
    }
}

/// Projection of body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightForecast {
    /// Underlying fit with x in days since `window_start`
    pub fit: RegressionFit,
    /// First entry inside the window
    pub window_start: DayKey,
    /// Most recent logged weight
    pub current_weight: f64,
    /// Fitted change per week in kilograms
    pub weekly_change: f64,
    /// Forecast horizon
    pub weeks_ahead: u32,
    /// Weight predicted `weeks_ahead` weeks after today
    pub projected_weight: f64,
    /// Classified direction
    pub direction: WeightDirection,
}

impl WeightForecast {
    /// Alignment of this forecast with a goal
    #[must_use]
    pub const fn alignment(&self, goal: FitnessGoal) -> TrendAlignment {
        TrendAlignment::for_goal(self.direction, goal)
    }
}

/// Weight trend analysis over the configured window
#[derive(Debug, Clone, Default)]
pub struct WeightTrendAnalyzer {
    config: WeightTrendConfig,
}

impl WeightTrendAnalyzer {
    /// Create an analyzer with explicit settings
    #[must_use]
    pub const fn new(config: WeightTrendConfig) -> Self {
        Self { config }
    }

    /// Active settings
    #[must_use]
    pub const fn config(&self) -> &WeightTrendConfig {
        &self.config
    }

    /// Forecast using the configured horizon
    #[must_use]
    pub fn forecast<P>(&self, progress: &P, today: DayKey) -> Option<WeightForecast>
    where
        P: ProgressSource + ?Sized,
    {
        self.forecast_weeks(progress, today, self.config.weeks_ahead)
    }

    /// Forecast `weeks_ahead` weeks past `today`
    ///
    /// Returns `None` when the window holds fewer than two entries or all
    /// entries share one day.
    #[must_use]
    pub fn forecast_weeks<P>(
        &self,
        progress: &P,
        today: DayKey,
        weeks_ahead: u32,
    ) -> Option<WeightForecast>
    where
        P: ProgressSource + ?Sized,
    {
        let window = progress.since(today, self.config.window_days);
        let (first, last) = (window.first()?, window.last()?);
        let window_start = first.date;

        let points: Vec<RegressionPoint> = window
            .iter()
            .map(|p| RegressionPoint::new(window_start.days_until(p.date) as f64, p.weight))
            .collect();

        let fit = match StatisticalAnalyzer::linear_regression(&points) {
            Ok(fit) => fit,
            Err(e) => {
                debug!(entries = window.len(), error = %e, "No weight trend available");
                return None;
            }
        };

        let weekly_change = fit.slope * DAYS_PER_WEEK;
        let horizon_days =
            (window_start.days_until(today) as f64) + f64::from(weeks_ahead) * DAYS_PER_WEEK;

        Some(WeightForecast {
            fit,
            window_start,
            current_weight: last.weight,
            weekly_change,
            weeks_ahead,
            projected_weight: fit.predict(horizon_days),
            direction: WeightDirection::from_weekly_change(
                weekly_change,
                self.config.stability_band_kg_per_week,
            ),
        })
    }

    /// Goal alignment of the current trend, `Neutral` without a trend
    #[must_use]
    pub fn alignment<P>(&self, progress: &P, today: DayKey, goal: FitnessGoal) -> TrendAlignment
    where
        P: ProgressSource + ?Sized,
    {
        self.forecast(progress, today)
            .map_or(TrendAlignment::Neutral, |f| f.alignment(goal))
    }
}
