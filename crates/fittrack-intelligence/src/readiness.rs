// ABOUTME: Readiness scoring from fatigue, weight-trend adherence, consistency, recovery, and biology
// ABOUTME: Gathers factors from collaborator sources and applies a single additive scoring table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Readiness Scorer Module
//!
//! Produces a 1-10 readiness score for today's training:
//!
//! - **Fatigue**: mean session RPE over the last few days
//! - **Adherence**: weight trend against the stated goal
//! - **Consistency**: distinct workout days in the last week against a goal target
//! - **Recovery**: a very hard or very sore last session
//! - **Biology**: habits, blood markers, and chronic conditions
//!
//! Factor adjustments are whole points; the biological penalty is subtracted
//! unrounded and only the final clamped value is rounded.

use crate::config::{
    BiologicalPenaltyConfig, HabitPenalties, IntelligenceConfig, ReadinessConfig,
    READINESS_SCORE_CEILING, READINESS_SCORE_FLOOR,
};
use crate::sources::{ProfileSource, ProgressSource, WorkoutSource};
use crate::weight_trend::{TrendAlignment, WeightTrendAnalyzer};
use fittrack_core::dates::DayKey;
use fittrack_core::models::{FitnessGoal, HabitFrequency, UserProfile, WorkoutRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Weekly workout-day coverage against the goal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyStatus {
    /// Fewer distinct days than the target
    Insufficient,
    /// Target met or exceeded
    Sufficient,
}

/// Inputs to the readiness score, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessFactors {
    /// Mean session RPE over the fatigue window, `None` without sessions
    pub fatigue: Option<f64>,
    /// Weight trend relative to the goal
    pub adherence: TrendAlignment,
    /// Weekly workout-day coverage
    pub consistency: ConsistencyStatus,
    /// Whether the last session calls for recovery
    pub recovery_flag: bool,
    /// Summed, capped profile penalty
    pub biological_penalty: f64,
}

impl ReadinessFactors {
    /// Read every factor from the collaborators for `today`
    ///
    /// Returns `None` when there are neither workouts nor weight entries.
    #[must_use]
    pub fn gather<W, P, R>(
        workouts: &W,
        progress: &P,
        profile: &R,
        today: DayKey,
        config: &IntelligenceConfig,
    ) -> Option<Self>
    where
        W: WorkoutSource + ?Sized,
        P: ProgressSource + ?Sized,
        R: ProfileSource + ?Sized,
    {
        if workouts.all().is_empty() && progress.entries().is_empty() {
            debug!(today = %today, "No workouts or weight entries; readiness unavailable");
            return None;
        }

        let profile = profile.profile();
        let goal = profile.map_or(FitnessGoal::default(), |p| p.goal);

        let fatigue = Self::fatigue(workouts.all(), today, config.readiness.fatigue.window_days);

        let adherence =
            WeightTrendAnalyzer::new(config.trend.clone()).alignment(progress, today, goal);

        let workout_days = Self::distinct_workout_days(
            workouts.all(),
            today,
            config.consistency.window_days,
        );
        let consistency = if workout_days >= config.consistency.target_for(goal) {
            ConsistencyStatus::Sufficient
        } else {
            ConsistencyStatus::Insufficient
        };

        let recovery_flag = Self::needs_recovery(workouts.all(), today, &config.readiness);

        let biological_penalty =
            profile.map_or(0.0, |p| Self::biological_penalty(p, &config.biological));

        let factors = Self {
            fatigue,
            adherence,
            consistency,
            recovery_flag,
            biological_penalty,
        };
        debug!(
            today = %today,
            fatigue = ?factors.fatigue,
            adherence = ?factors.adherence,
            workout_days,
            recovery = factors.recovery_flag,
            biological_penalty = factors.biological_penalty,
            "Gathered readiness factors"
        );
        Some(factors)
    }

    /// Summed profile penalty, capped at `config.cap`
    #[must_use]
    pub fn biological_penalty(profile: &UserProfile, config: &BiologicalPenaltyConfig) -> f64 {
        let mut penalty = habit_penalty(config.smoking, profile.smoking)
            + habit_penalty(config.alcohol, profile.alcohol);

        if profile
            .hemoglobin
            .is_some_and(|h| h < config.hemoglobin_floor)
        {
            penalty += config.low_hemoglobin_penalty;
        }
        if profile.vitamin_d.is_some_and(|d| d < config.vitamin_d_floor) {
            penalty += config.low_vitamin_d_penalty;
        }

        let conditions = profile
            .chronic_conditions
            .iter()
            .filter(|c| c.affects_readiness())
            .count();
        penalty += config.chronic_condition_penalty * conditions as f64;

        penalty.clamp(0.0, config.cap)
    }

    fn in_window(date: DayKey, today: DayKey, window_days: u32) -> bool {
        let age = date.days_until(today);
        (0..i64::from(window_days)).contains(&age)
    }

    fn fatigue(workouts: &[WorkoutRecord], today: DayKey, window_days: u32) -> Option<f64> {
        let recent: Vec<f64> = workouts
            .iter()
            .filter(|w| w.completed && Self::in_window(w.date, today, window_days))
            .map(|w| w.intensity)
            .collect();
        if recent.is_empty() {
            return None;
        }
        Some(recent.iter().sum::<f64>() / recent.len() as f64)
    }

    fn distinct_workout_days(workouts: &[WorkoutRecord], today: DayKey, window_days: u32) -> u32 {
        let days: BTreeSet<DayKey> = workouts
            .iter()
            .filter(|w| w.completed && Self::in_window(w.date, today, window_days))
            .map(|w| w.date)
            .collect();
        u32::try_from(days.len()).unwrap_or(u32::MAX)
    }

    fn needs_recovery(workouts: &[WorkoutRecord], today: DayKey, config: &ReadinessConfig) -> bool {
        let Some(last) = workouts
            .iter()
            .filter(|w| w.completed && w.date <= today)
            .max_by_key(|w| w.date)
        else {
            return false;
        };
        if last.date.days_until(today) > i64::from(config.recovery.window_days) {
            return false;
        }
        last.intensity >= config.recovery.rpe_threshold
            || last
                .doms
                .is_some_and(|doms| doms >= config.recovery.doms_threshold)
    }
}

fn habit_penalty(penalties: HabitPenalties, frequency: HabitFrequency) -> f64 {
    match frequency {
        HabitFrequency::Never => 0.0,
        HabitFrequency::Occasionally => penalties.occasionally,
        HabitFrequency::Weekly => penalties.weekly,
        HabitFrequency::Daily => penalties.daily,
    }
}

/// Which factor produced an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessComponent {
    /// Recent session RPE
    Fatigue,
    /// Weight trend versus goal
    Adherence,
    /// Weekly workout days
    Consistency,
    /// Hard or sore last session
    Recovery,
    /// Profile penalty
    Biological,
}

/// One signed change applied to the base score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessAdjustment {
    /// Source factor
    pub component: ReadinessComponent,
    /// Signed change in points
    pub delta: f64,
    /// Short human-readable reason
    pub reason: String,
}

/// Recommended training intensity for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingIntensity {
    /// Score 8 or higher
    High,
    /// Score 5-7
    Moderate,
    /// Score 3-4
    Light,
    /// Score below 3
    Rest,
}

impl TrainingIntensity {
    /// Map a final score to an intensity
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            8.. => Self::High,
            5..=7 => Self::Moderate,
            3..=4 => Self::Light,
            _ => Self::Rest,
        }
    }
}

/// Full readiness result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessAssessment {
    /// Final score, integer in the configured bounds
    pub score: u8,
    /// Unclamped, unrounded score
    pub raw_score: f64,
    /// Applied adjustments in evaluation order
    pub adjustments: Vec<ReadinessAdjustment>,
    /// Signals that could not be scored
    pub limitations: Vec<String>,
    /// Recommended intensity for the score
    pub intensity: TrainingIntensity,
}

/// Applies the readiness table to gathered factors
#[derive(Debug, Clone)]
pub struct ReadinessScorer {
    config: ReadinessConfig,
    penalty_cap: f64,
}

impl Default for ReadinessScorer {
    fn default() -> Self {
        Self::new(
            ReadinessConfig::default(),
            BiologicalPenaltyConfig::default().cap,
        )
    }
}

impl ReadinessScorer {
    /// Create a scorer from a table and a biological penalty cap
    #[must_use]
    pub const fn new(config: ReadinessConfig, penalty_cap: f64) -> Self {
        Self {
            config,
            penalty_cap,
        }
    }

    /// Create a scorer from the full intelligence configuration
    #[must_use]
    pub fn from_config(config: &IntelligenceConfig) -> Self {
        Self::new(config.readiness.clone(), config.biological.cap)
    }

    /// Integer score in `[min_score, max_score]`
    #[must_use]
    pub fn score(&self, factors: &ReadinessFactors) -> u8 {
        self.assess(factors).score
    }

    /// Score with the adjustment breakdown
    #[must_use]
    pub fn assess(&self, factors: &ReadinessFactors) -> ReadinessAssessment {
        let cfg = &self.config;
        let mut adjustments = Vec::new();
        let mut limitations = Vec::new();

        match factors.fatigue {
            Some(fatigue) if fatigue > cfg.fatigue.high => adjustments.push(adjustment(
                ReadinessComponent::Fatigue,
                -cfg.fatigue.high_penalty,
                format!("Recent sessions averaged RPE {fatigue:.1}"),
            )),
            Some(fatigue) if fatigue < cfg.fatigue.low => adjustments.push(adjustment(
                ReadinessComponent::Fatigue,
                cfg.fatigue.low_bonus,
                format!("Recent sessions were light (RPE {fatigue:.1})"),
            )),
            Some(_) => {}
            None => limitations
                .push("No completed sessions in the fatigue window; fatigue not scored".into()),
        }

        match factors.adherence {
            TrendAlignment::Adverse => adjustments.push(adjustment(
                ReadinessComponent::Adherence,
                -cfg.adverse_trend_penalty,
                "Weight trend is moving away from the goal".into(),
            )),
            TrendAlignment::Favorable => adjustments.push(adjustment(
                ReadinessComponent::Adherence,
                cfg.favorable_trend_bonus,
                "Weight trend supports the goal".into(),
            )),
            TrendAlignment::Neutral => {
                limitations.push("Weight trend gives no signal for the goal".into());
            }
        }

        adjustments.push(match factors.consistency {
            ConsistencyStatus::Insufficient => adjustment(
                ReadinessComponent::Consistency,
                -cfg.insufficient_consistency_penalty,
                "Fewer workout days this week than the goal needs".into(),
            ),
            ConsistencyStatus::Sufficient => adjustment(
                ReadinessComponent::Consistency,
                cfg.sufficient_consistency_bonus,
                "Weekly workout target met".into(),
            ),
        });

        if factors.recovery_flag {
            adjustments.push(adjustment(
                ReadinessComponent::Recovery,
                -cfg.recovery_penalty,
                "Last session was very hard or left heavy soreness".into(),
            ));
        }

        let penalty = if factors.biological_penalty.is_finite() {
            factors.biological_penalty.clamp(0.0, self.penalty_cap)
        } else {
            0.0
        };
        if penalty > 0.0 {
            adjustments.push(adjustment(
                ReadinessComponent::Biological,
                -penalty,
                format!("Lifestyle and health markers ({penalty:.2})"),
            ));
        }

        let raw_score = cfg.base_score + adjustments.iter().map(|a| a.delta).sum::<f64>();
        let score = Self::finalize(raw_score, cfg.min_score, cfg.max_score);

        ReadinessAssessment {
            score,
            raw_score,
            adjustments,
            limitations,
            intensity: TrainingIntensity::from_score(score),
        }
    }

    /// Clamp into the configured bounds, themselves held inside 1-10
    fn finalize(raw: f64, min: f64, max: f64) -> u8 {
        let floor = if min.is_finite() {
            min.clamp(READINESS_SCORE_FLOOR, READINESS_SCORE_CEILING)
        } else {
            READINESS_SCORE_FLOOR
        };
        let ceiling = if max.is_finite() {
            max.clamp(floor, READINESS_SCORE_CEILING)
        } else {
            READINESS_SCORE_CEILING
        };
        if raw.is_nan() {
            return floor.round() as u8;
        }
        raw.clamp(floor, ceiling).round() as u8
    }
}

fn adjustment(component: ReadinessComponent, delta: f64, reason: String) -> ReadinessAdjustment {
    ReadinessAdjustment {
        component,
        delta,
        reason,
    }
}
