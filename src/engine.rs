// ABOUTME: Check-cycle engine tying trackers, streak, readiness, forecasts, and achievements together
// ABOUTME: Owns the store and the readiness cache; all state flows through this context object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitness Engine
//!
//! One engine per store. A check cycle (on app start or after logging a
//! workout) advances the streak, derives the achievement inputs, and stamps
//! any new unlocks. Readiness is computed on demand and cached per day.

use crate::cache::{CacheConfig, TtlCache};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::storage::KeyValueStore;
use crate::trackers::{
    AchievementTracker, ProfileStore, ProgressLog, StreakTracker, UsageTracker, WorkoutLog,
};
use chrono::{DateTime, TimeZone, Utc};
use fittrack_core::dates::{local_date_key, DayKey};
use fittrack_core::models::{ProgressPoint, StreakState, UserProfile, WorkoutRecord};
use fittrack_intelligence::achievements::{AchievementCatalog, DerivedState};
use fittrack_intelligence::config::IntelligenceConfig;
use fittrack_intelligence::readiness::{ReadinessAssessment, ReadinessFactors, ReadinessScorer};
use fittrack_intelligence::sources::{ProfileSource, WorkoutSource};
use fittrack_intelligence::strength_progress::{
    OneRepMaxForecast, OneRepMaxPoint, StrengthProgressAnalyzer,
};
use fittrack_intelligence::weight_trend::{TrendAlignment, WeightForecast, WeightTrendAnalyzer};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of one check cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// Local day the check ran for
    pub today: DayKey,
    /// Streak after the check
    pub streak: StreakState,
    /// Achievements unlocked by this check, in check order
    pub newly_unlocked: Vec<String>,
}

/// Engine over a key-value store
pub struct FitnessEngine<S: KeyValueStore> {
    store: S,
    config: IntelligenceConfig,
    workouts: WorkoutLog,
    progress: ProgressLog,
    profile: ProfileStore,
    usage: UsageTracker,
    streak: StreakTracker,
    achievements: AchievementTracker,
    readiness_cache: TtlCache<DayKey, Option<ReadinessAssessment>>,
}

impl<S: KeyValueStore> FitnessEngine<S> {
    /// Load every tracker from `store`
    #[must_use]
    pub fn new(
        store: S,
        config: IntelligenceConfig,
        catalog: AchievementCatalog,
        cache: CacheConfig,
    ) -> Self {
        let engine = Self {
            workouts: WorkoutLog::load(&store),
            progress: ProgressLog::load(&store),
            profile: ProfileStore::load(&store),
            usage: UsageTracker::load(&store),
            streak: StreakTracker::load(&store),
            achievements: AchievementTracker::load(&store, catalog),
            readiness_cache: TtlCache::new(cache),
            config,
            store,
        };
        debug!(
            workouts = engine.workouts.len(),
            weights = engine.progress.len(),
            streak = engine.streak.state().current_streak,
            "Engine loaded"
        );
        engine
    }

    /// Engine with defaults for everything but the store
    #[must_use]
    pub fn with_defaults(store: S) -> Self {
        Self::new(
            store,
            IntelligenceConfig::default(),
            AchievementCatalog::default(),
            CacheConfig::default(),
        )
    }

    /// Engine configured from the environment
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid scoring override or an unreadable catalog
    pub fn from_config(store: S, app: &AppConfig) -> AppResult<Self> {
        Ok(Self::new(
            store,
            app.intelligence_config()?,
            app.achievement_catalog()?,
            app.cache_config(),
        ))
    }

    /// Append a workout
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range values
    pub fn log_workout(&mut self, record: WorkoutRecord) -> AppResult<()> {
        self.workouts.append(&mut self.store, record)?;
        self.readiness_cache.clear();
        Ok(())
    }

    /// Append a weight entry
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive weight
    pub fn log_weight(&mut self, point: ProgressPoint) -> AppResult<()> {
        self.progress.record(&mut self.store, point)?;
        self.readiness_cache.clear();
        Ok(())
    }

    /// Replace the profile
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.profile.save(&mut self.store, profile);
        self.readiness_cache.clear();
    }

    /// Mark a goal complete; returns `false` if it already was
    pub fn complete_goal(&mut self, goal_id: &str, day: DayKey) -> bool {
        self.usage.complete_goal(&mut self.store, goal_id, day)
    }

    /// Record a visit to the premium section
    pub fn visit_premium_section(&mut self) {
        self.usage.visit_premium(&mut self.store);
    }

    /// Run one check cycle at `now`, using the timestamp's own calendar day
    pub fn run_check<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> CheckReport {
        let today = local_date_key(now);
        let stamp = now.with_timezone(&Utc);

        self.usage.touch(&mut self.store, today);
        let has_workout_today = self.workouts.has_completed_on(today);
        let streak = self
            .streak
            .check(&mut self.store, today, has_workout_today);

        let derived = self.derived_state(today);
        let newly_unlocked = self
            .achievements
            .check_all(&mut self.store, &derived, stamp);

        info!(
            today = %today,
            streak = streak.current_streak,
            unlocked = newly_unlocked.len(),
            "Check cycle complete"
        );
        CheckReport {
            today,
            streak,
            newly_unlocked,
        }
    }

    /// Inputs to the achievement rules as of `today`
    #[must_use]
    pub fn derived_state(&self, today: DayKey) -> DerivedState {
        let weight_toward_goal = self.profile.profile().is_some_and(|profile| {
            self.weight_analyzer()
                .alignment(&self.progress, today, profile.goal)
                == TrendAlignment::Favorable
        });
        DerivedState {
            profile_complete: self.profile.is_complete(),
            total_workouts: u32::try_from(self.workouts.completed_count()).unwrap_or(u32::MAX),
            current_streak: self.streak.state().current_streak,
            completed_goals: self.usage.completed_goals(),
            days_since_first_use: self.usage.ledger().days_since_first_use(today),
            premium_visited: self.usage.ledger().premium_visited,
            weight_toward_goal,
        }
    }

    /// Readiness for `today`, cached until the TTL lapses or data changes
    ///
    /// `None` when there are no workouts and no weight entries.
    pub fn readiness(&mut self, today: DayKey, now: Instant) -> Option<ReadinessAssessment> {
        if let Some(cached) = self.readiness_cache.get(&today, now) {
            debug!(today = %today, "Readiness served from cache");
            return cached;
        }
        let assessment = ReadinessFactors::gather(
            &self.workouts,
            &self.progress,
            &self.profile,
            today,
            &self.config,
        )
        .map(|factors| ReadinessScorer::from_config(&self.config).assess(&factors));
        self.readiness_cache.insert(today, assessment.clone(), now);
        assessment
    }

    /// Body-weight forecast `weeks_ahead` weeks past `today`
    #[must_use]
    pub fn weight_forecast(&self, today: DayKey, weeks_ahead: u32) -> Option<WeightForecast> {
        self.weight_analyzer()
            .forecast_weeks(&self.progress, today, weeks_ahead)
    }

    /// Session-best one-rep max history for an exercise
    #[must_use]
    pub fn one_rep_max_history(&self, exercise: &str) -> Vec<OneRepMaxPoint> {
        self.strength_analyzer()
            .one_rep_max_history(&self.workouts, exercise)
    }

    /// One-rep max forecast for an exercise
    #[must_use]
    pub fn one_rep_max_forecast(
        &self,
        exercise: &str,
        weeks_ahead: u32,
    ) -> Option<OneRepMaxForecast> {
        let analyzer = self.strength_analyzer();
        let history = analyzer.one_rep_max_history(&self.workouts, exercise);
        analyzer.predict_future_one_rm(&history, weeks_ahead)
    }

    /// Remove every unlock and progress counter
    pub fn reset_achievements(&mut self) {
        self.achievements.reset(&mut self.store);
    }

    /// Mark an unlock as shown
    pub fn mark_notified(&mut self, id: &str) -> bool {
        self.achievements.mark_notified(&mut self.store, id)
    }

    /// Scoring configuration
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Workout log
    #[must_use]
    pub const fn workouts(&self) -> &WorkoutLog {
        &self.workouts
    }

    /// Weight log
    #[must_use]
    pub const fn progress(&self) -> &ProgressLog {
        &self.progress
    }

    /// Profile store
    #[must_use]
    pub const fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    /// Usage ledger
    #[must_use]
    pub const fn usage(&self) -> &UsageTracker {
        &self.usage
    }

    /// Current streak
    #[must_use]
    pub const fn streak(&self) -> StreakState {
        self.streak.state()
    }

    /// Achievement tracker
    #[must_use]
    pub const fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    /// Mutable achievement tracker together with the store it persists to
    pub fn achievements_mut(&mut self) -> (&mut AchievementTracker, &mut S) {
        (&mut self.achievements, &mut self.store)
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Release the store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn weight_analyzer(&self) -> WeightTrendAnalyzer {
        WeightTrendAnalyzer::new(self.config.trend.clone())
    }

    fn strength_analyzer(&self) -> StrengthProgressAnalyzer {
        StrengthProgressAnalyzer::new(self.config.strength.clone())
    }
}
