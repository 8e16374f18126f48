// ABOUTME: Integration tests for the fitness engine check cycle
// ABOUTME: Covers streaks and unlocks over several days, quota failures, readiness caching, and reloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{DateTime, Utc};
use common::{day, init_test_logging, memory_engine, weight_series, workout};
use fittrack::constants::{achievement_ids, storage_keys};
use fittrack::dates::DayKey;
use fittrack::engine::FitnessEngine;
use fittrack::errors::ErrorCode;
use fittrack::models::{FitnessGoal, UserProfile};
use fittrack::storage::{InMemoryStore, KeyValueStore};
use std::time::Instant;

fn noon(day: DayKey) -> DateTime<Utc> {
    day.date().and_hms_opt(12, 0, 0).unwrap().and_utc()
}

#[test]
fn test_five_day_cycle_unlocks_holds_and_resets_streak() {
    let mut engine = memory_engine();

    let mut unlocked = Vec::new();
    for offset in 0..3 {
        engine.log_workout(workout(offset, 6.0)).unwrap();
        let report = engine.run_check(&noon(day(offset)));
        assert_eq!(report.today, day(offset));
        assert_eq!(report.streak.current_streak, u32::try_from(offset + 1).unwrap());
        unlocked.extend(report.newly_unlocked);
    }

    assert_eq!(
        unlocked,
        vec![
            achievement_ids::FIRST_WORKOUT,
            achievement_ids::THREE_DAY_STREAK
        ]
    );
    assert_eq!(
        engine.achievements().progress(achievement_ids::TEN_WORKOUTS),
        Some(3)
    );

    // Missed day: the grace day holds the count and unlocks nothing
    let rest_day = engine.run_check(&noon(day(3)));
    assert_eq!(rest_day.streak.current_streak, 3);
    assert_eq!(rest_day.streak.last_workout_date, Some(day(2)));
    assert!(rest_day.newly_unlocked.is_empty());

    // Two days since the last workout: the streak restarts
    engine.log_workout(workout(4, 6.0)).unwrap();
    let resumed = engine.run_check(&noon(day(4)));
    assert_eq!(resumed.streak.current_streak, 1);
    assert_eq!(resumed.streak.longest_streak, 3);
    assert_eq!(resumed.streak.last_workout_date, Some(day(4)));
    assert!(resumed.newly_unlocked.is_empty());
    assert!(engine
        .achievements()
        .is_unlocked(achievement_ids::THREE_DAY_STREAK));
}

#[test]
fn test_repeated_check_same_day_changes_nothing() {
    let mut engine = memory_engine();
    engine.log_workout(workout(0, 6.0)).unwrap();
    let first = engine.run_check(&noon(day(0)));
    let second = engine.run_check(&noon(day(0)));
    assert_eq!(first.streak, second.streak);
    assert!(second.newly_unlocked.is_empty());
}

#[test]
fn test_invalid_workout_is_rejected() {
    let mut engine = memory_engine();
    let err = engine.log_workout(workout(0, 11.0)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(engine.workouts().is_empty());
}

#[test]
fn test_quota_exceeded_does_not_abort_cycle() {
    init_test_logging();
    let mut engine = FitnessEngine::with_defaults(InMemoryStore::with_quota(64));

    engine.log_workout(workout(0, 6.0)).unwrap();
    let report = engine.run_check(&noon(day(0)));

    // In-memory state moves on even though writes were rejected
    assert_eq!(report.streak.current_streak, 1);
    assert_eq!(engine.workouts().len(), 1);
    assert!(engine.achievements().is_unlocked(achievement_ids::FIRST_WORKOUT));
    assert!(engine.store().get(storage_keys::WORKOUTS).unwrap().is_none());
}

#[test]
fn test_state_survives_reload() {
    let mut engine = memory_engine();
    for offset in 0..2 {
        engine.log_workout(workout(offset, 6.0)).unwrap();
        engine.run_check(&noon(day(offset)));
    }
    engine.complete_goal("run_5k", day(1));

    let reloaded = FitnessEngine::with_defaults(engine.into_store());
    assert_eq!(reloaded.streak().current_streak, 2);
    assert_eq!(reloaded.workouts().len(), 2);
    assert_eq!(reloaded.usage().completed_goals(), 1);
    assert!(reloaded.achievements().is_unlocked(achievement_ids::FIRST_WORKOUT));
    assert!(!reloaded.achievements().is_unlocked(achievement_ids::FIRST_GOAL));
}

#[test]
fn test_goal_completion_unlocks_on_next_check() {
    let mut engine = memory_engine();
    assert!(engine.complete_goal("run_5k", day(0)));
    assert!(!engine.complete_goal("run_5k", day(0)));
    let report = engine.run_check(&noon(day(0)));
    assert_eq!(report.newly_unlocked, vec![achievement_ids::FIRST_GOAL]);
}

#[test]
fn test_weight_progress_needs_profile_and_favorable_trend() {
    let mut engine = memory_engine();
    for point in weight_series(90.0, -0.1, 10, 0) {
        engine.log_weight(point).unwrap();
    }
    assert!(!engine.derived_state(day(0)).weight_toward_goal);

    engine.update_profile(UserProfile {
        goal: FitnessGoal::Lose,
        ..UserProfile::default()
    });
    assert!(engine.derived_state(day(0)).weight_toward_goal);

    let report = engine.run_check(&noon(day(0)));
    assert!(report
        .newly_unlocked
        .contains(&achievement_ids::WEIGHT_PROGRESS.to_owned()));
}

#[test]
fn test_privacy_guardian_after_thirty_days() {
    let mut engine = memory_engine();
    engine.run_check(&noon(day(0)));
    let report = engine.run_check(&noon(day(30)));
    assert_eq!(report.newly_unlocked, vec![achievement_ids::PRIVACY_GUARDIAN]);

    let mut visitor = memory_engine();
    visitor.run_check(&noon(day(0)));
    visitor.visit_premium_section();
    assert!(visitor.run_check(&noon(day(30))).newly_unlocked.is_empty());
}

#[test]
fn test_readiness_unavailable_without_data() {
    let mut engine = memory_engine();
    assert!(engine.readiness(day(0), Instant::now()).is_none());
}

#[test]
fn test_readiness_cache_cleared_on_new_data() {
    let mut engine = memory_engine();
    let now = Instant::now();
    engine.log_workout(workout(0, 5.0)).unwrap();

    let first = engine.readiness(day(0), now).unwrap();
    let cached = engine.readiness(day(0), now).unwrap();
    assert_eq!(first, cached);

    // A very hard, sore session lowers readiness immediately
    engine.log_workout(workout(0, 10.0).with_doms(5)).unwrap();
    let after = engine.readiness(day(0), now).unwrap();
    assert!(after.score < first.score);
    assert!((1..=10).contains(&after.score));
}

#[test]
fn test_forecasts_through_engine() {
    let mut engine = memory_engine();
    for point in weight_series(80.0, 0.05, 14, 0) {
        engine.log_weight(point).unwrap();
    }
    let forecast = engine.weight_forecast(day(0), 2).unwrap();
    assert_eq!(forecast.weeks_ahead, 2);
    assert!(forecast.projected_weight > forecast.current_weight);

    engine.log_workout(common::squat_session(-14, 100.0, 5)).unwrap();
    engine.log_workout(common::squat_session(-7, 102.5, 5)).unwrap();
    engine.log_workout(common::squat_session(0, 105.0, 5)).unwrap();
    assert_eq!(engine.one_rep_max_history("squat").len(), 3);
    assert!(engine.one_rep_max_forecast("squat", 4).is_some());
    assert!(engine.one_rep_max_forecast("deadlift", 4).is_none());
}

#[test]
fn test_reset_and_notifications() {
    let mut engine = memory_engine();
    engine.log_workout(workout(0, 6.0)).unwrap();
    engine.run_check(&noon(day(0)));

    assert_eq!(engine.achievements().pending_notifications().len(), 1);
    assert!(engine.mark_notified(achievement_ids::FIRST_WORKOUT));
    assert!(engine.achievements().pending_notifications().is_empty());

    engine.reset_achievements();
    assert!(engine.achievements().unlocks().is_empty());
    // Conditions still hold, so the next check unlocks again
    let report = engine.run_check(&noon(day(0)));
    assert_eq!(report.newly_unlocked, vec![achievement_ids::FIRST_WORKOUT]);
}
