// ABOUTME: Tests for the consecutive-day streak counter and its persisted tracker
// ABOUTME: Covers grace days, resets, same-day idempotency, and the longest-streak mark
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::day;
use fittrack::constants::storage_keys;
use fittrack::intelligence::streak::StreakCounter;
use fittrack::models::StreakState;
use fittrack::storage::{InMemoryStore, KeyValueStore};
use fittrack::trackers::StreakTracker;

#[test]
fn test_consecutive_days_count_up() {
    let state = StreakCounter::replay((0..5).map(|i| (day(i), true)));
    assert_eq!(state.current_streak, 5);
    assert_eq!(state.longest_streak, 5);
    assert_eq!(state.last_workout_date, Some(day(4)));
}

#[test]
fn test_single_missed_day_is_forgiven() {
    let mut state = StreakCounter::replay([(day(0), true), (day(1), true)]);
    // Day 2 has no workout but the streak survives
    state = StreakCounter::advance(day(2), false, &state);
    assert_eq!(state.current_streak, 2);
    assert_eq!(state.last_workout_date, Some(day(1)));
}

#[test]
fn test_gap_of_more_than_one_day_restarts() {
    // Workouts on days 1, 2, 3, nothing on day 4, check on day 5
    let state = StreakCounter::replay([(day(1), true), (day(2), true), (day(3), true)]);
    assert_eq!(state.current_streak, 3);

    let after_gap = StreakCounter::advance(day(5), true, &state);
    assert_eq!(after_gap.current_streak, 1);
    assert_eq!(after_gap.last_workout_date, Some(day(5)));
    assert_eq!(after_gap.longest_streak, 3);
}

#[test]
fn test_gap_without_workout_clears_current_streak() {
    let state = StreakCounter::replay([(day(0), true), (day(1), true)]);
    let after_gap = StreakCounter::advance(day(5), false, &state);
    assert_eq!(after_gap.current_streak, 0);
    assert_eq!(after_gap.last_workout_date, Some(day(1)));
    assert_eq!(after_gap.longest_streak, 2);
}

#[test]
fn test_same_day_check_is_idempotent() {
    let state = StreakCounter::replay([(day(0), true), (day(1), true)]);
    let again = StreakCounter::advance(day(1), true, &state);
    assert_eq!(again, state);
    let without_flag = StreakCounter::advance(day(1), false, &state);
    assert_eq!(without_flag, state);
}

#[test]
fn test_clock_moving_backwards_leaves_state_unchanged() {
    let state = StreakCounter::replay([(day(3), true)]);
    let rewound = StreakCounter::advance(day(1), true, &state);
    assert_eq!(rewound, state);
}

#[test]
fn test_first_check_without_workout_starts_empty() {
    let state = StreakCounter::advance(day(0), false, &StreakState::default());
    assert_eq!(state.current_streak, 0);
    assert!(state.last_workout_date.is_none());
}

#[test]
fn test_tracker_persists_and_reloads() {
    let mut store = InMemoryStore::new();
    let mut tracker = StreakTracker::load(&store);
    tracker.check(&mut store, day(0), true);
    tracker.check(&mut store, day(1), true);

    let reloaded = StreakTracker::load(&store);
    assert_eq!(reloaded.state().current_streak, 2);
    assert_eq!(reloaded.state().last_workout_date, Some(day(1)));
}

#[test]
fn test_tracker_recovers_from_malformed_state() {
    let mut store = InMemoryStore::new();
    store.set(storage_keys::STREAK, "{not json").unwrap();

    let mut tracker = StreakTracker::load(&store);
    assert_eq!(tracker.state(), StreakState::default());

    let state = tracker.check(&mut store, day(0), true);
    assert_eq!(state.current_streak, 1);
    let stored = store.get(storage_keys::STREAK).unwrap().unwrap();
    assert!(stored.contains("\"currentStreak\":1"));
}
