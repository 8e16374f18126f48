// ABOUTME: Daily workout streak state machine with a one-day grace period
// ABOUTME: Advances persisted streak state once per check cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streak counting
//!
//! A streak is the number of consecutive calendar days with a completed
//! workout. Missing a single day holds the count; a gap of two or more days
//! resets it.

use fittrack_core::dates::{day_diff, DayKey};
use fittrack_core::models::StreakState;
use tracing::{debug, warn};

/// Stateless streak transition function
pub struct StreakCounter;

impl StreakCounter {
    /// Apply one check cycle for `today`
    ///
    /// `last_workout_date` only moves forward when `has_workout_today` is
    /// true, so repeated calls on the same day are idempotent and a later
    /// workout on that day still counts.
    #[must_use]
    pub fn advance(today: DayKey, has_workout_today: bool, state: &StreakState) -> StreakState {
        let Some(last) = state.last_workout_date else {
            return Self::restart(today, has_workout_today, state);
        };

        if today < last {
            warn!(
                today = %today,
                last_workout = %last,
                "Streak check date is before the last workout; clock moved backwards"
            );
            return *state;
        }

        let mut next = match day_diff(last, today) {
            0 => *state,
            1 if has_workout_today => StreakState {
                last_workout_date: Some(today),
                current_streak: state.current_streak.saturating_add(1),
                longest_streak: state.longest_streak,
            },
            // grace day: hold the count
            1 => *state,
            _ => Self::restart(today, has_workout_today, state),
        };
        next.longest_streak = next.longest_streak.max(next.current_streak);

        debug!(
            today = %today,
            current = next.current_streak,
            longest = next.longest_streak,
            "Streak advanced"
        );
        next
    }

    /// Fold a sequence of daily checks starting from the empty state
    #[must_use]
    pub fn replay<I>(days: I) -> StreakState
    where
        I: IntoIterator<Item = (DayKey, bool)>,
    {
        days.into_iter()
            .fold(StreakState::default(), |state, (day, worked_out)| {
                Self::advance(day, worked_out, &state)
            })
    }

    fn restart(today: DayKey, has_workout_today: bool, previous: &StreakState) -> StreakState {
        if has_workout_today {
            StreakState {
                last_workout_date: Some(today),
                current_streak: 1,
                longest_streak: previous.longest_streak.max(1),
            }
        } else {
            StreakState {
                last_workout_date: previous.last_workout_date,
                current_streak: 0,
                longest_streak: previous.longest_streak,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> DayKey {
        DayKey::from_ymd(2024, 5, n).unwrap()
    }

    #[test]
    fn test_first_check_without_workout_stays_empty() {
        let state = StreakCounter::advance(day(1), false, &StreakState::default());
        assert_eq!(state, StreakState::default());
    }

    #[test]
    fn test_long_gap_without_workout_keeps_last_date() {
        let state = StreakCounter::replay([(day(1), true), (day(2), true), (day(6), false)]);
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.last_workout_date, Some(day(2)));
        assert_eq!(state.longest_streak, 2);
    }

    #[test]
    fn test_backwards_clock_leaves_state() {
        let state = StreakCounter::replay([(day(10), true)]);
        assert_eq!(StreakCounter::advance(day(8), true, &state), state);
    }
}
