// ABOUTME: Criterion benchmarks for fittrack intelligence algorithms
// ABOUTME: Measures regression, forecasting, readiness scoring, and streak replay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for intelligence algorithms.
//!
//! Measures the per-check cost of readiness gathering and scoring, and how
//! regression and forecasting scale with log size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack::dates::DayKey;
use fittrack::intelligence::config::IntelligenceConfig;
use fittrack::intelligence::readiness::{ReadinessFactors, ReadinessScorer};
use fittrack::intelligence::statistical_analysis::{RegressionPoint, StatisticalAnalyzer};
use fittrack::intelligence::streak::StreakCounter;
use fittrack::intelligence::strength_progress::StrengthProgressAnalyzer;
use fittrack::intelligence::weight_trend::WeightTrendAnalyzer;
use fittrack::models::{ExerciseSet, FitnessGoal, ProgressPoint, UserProfile, WorkoutRecord};

const DATASET_SIZES: [usize; 3] = [14, 90, 365];

fn end_day() -> DayKey {
    DayKey::from_ymd(2025, 12, 31).unwrap_or_else(|| unreachable!())
}

fn day_before_end(days_back: usize) -> DayKey {
    let back = i64::try_from(days_back).unwrap_or(i64::MAX);
    end_day()
        .offset_days(-back)
        .unwrap_or_else(|| unreachable!())
}

/// Daily workouts ending on `end_day()`, oldest first
#[allow(clippy::cast_precision_loss)]
fn generate_workouts(count: usize) -> Vec<WorkoutRecord> {
    (0..count)
        .rev()
        .map(|back| {
            let index = count - back;
            let intensity = 4.0 + (index % 6) as f64;
            let weight = 80.0 + (index / 7) as f64 * 2.5;
            WorkoutRecord::completed(day_before_end(back), intensity)
                .with_set(ExerciseSet::new("squat", weight, 5))
                .with_set(ExerciseSet::new("squat", weight + 5.0, 3).with_rir(2))
        })
        .collect()
}

/// Daily weigh-ins trending down, oldest first
#[allow(clippy::cast_precision_loss)]
fn generate_weights(count: usize) -> Vec<ProgressPoint> {
    (0..count)
        .rev()
        .map(|back| {
            let index = (count - back) as f64;
            let noise = ((index * 7.0) % 5.0 - 2.0) * 0.1;
            ProgressPoint::new(day_before_end(back), 0.05f64.mul_add(-index, 90.0) + noise)
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn bench_linear_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_regression");

    for size in DATASET_SIZES {
        let points: Vec<RegressionPoint> = generate_weights(size)
            .iter()
            .enumerate()
            .map(|(i, p)| RegressionPoint::new(f64::from(i as u32), p.weight))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| StatisticalAnalyzer::linear_regression(black_box(points)));
        });
    }

    group.finish();
}

fn bench_forecasts(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecasts");
    let weights = generate_weights(365);
    let workouts = generate_workouts(365);
    let weight_analyzer = WeightTrendAnalyzer::default();
    let strength_analyzer = StrengthProgressAnalyzer::default();

    group.bench_function("weight_trend_365_days", |b| {
        b.iter(|| weight_analyzer.forecast(black_box(&weights), end_day()));
    });

    group.bench_function("one_rep_max_history_365_sessions", |b| {
        b.iter(|| strength_analyzer.one_rep_max_history(black_box(&workouts), "squat"));
    });

    let history = strength_analyzer.one_rep_max_history(&workouts, "squat");
    group.bench_function("one_rep_max_forecast_365_sessions", |b| {
        b.iter(|| strength_analyzer.predict_future_one_rm(black_box(&history), 4));
    });

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_readiness(c: &mut Criterion) {
    let mut group = c.benchmark_group("readiness");
    let config = IntelligenceConfig::default();
    let scorer = ReadinessScorer::from_config(&config);
    let profile = UserProfile {
        goal: FitnessGoal::Lose,
        completed: true,
        ..UserProfile::default()
    };

    for size in DATASET_SIZES {
        let workouts = generate_workouts(size);
        let weights = generate_weights(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("gather_and_assess", size),
            &(workouts, weights),
            |b, (workouts, weights)| {
                b.iter(|| {
                    ReadinessFactors::gather(workouts, weights, &profile, end_day(), &config)
                        .map(|factors| scorer.assess(&factors))
                });
            },
        );
    }

    group.finish();
}

fn bench_streak_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("streak");
    // Every fifth day skipped, every thirteenth a two-day gap
    let days: Vec<(DayKey, bool)> = (0..365)
        .rev()
        .map(|back| (day_before_end(back), back % 5 != 0 && back % 13 != 0))
        .collect();

    group.throughput(Throughput::Elements(365));
    group.bench_function("replay_one_year", |b| {
        b.iter(|| StreakCounter::replay(black_box(days.iter().copied())));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_linear_regression,
    bench_forecasts,
    bench_readiness,
    bench_streak_replay
);
criterion_main!(benches);
