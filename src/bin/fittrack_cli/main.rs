// ABOUTME: Fittrack CLI - log workouts and weights, check streaks, readiness, and achievements
// ABOUTME: Operates on the local JSON store configured through FITTRACK_* environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Run today's check: streak, readiness, new achievements
//! fittrack-cli status
//!
//! # Log a completed session with two sets of squats
//! fittrack-cli log-workout --intensity 8 --set squat:100x5@2 --set squat:105x3
//!
//! # Log body weight
//! fittrack-cli log-weight 81.4
//!
//! # Project one-rep max four weeks out and time to 140 kg
//! fittrack-cli forecast strength squat --weeks 4 --target 140
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fittrack::config::AppConfig;
use fittrack::dates::DayKey;
use fittrack::engine::FitnessEngine;
use fittrack::logging::LoggingConfig;
use fittrack::models::{ChronicCondition, FitnessGoal, HabitFrequency};
use fittrack::storage::JsonFileStore;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "Fittrack command-line tracker",
    long_about = "Log workouts and body weight, and see streaks, readiness, forecasts, and achievements."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file override (defaults to FITTRACK_DATA_PATH or the platform data dir)
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run today's check and show streak, readiness, and new achievements
    Status,

    /// Log a workout session
    LogWorkout {
        /// Session RPE (0-10)
        #[arg(long)]
        intensity: f64,

        /// Session day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<DayKey>,

        /// Set as `exercise:weightxreps` or `exercise:weightxreps@rir`
        #[arg(long = "set")]
        sets: Vec<String>,

        /// Soreness after the session (0-5)
        #[arg(long)]
        doms: Option<u8>,

        /// Session was not finished
        #[arg(long)]
        incomplete: bool,
    },

    /// Log body weight in kilograms
    LogWeight {
        /// Weight in kilograms
        weight: f64,

        /// Day of the weigh-in (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<DayKey>,
    },

    /// Update the profile
    Profile(ProfileArgs),

    /// Mark a goal complete
    GoalComplete {
        /// Goal identifier
        goal_id: String,
    },

    /// Record a visit to the premium section
    PremiumVisit,

    /// Forecast weight or strength
    Forecast {
        #[command(subcommand)]
        target: ForecastCommand,
    },

    /// List achievements with unlock state and progress
    Achievements,

    /// Remove every unlock and progress counter
    ResetAchievements {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// Weight goal
    #[arg(long, value_parser = helpers::parse::goal)]
    goal: Option<FitnessGoal>,

    /// Smoking frequency
    #[arg(long, value_parser = helpers::parse::habit)]
    smoking: Option<HabitFrequency>,

    /// Alcohol frequency
    #[arg(long, value_parser = helpers::parse::habit)]
    alcohol: Option<HabitFrequency>,

    /// Hemoglobin in g/L
    #[arg(long)]
    hemoglobin: Option<f64>,

    /// Vitamin D in ng/mL
    #[arg(long)]
    vitamin_d: Option<f64>,

    /// Chronic condition (repeatable)
    #[arg(long = "condition", value_parser = helpers::parse::condition)]
    conditions: Vec<ChronicCondition>,

    /// Injury note (repeatable)
    #[arg(long = "injury")]
    injuries: Vec<String>,

    /// Mark the profile complete
    #[arg(long)]
    complete: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ForecastCommand {
    /// Body-weight forecast
    Weight {
        /// Weeks ahead
        #[arg(long)]
        weeks: Option<u32>,
    },

    /// One-rep max forecast for an exercise
    Strength {
        /// Exercise identifier
        exercise: String,

        /// Weeks ahead
        #[arg(long)]
        weeks: Option<u32>,

        /// Target one-rep max in kilograms
        #[arg(long)]
        target: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(path) = cli.data_path {
        config.data_path = path;
    }
    debug!(path = %config.data_path.display(), "Opening store");

    let store = JsonFileStore::open(&config.data_path)?.with_quota(config.storage_quota_bytes);
    let mut engine = FitnessEngine::from_config(store, &config)?;
    let output = helpers::display::Output::new(cli.json);

    match cli.command {
        Command::Status => commands::status::run(&mut engine, &output)?,
        Command::LogWorkout {
            intensity,
            date,
            sets,
            doms,
            incomplete,
        } => commands::log::workout(
            &mut engine,
            &output,
            commands::log::WorkoutInput {
                intensity,
                date,
                sets,
                doms,
                completed: !incomplete,
            },
        )?,
        Command::LogWeight { weight, date } => {
            commands::log::weight(&mut engine, &output, weight, date)?;
        }
        Command::Profile(args) => commands::profile::update(
            &mut engine,
            &output,
            commands::profile::ProfileUpdate {
                goal: args.goal,
                smoking: args.smoking,
                alcohol: args.alcohol,
                hemoglobin: args.hemoglobin,
                vitamin_d: args.vitamin_d,
                conditions: args.conditions,
                injuries: args.injuries,
                complete: args.complete,
            },
        ),
        Command::GoalComplete { goal_id } => {
            commands::usage::goal_complete(&mut engine, &output, &goal_id)?;
        }
        Command::PremiumVisit => commands::usage::premium_visit(&mut engine, &output),
        Command::Forecast { target } => match target {
            ForecastCommand::Weight { weeks } => {
                commands::forecast::weight(&engine, &output, weeks)?;
            }
            ForecastCommand::Strength {
                exercise,
                weeks,
                target,
            } => commands::forecast::strength(&engine, &output, &exercise, weeks, target)?,
        },
        Command::Achievements => commands::achievements::list(&engine, &output)?,
        Command::ResetAchievements { yes } => {
            commands::achievements::reset(&mut engine, &output, yes)?;
        }
    }

    Ok(())
}
