// ABOUTME: RunFuel CLI - command-line front end for the RunFuel nutrition and training API
// ABOUTME: Handles sign-in, food logging, AI analysis, progress, training, and target previews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Sign in (the session is kept in the platform data directory)
//! runfuel-cli login --email runner@example.com --password yourpassword
//!
//! # Today's calories
//! runfuel-cli today
//!
//! # Analyze a meal and save it as lunch
//! runfuel-cli analyze --photo lunch.jpg --text "with olive oil" --meal lunch --confirm
//!
//! # Log a food by hand
//! runfuel-cli log --meal snack --name "Banana" --calories 105
//!
//! # Progress and training
//! runfuel-cli progress streak
//! runfuel-cli training week
//!
//! # Preview energy targets without an account
//! runfuel-cli targets --age 30 --gender male --height 180 --weight 75 \
//!     --frequency 3-4 --intensity moderate --goal deficit
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use runfuel_client::config::ClientConfig;
use runfuel_client::logging::LoggingConfig;
use runfuel_client::session::{FileSessionStorage, SessionEvent, SignOutReason};
use runfuel_client::{ApiClient, SessionStore};
use runfuel_core::errors::AppResult;
use runfuel_core::models::MealType;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use tracing::debug;

use commands::targets::TargetArgs;

#[derive(Parser)]
#[command(
    name = "runfuel-cli",
    about = "RunFuel command-line client",
    long_about = "Log meals, review AI food analysis, and follow progress and training plans from the terminal.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session file override
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Sign in with email and password
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Password, at least 8 characters
        #[arg(long)]
        password: String,

        /// Password again
        #[arg(long)]
        confirm_password: String,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Show today's calorie log
    Today {
        /// Show another day instead (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log a food by hand
    Log {
        /// Meal (breakfast, lunch, dinner, snack)
        #[arg(long)]
        meal: MealType,

        /// Food name
        #[arg(long)]
        name: String,

        /// Calories
        #[arg(long)]
        calories: f64,

        /// Portion description
        #[arg(long)]
        portion: Option<String>,

        /// Protein in grams
        #[arg(long)]
        protein: Option<f64>,

        /// Carbohydrates in grams
        #[arg(long)]
        carbs: Option<f64>,

        /// Fat in grams
        #[arg(long)]
        fat: Option<f64>,
    },

    /// Analyze a meal from a description and/or a photo
    Analyze {
        /// Meal description
        #[arg(long)]
        text: Option<String>,

        /// Photo of the meal
        #[arg(long)]
        photo: Option<PathBuf>,

        /// Meal to save the result under
        #[arg(long, default_value = "lunch")]
        meal: MealType,

        /// Save the analyzed items right away
        #[arg(long)]
        confirm: bool,
    },

    /// Progress summaries
    Progress {
        #[command(subcommand)]
        action: ProgressCommand,
    },

    /// XP, level, and today's score
    Stats,

    /// Training plans and races
    Training {
        #[command(subcommand)]
        action: TrainingCommand,
    },

    /// Preview energy targets for a profile (local estimate)
    Targets(TargetArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgressCommand {
    /// Summary of a week
    Weekly {
        /// Any day of the week (defaults to this week)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Summary of a month
    Monthly {
        /// Month number, 1-12
        #[arg(long)]
        month: u32,

        /// Year
        #[arg(long)]
        year: i32,
    },

    /// Logging streak
    Streak,

    /// Consistency score
    Consistency {
        /// Period such as 7d or 30d
        #[arg(long)]
        period: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TrainingCommand {
    /// Sessions of a week
    Week {
        /// First day of the week (defaults to this Monday)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// All training plans
    Plans,

    /// All races
    Races,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    // The local preview needs no backend or session
    if let Command::Targets(args) = &cli.command {
        return Ok(report(commands::targets::preview(args)));
    }

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url)?;
    }
    if let Some(path) = cli.session_file.clone() {
        config.session_file = Some(path);
    }
    debug!(summary = %config.summary(), "configuration");

    let session = match &config.session_file {
        Some(path) => SessionStore::open(Arc::new(FileSessionStorage::new(path.clone()))).await,
        None => SessionStore::in_memory(),
    };
    let mut events = session.subscribe();
    let client = ApiClient::new(&config, session)?;

    let outcome = run(&client, cli.command).await;

    if session_expired(&mut events) {
        eprintln!("Your session has expired. Sign in again with `runfuel-cli login`.");
    }

    Ok(report(outcome))
}

fn report(outcome: AppResult<()>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message(e.code.description()));
            debug!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &ApiClient, command: Command) -> AppResult<()> {
    match command {
        Command::Login { email, password } => commands::account::login(client, email, password).await,
        Command::Register {
            email,
            password,
            confirm_password,
        } => commands::account::register(client, email, password, confirm_password).await,
        Command::Logout => commands::account::logout(client).await,
        Command::Whoami => commands::account::whoami(client).await,
        Command::Today { date } => commands::food::today(client, date).await,
        Command::Log {
            meal,
            name,
            calories,
            portion,
            protein,
            carbs,
            fat,
        } => {
            let entry = commands::food::ManualEntryArgs {
                meal,
                name,
                calories,
                portion,
                protein,
                carbs,
                fat,
            };
            commands::food::log(client, entry).await
        }
        Command::Analyze {
            text,
            photo,
            meal,
            confirm,
        } => commands::food::analyze(client, text, photo, meal, confirm).await,
        Command::Progress { action } => match action {
            ProgressCommand::Weekly { date } => commands::progress::weekly(client, date).await,
            ProgressCommand::Monthly { month, year } => {
                commands::progress::monthly(client, month, year).await
            }
            ProgressCommand::Streak => commands::progress::streak(client).await,
            ProgressCommand::Consistency { period } => {
                commands::progress::consistency(client, period).await
            }
        },
        Command::Stats => commands::progress::stats(client).await,
        Command::Training { action } => match action {
            TrainingCommand::Week { start } => commands::training::week(client, start).await,
            TrainingCommand::Plans => commands::training::plans(client).await,
            TrainingCommand::Races => commands::training::races(client).await,
        },
        Command::Targets(args) => commands::targets::preview(&args),
    }
}

fn session_expired(events: &mut Receiver<SessionEvent>) -> bool {
    let mut expired = false;
    loop {
        match events.try_recv() {
            Ok(SessionEvent::SignedOut(SignOutReason::SessionExpired)) => expired = true,
            Ok(_) | Err(TryRecvError::Lagged(_)) => {}
            Err(TryRecvError::Empty | TryRecvError::Closed) => return expired,
        }
    }
}
