// ABOUTME: Training commands for runfuel-cli
// ABOUTME: Handles the weekly session view, plan listing, and race listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Duration, Local, NaiveDate};
use runfuel_client::ApiClient;
use runfuel_core::errors::AppResult;

use crate::helpers::display::{display_plan, display_race, display_session};

/// Sessions of a week, this week by default
pub async fn week(client: &ApiClient, start: Option<NaiveDate>) -> AppResult<()> {
    let start = start.unwrap_or_else(current_monday);
    let sessions = client.training().week_sessions(start).await?;
    if sessions.is_empty() {
        println!("No sessions scheduled for the week of {start}.");
        return Ok(());
    }
    println!("Week of {start}");
    for session in &sessions {
        display_session(session);
    }
    Ok(())
}

/// All plans
pub async fn plans(client: &ApiClient) -> AppResult<()> {
    let plans = client.training().plans().await?;
    if plans.is_empty() {
        println!("No training plans yet.");
    }
    for plan in &plans {
        display_plan(plan);
    }
    Ok(())
}

/// All races
pub async fn races(client: &ApiClient) -> AppResult<()> {
    let races = client.training().races().await?;
    if races.is_empty() {
        println!("No races on the calendar.");
    }
    for race in &races {
        display_race(race);
    }
    Ok(())
}

fn current_monday() -> NaiveDate {
    let today = Local::now().date_naive();
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}
