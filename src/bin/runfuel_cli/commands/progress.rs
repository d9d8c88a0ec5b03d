// ABOUTME: Progress and gamification commands for runfuel-cli
// ABOUTME: Handles weekly, monthly, streak, consistency, and stats views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use runfuel_client::ApiClient;
use runfuel_core::errors::AppResult;

use crate::helpers::display::{display_daily_score, display_stats, display_summary};

/// Weekly summary
pub async fn weekly(client: &ApiClient, date: Option<NaiveDate>) -> AppResult<()> {
    let summary = client.progress().weekly(date).await?;
    display_summary("Week", &summary);
    Ok(())
}

/// Monthly summary
pub async fn monthly(client: &ApiClient, month: u32, year: i32) -> AppResult<()> {
    let summary = client.progress().monthly(month, year).await?;
    display_summary("Month", &summary);
    Ok(())
}

/// Logging streak
pub async fn streak(client: &ApiClient) -> AppResult<()> {
    let streak = client.progress().streak().await?;
    println!(
        "Current streak: {} day(s), longest: {} day(s)",
        streak.current_streak, streak.longest_streak
    );
    Ok(())
}

/// Consistency score
pub async fn consistency(client: &ApiClient, period: Option<String>) -> AppResult<()> {
    let data = client.progress().consistency(period.as_deref()).await?;
    println!(
        "Consistency over {}: {:.0}/100 ({} of {} days on target)",
        data.period, data.score, data.days_on_target, data.total_days
    );
    Ok(())
}

/// XP, level, and today's score
pub async fn stats(client: &ApiClient) -> AppResult<()> {
    let gamification = client.gamification();
    let stats = gamification.stats().await?;
    display_stats(&stats);

    let score = gamification.daily_score(None).await?;
    display_daily_score(&score);
    Ok(())
}
