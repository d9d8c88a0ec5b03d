// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for runfuel-cli
// ABOUTME: Provides consistent display functions for logs, analyses, progress, and training data

use runfuel_client::store::AnalysisDraft;
use runfuel_core::models::{
    CalorieLog, DailyScore, FoodEntry, ProfileForm, Race, TrainingPlan, TrainingSession, User,
    UserStats, WeeklySummary,
};
use runfuel_core::nutrition::EnergyTargets;

fn macro_line(protein: Option<f64>, carbs: Option<f64>, fat: Option<f64>) -> Option<String> {
    let parts: Vec<String> = [("P", protein), ("C", carbs), ("F", fat)]
        .iter()
        .filter_map(|(label, grams)| grams.map(|g| format!("{label} {g:.0}g")))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" / "))
    }
}

/// Display the account and its profile
pub fn display_user(user: &User) {
    println!("Email: {}", user.email);
    println!("Active: {}", if user.is_active { "yes" } else { "no" });
    let Some(profile) = &user.profile else {
        println!("Profile: not set up");
        return;
    };
    println!("Goal: {}", profile.goal);
    println!(
        "Profile: {} y, {:.0} cm, {:.1} kg",
        profile.age, profile.height_cm, profile.weight_kg
    );
    if let Some(target) = profile.daily_target_kcal {
        println!("Daily target: {target:.0} kcal");
    }
}

/// Display one food entry on a line
pub fn display_food_entry(entry: &FoodEntry) {
    let favorite = if entry.is_favorite { " *" } else { "" };
    let portion = entry
        .portion_desc
        .as_deref()
        .map(|p| format!(" ({p})"))
        .unwrap_or_default();
    print!(
        "  [{}] {}{portion}: {:.0} kcal{favorite}",
        entry.meal_type, entry.food_name, entry.calories
    );
    if let Some(macros) = macro_line(entry.protein_g, entry.carbs_g, entry.fat_g) {
        print!("  {macros}");
    }
    println!("  id={}", entry.id);
}

/// Display a day's log with its entries
pub fn display_calorie_log(log: &CalorieLog) {
    println!("{}", log.log_date);
    println!("{}", "=".repeat(40));
    println!(
        "Consumed {:.0} of {:.0} kcal ({:.0}%), {:.0} remaining, {}",
        log.consumed_kcal,
        log.target_kcal,
        log.progress_ratio() * 100.0,
        log.remaining_kcal,
        log.status
    );
    if log.entries.is_empty() {
        println!("No entries yet.");
        return;
    }
    println!();
    for entry in &log.entries {
        display_food_entry(entry);
    }
}

/// Display an analysis under review
pub fn display_analysis(draft: &AnalysisDraft) {
    println!("\nProposed items:");
    for (index, item) in draft.items.iter().enumerate() {
        print!(
            "  {}. {} ({}): {:.0} kcal, confidence {:.0}%",
            index + 1,
            item.name,
            item.portion,
            item.calories,
            item.confidence * 100.0
        );
        if let Some(macros) = macro_line(item.protein_g, item.carbs_g, item.fat_g) {
            print!("  {macros}");
        }
        println!();
    }
    println!("Total: {:.0} kcal", draft.total_calories);
    if !draft.meal_notes.is_empty() {
        println!("Notes: {}", draft.meal_notes);
    }
    if let Some(tip) = &draft.health_tip {
        println!("Tip: {tip}");
    }
}

/// Display a weekly or monthly summary
pub fn display_summary(label: &str, summary: &WeeklySummary) {
    println!(
        "{label} {} to {}",
        summary.period_start, summary.period_end
    );
    println!("{}", "=".repeat(40));
    println!("Days logged: {}", summary.days_logged);
    println!("Days on target: {}", summary.days_on_target);
    if let Some(avg) = summary.avg_intake_kcal {
        println!("Average intake: {avg:.0} kcal");
    }
    if let Some(avg) = summary.avg_target_kcal {
        println!("Average target: {avg:.0} kcal");
    }
    if let Some(score) = summary.consistency_score {
        println!("Consistency: {score:.0}/100");
    }
}

/// Display XP and level statistics
pub fn display_stats(stats: &UserStats) {
    println!(
        "Level {} ({} XP, {:.0}% to next level)",
        stats.level,
        stats.total_xp,
        stats.xp_progress * 100.0
    );
    println!(
        "Streak: {} day(s), best {}",
        stats.current_streak, stats.longest_streak
    );
    println!(
        "Logs: {}, photos: {}, perfect weeks: {}",
        stats.total_logs, stats.total_photos, stats.perfect_weeks
    );
}

/// Display a day's score
pub fn display_daily_score(score: &DailyScore) {
    println!("\nToday's score: {} points", score.total_score);
    println!("  {}", score.message);
    println!("  {}", score.encouragement);
}

/// Display one training session on a line
pub fn display_session(session: &TrainingSession) {
    let done = if session.completed { "x" } else { " " };
    print!("  [{done}] {} {}", session.session_date, session.session_type);
    if let Some(km) = session.target_distance_km {
        print!(" {km:.1} km");
    }
    if let Some(min) = session.target_duration_min {
        print!(" {min} min");
    }
    if let Some(description) = &session.description {
        print!(" - {description}");
    }
    println!();
}

/// Display a plan header
pub fn display_plan(plan: &TrainingPlan) {
    let active = if plan.is_active { " (active)" } else { "" };
    println!(
        "{}{active}: {} to {}, {} weeks, {} sessions  id={}",
        plan.name,
        plan.start_date,
        plan.end_date,
        plan.weeks,
        plan.sessions.len(),
        plan.id
    );
}

/// Display a race on a line
pub fn display_race(race: &Race) {
    print!("{} {}", race.race_date, race.name);
    if let Some(km) = race.distance_km {
        print!(" {km:.1} km");
    }
    if let Some(location) = &race.location {
        print!(" @ {location}");
    }
    println!("  id={}", race.id);
}

/// Display the local energy-target estimate
pub fn display_targets(profile: &ProfileForm, targets: &EnergyTargets) {
    println!("Energy targets (local estimate, the server value is authoritative)");
    println!("{}", "=".repeat(60));
    println!("Goal: {}", profile.goal);
    println!("BMR:  {:.0} kcal", targets.bmr);
    println!("TDEE: {:.0} kcal", targets.tdee);
    println!("Daily target: {:.0} kcal", targets.daily_target_kcal);
}
