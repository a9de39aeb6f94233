//! One-shot weekly bonuses. Each rule is checked independently; every one
//! that matches contributes its configured size.

use crate::config::PointsConfig;
use crate::metrics::DailyMetrics;

/// Local hours counted as an early-bird meal, inclusive.
const EARLY_BIRD_HOURS: std::ops::RangeInclusive<u8> = 6..=9;

/// Additive bonus earned from patterns in the trailing 7-day window.
pub fn achievement_bonus(week: &[DailyMetrics], streak: u32, cfg: &PointsConfig) -> u32 {
    let mut bonus = 0;

    // First-week completion: every slot in the window actually logged.
    if week.len() >= 7 && week.iter().all(|d| d.meals_logged > 0) {
        bonus += cfg.achievements.first_week;
    }

    if streak >= 7 {
        bonus += cfg.achievements.consistency_king;
    }

    let hydration_days = week
        .iter()
        .filter(|d| d.hydration_glasses >= cfg.hydration.full_glasses)
        .count();
    if hydration_days >= 5 {
        bonus += cfg.achievements.hydration_master;
    }

    let early_days = week
        .iter()
        .filter(|d| d.meal_times.iter().any(|t| EARLY_BIRD_HOURS.contains(&t.hour())))
        .count();
    if early_days >= 5 {
        bonus += cfg.achievements.early_bird;
    }

    bonus
}
