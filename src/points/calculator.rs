//! Converts one day's metrics into a point value. All bonus terms are
//! additive; the sum is rounded and never negative.

use std::collections::HashSet;

use time::OffsetDateTime;

use crate::classify::FoodCategory;
use crate::config::PointsConfig;
use crate::metrics::DailyMetrics;

/// Points earned by one day.
pub fn daily_points(metrics: &DailyMetrics, cfg: &PointsConfig) -> u32 {
    let mut points = metrics.health_score as f64 * cfg.base_health_multiplier;

    // Meal consistency: full bonus from three meals, partial for two.
    if metrics.meals_logged >= 3 {
        points += cfg.meal_consistency_bonus;
    } else if metrics.meals_logged == 2 {
        points += cfg.meal_consistency_bonus * 0.7;
    }

    // Hydration, in tiers of the full bonus.
    if metrics.hydration_glasses >= cfg.hydration.full_glasses {
        points += cfg.hydration_bonus;
    } else if metrics.hydration_glasses >= 6 {
        points += cfg.hydration_bonus * 0.75;
    } else if metrics.hydration_glasses >= 4 {
        points += cfg.hydration_bonus * 0.5;
    }

    points += timing_bonus(&metrics.meal_times, cfg);
    points += variety_bonus(&metrics.food_categories, cfg);

    points.round().max(0.0) as u32
}

/// Rewards meals at conventional times, penalizes late-night eating. The
/// summed bonus is clamped at zero so a run of late meals cannot drag the
/// day's total down.
fn timing_bonus(meal_times: &[OffsetDateTime], cfg: &PointsConfig) -> f64 {
    let mut bonus = 0.0;
    for t in meal_times {
        let hour = t.hour();
        if (6..=10).contains(&hour) || (11..=14).contains(&hour) || (17..=20).contains(&hour) {
            bonus += cfg.timing_bonus;
        } else if hour >= 21 {
            bonus -= cfg.late_meal_penalty;
        }
    }
    bonus.max(0.0)
}

/// Rewards distinct food categories on the day: 3x the step for 5+ groups,
/// 2x for 4, 1x for 3.
fn variety_bonus(categories: &[FoodCategory], cfg: &PointsConfig) -> f64 {
    let distinct: HashSet<&FoodCategory> = categories.iter().collect();
    match distinct.len() {
        n if n >= 5 => cfg.variety_bonus_step * 3.0,
        4 => cfg.variety_bonus_step * 2.0,
        3 => cfg.variety_bonus_step,
        _ => 0.0,
    }
}
