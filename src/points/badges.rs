//! Human-readable badge labels derived from the weekly window. Tiers within
//! one rule are mutually exclusive; rules themselves are independent, so
//! several badges can co-occur.

use crate::config::PointsConfig;
use crate::metrics::DailyMetrics;

pub const CONSISTENCY_KING: &str = "Consistency King";
pub const STRONG_STREAK: &str = "Strong Streak";
pub const BUILDING_MOMENTUM: &str = "Building Momentum";
pub const HYDRATION_HERO: &str = "Hydration Hero";
pub const HEALTH_GURU: &str = "Health Guru";
pub const WELLNESS_WARRIOR: &str = "Wellness Warrior";
pub const MEAL_MASTER: &str = "Meal Master";
pub const POINT_CHAMPION: &str = "Point Champion";
pub const HIGH_ACHIEVER: &str = "High Achiever";

/// Badges earned for the current week, streak and point total.
pub fn badges(week: &[DailyMetrics], streak: u32, total_points: u32, cfg: &PointsConfig) -> Vec<String> {
    let mut earned = Vec::new();

    if streak >= 7 {
        earned.push(CONSISTENCY_KING.to_string());
    } else if streak >= 5 {
        earned.push(STRONG_STREAK.to_string());
    } else if streak >= 3 {
        earned.push(BUILDING_MOMENTUM.to_string());
    }

    if !week.is_empty() {
        let avg_hydration =
            week.iter().map(|d| d.hydration_glasses as f64).sum::<f64>() / week.len() as f64;
        if avg_hydration >= cfg.hydration.full_glasses as f64 {
            earned.push(HYDRATION_HERO.to_string());
        }

        let avg_health =
            week.iter().map(|d| d.health_score as f64).sum::<f64>() / week.len() as f64;
        if avg_health >= 80.0 {
            earned.push(HEALTH_GURU.to_string());
        } else if avg_health >= 70.0 {
            earned.push(WELLNESS_WARRIOR.to_string());
        }

        let consistent_days = week.iter().filter(|d| d.meals_logged >= 3).count();
        if consistent_days >= 6 {
            earned.push(MEAL_MASTER.to_string());
        }
    }

    if total_points >= 1000 {
        earned.push(POINT_CHAMPION.to_string());
    } else if total_points >= 800 {
        earned.push(HIGH_ACHIEVER.to_string());
    }

    earned
}
