//! Per-day projections of the raw log set. Recomputed on demand, never
//! persisted.

use rand::Rng;
use serde::Serialize;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::classify::{food_category, FoodCategory};
use crate::config::HydrationDefaults;
use crate::logs::{queries::logs_on_day, FoodLogEntry};

/// Everything the points pipeline needs to know about one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyMetrics {
    pub date: Date,
    /// Rounded mean of the day's health scores; 0 with no logs.
    pub health_score: u8,
    pub meals_logged: u32,
    /// Estimated glasses of water. Currently a stand-in draw, not a real
    /// hydration feed; see `HydrationDefaults`.
    pub hydration_glasses: u8,
    /// Logged-at instants converted to the day-boundary offset.
    pub meal_times: Vec<OffsetDateTime>,
    /// One tag per logged meal, duplicates included.
    pub food_categories: Vec<FoodCategory>,
}

impl DailyMetrics {
    pub fn empty(date: Date, hydration_glasses: u8) -> Self {
        Self {
            date,
            health_score: 0,
            meals_logged: 0,
            hydration_glasses,
            meal_times: Vec::new(),
            food_categories: Vec::new(),
        }
    }
}

fn hydration_estimate(
    has_logs_today: bool,
    has_any_history: bool,
    defaults: &HydrationDefaults,
    rng: &mut impl Rng,
) -> u8 {
    if has_logs_today {
        rng.gen_range(defaults.active_day_min..=defaults.active_day_max)
    } else if has_any_history {
        defaults.idle_day
    } else {
        defaults.new_user
    }
}

/// Project one calendar day out of the full log set.
pub fn day_metrics(
    logs: &[FoodLogEntry],
    day: Date,
    offset: UtcOffset,
    defaults: &HydrationDefaults,
    rng: &mut impl Rng,
) -> DailyMetrics {
    let day_logs: Vec<&FoodLogEntry> = logs_on_day(logs, day, offset).collect();

    let hydration_glasses =
        hydration_estimate(!day_logs.is_empty(), !logs.is_empty(), defaults, rng);
    if day_logs.is_empty() {
        return DailyMetrics::empty(day, hydration_glasses);
    }

    let sum: u32 = day_logs.iter().map(|l| l.health_score as u32).sum();
    let health_score = (sum as f64 / day_logs.len() as f64).round() as u8;

    DailyMetrics {
        date: day,
        health_score,
        meals_logged: day_logs.len() as u32,
        hydration_glasses,
        meal_times: day_logs.iter().map(|l| l.logged_at.to_offset(offset)).collect(),
        food_categories: day_logs.iter().map(|l| food_category(&l.food_name)).collect(),
    }
}

/// The trailing 7-day window ending on `today`, oldest to newest. Always 7
/// entries; days without logs still get a slot.
pub fn week_metrics(
    logs: &[FoodLogEntry],
    today: Date,
    offset: UtcOffset,
    defaults: &HydrationDefaults,
    rng: &mut impl Rng,
) -> Vec<DailyMetrics> {
    (0..7)
        .rev()
        .map(|back| day_metrics(logs, today - Duration::days(back), offset, defaults, rng))
        .collect()
}
