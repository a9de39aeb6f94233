//! Snapshot assembly: pulls a user's logs through the aggregation and
//! points pipeline and exposes the entry points the dashboard consumes.

mod dto;
pub mod observer;

pub use dto::{PointsBreakdown, PointsSummary, Trend, UserPointsData, WeeklyAnalytics, WeeklyTrend};

use rand::rngs::StdRng;
use rand::SeedableRng;
use time::{Date, OffsetDateTime, UtcOffset};
use tracing::debug;
use uuid::Uuid;

use crate::classify;
use crate::config::PointsConfig;
use crate::error::EngineError;
use crate::logs::{queries, LogStore, MealPeriod};
use crate::metrics::week_metrics;
use crate::points::{achievement_bonus, badges, current_streak, daily_points};

/// Identity handed over by the auth collaborator.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub id: Uuid,
    pub name: String,
}

/// The scoring engine for one user session.
///
/// Single-threaded by design: recomputation runs to completion on each call
/// and the only state the engine owns is its rng. Hosts running concurrently
/// must serialize recomputation per user.
pub struct ScoreEngine<S: LogStore> {
    store: S,
    config: PointsConfig,
    /// Day-boundary offset; "today" means the calendar day at this offset.
    offset: UtcOffset,
    user: Option<UserContext>,
    rng: StdRng,
    now_override: Option<OffsetDateTime>,
}

impl<S: LogStore> ScoreEngine<S> {
    pub fn new(store: S, config: PointsConfig, offset: UtcOffset) -> Self {
        Self {
            store,
            config,
            offset,
            user: None,
            rng: StdRng::from_entropy(),
            now_override: None,
        }
    }

    pub fn with_user(mut self, user: UserContext) -> Self {
        self.user = Some(user);
        self
    }

    /// Seeded rng for reproducible hydration draws and classifier scores.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Pin the clock, for tests and backfill runs.
    pub fn with_now(mut self, now: OffsetDateTime) -> Self {
        self.now_override = Some(now);
        self
    }

    pub fn set_user(&mut self, user: Option<UserContext>) {
        self.user = user;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn now(&self) -> OffsetDateTime {
        self.now_override
            .unwrap_or_else(OffsetDateTime::now_utc)
            .to_offset(self.offset)
    }

    pub fn today(&self) -> Date {
        self.now().date()
    }

    /// Meal period the current local hour falls into.
    pub fn current_meal_period(&self) -> MealPeriod {
        MealPeriod::for_hour(self.now().hour())
    }

    /// Health score for a food about to be logged.
    pub fn score_food(&mut self, food_name: &str) -> Result<u8, EngineError> {
        classify::health_score(food_name, &mut self.rng)
    }

    fn user_logs(&self) -> Vec<crate::logs::FoodLogEntry> {
        match &self.user {
            Some(user) => self.store.logs_for_user(user.id),
            None => Vec::new(),
        }
    }

    /// Today's mean health score, 0-100. Zero without a user or logs.
    pub fn daily_score(&self) -> u8 {
        queries::daily_score(&self.user_logs(), self.today(), self.offset)
    }

    /// Today's mean health score restricted to one meal period.
    pub fn period_score(&self, period: MealPeriod) -> u8 {
        queries::period_score(&self.user_logs(), self.today(), self.offset, period)
    }

    pub fn has_period_logs(&self, period: MealPeriod) -> bool {
        queries::has_period_logs(&self.user_logs(), self.today(), self.offset, period)
    }

    /// Recompute the full engagement snapshot from the log history.
    ///
    /// Without a user, or for a user with no logs at all, this is the safe
    /// empty state rather than an error.
    pub fn calculate_user_points(&mut self) -> UserPointsData {
        let Some(user) = self.user.clone() else {
            debug!("no user context, returning empty snapshot");
            return UserPointsData::empty();
        };

        let logs = self.store.logs_for_user(user.id);
        if logs.is_empty() {
            return UserPointsData {
                user_id: user.id,
                name: user.name,
                ..UserPointsData::empty()
            };
        }

        let today = self.today();
        let week = week_metrics(&logs, today, self.offset, &self.config.hydration, &mut self.rng);

        let weekly_progress: Vec<u32> =
            week.iter().map(|day| daily_points(day, &self.config)).collect();
        let base_weekly: u32 = weekly_progress.iter().sum();

        let streak = current_streak(week.iter().rev(), &self.config);
        let multiplier = self.config.streak_multiplier(streak);
        let bonus = achievement_bonus(&week, streak, &self.config);
        let total_points = (base_weekly as f64 * multiplier + bonus as f64).round() as u32;
        let earned_badges = badges(&week, streak, total_points, &self.config);

        debug!(
            user_id = %user.id,
            total_points,
            base_weekly,
            streak,
            multiplier,
            achievement_bonus = bonus,
            "recomputed points snapshot"
        );

        UserPointsData {
            user_id: user.id,
            name: user.name,
            total_points,
            daily_average: (total_points as f64 / 7.0).round() as u32,
            streak,
            badges: earned_badges,
            points_breakdown: PointsBreakdown {
                base_health_score: base_weekly,
                consistency_bonus: (base_weekly as f64 * 0.1).round() as u32,
                hydration_bonus: (base_weekly as f64 * 0.15).round() as u32,
                streak_multiplier: multiplier,
                achievement_bonus: bonus,
            },
            trend: if total_points > 800 {
                Trend::Up
            } else if total_points > 500 {
                Trend::Same
            } else {
                Trend::Down
            },
            weekly_progress,
        }
    }

    /// Widget view of the snapshot.
    pub fn points_summary(&mut self) -> PointsSummary {
        self.calculate_user_points().into()
    }

    /// Statistics over the weekly point history.
    pub fn weekly_analytics(&mut self) -> WeeklyAnalytics {
        let history = self.calculate_user_points().weekly_progress;
        analytics_over(&history)
    }
}

fn analytics_over(history: &[u32]) -> WeeklyAnalytics {
    let total: u32 = history.iter().sum();
    let mean = total as f64 / history.len() as f64;
    let trend = if history.last() > history.first() {
        WeeklyTrend::Improving
    } else {
        WeeklyTrend::Declining
    };

    // Coefficient-of-variation consistency: tighter clustering scores higher.
    let consistency = if mean > 0.0 {
        let variance = history
            .iter()
            .map(|&p| (p as f64 - mean).powi(2))
            .sum::<f64>()
            / history.len() as f64;
        let spread = variance.sqrt() / mean * 100.0;
        (100.0 - spread).max(0.0).round() as u32
    } else {
        0
    };

    WeeklyAnalytics {
        total_weekly_points: total,
        average_daily_points: mean.round() as u32,
        best_day_points: history.iter().copied().max().unwrap_or(0),
        worst_day_points: history.iter().copied().min().unwrap_or(0),
        trend,
        consistency,
        points_history: history.to_vec(),
    }
}
