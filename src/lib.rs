//! Engagement scoring engine for a nutrition-tracking dashboard.
//!
//! Turns a user's raw food-log history into per-food health scores, per-day
//! metrics, a weekly point total with streak multipliers and achievement
//! bonuses, and a set of earned badges. Persistence, auth and transport live
//! in the host application; this crate is pure in-memory computation behind
//! the [`logs::LogStore`] seam.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod logs;
pub mod metrics;
pub mod points;

pub use classify::{food_category, health_score, FoodCategory};
pub use config::PointsConfig;
pub use engine::observer::{DayRating, EngagementObserver, Notification, NotificationTier};
pub use engine::{
    PointsBreakdown, PointsSummary, ScoreEngine, Trend, UserContext, UserPointsData,
    WeeklyAnalytics, WeeklyTrend,
};
pub use error::EngineError;
pub use logs::{FoodLogEntry, InMemoryLogStore, LogStore, MealPeriod};
pub use metrics::DailyMetrics;
