use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Week-over-week movement shown next to the point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

/// Display decomposition of the weekly total. The consistency and hydration
/// figures are dashboard approximations (shares of the base sum), not exact
/// per-rule tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub base_health_score: u32,
    pub consistency_bonus: u32,
    pub hydration_bonus: u32,
    pub streak_multiplier: f64,
    pub achievement_bonus: u32,
}

impl PointsBreakdown {
    pub fn zero() -> Self {
        Self {
            base_health_score: 0,
            consistency_bonus: 0,
            hydration_bonus: 0,
            streak_multiplier: 1.0,
            achievement_bonus: 0,
        }
    }
}

/// Full engagement snapshot for one user: what the dashboard, leaderboard
/// and achievements screens render. Recomputed in full on every observation
/// cycle; there is no lifecycle beyond "current snapshot".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPointsData {
    pub user_id: Uuid,
    pub name: String,
    pub total_points: u32,
    pub daily_average: u32,
    pub streak: u32,
    pub badges: Vec<String>,
    pub points_breakdown: PointsBreakdown,
    pub trend: Trend,
    /// Daily points for the trailing 7-day window, oldest to newest. Always
    /// exactly 7 entries; empty days contribute zeros.
    pub weekly_progress: Vec<u32>,
}

impl UserPointsData {
    /// The safe empty state: what callers get without an authenticated user.
    pub fn empty() -> Self {
        Self {
            user_id: Uuid::nil(),
            name: "Unknown User".to_string(),
            total_points: 0,
            daily_average: 0,
            streak: 0,
            badges: Vec::new(),
            points_breakdown: PointsBreakdown::zero(),
            trend: Trend::Same,
            weekly_progress: vec![0; 7],
        }
    }
}

/// Read-only widget view of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsSummary {
    pub total_points: u32,
    pub daily_average: u32,
    pub streak: u32,
    pub badges: Vec<String>,
    pub breakdown: PointsBreakdown,
    pub trend: Trend,
}

impl From<UserPointsData> for PointsSummary {
    fn from(data: UserPointsData) -> Self {
        Self {
            total_points: data.total_points,
            daily_average: data.daily_average,
            streak: data.streak,
            badges: data.badges,
            breakdown: data.points_breakdown,
            trend: data.trend,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTrend {
    Improving,
    Declining,
}

/// Derived statistics over `weekly_progress` for the analytics widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAnalytics {
    pub total_weekly_points: u32,
    pub average_daily_points: u32,
    pub best_day_points: u32,
    pub worst_day_points: u32,
    pub trend: WeeklyTrend,
    /// 0-100; high when daily points cluster around their mean.
    pub consistency: u32,
    pub points_history: Vec<u32>,
}
