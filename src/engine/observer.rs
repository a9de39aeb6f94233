//! Reacts to log-set changes: recomputes the snapshot, diffs it against the
//! previous total and raises fire-and-forget notifications for the toast
//! layer. No scheduling of its own; the host fires `logs_changed` after each
//! create or delete.

use serde::Serialize;
use tracing::info;

use super::{ScoreEngine, UserPointsData};
use crate::logs::LogStore;

/// How loudly to celebrate a point gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTier {
    Massive,
    Great,
    Nice,
}

impl NotificationTier {
    fn for_gain(points_gained: u32) -> Option<Self> {
        match points_gained {
            50.. => Some(NotificationTier::Massive),
            20..=49 => Some(NotificationTier::Great),
            10..=19 => Some(NotificationTier::Nice),
            _ => None,
        }
    }
}

/// Daily-score celebration levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayRating {
    Perfect,
    Excellent,
}

impl DayRating {
    fn for_score(score: u8) -> Option<Self> {
        match score {
            90.. => Some(DayRating::Perfect),
            80..=89 => Some(DayRating::Excellent),
            _ => None,
        }
    }
}

/// User-facing event raised after a recomputation. Fire-and-forget; no
/// acknowledgment expected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notification {
    #[serde(rename_all = "camelCase")]
    PointsGained {
        tier: NotificationTier,
        points_gained: u32,
        total_points: u32,
        streak: u32,
    },
    #[serde(rename_all = "camelCase")]
    StreakMilestone { streak: u32, bonus_points: u32 },
    #[serde(rename_all = "camelCase")]
    DailyScore { rating: DayRating, score: u8 },
}

/// Two-state diff cache: idle between signals, reacting while a
/// recomputation runs. Owns the previous-total snapshot exclusively, so a
/// single pass reads and overwrites it without coordination.
#[derive(Debug, Default)]
pub struct EngagementObserver {
    previous_total: u32,
    last_milestone: u32,
    last_rating: Option<DayRating>,
}

impl EngagementObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a logs-changed signal: recompute the snapshot and diff it.
    pub fn logs_changed<S: LogStore>(
        &mut self,
        engine: &mut ScoreEngine<S>,
    ) -> (UserPointsData, Vec<Notification>) {
        let data = engine.calculate_user_points();
        let daily_score = engine.daily_score();
        let notifications = self.observe(&data, daily_score);
        (data, notifications)
    }

    /// Diff a freshly computed snapshot against the cached previous total.
    pub fn observe(&mut self, data: &UserPointsData, daily_score: u8) -> Vec<Notification> {
        let mut notifications = Vec::new();
        let new_total = data.total_points;

        // Gains only count against an established baseline; the very first
        // recomputation seeds the cache silently.
        if new_total > self.previous_total && self.previous_total > 0 {
            let points_gained = new_total - self.previous_total;
            if let Some(tier) = NotificationTier::for_gain(points_gained) {
                info!(points_gained, new_total, streak = data.streak, ?tier, "points gained");
                notifications.push(Notification::PointsGained {
                    tier,
                    points_gained,
                    total_points: new_total,
                    streak: data.streak,
                });
            }
        }

        // Streak milestones at each full week, announced once per length.
        if data.streak > 0 && data.streak % 7 == 0 && data.streak != self.last_milestone {
            let bonus_points = (new_total as f64 * 0.25).round() as u32;
            info!(streak = data.streak, bonus_points, "streak milestone");
            notifications.push(Notification::StreakMilestone {
                streak: data.streak,
                bonus_points,
            });
            self.last_milestone = data.streak;
        }

        // Daily-score celebration, once per rating until the score dips.
        let rating = DayRating::for_score(daily_score);
        if rating != self.last_rating {
            if let Some(rating) = rating {
                notifications.push(Notification::DailyScore {
                    rating,
                    score: daily_score,
                });
            }
            self.last_rating = rating;
        }

        self.previous_total = new_total;
        notifications
    }
}
