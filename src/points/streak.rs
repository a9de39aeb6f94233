//! Streak scan over recent days. The multiplier table itself lives on
//! [`PointsConfig`].

use crate::config::PointsConfig;
use crate::metrics::DailyMetrics;
use crate::points::daily_points;

/// Length of the unbroken run of qualifying days, scanning newest to oldest.
/// The first day below the threshold terminates the count.
pub fn current_streak<'a, I>(days_newest_first: I, cfg: &PointsConfig) -> u32
where
    I: IntoIterator<Item = &'a DailyMetrics>,
{
    let mut streak = 0;
    for day in days_newest_first {
        if daily_points(day, cfg) >= cfg.streak_threshold {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
