//! Today-scoped reads over a user's log set: the dashboard's daily and
//! per-period health scores.

use time::{Date, UtcOffset};

use super::{FoodLogEntry, MealPeriod};

/// Entries whose `logged_at` falls on `day` at the given day-boundary offset.
pub fn logs_on_day<'a>(
    logs: &'a [FoodLogEntry],
    day: Date,
    offset: UtcOffset,
) -> impl Iterator<Item = &'a FoodLogEntry> {
    logs.iter()
        .filter(move |log| log.logged_at.to_offset(offset).date() == day)
}

fn rounded_mean(scores: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = scores.fold((0u32, 0u32), |(s, c), v| (s + v as u32, c + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u8
}

/// Mean health score of the day's entries, rounded; 0 with no entries.
pub fn daily_score(logs: &[FoodLogEntry], day: Date, offset: UtcOffset) -> u8 {
    rounded_mean(logs_on_day(logs, day, offset).map(|l| l.health_score))
}

/// Mean health score of the day's entries for one meal period; 0 with none.
pub fn period_score(logs: &[FoodLogEntry], day: Date, offset: UtcOffset, period: MealPeriod) -> u8 {
    rounded_mean(
        logs_on_day(logs, day, offset)
            .filter(|l| l.meal_period == period)
            .map(|l| l.health_score),
    )
}

/// Whether the day has at least one entry in the given period.
pub fn has_period_logs(
    logs: &[FoodLogEntry],
    day: Date,
    offset: UtcOffset,
    period: MealPeriod,
) -> bool {
    logs_on_day(logs, day, offset).any(|l| l.meal_period == period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};
    use uuid::Uuid;

    fn entry(score: u8, period: MealPeriod, at: time::OffsetDateTime) -> FoodLogEntry {
        FoodLogEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            food_name: "test".into(),
            meal_period: period,
            health_score: score,
            logged_at: at,
        }
    }

    #[test]
    fn daily_score_is_rounded_mean() {
        let logs = vec![
            entry(80, MealPeriod::Morning, datetime!(2025-03-01 08:00 UTC)),
            entry(85, MealPeriod::Afternoon, datetime!(2025-03-01 13:00 UTC)),
            // different day, ignored
            entry(10, MealPeriod::Evening, datetime!(2025-03-02 19:00 UTC)),
        ];
        // mean(80, 85) = 82.5 -> 83
        assert_eq!(daily_score(&logs, date!(2025 - 03 - 01), UtcOffset::UTC), 83);
    }

    #[test]
    fn empty_day_scores_zero() {
        assert_eq!(daily_score(&[], date!(2025 - 03 - 01), UtcOffset::UTC), 0);
    }

    #[test]
    fn period_score_filters_by_period() {
        let logs = vec![
            entry(90, MealPeriod::Morning, datetime!(2025-03-01 08:00 UTC)),
            entry(40, MealPeriod::Evening, datetime!(2025-03-01 19:00 UTC)),
        ];
        let day = date!(2025 - 03 - 01);
        assert_eq!(period_score(&logs, day, UtcOffset::UTC, MealPeriod::Morning), 90);
        assert_eq!(period_score(&logs, day, UtcOffset::UTC, MealPeriod::Evening), 40);
        assert_eq!(period_score(&logs, day, UtcOffset::UTC, MealPeriod::Afternoon), 0);
        assert!(has_period_logs(&logs, day, UtcOffset::UTC, MealPeriod::Morning));
        assert!(!has_period_logs(&logs, day, UtcOffset::UTC, MealPeriod::Afternoon));
    }

    #[test]
    fn day_boundary_respects_offset() {
        // 23:30 UTC is already the next day at UTC+2.
        let logs = vec![entry(70, MealPeriod::Evening, datetime!(2025-03-01 23:30 UTC))];
        let plus_two = UtcOffset::from_hms(2, 0, 0).expect("valid offset");
        assert_eq!(daily_score(&logs, date!(2025 - 03 - 01), plus_two), 0);
        assert_eq!(daily_score(&logs, date!(2025 - 03 - 02), plus_two), 70);
    }
}
