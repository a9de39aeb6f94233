use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Part of the day a meal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl MealPeriod {
    /// Period a meal logged at the given local hour falls into.
    pub fn for_hour(hour: u8) -> Self {
        if hour < 12 {
            MealPeriod::Morning
        } else if hour < 17 {
            MealPeriod::Afternoon
        } else {
            MealPeriod::Evening
        }
    }
}

/// One logged meal. Immutable once written; the engine treats a user's log
/// set as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub meal_period: MealPeriod,
    /// 0-100, assigned by the classifier at submission time.
    pub health_score: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_boundaries() {
        assert_eq!(MealPeriod::for_hour(0), MealPeriod::Morning);
        assert_eq!(MealPeriod::for_hour(11), MealPeriod::Morning);
        assert_eq!(MealPeriod::for_hour(12), MealPeriod::Afternoon);
        assert_eq!(MealPeriod::for_hour(16), MealPeriod::Afternoon);
        assert_eq!(MealPeriod::for_hour(17), MealPeriod::Evening);
        assert_eq!(MealPeriod::for_hour(23), MealPeriod::Evening);
    }

    #[test]
    fn entry_serializes_with_rfc3339_timestamp() {
        let entry = FoodLogEntry {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            food_name: "oats".into(),
            meal_period: MealPeriod::Morning,
            health_score: 82,
            logged_at: time::macros::datetime!(2025-03-01 07:30 UTC),
        };
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["meal_period"], "morning");
        assert_eq!(json["logged_at"], "2025-03-01T07:30:00Z");
    }
}
