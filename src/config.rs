use anyhow::Context;

/// One-time achievement bonus sizes, awarded over the trailing 7-day window.
#[derive(Debug, Clone)]
pub struct AchievementBonuses {
    pub first_week: u32,
    pub consistency_king: u32,
    pub hydration_master: u32,
    pub early_bird: u32,
}

/// Fallbacks for the hydration estimate while no real hydration feed exists.
#[derive(Debug, Clone)]
pub struct HydrationDefaults {
    /// Inclusive draw range for days that have at least one logged meal.
    pub active_day_min: u8,
    pub active_day_max: u8,
    /// Flat default for an empty day when the user has logging history.
    pub idle_day: u8,
    /// Flat default for users with no history at all.
    pub new_user: u8,
    /// Glasses per day counted as "fully hydrated" by bonuses and badges.
    pub full_glasses: u8,
}

/// Tuning table for the whole scoring pipeline.
///
/// The shipped values were tuned by inspection, not derived; they live here
/// rather than in the calculators so alternate tunings can be tested without
/// process-wide side effects.
#[derive(Debug, Clone)]
pub struct PointsConfig {
    pub base_health_multiplier: f64,
    pub meal_consistency_bonus: f64,
    pub hydration_bonus: f64,
    pub timing_bonus: f64,
    pub late_meal_penalty: f64,
    pub variety_bonus_step: f64,
    /// Minimum daily points for a day to keep a streak alive.
    pub streak_threshold: u32,
    /// (streak length, multiplier), ascending; highest threshold <= streak wins.
    pub streak_multipliers: Vec<(u32, f64)>,
    pub achievements: AchievementBonuses,
    pub hydration: HydrationDefaults,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            base_health_multiplier: 1.0,
            meal_consistency_bonus: 10.0,
            hydration_bonus: 15.0,
            timing_bonus: 3.0,
            late_meal_penalty: 2.0,
            variety_bonus_step: 5.0,
            streak_threshold: 50,
            streak_multipliers: vec![(1, 1.0), (3, 1.1), (7, 1.25), (14, 1.5), (30, 2.0)],
            achievements: AchievementBonuses {
                first_week: 50,
                consistency_king: 60,
                hydration_master: 30,
                early_bird: 25,
            },
            hydration: HydrationDefaults {
                active_day_min: 6,
                active_day_max: 10,
                idle_day: 6,
                new_user: 4,
                full_glasses: 8,
            },
        }
    }
}

impl PointsConfig {
    /// Defaults with knob-by-knob env overrides.
    ///
    /// A var that is present but unparsable is a hard error; an absent var
    /// keeps the shipped value.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = Self::default();
        if let Ok(v) = std::env::var("POINTS_STREAK_THRESHOLD") {
            cfg.streak_threshold = v.parse().context("POINTS_STREAK_THRESHOLD")?;
        }
        if let Ok(v) = std::env::var("POINTS_BASE_HEALTH_MULTIPLIER") {
            cfg.base_health_multiplier = v.parse().context("POINTS_BASE_HEALTH_MULTIPLIER")?;
        }
        if let Ok(v) = std::env::var("POINTS_MEAL_CONSISTENCY_BONUS") {
            cfg.meal_consistency_bonus = v.parse().context("POINTS_MEAL_CONSISTENCY_BONUS")?;
        }
        if let Ok(v) = std::env::var("POINTS_HYDRATION_BONUS") {
            cfg.hydration_bonus = v.parse().context("POINTS_HYDRATION_BONUS")?;
        }
        if let Ok(v) = std::env::var("POINTS_TIMING_BONUS") {
            cfg.timing_bonus = v.parse().context("POINTS_TIMING_BONUS")?;
        }
        Ok(cfg)
    }

    pub fn streak_multiplier(&self, streak_days: u32) -> f64 {
        self.streak_multipliers
            .iter()
            .rev()
            .find(|(threshold, _)| streak_days >= *threshold)
            .map(|(_, m)| *m)
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_multiplier_table() {
        let cfg = PointsConfig::default();
        assert_eq!(cfg.streak_multiplier(0), 1.0);
        assert_eq!(cfg.streak_multiplier(1), 1.0);
        assert_eq!(cfg.streak_multiplier(2), 1.0);
        assert_eq!(cfg.streak_multiplier(3), 1.1);
        assert_eq!(cfg.streak_multiplier(7), 1.25);
        assert_eq!(cfg.streak_multiplier(15), 1.5);
        assert_eq!(cfg.streak_multiplier(30), 2.0);
        assert_eq!(cfg.streak_multiplier(365), 2.0);
    }

    // Single test so concurrent test threads never see each other's env vars.
    #[test]
    fn env_overrides() {
        std::env::set_var("POINTS_STREAK_THRESHOLD", "75");
        let cfg = PointsConfig::from_env().expect("config should load");
        assert_eq!(cfg.streak_threshold, 75);
        std::env::remove_var("POINTS_STREAK_THRESHOLD");

        std::env::set_var("POINTS_TIMING_BONUS", "not-a-number");
        let err = PointsConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("POINTS_TIMING_BONUS"));
        std::env::remove_var("POINTS_TIMING_BONUS");

        let cfg = PointsConfig::from_env().expect("defaults with no overrides");
        assert_eq!(cfg.streak_threshold, 50);
    }
}
