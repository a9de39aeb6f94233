pub mod achievements;
pub mod badges;
pub mod calculator;
pub mod streak;

pub use achievements::achievement_bonus;
pub use badges::badges;
pub use calculator::daily_points;
pub use streak::current_streak;
