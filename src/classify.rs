use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Keywords that pull a food into the healthy score band.
const HEALTHY_FOODS: &[&str] = &[
    "salad", "fruit", "vegetable", "nuts", "yogurt", "fish", "chicken", "quinoa", "oats",
    "smoothie", "apple", "banana", "broccoli", "spinach", "kale", "avocado", "berries", "salmon",
    "tuna",
];

/// Keywords that pull a food into the unhealthy score band.
const UNHEALTHY_FOODS: &[&str] = &[
    "pizza", "burger", "fries", "candy", "soda", "ice cream", "cake", "chips", "donut", "cookies",
];

/// Coarse food groups used for the daily variety bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Fruits,
    Vegetables,
    Protein,
    Grains,
    Dairy,
    Other,
}

const CATEGORY_KEYWORDS: &[(FoodCategory, &[&str])] = &[
    (FoodCategory::Fruits, &["fruit", "apple", "banana"]),
    (FoodCategory::Vegetables, &["vegetable", "salad", "broccoli"]),
    (FoodCategory::Protein, &["chicken", "fish", "meat"]),
    (FoodCategory::Grains, &["rice", "bread", "pasta"]),
    (FoodCategory::Dairy, &["milk", "yogurt", "cheese"]),
];

/// Heuristic 0-100 health score for a free-text food name.
///
/// Matching is substring-based on the lowercased name; the healthy list is
/// checked before the unhealthy one, so a name hitting both lands in the
/// healthy band. The draw inside the band is intentionally random — callers
/// that need reproducibility inject a seeded rng.
pub fn health_score(food_name: &str, rng: &mut impl Rng) -> Result<u8, EngineError> {
    let name = food_name.trim().to_lowercase();
    if name.is_empty() {
        return Err(EngineError::InvalidInput);
    }

    let score: u8 = if HEALTHY_FOODS.iter().any(|k| name.contains(k)) {
        rng.gen_range(70..=95)
    } else if UNHEALTHY_FOODS.iter().any(|k| name.contains(k)) {
        rng.gen_range(20..=55)
    } else {
        rng.gen_range(50..=80)
    };
    Ok(score)
}

/// First matching category wins; anything unrecognized is `Other`.
pub fn food_category(food_name: &str) -> FoodCategory {
    let name = food_name.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| name.contains(k)) {
            return *category;
        }
    }
    FoodCategory::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn healthy_names_score_in_healthy_band() {
        let mut rng = rng();
        for name in ["Grilled Salmon", "kale smoothie", "APPLE pie"] {
            for _ in 0..50 {
                let score = health_score(name, &mut rng).expect("valid name");
                assert!((70..=95).contains(&score), "{name} scored {score}");
            }
        }
    }

    #[test]
    fn unhealthy_names_score_in_unhealthy_band() {
        let mut rng = rng();
        for name in ["pepperoni pizza", "double Burger", "soda float"] {
            for _ in 0..50 {
                let score = health_score(name, &mut rng).expect("valid name");
                assert!((20..=55).contains(&score), "{name} scored {score}");
            }
        }
    }

    #[test]
    fn unknown_names_score_in_neutral_band() {
        let mut rng = rng();
        for _ in 0..50 {
            let score = health_score("mystery casserole", &mut rng).expect("valid name");
            assert!((50..=80).contains(&score));
        }
    }

    #[test]
    fn healthy_match_wins_over_unhealthy() {
        // "chicken" is healthy, "burger" is unhealthy; healthy list is checked first.
        let mut rng = rng();
        for _ in 0..50 {
            let score = health_score("chicken burger", &mut rng).expect("valid name");
            assert!((70..=95).contains(&score));
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut rng = rng();
        assert_eq!(health_score("", &mut rng), Err(EngineError::InvalidInput));
        assert_eq!(health_score("   ", &mut rng), Err(EngineError::InvalidInput));
    }

    #[test]
    fn categories_match_by_substring() {
        assert_eq!(food_category("banana bread"), FoodCategory::Fruits);
        assert_eq!(food_category("Caesar Salad"), FoodCategory::Vegetables);
        assert_eq!(food_category("fried chicken"), FoodCategory::Protein);
        assert_eq!(food_category("pasta carbonara"), FoodCategory::Grains);
        assert_eq!(food_category("greek yogurt"), FoodCategory::Dairy);
        assert_eq!(food_category("espresso"), FoodCategory::Other);
    }
}
