//! Static nutrition lookup tables.
//!
//! Loaded once, immutable: per-100 g food facts, macro ratio presets,
//! dietary-restriction exclusion lists and nutrient source lists.

use serde::{Deserialize, Serialize};

/// Macronutrient fractions of total calories. Fractions sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub const BALANCED_RATIO: MacroRatio = MacroRatio {
    protein: 0.25,
    carbs: 0.45,
    fat: 0.30,
};

pub const HIGH_PROTEIN_RATIO: MacroRatio = MacroRatio {
    protein: 0.35,
    carbs: 0.35,
    fat: 0.30,
};

#[allow(dead_code)]
pub const LOW_CARB_RATIO: MacroRatio = MacroRatio {
    protein: 0.30,
    carbs: 0.20,
    fat: 0.50,
};

#[allow(dead_code)]
pub const KETOGENIC_RATIO: MacroRatio = MacroRatio {
    protein: 0.20,
    carbs: 0.05,
    fat: 0.75,
};

#[allow(dead_code)]
pub const MEDITERRANEAN_RATIO: MacroRatio = MacroRatio {
    protein: 0.20,
    carbs: 0.45,
    fat: 0.35,
};

/// Nutrition facts per 100 g.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FoodInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

macro_rules! food {
    ($cal:expr, $protein:expr, $carbs:expr, $fat:expr, $fiber:expr) => {
        FoodInfo {
            calories: $cal,
            protein: $protein,
            carbs: $carbs,
            fat: $fat,
            fiber: $fiber,
        }
    };
}

/// Common whole foods with per-100 g nutrition facts, keyed by snake_case name.
pub const COMMON_FOODS: [(&str, FoodInfo); 14] = [
    ("chicken_breast", food!(165.0, 31.0, 0.0, 3.6, 0.0)),
    ("salmon", food!(208.0, 20.0, 0.0, 13.0, 0.0)),
    ("eggs", food!(155.0, 13.0, 1.1, 11.0, 0.0)),
    ("quinoa", food!(222.0, 8.0, 39.0, 3.6, 5.2)),
    ("brown_rice", food!(216.0, 5.0, 45.0, 1.8, 3.5)),
    ("broccoli", food!(34.0, 2.8, 7.0, 0.4, 2.6)),
    ("spinach", food!(23.0, 2.9, 3.6, 0.4, 2.2)),
    ("avocado", food!(160.0, 2.0, 9.0, 15.0, 7.0)),
    ("almonds", food!(579.0, 21.0, 22.0, 50.0, 12.0)),
    ("greek_yogurt", food!(100.0, 17.0, 6.0, 0.4, 0.0)),
    ("oats", food!(389.0, 17.0, 66.0, 7.0, 11.0)),
    ("banana", food!(89.0, 1.1, 23.0, 0.3, 2.6)),
    ("apple", food!(52.0, 0.3, 14.0, 0.2, 2.4)),
    ("sweet_potato", food!(86.0, 1.6, 20.0, 0.1, 3.0)),
];

/// Foods excluded per dietary restriction, keyed by restriction name.
pub const DIETARY_RESTRICTIONS: [(&str, &[&str]); 4] = [
    ("vegetarian", &["chicken_breast", "salmon"]),
    ("vegan", &["chicken_breast", "salmon", "eggs", "greek_yogurt"]),
    ("gluten_free", &["oats"]),
    ("dairy_free", &["greek_yogurt"]),
];

/// Good food sources per nutrient, keyed by snake_case nutrient name.
pub const VITAMIN_SOURCES: [(&str, &[&str]); 8] = [
    ("vitamin_c", &["broccoli", "spinach"]),
    ("vitamin_d", &["salmon", "eggs"]),
    ("vitamin_b12", &["salmon", "chicken_breast", "eggs"]),
    ("iron", &["spinach", "quinoa", "chicken_breast"]),
    ("calcium", &["greek_yogurt", "almonds", "broccoli"]),
    ("omega_3", &["salmon", "almonds"]),
    ("fiber", &["quinoa", "oats", "avocado", "broccoli"]),
    ("potassium", &["banana", "sweet_potato", "avocado"]),
];

/// Look up per-100 g facts for a food key.
pub fn food_info(food_key: &str) -> Option<&'static FoodInfo> {
    COMMON_FOODS
        .iter()
        .find(|(key, _)| *key == food_key)
        .map(|(_, info)| info)
}

/// Food keys excluded for a dietary restriction, empty when unknown.
pub fn excluded_foods(restriction: &str) -> &'static [&'static str] {
    DIETARY_RESTRICTIONS
        .iter()
        .find(|(key, _)| *key == restriction)
        .map(|(_, excluded)| *excluded)
        .unwrap_or(&[])
}

/// Food sources for a nutrient ("vitamin c", "omega 3", ...), in display
/// casing. Empty when the nutrient is unknown.
pub fn nutrient_sources(nutrient: &str) -> Vec<String> {
    let key = nutrient.to_lowercase().replace(' ', "_");
    VITAMIN_SOURCES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, sources)| sources.iter().map(|s| display_name(s)).collect())
        .unwrap_or_default()
}

/// Turn a snake_case food key into a display name ("greek_yogurt" ->
/// "Greek Yogurt").
pub fn display_name(food_key: &str) -> String {
    food_key
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the nutrition facts card for a food key.
pub fn format_food_info(food_key: &str) -> String {
    match food_info(food_key) {
        Some(food) => format!(
            "**{}** (per 100g):\n\
             • Calories: {}\n\
             • Protein: {}g\n\
             • Carbs: {}g\n\
             • Fat: {}g\n\
             • Fiber: {}g",
            display_name(food_key),
            food.calories,
            food.protein,
            food.carbs,
            food.fat,
            food.fiber
        ),
        None => format!(
            "Sorry, I don't have nutrition information for {}.",
            food_key
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_sum_to_one() {
        for ratio in [
            BALANCED_RATIO,
            HIGH_PROTEIN_RATIO,
            LOW_CARB_RATIO,
            KETOGENIC_RATIO,
            MEDITERRANEAN_RATIO,
        ] {
            assert!((ratio.protein + ratio.carbs + ratio.fat - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_food_lookup() {
        let salmon = food_info("salmon").unwrap();
        assert_eq!(salmon.calories, 208.0);
        assert!(food_info("pizza").is_none());
    }

    #[test]
    fn test_nutrient_sources_normalizes_spaces() {
        let sources = nutrient_sources("vitamin c");
        assert_eq!(sources, vec!["Broccoli", "Spinach"]);
        assert!(nutrient_sources("vitamin x").is_empty());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("greek_yogurt"), "Greek Yogurt");
        assert_eq!(display_name("salmon"), "Salmon");
    }

    #[test]
    fn test_excluded_foods() {
        assert!(excluded_foods("vegan").contains(&"eggs"));
        assert!(excluded_foods("carnivore").is_empty());
    }

    #[test]
    fn test_format_food_info() {
        let card = format_food_info("oats");
        assert!(card.contains("**Oats**"));
        assert!(card.contains("Calories: 389"));

        let unknown = format_food_info("pizza");
        assert!(unknown.contains("don't have nutrition information"));
    }
}
