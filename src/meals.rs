//! Meal suggestions filtered by dietary restriction.

use serde::{Deserialize, Serialize};

use crate::nutrition_data::excluded_foods;

/// Maximum suggestions returned per request.
const SUGGESTION_LIMIT: usize = 6;

/// Meal slot requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Any,
}

impl MealType {
    /// Detect the requested meal slot from a message, defaulting to `Any`.
    pub fn from_message(message: &str) -> Self {
        let message = message.to_lowercase();
        if message.contains("breakfast") {
            MealType::Breakfast
        } else if message.contains("lunch") {
            MealType::Lunch
        } else if message.contains("dinner") {
            MealType::Dinner
        } else if message.contains("snack") {
            MealType::Snack
        } else {
            MealType::Any
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Any => "You",
        }
    }
}

/// One suggested meal with its ingredient list.
#[derive(Debug, Clone, Serialize)]
pub struct MealSuggestion {
    pub meal: &'static str,
    pub ingredients: Vec<&'static str>,
    pub description: &'static str,
    pub prep_time: &'static str,
    /// Food keys the meal depends on; used for restriction filtering.
    key_foods: &'static [&'static str],
}

fn breakfast_suggestions() -> Vec<MealSuggestion> {
    vec![
        MealSuggestion {
            meal: "Protein Overnight Oats",
            ingredients: vec!["Oats", "Greek Yogurt", "Banana", "Almonds"],
            description: "High-protein breakfast with complex carbs and healthy fats",
            prep_time: "5 min prep, overnight rest",
            key_foods: &["oats", "greek_yogurt"],
        },
        MealSuggestion {
            meal: "Veggie Scramble",
            ingredients: vec!["Eggs", "Spinach", "Avocado"],
            description: "Protein-rich eggs with nutrient-dense vegetables",
            prep_time: "10 minutes",
            key_foods: &["eggs"],
        },
    ]
}

fn main_meal_suggestions() -> Vec<MealSuggestion> {
    vec![
        MealSuggestion {
            meal: "Baked Salmon Bowl",
            ingredients: vec!["Salmon", "Quinoa", "Broccoli", "Avocado"],
            description: "Omega-3 rich salmon with complete protein quinoa and fiber-rich vegetables",
            prep_time: "25 minutes",
            key_foods: &["salmon"],
        },
        MealSuggestion {
            meal: "Chicken Power Bowl",
            ingredients: vec!["Chicken Breast", "Brown Rice", "Spinach", "Sweet Potato"],
            description: "Lean protein with complex carbs and antioxidant-rich vegetables",
            prep_time: "30 minutes",
            key_foods: &["chicken_breast"],
        },
    ]
}

fn snack_suggestions() -> Vec<MealSuggestion> {
    vec![
        MealSuggestion {
            meal: "Apple Almond Butter",
            ingredients: vec!["Apple", "Almonds"],
            description: "Balanced snack with fiber and healthy fats",
            prep_time: "2 minutes",
            key_foods: &["apple", "almonds"],
        },
        MealSuggestion {
            meal: "Greek Yogurt Parfait",
            ingredients: vec!["Greek Yogurt", "Banana"],
            description: "High-protein snack with natural sweetness",
            prep_time: "3 minutes",
            key_foods: &["greek_yogurt"],
        },
    ]
}

/// Suggest meals for a meal slot, dropping any meal whose key foods are
/// excluded by the dietary restriction. Capped at six suggestions.
pub fn suggest_meals(dietary_restriction: Option<&str>, meal_type: MealType) -> Vec<MealSuggestion> {
    let excluded = dietary_restriction.map(excluded_foods).unwrap_or(&[]);

    let mut suggestions = Vec::new();
    if matches!(meal_type, MealType::Breakfast | MealType::Any) {
        suggestions.extend(breakfast_suggestions());
    }
    if matches!(meal_type, MealType::Lunch | MealType::Dinner | MealType::Any) {
        suggestions.extend(main_meal_suggestions());
    }
    if matches!(meal_type, MealType::Snack | MealType::Any) {
        suggestions.extend(snack_suggestions());
    }

    suggestions.retain(|suggestion| {
        !suggestion
            .key_foods
            .iter()
            .any(|food| excluded.contains(food))
    });
    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}
