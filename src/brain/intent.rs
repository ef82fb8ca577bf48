//! Query intent classification using ordered keyword sets.
//!
//! Deterministic substring matching - no ML model required. Rules are
//! evaluated in a fixed order and the first matching set wins, so overlap
//! between sets resolves reproducibly (e.g. "diet" classifies as weight
//! loss even inside a meal-planning sentence). That precedence is part of
//! the contract; reordering it changes user-visible behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified purpose of a single user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// Calorie / BMR / TDEE calculations
    CalorieCalculation,
    /// Macronutrient breakdown and advice
    MacroAdvice,
    /// Meal and diet plan requests
    MealPlanning,
    /// Vitamin / mineral / deficiency questions
    NutrientAdvice,
    /// Losing weight, cutting
    WeightLoss,
    /// Gaining weight, bulking, building muscle
    WeightGain,
    /// Recipes, cooking, ingredients
    RecipeAdvice,
    /// Default bucket for everything else
    GeneralNutrition,
}

impl QueryType {
    /// Returns a human-readable label for the query type.
    pub fn label(&self) -> &'static str {
        match self {
            QueryType::CalorieCalculation => "calorie_calculation",
            QueryType::MacroAdvice => "macro_advice",
            QueryType::MealPlanning => "meal_planning",
            QueryType::NutrientAdvice => "nutrient_advice",
            QueryType::WeightLoss => "weight_loss",
            QueryType::WeightGain => "weight_gain",
            QueryType::RecipeAdvice => "recipe_advice",
            QueryType::GeneralNutrition => "general_nutrition",
        }
    }

    /// Query types whose responses must carry the medical disclaimer.
    pub fn needs_disclaimer(&self) -> bool {
        matches!(
            self,
            QueryType::WeightLoss
                | QueryType::WeightGain
                | QueryType::NutrientAdvice
                | QueryType::CalorieCalculation
        )
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keyword sets in evaluation order. First set with any substring hit wins.
const RULES: [(QueryType, &[&str]); 7] = [
    (
        QueryType::CalorieCalculation,
        &["calorie", "calories", "bmr", "tdee", "metabolic rate"],
    ),
    (
        QueryType::MacroAdvice,
        &["protein", "carb", "fat", "macro", "macronutrient"],
    ),
    (
        QueryType::MealPlanning,
        &["meal plan", "diet plan", "what to eat", "menu"],
    ),
    (
        QueryType::NutrientAdvice,
        &["vitamin", "mineral", "nutrient", "deficiency"],
    ),
    (
        QueryType::WeightLoss,
        &["lose weight", "weight loss", "diet", "cutting"],
    ),
    (
        QueryType::WeightGain,
        &["gain weight", "bulk", "muscle", "gain muscle"],
    ),
    (
        QueryType::RecipeAdvice,
        &["recipe", "cook", "food", "ingredient"],
    ),
];

/// Intent classifier over the fixed nutrition keyword rules.
#[derive(Debug, Default)]
pub struct QueryClassifier;

impl QueryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify the intent of a message. Falls through to
    /// `GeneralNutrition` when no keyword set matches.
    pub fn classify(&self, text: &str) -> QueryType {
        let text = text.to_lowercase();

        for (query_type, keywords) in RULES {
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                return query_type;
            }
        }

        QueryType::GeneralNutrition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calorie_detection() {
        let classifier = QueryClassifier::new();
        assert_eq!(
            classifier.classify("How many calories should I eat?"),
            QueryType::CalorieCalculation
        );
        assert_eq!(
            classifier.classify("what is my TDEE"),
            QueryType::CalorieCalculation
        );
    }

    #[test]
    fn test_calorie_precedes_recipe() {
        let classifier = QueryClassifier::new();
        assert_eq!(
            classifier.classify("a recipe with low calories"),
            QueryType::CalorieCalculation
        );
    }

    #[test]
    fn test_diet_triggers_weight_loss() {
        // Known precedence quirk: "diet" hits the weight-loss set even in
        // planning sentences without "diet plan".
        let classifier = QueryClassifier::new();
        assert_eq!(
            classifier.classify("what diet suits me"),
            QueryType::WeightLoss
        );
        assert_eq!(
            classifier.classify("I need a diet plan"),
            QueryType::MealPlanning
        );
    }

    #[test]
    fn test_default_bucket() {
        let classifier = QueryClassifier::new();
        assert_eq!(
            classifier.classify("hello there"),
            QueryType::GeneralNutrition
        );
    }

    #[test]
    fn test_disclaimer_set() {
        assert!(QueryType::WeightLoss.needs_disclaimer());
        assert!(QueryType::CalorieCalculation.needs_disclaimer());
        assert!(!QueryType::RecipeAdvice.needs_disclaimer());
        assert!(!QueryType::GeneralNutrition.needs_disclaimer());
    }
}
