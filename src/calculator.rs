//! Daily energy and macronutrient calculations.
//!
//! Pure functions over a complete profile: Mifflin-St Jeor BMR, activity
//! scaled TDEE, goal-adjusted calorie target and the macro split in grams.
//! All values stay unrounded here; rounding happens only where numbers are
//! formatted for display.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, Gender, Goal, UserProfile};
use crate::nutrition_data::{MacroRatio, BALANCED_RATIO, HIGH_PROTEIN_RATIO};

/// Calories per gram of protein and carbohydrate.
const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;
/// Calories per gram of fat.
const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily macro amounts in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Computed daily needs for a complete profile. Values are unrounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNeeds {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: f64,
    /// Goal-adjusted daily calorie target
    pub target_calories: f64,
    /// Macro split of the target calories, in grams
    pub macros: MacroGrams,
    /// Ratio used for the split (fractions summing to 1.0)
    pub ratio: MacroRatio,
}

/// Outcome of a daily-needs calculation. An incomplete profile is a
/// normal, expected result driving the follow-up question flow, not an
/// error.
#[derive(Debug, Clone, Serialize)]
pub enum DailyNeedsOutcome {
    Ready(DailyNeeds),
    Incomplete { missing: Vec<&'static str> },
}

impl DailyNeedsOutcome {
    #[allow(dead_code)]
    pub fn as_ready(&self) -> Option<&DailyNeeds> {
        match self {
            DailyNeedsOutcome::Ready(needs) => Some(needs),
            DailyNeedsOutcome::Incomplete { .. } => None,
        }
    }
}

/// Basal Metabolic Rate via Mifflin-St Jeor.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Goal-adjusted daily calorie target.
pub fn target_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal.calorie_delta()
}

/// Convert a calorie budget into grams per macro using 4/4/9 kcal per gram.
pub fn macro_grams(calories: f64, ratio: &MacroRatio) -> MacroGrams {
    MacroGrams {
        protein_g: calories * ratio.protein / KCAL_PER_G_PROTEIN_CARB,
        carbs_g: calories * ratio.carbs / KCAL_PER_G_PROTEIN_CARB,
        fat_g: calories * ratio.fat / KCAL_PER_G_FAT,
    }
}

/// Macro ratio preset for a goal: cutting leans high-protein, everything
/// else uses the balanced split.
pub fn ratio_for_goal(goal: Goal) -> MacroRatio {
    match goal {
        Goal::LoseWeight => HIGH_PROTEIN_RATIO,
        Goal::MaintainWeight | Goal::GainWeight => BALANCED_RATIO,
    }
}

/// Compute full daily needs from a profile, or report which of the six
/// required fields are still missing.
pub fn calculate_daily_needs(profile: &UserProfile) -> DailyNeedsOutcome {
    let (Some(weight), Some(height), Some(age), Some(gender), Some(activity), Some(goal)) = (
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        profile.activity,
        profile.goal,
    ) else {
        return DailyNeedsOutcome::Incomplete {
            missing: profile.missing_fields(),
        };
    };

    let bmr_value = bmr(weight, height, age, gender);
    let tdee_value = tdee(bmr_value, activity);
    let target = target_calories(tdee_value, goal);
    let ratio = ratio_for_goal(goal);
    let macros = macro_grams(target, &ratio);

    DailyNeedsOutcome::Ready(DailyNeeds {
        bmr: bmr_value,
        tdee: tdee_value,
        target_calories: target,
        macros,
        ratio,
    })
}
