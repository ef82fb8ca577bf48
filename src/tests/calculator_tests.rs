//! Calculator Tests
//!
//! Reference values for the Mifflin-St Jeor chain and the profile
//! completeness gate.

use crate::calculator::{
    bmr, calculate_daily_needs, macro_grams, target_calories, tdee, DailyNeedsOutcome,
};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};
use crate::nutrition_data::{BALANCED_RATIO, HIGH_PROTEIN_RATIO};

fn complete_profile() -> UserProfile {
    UserProfile {
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        age: Some(25),
        gender: Some(Gender::Male),
        activity: Some(ActivityLevel::ModeratelyActive),
        goal: Some(Goal::LoseWeight),
        dietary_restriction: None,
    }
}

#[test]
fn test_bmr_reference_values() {
    assert!((bmr(70.0, 175.0, 25, Gender::Male) - 1673.75).abs() < 1e-9);
    assert!((bmr(70.0, 175.0, 25, Gender::Female) - 1512.75).abs() < 1e-9);
}

#[test]
fn test_activity_multipliers() {
    let base = 1000.0;
    assert!((tdee(base, ActivityLevel::Sedentary) - 1200.0).abs() < 1e-9);
    assert!((tdee(base, ActivityLevel::LightlyActive) - 1375.0).abs() < 1e-9);
    assert!((tdee(base, ActivityLevel::ModeratelyActive) - 1550.0).abs() < 1e-9);
    assert!((tdee(base, ActivityLevel::VeryActive) - 1725.0).abs() < 1e-9);
    assert!((tdee(base, ActivityLevel::ExtremelyActive) - 1900.0).abs() < 1e-9);
}

#[test]
fn test_reference_chain() {
    // The worked example: male, 70 kg, 175 cm, 25 y, moderately active,
    // losing weight.
    let bmr_value = bmr(70.0, 175.0, 25, Gender::Male);
    let tdee_value = tdee(bmr_value, ActivityLevel::ModeratelyActive);
    let target = target_calories(tdee_value, Goal::LoseWeight);

    assert!((tdee_value - 2594.3125).abs() < 1e-9);
    assert!((target - 2094.3125).abs() < 1e-9);
    // Displayed values
    assert_eq!(bmr_value.round() as i64, 1674);
    assert_eq!(target.round() as i64, 2094);
}

#[test]
fn test_macro_grams_kcal_per_gram() {
    let grams = macro_grams(2094.3125, &HIGH_PROTEIN_RATIO);
    assert!((grams.protein_g - 2094.3125 * 0.35 / 4.0).abs() < 1e-9);
    assert!((grams.carbs_g - 2094.3125 * 0.35 / 4.0).abs() < 1e-9);
    assert!((grams.fat_g - 2094.3125 * 0.30 / 9.0).abs() < 1e-9);
    // Displayed: 183g / 183g / 70g
    assert_eq!(grams.protein_g.round() as i64, 183);
    assert_eq!(grams.fat_g.round() as i64, 70);
}

#[test]
fn test_values_stay_unrounded_internally() {
    let outcome = calculate_daily_needs(&complete_profile());
    let needs = outcome.as_ready().expect("complete profile");

    // Fractional parts survive all the way to the caller.
    assert!((needs.bmr - 1673.75).abs() < 1e-9);
    assert!((needs.target_calories - 2094.3125).abs() < 1e-9);
}

#[test]
fn test_completeness_gate_single_missing_field() {
    let mut profile = complete_profile();
    profile.gender = None;

    match calculate_daily_needs(&profile) {
        DailyNeedsOutcome::Incomplete { missing } => assert_eq!(missing, vec!["gender"]),
        DailyNeedsOutcome::Ready(_) => panic!("expected incomplete"),
    }
}

#[test]
fn test_completeness_gate_reports_all_missing() {
    match calculate_daily_needs(&UserProfile::default()) {
        DailyNeedsOutcome::Incomplete { missing } => {
            assert_eq!(
                missing,
                vec!["weight", "height", "age", "gender", "activity", "goal"]
            );
        }
        DailyNeedsOutcome::Ready(_) => panic!("expected incomplete"),
    }
}

#[test]
fn test_goal_changes_ratio_and_target() {
    let mut profile = complete_profile();

    profile.goal = Some(Goal::GainWeight);
    let gain = calculate_daily_needs(&profile);
    let gain = gain.as_ready().expect("complete profile");
    assert_eq!(gain.ratio, BALANCED_RATIO);
    assert!((gain.target_calories - (2594.3125 + 500.0)).abs() < 1e-9);

    profile.goal = Some(Goal::MaintainWeight);
    let maintain = calculate_daily_needs(&profile);
    let maintain = maintain.as_ready().expect("complete profile");
    assert_eq!(maintain.ratio, BALANCED_RATIO);
    assert!((maintain.target_calories - 2594.3125).abs() < 1e-9);
}
