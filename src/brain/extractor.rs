//! Biometric extraction from free text.
//!
//! A sequence of independent, named pattern-matchers, each returning an
//! optional typed value, composed into a partial profile. Pure and
//! deterministic - no state, no side effects.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Pounds to kilograms.
const LB_TO_KG: f64 = 0.453592;
/// Inches to centimeters.
const IN_TO_CM: f64 = 2.54;

// Compile patterns once at startup. expect() is acceptable here: a malformed
// pattern is unrecoverable and caught by the test suite.
static WEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kg|pounds?|lbs?)\b").expect("Invalid regex: weight pattern")
});

static HEIGHT_CM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:cm|centimeters?)\b")
        .expect("Invalid regex: height cm pattern")
});

static HEIGHT_FT_IN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\d+)\s*(?:feet|ft|')\s*(\d+)\s*(?:inches|in|")"#)
        .expect("Invalid regex: height feet/inches pattern")
});

static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:years?\s*old|yr|age)").expect("Invalid regex: age pattern")
});

// Self-introduction form, e.g. "I'm 25 male". Only one or two digits so a
// height or weight mention never reads as an age; the word following the
// number is captured so unit-bearing mentions ("I'm 70 kg") can be skipped.
static AGE_INTRO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bi\s*(?:'?m|am)\s+(\d{1,2})\b\s*([a-z]*)")
        .expect("Invalid regex: age intro pattern")
});

/// Words that mark the number after "I'm" as a measurement, not an age.
const NON_AGE_UNITS: [&str; 10] = [
    "kg", "cm", "lb", "lbs", "pound", "pounds", "feet", "ft", "inches", "centimeters",
];

static GENDER_MALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:male|man|guy)\b").expect("Invalid regex: male pattern")
});

static GENDER_FEMALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:female|woman|girl)\b").expect("Invalid regex: female pattern")
});

// Activity phrase sets, checked in this exact order; first match wins.
static ACTIVITY_PATTERNS: LazyLock<Vec<(Regex, ActivityLevel)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(?:sedentary|desk job|no exercise)\b")
                .expect("Invalid regex: sedentary pattern"),
            ActivityLevel::Sedentary,
        ),
        (
            Regex::new(r"(?i)\b(?:lightly active|light exercise)\b")
                .expect("Invalid regex: lightly active pattern"),
            ActivityLevel::LightlyActive,
        ),
        (
            Regex::new(r"(?i)\b(?:moderately active|moderate exercise)\b")
                .expect("Invalid regex: moderately active pattern"),
            ActivityLevel::ModeratelyActive,
        ),
        (
            Regex::new(r"(?i)\b(?:very active|heavy exercise)\b")
                .expect("Invalid regex: very active pattern"),
            ActivityLevel::VeryActive,
        ),
        (
            Regex::new(r"(?i)\b(?:extremely active|athlete)\b")
                .expect("Invalid regex: extremely active pattern"),
            ActivityLevel::ExtremelyActive,
        ),
    ]
});

// Goal phrase sets, checked lose -> gain -> maintain; first match wins.
static GOAL_PATTERNS: LazyLock<Vec<(Regex, Goal)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(?:lose weight|weight loss|cut|cutting)\b")
                .expect("Invalid regex: lose weight pattern"),
            Goal::LoseWeight,
        ),
        (
            Regex::new(r"(?i)\b(?:gain weight|bulk|bulking|gain muscle)\b")
                .expect("Invalid regex: gain weight pattern"),
            Goal::GainWeight,
        ),
        (
            Regex::new(r"(?i)\b(?:maintain|maintenance)\b")
                .expect("Invalid regex: maintain pattern"),
            Goal::MaintainWeight,
        ),
    ]
});

/// Extract weight in kilograms, converting from pounds where needed.
fn extract_weight_kg(text: &str) -> Option<f64> {
    let captures = WEIGHT_PATTERN.captures(text)?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str().to_lowercase();

    if unit.starts_with("lb") || unit.starts_with("pound") {
        Some(value * LB_TO_KG)
    } else {
        Some(value)
    }
}

/// Extract height in centimeters. The centimeter form takes priority over
/// the feet/inches form when both would match.
fn extract_height_cm(text: &str) -> Option<f64> {
    if let Some(captures) = HEIGHT_CM_PATTERN.captures(text) {
        return captures.get(1)?.as_str().parse().ok();
    }

    let captures = HEIGHT_FT_IN_PATTERN.captures(text)?;
    let feet: f64 = captures.get(1)?.as_str().parse().ok()?;
    let inches: f64 = captures.get(2)?.as_str().parse().ok()?;
    Some((feet * 12.0 + inches) * IN_TO_CM)
}

/// Extract age in years. Accepts an explicit marker ("25 years old",
/// "25 yr", "age 25" reversed as "25 age") or the self-introduction form
/// ("I'm 25").
fn extract_age(text: &str) -> Option<u32> {
    if let Some(captures) = AGE_PATTERN.captures(text) {
        return captures.get(1)?.as_str().parse().ok();
    }

    let captures = AGE_INTRO_PATTERN.captures(text)?;
    let trailing = captures
        .get(2)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();
    if NON_AGE_UNITS.contains(&trailing.as_str()) {
        return None;
    }
    captures.get(1)?.as_str().parse().ok()
}

/// Extract gender. Male cues are checked before female cues; when both
/// appear in one message the male branch wins.
fn extract_gender(text: &str) -> Option<Gender> {
    if GENDER_MALE_PATTERN.is_match(text) {
        Some(Gender::Male)
    } else if GENDER_FEMALE_PATTERN.is_match(text) {
        Some(Gender::Female)
    } else {
        None
    }
}

fn extract_activity(text: &str) -> Option<ActivityLevel> {
    ACTIVITY_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, level)| *level)
}

fn extract_goal(text: &str) -> Option<Goal> {
    GOAL_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, goal)| *goal)
}

/// Parse free text into a partial profile. Only fields whose pattern
/// matches are populated; everything else stays `None`.
pub fn extract(text: &str) -> UserProfile {
    UserProfile {
        weight_kg: extract_weight_kg(text),
        height_cm: extract_height_cm(text),
        age: extract_age(text),
        gender: extract_gender(text),
        activity: extract_activity(text),
        goal: extract_goal(text),
        dietary_restriction: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_kg() {
        let profile = extract("I weigh 70kg");
        assert_eq!(profile.weight_kg, Some(70.0));
    }

    #[test]
    fn test_weight_pounds_converted() {
        let profile = extract("I weigh 154 lbs");
        let weight = profile.weight_kg.unwrap();
        assert!((weight - 154.0 * 0.453592).abs() < 1e-9);
        assert!((weight - 70.0).abs() < 0.2);
    }

    #[test]
    fn test_height_cm_priority_over_feet() {
        let profile = extract("I'm 175 cm, used to say 5 feet 9 inches");
        assert_eq!(profile.height_cm, Some(175.0));
    }

    #[test]
    fn test_height_feet_inches() {
        let profile = extract("I'm 5 feet 9 inches tall");
        let height = profile.height_cm.unwrap();
        assert!((height - (5.0 * 12.0 + 9.0) * 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_age_with_marker() {
        assert_eq!(extract("I am 25 years old").age, Some(25));
        assert_eq!(extract("25 yr").age, Some(25));
    }

    #[test]
    fn test_age_self_introduction() {
        let profile = extract("I'm 25 male 175cm 70kg");
        assert_eq!(profile.age, Some(25));
    }

    #[test]
    fn test_intro_number_with_unit_is_not_age() {
        let profile = extract("I'm 70kg");
        assert_eq!(profile.age, None);
        assert_eq!(profile.weight_kg, Some(70.0));
    }

    #[test]
    fn test_gender_male_wins_tie() {
        assert_eq!(extract("I'm a woman, not a man").gender, Some(Gender::Male));
        assert_eq!(extract("female here").gender, Some(Gender::Female));
    }

    #[test]
    fn test_male_not_matched_inside_female() {
        assert_eq!(extract("I'm female").gender, Some(Gender::Female));
    }

    #[test]
    fn test_activity_levels() {
        assert_eq!(
            extract("I have a desk job").activity,
            Some(ActivityLevel::Sedentary)
        );
        assert_eq!(
            extract("moderately active").activity,
            Some(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(
            extract("I'm an athlete").activity,
            Some(ActivityLevel::ExtremelyActive)
        );
    }

    #[test]
    fn test_goals() {
        assert_eq!(extract("I want to lose weight").goal, Some(Goal::LoseWeight));
        assert_eq!(extract("time to bulk").goal, Some(Goal::GainWeight));
        assert_eq!(extract("just maintain").goal, Some(Goal::MaintainWeight));
        assert_eq!(extract("I'm cutting right now").goal, Some(Goal::LoseWeight));
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let profile = extract("what should I eat for breakfast?");
        assert!(profile.is_empty());
    }
}
