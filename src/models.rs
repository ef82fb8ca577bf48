use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Gender used by the Mifflin-St Jeor BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(AppError::InvalidArgument(format!(
                "gender must be 'male' or 'female', got '{}'",
                other
            ))),
        }
    }
}

/// Self-reported activity level, scaling BMR to TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    /// TDEE multiplier for this activity level.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extremely_active" => Ok(ActivityLevel::ExtremelyActive),
            other => Err(AppError::InvalidArgument(format!(
                "unknown activity level '{}'",
                other
            ))),
        }
    }
}

/// Weight management goal, shifting the daily calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::MaintainWeight => "maintain_weight",
            Goal::GainWeight => "gain_weight",
        }
    }

    /// Daily calorie delta applied on top of TDEE.
    pub fn calorie_delta(&self) -> f64 {
        match self {
            Goal::LoseWeight => -500.0,
            Goal::MaintainWeight => 0.0,
            Goal::GainWeight => 500.0,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose_weight" => Ok(Goal::LoseWeight),
            "maintain_weight" => Ok(Goal::MaintainWeight),
            "gain_weight" => Ok(Goal::GainWeight),
            other => Err(AppError::InvalidArgument(format!(
                "unknown goal '{}'",
                other
            ))),
        }
    }
}

/// Biometric and preference facts for one user, accumulated across turns.
///
/// Every field stays `None` until a message mentions it; a later mention
/// overwrites, nothing ever clears a field short of a full reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub dietary_restriction: Option<String>,
}

/// Field names required for a daily-needs calculation, in reporting order.
pub const REQUIRED_FIELDS: [&str; 6] = ["weight", "height", "age", "gender", "activity", "goal"];

impl UserProfile {
    /// Upsert every populated field of `partial` into this profile.
    /// Fields absent from `partial` are left untouched.
    pub fn merge(&mut self, partial: &UserProfile) {
        if partial.weight_kg.is_some() {
            self.weight_kg = partial.weight_kg;
        }
        if partial.height_cm.is_some() {
            self.height_cm = partial.height_cm;
        }
        if partial.age.is_some() {
            self.age = partial.age;
        }
        if partial.gender.is_some() {
            self.gender = partial.gender;
        }
        if partial.activity.is_some() {
            self.activity = partial.activity;
        }
        if partial.goal.is_some() {
            self.goal = partial.goal;
        }
        if partial.dietary_restriction.is_some() {
            self.dietary_restriction = partial.dietary_restriction.clone();
        }
    }

    /// Required fields still unset, in the fixed reporting order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push("weight");
        }
        if self.height_cm.is_none() {
            missing.push("height");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.activity.is_none() {
            missing.push("activity");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        missing
    }

    /// True when all six fields needed for a calculation are present.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// True when no field at all has been populated yet.
    pub fn is_empty(&self) -> bool {
        *self == UserProfile::default()
    }
}

/// The sender of a single conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message within a conversation. Held in a bounded per-user history,
/// never persisted across process restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
