//! Survey input types
//!
//! The questionnaire answers a plan is generated from. Field ranges are
//! declared with `validator` attributes and enforced by
//! [`crate::validation::validate_survey`] before a survey reaches the
//! engine; the engine itself assumes the data is already in range.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::reference::EquipmentType;

// ============================================================================
// Enumerations
// ============================================================================

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn label(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Recomposition,
    Strength,
}

impl Goal {
    /// Human-readable goal name used in rationale text
    pub fn label(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fat loss",
            Goal::MuscleGain => "muscle gain",
            Goal::Recomposition => "recomposition",
            Goal::Strength => "strength",
        }
    }
}

/// Preferred pace of fat loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FatLossRate {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl FatLossRate {
    pub fn label(&self) -> &'static str {
        match self {
            FatLossRate::Conservative => "conservative",
            FatLossRate::Moderate => "moderate",
            FatLossRate::Aggressive => "aggressive",
        }
    }
}

/// Preferred pace of muscle gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGainRate {
    Lean,
    #[default]
    Moderate,
}

impl MuscleGainRate {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGainRate::Lean => "lean",
            MuscleGainRate::Moderate => "moderate",
        }
    }
}

/// Daily activity level outside of planned training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary (little to no exercise)",
            ActivityLevel::LightlyActive => "lightly active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => {
                "moderately active (moderate exercise 3-5 days/week)"
            }
            ActivityLevel::VeryActive => "very active (hard exercise 6-7 days/week)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

/// Resistance training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub fn all() -> &'static [Experience] {
        &[
            Experience::Beginner,
            Experience::Intermediate,
            Experience::Advanced,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }
}

/// Equipment tier the user trains with
///
/// Tiers are inclusive: anything doable with bodyweight is doable with
/// dumbbells, and a full gym covers everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    FullGym,
}

impl Equipment {
    pub fn all() -> &'static [Equipment] {
        &[Equipment::Bodyweight, Equipment::Dumbbells, Equipment::FullGym]
    }

    /// Equipment types usable at this tier
    pub fn available(&self) -> &'static [EquipmentType] {
        match self {
            Equipment::Bodyweight => &[EquipmentType::Bodyweight],
            Equipment::Dumbbells => &[EquipmentType::Bodyweight, EquipmentType::Dumbbells],
            Equipment::FullGym => &[
                EquipmentType::Bodyweight,
                EquipmentType::Dumbbells,
                EquipmentType::Barbell,
                EquipmentType::Cable,
                EquipmentType::Machine,
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Equipment::Bodyweight => "bodyweight",
            Equipment::Dumbbells => "dumbbells",
            Equipment::FullGym => "full gym",
        }
    }
}

/// Dietary style used to filter the food bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietStyle {
    NoPreference,
    Vegetarian,
    Other,
}

impl DietStyle {
    pub fn all() -> &'static [DietStyle] {
        &[DietStyle::NoPreference, DietStyle::Vegetarian, DietStyle::Other]
    }
}

/// Time available for cooking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookingTime {
    Low,
    Medium,
    High,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Survey Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    #[validate(range(min = 16, max = 100, message = "Age must be between 16 and 100 years"))]
    pub age: i32,
    pub sex: BiologicalSex,
    /// Height in centimeters
    #[serde(alias = "height")]
    #[validate(range(
        min = 100.0,
        max = 250.0,
        message = "Height must be between 100 and 250 cm"
    ))]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(alias = "weight")]
    #[validate(range(min = 30.0, max = 300.0, message = "Weight must be between 30 and 300 kg"))]
    pub weight_kg: f64,
}

/// Goal and, where the goal calls for one, its pace
///
/// A missing rate for a goal that needs one is treated as `moderate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInfo {
    pub goal: Goal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_loss_rate: Option<FatLossRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_gain_rate: Option<MuscleGainRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleInfo {
    pub activity_level: ActivityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 50000, message = "Daily steps must be between 0 and 50,000"))]
    pub daily_steps: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingInfo {
    pub experience: Experience,
    #[validate(range(min = 2, max = 6, message = "Training days must be between 2 and 6"))]
    pub days_per_week: u32,
    pub equipment: Equipment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPreferences {
    pub diet_style: DietStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[validate(range(min = 2, max = 5, message = "Meals per day must be between 2 and 5"))]
    pub meals_per_day: u32,
    pub cooking_time: CookingTime,
}

/// Recovery answers; every field is optional and an empty record is valid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 3.0, max = 12.0, message = "Sleep hours must be between 3 and 12"))]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 5, message = "Stress level must be between 1 and 5"))]
    pub stress_level: Option<u8>,
}

/// Complete questionnaire answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SurveyData {
    #[validate(nested)]
    pub basic_info: BasicInfo,
    pub goal_info: GoalInfo,
    #[validate(nested)]
    pub lifestyle_info: LifestyleInfo,
    #[validate(nested)]
    pub training_info: TrainingInfo,
    #[validate(nested)]
    pub nutrition_preferences: NutritionPreferences,
    #[serde(default)]
    #[validate(nested)]
    pub recovery_info: RecoveryInfo,
}

impl SurveyData {
    /// Limitations text if the user entered anything besides whitespace
    pub fn limitations(&self) -> Option<&str> {
        self.training_info
            .limitations
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}
