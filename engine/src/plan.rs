//! Output records produced by the engine
//!
//! Everything here is built once per generation call and handed to the
//! caller; the engine keeps no reference to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::health_metrics::BmiSnapshot;
use crate::reference::{Exercise, FoodItem};
use crate::survey::SurveyData;
use crate::workout::SplitType;

// ============================================================================
// Nutrition
// ============================================================================

/// Daily or per-meal macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

impl Macros {
    /// Energy from the three macros (4/4/9 kcal per gram)
    pub fn calories(&self) -> i32 {
        4 * self.protein + 4 * self.carbs + 9 * self.fats
    }
}

/// Share of macro energy per macro, each rounded on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

impl MacroPercentages {
    pub fn total(&self) -> i32 {
        self.protein + self.carbs + self.fats
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub target_calories: i32,
    pub target_macros: Macros,
}

/// Diet-filtered foods, one list per category
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodBank {
    pub proteins: Vec<FoodItem>,
    pub carbs: Vec<FoodItem>,
    pub fats: Vec<FoodItem>,
    pub fiber_veg: Vec<FoodItem>,
}

impl FoodBank {
    /// The first `limit` foods of every category
    pub fn suggestions(&self, limit: usize) -> FoodBank {
        let head = |foods: &[FoodItem]| foods.iter().take(limit).cloned().collect();
        FoodBank {
            proteins: head(&self.proteins),
            carbs: head(&self.carbs),
            fats: head(&self.fats),
            fiber_veg: head(&self.fiber_veg),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.proteins
            .iter()
            .chain(&self.carbs)
            .chain(&self.fats)
            .chain(&self.fiber_veg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionExplanation {
    pub calorie_reasoning: String,
    pub protein_reasoning: String,
    pub change_rate_reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    pub daily_calories: i32,
    /// BMR rounded to the nearest kcal
    pub bmr: i32,
    pub tdee: i32,
    pub macros: Macros,
    pub macro_percentages: MacroPercentages,
    pub meals: Vec<Meal>,
    pub food_bank: FoodBank,
    pub explanation: NutritionExplanation,
}

// ============================================================================
// Workout
// ============================================================================

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePrescription {
    pub exercise: Exercise,
    pub sets: u32,
    pub reps_min: u32,
    pub reps_max: u32,
    pub rest_seconds: u32,
    pub rir_target: u32,
    /// Rep range is a hold in seconds rather than a rep count
    #[serde(default, skip_serializing_if = "is_false")]
    pub timed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub name: String,
    pub focus: String,
    pub exercises: Vec<ExercisePrescription>,
    /// Roles with no exercise available for the user's equipment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omitted_roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRule {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub split_type: SplitType,
    pub days_per_week: u32,
    pub schedule: Vec<WorkoutDay>,
    pub progression_rules: Vec<ProgressionRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations_warning: Option<String>,
}

// ============================================================================
// Generated Plan
// ============================================================================

/// The complete artifact handed to presentation and export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub survey_data: SurveyData,
    pub nutrition_plan: NutritionPlan,
    pub workout_plan: WorkoutPlan,
    pub body_metrics: BmiSnapshot,
    pub generated_at: DateTime<Utc>,
}
