//! Shared test fixtures

use crate::survey::*;

/// 30-year-old male, 175cm/75kg, moderately active, moderate fat loss,
/// intermediate lifter training 4 days a week in a full gym
pub fn sample_survey() -> SurveyData {
    SurveyData {
        basic_info: BasicInfo {
            age: 30,
            sex: BiologicalSex::Male,
            height_cm: 175.0,
            weight_kg: 75.0,
        },
        goal_info: GoalInfo {
            goal: Goal::FatLoss,
            fat_loss_rate: Some(FatLossRate::Moderate),
            muscle_gain_rate: None,
        },
        lifestyle_info: LifestyleInfo {
            activity_level: ActivityLevel::ModeratelyActive,
            daily_steps: Some(8000),
        },
        training_info: TrainingInfo {
            experience: Experience::Intermediate,
            days_per_week: 4,
            equipment: Equipment::FullGym,
            limitations: None,
        },
        nutrition_preferences: NutritionPreferences {
            diet_style: DietStyle::NoPreference,
            allergies: None,
            meals_per_day: 4,
            cooking_time: CookingTime::Medium,
        },
        recovery_info: RecoveryInfo {
            sleep_hours: Some(7.5),
            stress_level: Some(3),
        },
    }
}
