//! Energy and macro arithmetic
//!
//! Heuristic formulas, not clinical ones:
//! - BMR: Mifflin-St Jeor
//! - TDEE: BMR × fixed activity multiplier
//! - Target: TDEE adjusted by a goal-dependent percentage
//! - Macros: protein and fat by body weight, carbs fill the remainder

use crate::plan::{MacroPercentages, Macros, NutritionExplanation};
use crate::survey::{ActivityLevel, BiologicalSex, FatLossRate, Goal, MuscleGainRate, SurveyData};

/// Carbohydrate floor in grams, applied even when it overshoots the target
pub const MIN_CARBS_G: i32 = 50;

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure, rounded to the nearest kcal
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> i32 {
    (bmr * activity_level.multiplier()).round() as i32
}

/// Signed fraction applied to TDEE for a goal
///
/// A goal that needs a rate but has none uses the moderate rate.
pub fn calorie_adjustment(
    goal: Goal,
    fat_loss_rate: Option<FatLossRate>,
    muscle_gain_rate: Option<MuscleGainRate>,
) -> f64 {
    match goal {
        Goal::FatLoss => match fat_loss_rate.unwrap_or_default() {
            FatLossRate::Conservative => -0.15,
            FatLossRate::Moderate => -0.20,
            FatLossRate::Aggressive => -0.25,
        },
        Goal::MuscleGain => match muscle_gain_rate.unwrap_or_default() {
            MuscleGainRate::Lean => 0.05,
            MuscleGainRate::Moderate => 0.125,
        },
        Goal::Recomposition => -0.10,
        Goal::Strength => 0.05,
    }
}

pub fn calculate_target_calories(
    tdee: i32,
    goal: Goal,
    fat_loss_rate: Option<FatLossRate>,
    muscle_gain_rate: Option<MuscleGainRate>,
) -> i32 {
    let adjustment = calorie_adjustment(goal, fat_loss_rate, muscle_gain_rate);
    (tdee as f64 * (1.0 + adjustment)).round() as i32
}

/// Protein target in g per kg of body weight
pub fn protein_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => 2.2,
        Goal::Recomposition => 2.0,
        Goal::MuscleGain | Goal::Strength => 1.8,
    }
}

/// Fat target in g per kg of body weight
pub fn fat_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => 0.7,
        _ => 0.8,
    }
}

pub fn calculate_macros(target_calories: i32, weight_kg: f64, goal: Goal) -> Macros {
    let protein = (weight_kg * protein_per_kg(goal)).round() as i32;
    let fats = (weight_kg * fat_per_kg(goal)).round() as i32;

    let remaining = target_calories - protein * 4 - fats * 9;
    let carbs = ((remaining as f64 / 4.0).round() as i32).max(MIN_CARBS_G);

    Macros {
        protein,
        carbs,
        fats,
    }
}

/// Percent of macro energy per macro
///
/// The total is recomputed from the grams, so it can differ from the
/// calorie target when the carb floor kicked in. Each share is rounded on
/// its own and the three need not add up to exactly 100.
pub fn calculate_macro_percentages(macros: &Macros) -> MacroPercentages {
    let total = macros.calories();
    if total <= 0 {
        return MacroPercentages {
            protein: 0,
            carbs: 0,
            fats: 0,
        };
    }

    let share = |kcal: i32| (kcal as f64 / total as f64 * 100.0).round() as i32;
    MacroPercentages {
        protein: share(macros.protein * 4),
        carbs: share(macros.carbs * 4),
        fats: share(macros.fats * 9),
    }
}

fn adjustment_text(survey: &SurveyData) -> &'static str {
    let goal_info = &survey.goal_info;
    match goal_info.goal {
        Goal::FatLoss => match goal_info.fat_loss_rate.unwrap_or_default() {
            FatLossRate::Conservative => "a 15% deficit",
            FatLossRate::Moderate => "a 20% deficit",
            FatLossRate::Aggressive => "a 25% deficit",
        },
        Goal::MuscleGain => match goal_info.muscle_gain_rate.unwrap_or_default() {
            MuscleGainRate::Lean => "a 5% surplus",
            MuscleGainRate::Moderate => "a 10-15% surplus",
        },
        Goal::Recomposition => "a slight 10% deficit",
        Goal::Strength => "a small 5% surplus",
    }
}

fn protein_rationale(goal: Goal) -> &'static str {
    match goal {
        Goal::FatLoss => {
            "Higher protein during fat loss helps preserve muscle mass and keeps you feeling fuller."
        }
        Goal::MuscleGain => "This amount supports optimal muscle protein synthesis for growth.",
        Goal::Recomposition | Goal::Strength => {
            "This supports your training recovery and body composition goals."
        }
    }
}

fn change_rate_text(survey: &SurveyData) -> String {
    let goal_info = &survey.goal_info;
    match goal_info.goal {
        Goal::FatLoss => {
            let rate = goal_info.fat_loss_rate.unwrap_or_default();
            let weekly = match rate {
                FatLossRate::Conservative => "0.25-0.5",
                FatLossRate::Moderate => "0.5-0.75",
                FatLossRate::Aggressive => "0.75-1",
            };
            format!(
                "A {} deficit means you can expect to lose approximately {}kg per week. \
                 This rate balances progress with muscle retention and adherence.",
                rate.label(),
                weekly
            )
        }
        Goal::MuscleGain => {
            let rate = goal_info.muscle_gain_rate.unwrap_or_default();
            let weekly = match rate {
                MuscleGainRate::Lean => "0.1-0.25",
                MuscleGainRate::Moderate => "0.25-0.5",
            };
            format!(
                "A {} surplus supports muscle gain while minimizing fat accumulation. \
                 Expect to gain {}kg per week under optimal conditions.",
                rate.label(),
                weekly
            )
        }
        Goal::Recomposition => "Body recomposition is a slower process where you simultaneously \
             lose fat and build muscle. Weight changes may be minimal, but body composition \
             will improve over time."
            .to_string(),
        Goal::Strength => "A small surplus fuels heavy training and recovery. Expect body weight \
             to hold steady or rise slowly while your working weights climb from week to week."
            .to_string(),
    }
}

/// Plain-language rationale for the calorie and protein targets
pub fn explain_nutrition(
    survey: &SurveyData,
    bmr: f64,
    tdee: i32,
    target_calories: i32,
) -> NutritionExplanation {
    let basic = &survey.basic_info;
    let goal = survey.goal_info.goal;

    let calorie_reasoning = format!(
        "Your Basal Metabolic Rate (BMR) is {} calories, calculated using the Mifflin-St Jeor \
         equation based on your weight ({}kg), height ({}cm), age ({}), and sex ({}). Given your \
         {} lifestyle, your Total Daily Energy Expenditure (TDEE) is {} calories. For your {} \
         goal, we've applied {}, bringing your target to {} calories per day.",
        bmr.round() as i64,
        basic.weight_kg,
        basic.height_cm,
        basic.age,
        basic.sex.label(),
        survey.lifestyle_info.activity_level.description(),
        tdee,
        goal.label(),
        adjustment_text(survey),
        target_calories,
    );

    let protein_reasoning = format!(
        "Protein is set at {:.1}g per kg of body weight. {}",
        protein_per_kg(goal),
        protein_rationale(goal)
    );

    NutritionExplanation {
        calorie_reasoning,
        protein_reasoning,
        change_rate_reasoning: change_rate_text(survey),
    }
}
