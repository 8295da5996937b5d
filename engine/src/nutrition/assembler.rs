//! Turns calculator output into a complete nutrition plan

use tracing::debug;

use crate::plan::{FoodBank, Macros, Meal, NutritionPlan};
use crate::reference::{FoodCatalog, FoodCategory};
use crate::survey::{DietStyle, SurveyData};

use super::calculator::{
    calculate_bmr, calculate_macro_percentages, calculate_macros, calculate_target_calories,
    calculate_tdee, explain_nutrition,
};

/// One slot of a meal distribution template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealSlot {
    pub name: &'static str,
    pub fraction: f64,
}

const fn slot(name: &'static str, fraction: f64) -> MealSlot {
    MealSlot { name, fraction }
}

const TWO_MEALS: &[MealSlot] = &[
    slot("Meal 1 (Late Breakfast/Early Lunch)", 0.5),
    slot("Meal 2 (Dinner)", 0.5),
];

const THREE_MEALS: &[MealSlot] = &[
    slot("Breakfast", 0.3),
    slot("Lunch", 0.4),
    slot("Dinner", 0.3),
];

const FOUR_MEALS: &[MealSlot] = &[
    slot("Breakfast", 0.25),
    slot("Lunch", 0.3),
    slot("Snack", 0.15),
    slot("Dinner", 0.3),
];

const FIVE_MEALS: &[MealSlot] = &[
    slot("Breakfast", 0.2),
    slot("Mid-Morning Snack", 0.1),
    slot("Lunch", 0.3),
    slot("Afternoon Snack", 0.1),
    slot("Dinner", 0.3),
];

/// Distribution template for a meal count; unsupported counts get three meals
pub fn meal_distribution(meals_per_day: u32) -> &'static [MealSlot] {
    match meals_per_day {
        2 => TWO_MEALS,
        4 => FOUR_MEALS,
        5 => FIVE_MEALS,
        _ => THREE_MEALS,
    }
}

/// Split daily targets across meals
///
/// Every value is rounded on its own, so per-meal sums may drift from the
/// daily totals by up to one unit per meal.
pub fn split_meals(daily_calories: i32, macros: &Macros, meals_per_day: u32) -> Vec<Meal> {
    let portion = |value: i32, fraction: f64| (value as f64 * fraction).round() as i32;

    meal_distribution(meals_per_day)
        .iter()
        .map(|slot| Meal {
            name: slot.name.to_string(),
            target_calories: portion(daily_calories, slot.fraction),
            target_macros: Macros {
                protein: portion(macros.protein, slot.fraction),
                carbs: portion(macros.carbs, slot.fraction),
                fats: portion(macros.fats, slot.fraction),
            },
        })
        .collect()
}

/// Foods compatible with a diet style, one list per category
pub fn filter_food_bank(catalog: &FoodCatalog, diet: DietStyle) -> FoodBank {
    FoodBank {
        proteins: catalog.compatible(FoodCategory::Protein, diet),
        carbs: catalog.compatible(FoodCategory::Carbs, diet),
        fats: catalog.compatible(FoodCategory::Fats, diet),
        fiber_veg: catalog.compatible(FoodCategory::FiberVeg, diet),
    }
}

/// Build the nutrition plan for a survey
pub fn assemble_nutrition_plan(survey: &SurveyData, catalog: &FoodCatalog) -> NutritionPlan {
    let basic = &survey.basic_info;
    let goal_info = &survey.goal_info;
    let preferences = &survey.nutrition_preferences;

    let bmr = calculate_bmr(basic.weight_kg, basic.height_cm, basic.age, basic.sex);
    let tdee = calculate_tdee(bmr, survey.lifestyle_info.activity_level);
    let daily_calories = calculate_target_calories(
        tdee,
        goal_info.goal,
        goal_info.fat_loss_rate,
        goal_info.muscle_gain_rate,
    );
    let macros = calculate_macros(daily_calories, basic.weight_kg, goal_info.goal);

    debug!(
        goal = %goal_info.goal,
        tdee,
        daily_calories,
        protein = macros.protein,
        carbs = macros.carbs,
        fats = macros.fats,
        "Nutrition targets calculated"
    );

    NutritionPlan {
        daily_calories,
        bmr: bmr.round() as i32,
        tdee,
        macros,
        macro_percentages: calculate_macro_percentages(&macros),
        meals: split_meals(daily_calories, &macros, preferences.meals_per_day),
        food_bank: filter_food_bank(catalog, preferences.diet_style),
        explanation: explain_nutrition(survey, bmr, tdee, daily_calories),
    }
}
