//! Nutrition targets and meal planning

pub mod assembler;
pub mod calculator;

pub use assembler::{assemble_nutrition_plan, filter_food_bank, meal_distribution, split_meals, MealSlot};
pub use calculator::{
    calculate_bmr, calculate_macro_percentages, calculate_macros, calculate_target_calories,
    calculate_tdee, calorie_adjustment, explain_nutrition, fat_per_kg, protein_per_kg, MIN_CARBS_G,
};
