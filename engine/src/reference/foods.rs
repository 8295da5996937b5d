//! Food reference table
//!
//! Foods are grouped into four category tables. Each item carries the set
//! of diet styles it is compatible with; the nutrition assembler filters on
//! that set and nothing else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::ReferenceDataError;
use crate::survey::DietStyle;

/// Food category (which table an item lives in)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Protein,
    Carbs,
    Fats,
    FiberVeg,
}

/// A single reference food, macros per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    pub serving_size: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
    pub category: FoodCategory,
    pub diet_compatibility: BTreeSet<DietStyle>,
}

impl FoodItem {
    pub fn is_compatible_with(&self, diet: DietStyle) -> bool {
        self.diet_compatibility.contains(&diet)
    }

    /// Energy implied by the macros (4/4/9 kcal per gram)
    pub fn macro_calories(&self) -> f64 {
        4.0 * self.protein + 4.0 * self.carbs + 9.0 * self.fats
    }
}

#[derive(Deserialize)]
struct FoodFile {
    foods: Vec<FoodItem>,
}

/// The four category tables
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    proteins: Vec<FoodItem>,
    carbs: Vec<FoodItem>,
    fats: Vec<FoodItem>,
    fiber_veg: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Group items into their category tables, keeping input order
    pub fn from_items(items: impl IntoIterator<Item = FoodItem>) -> Self {
        let mut catalog = Self::default();
        for item in items {
            match item.category {
                FoodCategory::Protein => catalog.proteins.push(item),
                FoodCategory::Carbs => catalog.carbs.push(item),
                FoodCategory::Fats => catalog.fats.push(item),
                FoodCategory::FiberVeg => catalog.fiber_veg.push(item),
            }
        }
        catalog
    }

    /// Load a catalog from `{"foods": [...]}`
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let file: FoodFile = serde_json::from_str(json)?;
        Ok(Self::from_items(file.foods))
    }

    pub fn category(&self, category: FoodCategory) -> &[FoodItem] {
        match category {
            FoodCategory::Protein => &self.proteins,
            FoodCategory::Carbs => &self.carbs,
            FoodCategory::Fats => &self.fats,
            FoodCategory::FiberVeg => &self.fiber_veg,
        }
    }

    /// Items of one category compatible with a diet, in table order
    pub fn compatible(&self, category: FoodCategory, diet: DietStyle) -> Vec<FoodItem> {
        self.category(category)
            .iter()
            .filter(|food| food.is_compatible_with(diet))
            .cloned()
            .collect()
    }

    /// Alternatives for a food: same category, same diet, not the food itself
    pub fn swaps_for(&self, food: &FoodItem, diet: DietStyle) -> Vec<&FoodItem> {
        self.category(food.category)
            .iter()
            .filter(|candidate| candidate.is_compatible_with(diet) && candidate.name != food.name)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.proteins
            .iter()
            .chain(&self.carbs)
            .chain(&self.fats)
            .chain(&self.fiber_veg)
    }

    pub fn len(&self) -> usize {
        self.proteins.len() + self.carbs.len() + self.fats.len() + self.fiber_veg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The built-in food table
    pub fn builtin() -> Self {
        Self::from_items(builtin_foods())
    }
}

const ALL_DIETS: &[DietStyle] = &[DietStyle::NoPreference, DietStyle::Vegetarian, DietStyle::Other];
const MEAT_DIETS: &[DietStyle] = &[DietStyle::NoPreference, DietStyle::Other];

#[allow(clippy::too_many_arguments)]
fn food(
    name: &str,
    serving_size: &str,
    protein: f64,
    carbs: f64,
    fats: f64,
    calories: f64,
    category: FoodCategory,
    diets: &[DietStyle],
) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        serving_size: serving_size.to_string(),
        protein,
        carbs,
        fats,
        calories,
        category,
        diet_compatibility: diets.iter().copied().collect(),
    }
}

fn builtin_foods() -> Vec<FoodItem> {
    use FoodCategory::*;

    vec![
        // Protein
        food("Chicken Breast", "150g", 46.0, 0.0, 5.0, 231.0, Protein, MEAT_DIETS),
        food("Salmon", "150g", 34.0, 0.0, 18.0, 298.0, Protein, MEAT_DIETS),
        food("Lean Beef", "150g", 38.0, 0.0, 12.0, 264.0, Protein, MEAT_DIETS),
        food("Turkey Breast", "150g", 44.0, 0.0, 3.0, 203.0, Protein, MEAT_DIETS),
        food("Eggs (3 large)", "3 eggs", 19.0, 1.0, 15.0, 215.0, Protein, ALL_DIETS),
        food("Egg Whites (6)", "6 whites", 22.0, 1.0, 0.0, 92.0, Protein, ALL_DIETS),
        food("Greek Yogurt", "200g", 20.0, 8.0, 0.0, 112.0, Protein, ALL_DIETS),
        food("Cottage Cheese", "200g", 22.0, 6.0, 2.0, 130.0, Protein, ALL_DIETS),
        food("Tofu", "200g", 20.0, 4.0, 12.0, 200.0, Protein, ALL_DIETS),
        food("Tempeh", "150g", 30.0, 14.0, 14.0, 298.0, Protein, ALL_DIETS),
        food("Lentils (cooked)", "200g", 18.0, 40.0, 1.0, 241.0, Protein, ALL_DIETS),
        food("Chickpeas (cooked)", "200g", 15.0, 45.0, 4.0, 276.0, Protein, ALL_DIETS),
        food("Tuna (canned)", "150g", 40.0, 0.0, 1.0, 169.0, Protein, MEAT_DIETS),
        food("Shrimp", "150g", 28.0, 1.0, 2.0, 134.0, Protein, MEAT_DIETS),
        food("Whey Protein", "1 scoop (30g)", 24.0, 3.0, 1.0, 117.0, Protein, ALL_DIETS),
        // Carbs
        food("White Rice (cooked)", "200g", 4.0, 56.0, 0.0, 240.0, Carbs, ALL_DIETS),
        food("Brown Rice (cooked)", "200g", 5.0, 46.0, 2.0, 222.0, Carbs, ALL_DIETS),
        food("Oatmeal (dry)", "80g", 11.0, 54.0, 6.0, 314.0, Carbs, ALL_DIETS),
        food("Sweet Potato", "200g", 4.0, 41.0, 0.0, 180.0, Carbs, ALL_DIETS),
        food("White Potato", "200g", 4.0, 36.0, 0.0, 160.0, Carbs, ALL_DIETS),
        food("Whole Wheat Bread", "2 slices (70g)", 8.0, 34.0, 3.0, 195.0, Carbs, ALL_DIETS),
        food("Whole Wheat Pasta (cooked)", "200g", 10.0, 50.0, 2.0, 258.0, Carbs, ALL_DIETS),
        food("Quinoa (cooked)", "200g", 9.0, 40.0, 4.0, 232.0, Carbs, ALL_DIETS),
        food("Banana", "1 large (136g)", 2.0, 31.0, 0.0, 132.0, Carbs, ALL_DIETS),
        food("Apple", "1 medium (180g)", 0.0, 25.0, 0.0, 100.0, Carbs, ALL_DIETS),
        food("Berries", "150g", 1.0, 18.0, 0.0, 76.0, Carbs, ALL_DIETS),
        food("Couscous (cooked)", "200g", 6.0, 46.0, 0.0, 208.0, Carbs, ALL_DIETS),
        // Fats
        food("Avocado", "1/2 medium", 2.0, 6.0, 15.0, 167.0, Fats, ALL_DIETS),
        food("Olive Oil", "1 tbsp (15ml)", 0.0, 0.0, 14.0, 126.0, Fats, ALL_DIETS),
        food("Almonds", "30g", 6.0, 6.0, 15.0, 179.0, Fats, ALL_DIETS),
        food("Walnuts", "30g", 4.0, 4.0, 18.0, 194.0, Fats, ALL_DIETS),
        food("Peanut Butter", "2 tbsp (32g)", 7.0, 6.0, 16.0, 192.0, Fats, ALL_DIETS),
        food("Chia Seeds", "2 tbsp (28g)", 5.0, 12.0, 9.0, 145.0, Fats, ALL_DIETS),
        food("Flax Seeds", "2 tbsp (20g)", 4.0, 6.0, 8.0, 112.0, Fats, ALL_DIETS),
        food("Dark Chocolate (85%)", "30g", 3.0, 8.0, 14.0, 170.0, Fats, ALL_DIETS),
        food("Coconut Oil", "1 tbsp (15ml)", 0.0, 0.0, 14.0, 126.0, Fats, ALL_DIETS),
        food("Cashews", "30g", 5.0, 9.0, 13.0, 173.0, Fats, ALL_DIETS),
        // Fiber and vegetables
        food("Broccoli", "150g", 4.0, 10.0, 0.0, 56.0, FiberVeg, ALL_DIETS),
        food("Spinach", "100g", 3.0, 4.0, 0.0, 28.0, FiberVeg, ALL_DIETS),
        food("Kale", "100g", 4.0, 9.0, 1.0, 61.0, FiberVeg, ALL_DIETS),
        food("Bell Peppers", "150g", 1.0, 9.0, 0.0, 40.0, FiberVeg, ALL_DIETS),
        food("Zucchini", "200g", 2.0, 7.0, 0.0, 36.0, FiberVeg, ALL_DIETS),
        food("Cauliflower", "150g", 3.0, 8.0, 0.0, 44.0, FiberVeg, ALL_DIETS),
        food("Green Beans", "150g", 3.0, 10.0, 0.0, 52.0, FiberVeg, ALL_DIETS),
        food("Carrots", "150g", 1.0, 14.0, 0.0, 60.0, FiberVeg, ALL_DIETS),
        food("Cucumber", "150g", 1.0, 5.0, 0.0, 24.0, FiberVeg, ALL_DIETS),
        food("Tomatoes", "150g", 1.0, 6.0, 0.0, 28.0, FiberVeg, ALL_DIETS),
        food("Asparagus", "150g", 3.0, 6.0, 0.0, 36.0, FiberVeg, ALL_DIETS),
        food("Brussels Sprouts", "150g", 5.0, 13.0, 0.0, 72.0, FiberVeg, ALL_DIETS),
        food("Mixed Salad Greens", "100g", 2.0, 3.0, 0.0, 20.0, FiberVeg, ALL_DIETS),
    ]
}
