//! Static reference tables: foods and exercises
//!
//! Tables are immutable once built. Generation functions take a
//! `&ReferenceData` so tests and callers can inject their own tables;
//! [`ReferenceData::builtin`] hands out a lazily built shared instance.

pub mod exercises;
pub mod foods;

pub use exercises::{EquipmentType, Exercise, ExerciseLibrary, MovementPattern, MuscleGroup};
pub use foods::{FoodCatalog, FoodCategory, FoodItem};

use once_cell::sync::Lazy;

/// Built once on first use and shared for the life of the process
static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| ReferenceData {
    foods: FoodCatalog::builtin(),
    exercises: ExerciseLibrary::builtin().expect("built-in exercise table is consistent"),
});

/// Food and exercise tables consulted during generation
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub foods: FoodCatalog,
    pub exercises: ExerciseLibrary,
}

impl ReferenceData {
    pub fn new(foods: FoodCatalog, exercises: ExerciseLibrary) -> Self {
        Self { foods, exercises }
    }

    /// Shared instance of the built-in tables
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        let a = ReferenceData::builtin();
        let b = ReferenceData::builtin();
        assert!(std::ptr::eq(a, b));
        assert!(!a.foods.is_empty());
        assert!(!a.exercises.is_empty());
    }

    #[test]
    fn test_reference_data_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferenceData>();
    }
}
