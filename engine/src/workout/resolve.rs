//! Exercise resolution against the user's equipment

use crate::reference::{Exercise, ExerciseLibrary};
use crate::survey::Equipment;

/// The exercise itself when the equipment allows it, otherwise its first
/// performable substitute
///
/// Only the exercise's own substitute list is consulted; substitutes of
/// substitutes are not followed. Unknown ids resolve to `None`.
pub fn resolve_exercise<'a>(
    library: &'a ExerciseLibrary,
    id: &str,
    equipment: Equipment,
) -> Option<&'a Exercise> {
    let exercise = library.get(id)?;
    if exercise.is_available(equipment) {
        return Some(exercise);
    }
    library
        .substitutes_of(exercise)
        .find(|substitute| substitute.is_available(equipment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{EquipmentType, MovementPattern, MuscleGroup};
    use std::collections::BTreeSet;

    fn library() -> ExerciseLibrary {
        ExerciseLibrary::builtin().unwrap()
    }

    fn resolved_id(id: &str, equipment: Equipment) -> Option<String> {
        let library = library();
        resolve_exercise(&library, id, equipment).map(|e| e.id.clone())
    }

    #[test]
    fn test_available_exercise_resolves_to_itself() {
        assert_eq!(resolved_id("barbell_squat", Equipment::FullGym).as_deref(), Some("barbell_squat"));
        assert_eq!(resolved_id("calf_raise", Equipment::Bodyweight).as_deref(), Some("calf_raise"));
    }

    #[test]
    fn test_first_available_substitute_wins() {
        assert_eq!(resolved_id("barbell_squat", Equipment::Dumbbells).as_deref(), Some("goblet_squat"));
        assert_eq!(
            resolved_id("barbell_squat", Equipment::Bodyweight).as_deref(),
            Some("bodyweight_squat")
        );
        assert_eq!(resolved_id("lat_pulldown", Equipment::Dumbbells).as_deref(), Some("pull_ups"));
    }

    #[test]
    fn test_unresolvable_and_unknown() {
        assert_eq!(resolved_id("lateral_raise", Equipment::Bodyweight), None);
        assert_eq!(resolved_id("no_such_exercise", Equipment::FullGym), None);
    }

    #[test]
    fn test_substitutes_of_substitutes_are_not_followed() {
        let make = |id: &str, kind: EquipmentType, substitutes: &[&str]| Exercise {
            id: id.to_string(),
            name: id.to_string(),
            muscle_group: MuscleGroup::Chest,
            secondary_muscles: Vec::new(),
            movement_pattern: MovementPattern::Push,
            equipment_required: BTreeSet::from([kind]),
            is_compound: true,
            substitutes: substitutes.iter().map(|s| s.to_string()).collect(),
        };
        let library = ExerciseLibrary::new(vec![
            make("press", EquipmentType::Barbell, &["db_press"]),
            make("db_press", EquipmentType::Dumbbells, &["floor_press"]),
            make("floor_press", EquipmentType::Bodyweight, &[]),
        ])
        .unwrap();

        assert!(resolve_exercise(&library, "press", Equipment::Bodyweight).is_none());
        assert_eq!(
            resolve_exercise(&library, "db_press", Equipment::Bodyweight).map(|e| e.id.as_str()),
            Some("floor_press")
        );
    }

    #[test]
    fn test_resolved_exercise_is_always_available() {
        let library = library();
        for exercise in library.iter() {
            for &equipment in Equipment::all() {
                if let Some(found) = resolve_exercise(&library, &exercise.id, equipment) {
                    assert!(found.is_available(equipment), "{} -> {}", exercise.id, found.id);
                }
            }
        }
    }
}
