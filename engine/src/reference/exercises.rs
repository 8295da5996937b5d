//! Exercise reference table
//!
//! Exercises form a small directed graph: each node lists, in preference
//! order, the exercises that can stand in for it when the user lacks the
//! equipment. The library indexes nodes by id and rejects tables whose
//! substitute edges point at unknown ids, at the node itself, or loop back
//! on themselves.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::errors::ReferenceDataError;
use crate::survey::Equipment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Legs,
    Arms,
    Core,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    Push,
    Pull,
    Squat,
    Hinge,
    Carry,
    Isolation,
}

/// A piece of equipment an exercise can be performed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Bodyweight,
    Dumbbells,
    Barbell,
    Cable,
    Machine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_muscles: Vec<MuscleGroup>,
    pub movement_pattern: MovementPattern,
    /// Any one of these is enough to perform the exercise
    pub equipment_required: BTreeSet<EquipmentType>,
    pub is_compound: bool,
    /// Fallbacks in preference order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutes: Vec<String>,
}

impl Exercise {
    /// Whether the user's equipment tier covers at least one listed type
    pub fn is_available(&self, equipment: Equipment) -> bool {
        let available = equipment.available();
        self.equipment_required
            .iter()
            .any(|kind| available.contains(kind))
    }
}

#[derive(Deserialize)]
struct ExerciseFile {
    exercises: Vec<Exercise>,
}

/// Exercise table indexed by id
#[derive(Debug, Clone)]
pub struct ExerciseLibrary {
    exercises: Vec<Exercise>,
    index: HashMap<String, usize>,
}

impl ExerciseLibrary {
    /// Build a library, checking ids and the substitute graph
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, ReferenceDataError> {
        let mut index = HashMap::with_capacity(exercises.len());
        for (position, exercise) in exercises.iter().enumerate() {
            if index.insert(exercise.id.clone(), position).is_some() {
                return Err(ReferenceDataError::DuplicateExercise(exercise.id.clone()));
            }
        }

        for exercise in &exercises {
            for substitute in &exercise.substitutes {
                if substitute == &exercise.id {
                    return Err(ReferenceDataError::SelfSubstitute(exercise.id.clone()));
                }
                if !index.contains_key(substitute) {
                    return Err(ReferenceDataError::UnknownSubstitute {
                        exercise: exercise.id.clone(),
                        substitute: substitute.clone(),
                    });
                }
            }
        }

        let library = Self { exercises, index };
        library.check_acyclic()?;
        Ok(library)
    }

    /// Load a library from `{"exercises": [...]}`
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let file: ExerciseFile = serde_json::from_str(json)?;
        Self::new(file.exercises)
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.index.get(id).map(|&position| &self.exercises[position])
    }

    /// Substitutes of an exercise in preference order
    pub fn substitutes_of<'a>(&'a self, exercise: &'a Exercise) -> impl Iterator<Item = &'a Exercise> {
        exercise.substitutes.iter().filter_map(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    fn check_acyclic(&self) -> Result<(), ReferenceDataError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.exercises.len()];

        for start in 0..self.exercises.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            // Explicit stack of (node, next edge to follow)
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::InProgress;

            while let Some((node, edge)) = stack.pop() {
                let substitutes = &self.exercises[node].substitutes;
                if edge == substitutes.len() {
                    marks[node] = Mark::Done;
                    continue;
                }
                stack.push((node, edge + 1));

                let next = self.index[&substitutes[edge]];
                match marks[next] {
                    Mark::InProgress => {
                        return Err(ReferenceDataError::SubstituteCycle(
                            self.exercises[next].id.clone(),
                        ))
                    }
                    Mark::Unvisited => {
                        marks[next] = Mark::InProgress;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            }
        }

        Ok(())
    }

    /// The built-in exercise table
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Self::new(builtin_exercises())
    }
}

fn exercise(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    movement_pattern: MovementPattern,
    equipment: &[EquipmentType],
    is_compound: bool,
    substitutes: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        muscle_group,
        secondary_muscles: Vec::new(),
        movement_pattern,
        equipment_required: equipment.iter().copied().collect(),
        is_compound,
        substitutes: substitutes.iter().map(|s| s.to_string()).collect(),
    }
}

impl Exercise {
    fn with_secondary(mut self, muscles: &[MuscleGroup]) -> Self {
        self.secondary_muscles = muscles.to_vec();
        self
    }
}

fn builtin_exercises() -> Vec<Exercise> {
    use EquipmentType::*;
    use MovementPattern::*;
    use MuscleGroup::*;

    vec![
        // Squat pattern
        exercise("barbell_squat", "Barbell Back Squat", Legs, Squat, &[Barbell], true, &["goblet_squat", "bodyweight_squat"])
            .with_secondary(&[Core]),
        exercise("goblet_squat", "Goblet Squat", Legs, Squat, &[Dumbbells], true, &["bodyweight_squat"])
            .with_secondary(&[Core]),
        exercise("bodyweight_squat", "Bodyweight Squat", Legs, Squat, &[Bodyweight], true, &[]),
        exercise("leg_press", "Leg Press", Legs, Squat, &[Machine], true, &["dumbbell_lunges", "lunges"]),
        exercise("dumbbell_lunges", "Dumbbell Walking Lunges", Legs, Squat, &[Dumbbells], true, &["lunges"]),
        exercise("lunges", "Bodyweight Lunges", Legs, Squat, &[Bodyweight], true, &[]),
        exercise("leg_extension", "Leg Extension", Legs, Isolation, &[Machine], false, &["sissy_squat"]),
        exercise("sissy_squat", "Sissy Squat", Legs, Isolation, &[Bodyweight], false, &[]),
        exercise("calf_raise", "Standing Calf Raise", Legs, Isolation, &[Bodyweight, Dumbbells, Machine], false, &[]),
        // Hinge pattern
        exercise("romanian_deadlift", "Romanian Deadlift", Legs, Hinge, &[Barbell], true, &["dumbbell_rdl", "single_leg_rdl"])
            .with_secondary(&[Back]),
        exercise("dumbbell_rdl", "Dumbbell Romanian Deadlift", Legs, Hinge, &[Dumbbells], true, &["single_leg_rdl"])
            .with_secondary(&[Back]),
        exercise("single_leg_rdl", "Single-Leg Romanian Deadlift", Legs, Hinge, &[Bodyweight, Dumbbells], true, &[]),
        exercise("leg_curl", "Lying Leg Curl", Legs, Isolation, &[Machine], false, &["nordic_curl"]),
        exercise("nordic_curl", "Nordic Hamstring Curl", Legs, Isolation, &[Bodyweight], false, &[]),
        // Horizontal push
        exercise("bench_press", "Barbell Bench Press", Chest, Push, &[Barbell], true, &["dumbbell_bench_press", "push_ups"])
            .with_secondary(&[Shoulders, Arms]),
        exercise("dumbbell_bench_press", "Dumbbell Bench Press", Chest, Push, &[Dumbbells], true, &["push_ups"])
            .with_secondary(&[Shoulders, Arms]),
        exercise("push_ups", "Push-Ups", Chest, Push, &[Bodyweight], true, &[])
            .with_secondary(&[Shoulders, Arms, Core]),
        exercise("incline_bench_press", "Incline Barbell Bench Press", Chest, Push, &[Barbell], true, &["incline_dumbbell_press", "decline_push_ups"])
            .with_secondary(&[Shoulders, Arms]),
        exercise("incline_dumbbell_press", "Incline Dumbbell Press", Chest, Push, &[Dumbbells], true, &["decline_push_ups"])
            .with_secondary(&[Shoulders, Arms]),
        exercise("decline_push_ups", "Feet-Elevated Push-Ups", Chest, Push, &[Bodyweight], true, &[])
            .with_secondary(&[Shoulders, Arms]),
        exercise("cable_fly", "Cable Fly", Chest, Isolation, &[Cable], false, &["dumbbell_fly"]),
        exercise("dumbbell_fly", "Dumbbell Fly", Chest, Isolation, &[Dumbbells], false, &[]),
        // Vertical push
        exercise("overhead_press", "Barbell Overhead Press", Shoulders, Push, &[Barbell], true, &["dumbbell_shoulder_press", "pike_push_ups"])
            .with_secondary(&[Arms]),
        exercise("dumbbell_shoulder_press", "Dumbbell Shoulder Press", Shoulders, Push, &[Dumbbells], true, &["pike_push_ups"])
            .with_secondary(&[Arms]),
        exercise("pike_push_ups", "Pike Push-Ups", Shoulders, Push, &[Bodyweight], true, &[])
            .with_secondary(&[Arms]),
        exercise("lateral_raise", "Lateral Raise", Shoulders, Isolation, &[Dumbbells, Cable], false, &[]),
        // Horizontal pull
        exercise("barbell_row", "Barbell Row", Back, Pull, &[Barbell], true, &["dumbbell_row", "inverted_row"])
            .with_secondary(&[Arms]),
        exercise("dumbbell_row", "One-Arm Dumbbell Row", Back, Pull, &[Dumbbells], true, &["inverted_row"])
            .with_secondary(&[Arms]),
        exercise("cable_row", "Seated Cable Row", Back, Pull, &[Cable, Machine], true, &["dumbbell_row", "inverted_row"])
            .with_secondary(&[Arms]),
        exercise("inverted_row", "Inverted Row", Back, Pull, &[Bodyweight], true, &[])
            .with_secondary(&[Arms, Core]),
        exercise("face_pull", "Face Pull", Shoulders, Isolation, &[Cable], false, &["rear_delt_fly", "prone_y_raise"]),
        exercise("rear_delt_fly", "Rear Delt Fly", Shoulders, Isolation, &[Dumbbells], false, &["prone_y_raise"]),
        exercise("prone_y_raise", "Prone Y Raise", Shoulders, Isolation, &[Bodyweight], false, &[]),
        // Vertical pull
        exercise("lat_pulldown", "Lat Pulldown", Back, Pull, &[Cable, Machine], true, &["pull_ups"])
            .with_secondary(&[Arms]),
        exercise("pull_ups", "Pull-Ups", Back, Pull, &[Bodyweight], true, &[])
            .with_secondary(&[Arms]),
        exercise("chin_ups", "Chin-Ups", Back, Pull, &[Bodyweight], true, &[])
            .with_secondary(&[Arms]),
        // Arms
        exercise("barbell_curl", "Barbell Curl", Arms, Isolation, &[Barbell], false, &["dumbbell_curl", "chin_ups"]),
        exercise("dumbbell_curl", "Dumbbell Curl", Arms, Isolation, &[Dumbbells], false, &["chin_ups"]),
        exercise("hammer_curl", "Hammer Curl", Arms, Isolation, &[Dumbbells], false, &["chin_ups"]),
        exercise("tricep_pushdown", "Tricep Pushdown", Arms, Isolation, &[Cable], false, &["overhead_tricep_extension", "bench_dips"]),
        exercise("overhead_tricep_extension", "Overhead Tricep Extension", Arms, Isolation, &[Dumbbells], false, &["bench_dips"]),
        exercise("bench_dips", "Bench Dips", Arms, Push, &[Bodyweight], false, &[]),
        // Core
        exercise("plank", "Plank", Core, Isolation, &[Bodyweight], false, &[]),
        exercise("hanging_leg_raise", "Hanging Leg Raise", Core, Isolation, &[Bodyweight], false, &[]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(id: &str, equipment: &[EquipmentType], substitutes: &[&str]) -> Exercise {
        exercise(id, id, MuscleGroup::Legs, MovementPattern::Squat, equipment, true, substitutes)
    }

    #[test]
    fn test_builtin_library_is_consistent() {
        let library = ExerciseLibrary::builtin().unwrap();
        assert!(library.len() >= 40);
        assert!(library.get("barbell_squat").is_some());
        assert!(library.get("no_such_exercise").is_none());
    }

    #[test]
    fn test_every_builtin_exercise_needs_some_equipment() {
        let library = ExerciseLibrary::builtin().unwrap();
        for exercise in library.iter() {
            assert!(!exercise.equipment_required.is_empty(), "{}", exercise.id);
            assert!(exercise.is_available(Equipment::FullGym), "{}", exercise.id);
        }
    }

    #[test]
    fn test_availability_follows_tiers() {
        let library = ExerciseLibrary::builtin().unwrap();
        let bench = library.get("bench_press").unwrap();
        assert!(bench.is_available(Equipment::FullGym));
        assert!(!bench.is_available(Equipment::Dumbbells));
        assert!(!bench.is_available(Equipment::Bodyweight));

        let calf = library.get("calf_raise").unwrap();
        assert!(calf.is_available(Equipment::Bodyweight));
    }

    #[test]
    fn test_substitutes_in_preference_order() {
        let library = ExerciseLibrary::builtin().unwrap();
        let squat = library.get("barbell_squat").unwrap();
        let ids: Vec<&str> = library.substitutes_of(squat).map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["goblet_squat", "bodyweight_squat"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = ExerciseLibrary::new(vec![
            simple("squat", &[EquipmentType::Barbell], &[]),
            simple("squat", &[EquipmentType::Dumbbells], &[]),
        ]);
        assert!(matches!(result, Err(ReferenceDataError::DuplicateExercise(id)) if id == "squat"));
    }

    #[test]
    fn test_rejects_unknown_substitute() {
        let result = ExerciseLibrary::new(vec![simple("squat", &[EquipmentType::Barbell], &["ghost"])]);
        assert!(matches!(result, Err(ReferenceDataError::UnknownSubstitute { .. })));
    }

    #[test]
    fn test_rejects_self_substitute() {
        let result = ExerciseLibrary::new(vec![simple("squat", &[EquipmentType::Barbell], &["squat"])]);
        assert!(matches!(result, Err(ReferenceDataError::SelfSubstitute(_))));
    }

    #[test]
    fn test_rejects_substitute_cycle() {
        let result = ExerciseLibrary::new(vec![
            simple("a", &[EquipmentType::Barbell], &["b"]),
            simple("b", &[EquipmentType::Dumbbells], &["c"]),
            simple("c", &[EquipmentType::Machine], &["a"]),
        ]);
        assert!(matches!(result, Err(ReferenceDataError::SubstituteCycle(_))));
    }

    #[test]
    fn test_accepts_shared_substitutes() {
        // Diamond: two exercises falling back to the same node is not a cycle
        let result = ExerciseLibrary::new(vec![
            simple("a", &[EquipmentType::Barbell], &["b", "c"]),
            simple("b", &[EquipmentType::Dumbbells], &["c"]),
            simple("c", &[EquipmentType::Bodyweight], &[]),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"exercises": [
            {"id": "push_ups", "name": "Push-Ups", "muscleGroup": "chest", "movementPattern": "push",
             "equipmentRequired": ["bodyweight"], "isCompound": true},
            {"id": "bench_press", "name": "Bench Press", "muscleGroup": "chest", "movementPattern": "push",
             "equipmentRequired": ["barbell"], "isCompound": true, "substitutes": ["push_ups"]}
        ]}"#;

        let library = ExerciseLibrary::from_json(json).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.get("bench_press").unwrap().substitutes, vec!["push_ups"]);
    }
}
