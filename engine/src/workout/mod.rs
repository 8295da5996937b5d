//! Weekly training schedule generation
//!
//! Picks a split from experience and frequency, lays its day templates over
//! the week, and resolves every template role against the user's equipment.

pub mod prescription;
pub mod progression;
pub mod resolve;
pub mod split;
pub mod templates;

pub use prescription::{prescribe, RepRange};
pub use progression::{limitations_warning, progression_rules};
pub use resolve::resolve_exercise;
pub use split::{select_split, SplitType};
pub use templates::{day_name, DayKind, ExerciseChoice, RoleSlot};

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::plan::{ExercisePrescription, WorkoutDay, WorkoutPlan};
use crate::reference::ExerciseLibrary;
use crate::survey::{Equipment, Experience, SurveyData};

/// Build one day from its template
pub fn build_day(
    kind: DayKind,
    name: String,
    experience: Experience,
    equipment: Equipment,
    library: &ExerciseLibrary,
) -> WorkoutDay {
    let mut exercises = Vec::new();
    let mut omitted_roles = Vec::new();

    for slot in kind.template() {
        let preferred = slot.choice.for_equipment(equipment);
        let Some(exercise) = resolve_exercise(library, preferred, equipment) else {
            warn!(
                day = %name,
                role = slot.role,
                exercise = preferred,
                equipment = equipment.label(),
                "No performable exercise for role, omitting"
            );
            omitted_roles.push(slot.role.to_string());
            continue;
        };

        if exercises
            .iter()
            .any(|p: &ExercisePrescription| p.exercise.id == exercise.id)
        {
            debug!(
                day = %name,
                role = slot.role,
                exercise = %exercise.id,
                "Role repeats an exercise already in the day"
            );
            continue;
        }

        let mut prescription = prescribe(exercise, experience, slot.sets, slot.reps);
        prescription.timed = slot.timed;
        exercises.push(prescription);
    }

    if exercises.is_empty() {
        warn!(day = %name, equipment = equipment.label(), "Workout day has no exercises");
    }

    WorkoutDay {
        name,
        focus: kind.focus().to_string(),
        exercises,
        omitted_roles,
    }
}

/// Lay the split's rotation over the week
pub fn build_schedule(
    split: SplitType,
    days_per_week: u32,
    experience: Experience,
    equipment: Equipment,
    library: &ExerciseLibrary,
) -> Vec<WorkoutDay> {
    let mut occurrences: HashMap<DayKind, usize> = HashMap::new();

    (0..days_per_week as usize)
        .map(|index| {
            let kind = split.day_kind(index);
            let occurrence = occurrences.entry(kind).or_insert(0);
            *occurrence += 1;
            let name = day_name(kind, index + 1, *occurrence);
            build_day(kind, name, experience, equipment, library)
        })
        .collect()
}

/// Generate the workout half of a plan
pub fn generate_workout_plan(survey: &SurveyData, library: &ExerciseLibrary) -> WorkoutPlan {
    let training = &survey.training_info;
    let split = select_split(training.experience, training.days_per_week);

    debug!(
        split = %split,
        experience = training.experience.label(),
        days_per_week = training.days_per_week,
        equipment = training.equipment.label(),
        "Selected training split"
    );

    WorkoutPlan {
        split_type: split,
        days_per_week: training.days_per_week,
        schedule: build_schedule(
            split,
            training.days_per_week,
            training.experience,
            training.equipment,
            library,
        ),
        progression_rules: progression_rules(),
        limitations_warning: limitations_warning(survey.limitations()),
    }
}
