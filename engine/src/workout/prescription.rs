//! Sets, reps and rest for a resolved exercise

use crate::plan::ExercisePrescription;
use crate::reference::Exercise;
use crate::survey::Experience;

/// Inclusive rep (or seconds) range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

impl RepRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

pub const COMPOUND_REPS: RepRange = RepRange::new(6, 12);
pub const ISOLATION_REPS: RepRange = RepRange::new(10, 15);

pub fn base_sets(experience: Experience) -> u32 {
    match experience {
        Experience::Beginner | Experience::Intermediate => 3,
        Experience::Advanced => 4,
    }
}

/// Default prescription for an exercise, with optional template overrides
pub fn prescribe(
    exercise: &Exercise,
    experience: Experience,
    sets: Option<u32>,
    reps: Option<RepRange>,
) -> ExercisePrescription {
    let (default_reps, rir_target, rest_seconds) = if exercise.is_compound {
        (COMPOUND_REPS, 2, 180)
    } else {
        (ISOLATION_REPS, 1, 90)
    };
    let reps = reps.unwrap_or(default_reps);

    ExercisePrescription {
        exercise: exercise.clone(),
        sets: sets.unwrap_or_else(|| base_sets(experience)),
        reps_min: reps.min,
        reps_max: reps.max,
        rest_seconds,
        rir_target,
        timed: false,
    }
}
