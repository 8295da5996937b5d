//! Day templates
//!
//! A template is an ordered list of exercise roles. Each role names the
//! exercise preferred at every equipment tier and may override the default
//! sets or rep range.

use serde::{Deserialize, Serialize};

use super::prescription::RepRange;
use crate::survey::Equipment;

/// Kind of training day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    FullBodyA,
    FullBodyB,
    FullBodyLight,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
}

impl DayKind {
    pub fn focus(&self) -> &'static str {
        match self {
            DayKind::FullBodyA | DayKind::FullBodyB | DayKind::FullBodyLight => "Full Body",
            DayKind::Upper => "Upper Body (Chest, Back, Shoulders, Arms)",
            DayKind::Lower => "Lower Body (Quads, Hamstrings, Glutes, Calves)",
            DayKind::Push => "Push (Chest, Shoulders, Triceps)",
            DayKind::Pull => "Pull (Back, Rear Delts, Biceps)",
            DayKind::Legs => "Legs (Quads, Hamstrings, Glutes, Calves)",
        }
    }

    pub fn template(&self) -> &'static [RoleSlot] {
        match self {
            DayKind::FullBodyA | DayKind::FullBodyLight => FULL_BODY_A,
            DayKind::FullBodyB => FULL_BODY_B,
            DayKind::Upper => UPPER,
            DayKind::Lower => LOWER,
            DayKind::Push => PUSH,
            DayKind::Pull => PULL,
            DayKind::Legs => LEGS,
        }
    }
}

/// Display name of a day
///
/// `position` is the 1-based slot in the week and `occurrence` the 1-based
/// count of this kind so far. Upper/Lower and Push/Pull/Legs days are
/// numbered by occurrence, so the numbers follow the split's own cycle
/// rather than the calendar slot.
pub fn day_name(kind: DayKind, position: usize, occurrence: usize) -> String {
    match kind {
        DayKind::FullBodyA => format!("Day {}: Full Body A", position),
        DayKind::FullBodyB => format!("Day {}: Full Body B", position),
        DayKind::FullBodyLight => format!("Day {}: Full Body Light", position),
        DayKind::Upper => format!("Day {}: Upper Body", 2 * occurrence - 1),
        DayKind::Lower => format!("Day {}: Lower Body", 2 * occurrence),
        DayKind::Push => format!("Day {}: Push", 3 * (occurrence - 1) + 1),
        DayKind::Pull => format!("Day {}: Pull", 3 * (occurrence - 1) + 2),
        DayKind::Legs => format!("Day {}: Legs", 3 * (occurrence - 1) + 3),
    }
}

/// Preferred exercise id per equipment tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseChoice {
    pub full_gym: &'static str,
    pub dumbbells: &'static str,
    pub bodyweight: &'static str,
}

impl ExerciseChoice {
    /// One exercise at every tier
    pub const fn any(id: &'static str) -> Self {
        Self {
            full_gym: id,
            dumbbells: id,
            bodyweight: id,
        }
    }

    /// A gym exercise, and a home exercise for the other tiers
    pub const fn gym_or(full_gym: &'static str, home: &'static str) -> Self {
        Self {
            full_gym,
            dumbbells: home,
            bodyweight: home,
        }
    }

    pub fn for_equipment(&self, equipment: Equipment) -> &'static str {
        match equipment {
            Equipment::FullGym => self.full_gym,
            Equipment::Dumbbells => self.dumbbells,
            Equipment::Bodyweight => self.bodyweight,
        }
    }
}

/// One slot in a day template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleSlot {
    pub role: &'static str,
    pub choice: ExerciseChoice,
    pub sets: Option<u32>,
    pub reps: Option<RepRange>,
    /// Rep range counts seconds held
    pub timed: bool,
}

const fn role(role: &'static str, choice: ExerciseChoice) -> RoleSlot {
    RoleSlot {
        role,
        choice,
        sets: None,
        reps: None,
        timed: false,
    }
}

const fn accessory(
    role: &'static str,
    choice: ExerciseChoice,
    sets: u32,
    min: u32,
    max: u32,
) -> RoleSlot {
    RoleSlot {
        role,
        choice,
        sets: Some(sets),
        reps: Some(RepRange::new(min, max)),
        timed: false,
    }
}

const fn hold(role: &'static str, choice: ExerciseChoice, sets: u32, min: u32, max: u32) -> RoleSlot {
    RoleSlot {
        timed: true,
        ..accessory(role, choice, sets, min, max)
    }
}

const SQUAT: ExerciseChoice = ExerciseChoice::gym_or("barbell_squat", "goblet_squat");
const HINGE: ExerciseChoice = ExerciseChoice::gym_or("romanian_deadlift", "dumbbell_rdl");
const BENCH: ExerciseChoice = ExerciseChoice::gym_or("bench_press", "dumbbell_bench_press");
const INCLINE: ExerciseChoice =
    ExerciseChoice::gym_or("incline_bench_press", "incline_dumbbell_press");
const OVERHEAD: ExerciseChoice =
    ExerciseChoice::gym_or("overhead_press", "dumbbell_shoulder_press");
const ROW: ExerciseChoice = ExerciseChoice::gym_or("barbell_row", "dumbbell_row");
const VERTICAL_PULL: ExerciseChoice = ExerciseChoice::gym_or("lat_pulldown", "pull_ups");
const LEG_PRESS: ExerciseChoice = ExerciseChoice::gym_or("leg_press", "dumbbell_lunges");
const LEG_CURL: ExerciseChoice = ExerciseChoice::gym_or("leg_curl", "nordic_curl");
const TRICEPS: ExerciseChoice =
    ExerciseChoice::gym_or("tricep_pushdown", "overhead_tricep_extension");
const LUNGE: ExerciseChoice = ExerciseChoice {
    full_gym: "dumbbell_lunges",
    dumbbells: "dumbbell_lunges",
    bodyweight: "lunges",
};

const FULL_BODY_A: &[RoleSlot] = &[
    role("squat", SQUAT),
    role("horizontal push", BENCH),
    role("horizontal pull", ROW),
    accessory("lateral raise", ExerciseChoice::any("lateral_raise"), 3, 12, 15),
    hold("core", ExerciseChoice::any("plank"), 3, 30, 60),
];

const FULL_BODY_B: &[RoleSlot] = &[
    role("hinge", HINGE),
    role("vertical push", OVERHEAD),
    role("vertical pull", VERTICAL_PULL),
    accessory("lunge", LUNGE, 3, 8, 12),
    accessory("biceps", ExerciseChoice::any("dumbbell_curl"), 3, 10, 15),
];

const UPPER: &[RoleSlot] = &[
    role("horizontal push", BENCH),
    role("horizontal pull", ROW),
    role("vertical push", OVERHEAD),
    role("vertical pull", VERTICAL_PULL),
    accessory("lateral raise", ExerciseChoice::any("lateral_raise"), 3, 12, 15),
    accessory("triceps", TRICEPS, 3, 10, 15),
    accessory("biceps", ExerciseChoice::any("dumbbell_curl"), 3, 10, 15),
];

const LOWER: &[RoleSlot] = &[
    role("squat", SQUAT),
    role("hinge", HINGE),
    role("leg press", LEG_PRESS),
    accessory("leg curl", LEG_CURL, 3, 10, 15),
    accessory("calves", ExerciseChoice::any("calf_raise"), 4, 12, 20),
    accessory("core", ExerciseChoice::any("hanging_leg_raise"), 3, 10, 15),
];

const PUSH: &[RoleSlot] = &[
    role("horizontal push", BENCH),
    role("incline push", INCLINE),
    role("vertical push", OVERHEAD),
    accessory("chest fly", ExerciseChoice::gym_or("cable_fly", "dumbbell_fly"), 3, 10, 15),
    accessory("lateral raise", ExerciseChoice::any("lateral_raise"), 4, 12, 15),
    accessory("triceps", TRICEPS, 3, 10, 15),
];

const PULL: &[RoleSlot] = &[
    role("horizontal pull", ROW),
    role("vertical pull", VERTICAL_PULL),
    role("cable row", ExerciseChoice::gym_or("cable_row", "dumbbell_row")),
    accessory("rear delts", ExerciseChoice::gym_or("face_pull", "rear_delt_fly"), 3, 12, 15),
    accessory("biceps", ExerciseChoice::gym_or("barbell_curl", "dumbbell_curl"), 3, 8, 12),
    accessory("hammer curl", ExerciseChoice::any("hammer_curl"), 3, 10, 15),
];

const LEGS: &[RoleSlot] = &[
    role("squat", SQUAT),
    role("hinge", HINGE),
    role("leg press", LEG_PRESS),
    accessory("leg curl", LEG_CURL, 3, 10, 15),
    accessory("leg extension", ExerciseChoice::gym_or("leg_extension", "sissy_squat"), 3, 10, 15),
    accessory("calves", ExerciseChoice::any("calf_raise"), 4, 12, 20),
];
