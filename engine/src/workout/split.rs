//! Training split selection

use serde::{Deserialize, Serialize};
use std::fmt;

use super::templates::DayKind;
use crate::survey::Experience;

/// How training days are organized across the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitType {
    #[serde(rename = "Full Body")]
    FullBody,
    #[serde(rename = "Full Body A/B")]
    FullBodyAb,
    #[serde(rename = "Upper/Lower")]
    UpperLower,
    #[serde(rename = "Upper/Lower/Full")]
    UpperLowerFull,
    #[serde(rename = "Push/Pull/Legs")]
    PushPullLegs,
}

impl SplitType {
    pub fn label(&self) -> &'static str {
        match self {
            SplitType::FullBody => "Full Body",
            SplitType::FullBodyAb => "Full Body A/B",
            SplitType::UpperLower => "Upper/Lower",
            SplitType::UpperLowerFull => "Upper/Lower/Full",
            SplitType::PushPullLegs => "Push/Pull/Legs",
        }
    }

    /// Day templates cycled over the training week
    pub fn rotation(&self) -> &'static [DayKind] {
        match self {
            SplitType::FullBody | SplitType::FullBodyAb => {
                &[DayKind::FullBodyA, DayKind::FullBodyB]
            }
            SplitType::UpperLower => &[DayKind::Upper, DayKind::Lower],
            SplitType::UpperLowerFull => &[
                DayKind::Upper,
                DayKind::Lower,
                DayKind::FullBodyLight,
                DayKind::Upper,
                DayKind::Lower,
            ],
            SplitType::PushPullLegs => &[DayKind::Push, DayKind::Pull, DayKind::Legs],
        }
    }

    /// Template for the day at a zero-based position in the week
    pub fn day_kind(&self, day_index: usize) -> DayKind {
        let rotation = self.rotation();
        rotation[day_index % rotation.len()]
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Days-per-week band a split row applies to
#[derive(Debug, Clone, Copy)]
enum Days {
    AtMost(u32),
    Exactly(u32),
    AtLeast(u32),
}

impl Days {
    fn contains(&self, days: u32) -> bool {
        match *self {
            Days::AtMost(max) => days <= max,
            Days::Exactly(n) => days == n,
            Days::AtLeast(min) => days >= min,
        }
    }
}

/// (experience, days band, split); first matching row wins
const SPLIT_TABLE: &[(Experience, Days, SplitType)] = &[
    (Experience::Beginner, Days::AtMost(3), SplitType::FullBody),
    (Experience::Beginner, Days::AtLeast(4), SplitType::FullBodyAb),
    (Experience::Intermediate, Days::AtMost(3), SplitType::FullBody),
    (Experience::Intermediate, Days::Exactly(4), SplitType::UpperLower),
    (Experience::Intermediate, Days::AtLeast(5), SplitType::UpperLowerFull),
    (Experience::Advanced, Days::AtMost(3), SplitType::FullBody),
    (Experience::Advanced, Days::Exactly(4), SplitType::UpperLower),
    (Experience::Advanced, Days::AtLeast(5), SplitType::PushPullLegs),
];

/// Pick a split for an experience level and weekly frequency
pub fn select_split(experience: Experience, days_per_week: u32) -> SplitType {
    SPLIT_TABLE
        .iter()
        .find(|(level, days, _)| *level == experience && days.contains(days_per_week))
        .map(|&(_, _, split)| split)
        // Every experience has an AtMost row and an AtLeast row that meet
        .unwrap_or(SplitType::FullBody)
}
