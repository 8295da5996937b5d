//! Fitness Plan Engine
//!
//! Turns a completed survey into a nutrition plan and a weekly training
//! schedule. Generation is pure: no I/O, no shared mutable state, and the
//! same survey always yields the same plan (apart from its timestamp).

pub mod composer;
pub mod errors;
pub mod health_metrics;
pub mod nutrition;
pub mod plan;
pub mod reference;
pub mod survey;
pub mod validation;
pub mod workout;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used items
pub use composer::{compose_plan, compose_plan_at};
pub use errors::*;
pub use health_metrics::{bmi_snapshot, calculate_bmi, BmiBand, BmiSnapshot};
pub use plan::*;
pub use reference::ReferenceData;
pub use survey::*;
pub use validation::{validate_survey, ValidationError};
pub use workout::SplitType;
