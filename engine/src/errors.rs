//! Error types for the plan engine
//!
//! Plan generation itself never fails for validated input; the only
//! fallible boundary is loading reference tables from outside the crate.

use thiserror::Error;

/// Problems found while loading or checking reference tables
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Duplicate exercise id: {0}")]
    DuplicateExercise(String),

    #[error("Exercise '{exercise}' lists unknown substitute '{substitute}'")]
    UnknownSubstitute { exercise: String, substitute: String },

    #[error("Exercise '{0}' lists itself as a substitute")]
    SelfSubstitute(String),

    #[error("Substitute chain through '{0}' forms a cycle")]
    SubstituteCycle(String),

    #[error("Invalid reference data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReferenceDataError::UnknownSubstitute {
            exercise: "bench_press".to_string(),
            substitute: "floor_press".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Exercise 'bench_press' lists unknown substitute 'floor_press'"
        );

        let err = ReferenceDataError::SubstituteCycle("goblet_squat".to_string());
        assert!(err.to_string().contains("goblet_squat"));
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ReferenceDataError = parse.into();
        assert!(matches!(err, ReferenceDataError::Parse(_)));
    }
}
