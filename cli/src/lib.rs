//! Fitness Plan CLI
//!
//! Reads survey answers as JSON, validates them, generates a plan and
//! writes it out in the configured export format.

pub mod config;
pub mod export;

use anyhow::{Context, Result};
use fitplan_engine::SurveyData;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read survey JSON from a file, or from stdin when the path is `-`
pub fn read_survey(path: &Path) -> Result<SurveyData> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read survey from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read survey from {}", path.display()))?
    };

    parse_survey(&raw)
}

pub fn parse_survey(raw: &str) -> Result<SurveyData> {
    serde_json::from_str(raw).context("Survey is not valid survey JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SURVEY: &str = r#"{
        "basicInfo": {"age": 41, "sex": "female", "height": 168, "weight": 64},
        "goalInfo": {"goal": "recomposition"},
        "lifestyleInfo": {"activityLevel": "lightly_active"},
        "trainingInfo": {"experience": "advanced", "daysPerWeek": 5, "equipment": "dumbbells"},
        "nutritionPreferences": {"dietStyle": "other", "mealsPerDay": 2, "cookingTime": "high"}
    }"#;

    #[test]
    fn test_read_survey_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SURVEY.as_bytes()).unwrap();

        let survey = read_survey(file.path()).unwrap();
        assert_eq!(survey.basic_info.age, 41);
        assert_eq!(survey.basic_info.height_cm, 168.0);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_survey(Path::new("/nonexistent/survey.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/survey.json"));
    }

    #[test]
    fn test_malformed_survey() {
        assert!(parse_survey("{\"basicInfo\": {}}").is_err());
        assert!(parse_survey("not json").is_err());
    }
}
