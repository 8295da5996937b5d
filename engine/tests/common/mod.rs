//! Common test utilities for integration tests

#![allow(dead_code)]

use fitplan_engine::SurveyData;
use serde_json::{json, Value};

/// Survey JSON as the questionnaire front end sends it
pub fn survey_json() -> Value {
    json!({
        "basicInfo": {"age": 30, "sex": "male", "heightCm": 175, "weightKg": 75},
        "goalInfo": {"goal": "fat_loss", "fatLossRate": "moderate"},
        "lifestyleInfo": {"activityLevel": "moderately_active", "dailySteps": 8000},
        "trainingInfo": {
            "experience": "intermediate",
            "daysPerWeek": 4,
            "equipment": "full_gym"
        },
        "nutritionPreferences": {
            "dietStyle": "no_preference",
            "mealsPerDay": 4,
            "cookingTime": "medium"
        },
        "recoveryInfo": {"sleepHours": 7.5, "stressLevel": 3}
    })
}

/// Parse a survey, applying JSON overrides section by section
pub fn survey_with(overrides: Value) -> SurveyData {
    let mut survey = survey_json();
    if let (Some(base), Some(patch)) = (survey.as_object_mut(), overrides.as_object()) {
        for (section, fields) in patch {
            match (base.get_mut(section), fields.as_object()) {
                (Some(Value::Object(target)), Some(fields)) => {
                    for (key, value) in fields {
                        target.insert(key.clone(), value.clone());
                    }
                }
                _ => {
                    base.insert(section.clone(), fields.clone());
                }
            }
        }
    }
    serde_json::from_value(survey).expect("test survey should deserialize")
}

pub fn sample_survey() -> SurveyData {
    survey_with(json!({}))
}
