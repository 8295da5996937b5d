//! Fitness Plan WASM Module
//!
//! Browser bindings for plan generation. Surveys and plans cross the
//! boundary as JSON strings in the same camelCase shape the CLI reads
//! and writes.

use fitplan_engine::{compose_plan, validate_survey as check_survey, ReferenceData, SurveyData};
use wasm_bindgen::prelude::*;

fn parse_survey(survey_json: &str) -> Result<SurveyData, JsValue> {
    serde_json::from_str(survey_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid survey JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a plan from survey JSON
///
/// Rejects surveys that fail validation with the first user-facing message.
#[wasm_bindgen]
pub fn generate_plan(survey_json: &str) -> Result<String, JsValue> {
    let survey = parse_survey(survey_json)?;
    if let Err(errors) = check_survey(&survey) {
        let message = errors
            .first()
            .map(|e| e.user_message())
            .unwrap_or_else(|| "Survey is invalid".to_string());
        return Err(JsValue::from_str(&message));
    }

    to_json(&compose_plan(&survey, ReferenceData::builtin()))
}

/// Validate survey JSON; returns a JSON array of field errors (empty when valid)
#[wasm_bindgen]
pub fn validate_survey(survey_json: &str) -> Result<String, JsValue> {
    let survey = parse_survey(survey_json)?;
    let errors = check_survey(&survey).err().unwrap_or_default();
    to_json(&errors)
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    fitplan_engine::calculate_bmi(weight_kg, height_cm)
}
