//! Survey validation
//!
//! Range checks come from the `validator` derives on the survey sections.
//! Checks the derives cannot express (non-finite numbers, a goal rate that
//! is required only for some goals) are written out here. Errors are
//! reported in questionnaire order so callers can show them as-is.

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::survey::{Goal, SurveyData};

/// (validator field name, reported field name, display label), in
/// questionnaire order
const FIELDS: &[(&str, &str, &str)] = &[
    ("age", "age", "Age"),
    ("sex", "sex", "Sex"),
    ("height_cm", "height", "Height"),
    ("weight_kg", "weight", "Weight"),
    ("goal", "goal", "Goal"),
    ("fat_loss_rate", "fatLossRate", "Fat Loss Rate"),
    ("muscle_gain_rate", "muscleGainRate", "Muscle Gain Rate"),
    ("activity_level", "activityLevel", "Activity Level"),
    ("daily_steps", "dailySteps", "Daily Steps"),
    ("experience", "experience", "Training Experience"),
    ("days_per_week", "daysPerWeek", "Training Days"),
    ("equipment", "equipment", "Equipment"),
    ("diet_style", "dietStyle", "Diet Style"),
    ("meals_per_day", "mealsPerDay", "Meals Per Day"),
    ("cooking_time", "cookingTime", "Cooking Time"),
    ("sleep_hours", "sleepHours", "Sleep Hours"),
    ("stress_level", "stressLevel", "Stress Level"),
];

fn field_entry(name: &str) -> Option<(usize, &'static (&'static str, &'static str, &'static str))> {
    FIELDS
        .iter()
        .enumerate()
        .find(|(_, (snake, camel, _))| *snake == name || *camel == name)
}

/// Map a field name to a user-facing label
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_entry(field_name) {
        Some((_, &(_, _, label))) => label,
        None => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        let field = match field_entry(field) {
            Some((_, &(_, camel, _))) => camel,
            None => field,
        };
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }

    fn order(&self) -> usize {
        field_entry(&self.field).map_or(FIELDS.len(), |(position, _)| position)
    }
}

/// Flatten nested derive errors into field-level errors
fn collect_errors(errors: &ValidationErrors, out: &mut Vec<ValidationError>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", failure.code));
                    out.push(ValidationError::new(&field, &message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_errors(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_errors(nested, out);
                }
            }
        }
    }
}

/// Validate a complete survey
pub fn validate_survey(survey: &SurveyData) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(derived) = survey.validate() {
        collect_errors(&derived, &mut errors);
    }

    let basic = &survey.basic_info;
    if !basic.height_cm.is_finite() {
        errors.push(ValidationError::new("height", "Height must be a valid number"));
    }
    if !basic.weight_kg.is_finite() {
        errors.push(ValidationError::new("weight", "Weight must be a valid number"));
    }
    if let Some(hours) = survey.recovery_info.sleep_hours {
        if !hours.is_finite() {
            errors.push(ValidationError::new("sleepHours", "Sleep hours must be a valid number"));
        }
    }

    let goal_info = &survey.goal_info;
    if goal_info.goal == Goal::FatLoss && goal_info.fat_loss_rate.is_none() {
        errors.push(ValidationError::new(
            "fatLossRate",
            "Please select your preferred rate of fat loss",
        ));
    }
    if goal_info.goal == Goal::MuscleGain && goal_info.muscle_gain_rate.is_none() {
        errors.push(ValidationError::new(
            "muscleGainRate",
            "Please select your preferred rate of muscle gain",
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    // Derive errors come out of a hash map; order them by questionnaire position
    errors.sort_by(|a, b| a.order().cmp(&b.order()).then_with(|| a.message.cmp(&b.message)));
    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_survey;
    use crate::survey::{FatLossRate, MuscleGainRate};
    use proptest::prelude::*;

    fn fields(result: Result<(), Vec<ValidationError>>) -> Vec<String> {
        result.unwrap_err().into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_sample_survey_is_valid() {
        assert_eq!(validate_survey(&sample_survey()), Ok(()));
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("height_cm", "Height must be between 100 and 250 cm");
        assert_eq!(err.field, "height");
        assert_eq!(err.display_label, "Height");
        assert_eq!(err.user_message(), "Height: Height must be between 100 and 250 cm");
    }

    #[test]
    fn test_unknown_field_keeps_its_name() {
        assert_eq!(get_field_display_label("somethingElse"), "somethingElse");
    }

    #[test]
    fn test_range_errors_carry_messages() {
        let mut survey = sample_survey();
        survey.basic_info.age = 15;

        let errors = validate_survey(&survey).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "age");
        assert_eq!(errors[0].message, "Age must be between 16 and 100 years");
    }

    #[test]
    fn test_errors_in_questionnaire_order() {
        let mut survey = sample_survey();
        survey.recovery_info.stress_level = Some(9);
        survey.nutrition_preferences.meals_per_day = 7;
        survey.training_info.days_per_week = 1;
        survey.lifestyle_info.daily_steps = Some(60_000);
        survey.basic_info.weight_kg = 20.0;
        survey.basic_info.age = 120;

        assert_eq!(
            fields(validate_survey(&survey)),
            vec!["age", "weight", "dailySteps", "daysPerWeek", "mealsPerDay", "stressLevel"]
        );
    }

    #[test]
    fn test_goal_rate_required() {
        let mut survey = sample_survey();
        survey.goal_info.goal = Goal::FatLoss;
        survey.goal_info.fat_loss_rate = None;
        assert_eq!(fields(validate_survey(&survey)), vec!["fatLossRate"]);

        survey.goal_info.fat_loss_rate = Some(FatLossRate::Conservative);
        assert!(validate_survey(&survey).is_ok());

        survey.goal_info.goal = Goal::MuscleGain;
        assert_eq!(fields(validate_survey(&survey)), vec!["muscleGainRate"]);

        survey.goal_info.muscle_gain_rate = Some(MuscleGainRate::Lean);
        assert!(validate_survey(&survey).is_ok());
    }

    #[test]
    fn test_rate_not_required_for_other_goals() {
        let mut survey = sample_survey();
        survey.goal_info.goal = Goal::Strength;
        survey.goal_info.fat_loss_rate = None;
        survey.goal_info.muscle_gain_rate = None;
        assert!(validate_survey(&survey).is_ok());
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let mut survey = sample_survey();
        survey.basic_info.weight_kg = f64::NAN;
        let errors = validate_survey(&survey).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "weight"));
    }

    #[test]
    fn test_optional_recovery_fields() {
        let mut survey = sample_survey();
        survey.recovery_info.sleep_hours = None;
        survey.recovery_info.stress_level = None;
        assert!(validate_survey(&survey).is_ok());

        survey.recovery_info.sleep_hours = Some(2.5);
        assert_eq!(fields(validate_survey(&survey)), vec!["sleepHours"]);
    }

    #[test]
    fn test_errors_serialize_camel_case() {
        let err = ValidationError::new("meals_per_day", "Meals per day must be between 2 and 5");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "mealsPerDay");
        assert_eq!(json["displayLabel"], "Meals Per Day");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_ages_accepted(age in 16i32..=100) {
            let mut survey = sample_survey();
            survey.basic_info.age = age;
            prop_assert!(validate_survey(&survey).is_ok());
        }

        #[test]
        fn prop_out_of_range_weight_rejected(weight in prop_oneof![0.0f64..29.9, 300.1f64..1000.0]) {
            let mut survey = sample_survey();
            survey.basic_info.weight_kg = weight;
            let errors = validate_survey(&survey).unwrap_err();
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(&errors[0].field, "weight");
        }

        #[test]
        fn prop_days_in_range_accepted(days in 2u32..=6, meals in 2u32..=5) {
            let mut survey = sample_survey();
            survey.training_info.days_per_week = days;
            survey.nutrition_preferences.meals_per_day = meals;
            prop_assert!(validate_survey(&survey).is_ok());
        }
    }
}
