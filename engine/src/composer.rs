//! Assembles the nutrition and workout halves into one plan

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::health_metrics::bmi_snapshot;
use crate::nutrition::assemble_nutrition_plan;
use crate::plan::GeneratedPlan;
use crate::reference::ReferenceData;
use crate::survey::SurveyData;
use crate::workout::generate_workout_plan;

/// Generate a complete plan, stamped with the current time
pub fn compose_plan(survey: &SurveyData, reference: &ReferenceData) -> GeneratedPlan {
    compose_plan_at(survey, reference, Utc::now())
}

/// Generate a complete plan with an explicit timestamp
pub fn compose_plan_at(
    survey: &SurveyData,
    reference: &ReferenceData,
    generated_at: DateTime<Utc>,
) -> GeneratedPlan {
    let nutrition_plan = assemble_nutrition_plan(survey, &reference.foods);
    let workout_plan = generate_workout_plan(survey, &reference.exercises);
    let body_metrics = bmi_snapshot(survey.basic_info.weight_kg, survey.basic_info.height_cm);

    debug!(
        daily_calories = nutrition_plan.daily_calories,
        split = %workout_plan.split_type,
        days = workout_plan.schedule.len(),
        bmi = body_metrics.bmi,
        "Plan composed"
    );

    GeneratedPlan {
        survey_data: survey.clone(),
        nutrition_plan,
        workout_plan,
        body_metrics,
        generated_at,
    }
}
