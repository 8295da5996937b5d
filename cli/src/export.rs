//! Plan export
//!
//! Supports multiple formats:
//! - JSON: the full generated plan
//! - Text: a paginated document for printing
//! - CSV: one row per prescribed exercise, for spreadsheets
//!
//! The text document always runs in the same section order: profile,
//! BMI, nutrition targets, meals, workout days, progression rules,
//! limitations warning, disclaimer.

use fitplan_engine::{ExercisePrescription, GeneratedPlan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DISCLAIMER: &str = "Disclaimer: This plan is generated based on general fitness \
    principles and the information you provided. It is not medical advice. Please consult with a \
    healthcare professional or certified fitness trainer before starting any new exercise or \
    nutrition program, especially if you have pre-existing health conditions.";

const LINE_WIDTH: usize = 78;
const FOOD_SUGGESTIONS: usize = 5;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Text,
    Csv,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush error: {0}")]
    CsvFlush(String),

    #[error("CSV encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Text document options
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Lines per page; 0 renders a single page
    pub lines_per_page: usize,
    pub include_food_bank: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            lines_per_page: 60,
            include_food_bank: true,
        }
    }
}

/// Render a plan in the requested format
pub fn render(
    plan: &GeneratedPlan,
    format: ExportFormat,
    options: TextOptions,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => to_json(plan),
        ExportFormat::Text => Ok(to_text(plan, options)),
        ExportFormat::Csv => to_csv(plan),
    }
}

pub fn to_json(plan: &GeneratedPlan) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(plan)?)
}

// ============================================================================
// CSV
// ============================================================================

/// CSV export row for one prescribed exercise
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleCsvRow {
    pub day: String,
    pub focus: String,
    pub exercise_id: String,
    pub exercise: String,
    pub sets: u32,
    pub reps_min: u32,
    pub reps_max: u32,
    pub timed: bool,
    pub rest_seconds: u32,
    pub rir_target: u32,
}

pub fn schedule_rows(plan: &GeneratedPlan) -> Vec<ScheduleCsvRow> {
    plan.workout_plan
        .schedule
        .iter()
        .flat_map(|day| {
            day.exercises.iter().map(move |p| ScheduleCsvRow {
                day: day.name.clone(),
                focus: day.focus.clone(),
                exercise_id: p.exercise.id.clone(),
                exercise: p.exercise.name.clone(),
                sets: p.sets,
                reps_min: p.reps_min,
                reps_max: p.reps_max,
                timed: p.timed,
                rest_seconds: p.rest_seconds,
                rir_target: p.rir_target,
            })
        })
        .collect()
}

pub fn to_csv(plan: &GeneratedPlan) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in schedule_rows(plan) {
        wtr.serialize(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::CsvFlush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

// ============================================================================
// Text
// ============================================================================

/// Greedy word wrap; words longer than the width get a line of their own
fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            indent.len() + word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if current.is_empty() {
            current.push_str(indent);
        } else {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn section(out: &mut Vec<String>, heading: &str) {
    if !out.is_empty() {
        out.push(String::new());
    }
    out.push(heading.to_string());
    out.push("-".repeat(heading.chars().count()));
}

/// Plain words from a snake_case enum value
fn humanize<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name.replace('_', " "),
        _ => String::new(),
    }
}

fn exercise_line(p: &ExercisePrescription) -> String {
    let unit = if p.timed { "s" } else { "" };
    format!(
        "  • {}: {}×{}-{}{} | Rest: {}s | RIR: {}",
        p.exercise.name, p.sets, p.reps_min, p.reps_max, unit, p.rest_seconds, p.rir_target
    )
}

/// Document lines, before pagination
pub fn document_lines(plan: &GeneratedPlan, include_food_bank: bool) -> Vec<String> {
    let mut out = Vec::new();

    out.push("Your Personalized Fitness Plan".to_string());
    out.push(format!("Generated on: {}", plan.generated_at.format("%Y-%m-%d")));

    // Profile
    let survey = &plan.survey_data;
    let basic = &survey.basic_info;
    let training = &survey.training_info;
    section(&mut out, "Your Profile");
    out.push(format!("Age: {} | Sex: {}", basic.age, basic.sex.label()));
    out.push(format!("Height: {}cm | Weight: {}kg", basic.height_cm, basic.weight_kg));
    out.push(format!("Goal: {}", survey.goal_info.goal.label()));
    out.push(format!("Activity Level: {}", survey.lifestyle_info.activity_level.label()));
    out.push(format!(
        "Training: {} days/week, {}, {}",
        training.days_per_week,
        training.experience.label(),
        training.equipment.label()
    ));
    out.push(format!(
        "Diet: {}, {} meals/day",
        humanize(&survey.nutrition_preferences.diet_style),
        survey.nutrition_preferences.meals_per_day
    ));

    // BMI
    let metrics = &plan.body_metrics;
    section(&mut out, "BMI Snapshot");
    out.push(format!("BMI: {:.1} ({})", metrics.bmi, metrics.band.description()));
    out.push(format!(
        "Healthy weight range for your height: {:.1} - {:.1} kg",
        metrics.healthy_weight_range.min_kg, metrics.healthy_weight_range.max_kg
    ));

    // Nutrition targets
    let nutrition = &plan.nutrition_plan;
    section(&mut out, "Nutrition Plan");
    out.push(format!("Daily Calories: {} kcal", nutrition.daily_calories));
    out.push(format!("BMR: {} kcal | TDEE: {} kcal", nutrition.bmr, nutrition.tdee));
    out.push(format!(
        "Protein: {}g ({}%)",
        nutrition.macros.protein, nutrition.macro_percentages.protein
    ));
    out.push(format!(
        "Carbohydrates: {}g ({}%)",
        nutrition.macros.carbs, nutrition.macro_percentages.carbs
    ));
    out.push(format!(
        "Fats: {}g ({}%)",
        nutrition.macros.fats, nutrition.macro_percentages.fats
    ));
    out.push(String::new());
    for paragraph in [
        &nutrition.explanation.calorie_reasoning,
        &nutrition.explanation.protein_reasoning,
        &nutrition.explanation.change_rate_reasoning,
    ] {
        out.extend(wrap(paragraph, LINE_WIDTH, ""));
    }

    // Meals
    section(&mut out, "Meal Structure");
    for meal in &nutrition.meals {
        out.push(format!(
            "  • {}: {} kcal (P: {}g, C: {}g, F: {}g)",
            meal.name,
            meal.target_calories,
            meal.target_macros.protein,
            meal.target_macros.carbs,
            meal.target_macros.fats
        ));
    }
    if include_food_bank {
        let suggestions = nutrition.food_bank.suggestions(FOOD_SUGGESTIONS);
        out.push(String::new());
        out.push("Food Suggestions:".to_string());
        for (label, foods) in [
            ("Protein", &suggestions.proteins),
            ("Carbs", &suggestions.carbs),
            ("Fats", &suggestions.fats),
            ("Vegetables", &suggestions.fiber_veg),
        ] {
            if foods.is_empty() {
                continue;
            }
            let names: Vec<&str> = foods.iter().map(|f| f.name.as_str()).collect();
            out.extend(wrap(&format!("{}: {}", label, names.join(", ")), LINE_WIDTH, "  "));
        }
    }

    // Workout schedule
    let workout = &plan.workout_plan;
    section(&mut out, &format!("Workout Plan: {}", workout.split_type));
    for (index, day) in workout.schedule.iter().enumerate() {
        if index > 0 {
            out.push(String::new());
        }
        out.push(day.name.clone());
        out.push(format!("  Focus: {}", day.focus));
        out.extend(day.exercises.iter().map(exercise_line));
        if !day.omitted_roles.is_empty() {
            out.push(format!(
                "  (no exercise available for: {})",
                day.omitted_roles.join(", ")
            ));
        }
    }

    // Progression
    section(&mut out, "Progression Rules");
    for rule in &workout.progression_rules {
        out.push(format!("• {}", rule.title));
        out.extend(wrap(&rule.description, LINE_WIDTH, "  "));
    }

    // Limitations
    if let Some(warning) = &workout.limitations_warning {
        section(&mut out, "Important Notice");
        out.extend(wrap(warning, LINE_WIDTH, ""));
    }

    out.push(String::new());
    out.extend(wrap(DISCLAIMER, LINE_WIDTH, ""));
    out
}

/// Split lines into pages, each closed by a page footer
pub fn paginate(lines: &[String], lines_per_page: usize) -> Vec<Vec<String>> {
    if lines_per_page == 0 || lines.is_empty() {
        return vec![lines.to_vec()];
    }
    lines.chunks(lines_per_page).map(|chunk| chunk.to_vec()).collect()
}

pub fn to_text(plan: &GeneratedPlan, options: TextOptions) -> String {
    let lines = document_lines(plan, options.include_food_bank);
    let pages = paginate(&lines, options.lines_per_page);
    let total = pages.len();

    let rendered: Vec<String> = pages
        .into_iter()
        .enumerate()
        .map(|(index, page)| {
            let mut text = page.join("\n");
            if total > 1 {
                text.push_str(&format!("\n\n[Page {} of {}]\n", index + 1, total));
            } else {
                text.push('\n');
            }
            text
        })
        .collect();

    // Form feed between pages
    rendered.join("\u{c}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fitplan_engine::{compose_plan_at, ReferenceData, SurveyData};
    use rstest::rstest;

    fn sample_plan(limitations: Option<&str>) -> GeneratedPlan {
        let survey: SurveyData = serde_json::from_value(serde_json::json!({
            "basicInfo": {"age": 30, "sex": "male", "heightCm": 175, "weightKg": 75},
            "goalInfo": {"goal": "fat_loss", "fatLossRate": "moderate"},
            "lifestyleInfo": {"activityLevel": "moderately_active"},
            "trainingInfo": {
                "experience": "beginner",
                "daysPerWeek": 3,
                "equipment": "bodyweight",
                "limitations": limitations
            },
            "nutritionPreferences": {
                "dietStyle": "no_preference",
                "mealsPerDay": 3,
                "cookingTime": "low"
            }
        }))
        .unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap();
        compose_plan_at(&survey, ReferenceData::builtin(), at)
    }

    fn position(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|line| line.starts_with(needle))
            .unwrap_or_else(|| panic!("missing line starting with {:?}", needle))
    }

    #[test]
    fn test_sections_in_order() {
        let lines = document_lines(&sample_plan(Some("sore wrist")), true);
        let order = [
            "Your Profile",
            "BMI Snapshot",
            "Nutrition Plan",
            "Meal Structure",
            "Workout Plan: Full Body",
            "Progression Rules",
            "Important Notice",
            "Disclaimer:",
        ];
        let positions: Vec<usize> = order.iter().map(|s| position(&lines, s)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_no_notice_without_limitations() {
        let lines = document_lines(&sample_plan(None), false);
        assert!(!lines.iter().any(|l| l == "Important Notice"));
        assert!(!lines.iter().any(|l| l == "Food Suggestions:"));
        assert!(lines.last().unwrap().ends_with("health conditions."));
    }

    #[test]
    fn test_profile_lines() {
        let lines = document_lines(&sample_plan(None), false);
        assert!(lines.contains(&"Height: 175cm | Weight: 75kg".to_string()));
        assert!(lines.contains(&"Diet: no preference, 3 meals/day".to_string()));
        assert!(lines.contains(&"Training: 3 days/week, beginner, bodyweight".to_string()));
    }

    #[test]
    fn test_document_contents() {
        let lines = document_lines(&sample_plan(None), true);
        assert!(lines.contains(&"Generated on: 2024-05-20".to_string()));
        assert!(lines.contains(&"BMI: 24.5 (Normal)".to_string()));
        assert!(lines.contains(&"Daily Calories: 2100 kcal".to_string()));
        assert!(lines.contains(&"  • Plank: 3×30-60s | Rest: 90s | RIR: 1".to_string()));
        assert!(lines.contains(&"  (no exercise available for: lateral raise)".to_string()));
    }

    #[test]
    fn test_wrap() {
        let lines = wrap("one two three four five", 9, "  ");
        assert_eq!(lines, vec!["  one two", "  three", "  four", "  five"]);
        assert!(wrap("", 10, "").is_empty());
        assert!(wrap(DISCLAIMER, LINE_WIDTH, "").iter().all(|l| l.chars().count() <= LINE_WIDTH));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(10, 3)]
    #[case(25, 1)]
    #[case(1, 25)]
    fn test_paginate(#[case] per_page: usize, #[case] pages: usize) {
        let lines: Vec<String> = (0..25).map(|i| i.to_string()).collect();
        let paged = paginate(&lines, per_page);
        assert_eq!(paged.len(), pages);
        assert_eq!(paged.concat(), lines);
    }

    #[test]
    fn test_text_pages_are_numbered() {
        let plan = sample_plan(None);
        let text = to_text(
            &plan,
            TextOptions {
                lines_per_page: 20,
                include_food_bank: true,
            },
        );
        let pages: Vec<&str> = text.split('\u{c}').collect();
        assert!(pages.len() > 1);
        assert!(pages[0].contains(&format!("[Page 1 of {}]", pages.len())));

        let single = to_text(
            &plan,
            TextOptions {
                lines_per_page: 0,
                include_food_bank: true,
            },
        );
        assert!(!single.contains('\u{c}'));
        assert!(!single.contains("[Page"));
    }

    #[test]
    fn test_csv_has_one_row_per_prescription() {
        let plan = sample_plan(None);
        let csv = to_csv(&plan).unwrap();
        let expected: usize = plan.workout_plan.schedule.iter().map(|d| d.exercises.len()).sum();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "day,focus,exercise_id,exercise,sets,reps_min,reps_max,timed,rest_seconds,rir_target"
        );
        assert_eq!(lines.count(), expected);
        assert!(csv.contains("Day 1: Full Body A,Full Body,bodyweight_squat,Bodyweight Squat,3,6,12,false,180,2"));
    }

    #[test]
    fn test_json_matches_plan() {
        let plan = sample_plan(Some("bad knee"));
        let json = render(&plan, ExportFormat::Json, TextOptions::default()).unwrap();
        let parsed: GeneratedPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.generated_at, plan.generated_at);
        assert_eq!(parsed.nutrition_plan.meals, plan.nutrition_plan.meals);
        assert_eq!(parsed.workout_plan.schedule.len(), plan.workout_plan.schedule.len());
        assert_eq!(parsed.workout_plan.limitations_warning, plan.workout_plan.limitations_warning);
    }
}
