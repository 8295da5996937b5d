//! Progression guidance and the limitations warning

use crate::plan::ProgressionRule;

const RULES: &[(&str, &str)] = &[
    (
        "Double Progression Method",
        "Each exercise has a rep range (e.g., 3×6-10). Start at the lower end. When you can \
         complete all sets at the top of the range with good form, increase the weight by the \
         smallest increment available (typically 2.5kg/5lbs) and start again at the lower rep \
         range.",
    ),
    (
        "Rep Target Example",
        "If your target is 3×8-12 and you get 12, 11, 10 reps, keep the same weight until you \
         hit 12, 12, 12. Then increase weight and aim for 8+ reps again.",
    ),
    (
        "Stall Protocol",
        "If you fail to progress for 2 consecutive weeks on an exercise, reduce the weight by \
         10% and work back up. This provides a mini-deload and often breaks plateaus.",
    ),
    (
        "Deload Weeks",
        "Every 4-6 weeks, take a deload week: reduce volume by 50% (half the sets) or intensity \
         by 40% (lighter weights). This promotes recovery and long-term progress.",
    ),
    (
        "RIR Guidelines",
        "RIR (Reps in Reserve) indicates how many reps you should have left \"in the tank\". \
         Compounds at RIR 2 means stopping 2 reps before failure. Isolations at RIR 0-1 can be \
         taken closer to failure.",
    ),
];

/// The progression rules attached to every plan, independent of goal
pub fn progression_rules() -> Vec<ProgressionRule> {
    RULES
        .iter()
        .map(|&(title, description)| ProgressionRule {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Warning shown when the user reported injuries or limitations
///
/// Blank text yields no warning; anything else is embedded as entered.
pub fn limitations_warning(limitations: Option<&str>) -> Option<String> {
    limitations
        .filter(|text| !text.trim().is_empty())
        .map(|text| {
            format!(
                "⚠️ You mentioned: \"{}\". Please consult with a healthcare professional before \
                 starting this program. Modify or skip any exercises that aggravate your \
                 condition.",
                text
            )
        })
}
