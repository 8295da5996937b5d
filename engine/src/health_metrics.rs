//! Body metrics carried alongside a generated plan
//!
//! BMI and the healthy weight range are computed once here so that
//! presentation and export never derive them again.

use serde::{Deserialize, Serialize};

/// BMI band as shown on the plan summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    /// Lower (inclusive) and upper (exclusive) BMI bounds of the band
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiBand::Underweight => (0.0, 18.5),
            BmiBand::Normal => (18.5, 24.9),
            BmiBand::Overweight => (24.9, 29.9),
            BmiBand::Obese => (29.9, f64::INFINITY),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal",
            BmiBand::Overweight => "Overweight",
            BmiBand::Obese => "Obese",
        }
    }
}

/// Healthy weight range for a height, in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthyWeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

/// BMI summary attached to a generated plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiSnapshot {
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub band: BmiBand,
    pub healthy_weight_range: HealthyWeightRange,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify an unrounded BMI value
pub fn classify_bmi(bmi: f64) -> BmiBand {
    if bmi < 18.5 {
        BmiBand::Underweight
    } else if bmi < 24.9 {
        BmiBand::Normal
    } else if bmi < 29.9 {
        BmiBand::Overweight
    } else {
        BmiBand::Obese
    }
}

/// Weight range that keeps BMI inside the normal band
pub fn healthy_weight_range(height_cm: f64) -> HealthyWeightRange {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    HealthyWeightRange {
        min_kg: 18.5 * height_m_sq,
        max_kg: 24.9 * height_m_sq,
    }
}

pub fn bmi_snapshot(weight_kg: f64, height_cm: f64) -> BmiSnapshot {
    let bmi = calculate_bmi(weight_kg, height_cm);
    BmiSnapshot {
        bmi: (bmi * 10.0).round() / 10.0,
        band: classify_bmi(bmi),
        healthy_weight_range: healthy_weight_range(height_cm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 175cm -> BMI ~22.86
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.01);
    }

    #[test]
    fn test_bmi_bands() {
        assert_eq!(classify_bmi(17.0), BmiBand::Underweight);
        assert_eq!(classify_bmi(18.5), BmiBand::Normal);
        assert_eq!(classify_bmi(24.89), BmiBand::Normal);
        assert_eq!(classify_bmi(24.9), BmiBand::Overweight);
        assert_eq!(classify_bmi(29.9), BmiBand::Obese);
        assert_eq!(classify_bmi(45.0), BmiBand::Obese);
    }

    #[test]
    fn test_snapshot_rounds_to_one_decimal() {
        let snapshot = bmi_snapshot(70.0, 175.0);
        assert_eq!(snapshot.bmi, 22.9);
        assert_eq!(snapshot.band, BmiBand::Normal);
    }

    #[test]
    fn test_healthy_weight_range() {
        // For 175cm: 18.5 * 1.75² = 56.66, 24.9 * 1.75² = 76.26
        let range = healthy_weight_range(175.0);
        assert!((range.min_kg - 56.66).abs() < 0.01);
        assert!((range.max_kg - 76.26).abs() < 0.01);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the band's bounds contain the BMI it was classified from
        #[test]
        fn prop_band_range_contains_bmi(bmi in 10.0f64..60.0) {
            let (low, high) = classify_bmi(bmi).range();
            prop_assert!(bmi >= low && bmi < high);
        }

        /// Property: weights inside the healthy range classify as normal
        #[test]
        fn prop_healthy_range_is_normal(height in 140.0f64..210.0, t in 0.01f64..0.99) {
            let range = healthy_weight_range(height);
            let weight = range.min_kg + t * (range.max_kg - range.min_kg);
            prop_assert_eq!(classify_bmi(calculate_bmi(weight, height)), BmiBand::Normal);
        }
    }
}
