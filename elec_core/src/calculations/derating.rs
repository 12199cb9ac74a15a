//! # Derated Current-Carrying Capacity
//!
//! Applies the ambient, grouping and thermal-insulation factors to a cable's
//! base rating:
//!
//! ```text
//! I_adj = I₀ × f_ambient × f_grouping × f_insulation
//! ```
//!
//! ## Unknown Category Labels
//!
//! With [`KeyPolicy::Lenient`] an unrecognized label contributes a factor of
//! 1.0; the substitution is logged and listed in
//! [`DeratingResult::fallbacks`]. With [`KeyPolicy::Strict`] it is an
//! `InvalidInput` error.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::derating::{DeratingInput, calculate};
//! use elec_core::settings::KeyPolicy;
//!
//! let input = DeratingInput::new("2.5 mm² Cu", "30°C", "2 Circuits", "None");
//! let result = calculate(&input, KeyPolicy::Lenient).unwrap();
//! assert!((result.adjusted_current_a - 14.4).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::cable::derated_current;
use crate::errors::{CalcError, CalcResult};
use crate::parse::{ensure_positive, parse_positive};
use crate::settings::KeyPolicy;
use crate::tables::{ampacity, DeratingCategory};
use crate::units::Amps;

/// Input parameters for a derating calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Kitchen circuit",
///   "cable": "2.5 mm² Cu",
///   "ambient": "40°C",
///   "grouping": "3 Circuits",
///   "insulation": "Partially Surrounded"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeratingInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Cable label from the base-rating table (e.g., "2.5 mm² Cu")
    pub cable: String,

    /// Overrides the tabulated base rating when set (A)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_current_a: Option<f64>,

    /// Ambient temperature label (e.g., "35°C")
    pub ambient: String,

    /// Grouping label (e.g., "3 Circuits")
    pub grouping: String,

    /// Thermal insulation label (e.g., "Fully Surrounded")
    pub insulation: String,
}

impl DeratingInput {
    pub fn new(
        cable: impl Into<String>,
        ambient: impl Into<String>,
        grouping: impl Into<String>,
        insulation: impl Into<String>,
    ) -> Self {
        DeratingInput {
            label: String::new(),
            cable: cable.into(),
            base_current_a: None,
            ambient: ambient.into(),
            grouping: grouping.into(),
            insulation: insulation.into(),
        }
    }

    /// Build an input from form text. A blank `base_current` uses the
    /// tabulated rating of `cable`.
    pub fn from_text(cable: &str, base_current: &str, ambient: &str, grouping: &str, insulation: &str) -> CalcResult<Self> {
        let base_current_a = if base_current.trim().is_empty() {
            None
        } else {
            Some(parse_positive("base_current_a", base_current)?)
        };
        Ok(DeratingInput {
            base_current_a,
            ..DeratingInput::new(cable, ambient, grouping, insulation)
        })
    }

    /// Label chosen for a category
    pub fn category_label(&self, category: DeratingCategory) -> &str {
        match category {
            DeratingCategory::Ambient => &self.ambient,
            DeratingCategory::Grouping => &self.grouping,
            DeratingCategory::Insulation => &self.insulation,
        }
    }

    /// Resolve the base rating (A).
    pub fn base_current(&self) -> CalcResult<f64> {
        if let Some(base) = self.base_current_a {
            return ensure_positive("base_current_a", base);
        }
        ampacity::ccc_cable(&self.cable)
            .map(|rating| rating.ampacity_a)
            .ok_or_else(|| CalcError::invalid_input("cable", self.cable.as_str(), "Unknown cable size"))
    }
}

/// One factor as applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactor {
    /// Which table the factor came from
    pub category: DeratingCategory,
    /// Label requested by the operator
    pub label: String,
    /// Multiplier used
    pub factor: f64,
    /// True when the label was not found and 1.0 was substituted
    pub fallback: bool,
}

/// Results from a derating calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cable": "2.5 mm² Cu",
///   "base_current_a": 18.0,
///   "factors": [
///     { "category": "ambient", "label": "30°C", "factor": 1.0, "fallback": false }
///   ],
///   "adjusted_current_a": 14.4,
///   "fallbacks": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeratingResult {
    /// Cable label
    pub cable: String,

    /// Base current-carrying capacity I₀ (A)
    pub base_current_a: f64,

    /// Factors in the order they were applied
    pub factors: Vec<AppliedFactor>,

    /// Adjusted current-carrying capacity (A)
    pub adjusted_current_a: f64,

    /// Categories whose label was unknown and replaced by 1.0
    pub fallbacks: Vec<DeratingCategory>,
}

impl DeratingResult {
    /// Product of the applied factors
    pub fn combined_factor(&self) -> f64 {
        self.factors.iter().map(|f| f.factor).product()
    }
}

/// Resolve one category's factor under `policy`.
fn resolve_factor(category: DeratingCategory, label: &str, policy: KeyPolicy) -> CalcResult<AppliedFactor> {
    if let Some(factor) = category.lookup(label) {
        return Ok(AppliedFactor {
            category,
            label: label.to_string(),
            factor,
            fallback: false,
        });
    }

    match policy {
        KeyPolicy::Strict => Err(CalcError::invalid_input(
            category.to_string(),
            label,
            format!("Unknown label; not in {}", category.reference()),
        )),
        KeyPolicy::Lenient => {
            warn!(%category, label, "unknown derating label, using factor 1.0");
            Ok(AppliedFactor {
                category,
                label: label.to_string(),
                factor: 1.0,
                fallback: true,
            })
        }
    }
}

/// Calculate the derated current-carrying capacity.
///
/// # Returns
///
/// * `Ok(DeratingResult)` - Adjusted rating and the factors used
/// * `Err(CalcError::InvalidInput)` - Unknown cable, non-positive base
///   rating, or (strict policy) an unknown category label
pub fn calculate(input: &DeratingInput, policy: KeyPolicy) -> CalcResult<DeratingResult> {
    let base_current_a = input.base_current()?;

    let factors = DeratingCategory::ALL
        .iter()
        .map(|&category| resolve_factor(category, input.category_label(category), policy))
        .collect::<CalcResult<Vec<_>>>()?;

    let multipliers: Vec<f64> = factors.iter().map(|f| f.factor).collect();
    let adjusted = derated_current(Amps(base_current_a), &multipliers);

    let fallbacks = factors.iter().filter(|f| f.fallback).map(|f| f.category).collect();

    debug!(
        cable = %input.cable,
        base_current_a,
        ?multipliers,
        adjusted_current_a = adjusted.0,
        "derating calculated"
    );

    Ok(DeratingResult {
        cable: input.cable.clone(),
        base_current_a,
        factors,
        adjusted_current_a: adjusted.0,
        fallbacks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_example() {
        let input = DeratingInput::new("2.5 mm² Cu", "30°C", "2 Circuits", "None");
        let result = calculate(&input, KeyPolicy::Lenient).unwrap();

        // 18.0 × 1.00 × 0.80 × 1.00 = 14.4 A
        assert_eq!(result.base_current_a, 18.0);
        assert_eq!(result.adjusted_current_a, 18.0 * 1.00 * 0.80 * 1.00);
        assert!(result.fallbacks.is_empty());
    }

    #[test]
    fn test_all_factors_applied() {
        let input = DeratingInput::new("6.0 mm² Cu", "45°C", "6+ Circuits", "Fully Surrounded");
        let result = calculate(&input, KeyPolicy::Strict).unwrap();

        assert_eq!(result.adjusted_current_a, 31.0 * 0.87 * 0.50 * 0.60);
        assert_eq!(result.factors.len(), 3);
        assert_eq!(result.factors[1].category, DeratingCategory::Grouping);
    }

    #[test]
    fn test_ambient_above_one() {
        let input = DeratingInput::new("1.5 mm² Cu", "25°C", "1 Circuit", "None");
        let result = calculate(&input, KeyPolicy::Lenient).unwrap();
        assert!(result.adjusted_current_a > result.base_current_a);
    }

    #[test]
    fn test_unknown_label_lenient() {
        let input = DeratingInput::new("4.0 mm² Cu", "55°C", "2 Circuits", "None");
        let result = calculate(&input, KeyPolicy::Lenient).unwrap();

        assert_eq!(result.fallbacks, vec![DeratingCategory::Ambient]);
        assert!(result.factors[0].fallback);
        assert_eq!(result.factors[0].factor, 1.0);
        assert_eq!(result.adjusted_current_a, 24.0 * 1.0 * 0.80 * 1.0);
    }

    #[test]
    fn test_unknown_label_strict() {
        let input = DeratingInput::new("4.0 mm² Cu", "30°C", "5 Circuits", "None");
        let err = calculate(&input, KeyPolicy::Strict).unwrap_err();
        match err {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "Grouping");
                assert_eq!(value, "5 Circuits");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_cable() {
        let input = DeratingInput::new("25 mm² Cu", "30°C", "1 Circuit", "None");
        let err = calculate(&input, KeyPolicy::Lenient).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_base_current_override() {
        let input = DeratingInput::from_text("custom", "100", "40°C", "1 Circuit", "None").unwrap();
        let result = calculate(&input, KeyPolicy::Strict).unwrap();
        assert_eq!(result.adjusted_current_a, 100.0 * 0.91 * 1.0 * 1.0);
    }

    #[test]
    fn test_from_text_rejects_bad_base() {
        assert!(DeratingInput::from_text("2.5 mm² Cu", "abc", "30°C", "1 Circuit", "None").is_err());
        assert!(DeratingInput::from_text("2.5 mm² Cu", "-5", "30°C", "1 Circuit", "None").is_err());
        assert!(DeratingInput::from_text("2.5 mm² Cu", " ", "30°C", "1 Circuit", "None").is_ok());
    }

    #[test]
    fn test_combined_factor() {
        let input = DeratingInput::new("10 mm² Cu", "35°C", "3 Circuits", "Partially Surrounded");
        let result = calculate(&input, KeyPolicy::Lenient).unwrap();
        assert!((result.combined_factor() - 0.96 * 0.70 * 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_json_input() {
        let json = r#"{"cable":"2.5 mm² Cu","ambient":"30°C","grouping":"1 Circuit","insulation":"None"}"#;
        let input: DeratingInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.base_current_a, None);
        assert_eq!(input.label, "");
    }
}
