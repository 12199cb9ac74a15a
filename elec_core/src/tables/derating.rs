//! # Derating Factors
//!
//! Multipliers applied to a cable's base current-carrying capacity for
//! adverse installation conditions:
//!
//! ```text
//! I_adj = I₀ × f_ambient × f_grouping × f_insulation
//! ```
//!
//! | Category           | Reference               | Range       |
//! |--------------------|-------------------------|-------------|
//! | Ambient temperature| AS/NZS 3008 Table 32    | 0.82 - 1.04 |
//! | Circuit grouping   | AS/NZS 3008 Table 27    | 0.50 - 1.00 |
//! | Thermal insulation | AS/NZS 3008 Table 34    | 0.60 - 1.00 |
//!
//! Categories are keyed by the labels an operator picks ("35°C",
//! "3 Circuits", "Partially Surrounded").

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::generated;

/// Reference clauses for each derating table.
pub mod table_ref {
    /// Ambient air temperature correction
    pub const AMBIENT: &str = "AS/NZS 3008 Table 32";
    /// Grouping of circuits
    pub const GROUPING: &str = "AS/NZS 3008 Table 27";
    /// Cables in thermal insulation
    pub const INSULATION: &str = "AS/NZS 3008 Table 34";
}

/// One row of a derating table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeratingFactor {
    /// Category label shown to the operator
    pub label: &'static str,
    /// Dimensionless multiplier
    pub factor: f64,
}

/// The three independent derating tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeratingCategory {
    /// Ambient air temperature
    Ambient,
    /// Number of grouped circuits
    Grouping,
    /// Exposure to thermal insulation
    Insulation,
}

type FactorIndex = HashMap<&'static str, &'static DeratingFactor>;

static AMBIENT_INDEX: Lazy<FactorIndex> = Lazy::new(|| super::index_by_label(generated::AMBIENT, |r| r.label));
static GROUPING_INDEX: Lazy<FactorIndex> = Lazy::new(|| super::index_by_label(generated::GROUPING, |r| r.label));
static INSULATION_INDEX: Lazy<FactorIndex> =
    Lazy::new(|| super::index_by_label(generated::INSULATION, |r| r.label));

impl DeratingCategory {
    /// All categories, in the order the factors are applied
    pub const ALL: [DeratingCategory; 3] = [
        DeratingCategory::Ambient,
        DeratingCategory::Grouping,
        DeratingCategory::Insulation,
    ];

    /// Rows of this category's table, in published order
    pub fn table(&self) -> &'static [DeratingFactor] {
        match self {
            DeratingCategory::Ambient => generated::AMBIENT,
            DeratingCategory::Grouping => generated::GROUPING,
            DeratingCategory::Insulation => generated::INSULATION,
        }
    }

    /// Factor for a label, or `None` when the label is not in the table
    pub fn lookup(&self, label: &str) -> Option<f64> {
        let index = match self {
            DeratingCategory::Ambient => &*AMBIENT_INDEX,
            DeratingCategory::Grouping => &*GROUPING_INDEX,
            DeratingCategory::Insulation => &*INSULATION_INDEX,
        };
        index.get(label.trim()).map(|row| row.factor)
    }

    /// Label selected when the operator has not chosen one
    pub fn default_label(&self) -> &'static str {
        match self {
            DeratingCategory::Ambient => "30°C",
            DeratingCategory::Grouping => "1 Circuit",
            DeratingCategory::Insulation => "None",
        }
    }

    /// Published table this category comes from
    pub fn reference(&self) -> &'static str {
        match self {
            DeratingCategory::Ambient => table_ref::AMBIENT,
            DeratingCategory::Grouping => table_ref::GROUPING,
            DeratingCategory::Insulation => table_ref::INSULATION,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DeratingCategory::Ambient => "Ambient Temp",
            DeratingCategory::Grouping => "Grouping",
            DeratingCategory::Insulation => "Thermal Insulation",
        }
    }
}

impl std::fmt::Display for DeratingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_values() {
        let cat = DeratingCategory::Ambient;
        assert_eq!(cat.lookup("25°C"), Some(1.04));
        assert_eq!(cat.lookup("30°C"), Some(1.00));
        assert_eq!(cat.lookup("35°C"), Some(0.96));
        assert_eq!(cat.lookup("40°C"), Some(0.91));
        assert_eq!(cat.lookup("45°C"), Some(0.87));
        assert_eq!(cat.lookup("50°C"), Some(0.82));
        assert_eq!(cat.table().len(), 6);
    }

    #[test]
    fn test_grouping_values() {
        let cat = DeratingCategory::Grouping;
        assert_eq!(cat.lookup("1 Circuit"), Some(1.00));
        assert_eq!(cat.lookup("2 Circuits"), Some(0.80));
        assert_eq!(cat.lookup("3 Circuits"), Some(0.70));
        assert_eq!(cat.lookup("4 Circuits"), Some(0.65));
        assert_eq!(cat.lookup("6+ Circuits"), Some(0.50));
        assert_eq!(cat.lookup("5 Circuits"), None);
    }

    #[test]
    fn test_insulation_values() {
        let cat = DeratingCategory::Insulation;
        assert_eq!(cat.lookup("None"), Some(1.00));
        assert_eq!(cat.lookup("Partially Surrounded"), Some(0.75));
        assert_eq!(cat.lookup("Fully Surrounded"), Some(0.60));
    }

    #[test]
    fn test_default_labels_are_neutral() {
        for cat in DeratingCategory::ALL {
            assert_eq!(cat.lookup(cat.default_label()), Some(1.0), "{cat}");
        }
    }

    #[test]
    fn test_references() {
        assert_eq!(DeratingCategory::Grouping.reference(), "AS/NZS 3008 Table 27");
    }
}
