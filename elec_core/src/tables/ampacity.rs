//! Cable current-carrying capacity (AS/NZS 3008.1.1)
//!
//! Two kinds of table live here:
//!
//! - the base ratings offered by the derating calculator, keyed by labels
//!   such as "2.5 mm² Cu";
//! - the selection tables for copper and aluminium, ordered by ascending
//!   ampacity, used to pick the smallest cable that carries a load.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::generated;

/// Conductor material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConductorMaterial {
    /// Copper (Cu)
    #[default]
    Copper,
    /// Aluminium (Al)
    Aluminium,
}

impl ConductorMaterial {
    /// All conductor materials for UI selection
    pub const ALL: [ConductorMaterial; 2] = [ConductorMaterial::Copper, ConductorMaterial::Aluminium];

    /// Chemical symbol used in cable labels
    pub fn symbol(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Cu",
            ConductorMaterial::Aluminium => "Al",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Copper",
            ConductorMaterial::Aluminium => "Aluminium",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "cu" | "copper" => Ok(ConductorMaterial::Copper),
            "al" | "aluminium" | "aluminum" => Ok(ConductorMaterial::Aluminium),
            _ => Err(CalcError::invalid_input(
                "material",
                s,
                "Expected copper (Cu) or aluminium (Al)",
            )),
        }
    }
}

impl std::fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A cable size with its rated continuous current.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CableRating {
    /// Display label (e.g., "2.5 mm² Cu", "10 mm²", "16 mm² Al")
    pub label: &'static str,
    /// Conductor material
    pub material: ConductorMaterial,
    /// Nominal conductor cross-section (mm²)
    pub size_mm2: f64,
    /// Rated continuous current (A)
    pub ampacity_a: f64,
}

static CCC_INDEX: Lazy<HashMap<&'static str, &'static CableRating>> =
    Lazy::new(|| super::index_by_label(generated::CCC_CABLES, |r| r.label));

/// Base ratings offered by the derating calculator, in table order.
pub fn ccc_cables() -> &'static [CableRating] {
    generated::CCC_CABLES
}

/// Look up a derating-calculator base rating by its label.
pub fn ccc_cable(label: &str) -> Option<&'static CableRating> {
    CCC_INDEX.get(label.trim()).copied()
}

/// Selection table for a conductor material, ascending by ampacity.
pub fn selection_table(material: ConductorMaterial) -> &'static [CableRating] {
    match material {
        ConductorMaterial::Copper => generated::SELECTION_COPPER,
        ConductorMaterial::Aluminium => generated::SELECTION_ALUMINIUM,
    }
}

/// Smallest cable whose rating meets or exceeds `current_a`.
///
/// Returns `None` when even the largest entry is insufficient.
pub fn select_cable(material: ConductorMaterial, current_a: f64) -> Option<&'static CableRating> {
    selection_table(material)
        .iter()
        .find(|rating| rating.ampacity_a >= current_a)
}
