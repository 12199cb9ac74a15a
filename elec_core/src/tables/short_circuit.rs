//! Material constant k for the adiabatic short-circuit equation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::generated;
use crate::tables::ConductorMaterial;

/// Conductor insulation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InsulationType {
    /// Thermoplastic (V-75/V-90)
    #[default]
    Pvc,
    /// Cross-linked polyethylene (X-90)
    Xlpe,
}

impl InsulationType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationType::Pvc => "PVC",
            InsulationType::Xlpe => "XLPE",
        }
    }
}

/// k constant for one conductor/insulation pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KConstant {
    /// Label (e.g., "Copper (PVC)")
    pub label: &'static str,
    /// Conductor material
    pub material: ConductorMaterial,
    /// Insulation type
    pub insulation: InsulationType,
    /// k (A·s½/mm²)
    pub k: f64,
}

static INDEX: Lazy<HashMap<&'static str, &'static KConstant>> =
    Lazy::new(|| super::index_by_label(generated::K_CONSTANTS, |r| r.label));

/// All k constants.
pub fn constants() -> &'static [KConstant] {
    generated::K_CONSTANTS
}

/// Look up k by label, e.g. "Copper (PVC)".
pub fn lookup(label: &str) -> Option<&'static KConstant> {
    INDEX.get(label.trim()).copied()
}

/// Look up k by conductor material and insulation.
pub fn for_conductor(material: ConductorMaterial, insulation: InsulationType) -> Option<&'static KConstant> {
    constants()
        .iter()
        .find(|c| c.material == material && c.insulation == insulation)
}
