//! Voltage-drop constants (mV/A·m) for copper cables, single and three phase.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::generated;

/// Supply phase arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Single phase (1ph)
    #[default]
    Single,
    /// Three phase (3ph)
    Three,
}

impl Phase {
    /// Suffix used in table labels
    pub fn suffix(&self) -> &'static str {
        match self {
            Phase::Single => "1ph",
            Phase::Three => "3ph",
        }
    }
}

/// Millivolt-per-amp-metre constant for one cable arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoltageDropRating {
    /// Label (e.g., "2.5 mm² Cu 1ph")
    pub label: &'static str,
    /// Conductor cross-section (mm²)
    pub size_mm2: f64,
    /// Phase arrangement
    pub phase: Phase,
    /// mV/A·m
    pub mv_per_am: f64,
}

static INDEX: Lazy<HashMap<&'static str, &'static VoltageDropRating>> =
    Lazy::new(|| super::index_by_label(generated::VOLTAGE_DROP, |r| r.label));

/// All voltage-drop rows, single phase first.
pub fn ratings() -> &'static [VoltageDropRating] {
    generated::VOLTAGE_DROP
}

/// Look up a row by label, e.g. "6.0 mm² Cu 3ph".
pub fn lookup(label: &str) -> Option<&'static VoltageDropRating> {
    INDEX.get(label.trim()).copied()
}

/// Look up a row by conductor size and phase arrangement.
pub fn for_cable(size_mm2: f64, phase: Phase) -> Option<&'static VoltageDropRating> {
    ratings()
        .iter()
        .find(|r| r.phase == phase && r.size_mm2 == size_mm2)
}
