//! # Reference Tables
//!
//! Read-only engineering constants used by the calculations: cable ratings,
//! derating factors, voltage-drop constants, short-circuit k values and the
//! nominal supply voltages.
//!
//! The numeric tables are compiled from `data/reference_tables.toml` at build
//! time, so revising a published figure means editing data, not formulas.
//! [`edition`] reports which standard and data revision a build carries.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::tables::{ampacity, DeratingCategory, ConductorMaterial};
//!
//! let cable = ampacity::ccc_cable("2.5 mm² Cu").unwrap();
//! assert_eq!(cable.ampacity_a, 18.0);
//!
//! let f2 = DeratingCategory::Grouping.lookup("2 Circuits").unwrap();
//! assert_eq!(f2, 0.80);
//!
//! let chosen = ampacity::select_cable(ConductorMaterial::Copper, 42.0).unwrap();
//! assert_eq!(chosen.label, "10 mm²");
//! ```

pub mod ampacity;
pub mod derating;
pub mod short_circuit;
pub mod supply;
pub mod voltage_drop;

use std::collections::HashMap;

use serde::Serialize;

pub use ampacity::{CableRating, ConductorMaterial};
pub use derating::{DeratingCategory, DeratingFactor};
pub use short_circuit::{InsulationType, KConstant};
pub use supply::NominalVoltage;
pub use voltage_drop::{Phase, VoltageDropRating};

use crate::generated;

/// Identifies the reference data compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableEdition {
    /// Standard the figures are taken from (e.g., "AS/NZS 3008.1.1")
    pub standard: &'static str,
    /// Data revision, bumped whenever a figure changes
    pub revision: u32,
}

impl std::fmt::Display for TableEdition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (data rev {})", self.standard, self.revision)
    }
}

/// Standard and revision of the compiled reference tables.
pub fn edition() -> TableEdition {
    TableEdition {
        standard: generated::STANDARD,
        revision: generated::REVISION,
    }
}

/// Build a label → row index for a static table.
///
/// Used behind `once_cell::sync::Lazy` statics in the table modules.
pub(crate) fn index_by_label<T>(rows: &'static [T], label: fn(&T) -> &'static str) -> HashMap<&'static str, &'static T> {
    rows.iter().map(|row| (label(row), row)).collect()
}
