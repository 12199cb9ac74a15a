//! # Cable Selection
//!
//! Picks the smallest cable whose tabulated current rating meets or exceeds
//! the load current. Tables are ascending by rating, so the first match is
//! the smallest adequate cable and a load exactly equal to a rating selects
//! that entry.
//!
//! The load power `I × V × PF / 1000` is reported alongside for reference; it
//! does not influence the choice of cable.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::cable_selection::{CableSelectionInput, calculate};
//! use elec_core::tables::ConductorMaterial;
//!
//! let input = CableSelectionInput::from_text("42", "230", "0.8", Some(ConductorMaterial::Copper)).unwrap();
//! let result = calculate(&input, ConductorMaterial::Copper).unwrap();
//! assert_eq!(result.cable, "10 mm²");
//! assert_eq!(result.rating_a, 42.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::circuit::single_phase_power;
use crate::errors::{CalcError, CalcResult};
use crate::parse::{ensure_finite, ensure_positive, parse_number};
use crate::tables::{ampacity, ConductorMaterial};
use crate::units::{Amps, Kilowatts, Volts};

/// Input parameters for cable selection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Sub-main",
///   "current_a": 63.0,
///   "voltage_v": 230.0,
///   "power_factor": 0.9,
///   "material": "copper"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSelectionInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Load current (A)
    pub current_a: f64,

    /// Supply voltage (V)
    pub voltage_v: f64,

    /// Load power factor; only used for `load_kw`
    pub power_factor: f64,

    /// Conductor material; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<ConductorMaterial>,
}

impl CableSelectionInput {
    /// Build an input from form text.
    pub fn from_text(
        current: &str,
        voltage: &str,
        power_factor: &str,
        material: Option<ConductorMaterial>,
    ) -> CalcResult<Self> {
        let input = CableSelectionInput {
            label: String::new(),
            current_a: parse_number("current_a", current)?,
            voltage_v: parse_number("voltage_v", voltage)?,
            power_factor: parse_number("power_factor", power_factor)?,
            material,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("current_a", self.current_a)?;
        ensure_positive("voltage_v", self.voltage_v)?;
        ensure_finite("power_factor", self.power_factor)?;
        Ok(())
    }
}

/// Results from cable selection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cable": "16 mm²",
///   "material": "copper",
///   "size_mm2": 16.0,
///   "rating_a": 57.0,
///   "current_a": 50.0,
///   "load_kw": 10.35
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSelectionResult {
    /// Selected cable label
    pub cable: String,

    /// Conductor material searched
    pub material: ConductorMaterial,

    /// Conductor cross-section (mm²)
    pub size_mm2: f64,

    /// Tabulated rating of the selected cable (A)
    pub rating_a: f64,

    /// Load current the cable was selected for (A)
    pub current_a: f64,

    /// Load power I × V × PF (kW)
    pub load_kw: f64,
}

impl CableSelectionResult {
    /// Rating left over above the load (A)
    pub fn spare_capacity_a(&self) -> f64 {
        self.rating_a - self.current_a
    }
}

/// Select a cable for the load.
///
/// # Arguments
///
/// * `input` - Load parameters
/// * `default_material` - Conductor used when the input does not name one
///
/// # Returns
///
/// * `Ok(CableSelectionResult)` - Smallest adequate cable
/// * `Err(CalcError::InvalidInput)` - Non-positive current or voltage, or a
///   non-finite power factor
/// * `Err(CalcError::NoSizeFound)` - The largest cable is still too small
pub fn calculate(input: &CableSelectionInput, default_material: ConductorMaterial) -> CalcResult<CableSelectionResult> {
    input.validate()?;

    let material = input.material.unwrap_or(default_material);
    let rating = ampacity::select_cable(material, input.current_a)
        .ok_or_else(|| CalcError::no_size_found(input.current_a, material))?;

    let load_kw: Kilowatts = single_phase_power(Volts(input.voltage_v), Amps(input.current_a), input.power_factor).into();

    debug!(
        current_a = input.current_a,
        %material,
        cable = rating.label,
        rating_a = rating.ampacity_a,
        "cable selected"
    );

    Ok(CableSelectionResult {
        cable: rating.label.to_string(),
        material,
        size_mm2: rating.size_mm2,
        rating_a: rating.ampacity_a,
        current_a: input.current_a,
        load_kw: load_kw.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(current_a: f64, material: Option<ConductorMaterial>) -> CableSelectionInput {
        CableSelectionInput {
            label: "Test".to_string(),
            current_a,
            voltage_v: 230.0,
            power_factor: 0.8,
            material,
        }
    }

    #[test]
    fn test_exact_boundary_selects_entry() {
        let result = calculate(&input(42.0, None), ConductorMaterial::Copper).unwrap();
        assert_eq!(result.cable, "10 mm²");
        assert_eq!(result.rating_a, 42.0);
    }

    #[test]
    fn test_just_above_boundary() {
        let result = calculate(&input(42.1, None), ConductorMaterial::Copper).unwrap();
        assert_eq!(result.cable, "16 mm²");
    }

    #[test]
    fn test_aluminium_table() {
        let result = calculate(&input(90.0, Some(ConductorMaterial::Aluminium)), ConductorMaterial::Copper).unwrap();
        assert_eq!(result.cable, "50 mm² Al");
        assert_eq!(result.material, ConductorMaterial::Aluminium);
        assert_eq!(result.rating_a, 95.0);
    }

    #[test]
    fn test_default_material_applies() {
        let result = calculate(&input(28.0, None), ConductorMaterial::Aluminium).unwrap();
        assert_eq!(result.cable, "6 mm² Al");
    }

    #[test]
    fn test_no_size_found() {
        let err = calculate(&input(331.0, None), ConductorMaterial::Copper).unwrap_err();
        assert_eq!(err, CalcError::no_size_found(331.0, ConductorMaterial::Copper));

        let err = calculate(&input(300.5, Some(ConductorMaterial::Aluminium)), ConductorMaterial::Copper).unwrap_err();
        assert_eq!(err.error_code(), "NO_SIZE_FOUND");
    }

    #[test]
    fn test_largest_entry_at_boundary() {
        let result = calculate(&input(330.0, None), ConductorMaterial::Copper).unwrap();
        assert_eq!(result.cable, "300 mm²");
    }

    #[test]
    fn test_load_kw() {
        let result = calculate(&input(20.0, None), ConductorMaterial::Copper).unwrap();
        // 20 × 230 × 0.8 / 1000 = 3.68 kW
        assert!((result.load_kw - 3.68).abs() < 1e-9);
        assert_eq!(result.spare_capacity_a(), 4.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(CableSelectionInput::from_text("abc", "230", "0.8", None).is_err());
        assert!(CableSelectionInput::from_text("20", "", "0.8", None).is_err());
        assert!(CableSelectionInput::from_text("20", "0", "0.8", None).is_err());
        assert!(CableSelectionInput::from_text("0", "230", "0.8", None).is_err());
        assert!(CableSelectionInput::from_text("20", "230", "pf", None).is_err());
        assert!(CableSelectionInput::from_text("20", "230", "1.0", None).is_ok());
    }

    #[test]
    fn test_power_factor_does_not_affect_selection() {
        for pf in ["1.2", "0", "-0.5"] {
            let input = CableSelectionInput::from_text("20", "230", pf, None).unwrap();
            let result = calculate(&input, ConductorMaterial::Copper).unwrap();
            assert_eq!(result.cable, "4.0 mm²");
        }
        let input = CableSelectionInput::from_text("20", "230", "1.2", None).unwrap();
        let result = calculate(&input, ConductorMaterial::Copper).unwrap();
        assert!((result.load_kw - 5.52).abs() < 1e-9);
    }

    #[test]
    fn test_nan_rejected() {
        let mut bad = input(20.0, None);
        bad.current_a = f64::NAN;
        assert!(calculate(&bad, ConductorMaterial::Copper).is_err());
    }
}
