//! # Voltage Drop
//!
//! Voltage drop along a cable run from the tabulated mV/A·m constant:
//!
//! ```text
//! VD  = (mV/A·m × I × L) / 1000
//! VD% = VD / U × 100
//! ```
//!
//! The result is checked against the configured percentage limit
//! (AS/NZS 3000: 5 % of nominal voltage). Three-phase drops are taken
//! against the 415 V line voltage unless the request names another.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::cable::{voltage_drop, voltage_drop_percent};
use crate::errors::{CalcError, CalcResult};
use crate::parse::{ensure_non_negative, parse_number};
use crate::settings::Settings;
use crate::tables::{voltage_drop as vd_table, NominalVoltage, Phase};
use crate::units::{Amps, Metres};

/// Input parameters for a voltage-drop calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shed sub-circuit",
///   "cable": "2.5 mm² Cu 1ph",
///   "current_a": 20.0,
///   "length_m": 25.0,
///   "nominal_voltage": "230V"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageDropInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Cable and phase label from the voltage-drop table
    pub cable: String,

    /// Load current (A)
    pub current_a: f64,

    /// Route length (m)
    pub length_m: f64,

    /// Voltage the percentage is taken against. When absent, 415V is used for
    /// a three-phase cable and the configured default otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_voltage: Option<NominalVoltage>,
}

impl VoltageDropInput {
    /// Build an input from form text.
    pub fn from_text(cable: &str, current: &str, length: &str) -> CalcResult<Self> {
        let input = VoltageDropInput {
            label: String::new(),
            cable: cable.trim().to_string(),
            current_a: parse_number("current_a", current)?,
            length_m: parse_number("length_m", length)?,
            nominal_voltage: None,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("current_a", self.current_a)?;
        ensure_non_negative("length_m", self.length_m)?;
        Ok(())
    }
}

/// Results from a voltage-drop calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cable": "2.5 mm² Cu 1ph",
///   "phase": "single",
///   "mv_per_am": 18.0,
///   "drop_v": 9.0,
///   "nominal_voltage": "230V",
///   "drop_percent": 3.91,
///   "limit_percent": 5.0,
///   "within_limit": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageDropResult {
    /// Cable label
    pub cable: String,

    /// Phase arrangement of the tabulated constant
    pub phase: Phase,

    /// Voltage-drop constant used (mV/A·m)
    pub mv_per_am: f64,

    /// Voltage drop (V)
    pub drop_v: f64,

    /// Voltage the percentage is taken against
    pub nominal_voltage: NominalVoltage,

    /// Drop as a percentage of nominal voltage
    pub drop_percent: f64,

    /// Permitted maximum (%)
    pub limit_percent: f64,

    /// Whether `drop_percent` ≤ `limit_percent`
    pub within_limit: bool,
}

/// Calculate the voltage drop for a cable run.
///
/// # Returns
///
/// * `Ok(VoltageDropResult)` - Drop in volts and against the limit
/// * `Err(CalcError::InvalidInput)` - Unknown cable label, or negative or
///   non-finite current or length
pub fn calculate(input: &VoltageDropInput, settings: &Settings) -> CalcResult<VoltageDropResult> {
    input.validate()?;

    let rating = vd_table::lookup(&input.cable)
        .ok_or_else(|| CalcError::invalid_input("cable", input.cable.as_str(), "Unknown cable for voltage drop"))?;

    let drop = voltage_drop(rating.mv_per_am, Amps(input.current_a), Metres(input.length_m));

    // Three-phase constants give a line-to-line drop.
    let nominal_voltage = input.nominal_voltage.unwrap_or(match rating.phase {
        Phase::Single => settings.nominal_voltage,
        Phase::Three => NominalVoltage::V415,
    });
    let drop_percent = voltage_drop_percent(drop, nominal_voltage.volts());
    let limit_percent = settings.voltage_drop_limit_pct;

    debug!(
        cable = rating.label,
        mv_per_am = rating.mv_per_am,
        current_a = input.current_a,
        length_m = input.length_m,
        drop_v = drop.0,
        drop_percent,
        "voltage drop calculated"
    );

    Ok(VoltageDropResult {
        cable: rating.label.to_string(),
        phase: rating.phase,
        mv_per_am: rating.mv_per_am,
        drop_v: drop.0,
        nominal_voltage,
        drop_percent,
        limit_percent,
        within_limit: drop_percent <= limit_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(cable: &str, current_a: f64, length_m: f64) -> VoltageDropInput {
        VoltageDropInput {
            label: "Test".to_string(),
            cable: cable.to_string(),
            current_a,
            length_m,
            nominal_voltage: None,
        }
    }

    #[test]
    fn test_worked_example() {
        // (18.0 × 20 × 25) / 1000 = 9.0 V
        let result = calculate(&input("2.5 mm² Cu 1ph", 20.0, 25.0), &Settings::default()).unwrap();
        assert_eq!(result.mv_per_am, 18.0);
        assert!((result.drop_v - 9.0).abs() < 1e-12);
        assert_eq!(result.phase, Phase::Single);
        assert!((result.drop_percent - 9.0 / 230.0 * 100.0).abs() < 1e-12);
        assert!(result.within_limit);
    }

    #[test]
    fn test_exceeds_limit() {
        // 29.0 × 20 × 40 / 1000 = 23.2 V, 10.1 % of 230 V
        let result = calculate(&input("1.5 mm² Cu 1ph", 20.0, 40.0), &Settings::default()).unwrap();
        assert!((result.drop_v - 23.2).abs() < 1e-9);
        assert!(!result.within_limit);
    }

    #[test]
    fn test_three_phase_against_415() {
        let mut vd = input("10 mm² Cu 3ph", 50.0, 100.0);
        vd.nominal_voltage = Some(NominalVoltage::V415);
        let result = calculate(&vd, &Settings::default()).unwrap();
        // 3.0 × 50 × 100 / 1000 = 15 V, 3.6 % of 415 V
        assert!((result.drop_v - 15.0).abs() < 1e-12);
        assert_eq!(result.nominal_voltage, NominalVoltage::V415);
        assert!(result.within_limit);
    }

    #[test]
    fn test_three_phase_defaults_to_line_voltage() {
        // 3.0 × 50 × 100 / 1000 = 15 V, 3.6 % of 415 V (6.5 % of 230 V)
        let result = calculate(&input("10 mm² Cu 3ph", 50.0, 100.0), &Settings::default()).unwrap();
        assert_eq!(result.nominal_voltage, NominalVoltage::V415);
        assert!((result.drop_percent - 15.0 / 415.0 * 100.0).abs() < 1e-12);
        assert!(result.within_limit);

        let single = calculate(&input("10 mm² Cu 1ph", 50.0, 100.0), &Settings::default()).unwrap();
        assert_eq!(single.nominal_voltage, NominalVoltage::V230);
    }

    #[test]
    fn test_configured_limit() {
        let settings = Settings {
            voltage_drop_limit_pct: 3.0,
            ..Settings::default()
        };
        let result = calculate(&input("2.5 mm² Cu 1ph", 20.0, 25.0), &settings).unwrap();
        assert_eq!(result.limit_percent, 3.0);
        assert!(!result.within_limit);
    }

    #[test]
    fn test_zero_length() {
        let result = calculate(&input("4.0 mm² Cu 1ph", 20.0, 0.0), &Settings::default()).unwrap();
        assert_eq!(result.drop_v, 0.0);
    }

    #[test]
    fn test_unknown_cable() {
        let err = calculate(&input("1.5 mm² Cu 3ph", 20.0, 10.0), &Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_from_text() {
        let parsed = VoltageDropInput::from_text("2.5 mm² Cu 1ph", " 20 ", "25").unwrap();
        assert_eq!(parsed.current_a, 20.0);
        assert!(VoltageDropInput::from_text("2.5 mm² Cu 1ph", "twenty", "25").is_err());
        assert!(VoltageDropInput::from_text("2.5 mm² Cu 1ph", "20", "").is_err());
        assert!(VoltageDropInput::from_text("2.5 mm² Cu 1ph", "20", "-3").is_err());
    }
}
