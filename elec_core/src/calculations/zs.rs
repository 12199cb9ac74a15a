//! # Earth Fault-Loop Impedance (Zs) Check
//!
//! A circuit disconnects fast enough under earth fault when its measured
//! loop impedance does not exceed
//!
//! ```text
//! Zs_max = U₀ / Iₐ
//! ```
//!
//! The comparison is non-strict: a reading exactly at the limit complies.
//! Inputs that cannot be evaluated produce an error, never a default verdict.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::zs::{ZsInput, calculate};
//! use elec_core::tables::NominalVoltage;
//!
//! let input = ZsInput::from_text(NominalVoltage::V230, "1600", "0.14375").unwrap();
//! let result = calculate(&input, NominalVoltage::V230).unwrap();
//! assert_eq!(result.max_zs_ohm, 0.14375);
//! assert!(result.compliant);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::cable::max_loop_impedance;
use crate::errors::CalcResult;
use crate::parse::{ensure_non_negative, ensure_positive, parse_number};
use crate::tables::NominalVoltage;
use crate::units::Amps;

/// Input parameters for a Zs compliance check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "GPO circuit 3",
///   "nominal_voltage": "230V",
///   "disconnection_current_a": 1600.0,
///   "measured_zs_ohm": 0.12
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZsInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Nominal voltage U₀; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_voltage: Option<NominalVoltage>,

    /// Current causing automatic disconnection within the required time, Iₐ (A)
    pub disconnection_current_a: f64,

    /// Measured earth fault-loop impedance (Ω)
    pub measured_zs_ohm: f64,
}

impl ZsInput {
    /// Build an input from form text.
    pub fn from_text(nominal_voltage: NominalVoltage, disconnection_current: &str, measured_zs: &str) -> CalcResult<Self> {
        let input = ZsInput {
            label: String::new(),
            nominal_voltage: Some(nominal_voltage),
            disconnection_current_a: parse_number("disconnection_current_a", disconnection_current)?,
            measured_zs_ohm: parse_number("measured_zs_ohm", measured_zs)?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("disconnection_current_a", self.disconnection_current_a)?;
        ensure_non_negative("measured_zs_ohm", self.measured_zs_ohm)?;
        Ok(())
    }
}

/// Results from a Zs compliance check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "nominal_voltage": "230V",
///   "max_zs_ohm": 0.14375,
///   "measured_zs_ohm": 0.12,
///   "compliant": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZsResult {
    /// Nominal voltage used
    pub nominal_voltage: NominalVoltage,

    /// Maximum permissible loop impedance U₀ / Iₐ (Ω)
    pub max_zs_ohm: f64,

    /// Measured loop impedance (Ω)
    pub measured_zs_ohm: f64,

    /// Whether measured ≤ maximum
    pub compliant: bool,
}

impl ZsResult {
    /// Headroom below the limit (Ω); negative when non-compliant
    pub fn margin_ohm(&self) -> f64 {
        self.max_zs_ohm - self.measured_zs_ohm
    }
}

/// Check a measured loop impedance against its limit.
///
/// # Arguments
///
/// * `input` - Readings and disconnection current
/// * `default_voltage` - U₀ used when the input does not give one
///
/// # Returns
///
/// * `Ok(ZsResult)` - Limit and verdict
/// * `Err(CalcError::InvalidInput)` - Iₐ not positive, or Zs negative or
///   non-finite
pub fn calculate(input: &ZsInput, default_voltage: NominalVoltage) -> CalcResult<ZsResult> {
    input.validate()?;

    let nominal_voltage = input.nominal_voltage.unwrap_or(default_voltage);
    let max_zs = max_loop_impedance(nominal_voltage.volts(), Amps(input.disconnection_current_a));
    let compliant = input.measured_zs_ohm <= max_zs.0;

    debug!(
        %nominal_voltage,
        disconnection_current_a = input.disconnection_current_a,
        max_zs_ohm = max_zs.0,
        measured_zs_ohm = input.measured_zs_ohm,
        compliant,
        "zs checked"
    );

    Ok(ZsResult {
        nominal_voltage,
        max_zs_ohm: max_zs.0,
        measured_zs_ohm: input.measured_zs_ohm,
        compliant,
    })
}
