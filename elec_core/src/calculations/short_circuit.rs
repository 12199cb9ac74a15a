//! # Short-Circuit Withstand Time
//!
//! Adiabatic estimate of how long a conductor can carry a fault current:
//!
//! ```text
//! t = (k² × S²) / I²
//! ```
//!
//! Assumes a sustained bolted fault for the full duration with no heat lost
//! from the conductor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::cable::adiabatic_withstand_time;
use crate::errors::{CalcError, CalcResult};
use crate::parse::{ensure_positive, parse_number};
use crate::tables::{short_circuit, ConductorMaterial, InsulationType};
use crate::units::{Amps, Millis, Seconds, SqMm};

/// Input parameters for a withstand-time calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Submain",
///   "conductor": "Copper (PVC)",
///   "csa_mm2": 4.0,
///   "fault_current_a": 500.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortCircuitInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Conductor/insulation label from the k-constant table
    pub conductor: String,

    /// Conductor cross-sectional area S (mm²)
    pub csa_mm2: f64,

    /// Prospective fault current I (A)
    pub fault_current_a: f64,
}

impl ShortCircuitInput {
    /// Build an input from form text.
    pub fn from_text(conductor: &str, csa: &str, fault_current: &str) -> CalcResult<Self> {
        let input = ShortCircuitInput {
            label: String::new(),
            conductor: conductor.trim().to_string(),
            csa_mm2: parse_number("csa_mm2", csa)?,
            fault_current_a: parse_number("fault_current_a", fault_current)?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("csa_mm2", self.csa_mm2)?;
        ensure_positive("fault_current_a", self.fault_current_a)?;
        Ok(())
    }
}

/// Results from a withstand-time calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortCircuitResult {
    /// Conductor label
    pub conductor: String,

    /// Conductor material
    pub material: ConductorMaterial,

    /// Insulation type
    pub insulation: InsulationType,

    /// Material constant k
    pub k: f64,

    /// Withstand time (s)
    pub withstand_time_s: f64,
}

impl ShortCircuitResult {
    /// Whether the conductor survives until a protective device clears the
    /// fault after `clearance_s` seconds
    pub fn withstands(&self, clearance_s: f64) -> bool {
        self.withstand_time_s >= clearance_s
    }

    /// Withstand time in milliseconds
    pub fn withstand_time_ms(&self) -> f64 {
        Millis::from(Seconds(self.withstand_time_s)).0
    }
}

/// Calculate the adiabatic withstand time.
///
/// # Returns
///
/// * `Ok(ShortCircuitResult)` - Withstand time
/// * `Err(CalcError::InvalidInput)` - Unknown conductor label, or
///   non-positive cross-section or fault current
pub fn calculate(input: &ShortCircuitInput) -> CalcResult<ShortCircuitResult> {
    input.validate()?;

    let constant = short_circuit::lookup(&input.conductor)
        .ok_or_else(|| CalcError::invalid_input("conductor", input.conductor.as_str(), "Unknown conductor type"))?;

    let time = adiabatic_withstand_time(constant.k, SqMm(input.csa_mm2), Amps(input.fault_current_a));

    debug!(
        conductor = constant.label,
        k = constant.k,
        csa_mm2 = input.csa_mm2,
        fault_current_a = input.fault_current_a,
        withstand_time_s = time.0,
        "short-circuit withstand calculated"
    );

    Ok(ShortCircuitResult {
        conductor: constant.label.to_string(),
        material: constant.material,
        insulation: constant.insulation,
        k: constant.k,
        withstand_time_s: time.0,
    })
}
