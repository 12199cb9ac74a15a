//! # Circuit Calculations
//!
//! Everyday circuit figures worked on a scientific calculator in the field:
//!
//! - [`calculate`] - load power, apparent power, protective device size and
//!   (optionally) impedance for a single- or three-phase load
//! - [`solve_ohms_law`] - the missing one of V, I and R

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::circuit::{
    apparent_power, breaker_rating, impedance, ohms_law_current, ohms_law_resistance, ohms_law_voltage,
    power_factor, single_phase_power, three_phase_apparent_power, three_phase_power,
};
use crate::errors::{CalcError, CalcResult};
use crate::parse::{ensure_non_negative, ensure_positive};
use crate::tables::Phase;
use crate::units::{Amps, Kilowatts, Ohms, Volts};

/// Input parameters for a circuit calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Workshop 3ph",
///   "phase": "three",
///   "voltage_v": 415.0,
///   "current_a": 20.0,
///   "power_factor": 0.9
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Supply arrangement
    #[serde(default)]
    pub phase: Phase,

    /// Supply voltage, line voltage for three phase (V)
    pub voltage_v: f64,

    /// Load current (A)
    pub current_a: f64,

    /// Load power factor, 0 < PF ≤ 1
    pub power_factor: f64,

    /// Circuit resistance, for an impedance figure (Ω)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance_ohm: Option<f64>,

    /// Circuit reactance, for an impedance figure (Ω)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactance_ohm: Option<f64>,
}

impl CircuitInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("voltage_v", self.voltage_v)?;
        ensure_positive("current_a", self.current_a)?;
        ensure_positive("power_factor", self.power_factor)?;
        if self.power_factor > 1.0 {
            return Err(CalcError::invalid_input(
                "power_factor",
                self.power_factor.to_string(),
                "Power factor cannot exceed 1.0",
            ));
        }
        if let Some(r) = self.resistance_ohm {
            ensure_non_negative("resistance_ohm", r)?;
        }
        if let Some(x) = self.reactance_ohm {
            ensure_non_negative("reactance_ohm", x)?;
        }
        Ok(())
    }
}

/// Results from a circuit calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitResult {
    /// Supply arrangement
    pub phase: Phase,

    /// Real power (kW)
    pub real_power_kw: f64,

    /// Apparent power (kVA)
    pub apparent_power_kva: f64,

    /// Power factor recovered from kW / kVA
    pub power_factor: f64,

    /// Minimum protective device rating I × 1.25 (A)
    pub breaker_min_a: f64,

    /// √(R² + X²) when a resistance or reactance was given (Ω)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impedance_ohm: Option<f64>,
}

/// Calculate power, device size and impedance for a load.
pub fn calculate(input: &CircuitInput) -> CalcResult<CircuitResult> {
    input.validate()?;

    let voltage = Volts(input.voltage_v);
    let current = Amps(input.current_a);

    let (real, apparent) = match input.phase {
        Phase::Single => (
            single_phase_power(voltage, current, input.power_factor),
            apparent_power(voltage, current),
        ),
        Phase::Three => (
            three_phase_power(voltage, current, input.power_factor),
            three_phase_apparent_power(voltage, current),
        ),
    };

    let real_power_kw = Kilowatts::from(real).0;
    let apparent_power_kva = apparent.0 / 1000.0;

    let impedance_ohm = match (input.resistance_ohm, input.reactance_ohm) {
        (None, None) => None,
        (r, x) => Some(impedance(Ohms(r.unwrap_or(0.0)), Ohms(x.unwrap_or(0.0))).0),
    };

    let result = CircuitResult {
        phase: input.phase,
        real_power_kw,
        apparent_power_kva,
        power_factor: power_factor(Kilowatts(real_power_kw), apparent_power_kva),
        breaker_min_a: breaker_rating(current).0,
        impedance_ohm,
    };

    debug!(?result, "circuit calculated");
    Ok(result)
}

/// Two known quantities of Ohm's law; the third is solved for.
///
/// ## JSON Example
///
/// ```json
/// { "voltage_v": 230.0, "resistance_ohm": 23.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OhmsLawInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Voltage (V)
    #[serde(default)]
    pub voltage_v: Option<f64>,

    /// Current (A)
    #[serde(default)]
    pub current_a: Option<f64>,

    /// Resistance (Ω)
    #[serde(default)]
    pub resistance_ohm: Option<f64>,
}

/// All three quantities after solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawResult {
    /// Voltage (V)
    pub voltage_v: f64,
    /// Current (A)
    pub current_a: f64,
    /// Resistance (Ω)
    pub resistance_ohm: f64,
}

/// Solve V = I × R for whichever quantity is missing.
///
/// Exactly two of the three must be given. A divisor must be greater than
/// zero; the other known value must be zero or greater.
///
/// # Example
///
/// ```rust
/// use elec_core::calculations::circuit::{OhmsLawInput, solve_ohms_law};
///
/// let input = OhmsLawInput { voltage_v: Some(230.0), resistance_ohm: Some(23.0), ..Default::default() };
/// assert_eq!(solve_ohms_law(&input).unwrap().current_a, 10.0);
/// ```
pub fn solve_ohms_law(input: &OhmsLawInput) -> CalcResult<OhmsLawResult> {
    let result = match (input.voltage_v, input.current_a, input.resistance_ohm) {
        (None, Some(i), Some(r)) => {
            let i = ensure_non_negative("current_a", i)?;
            let r = ensure_non_negative("resistance_ohm", r)?;
            OhmsLawResult {
                voltage_v: ohms_law_voltage(Amps(i), Ohms(r)).0,
                current_a: i,
                resistance_ohm: r,
            }
        }
        (Some(v), None, Some(r)) => {
            let v = ensure_non_negative("voltage_v", v)?;
            let r = ensure_positive("resistance_ohm", r)?;
            OhmsLawResult {
                voltage_v: v,
                current_a: ohms_law_current(Volts(v), Ohms(r)).0,
                resistance_ohm: r,
            }
        }
        (Some(v), Some(i), None) => {
            let v = ensure_non_negative("voltage_v", v)?;
            let i = ensure_positive("current_a", i)?;
            OhmsLawResult {
                voltage_v: v,
                current_a: i,
                resistance_ohm: ohms_law_resistance(Volts(v), Amps(i)).0,
            }
        }
        _ => {
            let given = [input.voltage_v, input.current_a, input.resistance_ohm]
                .iter()
                .filter(|v| v.is_some())
                .count();
            return Err(CalcError::invalid_input(
                "ohms_law",
                format!("{given} values given"),
                "Give exactly two of voltage, current and resistance",
            ));
        }
    };

    debug!(?result, "ohm's law solved");
    Ok(result)
}
