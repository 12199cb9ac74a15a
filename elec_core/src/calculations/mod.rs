//! # Electrical Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable), with `from_text` for
//!   raw form fields where the inputs are numeric
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ..) -> CalcResult<*Result>` - Pure calculation function
//!
//! Every calculation is stateless: the same input always gives the same
//! result, and calls never interact.
//!
//! ## Available Calculations
//!
//! - [`derating`] - Current-carrying capacity after derating
//! - [`cable_selection`] - Smallest cable for a load current
//! - [`voltage_drop`] - Voltage drop and the 5 % limit
//! - [`short_circuit`] - Adiabatic withstand time
//! - [`zs`] - Earth fault-loop impedance compliance
//! - [`circuit`] - Power, device sizing, impedance, Ohm's law
//! - [`verification`] - Test readings against acceptance limits

pub mod cable_selection;
pub mod circuit;
pub mod derating;
pub mod short_circuit;
pub mod verification;
pub mod voltage_drop;
pub mod zs;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::Settings;

// Re-export commonly used types
pub use cable_selection::{CableSelectionInput, CableSelectionResult};
pub use circuit::{CircuitInput, CircuitResult, OhmsLawInput, OhmsLawResult};
pub use derating::{DeratingInput, DeratingResult};
pub use short_circuit::{ShortCircuitInput, ShortCircuitResult};
pub use verification::{VerificationInput, VerificationResult};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};
pub use zs::{ZsInput, ZsResult};

/// Enum wrapper for all calculation requests.
///
/// Lets a caller hand over any calculation as one JSON document:
///
/// ```json
/// { "type": "ShortCircuit", "conductor": "Copper (PVC)", "csa_mm2": 4.0, "fault_current_a": 500.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Derated current-carrying capacity
    Derating(DeratingInput),
    /// Cable size selection
    CableSelection(CableSelectionInput),
    /// Voltage drop
    VoltageDrop(VoltageDropInput),
    /// Short-circuit withstand time
    ShortCircuit(ShortCircuitInput),
    /// Zs compliance check
    Zs(ZsInput),
    /// Load power and protective device sizing
    Circuit(CircuitInput),
    /// Ohm's law
    OhmsLaw(OhmsLawInput),
    /// Verification test readings
    Verification(VerificationInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Derating(c) => &c.label,
            CalculationItem::CableSelection(c) => &c.label,
            CalculationItem::VoltageDrop(c) => &c.label,
            CalculationItem::ShortCircuit(c) => &c.label,
            CalculationItem::Zs(c) => &c.label,
            CalculationItem::Circuit(c) => &c.label,
            CalculationItem::OhmsLaw(c) => &c.label,
            CalculationItem::Verification(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Derating(_) => "Derating",
            CalculationItem::CableSelection(_) => "CableSelection",
            CalculationItem::VoltageDrop(_) => "VoltageDrop",
            CalculationItem::ShortCircuit(_) => "ShortCircuit",
            CalculationItem::Zs(_) => "Zs",
            CalculationItem::Circuit(_) => "Circuit",
            CalculationItem::OhmsLaw(_) => "OhmsLaw",
            CalculationItem::Verification(_) => "Verification",
        }
    }

    /// Run the calculation with the given settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elec_core::calculations::{CalculationItem, CalculationOutput};
    /// use elec_core::settings::Settings;
    ///
    /// let json = r#"{"type":"Zs","disconnection_current_a":1600.0,"measured_zs_ohm":0.14375}"#;
    /// let item: CalculationItem = serde_json::from_str(json).unwrap();
    /// match item.evaluate(&Settings::default()).unwrap() {
    ///     CalculationOutput::Zs(result) => assert!(result.compliant),
    ///     other => panic!("unexpected output: {other:?}"),
    /// }
    /// ```
    pub fn evaluate(&self, settings: &Settings) -> CalcResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::Derating(input) => {
                CalculationOutput::Derating(derating::calculate(input, settings.key_policy)?)
            }
            CalculationItem::CableSelection(input) => {
                CalculationOutput::CableSelection(cable_selection::calculate(input, settings.conductor)?)
            }
            CalculationItem::VoltageDrop(input) => {
                CalculationOutput::VoltageDrop(voltage_drop::calculate(input, settings)?)
            }
            CalculationItem::ShortCircuit(input) => CalculationOutput::ShortCircuit(short_circuit::calculate(input)?),
            CalculationItem::Zs(input) => CalculationOutput::Zs(zs::calculate(input, settings.nominal_voltage)?),
            CalculationItem::Circuit(input) => CalculationOutput::Circuit(circuit::calculate(input)?),
            CalculationItem::OhmsLaw(input) => CalculationOutput::OhmsLaw(circuit::solve_ohms_law(input)?),
            CalculationItem::Verification(input) => {
                CalculationOutput::Verification(verification::calculate(input, settings.nominal_voltage)?)
            }
        })
    }
}

/// Result of any calculation, tagged like [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Derating(DeratingResult),
    CableSelection(CableSelectionResult),
    VoltageDrop(VoltageDropResult),
    ShortCircuit(ShortCircuitResult),
    Zs(ZsResult),
    Circuit(CircuitResult),
    OhmsLaw(OhmsLawResult),
    Verification(VerificationResult),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::tables::ConductorMaterial;

    #[test]
    fn test_item_serialization() {
        let item = CalculationItem::ShortCircuit(ShortCircuitInput {
            label: "SC-1".to_string(),
            conductor: "Copper (XLPE)".to_string(),
            csa_mm2: 6.0,
            fault_current_a: 1000.0,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"ShortCircuit\""));
        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, item);
        assert_eq!(roundtrip.label(), "SC-1");
        assert_eq!(roundtrip.calc_type(), "ShortCircuit");
    }

    #[test]
    fn test_settings_flow_through() {
        let item = CalculationItem::CableSelection(CableSelectionInput {
            label: String::new(),
            current_a: 60.0,
            voltage_v: 230.0,
            power_factor: 1.0,
            material: None,
        });
        let settings = Settings {
            conductor: ConductorMaterial::Aluminium,
            ..Settings::default()
        };
        match item.evaluate(&settings).unwrap() {
            CalculationOutput::CableSelection(result) => assert_eq!(result.cable, "25 mm² Al"),
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_key_policy_flows_through() {
        let item = CalculationItem::Derating(DeratingInput::new("2.5 mm² Cu", "60°C", "1 Circuit", "None"));
        assert!(item.evaluate(&Settings::default()).is_ok());
        assert!(matches!(
            item.evaluate(&Settings::strict()),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_output_tagged() {
        let item = CalculationItem::OhmsLaw(OhmsLawInput {
            voltage_v: Some(230.0),
            current_a: Some(10.0),
            ..Default::default()
        });
        let output = item.evaluate(&Settings::default()).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "OhmsLaw");
        assert_eq!(json["resistance_ohm"], 23.0);
    }
}
