//! Nominal supply voltages (U₀) used in earth-fault-loop checks.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Volts;

/// Standard nominal supply voltage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NominalVoltage {
    /// 230 V single phase
    #[default]
    #[serde(rename = "230V")]
    V230,
    /// 240 V single phase
    #[serde(rename = "240V")]
    V240,
    /// 415 V three phase
    #[serde(rename = "415V")]
    V415,
}

impl NominalVoltage {
    /// All nominal voltages for UI selection
    pub const ALL: [NominalVoltage; 3] = [NominalVoltage::V230, NominalVoltage::V240, NominalVoltage::V415];

    /// Voltage value
    pub fn volts(&self) -> Volts {
        match self {
            NominalVoltage::V230 => Volts(230.0),
            NominalVoltage::V240 => Volts(240.0),
            NominalVoltage::V415 => Volts(415.0),
        }
    }

    /// Picker label (e.g., "230V")
    pub fn label(&self) -> &'static str {
        match self {
            NominalVoltage::V230 => "230V",
            NominalVoltage::V240 => "240V",
            NominalVoltage::V415 => "415V",
        }
    }

    /// Parse "230V", "230 V" or "230"
    pub fn from_label(s: &str) -> CalcResult<Self> {
        let digits = s.trim().trim_end_matches(['V', 'v']).trim();
        match digits {
            "230" => Ok(NominalVoltage::V230),
            "240" => Ok(NominalVoltage::V240),
            "415" => Ok(NominalVoltage::V415),
            _ => Err(CalcError::invalid_input(
                "nominal_voltage",
                s,
                "Expected one of 230V, 240V, 415V",
            )),
        }
    }
}

impl std::fmt::Display for NominalVoltage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
