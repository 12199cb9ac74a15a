//! # Verification Test Results
//!
//! Checks recorded test readings against their acceptance limits:
//!
//! | Test                        | Passes when        |
//! |-----------------------------|--------------------|
//! | Insulation resistance       | ≥ 1 MΩ             |
//! | 30 mA RCD trip time         | ≤ 300 ms           |
//! | Earth electrode resistance  | < 25 Ω             |
//! | Polarity                    | correct            |
//! | Earth fault-loop impedance  | Zs ≤ U₀ / Iₐ       |
//!
//! Only the readings supplied are checked. The installation passes when every
//! supplied check passes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::zs::{self, ZsInput};
use crate::errors::{CalcError, CalcResult};
use crate::parse::ensure_non_negative;
use crate::tables::NominalVoltage;

/// Minimum insulation resistance (MΩ)
pub const MIN_INSULATION_RESISTANCE_MOHM: f64 = 1.0;

/// Maximum trip time for a 30 mA RCD (ms)
pub const MAX_RCD_TRIP_MS: f64 = 300.0;

/// Earth electrode resistance must be below this (Ω)
pub const MAX_EARTH_ELECTRODE_OHM: f64 = 25.0;

/// Recorded test readings. Every field is optional.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "12 Smith St",
///   "insulation_resistance_mohm": 200.0,
///   "rcd_trip_time_ms": 24.0,
///   "polarity_correct": true,
///   "zs": { "nominal_voltage": "230V", "disconnection_current_a": 160.0, "measured_zs_ohm": 0.9 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerificationInput {
    /// User label (site or circuit)
    #[serde(default)]
    pub label: String,

    /// Insulation resistance at 500 V DC (MΩ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation_resistance_mohm: Option<f64>,

    /// 30 mA RCD trip time (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rcd_trip_time_ms: Option<f64>,

    /// Earth electrode resistance (Ω)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earth_electrode_ohm: Option<f64>,

    /// Result of the polarity test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity_correct: Option<bool>,

    /// Earth fault-loop impedance reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zs: Option<ZsInput>,
}

impl VerificationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(value) = self.insulation_resistance_mohm {
            ensure_non_negative("insulation_resistance_mohm", value)?;
        }
        if let Some(value) = self.rcd_trip_time_ms {
            ensure_non_negative("rcd_trip_time_ms", value)?;
        }
        if let Some(value) = self.earth_electrode_ohm {
            ensure_non_negative("earth_electrode_ohm", value)?;
        }

        let supplied = self.insulation_resistance_mohm.is_some()
            || self.rcd_trip_time_ms.is_some()
            || self.earth_electrode_ohm.is_some()
            || self.polarity_correct.is_some()
            || self.zs.is_some();
        if !supplied {
            return Err(CalcError::invalid_input(
                "readings",
                "none",
                "At least one test reading is required",
            ));
        }
        Ok(())
    }
}

/// The individual verification tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    InsulationResistance,
    RcdTripTime,
    EarthElectrode,
    Polarity,
    LoopImpedance,
}

impl TestKind {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            TestKind::InsulationResistance => "Insulation Resistance",
            TestKind::RcdTripTime => "RCD Trip Time",
            TestKind::EarthElectrode => "Earth Electrode Resistance",
            TestKind::Polarity => "Polarity",
            TestKind::LoopImpedance => "Earth Fault-Loop Impedance",
        }
    }
}

/// Outcome of one test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Which test
    pub test: TestKind,
    /// Reading as recorded, with units
    pub reading: String,
    /// Acceptance criterion
    pub requirement: String,
    /// Whether the reading meets the requirement
    pub passed: bool,
}

/// Results of a verification check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// One entry per supplied reading
    pub checks: Vec<CheckOutcome>,
    /// True when every check passed
    pub passed: bool,
}

impl VerificationResult {
    /// Checks that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Evaluate recorded readings.
///
/// # Arguments
///
/// * `input` - Recorded readings
/// * `default_voltage` - U₀ for a Zs reading that does not give one
///
/// # Returns
///
/// * `Ok(VerificationResult)` - Per-test outcomes and overall verdict
/// * `Err(CalcError::InvalidInput)` - No readings, a negative reading, or an
///   invalid Zs request
pub fn calculate(input: &VerificationInput, default_voltage: NominalVoltage) -> CalcResult<VerificationResult> {
    input.validate()?;

    let mut checks = Vec::new();

    if let Some(mohm) = input.insulation_resistance_mohm {
        checks.push(CheckOutcome {
            test: TestKind::InsulationResistance,
            reading: format!("{mohm} MΩ"),
            requirement: format!("≥ {MIN_INSULATION_RESISTANCE_MOHM} MΩ"),
            passed: mohm >= MIN_INSULATION_RESISTANCE_MOHM,
        });
    }

    if let Some(ms) = input.rcd_trip_time_ms {
        checks.push(CheckOutcome {
            test: TestKind::RcdTripTime,
            reading: format!("{ms} ms"),
            requirement: format!("≤ {MAX_RCD_TRIP_MS} ms"),
            passed: ms <= MAX_RCD_TRIP_MS,
        });
    }

    if let Some(ohm) = input.earth_electrode_ohm {
        checks.push(CheckOutcome {
            test: TestKind::EarthElectrode,
            reading: format!("{ohm} Ω"),
            requirement: format!("< {MAX_EARTH_ELECTRODE_OHM} Ω"),
            passed: ohm < MAX_EARTH_ELECTRODE_OHM,
        });
    }

    if let Some(correct) = input.polarity_correct {
        checks.push(CheckOutcome {
            test: TestKind::Polarity,
            reading: if correct { "correct" } else { "incorrect" }.to_string(),
            requirement: "correct".to_string(),
            passed: correct,
        });
    }

    if let Some(zs_input) = &input.zs {
        let zs = zs::calculate(zs_input, default_voltage)?;
        checks.push(CheckOutcome {
            test: TestKind::LoopImpedance,
            reading: format!("{} Ω", zs.measured_zs_ohm),
            requirement: format!("≤ {} Ω", zs.max_zs_ohm),
            passed: zs.compliant,
        });
    }

    let passed = checks.iter().all(|c| c.passed);
    debug!(label = %input.label, checks = checks.len(), passed, "verification evaluated");

    Ok(VerificationResult { checks, passed })
}
