//! # Settings
//!
//! Runtime configuration shared by every calculation. Stored on disk as TOML
//! (see [`crate::file_io`]); every field has a default so a partial or empty
//! file is valid.
//!
//! ```toml
//! key_policy = "strict"
//! voltage_drop_limit_pct = 5.0
//! nominal_voltage = "230V"
//! conductor = "copper"
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::parse::ensure_positive;
use crate::tables::{ConductorMaterial, NominalVoltage};

/// Voltage-drop limit from AS/NZS 3000 (% of nominal voltage)
pub const DEFAULT_VOLTAGE_DROP_LIMIT_PCT: f64 = 5.0;

/// How unrecognized derating labels are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Substitute a neutral factor of 1.0 and report the substitution
    #[default]
    Lenient,
    /// Reject the label as invalid input
    Strict,
}

/// Calculation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Handling of unknown derating category labels
    pub key_policy: KeyPolicy,

    /// Maximum permitted voltage drop (% of nominal voltage)
    pub voltage_drop_limit_pct: f64,

    /// Nominal voltage used when a request does not give one
    pub nominal_voltage: NominalVoltage,

    /// Conductor material used when a request does not give one
    pub conductor: ConductorMaterial,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            key_policy: KeyPolicy::Lenient,
            voltage_drop_limit_pct: DEFAULT_VOLTAGE_DROP_LIMIT_PCT,
            nominal_voltage: NominalVoltage::V230,
            conductor: ConductorMaterial::Copper,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let settings: Settings = toml::from_str(text).map_err(|e| CalcError::serialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("voltage_drop_limit_pct", self.voltage_drop_limit_pct)?;
        Ok(())
    }

    /// Settings with the strict key policy, otherwise defaults
    pub fn strict() -> Self {
        Settings {
            key_policy: KeyPolicy::Strict,
            ..Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.key_policy, KeyPolicy::Lenient);
        assert_eq!(settings.voltage_drop_limit_pct, 5.0);
        assert_eq!(settings.nominal_voltage, NominalVoltage::V230);
        assert_eq!(settings.conductor, ConductorMaterial::Copper);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml_str("key_policy = \"strict\"\nnominal_voltage = \"415V\"\n").unwrap();
        assert_eq!(settings.key_policy, KeyPolicy::Strict);
        assert_eq!(settings.nominal_voltage, NominalVoltage::V415);
        assert_eq!(settings.voltage_drop_limit_pct, 5.0);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml_str("key_policy = \"sometimes\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = Settings::from_toml_str("voltage_drop_limit_pct = -1.0").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = Settings {
            conductor: ConductorMaterial::Aluminium,
            ..Settings::strict()
        };
        let text = settings.to_toml_string().unwrap();
        assert!(text.contains("conductor = \"aluminium\""));
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }
}
