//! # File I/O Module
//!
//! Loads and saves [`Settings`] files.
//!
//! - **Atomic saves**: write to `.tmp`, sync, then rename over the target so
//!   an interrupted save never leaves a truncated settings file.
//! - **Validation on load**: a file that parses but holds an invalid value is
//!   rejected, not silently corrected.
//!
//! ## Example
//!
//! ```rust,no_run
//! use elec_core::file_io::{load_settings, save_settings};
//! use elec_core::settings::Settings;
//! use std::path::Path;
//!
//! let path = Path::new("elecalc.toml");
//! save_settings(&Settings::strict(), path)?;
//! let settings = load_settings(path)?;
//! # Ok::<(), elec_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::settings::Settings;

/// Load settings from a TOML file.
///
/// # Returns
///
/// * `Ok(Settings)` - Parsed and validated settings
/// * `Err(CalcError::FileError)` - The file could not be read
/// * `Err(CalcError::SerializationError)` - The file is not valid settings TOML
/// * `Err(CalcError::InvalidInput)` - A value is out of range
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings = Settings::from_toml_str(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("Invalid settings in {}: {}", path.display(), reason),
        },
        other => other,
    })?;

    debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Save settings to a TOML file with atomic write semantics.
///
/// The save process:
/// 1. Serialize settings to TOML
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk
/// 4. Rename over the target
pub fn save_settings(settings: &Settings, path: &Path) -> CalcResult<()> {
    settings.validate()?;
    let text = settings.to_toml_string()?;

    let tmp_path = path.with_extension("toml.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::KeyPolicy;
    use crate::tables::NominalVoltage;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("elecalc_test_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");

        let settings = Settings {
            key_policy: KeyPolicy::Strict,
            voltage_drop_limit_pct: 3.0,
            nominal_voltage: NominalVoltage::V240,
            ..Settings::default()
        };
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_settings_path("atomic");
        let tmp_path = path.with_extension("toml.tmp");

        save_settings(&Settings::default(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(&temp_settings_path("missing")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_toml() {
        let path = temp_settings_path("invalid");
        fs::write(&path, "voltage_drop_limit_pct = \"lots\"").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.to_string().contains("Invalid settings in"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let path = temp_settings_path("reject");
        let settings = Settings {
            voltage_drop_limit_pct: 0.0,
            ..Settings::default()
        };
        assert!(save_settings(&settings, &path).is_err());
        assert!(!path.exists());
    }
}
