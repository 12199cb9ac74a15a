//! # elec_core - Electrical Installation Calculation Engine
//!
//! `elec_core` provides the calculations an electrician works through on site:
//! derated current-carrying capacity, cable selection, voltage drop,
//! short-circuit withstand time, earth fault-loop impedance compliance and
//! verification test limits. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Versioned data**: Reference tables are compiled from
//!   `data/reference_tables.toml`, separate from the formulas
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use elec_core::calculations::zs::{ZsInput, calculate};
//! use elec_core::tables::NominalVoltage;
//!
//! let input = ZsInput::from_text(NominalVoltage::V230, "1600", "0.12")?;
//! let result = calculate(&input, NominalVoltage::V230)?;
//! assert!(result.compliant);
//! # Ok::<(), elec_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculation types
//! - [`equations`] - Formulas and the formula registry
//! - [`tables`] - Reference data (ratings, factors, constants)
//! - [`reference`] - Standards quick index and testing procedures
//! - [`settings`] - Runtime configuration
//! - [`file_io`] - Loading and atomically saving settings
//! - [`parse`] - Operator text to validated numbers
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod parse;
pub mod reference;
pub mod settings;
pub mod tables;
pub mod units;

mod generated {
    use crate::tables::{
        CableRating, ConductorMaterial, DeratingFactor, InsulationType, KConstant, Phase, VoltageDropRating,
    };

    include!(concat!(env!("OUT_DIR"), "/reference_data.rs"));
}

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_settings, save_settings};
pub use settings::{KeyPolicy, Settings};
