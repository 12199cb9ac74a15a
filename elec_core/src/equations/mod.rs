//! # Electrical Equations
//!
//! Closed-form formulas used by the calculations, kept in one place so each
//! can be checked against its reference:
//!
//! - [`cable`] - Derating, voltage drop, short-circuit withstand, loop impedance
//! - [`circuit`] - Ohm's law, power, impedance, protective device sizing
//! - [`registry`] - Formula metadata with calculator keystrokes
//!
//! ## References
//!
//! - AS/NZS 3000: Electrical installations (Wiring Rules)
//! - AS/NZS 3008.1.1: Electrical installations - Selection of cables

pub mod cable;
pub mod circuit;
pub mod registry;

pub use cable::{
    adiabatic_withstand_time,
    derated_current,
    max_loop_impedance,
    voltage_drop,
    voltage_drop_impedance_method,
    voltage_drop_percent,
};

pub use circuit::{
    apparent_power,
    breaker_rating,
    impedance,
    ohms_law_current,
    ohms_law_resistance,
    ohms_law_voltage,
    power_factor,
    single_phase_power,
    three_phase_apparent_power,
    three_phase_power,
    BREAKER_SAFETY_FACTOR,
};

pub use registry::{
    Formula,
    FormulaCategory,
    FormulaMetadata,
    StandardReference,
    Variable,
    ALL_FORMULAS,
    generate_formulas_markdown,
};
