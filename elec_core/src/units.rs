//! # Unit Types
//!
//! Type-safe wrappers for electrical quantities. They keep formula arguments
//! from being swapped (a current where a length belongs) while serializing
//! as plain numbers.
//!
//! ## SI Units
//!
//! - Current: amperes (A)
//! - Potential: volts (V)
//! - Impedance / resistance: ohms (Ω)
//! - Length: metres (m)
//! - Conductor cross-section: square millimetres (mm²)
//! - Time: seconds (s), milliseconds (ms)
//! - Power: watts (W), kilowatts (kW), volt-amperes (VA)
//!
//! ## Example
//!
//! ```rust
//! use elec_core::units::{Kilowatts, Watts};
//!
//! let load = Watts(4600.0);
//! let load_kw: Kilowatts = load.into();
//! assert_eq!(load_kw.0, 4.6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Circuit Quantities
// ============================================================================

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

/// Potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Impedance or resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

// ============================================================================
// Cable Geometry
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Conductor cross-sectional area in mm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

// ============================================================================
// Time
// ============================================================================

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millis(pub f64);

impl From<Seconds> for Millis {
    fn from(s: Seconds) -> Self {
        Millis(s.0 * 1000.0)
    }
}

impl From<Millis> for Seconds {
    fn from(ms: Millis) -> Self {
        Seconds(ms.0 / 1000.0)
    }
}

// ============================================================================
// Power
// ============================================================================

/// Real power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Real power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

/// Apparent power in volt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoltAmps(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}

impl From<Kilowatts> for Watts {
    fn from(kw: Kilowatts) -> Self {
        Watts(kw.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Amps);
impl_arithmetic!(Volts);
impl_arithmetic!(Ohms);
impl_arithmetic!(Metres);
impl_arithmetic!(SqMm);
impl_arithmetic!(Seconds);
impl_arithmetic!(Millis);
impl_arithmetic!(Watts);
impl_arithmetic!(Kilowatts);
impl_arithmetic!(VoltAmps);
