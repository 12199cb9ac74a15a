//! # Circuit Formulas
//!
//! Ohm's law, power and impedance relations used for everyday circuit
//! checks. All functions take and return unit newtypes.
//!
//! ## Notation
//!
//! - `V` = Voltage (line voltage for three-phase)
//! - `I` = Current
//! - `R` = Resistance, `X` = Reactance, `Z` = Impedance
//! - `PF` = Power factor (cos φ)
//! - `P` = Real power, `S` = Apparent power

use crate::units::{Amps, Kilowatts, Ohms, VoltAmps, Volts, Watts};

/// Multiplier applied to load current when sizing a protective device
pub const BREAKER_SAFETY_FACTOR: f64 = 1.25;

// =============================================================================
// OHM'S LAW
// =============================================================================

/// V = I × R
#[inline]
pub fn ohms_law_voltage(current: Amps, resistance: Ohms) -> Volts {
    Volts(current.0 * resistance.0)
}

/// I = V / R
#[inline]
pub fn ohms_law_current(voltage: Volts, resistance: Ohms) -> Amps {
    Amps(voltage.0 / resistance.0)
}

/// R = V / I
#[inline]
pub fn ohms_law_resistance(voltage: Volts, current: Amps) -> Ohms {
    Ohms(voltage.0 / current.0)
}

// =============================================================================
// POWER
// =============================================================================

/// Single-phase real power, P = V × I × PF
#[inline]
pub fn single_phase_power(voltage: Volts, current: Amps, power_factor: f64) -> Watts {
    Watts(voltage.0 * current.0 * power_factor)
}

/// Three-phase real power (maximum demand), P = √3 × V × I × PF
#[inline]
pub fn three_phase_power(line_voltage: Volts, current: Amps, power_factor: f64) -> Watts {
    Watts(3f64.sqrt() * line_voltage.0 * current.0 * power_factor)
}

/// Single-phase apparent power, S = V × I
#[inline]
pub fn apparent_power(voltage: Volts, current: Amps) -> VoltAmps {
    VoltAmps(voltage.0 * current.0)
}

/// Three-phase apparent power, S = √3 × V × I
#[inline]
pub fn three_phase_apparent_power(line_voltage: Volts, current: Amps) -> VoltAmps {
    VoltAmps(3f64.sqrt() * line_voltage.0 * current.0)
}

/// PF = P / S
#[inline]
pub fn power_factor(real: Kilowatts, apparent_kva: f64) -> f64 {
    real.0 / apparent_kva
}

// =============================================================================
// IMPEDANCE AND PROTECTION
// =============================================================================

/// Z = √(R² + X²)
#[inline]
pub fn impedance(resistance: Ohms, reactance: Ohms) -> Ohms {
    Ohms(resistance.0.hypot(reactance.0))
}

/// Minimum protective device rating, I × 1.25
#[inline]
pub fn breaker_rating(load_current: Amps) -> Amps {
    load_current * BREAKER_SAFETY_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ohms_law() {
        assert_eq!(ohms_law_voltage(Amps(2.0), Ohms(115.0)), Volts(230.0));
        assert_eq!(ohms_law_current(Volts(230.0), Ohms(23.0)), Amps(10.0));
        assert_eq!(ohms_law_resistance(Volts(240.0), Amps(8.0)), Ohms(30.0));
    }

    #[test]
    fn test_power() {
        assert!((single_phase_power(Volts(230.0), Amps(10.0), 0.8).0 - 1840.0).abs() < 1e-9);
        // √3 × 415 × 20 × 0.9 ≈ 12,938.42 W
        assert!((three_phase_power(Volts(415.0), Amps(20.0), 0.9).0 - 12938.42).abs() < 0.01);
        assert_eq!(apparent_power(Volts(230.0), Amps(10.0)), VoltAmps(2300.0));
    }

    #[test]
    fn test_power_factor() {
        assert!((power_factor(Kilowatts(8.0), 10.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_impedance() {
        assert!((impedance(Ohms(3.0), Ohms(4.0)).0 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_breaker_rating() {
        assert_eq!(breaker_rating(Amps(16.0)), Amps(20.0));
    }
}
