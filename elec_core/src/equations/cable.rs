//! # Cable Formulas
//!
//! Closed-form equations for sizing and checking low-voltage cables.
//!
//! ## Notation
//!
//! - `I₀` = Base current-carrying capacity
//! - `f₁, f₂, f₃` = Ambient, grouping and insulation derating factors
//! - `mV` = Voltage-drop constant (mV/A·m)
//! - `I` = Load or fault current
//! - `L` = Route length of the cable
//! - `k` = Conductor material constant
//! - `S` = Conductor cross-sectional area
//! - `U₀` = Nominal voltage to earth
//! - `Iₐ` = Current causing automatic disconnection
//!
//! ## References
//!
//! - AS/NZS 3008.1.1: Electrical installations - Selection of cables
//! - AS/NZS 3000: Wiring Rules, Section 5 (earth fault-loop impedance)

use crate::units::{Amps, Metres, Ohms, Seconds, SqMm, Volts};

// =============================================================================
// CURRENT-CARRYING CAPACITY
// =============================================================================

/// Derate a base rating by a sequence of multipliers.
///
/// # Formula
/// I_adj = I₀ × f₁ × f₂ × … (applied left to right)
///
/// # Example
/// ```rust
/// use elec_core::equations::cable::derated_current;
/// use elec_core::units::Amps;
///
/// let adjusted = derated_current(Amps(18.0), &[1.00, 0.80, 1.00]);
/// assert!((adjusted.0 - 14.4).abs() < 1e-12);
/// ```
#[inline]
pub fn derated_current(base: Amps, factors: &[f64]) -> Amps {
    factors.iter().fold(base, |current, factor| current * *factor)
}

// =============================================================================
// VOLTAGE DROP
// =============================================================================

/// Voltage drop from a tabulated mV/A·m constant.
///
/// # Formula
/// VD = (mV × I × L) / 1000
#[inline]
pub fn voltage_drop(mv_per_am: f64, current: Amps, length: Metres) -> Volts {
    Volts((mv_per_am * current.0 * length.0) / 1000.0)
}

/// Voltage drop as a percentage of the nominal supply voltage.
///
/// # Formula
/// VD% = VD / U × 100
#[inline]
pub fn voltage_drop_percent(drop: Volts, nominal: Volts) -> f64 {
    drop.0 / nominal.0 * 100.0
}

/// Three-phase voltage drop by the impedance method.
///
/// # Formula
/// VD = Zc × I × L × √3 / 1000
///
/// # Arguments
/// * `zc_ohm_per_km` - Cable impedance (Ω/km)
/// * `current` - Line current
/// * `length` - Route length
#[inline]
pub fn voltage_drop_impedance_method(zc_ohm_per_km: f64, current: Amps, length: Metres) -> Volts {
    Volts(zc_ohm_per_km * current.0 * length.0 * 3f64.sqrt() / 1000.0)
}

// =============================================================================
// SHORT-CIRCUIT WITHSTAND
// =============================================================================

/// Adiabatic short-circuit withstand time.
///
/// Assumes all heat stays in the conductor for a sustained bolted fault.
///
/// # Formula
/// t = (k² × S²) / I²
///
/// # Example
/// ```rust
/// use elec_core::equations::cable::adiabatic_withstand_time;
/// use elec_core::units::{Amps, SqMm};
///
/// let t = adiabatic_withstand_time(115.0, SqMm(4.0), Amps(500.0));
/// assert!((t.0 - 0.8464).abs() < 1e-9);
/// ```
#[inline]
pub fn adiabatic_withstand_time(k: f64, csa: SqMm, fault_current: Amps) -> Seconds {
    Seconds((k.powi(2) * csa.0.powi(2)) / fault_current.0.powi(2))
}

// =============================================================================
// EARTH FAULT-LOOP IMPEDANCE
// =============================================================================

/// Maximum earth fault-loop impedance for automatic disconnection.
///
/// # Formula
/// Zs_max = U₀ / Iₐ
#[inline]
pub fn max_loop_impedance(nominal: Volts, disconnection_current: Amps) -> Ohms {
    Ohms(nominal.0 / disconnection_current.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derated_current_no_factors() {
        assert_eq!(derated_current(Amps(31.0), &[]), Amps(31.0));
    }

    #[test]
    fn test_derated_current_order() {
        let expected = 24.0 * 0.91 * 0.70 * 0.75;
        assert_eq!(derated_current(Amps(24.0), &[0.91, 0.70, 0.75]).0, expected);
    }

    #[test]
    fn test_voltage_drop() {
        // 18.0 mV/A·m × 20 A × 25 m / 1000 = 9.0 V
        let vd = voltage_drop(18.0, Amps(20.0), Metres(25.0));
        assert!((vd.0 - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_voltage_drop_percent() {
        assert!((voltage_drop_percent(Volts(11.5), Volts(230.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_impedance_method() {
        // 1.0 Ω/km × 100 A × 100 m × √3 / 1000 = 17.32 V
        let vd = voltage_drop_impedance_method(1.0, Amps(100.0), Metres(100.0));
        assert!((vd.0 - 17.3205).abs() < 1e-3);
    }

    #[test]
    fn test_withstand_time() {
        let t = adiabatic_withstand_time(115.0, SqMm(4.0), Amps(500.0));
        assert!((t.0 - 0.8464).abs() < 1e-12);
    }

    #[test]
    fn test_max_loop_impedance() {
        let zs = max_loop_impedance(Volts(230.0), Amps(1600.0));
        assert_eq!(zs.0, 0.14375);
    }
}
