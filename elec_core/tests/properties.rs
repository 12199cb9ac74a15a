//! Property-based tests for the calculations using proptest.
//!
//! Covers: derating products, cable selection order, voltage-drop linearity,
//! withstand-time scaling, Zs limit inclusivity, text-input rejection.

use elec_core::calculations::cable_selection::{self, CableSelectionInput};
use elec_core::calculations::derating::{self, DeratingInput};
use elec_core::calculations::short_circuit::{self, ShortCircuitInput};
use elec_core::calculations::voltage_drop::{self, VoltageDropInput};
use elec_core::calculations::zs::{self, ZsInput};
use elec_core::settings::{KeyPolicy, Settings};
use elec_core::tables::{ampacity, short_circuit as k_table, voltage_drop as vd_table};
use elec_core::tables::{ConductorMaterial, DeratingCategory, NominalVoltage};
use proptest::prelude::*;
use proptest::sample::select;

fn labels(category: DeratingCategory) -> Vec<&'static str> {
    category.table().iter().map(|row| row.label).collect()
}

fn cable_labels() -> Vec<&'static str> {
    ampacity::ccc_cables().iter().map(|row| row.label).collect()
}

fn vd_labels() -> Vec<&'static str> {
    vd_table::ratings().iter().map(|row| row.label).collect()
}

fn k_labels() -> Vec<&'static str> {
    k_table::constants().iter().map(|row| row.label).collect()
}

fn material() -> impl Strategy<Value = ConductorMaterial> {
    select(ConductorMaterial::ALL.to_vec())
}

fn vd_input(cable: &str, current_a: f64, length_m: f64) -> VoltageDropInput {
    VoltageDropInput {
        label: String::new(),
        cable: cable.to_string(),
        current_a,
        length_m,
        nominal_voltage: None,
    }
}

fn sc_input(conductor: &str, csa_mm2: f64, fault_current_a: f64) -> ShortCircuitInput {
    ShortCircuitInput {
        label: String::new(),
        conductor: conductor.to_string(),
        csa_mm2,
        fault_current_a,
    }
}

// ── Derating ─────────────────────────────────────────────────────────

proptest! {
    /// Every table combination yields exactly I₀ · f₁ · f₂ · f₃.
    #[test]
    fn derating_is_exact_product(
        cable in select(cable_labels()),
        ambient in select(labels(DeratingCategory::Ambient)),
        grouping in select(labels(DeratingCategory::Grouping)),
        insulation in select(labels(DeratingCategory::Insulation)),
    ) {
        let input = DeratingInput::new(cable, ambient, grouping, insulation);
        let result = derating::calculate(&input, KeyPolicy::Strict).unwrap();

        let base = ampacity::ccc_cable(cable).unwrap().ampacity_a;
        let f1 = DeratingCategory::Ambient.lookup(ambient).unwrap();
        let f2 = DeratingCategory::Grouping.lookup(grouping).unwrap();
        let f3 = DeratingCategory::Insulation.lookup(insulation).unwrap();

        prop_assert_eq!(result.adjusted_current_a, base * f1 * f2 * f3);
        prop_assert!(result.fallbacks.is_empty());
    }

    /// Under the lenient policy an unknown label behaves like a factor of 1.0.
    #[test]
    fn unknown_label_is_neutral(
        cable in select(cable_labels()),
        grouping in select(labels(DeratingCategory::Grouping)),
        bogus in "[a-z]{3,10}",
    ) {
        let unknown = DeratingInput::new(cable, bogus.as_str(), grouping, "None");
        let neutral = DeratingInput::new(cable, "30°C", grouping, "None");

        let a = derating::calculate(&unknown, KeyPolicy::Lenient).unwrap();
        let b = derating::calculate(&neutral, KeyPolicy::Lenient).unwrap();
        prop_assert_eq!(a.adjusted_current_a, b.adjusted_current_a);
        prop_assert_eq!(a.fallbacks, vec![DeratingCategory::Ambient]);
        prop_assert!(derating::calculate(&unknown, KeyPolicy::Strict).is_err());
    }
}

// ── Cable Selection ──────────────────────────────────────────────────

proptest! {
    /// A larger load never gets a smaller-rated cable.
    #[test]
    fn selection_is_monotonic(material in material(), a in 0.1f64..300.0, b in 0.1f64..300.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let small = ampacity::select_cable(material, lo).unwrap();
        let large = ampacity::select_cable(material, hi).unwrap();
        prop_assert!(small.ampacity_a <= large.ampacity_a);
    }

    /// The selected cable is the first adequate entry.
    #[test]
    fn selection_is_smallest_adequate(material in material(), current in 0.1f64..330.0) {
        let input = CableSelectionInput {
            label: String::new(),
            current_a: current,
            voltage_v: 230.0,
            power_factor: 1.0,
            material: Some(material),
        };
        match cable_selection::calculate(&input, ConductorMaterial::Copper) {
            Ok(result) => {
                prop_assert!(result.rating_a >= current);
                let table = ampacity::selection_table(material);
                let position = table.iter().position(|r| r.label == result.cable).unwrap();
                if position > 0 {
                    prop_assert!(table[position - 1].ampacity_a < current);
                }
            }
            Err(err) => {
                let largest = ampacity::selection_table(material).last().unwrap().ampacity_a;
                prop_assert!(current > largest);
                prop_assert_eq!(err.error_code(), "NO_SIZE_FOUND");
            }
        }
    }

    /// Every tabulated rating selects its own entry.
    #[test]
    fn selection_boundary_selects_entry(
        (material, index) in material().prop_flat_map(|m| {
            (Just(m), 0..ampacity::selection_table(m).len())
        }),
    ) {
        let row = &ampacity::selection_table(material)[index];
        let chosen = ampacity::select_cable(material, row.ampacity_a).unwrap();
        prop_assert_eq!(chosen.label, row.label);
    }
}

// ── Voltage Drop ─────────────────────────────────────────────────────

proptest! {
    /// Doubling current or length doubles the drop.
    #[test]
    fn voltage_drop_is_linear(
        cable in select(vd_labels()),
        current in 0.0f64..200.0,
        length in 0.0f64..500.0,
    ) {
        let settings = Settings::default();
        let base = voltage_drop::calculate(&vd_input(cable, current, length), &settings).unwrap();
        let double_i = voltage_drop::calculate(&vd_input(cable, 2.0 * current, length), &settings).unwrap();
        let double_l = voltage_drop::calculate(&vd_input(cable, current, 2.0 * length), &settings).unwrap();

        let tolerance = 1e-9 * base.drop_v.max(1.0);
        prop_assert!((double_i.drop_v - 2.0 * base.drop_v).abs() <= tolerance);
        prop_assert!((double_l.drop_v - 2.0 * base.drop_v).abs() <= tolerance);
    }

    /// The limit verdict agrees with the reported percentage.
    #[test]
    fn voltage_drop_limit_consistent(cable in select(vd_labels()), current in 0.0f64..100.0, length in 0.0f64..200.0) {
        let result = voltage_drop::calculate(&vd_input(cable, current, length), &Settings::default()).unwrap();
        prop_assert_eq!(result.within_limit, result.drop_percent <= 5.0);
    }
}

// ── Short Circuit ────────────────────────────────────────────────────

proptest! {
    /// Doubling the fault current quarters the withstand time.
    #[test]
    fn withstand_is_inverse_square(
        conductor in select(k_labels()),
        csa in 1.0f64..300.0,
        current in 10.0f64..50_000.0,
    ) {
        let t1 = short_circuit::calculate(&sc_input(conductor, csa, current)).unwrap().withstand_time_s;
        let t2 = short_circuit::calculate(&sc_input(conductor, csa, 2.0 * current)).unwrap().withstand_time_s;
        prop_assert!((t1 / t2 - 4.0).abs() < 1e-9);
    }

    /// Doubling the cross-section quadruples the withstand time.
    #[test]
    fn withstand_grows_with_csa_squared(
        conductor in select(k_labels()),
        csa in 1.0f64..150.0,
        current in 10.0f64..50_000.0,
    ) {
        let t1 = short_circuit::calculate(&sc_input(conductor, csa, current)).unwrap().withstand_time_s;
        let t2 = short_circuit::calculate(&sc_input(conductor, 2.0 * csa, current)).unwrap().withstand_time_s;
        prop_assert!((t2 / t1 - 4.0).abs() < 1e-9);
    }
}

// ── Zs ───────────────────────────────────────────────────────────────

proptest! {
    /// A reading exactly at U₀ / Iₐ complies; anything above does not.
    #[test]
    fn zs_limit_is_inclusive(
        voltage in select(NominalVoltage::ALL.to_vec()),
        ia in 1.0f64..10_000.0,
    ) {
        let limit = voltage.volts().0 / ia;
        let at_limit = ZsInput {
            label: String::new(),
            nominal_voltage: Some(voltage),
            disconnection_current_a: ia,
            measured_zs_ohm: limit,
        };
        let result = zs::calculate(&at_limit, NominalVoltage::V230).unwrap();
        prop_assert!(result.compliant);

        let above = ZsInput { measured_zs_ohm: limit * (1.0 + 1e-9), ..at_limit };
        prop_assert!(!zs::calculate(&above, NominalVoltage::V230).unwrap().compliant);
    }
}

// ── Text Inputs ──────────────────────────────────────────────────────

proptest! {
    /// Non-numeric text is always InvalidInput, never a panic or a number.
    #[test]
    fn non_numeric_text_rejected(text in "[a-zA-Z ]{0,12}") {
        let errors = [
            CableSelectionInput::from_text(&text, "230", "0.8", None).err(),
            VoltageDropInput::from_text("2.5 mm² Cu 1ph", &text, "10").err(),
            ShortCircuitInput::from_text("Copper (PVC)", "4", &text).err(),
            ZsInput::from_text(NominalVoltage::V230, &text, "0.1").err(),
            DeratingInput::from_text("2.5 mm² Cu", &text, "30°C", "1 Circuit", "None").err(),
        ];

        for (i, err) in errors.into_iter().enumerate() {
            // A blank base current falls back to the tabulated rating.
            if i == 4 && text.trim().is_empty() {
                prop_assert!(err.is_none());
                continue;
            }
            let err = err.expect("non-numeric text must be rejected");
            prop_assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }
}
