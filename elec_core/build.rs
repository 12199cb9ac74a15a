//! Compiles `data/reference_tables.toml` into static Rust slices.
//!
//! The generated file is included by `src/lib.rs` as the `generated` module.
//! Table rows are emitted as struct literals of the types in `src/tables/`,
//! so a malformed data file fails the build instead of a lookup at runtime.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Deserialize;

const DATA_FILE: &str = "data/reference_tables.toml";

#[derive(Deserialize)]
struct ReferenceData {
    meta: Meta,
    ccc_cable: Vec<CableRow>,
    selection_copper: Vec<CableRow>,
    selection_aluminium: Vec<CableRow>,
    ambient: Vec<FactorRow>,
    grouping: Vec<FactorRow>,
    insulation: Vec<FactorRow>,
    voltage_drop: Vec<VoltageDropRow>,
    k_constant: Vec<KRow>,
}

#[derive(Deserialize)]
struct Meta {
    standard: String,
    revision: u32,
}

#[derive(Deserialize)]
struct CableRow {
    label: String,
    material: String,
    size_mm2: f64,
    ampacity_a: f64,
}

#[derive(Deserialize)]
struct FactorRow {
    label: String,
    factor: f64,
}

#[derive(Deserialize)]
struct VoltageDropRow {
    label: String,
    size_mm2: f64,
    phases: u8,
    mv_per_am: f64,
}

#[derive(Deserialize)]
struct KRow {
    label: String,
    material: String,
    insulation: String,
    k: f64,
}

fn material_path(material: &str) -> &'static str {
    match material {
        "copper" => "ConductorMaterial::Copper",
        "aluminium" => "ConductorMaterial::Aluminium",
        other => panic!("{DATA_FILE}: unknown conductor material '{other}'"),
    }
}

fn insulation_path(insulation: &str) -> &'static str {
    match insulation {
        "pvc" => "InsulationType::Pvc",
        "xlpe" => "InsulationType::Xlpe",
        other => panic!("{DATA_FILE}: unknown insulation type '{other}'"),
    }
}

fn phase_path(phases: u8) -> &'static str {
    match phases {
        1 => "Phase::Single",
        3 => "Phase::Three",
        other => panic!("{DATA_FILE}: unsupported phase count {other}"),
    }
}

fn write_cables(out: &mut String, name: &str, rows: &[CableRow], ascending: bool) {
    if ascending {
        for pair in rows.windows(2) {
            assert!(
                pair[0].ampacity_a < pair[1].ampacity_a,
                "{DATA_FILE}: {name} must be strictly ascending by ampacity ('{}' then '{}')",
                pair[0].label,
                pair[1].label
            );
        }
    }
    writeln!(out, "pub static {name}: &[CableRating] = &[").unwrap();
    for row in rows {
        assert!(row.ampacity_a > 0.0, "{DATA_FILE}: '{}' has a non-positive rating", row.label);
        writeln!(
            out,
            "    CableRating {{ label: {:?}, material: {}, size_mm2: {:?}, ampacity_a: {:?} }},",
            row.label,
            material_path(&row.material),
            row.size_mm2,
            row.ampacity_a
        )
        .unwrap();
    }
    writeln!(out, "];\n").unwrap();
}

fn write_factors(out: &mut String, name: &str, rows: &[FactorRow]) {
    writeln!(out, "pub static {name}: &[DeratingFactor] = &[").unwrap();
    for row in rows {
        assert!(row.factor > 0.0, "{DATA_FILE}: factor '{}' must be positive", row.label);
        writeln!(
            out,
            "    DeratingFactor {{ label: {:?}, factor: {:?} }},",
            row.label, row.factor
        )
        .unwrap();
    }
    writeln!(out, "];\n").unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed={DATA_FILE}");
    println!("cargo:rerun-if-changed=build.rs");

    let raw = fs::read_to_string(DATA_FILE)
        .unwrap_or_else(|e| panic!("failed to read {DATA_FILE}: {e}"));
    let data: ReferenceData =
        toml::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse {DATA_FILE}: {e}"));

    let mut out = String::new();
    writeln!(out, "// @generated by build.rs from {DATA_FILE}. Do not edit.\n").unwrap();
    writeln!(out, "pub const STANDARD: &str = {:?};", data.meta.standard).unwrap();
    writeln!(out, "pub const REVISION: u32 = {};\n", data.meta.revision).unwrap();

    write_cables(&mut out, "CCC_CABLES", &data.ccc_cable, false);
    write_cables(&mut out, "SELECTION_COPPER", &data.selection_copper, true);
    write_cables(&mut out, "SELECTION_ALUMINIUM", &data.selection_aluminium, true);

    write_factors(&mut out, "AMBIENT", &data.ambient);
    write_factors(&mut out, "GROUPING", &data.grouping);
    write_factors(&mut out, "INSULATION", &data.insulation);

    writeln!(out, "pub static VOLTAGE_DROP: &[VoltageDropRating] = &[").unwrap();
    for row in &data.voltage_drop {
        writeln!(
            out,
            "    VoltageDropRating {{ label: {:?}, size_mm2: {:?}, phase: {}, mv_per_am: {:?} }},",
            row.label,
            row.size_mm2,
            phase_path(row.phases),
            row.mv_per_am
        )
        .unwrap();
    }
    writeln!(out, "];\n").unwrap();

    writeln!(out, "pub static K_CONSTANTS: &[KConstant] = &[").unwrap();
    for row in &data.k_constant {
        writeln!(
            out,
            "    KConstant {{ label: {:?}, material: {}, insulation: {}, k: {:?} }},",
            row.label,
            material_path(&row.material),
            insulation_path(&row.insulation),
            row.k
        )
        .unwrap();
    }
    writeln!(out, "];").unwrap();

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("reference_data.rs");
    fs::write(&dest, out).unwrap_or_else(|e| panic!("failed to write {}: {e}", dest.display()));
}
