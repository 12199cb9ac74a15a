//! # Formula Registry
//!
//! Central registry of every formula the calculators use. Each formula has
//! metadata: a plain-text expression, variable definitions, the reference it
//! comes from, and the keystroke sequence for working it on a scientific
//! calculator.
//!
//! ## Usage
//!
//! ```rust
//! use elec_core::equations::registry::{Formula, search};
//!
//! let meta = Formula::AdiabaticWithstand.metadata();
//! assert_eq!(meta.formula_plain, "t = (k² × S²) / I²");
//!
//! let hits = search("zs");
//! assert!(hits.contains(&Formula::MaxLoopImpedance));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Standard References
// ============================================================================

/// Reference to a published standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum StandardReference {
    /// AS/NZS 3000 Wiring Rules
    AsNzs3000 { clause: &'static str },
    /// AS/NZS 3008.1.1 Selection of cables
    AsNzs3008 { table: &'static str },
    /// Circuit theory (no specific standard needed)
    Fundamental,
}

impl StandardReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            StandardReference::AsNzs3000 { clause } => format!("AS/NZS 3000 {}", clause),
            StandardReference::AsNzs3008 { table } => format!("AS/NZS 3008.1.1 {}", table),
            StandardReference::Fundamental => "Circuit Theory".to_string(),
        }
    }
}

// ============================================================================
// Formula Categories
// ============================================================================

/// Categories for grouping formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    /// Current-carrying capacity and cable selection
    CurrentCapacity,
    /// Voltage drop along a cable run
    VoltageDrop,
    /// Short-circuit and earth-fault protection
    FaultProtection,
    /// Ohm's law and impedance
    CircuitTheory,
    /// Real, apparent power and power factor
    Power,
}

impl FormulaCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::CurrentCapacity => "Current-Carrying Capacity",
            FormulaCategory::VoltageDrop => "Voltage Drop",
            FormulaCategory::FaultProtection => "Fault Protection",
            FormulaCategory::CircuitTheory => "Circuit Theory",
            FormulaCategory::Power => "Power",
        }
    }

    /// Listing order (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaCategory::CircuitTheory => 1,
            FormulaCategory::Power => 2,
            FormulaCategory::CurrentCapacity => 3,
            FormulaCategory::VoltageDrop => 4,
            FormulaCategory::FaultProtection => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "I", "L", "k")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "A", "m", "mm²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Short-Circuit Withstand Time")
    pub name: &'static str,
    /// What this formula calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Standard reference
    pub reference: StandardReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Keystrokes for working the formula on a scientific calculator
    pub calculator_steps: Vec<&'static str>,
    /// Quantity produced, with units
    pub result: &'static str,
    /// Category for grouping
    pub category: FormulaCategory,
    /// Function implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// All formulas used by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Formula {
    /// V = I × R
    OhmsLawVoltage,
    /// I = V / R
    OhmsLawCurrent,
    /// R = V / I
    OhmsLawResistance,
    /// Z = √(R² + X²)
    Impedance,
    /// P = V × I × PF
    PowerSinglePhase,
    /// P = √3 × V × I × PF
    PowerThreePhase,
    /// S = V × I
    ApparentPower,
    /// PF = kW / kVA
    PowerFactor,
    /// I_adj = I₀ × f₁ × f₂ × f₃
    DeratedCurrent,
    /// First rating with I_rated ≥ I_load
    CableSelection,
    /// I_cb ≥ I × 1.25
    BreakerSizing,
    /// VD = (mV/A·m × I × L) / 1000
    VoltageDropTabulated,
    /// VD = Zc × I × L × √3 / 1000
    VoltageDropImpedance,
    /// VD% = VD / U × 100
    VoltageDropPercent,
    /// t = (k² × S²) / I²
    AdiabaticWithstand,
    /// Zs ≤ U₀ / Iₐ
    MaxLoopImpedance,
}

impl Formula {
    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            Formula::OhmsLawVoltage => FormulaMetadata {
                name: "Ohm's Law: Voltage",
                description: "Voltage across a resistance carrying a current",
                formula_plain: "V = I × R",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("V", "Voltage", "V"),
                    Variable::new("I", "Current", "A"),
                    Variable::new("R", "Resistance", "Ω"),
                ],
                calculator_steps: vec!["1. Enter I", "2. Press ×", "3. Enter R", "4. Press ="],
                result: "Voltage (V)",
                category: FormulaCategory::CircuitTheory,
                source_function: "ohms_law_voltage",
            },

            Formula::OhmsLawCurrent => FormulaMetadata {
                name: "Ohm's Law: Current",
                description: "Current through a resistance at a given voltage",
                formula_plain: "I = V ÷ R",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("I", "Current", "A"),
                    Variable::new("V", "Voltage", "V"),
                    Variable::new("R", "Resistance", "Ω"),
                ],
                calculator_steps: vec!["1. Enter V", "2. Press ÷", "3. Enter R", "4. Press ="],
                result: "Current (A)",
                category: FormulaCategory::CircuitTheory,
                source_function: "ohms_law_current",
            },

            Formula::OhmsLawResistance => FormulaMetadata {
                name: "Ohm's Law: Resistance",
                description: "Resistance from measured voltage and current",
                formula_plain: "R = V ÷ I",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("R", "Resistance", "Ω"),
                    Variable::new("V", "Voltage", "V"),
                    Variable::new("I", "Current", "A"),
                ],
                calculator_steps: vec!["1. Enter V", "2. Press ÷", "3. Enter I", "4. Press ="],
                result: "Resistance (Ω)",
                category: FormulaCategory::CircuitTheory,
                source_function: "ohms_law_resistance",
            },

            Formula::Impedance => FormulaMetadata {
                name: "Impedance",
                description: "Magnitude of impedance from resistance and reactance",
                formula_plain: "Z = √(R² + X²)",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("Z", "Impedance", "Ω"),
                    Variable::new("R", "Resistance", "Ω"),
                    Variable::new("X", "Reactance", "Ω"),
                ],
                calculator_steps: vec![
                    "1. Enter R", "2. x²", "3. +", "4. Enter X", "5. x²", "6. =", "7. √",
                ],
                result: "Impedance (Ω)",
                category: FormulaCategory::CircuitTheory,
                source_function: "impedance",
            },

            Formula::PowerSinglePhase => FormulaMetadata {
                name: "Power: Single Phase",
                description: "Real power drawn by a single-phase load",
                formula_plain: "P = V × I × PF",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("P", "Real power", "W"),
                    Variable::new("V", "Supply voltage", "V"),
                    Variable::new("I", "Load current", "A"),
                    Variable::new("PF", "Power factor", "-"),
                ],
                calculator_steps: vec!["1. Enter V", "2. × I", "3. × PF", "4. Press ="],
                result: "Power (W)",
                category: FormulaCategory::Power,
                source_function: "single_phase_power",
            },

            Formula::PowerThreePhase => FormulaMetadata {
                name: "Power: Three Phase (Max Demand)",
                description: "Real power drawn by a balanced three-phase load",
                formula_plain: "P = √3 × V × I × PF",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("P", "Real power", "W"),
                    Variable::new("V", "Line voltage", "V"),
                    Variable::new("I", "Line current", "A"),
                    Variable::new("PF", "Power factor", "-"),
                ],
                calculator_steps: vec!["1. Enter V", "2. × I", "3. × √3", "4. × PF", "5. Press ="],
                result: "Power (W)",
                category: FormulaCategory::Power,
                source_function: "three_phase_power",
            },

            Formula::ApparentPower => FormulaMetadata {
                name: "Apparent Power",
                description: "Volt-amperes supplied to a single-phase load",
                formula_plain: "S = V × I",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("S", "Apparent power", "VA"),
                    Variable::new("V", "Supply voltage", "V"),
                    Variable::new("I", "Load current", "A"),
                ],
                calculator_steps: vec!["1. Enter V", "2. × I", "3. Press ="],
                result: "VA",
                category: FormulaCategory::Power,
                source_function: "apparent_power",
            },

            Formula::PowerFactor => FormulaMetadata {
                name: "Power Factor",
                description: "Ratio of real to apparent power",
                formula_plain: "PF = kW ÷ kVA",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("PF", "Power factor", "-"),
                    Variable::new("kW", "Real power", "kW"),
                    Variable::new("kVA", "Apparent power", "kVA"),
                ],
                calculator_steps: vec!["1. Enter kW", "2. ÷ kVA", "3. Press ="],
                result: "PF (unitless)",
                category: FormulaCategory::Power,
                source_function: "power_factor",
            },

            Formula::DeratedCurrent => FormulaMetadata {
                name: "CCC with Derating",
                description: "Current-carrying capacity after installation derating",
                formula_plain: "I_adj = I₀ × f₁ × f₂ × f₃",
                reference: StandardReference::AsNzs3008 { table: "Tables 27, 32, 34" },
                variables: vec![
                    Variable::new("I₀", "Base current-carrying capacity", "A"),
                    Variable::new("f₁", "Ambient temperature factor", "-"),
                    Variable::new("f₂", "Grouping factor", "-"),
                    Variable::new("f₃", "Thermal insulation factor", "-"),
                ],
                calculator_steps: vec![
                    "1. Enter I_rated",
                    "2. × Ambient",
                    "3. × Grouping",
                    "4. × Thermal",
                    "5. Press =",
                ],
                result: "Adjusted CCC (A)",
                category: FormulaCategory::CurrentCapacity,
                source_function: "derated_current",
            },

            Formula::CableSelection => FormulaMetadata {
                name: "Cable Selection by Current",
                description: "Smallest tabulated cable whose rating carries the load",
                formula_plain: "I_rated ≥ I_load",
                reference: StandardReference::AsNzs3008 { table: "Current-carrying capacity tables" },
                variables: vec![
                    Variable::new("I_rated", "Tabulated cable rating", "A"),
                    Variable::new("I_load", "Load current", "A"),
                ],
                calculator_steps: vec![],
                result: "Cable size (mm²)",
                category: FormulaCategory::CurrentCapacity,
                source_function: "select_cable",
            },

            Formula::BreakerSizing => FormulaMetadata {
                name: "Circuit Breaker (I × SF)",
                description: "Minimum protective device rating for a continuous load",
                formula_plain: "I_cb ≥ I × 1.25",
                reference: StandardReference::Fundamental,
                variables: vec![
                    Variable::new("I_cb", "Circuit breaker rating", "A"),
                    Variable::new("I", "Load current", "A"),
                ],
                calculator_steps: vec!["1. Enter Load I", "2. × 1.25", "3. Press ="],
                result: "CB Rating (A)",
                category: FormulaCategory::CurrentCapacity,
                source_function: "breaker_rating",
            },

            Formula::VoltageDropTabulated => FormulaMetadata {
                name: "Voltage Drop (mV/A·m)",
                description: "Voltage drop from a tabulated per-unit constant",
                formula_plain: "VD = (mV/A·m) × I × L / 1000",
                reference: StandardReference::AsNzs3008 { table: "Tables 40-51" },
                variables: vec![
                    Variable::new("VD", "Voltage drop", "V"),
                    Variable::new("mV/A·m", "Voltage-drop constant", "mV/A·m"),
                    Variable::new("I", "Load current", "A"),
                    Variable::new("L", "Route length", "m"),
                ],
                calculator_steps: vec![
                    "1. Enter mV/A·m",
                    "2. × I",
                    "3. × L",
                    "4. ÷ 1000",
                    "5. Press =",
                ],
                result: "Voltage Drop (V)",
                category: FormulaCategory::VoltageDrop,
                source_function: "voltage_drop",
            },

            Formula::VoltageDropImpedance => FormulaMetadata {
                name: "Voltage Drop (Z method)",
                description: "Three-phase voltage drop from cable impedance",
                formula_plain: "VD = Zc × I × L × √3 / 1000",
                reference: StandardReference::AsNzs3008 { table: "Section 4" },
                variables: vec![
                    Variable::new("VD", "Voltage drop", "V"),
                    Variable::new("Zc", "Cable impedance", "Ω/km"),
                    Variable::new("I", "Line current", "A"),
                    Variable::new("L", "Route length", "m"),
                ],
                calculator_steps: vec![
                    "1. Enter Z", "2. × I", "3. × L", "4. × √3", "5. ÷ 1000", "6. Press =",
                ],
                result: "Voltage Drop (V)",
                category: FormulaCategory::VoltageDrop,
                source_function: "voltage_drop_impedance_method",
            },

            Formula::VoltageDropPercent => FormulaMetadata {
                name: "Voltage Drop Percentage",
                description: "Voltage drop relative to nominal voltage; limit 5%",
                formula_plain: "VD% = VD ÷ U × 100",
                reference: StandardReference::AsNzs3000 { clause: "Clause 3.6" },
                variables: vec![
                    Variable::new("VD%", "Voltage drop percentage", "%"),
                    Variable::new("VD", "Voltage drop", "V"),
                    Variable::new("U", "Nominal voltage", "V"),
                ],
                calculator_steps: vec!["1. Enter VD", "2. ÷ U", "3. × 100", "4. Press ="],
                result: "Voltage Drop (%)",
                category: FormulaCategory::VoltageDrop,
                source_function: "voltage_drop_percent",
            },

            Formula::AdiabaticWithstand => FormulaMetadata {
                name: "Short-Circuit Withstand Time",
                description: "Time a conductor can carry a fault before damage",
                formula_plain: "t = (k² × S²) / I²",
                reference: StandardReference::AsNzs3008 { table: "Section 5" },
                variables: vec![
                    Variable::new("t", "Withstand time", "s"),
                    Variable::new("k", "Material constant", "A·s½/mm²"),
                    Variable::new("S", "Conductor cross-section", "mm²"),
                    Variable::new("I", "Fault current", "A"),
                ],
                calculator_steps: vec![
                    "1. Enter k", "2. x²", "3. × S", "4. x²", "5. ÷ I", "6. x²", "7. Press =",
                ],
                result: "Time (s)",
                category: FormulaCategory::FaultProtection,
                source_function: "adiabatic_withstand_time",
            },

            Formula::MaxLoopImpedance => FormulaMetadata {
                name: "Zs Compliance",
                description: "Maximum earth fault-loop impedance for automatic disconnection",
                formula_plain: "Zs ≤ U₀ / Iₐ",
                reference: StandardReference::AsNzs3000 { clause: "Clause 5.7" },
                variables: vec![
                    Variable::new("Zs", "Earth fault-loop impedance", "Ω"),
                    Variable::new("U₀", "Nominal voltage to earth", "V"),
                    Variable::new("Iₐ", "Disconnection current", "A"),
                ],
                calculator_steps: vec!["1. Enter Uo", "2. ÷ Ia", "3. Press ="],
                result: "Max Zs (Ω)",
                category: FormulaCategory::FaultProtection,
                source_function: "max_loop_impedance",
            },
        }
    }

    /// Get all formulas in a given category
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in listing order
    pub fn all_categories() -> Vec<FormulaCategory> {
        use FormulaCategory::*;
        let mut cats = vec![CurrentCapacity, VoltageDrop, FaultProtection, CircuitTheory, Power];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::OhmsLawVoltage,
    Formula::OhmsLawCurrent,
    Formula::OhmsLawResistance,
    Formula::Impedance,
    Formula::PowerSinglePhase,
    Formula::PowerThreePhase,
    Formula::ApparentPower,
    Formula::PowerFactor,
    Formula::DeratedCurrent,
    Formula::CableSelection,
    Formula::BreakerSizing,
    Formula::VoltageDropTabulated,
    Formula::VoltageDropImpedance,
    Formula::VoltageDropPercent,
    Formula::AdiabaticWithstand,
    Formula::MaxLoopImpedance,
];

/// Find formulas whose name, description or expression contains `query`
/// (case-insensitive). An empty query returns every formula.
pub fn search(query: &str) -> Vec<Formula> {
    let needle = query.trim().to_lowercase();
    ALL_FORMULAS
        .iter()
        .filter(|f| {
            if needle.is_empty() {
                return true;
            }
            let meta = f.metadata();
            [meta.name, meta.description, meta.formula_plain]
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        })
        .copied()
        .collect()
}

/// Generate a markdown reference of every formula, grouped by category.
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str("# Elecalc Formula Reference\n\n");
    output.push_str("Every formula used by the calculators, with its reference and calculator keystrokes.\n\n---\n\n");

    let categories = Formula::all_categories();

    for category in &categories {
        let formulas = Formula::in_category(*category);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            let meta = formula.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            if !meta.calculator_steps.is_empty() {
                output.push_str("**Calculator:**\n");
                for step in &meta.calculator_steps {
                    output.push_str(&format!("- {}\n", step));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Result:** {}\n\n", meta.result));
            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!("Total formulas: {}\n", ALL_FORMULAS.len()));
    output
}
