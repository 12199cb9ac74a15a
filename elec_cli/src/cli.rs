use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use elec_core::tables::{ConductorMaterial, NominalVoltage, Phase};

#[derive(Parser, Debug)]
#[command(author, version, about = "Electrical installation calculator", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: tracing::Level,

    /// Settings file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject unknown derating labels regardless of settings
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derated current-carrying capacity
    Derate {
        /// Cable from the base-rating table (e.g. "2.5 mm² Cu")
        #[arg(long)]
        cable: String,
        /// Override the tabulated base rating (A)
        #[arg(long, default_value = "")]
        base_current: String,
        /// Ambient temperature (e.g. "35°C")
        #[arg(long, default_value = "30°C")]
        ambient: String,
        /// Grouping (e.g. "3 Circuits")
        #[arg(long, default_value = "1 Circuit")]
        grouping: String,
        /// Thermal insulation (e.g. "Partially Surrounded")
        #[arg(long, default_value = "None")]
        insulation: String,
    },
    /// Smallest cable for a load current
    Select {
        /// Load current (A)
        #[arg(long)]
        current: String,
        /// Supply voltage (V)
        #[arg(long, default_value = "230")]
        voltage: String,
        /// Power factor
        #[arg(long, default_value = "1.0")]
        pf: String,
        /// Conductor material (copper, aluminium)
        #[arg(long, value_parser = ConductorMaterial::from_str_flexible)]
        material: Option<ConductorMaterial>,
    },
    /// Voltage drop along a cable run
    Vdrop {
        /// Cable and phase (e.g. "2.5 mm² Cu 1ph")
        #[arg(long)]
        cable: String,
        /// Load current (A)
        #[arg(long)]
        current: String,
        /// Route length (m)
        #[arg(long)]
        length: String,
        /// Nominal voltage for the percentage (230V, 240V, 415V)
        #[arg(long, value_parser = NominalVoltage::from_label)]
        nominal: Option<NominalVoltage>,
    },
    /// Adiabatic short-circuit withstand time
    ShortCircuit {
        /// Conductor and insulation (e.g. "Copper (PVC)")
        #[arg(long, default_value = "Copper (PVC)")]
        conductor: String,
        /// Conductor cross-section (mm²)
        #[arg(long)]
        csa: String,
        /// Fault current (A)
        #[arg(long)]
        fault_current: String,
    },
    /// Earth fault-loop impedance compliance
    Zs {
        /// Disconnection current Ia (A)
        #[arg(long)]
        ia: String,
        /// Measured loop impedance (Ω)
        #[arg(long)]
        zs: String,
        /// Nominal voltage U0 (230V, 240V, 415V)
        #[arg(long, value_parser = NominalVoltage::from_label)]
        nominal: Option<NominalVoltage>,
    },
    /// Load power, protective device size and impedance
    Circuit {
        /// Supply voltage, line voltage for three phase (V)
        #[arg(long)]
        voltage: f64,
        /// Load current (A)
        #[arg(long)]
        current: f64,
        /// Power factor
        #[arg(long, default_value_t = 1.0)]
        pf: f64,
        /// Supply arrangement
        #[arg(long, value_enum, default_value_t = PhaseArg::Single)]
        phase: PhaseArg,
        /// Resistance (Ω)
        #[arg(long)]
        resistance: Option<f64>,
        /// Reactance (Ω)
        #[arg(long)]
        reactance: Option<f64>,
    },
    /// Solve Ohm's law from any two of V, I, R
    Ohms {
        #[arg(long)]
        voltage: Option<f64>,
        #[arg(long)]
        current: Option<f64>,
        #[arg(long)]
        resistance: Option<f64>,
    },
    /// Check recorded test readings against their limits
    Verify {
        /// Insulation resistance (MΩ)
        #[arg(long)]
        insulation: Option<f64>,
        /// 30 mA RCD trip time (ms)
        #[arg(long)]
        rcd_trip: Option<f64>,
        /// Earth electrode resistance (Ω)
        #[arg(long)]
        electrode: Option<f64>,
        /// Polarity test result
        #[arg(long)]
        polarity: Option<bool>,
        /// Measured loop impedance (Ω), checked with --ia
        #[arg(long, requires = "ia")]
        zs: Option<f64>,
        /// Disconnection current for the Zs check (A)
        #[arg(long, requires = "zs")]
        ia: Option<f64>,
    },
    /// Evaluate a JSON calculation request from a file or stdin ("-")
    Eval {
        #[arg(default_value = "-")]
        input: String,
    },
    /// List or search the formula reference
    Formulas {
        /// Filter by name, description or expression
        #[arg(long)]
        search: Option<String>,
        /// Print the full markdown reference instead of JSON
        #[arg(long)]
        markdown: bool,
    },
    /// Search the standards quick index
    Lookup {
        /// Search text; empty lists everything
        #[arg(default_value = "")]
        query: String,
    },
    /// Print the verification testing sequence
    Procedures,
    /// Print the reference tables and their edition
    Tables,
    /// Settings file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a settings file with default values
    Init {
        /// Destination path
        #[arg(long, default_value = "elecalc.toml")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PhaseArg {
    Single,
    Three,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Single => Phase::Single,
            PhaseArg::Three => Phase::Three,
        }
    }
}
