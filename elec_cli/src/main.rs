//! # Elecalc CLI
//!
//! Command-line front end for `elec_core`. Every calculation prints its
//! result as JSON on stdout; logs go to stderr. A failed calculation prints
//! the structured error as JSON and exits with status 1.

mod cli;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info};

use elec_core::calculations::{
    cable_selection, circuit, derating, short_circuit, verification, voltage_drop, zs, CableSelectionInput,
    CalculationItem, CircuitInput, DeratingInput, OhmsLawInput, ShortCircuitInput, VerificationInput,
    VoltageDropInput, ZsInput,
};
use elec_core::equations::registry::{self, generate_formulas_markdown, ALL_FORMULAS};
use elec_core::errors::CalcResult;
use elec_core::reference::{search_standards, TESTING_PROCEDURES};
use elec_core::settings::{KeyPolicy, Settings};
use elec_core::tables::{
    self, ampacity, short_circuit as k_table, voltage_drop as vd_table, ConductorMaterial, DeratingCategory,
};
use elec_core::{load_settings, save_settings};

use crate::cli::{Cli, Commands, ConfigCommands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level.into()))
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings(path).with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if cli.strict {
        settings.key_policy = KeyPolicy::Strict;
    }
    debug!(?settings, "settings resolved");
    Ok(settings)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a calculation outcome. Errors are printed as JSON too, then
/// returned so the process exits non-zero.
fn emit<T: Serialize>(outcome: CalcResult<T>) -> Result<()> {
    match outcome {
        Ok(result) => print_json(&result),
        Err(err) => {
            print_json(&err)?;
            Err(err.into())
        }
    }
}

fn read_request(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading request from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading request from {input}"))
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_config(&cli)?;
    info!(edition = %tables::edition(), "elec v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Derate {
            cable,
            base_current,
            ambient,
            grouping,
            insulation,
        } => emit(
            DeratingInput::from_text(&cable, &base_current, &ambient, &grouping, &insulation)
                .and_then(|input| derating::calculate(&input, settings.key_policy)),
        ),
        Commands::Select {
            current,
            voltage,
            pf,
            material,
        } => emit(
            CableSelectionInput::from_text(&current, &voltage, &pf, material)
                .and_then(|input| cable_selection::calculate(&input, settings.conductor)),
        ),
        Commands::Vdrop {
            cable,
            current,
            length,
            nominal,
        } => emit(VoltageDropInput::from_text(&cable, &current, &length).and_then(|mut input| {
            input.nominal_voltage = nominal;
            voltage_drop::calculate(&input, &settings)
        })),
        Commands::ShortCircuit {
            conductor,
            csa,
            fault_current,
        } => emit(ShortCircuitInput::from_text(&conductor, &csa, &fault_current).and_then(|input| short_circuit::calculate(&input))),
        Commands::Zs { ia, zs: measured, nominal } => {
            let nominal = nominal.unwrap_or(settings.nominal_voltage);
            emit(ZsInput::from_text(nominal, &ia, &measured).and_then(|input| zs::calculate(&input, nominal)))
        }
        Commands::Circuit {
            voltage,
            current,
            pf,
            phase,
            resistance,
            reactance,
        } => emit(circuit::calculate(&CircuitInput {
            label: String::new(),
            phase: phase.into(),
            voltage_v: voltage,
            current_a: current,
            power_factor: pf,
            resistance_ohm: resistance,
            reactance_ohm: reactance,
        })),
        Commands::Ohms {
            voltage,
            current,
            resistance,
        } => emit(circuit::solve_ohms_law(&OhmsLawInput {
            label: String::new(),
            voltage_v: voltage,
            current_a: current,
            resistance_ohm: resistance,
        })),
        Commands::Verify {
            insulation,
            rcd_trip,
            electrode,
            polarity,
            zs: measured_zs,
            ia,
        } => {
            let zs = match (measured_zs, ia) {
                (Some(measured_zs_ohm), Some(disconnection_current_a)) => Some(ZsInput {
                    label: String::new(),
                    nominal_voltage: None,
                    disconnection_current_a,
                    measured_zs_ohm,
                }),
                _ => None,
            };
            let input = VerificationInput {
                label: String::new(),
                insulation_resistance_mohm: insulation,
                rcd_trip_time_ms: rcd_trip,
                earth_electrode_ohm: electrode,
                polarity_correct: polarity,
                zs,
            };
            emit(verification::calculate(&input, settings.nominal_voltage))
        }
        Commands::Eval { input } => {
            let text = read_request(&input)?;
            let item: CalculationItem = serde_json::from_str(&text).context("parsing calculation request")?;
            debug!(calc_type = item.calc_type(), label = item.label(), "evaluating request");
            emit(item.evaluate(&settings))
        }
        Commands::Formulas { search, markdown } => {
            if markdown {
                print!("{}", generate_formulas_markdown());
                return Ok(());
            }
            let formulas = match search {
                Some(query) => registry::search(&query),
                None => ALL_FORMULAS.to_vec(),
            };
            let metadata: Vec<_> = formulas.iter().map(|f| f.metadata()).collect();
            print_json(&metadata)
        }
        Commands::Lookup { query } => print_json(&search_standards(&query)),
        Commands::Procedures => {
            for procedure in TESTING_PROCEDURES {
                println!("{procedure}");
            }
            Ok(())
        }
        Commands::Tables => print_json(&serde_json::json!({
            "edition": tables::edition(),
            "ccc_cables": ampacity::ccc_cables(),
            "selection": {
                "copper": ampacity::selection_table(ConductorMaterial::Copper),
                "aluminium": ampacity::selection_table(ConductorMaterial::Aluminium),
            },
            "derating": {
                "ambient": DeratingCategory::Ambient.table(),
                "grouping": DeratingCategory::Grouping.table(),
                "insulation": DeratingCategory::Insulation.table(),
            },
            "voltage_drop": vd_table::ratings(),
            "k_constants": k_table::constants(),
        })),
        Commands::Config {
            command: ConfigCommands::Init { out },
        } => {
            save_settings(&Settings::default(), &out).with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote default settings to {}", out.display());
            Ok(())
        }
    }
}
