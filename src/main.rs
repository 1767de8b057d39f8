//! Gatesim - Logic Gate Circuit Simulator
//!
//! Loads a circuit from its text form, computes its steady state and prints
//! the value on every wire.
//!
//! # Usage
//!
//! ```bash
//! gatesim circuit.txt
//! gatesim circuit.txt --max-iterations 50 --export normalized.txt
//! RUST_LOG=gatesim_core=trace gatesim circuit.txt
//! ```

use std::path::PathBuf;

use clap::Parser;
use gatesim_core::{
    circuit::{validate_circuit, Circuit},
    components::GateKind,
    error::{GateSimError, Result},
    text, SimulatorConfig, DEFAULT_MAX_ITERATIONS,
};
use tracing_subscriber::EnvFilter;

/// Logic gate circuit simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description file
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Maximum relaxation rounds before the circuit is declared unstable
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Write the loaded circuit back out in canonical text form
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Log simulation progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse and build the circuit
    let ast = text::parse_file(&args.circuit_file)?;
    let mut circuit = Circuit::from_ast(ast)?;

    // Validate
    validate_circuit(&circuit)?;

    if let Some(path) = &args.export {
        std::fs::write(path, circuit.export_text()).map_err(|e| GateSimError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    // Simulate
    let config = SimulatorConfig::new().with_max_iterations(args.max_iterations);
    let report = circuit.simulate_with(&config)?;
    println!("stable after {} iterations", report.iterations);

    for (id, wire) in circuit.wires() {
        println!("{id}: {} -> {} = {}", wire.start(), wire.end(), wire.value());
    }

    for component in circuit.components() {
        if component.kind() == GateKind::Led {
            let lit = circuit.led_lit(component.id()).unwrap_or(false);
            println!("{} {}: {}", component.kind(), component.id(), if lit { "on" } else { "off" });
        }
    }

    Ok(())
}
