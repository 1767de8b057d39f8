//! # Gatesim Core
//!
//! A steady-state simulator for logic gate circuits.
//!
//! This library provides:
//! - A four-valued logic algebra (`Nothing`, `False`, `True`, `Err`)
//! - Gate models (AND, OR, NOT, NAND, XOR, constants, LED) over that algebra
//! - A circuit graph of components, connection points and wires
//! - A fixed-point solver that tolerates feedback loops
//! - A line-oriented text format for saving and loading circuits
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`logic`] - The [`LogicValue`] type and its `sup`/`andz`/`neg` operators
//! - [`components`] - Gate variants and their output formulas
//! - [`circuit`] - Circuit graph representation and validation
//! - [`solver`] - Fixed-point relaxation
//! - [`text`] - Text export and import
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! gatesim circuit.txt --max-iterations 200
//! ```
//!
//! ### Library
//!
//! ```
//! use gatesim_core::{Circuit, GateKind, LogicValue, PointRef, Position};
//!
//! let mut circuit = Circuit::new();
//! let one = circuit.add_component(GateKind::ConstTrue, Position::new(0, 0));
//! let not = circuit.add_component(GateKind::Not, Position::new(100, 0));
//! let led = circuit.add_component(GateKind::Led, Position::new(200, 0));
//! circuit.connect(PointRef::output(one, 0), PointRef::input(not, 0)).unwrap();
//! let out = circuit.connect(PointRef::output(not, 0), PointRef::input(led, 0)).unwrap();
//!
//! circuit.simulate().unwrap();
//! assert_eq!(circuit.wire_value(out), Some(LogicValue::False));
//! ```
//!
//! ## Simulation Method
//!
//! Every simulation starts with all wires at `Nothing` and then recomputes
//! each wire from the gate driving it, round after round, until a round
//! changes nothing. A circuit that is still changing after
//! [`DEFAULT_MAX_ITERATIONS`] rounds (or the configured cap) is reported as
//! unstable.

pub mod circuit;
pub mod components;
pub mod error;
pub mod logic;
pub mod solver;
pub mod text;

// Re-export main types for convenience
pub use circuit::{Circuit, ComponentId, PointRef, Position, WireId};
pub use components::GateKind;
pub use error::{GateSimError, Result};
pub use logic::LogicValue;
pub use solver::{SimulationReport, Simulator, SimulatorConfig, DEFAULT_MAX_ITERATIONS};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;
