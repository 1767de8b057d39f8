//! Fixed-point relaxation solver.
//!
//! This module computes a steady state for a circuit without assuming any
//! evaluation order, so feedback loops are allowed.
//!
//! ## Relaxation
//!
//! Starting from every wire at `Nothing`, each round recomputes every wire
//! (in insertion order) from the gate that drives it:
//!
//! ```text
//! repeat up to max_iterations:
//!     changed = false
//!     for w in wires:
//!         v = sup(Nothing, gate(w.start).evaluate(inputs))
//!         if v != w.value: w.value = v; changed = true
//!     if !changed: return fixed point
//! fail: Unstable
//! ```
//!
//! Wires computed earlier in a round are visible to later wires in the same
//! round. For a fixed graph the number of rounds and the final assignment
//! are deterministic.

mod cancel;
mod simulator;

pub use cancel::CancelToken;
pub use simulator::{SimulationReport, Simulator, SimulatorConfig};

/// Default cap on relaxation rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
