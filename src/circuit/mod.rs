//! Circuit graph representation and validation.
//!
//! This module provides the topology of a circuit: components, the
//! connection points on them, and the wires between those points. The
//! [`Circuit`] struct owns all of them and is the entry point for editing,
//! simulation and text import/export.

mod graph;
mod point;
mod types;
mod validate;
mod wire;

pub use graph::Circuit;
pub use point::ConnectionPoint;
pub use types::*;
pub use validate::validate_circuit;
pub use wire::Wire;
