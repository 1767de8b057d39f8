//! Error types for the gate simulator.
//!
//! This module provides a unified error type [`GateSimError`] that covers
//! all error conditions that can occur while editing a circuit graph,
//! simulating it, and importing it from text.
//!
//! The logic algebra itself never fails: contradictions and missing
//! information travel through the data as [`LogicValue::Err`] and
//! [`LogicValue::Nothing`].
//!
//! [`LogicValue::Err`]: crate::logic::LogicValue::Err
//! [`LogicValue::Nothing`]: crate::logic::LogicValue::Nothing

use thiserror::Error;

use crate::circuit::{ComponentId, PointRef, WireId};

/// Result type alias using [`GateSimError`].
pub type Result<T> = std::result::Result<T, GateSimError>;

/// Unified error type for all gate simulator operations.
#[derive(Error, Debug)]
pub enum GateSimError {
    // ============ Graph Errors ============
    /// A wire must run from an output point to an input point
    #[error("Invalid wire direction: {from} -> {to} (wires run from an output to an input)")]
    InvalidDirection { from: PointRef, to: PointRef },

    /// The point already carries a wire
    #[error("Connection point {point} already has a wire attached")]
    AlreadyConnected { point: PointRef },

    /// Both endpoints belong to the same component
    #[error("Cannot wire component {component} to itself")]
    SelfConnection { component: ComponentId },

    /// Component not found in circuit
    #[error("Component {id} not found in circuit")]
    ComponentNotFound { id: ComponentId },

    /// Connection point index out of range for its component
    #[error("Connection point {point} does not exist")]
    PointNotFound { point: PointRef },

    /// Wire not found in circuit
    #[error("Wire {id} not found in circuit")]
    WireNotFound { id: WireId },

    /// Broken back-reference between wires and connection points
    #[error("Invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    // ============ Simulation Errors ============
    /// No fixed point reached within the iteration budget
    #[error("Circuit is unstable: no fixed point after {iterations} iterations")]
    Unstable { iterations: usize },

    /// Simulation was cancelled through its cancel token
    #[error("Simulation cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },

    /// Invalid simulation parameter
    #[error("Invalid simulation parameter: {message}")]
    InvalidSimulationParam { message: String },

    // ============ Text Import Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown component type
    #[error("Unknown component type '{component_type}' at line {line}")]
    UnknownComponentType { component_type: String, line: usize },

    /// The same component id was declared twice
    #[error("Duplicate component id {id} at line {line}")]
    DuplicateComponent { id: u32, line: usize },

    /// A connection refers to a component that was never declared
    #[error("Undefined component {id} referenced at line {line}")]
    UndefinedComponent { id: u32, line: usize },

    /// A connection line could not be wired
    #[error("Invalid connection at line {line}: {source}")]
    InvalidConnection {
        line: usize,
        #[source]
        source: Box<GateSimError>,
    },

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing circuit file
    #[error("Failed to write circuit file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl GateSimError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a topology error
    pub fn topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Attach a source line to a failed `connect()` during import
    pub fn at_line(self, line: usize) -> Self {
        Self::InvalidConnection {
            line,
            source: Box::new(self),
        }
    }
}
