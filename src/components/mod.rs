//! Component models for circuit simulation.
//!
//! This module provides the supported gate variants:
//! - Two-input gates: AND, OR, NAND, XOR
//! - One-input gates: NOT
//! - Sources: constant 0 and constant 1
//! - Sinks: LED indicator
//!
//! Each variant fixes its number of input and output points at construction
//! and computes its output from its inputs through [`GateKind::evaluate`].

mod kind;

pub use kind::GateKind;

use crate::circuit::{ComponentId, ConnectionPoint, Direction, PointRef, Position};

/// A gate placed in a circuit.
#[derive(Debug, Clone)]
pub struct Component {
    id: ComponentId,
    kind: GateKind,
    position: Position,
    inputs: Vec<ConnectionPoint>,
    outputs: Vec<ConnectionPoint>,
}

impl Component {
    /// Create a component with fresh, unwired connection points sized for
    /// its variant.
    pub fn new(id: ComponentId, kind: GateKind, position: Position) -> Self {
        let inputs = (0..kind.input_count())
            .map(|i| ConnectionPoint::new(id, Direction::Input, i))
            .collect();
        let outputs = (0..kind.output_count())
            .map(|i| ConnectionPoint::new(id, Direction::Output, i))
            .collect();
        Self {
            id,
            kind,
            position,
            inputs,
            outputs,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Input points, in order.
    pub fn inputs(&self) -> &[ConnectionPoint] {
        &self.inputs
    }

    /// Output points, in order.
    pub fn outputs(&self) -> &[ConnectionPoint] {
        &self.outputs
    }

    pub fn input(&self, index: usize) -> Option<&ConnectionPoint> {
        self.inputs.get(index)
    }

    pub fn output(&self, index: usize) -> Option<&ConnectionPoint> {
        self.outputs.get(index)
    }

    /// Look up one of this component's points.
    pub fn point(&self, point: PointRef) -> Option<&ConnectionPoint> {
        if point.component != self.id {
            return None;
        }
        match point.direction {
            Direction::Input => self.inputs.get(point.index),
            Direction::Output => self.outputs.get(point.index),
        }
    }

    pub(crate) fn point_mut(&mut self, point: PointRef) -> Option<&mut ConnectionPoint> {
        if point.component != self.id {
            return None;
        }
        match point.direction {
            Direction::Input => self.inputs.get_mut(point.index),
            Direction::Output => self.outputs.get_mut(point.index),
        }
    }

    /// Inputs followed by outputs.
    pub fn points(&self) -> impl Iterator<Item = &ConnectionPoint> {
        self.inputs.iter().chain(self.outputs.iter())
    }
}
