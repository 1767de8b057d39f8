//! Core types for circuit representation.

use std::fmt;

/// A unique identifier for a component in the circuit.
///
/// Freshly added components are numbered from 1; imported components keep
/// the id declared in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A unique identifier for a wire in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(pub u32);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// Direction of a connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
}

/// Structural identity of a connection point: owner, direction and index.
///
/// Two references are equal when they name the same terminal, regardless of
/// where the point lives in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub component: ComponentId,
    pub direction: Direction,
    pub index: usize,
}

impl PointRef {
    /// The `index`-th input of `component`.
    pub fn input(component: ComponentId, index: usize) -> Self {
        Self {
            component,
            direction: Direction::Input,
            index,
        }
    }

    /// The `index`-th output of `component`.
    pub fn output(component: ComponentId, index: usize) -> Self {
        Self {
            component,
            direction: Direction::Output,
            index,
        }
    }

    pub fn is_input(&self) -> bool {
        self.direction == Direction::Input
    }
}

impl fmt::Display for PointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.direction {
            Direction::Input => "in",
            Direction::Output => "out",
        };
        write!(f, "{}.{}{}", self.component, tag, self.index)
    }
}

/// Placement of a component on the editing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
