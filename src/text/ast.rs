//! Record types for the circuit text format.

/// Complete parsed representation of a circuit file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CircuitText {
    /// `Composant:` records, in file order
    pub components: Vec<ComponentRecord>,
    /// `Connexion:` records, in file order
    pub connections: Vec<ConnectionRecord>,
}

impl CircuitText {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A `Composant:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Type name, e.g. `AndGate`
    pub type_name: String,
    /// Declared component id
    pub id: u32,
    pub x: i32,
    pub y: i32,
    /// `value=` field, only accepted on constants
    pub value: Option<bool>,
    /// Source line number for error reporting
    pub line: usize,
}

/// One side of a `Connexion:` line: `<componentId>.<pointIndex>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub component: u32,
    pub index: usize,
}

/// A `Connexion:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    /// Output side
    pub from: Endpoint,
    /// Input side
    pub to: Endpoint,
    /// Source line number for error reporting
    pub line: usize,
}
