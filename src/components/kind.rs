//! Gate variants and their output formulas.

use std::fmt;

use crate::logic::LogicValue;

/// The closed set of component variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Not,
    Nand,
    Xor,
    /// Constant source driving `True`
    ConstTrue,
    /// Constant source driving `False`
    ConstFalse,
    /// Indicator lamp: one input, no outputs
    Led,
}

impl GateKind {
    /// Every variant, in a stable order.
    pub const ALL: [GateKind; 8] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Xor,
        GateKind::ConstTrue,
        GateKind::ConstFalse,
        GateKind::Led,
    ];

    /// Number of input points.
    pub fn input_count(self) -> usize {
        match self {
            GateKind::And | GateKind::Or | GateKind::Nand | GateKind::Xor => 2,
            GateKind::Not | GateKind::Led => 1,
            GateKind::ConstTrue | GateKind::ConstFalse => 0,
        }
    }

    /// Number of output points.
    pub fn output_count(self) -> usize {
        match self {
            GateKind::Led => 0,
            _ => 1,
        }
    }

    /// The value driven by a constant source.
    pub fn constant_value(self) -> Option<bool> {
        match self {
            GateKind::ConstTrue => Some(true),
            GateKind::ConstFalse => Some(false),
            _ => None,
        }
    }

    /// Name used in the text format. Both constants share one name and are
    /// told apart by their `value=` field.
    pub fn type_name(self) -> &'static str {
        match self {
            GateKind::And => "AndGate",
            GateKind::Or => "OrGate",
            GateKind::Not => "NotGate",
            GateKind::Nand => "NandGate",
            GateKind::Xor => "XorGate",
            GateKind::ConstTrue | GateKind::ConstFalse => "ConstantComponent",
            GateKind::Led => "LedLight",
        }
    }

    /// Resolve a text-format type name. `constant` picks the value for
    /// `ConstantComponent`.
    pub fn from_type_name(name: &str, constant: bool) -> Option<Self> {
        match name {
            "AndGate" => Some(GateKind::And),
            "OrGate" => Some(GateKind::Or),
            "NotGate" => Some(GateKind::Not),
            "NandGate" => Some(GateKind::Nand),
            "XorGate" => Some(GateKind::Xor),
            "ConstantComponent" if constant => Some(GateKind::ConstTrue),
            "ConstantComponent" => Some(GateKind::ConstFalse),
            "LedLight" => Some(GateKind::Led),
            _ => None,
        }
    }

    /// Output of this gate for the given input values.
    ///
    /// Missing inputs read as `Nothing`. The operand order of every `andz`
    /// is significant.
    pub fn evaluate(self, inputs: &[LogicValue]) -> LogicValue {
        let input = |i: usize| inputs.get(i).copied().unwrap_or(LogicValue::Nothing);

        match self {
            GateKind::And => input(0).andz(input(1)),
            GateKind::Nand => input(0).andz(input(1)).neg(),
            GateKind::Or => input(0).neg().andz(input(1).neg()).neg(),
            GateKind::Not => input(0).neg(),
            GateKind::Xor => {
                let (a, b) = (input(0), input(1));
                a.andz(b.neg()).sup(b.andz(a.neg()))
            }
            GateKind::ConstTrue => LogicValue::True,
            GateKind::ConstFalse => LogicValue::False,
            // Sinks drive nothing
            GateKind::Led => LogicValue::Nothing,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Xor => "XOR",
            GateKind::ConstTrue => "1",
            GateKind::ConstFalse => "0",
            GateKind::Led => "LED",
        };
        f.write_str(s)
    }
}
