//! Line-oriented text format for saving and loading circuits.
//!
//! Each line holds one record. Components come first, then the wires
//! between them:
//!
//! ```text
//! Composant: type=<TypeName> id=<int> x=<int> y=<int> [value=0|1]
//! Connexion: from=<componentId>.<outputIndex> to=<componentId>.<inputIndex>
//! ```
//!
//! # Grammar
//!
//! ```text
//! document   = { line }
//! line       = [ record ] [ comment ] newline
//! record     = tag ':' { field }
//! tag        = "Composant" | "Connexion"
//! field      = key '=' ( identifier | integer | endpoint )
//! endpoint   = integer '.' integer
//! comment    = '#' { any_char }
//! ```
//!
//! # Type Names
//!
//! | Type | Inputs | Outputs |
//! |------|--------|---------|
//! | AndGate | 2 | 1 |
//! | OrGate | 2 | 1 |
//! | NandGate | 2 | 1 |
//! | XorGate | 2 | 1 |
//! | NotGate | 1 | 1 |
//! | ConstantComponent | 0 | 1 |
//! | LedLight | 1 | 0 |
//!
//! A `ConstantComponent` without a `value=` field is a constant 0.
//!
//! # Example
//!
//! ```text
//! Composant: type=ConstantComponent id=1 x=40 y=40 value=1
//! Composant: type=NotGate id=2 x=160 y=40
//! Composant: type=LedLight id=3 x=280 y=40
//! Connexion: from=1.0 to=2.0
//! Connexion: from=2.0 to=3.0
//! ```

mod ast;
mod emit;
mod lexer;
mod parser;

pub use ast::*;
pub use emit::emit;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Parser, COMPONENT_TAG, CONNECTION_TAG};

use crate::error::Result;

/// Parse circuit text into records.
pub fn parse(input: &str) -> Result<CircuitText> {
    let lexer = Lexer::new(input);
    Parser::new(lexer)?.parse()
}

/// Parse a circuit file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitText> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::GateSimError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
