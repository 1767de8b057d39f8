//! Parser for the circuit text format.

use std::str::FromStr;

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::components::GateKind;
use crate::error::{GateSimError, Result};

/// Record tag for component lines.
pub const COMPONENT_TAG: &str = "Composant";
/// Record tag for connection lines.
pub const CONNECTION_TAG: &str = "Connexion";

/// Parser for circuit text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire document.
    pub fn parse(&mut self) -> Result<CircuitText> {
        let mut doc = CircuitText::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            let tag = self.expect(TokenKind::Identifier)?;
            self.expect(TokenKind::Colon)?;

            match tag.text.as_str() {
                COMPONENT_TAG => doc.components.push(self.parse_component(tag.line)?),
                CONNECTION_TAG => doc.connections.push(self.parse_connection(tag.line)?),
                other => {
                    return Err(GateSimError::parse(
                        tag.line,
                        format!("unknown record '{}'", other),
                    ));
                }
            }

            // One record per line
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                }
                TokenKind::Eof => {}
                _ => {
                    return Err(GateSimError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }
        }

        Ok(doc)
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(GateSimError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn expect_int<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let tok = self.expect(TokenKind::Number)?;
        tok.text
            .parse()
            .map_err(|_| GateSimError::parse(tok.line, format!("invalid {}: {}", what, tok.text)))
    }

    /// `key=` prefix of a field, or `None` at the end of the record.
    fn field_key(&mut self) -> Result<Option<Token>> {
        if self.current.kind != TokenKind::Identifier {
            return Ok(None);
        }
        let key = self.advance()?;
        self.expect(TokenKind::Equals)?;
        Ok(Some(key))
    }

    fn parse_component(&mut self, line: usize) -> Result<ComponentRecord> {
        let mut type_name = None;
        let mut id = None;
        let mut x = None;
        let mut y = None;
        let mut value = None;

        while let Some(key) = self.field_key()? {
            match key.text.as_str() {
                "type" => {
                    let name = self.expect(TokenKind::Identifier)?.text;
                    set_once(&mut type_name, name, &key)?;
                }
                "id" => {
                    let v = self.expect_int("component id")?;
                    set_once(&mut id, v, &key)?;
                }
                "x" => {
                    let v = self.expect_int("x coordinate")?;
                    set_once(&mut x, v, &key)?;
                }
                "y" => {
                    let v = self.expect_int("y coordinate")?;
                    set_once(&mut y, v, &key)?;
                }
                "value" => {
                    let v = match self.expect_int::<u8>("constant value")? {
                        0 => false,
                        1 => true,
                        other => {
                            return Err(GateSimError::parse(
                                line,
                                format!("constant value must be 0 or 1, got {}", other),
                            ));
                        }
                    };
                    set_once(&mut value, v, &key)?;
                }
                other => {
                    return Err(GateSimError::parse(
                        key.line,
                        format!("unknown field '{}' in {} record", other, COMPONENT_TAG),
                    ));
                }
            }
        }

        let type_name = required(type_name, "type", line)?;
        if value.is_some() && type_name != GateKind::ConstFalse.type_name() {
            return Err(GateSimError::parse(
                line,
                format!("field 'value' is only allowed on {}", GateKind::ConstFalse.type_name()),
            ));
        }

        Ok(ComponentRecord {
            type_name,
            id: required(id, "id", line)?,
            x: required(x, "x", line)?,
            y: required(y, "y", line)?,
            value,
            line,
        })
    }

    fn parse_connection(&mut self, line: usize) -> Result<ConnectionRecord> {
        let mut from = None;
        let mut to = None;

        while let Some(key) = self.field_key()? {
            let slot = match key.text.as_str() {
                "from" => &mut from,
                "to" => &mut to,
                other => {
                    return Err(GateSimError::parse(
                        key.line,
                        format!("unknown field '{}' in {} record", other, CONNECTION_TAG),
                    ));
                }
            };
            let endpoint = self.parse_endpoint()?;
            set_once(slot, endpoint, &key)?;
        }

        Ok(ConnectionRecord {
            from: required(from, "from", line)?,
            to: required(to, "to", line)?,
            line,
        })
    }

    fn parse_endpoint(&mut self) -> Result<Endpoint> {
        let component = self.expect_int("component id")?;
        self.expect(TokenKind::Dot)?;
        let index = self.expect_int("point index")?;
        Ok(Endpoint { component, index })
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &Token) -> Result<()> {
    if slot.is_some() {
        return Err(GateSimError::parse(
            key.line,
            format!("duplicate field '{}'", key.text),
        ));
    }
    *slot = Some(value);
    Ok(())
}

fn required<T>(slot: Option<T>, name: &str, line: usize) -> Result<T> {
    slot.ok_or_else(|| GateSimError::parse(line, format!("missing field '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<CircuitText> {
        super::super::parse(input)
    }

    #[test]
    fn test_parse_component() {
        let doc = parse("Composant: type=NotGate id=3 x=120 y=-45").unwrap();
        assert_eq!(doc.components.len(), 1);
        let c = &doc.components[0];
        assert_eq!(c.type_name, "NotGate");
        assert_eq!((c.id, c.x, c.y), (3, 120, -45));
        assert_eq!(c.value, None);
        assert_eq!(c.line, 1);
    }

    #[test]
    fn test_parse_constant_value() {
        let doc = parse("Composant: type=ConstantComponent id=1 x=0 y=0 value=1\n").unwrap();
        assert_eq!(doc.components[0].value, Some(true));

        let err = parse("Composant: type=ConstantComponent id=1 x=0 y=0 value=2").unwrap_err();
        assert!(matches!(err, GateSimError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_value_only_on_constants() {
        let err = parse("Composant: type=ConstantComponent id=1 x=0 y=0\nComposant: value=1 type=AndGate id=2 x=0 y=0\n")
            .unwrap_err();
        assert!(matches!(err, GateSimError::ParseError { line: 2, .. }));

        // Field order does not matter for constants either
        let doc = parse("Composant: value=0 type=ConstantComponent id=1 x=0 y=0").unwrap();
        assert_eq!(doc.components[0].value, Some(false));
    }

    #[test]
    fn test_records_separated_by_newlines() {
        let doc = parse("Composant: type=AndGate id=1 x=0 y=0\nComposant: type=OrGate id=2 x=0 y=0\n\nConnexion: from=1.0 to=2.0").unwrap();
        assert_eq!(doc.components.len(), 2);
        assert_eq!(doc.connections.len(), 1);
        assert_eq!(doc.connections[0].line, 4);
    }

    #[test]
    fn test_parse_connection() {
        let doc = parse("\n\nConnexion: from=4.0 to=7.1\n").unwrap();
        assert_eq!(
            doc.connections,
            vec![ConnectionRecord {
                from: Endpoint { component: 4, index: 0 },
                to: Endpoint { component: 7, index: 1 },
                line: 3,
            }]
        );
    }

    #[test]
    fn test_parse_with_comments() {
        let input = "# exported circuit\nComposant: type=AndGate id=1 x=0 y=0 # first gate\n";
        let doc = parse(input).unwrap();
        assert_eq!(doc.components.len(), 1);
        assert_eq!(doc.components[0].line, 2);
    }

    #[test]
    fn test_parse_errors() {
        // Unknown record tag
        assert!(matches!(
            parse("Wire: from=1.0 to=2.0"),
            Err(GateSimError::ParseError { line: 1, .. })
        ));
        // Missing field
        assert!(matches!(
            parse("Composant: type=AndGate id=1 x=0"),
            Err(GateSimError::ParseError { .. })
        ));
        // Duplicate field
        assert!(parse("Connexion: from=1.0 from=2.0 to=3.0").is_err());
        // Malformed endpoint
        assert!(parse("Connexion: from=1 to=2.0").is_err());
        // Two records on one line
        assert!(parse("Connexion: from=1.0 to=2.0 Connexion: from=1.0 to=2.0").is_err());
        // Negative id
        assert!(parse("Composant: type=AndGate id=-1 x=0 y=0").is_err());
    }
}
