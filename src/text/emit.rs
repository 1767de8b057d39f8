//! Text export.

use std::fmt::Write;

use super::parser::{COMPONENT_TAG, CONNECTION_TAG};
use crate::circuit::Circuit;

/// Serialize a circuit: every component line first, then every connection
/// line, each in the circuit's iteration order.
pub fn emit(circuit: &Circuit) -> String {
    let mut out = String::new();

    for component in circuit.components() {
        let kind = component.kind();
        let pos = component.position();
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "{}: type={} id={} x={} y={}",
            COMPONENT_TAG,
            kind.type_name(),
            component.id().0,
            pos.x,
            pos.y
        );
        if let Some(value) = kind.constant_value() {
            let _ = write!(out, " value={}", u8::from(value));
        }
        out.push('\n');
    }

    for (_, wire) in circuit.wires() {
        let (from, to) = (wire.start(), wire.end());
        let _ = writeln!(
            out,
            "{}: from={}.{} to={}.{}",
            CONNECTION_TAG, from.component.0, from.index, to.component.0, to.index
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::circuit::{Circuit, PointRef, Position};
    use crate::components::GateKind;

    #[test]
    fn test_emit_order_and_format() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, Position::new(10, 20));
        let and = c.add_component(GateKind::And, Position::new(-30, 5));
        c.connect(PointRef::output(one, 0), PointRef::input(and, 1))
            .unwrap();

        assert_eq!(
            c.export_text(),
            "Composant: type=ConstantComponent id=1 x=10 y=20 value=1\n\
             Composant: type=AndGate id=2 x=-30 y=5\n\
             Connexion: from=1.0 to=2.1\n"
        );
    }

    #[test]
    fn test_emit_empty() {
        assert_eq!(Circuit::new().export_text(), "");
    }
}
