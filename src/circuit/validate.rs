//! Circuit validation.

use crate::error::{GateSimError, Result};

use super::Circuit;

/// Validate the structural invariants of a circuit.
///
/// Checks:
/// - Every wire runs from an existing output point to an existing input point
/// - Both endpoints point back at the wire
/// - No connection point refers to a wire that is not in the circuit
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    for (id, wire) in circuit.wires() {
        if wire.start().is_input() || !wire.end().is_input() {
            return Err(GateSimError::topology(format!(
                "wire {id} runs {} -> {}",
                wire.start(),
                wire.end()
            )));
        }

        for endpoint in wire.endpoints() {
            let point = circuit.point(endpoint).map_err(|e| {
                GateSimError::topology(format!("wire {id} has a dangling endpoint: {e}"))
            })?;
            if point.wire() != Some(id) {
                return Err(GateSimError::topology(format!(
                    "point {endpoint} does not refer back to wire {id}"
                )));
            }
        }
    }

    for component in circuit.components() {
        for point in component.points() {
            if let Some(wire) = point.wire() {
                if circuit.wire(wire).is_none() {
                    return Err(GateSimError::topology(format!(
                        "point {} refers to missing wire {wire}",
                        point.id()
                    )));
                }
            }
        }
    }

    Ok(())
}
