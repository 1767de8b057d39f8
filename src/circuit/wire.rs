//! Wires: directed edges from an output point to an input point.

use super::types::{ComponentId, PointRef};
use crate::error::{GateSimError, Result};
use crate::logic::LogicValue;

/// A wire carries the current value from its `start` (an output) to its
/// `end` (an input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    start: PointRef,
    end: PointRef,
    value: LogicValue,
}

impl Wire {
    /// Create a wire. Fails unless `start` is an output and `end` an input.
    pub fn new(start: PointRef, end: PointRef) -> Result<Self> {
        if start.is_input() || !end.is_input() {
            return Err(GateSimError::InvalidDirection {
                from: start,
                to: end,
            });
        }
        Ok(Self {
            start,
            end,
            value: LogicValue::Nothing,
        })
    }

    /// The driving output point.
    pub fn start(&self) -> PointRef {
        self.start
    }

    /// The driven input point.
    pub fn end(&self) -> PointRef {
        self.end
    }

    pub fn value(&self) -> LogicValue {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: LogicValue) {
        self.value = value;
    }

    /// All points this wire touches, driver first.
    pub fn endpoints(&self) -> [PointRef; 2] {
        [self.start, self.end]
    }

    /// Whether either endpoint belongs to `component`.
    pub fn touches(&self, component: ComponentId) -> bool {
        self.start.component == component || self.end.component == component
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wire_starts_empty() {
        let w = Wire::new(
            PointRef::output(ComponentId(1), 0),
            PointRef::input(ComponentId(2), 1),
        )
        .unwrap();
        assert_eq!(w.value(), LogicValue::Nothing);
        assert!(w.touches(ComponentId(1)));
        assert!(w.touches(ComponentId(2)));
        assert!(!w.touches(ComponentId(3)));
    }

    #[test]
    fn test_wrong_direction_rejected() {
        let out = PointRef::output(ComponentId(1), 0);
        let inp = PointRef::input(ComponentId(2), 0);

        assert!(matches!(
            Wire::new(inp, out),
            Err(GateSimError::InvalidDirection { .. })
        ));
        assert!(matches!(
            Wire::new(out, out),
            Err(GateSimError::InvalidDirection { .. })
        ));
        assert!(matches!(
            Wire::new(inp, inp),
            Err(GateSimError::InvalidDirection { .. })
        ));
    }
}
