//! Circuit graph structure.

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use super::point::ConnectionPoint;
use super::types::{ComponentId, PointRef, Position, WireId};
use super::wire::Wire;
use crate::components::{Component, GateKind};
use crate::error::{GateSimError, Result};
use crate::logic::LogicValue;
use crate::solver::{SimulationReport, Simulator, SimulatorConfig};
use crate::text::{self, CircuitText};

/// A network of gates and the wires between them.
///
/// Components and wires live in insertion-ordered tables keyed by id.
/// Connection points refer to wires by id and wires refer to points by
/// [`PointRef`], so neither side owns the other.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    components: IndexMap<ComponentId, Component>,
    wires: IndexMap<WireId, Wire>,
    next_component: u32,
    next_wire: u32,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from a parsed text description.
    ///
    /// Nothing is returned unless every record is valid: unknown types,
    /// duplicate ids, dangling references and illegal connections all fail
    /// the whole build.
    pub fn from_ast(ast: CircuitText) -> Result<Self> {
        let mut circuit = Circuit::new();

        for record in &ast.components {
            let kind = GateKind::from_type_name(&record.type_name, record.value.unwrap_or(false))
                .ok_or_else(|| GateSimError::UnknownComponentType {
                    component_type: record.type_name.clone(),
                    line: record.line,
                })?;

            let id = ComponentId(record.id);
            if !circuit.insert_component(id, kind, Position::new(record.x, record.y)) {
                return Err(GateSimError::DuplicateComponent {
                    id: record.id,
                    line: record.line,
                });
            }
        }

        for record in &ast.connections {
            for endpoint in [record.from, record.to] {
                if !circuit.components.contains_key(&ComponentId(endpoint.component)) {
                    return Err(GateSimError::UndefinedComponent {
                        id: endpoint.component,
                        line: record.line,
                    });
                }
            }

            let from = PointRef::output(ComponentId(record.from.component), record.from.index);
            let to = PointRef::input(ComponentId(record.to.component), record.to.index);
            circuit
                .connect(from, to)
                .map_err(|e| e.at_line(record.line))?;
        }

        Ok(circuit)
    }

    /// Parse and build a circuit from its text form.
    pub fn from_text(input: &str) -> Result<Self> {
        Self::from_ast(text::parse(input)?)
    }

    /// Replace this circuit with the one described by `input`.
    ///
    /// On error the current circuit is left exactly as it was.
    pub fn import_text(&mut self, input: &str) -> Result<()> {
        let circuit = Self::from_text(input)?;
        tracing::info!(
            components = circuit.component_count(),
            wires = circuit.wire_count(),
            "imported circuit"
        );
        *self = circuit;
        Ok(())
    }

    /// Serialize this circuit to its text form.
    pub fn export_text(&self) -> String {
        text::emit(self)
    }

    // ============ Editing ============

    /// Add a component with fresh connection points. Never fails.
    pub fn add_component(&mut self, kind: GateKind, position: Position) -> ComponentId {
        let id = self.fresh_component_id();
        self.insert_component(id, kind, position);
        debug!(%id, %kind, "added component");
        id
    }

    /// Lowest free id at or above the counter, wrapping past `u32::MAX` to 1.
    fn fresh_component_id(&self) -> ComponentId {
        let mut candidate = self.next_component.max(1);
        while self.components.contains_key(&ComponentId(candidate)) {
            candidate = candidate.checked_add(1).unwrap_or(1);
        }
        ComponentId(candidate)
    }

    /// Insert a component under `id`. Returns `false` if the id is taken.
    fn insert_component(&mut self, id: ComponentId, kind: GateKind, position: Position) -> bool {
        match self.components.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Component::new(id, kind, position));
                self.next_component = self.next_component.max(id.0.saturating_add(1));
                true
            }
        }
    }

    /// Remove a component and every wire attached to it.
    ///
    /// Returns `None` if the id is not in the circuit.
    pub fn remove_component(&mut self, id: ComponentId) -> Option<Component> {
        if !self.components.contains_key(&id) {
            return None;
        }

        for wire in self.wires_of(id) {
            // Incident wires are known to exist
            let _ = self.disconnect(wire);
        }

        let removed = self.components.shift_remove(&id);
        debug!(%id, "removed component");
        removed
    }

    /// Move a component to a new position.
    pub fn move_component(&mut self, id: ComponentId, position: Position) -> Result<()> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(GateSimError::ComponentNotFound { id })?;
        component.set_position(position);
        Ok(())
    }

    /// Wire an output point to an input point.
    ///
    /// Fails if the directions are wrong, if either point is missing or
    /// already wired, or if both points belong to the same component.
    pub fn connect(&mut self, from: PointRef, to: PointRef) -> Result<WireId> {
        let wire = Wire::new(from, to)?;

        let start = self.point(from)?;
        let end = self.point(to)?;

        if from.component == to.component {
            return Err(GateSimError::SelfConnection {
                component: from.component,
            });
        }

        for point in [start, end] {
            if point.is_connected() {
                return Err(GateSimError::AlreadyConnected { point: point.id() });
            }
        }

        let id = self.fresh_wire_id();
        self.next_wire = id.0.wrapping_add(1);

        for point in [from, to] {
            if let Some(p) = self.point_mut(point) {
                p.attach(id);
            }
        }
        self.wires.insert(id, wire);

        debug!(%id, %from, %to, "connected wire");
        Ok(id)
    }

    fn fresh_wire_id(&self) -> WireId {
        let mut candidate = self.next_wire;
        while self.wires.contains_key(&WireId(candidate)) {
            candidate = candidate.wrapping_add(1);
        }
        WireId(candidate)
    }

    /// Detach a wire from both endpoints and remove it.
    pub fn disconnect(&mut self, id: WireId) -> Result<Wire> {
        let wire = self
            .wires
            .shift_remove(&id)
            .ok_or(GateSimError::WireNotFound { id })?;

        for point in wire.endpoints() {
            if let Some(p) = self.point_mut(point) {
                p.detach();
            }
        }

        debug!(%id, "disconnected wire");
        Ok(wire)
    }

    // ============ Evaluation ============

    /// Find a fixed point with the default configuration.
    pub fn simulate(&mut self) -> Result<SimulationReport> {
        self.simulate_with(&SimulatorConfig::default())
    }

    /// Find a fixed point with an explicit configuration.
    pub fn simulate_with(&mut self, config: &SimulatorConfig) -> Result<SimulationReport> {
        Simulator::with_config(config.clone()).run(self)
    }

    /// Run one gate: read its inputs and write its output wire.
    ///
    /// Returns the value written, or `None` if the output is unwired.
    pub fn compute(&mut self, id: ComponentId) -> Result<Option<LogicValue>> {
        let component = self
            .components
            .get(&id)
            .ok_or(GateSimError::ComponentNotFound { id })?;

        let value = component.kind().evaluate(&self.input_values(component));
        let Some(wire) = component.output(0).and_then(ConnectionPoint::wire) else {
            return Ok(None);
        };

        if let Some(w) = self.wires.get_mut(&wire) {
            w.set_value(value);
        }
        Ok(Some(value))
    }

    /// Current values of a component's inputs; unwired inputs read `Nothing`.
    pub fn input_values(&self, component: &Component) -> Vec<LogicValue> {
        component
            .inputs()
            .iter()
            .map(|p| self.connected_value(p))
            .collect()
    }

    fn connected_value(&self, point: &ConnectionPoint) -> LogicValue {
        point
            .wire()
            .and_then(|w| self.wires.get(&w))
            .map_or(LogicValue::Nothing, Wire::value)
    }

    /// Set every wire back to `Nothing`.
    pub(crate) fn reset_wires(&mut self) {
        for wire in self.wires.values_mut() {
            wire.set_value(LogicValue::Nothing);
        }
    }

    /// Recompute the wire at `index` (insertion order) from its driver.
    /// Returns whether the value changed.
    pub(crate) fn refresh_wire(&mut self, index: usize) -> bool {
        let Some((_, wire)) = self.wires.get_index(index) else {
            return false;
        };

        let next = match self.components.get(&wire.start().component) {
            Some(driver) => LogicValue::Nothing.sup(driver.kind().evaluate(&self.input_values(driver))),
            None => LogicValue::Nothing,
        };

        match self.wires.get_index_mut(index) {
            Some((_, wire)) if wire.value() != next => {
                wire.set_value(next);
                true
            }
            _ => false,
        }
    }

    // ============ Queries ============

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.wires.get(&id)
    }

    /// Components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Wires in insertion order, with their ids.
    pub fn wires(&self) -> impl Iterator<Item = (WireId, &Wire)> {
        self.wires.iter().map(|(id, w)| (*id, w))
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up a connection point.
    pub fn point(&self, point: PointRef) -> Result<&ConnectionPoint> {
        let component = self
            .components
            .get(&point.component)
            .ok_or(GateSimError::ComponentNotFound { id: point.component })?;
        component
            .point(point)
            .ok_or(GateSimError::PointNotFound { point })
    }

    fn point_mut(&mut self, point: PointRef) -> Option<&mut ConnectionPoint> {
        self.components.get_mut(&point.component)?.point_mut(point)
    }

    /// Wires attached to any point of `id`, in wire order.
    pub fn wires_of(&self, id: ComponentId) -> Vec<WireId> {
        self.wires
            .iter()
            .filter(|(_, w)| w.touches(id))
            .map(|(wid, _)| *wid)
            .collect()
    }

    /// Current value of a wire.
    pub fn wire_value(&self, id: WireId) -> Option<LogicValue> {
        self.wires.get(&id).map(Wire::value)
    }

    /// Value seen at a connection point: its wire's value, or `Nothing`.
    pub fn point_value(&self, point: PointRef) -> Result<LogicValue> {
        Ok(self.connected_value(self.point(point)?))
    }

    /// Whether an LED is lit. `None` if `id` is not an LED in this circuit.
    pub fn led_lit(&self, id: ComponentId) -> Option<bool> {
        let component = self.components.get(&id)?;
        if component.kind() != GateKind::Led {
            return None;
        }
        let input = component.input(0)?;
        Some(self.connected_value(input) == LogicValue::True)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::validate_circuit;
    use crate::logic::LogicValue::{Err, False, Nothing, True};

    fn pos() -> Position {
        Position::default()
    }

    #[test]
    fn test_add_component_allocates_ids() {
        let mut c = Circuit::new();
        let a = c.add_component(GateKind::And, pos());
        let b = c.add_component(GateKind::Not, pos());
        assert_eq!(a, ComponentId(1));
        assert_eq!(b, ComponentId(2));
        assert_eq!(c.component_count(), 2);

        c.remove_component(b);
        let d = c.add_component(GateKind::Or, pos());
        assert_ne!(d, a);
        assert_ne!(d, b);
    }

    #[test]
    fn test_add_component_after_max_id_skips_taken_ids() {
        let mut c = Circuit::from_text(
            "Composant: type=ConstantComponent id=1 x=0 y=0\n\
             Composant: type=NotGate id=4294967295 x=0 y=0\n\
             Connexion: from=1.0 to=4294967295.0\n",
        )
        .unwrap();

        let a = c.add_component(GateKind::And, pos());
        let b = c.add_component(GateKind::Or, pos());
        assert_eq!(a, ComponentId(2));
        assert_eq!(b, ComponentId(3));
        assert_eq!(c.component_count(), 4);
        assert_eq!(c.component(ComponentId(u32::MAX)).unwrap().kind(), GateKind::Not);
        validate_circuit(&c).unwrap();
    }

    #[test]
    fn test_insert_component_keeps_existing_entry() {
        let mut c = Circuit::new();
        let id = c.add_component(GateKind::Not, pos());
        assert!(!c.insert_component(id, GateKind::And, pos()));
        assert_eq!(c.component(id).unwrap().kind(), GateKind::Not);
    }

    #[test]
    fn test_wire_ids_wrap_without_collision() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, pos());
        let zero = c.add_component(GateKind::ConstFalse, pos());
        let and = c.add_component(GateKind::And, pos());
        c.next_wire = u32::MAX;

        let first = c
            .connect(PointRef::output(one, 0), PointRef::input(and, 0))
            .unwrap();
        let second = c
            .connect(PointRef::output(zero, 0), PointRef::input(and, 1))
            .unwrap();
        assert_eq!(first, WireId(u32::MAX));
        assert_eq!(second, WireId(0));
        assert_eq!(c.wire_count(), 2);
    }

    #[test]
    fn test_connect_attaches_both_ends() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, pos());
        let not = c.add_component(GateKind::Not, pos());

        let w = c
            .connect(PointRef::output(one, 0), PointRef::input(not, 0))
            .unwrap();

        assert_eq!(c.point(PointRef::output(one, 0)).unwrap().wire(), Some(w));
        assert_eq!(c.point(PointRef::input(not, 0)).unwrap().wire(), Some(w));
        assert_eq!(c.wire_value(w), Some(Nothing));
    }

    #[test]
    fn test_connect_rejects_wrong_directions() {
        let mut c = Circuit::new();
        let a = c.add_component(GateKind::And, pos());
        let b = c.add_component(GateKind::And, pos());

        let err = c
            .connect(PointRef::input(a, 0), PointRef::input(b, 0))
            .unwrap_err();
        assert!(matches!(err, GateSimError::InvalidDirection { .. }));

        let err = c
            .connect(PointRef::output(a, 0), PointRef::output(b, 0))
            .unwrap_err();
        assert!(matches!(err, GateSimError::InvalidDirection { .. }));
        assert_eq!(c.wire_count(), 0);
    }

    #[test]
    fn test_connect_rejects_self_connection() {
        let mut c = Circuit::new();
        let not = c.add_component(GateKind::Not, pos());

        let err = c
            .connect(PointRef::output(not, 0), PointRef::input(not, 0))
            .unwrap_err();
        assert!(matches!(err, GateSimError::SelfConnection { component } if component == not));
    }

    #[test]
    fn test_connect_rejects_busy_points() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, pos());
        let zero = c.add_component(GateKind::ConstFalse, pos());
        let and = c.add_component(GateKind::And, pos());

        c.connect(PointRef::output(one, 0), PointRef::input(and, 0))
            .unwrap();

        // Input already driven
        let err = c
            .connect(PointRef::output(zero, 0), PointRef::input(and, 0))
            .unwrap_err();
        assert!(matches!(err, GateSimError::AlreadyConnected { point } if point == PointRef::input(and, 0)));

        // Output already used
        let err = c
            .connect(PointRef::output(one, 0), PointRef::input(and, 1))
            .unwrap_err();
        assert!(matches!(err, GateSimError::AlreadyConnected { point } if point == PointRef::output(one, 0)));
    }

    #[test]
    fn test_connect_rejects_missing_points() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, pos());
        let not = c.add_component(GateKind::Not, pos());

        let err = c
            .connect(PointRef::output(one, 0), PointRef::input(not, 1))
            .unwrap_err();
        assert!(matches!(err, GateSimError::PointNotFound { .. }));

        let err = c
            .connect(PointRef::output(ComponentId(99), 0), PointRef::input(not, 0))
            .unwrap_err();
        assert!(matches!(err, GateSimError::ComponentNotFound { id } if id == ComponentId(99)));
    }

    #[test]
    fn test_disconnect_clears_endpoints() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, pos());
        let not = c.add_component(GateKind::Not, pos());
        let w = c
            .connect(PointRef::output(one, 0), PointRef::input(not, 0))
            .unwrap();

        c.disconnect(w).unwrap();
        assert_eq!(c.wire_count(), 0);
        assert!(!c.point(PointRef::output(one, 0)).unwrap().is_connected());
        assert!(!c.point(PointRef::input(not, 0)).unwrap().is_connected());

        assert!(matches!(c.disconnect(w).unwrap_err(), GateSimError::WireNotFound { .. }));
    }

    #[test]
    fn test_remove_component_cascades() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, pos());
        let not = c.add_component(GateKind::Not, pos());
        let led = c.add_component(GateKind::Led, pos());
        c.connect(PointRef::output(one, 0), PointRef::input(not, 0))
            .unwrap();
        c.connect(PointRef::output(not, 0), PointRef::input(led, 0))
            .unwrap();

        let removed = c.remove_component(not).unwrap();
        assert_eq!(removed.kind(), GateKind::Not);
        assert_eq!(c.wire_count(), 0);
        assert!(!c.point(PointRef::output(one, 0)).unwrap().is_connected());
        assert!(!c.point(PointRef::input(led, 0)).unwrap().is_connected());

        // Idempotent
        assert!(c.remove_component(not).is_none());
        assert_eq!(c.component_count(), 2);
    }

    #[test]
    fn test_compute_writes_output_wire() {
        let mut c = Circuit::new();
        let one = c.add_component(GateKind::ConstTrue, pos());
        let not = c.add_component(GateKind::Not, pos());
        let led = c.add_component(GateKind::Led, pos());
        let w1 = c
            .connect(PointRef::output(one, 0), PointRef::input(not, 0))
            .unwrap();
        let w2 = c
            .connect(PointRef::output(not, 0), PointRef::input(led, 0))
            .unwrap();

        // Input still empty
        assert_eq!(c.compute(not).unwrap(), Some(Err));
        assert_eq!(c.wire_value(w2), Some(Err));

        assert_eq!(c.compute(one).unwrap(), Some(True));
        assert_eq!(c.wire_value(w1), Some(True));
        assert_eq!(c.compute(not).unwrap(), Some(False));
        assert_eq!(c.point_value(PointRef::input(led, 0)).unwrap(), False);

        // LEDs have nothing to drive
        assert_eq!(c.compute(led).unwrap(), None);
        assert_eq!(c.led_lit(led), Some(false));
        assert_eq!(c.led_lit(not), None);
    }

    #[test]
    fn test_compute_unwired_output_is_noop() {
        let mut c = Circuit::new();
        let and = c.add_component(GateKind::And, pos());
        assert_eq!(c.compute(and).unwrap(), None);
        assert!(c.compute(ComponentId(42)).is_err());
    }

    #[test]
    fn test_move_component() {
        let mut c = Circuit::new();
        let and = c.add_component(GateKind::And, Position::new(1, 2));
        c.move_component(and, Position::new(-5, 40)).unwrap();
        assert_eq!(c.component(and).unwrap().position(), Position::new(-5, 40));
        assert!(c.move_component(ComponentId(9), pos()).is_err());
    }
}
