//! Connection points: typed terminals on a component.

use super::types::{ComponentId, Direction, PointRef, WireId};

/// A terminal on a component where at most one wire can attach.
///
/// The point does not own its wire; it only remembers the wire's id. The
/// circuit's wire table is the single owner of the wire and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPoint {
    id: PointRef,
    wire: Option<WireId>,
}

impl ConnectionPoint {
    pub(crate) fn new(component: ComponentId, direction: Direction, index: usize) -> Self {
        Self {
            id: PointRef {
                component,
                direction,
                index,
            },
            wire: None,
        }
    }

    /// Structural identity of this point.
    pub fn id(&self) -> PointRef {
        self.id
    }

    pub fn owner(&self) -> ComponentId {
        self.id.component
    }

    pub fn direction(&self) -> Direction {
        self.id.direction
    }

    pub fn is_input(&self) -> bool {
        self.id.is_input()
    }

    /// The attached wire, if any.
    pub fn wire(&self) -> Option<WireId> {
        self.wire
    }

    pub fn is_connected(&self) -> bool {
        self.wire.is_some()
    }

    pub(crate) fn attach(&mut self, wire: WireId) {
        debug_assert!(self.wire.is_none(), "point {} already wired", self.id);
        self.wire = Some(wire);
    }

    pub(crate) fn detach(&mut self) {
        self.wire = None;
    }
}
