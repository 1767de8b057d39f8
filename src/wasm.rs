//! WASM bindings for Gatesim Core.
//!
//! This module provides JavaScript-friendly bindings so a browser-based
//! editor can build a circuit, simulate it and read wire values back for
//! display.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'gatesim_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit();
//! const one = circuit.add_component('ConstantComponent', 1, 40, 40);
//! const not = circuit.add_component('NotGate', 0, 160, 40);
//! const wire = circuit.connect(one, 0, not, 0);
//!
//! circuit.simulate();
//! console.log(circuit.wire_value(wire)); // "True"
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, ComponentId, PointRef, Position, WireId};
use crate::components::GateKind;
use crate::error::GateSimError;
use crate::solver::SimulatorConfig;

fn to_js(e: GateSimError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible circuit editor and simulator.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
    config: SimulatorConfig,
}

impl Default for WasmCircuit {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Create an empty circuit.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuit {
        WasmCircuit {
            circuit: Circuit::new(),
            config: SimulatorConfig::default(),
        }
    }

    /// Create a circuit from its text form.
    #[wasm_bindgen]
    pub fn from_text(text: &str) -> Result<WasmCircuit, JsValue> {
        let circuit = Circuit::from_text(text).map_err(to_js)?;
        Ok(WasmCircuit {
            circuit,
            config: SimulatorConfig::default(),
        })
    }

    /// Cap the number of relaxation rounds per simulation.
    #[wasm_bindgen]
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.config.max_iterations = max_iterations;
    }

    /// Add a component by text-format type name (`AndGate`, `NotGate`, ...).
    ///
    /// `value` selects the output of a `ConstantComponent` and is ignored
    /// otherwise.
    #[wasm_bindgen]
    pub fn add_component(&mut self, type_name: &str, value: u8, x: i32, y: i32) -> Result<u32, JsValue> {
        let kind = GateKind::from_type_name(type_name, value != 0).ok_or_else(|| {
            to_js(GateSimError::WasmError {
                message: format!("unknown component type '{}'", type_name),
            })
        })?;
        Ok(self.circuit.add_component(kind, Position::new(x, y)).0)
    }

    /// Remove a component and its wires. Returns `false` if it did not exist.
    #[wasm_bindgen]
    pub fn remove_component(&mut self, id: u32) -> bool {
        self.circuit.remove_component(ComponentId(id)).is_some()
    }

    /// Wire output `output` of `from` to input `input` of `to`.
    #[wasm_bindgen]
    pub fn connect(&mut self, from: u32, output: usize, to: u32, input: usize) -> Result<u32, JsValue> {
        let wire = self
            .circuit
            .connect(
                PointRef::output(ComponentId(from), output),
                PointRef::input(ComponentId(to), input),
            )
            .map_err(to_js)?;
        Ok(wire.0)
    }

    /// Remove a wire.
    #[wasm_bindgen]
    pub fn disconnect(&mut self, wire: u32) -> Result<(), JsValue> {
        self.circuit.disconnect(WireId(wire)).map(|_| ()).map_err(to_js)
    }

    /// Run the simulation. Returns the number of rounds used.
    #[wasm_bindgen]
    pub fn simulate(&mut self) -> Result<usize, JsValue> {
        let report = self.circuit.simulate_with(&self.config).map_err(to_js)?;
        Ok(report.iterations)
    }

    /// Current value of a wire (`"Nothing"`, `"False"`, `"True"` or `"Err"`).
    ///
    /// Returns `undefined` if the wire doesn't exist.
    #[wasm_bindgen]
    pub fn wire_value(&self, wire: u32) -> Option<String> {
        self.circuit.wire_value(WireId(wire)).map(|v| v.to_string())
    }

    /// Whether an LED is lit. Returns `undefined` for anything but an LED.
    #[wasm_bindgen]
    pub fn led_lit(&self, id: u32) -> Option<bool> {
        self.circuit.led_lit(ComponentId(id))
    }

    /// Serialize to the text format.
    #[wasm_bindgen]
    pub fn export_text(&self) -> String {
        self.circuit.export_text()
    }

    /// Replace the circuit with one read from text. Leaves it unchanged on error.
    #[wasm_bindgen]
    pub fn import_text(&mut self, text: &str) -> Result<(), JsValue> {
        self.circuit.import_text(text).map_err(to_js)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default relaxation round cap.
#[wasm_bindgen]
pub fn default_max_iterations() -> usize {
    crate::DEFAULT_MAX_ITERATIONS
}
