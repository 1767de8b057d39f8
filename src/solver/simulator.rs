//! Main simulator interface.

use tracing::{debug, trace, warn};

use crate::circuit::Circuit;
use crate::error::{GateSimError, Result};

use super::{CancelToken, DEFAULT_MAX_ITERATIONS};

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Maximum relaxation rounds before the circuit is declared unstable.
    pub max_iterations: usize,
    /// Optional external cancellation.
    pub cancel: Option<CancelToken>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            cancel: None,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of relaxation rounds.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Let `token` stop the simulation between rounds.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Outcome of a successful simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    /// Rounds executed, including the final round in which nothing changed.
    pub iterations: usize,
}

/// Fixed-point simulator for gate circuits.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with custom configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Reset every wire to `Nothing` and relax until no wire changes.
    ///
    /// Fails with [`GateSimError::Unstable`] if `max_iterations` rounds all
    /// changed something. On failure the wires hold the last round's values.
    pub fn run(&self, circuit: &mut Circuit) -> Result<SimulationReport> {
        self.run_with_progress(circuit, |_, _| {})
    }

    /// Like [`Simulator::run`], calling `on_round(round, changed)` after
    /// every completed round.
    pub fn run_with_progress<F>(
        &self,
        circuit: &mut Circuit,
        mut on_round: F,
    ) -> Result<SimulationReport>
    where
        F: FnMut(usize, usize),
    {
        let max_iterations = self.config.max_iterations;
        if max_iterations == 0 {
            return Err(GateSimError::InvalidSimulationParam {
                message: "max_iterations must be at least 1".to_string(),
            });
        }

        circuit.reset_wires();
        let wire_count = circuit.wire_count();

        for iter in 0..max_iterations {
            if self.is_cancelled() {
                warn!(iterations = iter, "simulation cancelled");
                return Err(GateSimError::Cancelled { iterations: iter });
            }

            let mut changed = 0usize;
            for index in 0..wire_count {
                if circuit.refresh_wire(index) {
                    changed += 1;
                }
            }
            trace!(round = iter + 1, changed, "relaxation round");
            on_round(iter + 1, changed);

            if changed == 0 {
                debug!(iterations = iter + 1, wires = wire_count, "circuit stable");
                return Ok(SimulationReport {
                    iterations: iter + 1,
                });
            }
        }

        warn!(iterations = max_iterations, "no fixed point reached");
        Err(GateSimError::Unstable {
            iterations: max_iterations,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.config
            .cancel
            .as_ref()
            .is_some_and(CancelToken::is_cancelled)
    }
}
