//! Measurement sampling backend for circuit descriptions.
//!
//! The execution model is deliberately narrow: gates are applied to |0...0>,
//! then each shot draws one independent basis sample from the final
//! distribution and routes the measured qubits into classical bits.
//! Measurements are terminal; an instruction appearing after a measurement
//! still acts on the pre-measurement state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::circuit::{Instruction, QuantumCircuit};
use crate::error::{QrngError, Result};
use crate::state::QuantumState;
use crate::types::Counts;

/// Execution parameters for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of independent trials to draw.
    pub shots: usize,
    /// Seed for the measurement RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            shots: 1,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Validate the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(QrngError::invalid_parameter("shots", "must be at least 1"));
        }
        Ok(())
    }
}

/// Result of simulating a circuit for a number of shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Observed bit patterns and their frequencies.
    pub counts: Counts,
    /// Number of trials drawn.
    pub shots: usize,
}

/// Statevector sampling backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Run `circuit` for a single shot with an entropy-seeded RNG.
    pub fn run(circuit: &QuantumCircuit) -> Result<SimulationResult> {
        Self::run_with_config(circuit, &SimConfig::default())
    }

    /// Run `circuit` under explicit execution parameters.
    ///
    /// # Errors
    ///
    /// [`QrngError::NoMeasurements`] if the circuit never measures,
    /// [`QrngError::CircuitTooLarge`] if the register exceeds the statevector
    /// cap, and index errors from [`QuantumCircuit::validate`].
    pub fn run_with_config(
        circuit: &QuantumCircuit,
        config: &SimConfig,
    ) -> Result<SimulationResult> {
        config.validate()?;
        circuit.validate()?;
        if !circuit.has_measurements() {
            return Err(QrngError::NoMeasurements);
        }
        if circuit.num_clbits() > 64 {
            return Err(QrngError::invalid_parameter(
                "num_clbits",
                "at most 64 classical bits supported",
            ));
        }

        let mut state = QuantumState::new(circuit.num_qubits())?;
        let mut measurements: Vec<(usize, usize)> = Vec::new();
        for instruction in circuit.instructions() {
            match *instruction {
                Instruction::Hadamard { qubit } => state.apply_hadamard(qubit)?,
                Instruction::Barrier => {}
                Instruction::Measure { qubit, clbit } => measurements.push((qubit, clbit)),
            }
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut counts = Counts::new(circuit.num_clbits() as u32);
        for _ in 0..config.shots {
            let basis = state.sample(&mut rng);
            let mut pattern = 0u64;
            for &(qubit, clbit) in &measurements {
                let bit = (basis >> qubit) & 1;
                pattern |= bit << clbit;
            }
            counts.record(pattern);
        }

        debug!(
            shots = config.shots,
            distinct = counts.distinct(),
            "sampling complete"
        );

        Ok(SimulationResult {
            counts,
            shots: config.shots,
        })
    }
}
