//! Circuit descriptions for uniform-superposition sampling.
//!
//! A [`QuantumCircuit`] here is an abstract instruction list, not an executing
//! object; the [`Simulator`](crate::simulator::Simulator) interprets it. The
//! only gate is the Hadamard, which is all a uniform sampler needs: k
//! Hadamards on |0...0> followed by a full measurement yield k independent
//! fair coin flips.

use serde::{Deserialize, Serialize};

use crate::error::{QrngError, Result};

/// One operation in a sampling circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Hadamard gate: places the target qubit into an equal superposition of
    /// |0> and |1>.
    Hadamard {
        /// Target qubit index.
        qubit: usize,
    },
    /// Structural marker separating state preparation from measurement.
    Barrier,
    /// Projective measurement of a qubit into a classical bit.
    Measure {
        /// Measured qubit index.
        qubit: usize,
        /// Classical bit receiving the outcome.
        clbit: usize,
    },
}

/// Abstract description of a qubit register, a classical register, and the
/// instructions applied to them.
///
/// Builder methods chain and defer validation; index ranges are checked by
/// [`validate`](QuantumCircuit::validate), which the simulator calls before
/// executing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumCircuit {
    num_qubits: usize,
    num_clbits: usize,
    instructions: Vec<Instruction>,
}

impl QuantumCircuit {
    /// Create an empty circuit over `num_qubits` qubits and `num_clbits`
    /// classical bits.
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            instructions: Vec::new(),
        }
    }

    /// Build the uniform sampling circuit for a range of `num_outcomes`
    /// possible results.
    ///
    /// Returns the circuit together with its bit width k: every qubit is
    /// placed into superposition with a Hadamard, a barrier separates
    /// preparation from readout, and each qubit is measured into its
    /// matching classical bit.
    ///
    /// # Errors
    ///
    /// [`QrngError::InvalidOutcomeCount`] when `num_outcomes` is zero.
    pub fn qrng(num_outcomes: u64) -> Result<(Self, u32)> {
        let k = bit_width(num_outcomes)?;
        let mut circuit = Self::new(k as usize, k as usize);
        for qubit in 0..k as usize {
            circuit.h(qubit);
        }
        circuit.barrier();
        circuit.measure_all();
        Ok((circuit, k))
    }

    /// Append a Hadamard gate on `qubit`.
    pub fn h(&mut self, qubit: usize) -> &mut Self {
        self.instructions.push(Instruction::Hadamard { qubit });
        self
    }

    /// Append a barrier.
    pub fn barrier(&mut self) -> &mut Self {
        self.instructions.push(Instruction::Barrier);
        self
    }

    /// Append a measurement of `qubit` into `clbit`.
    pub fn measure(&mut self, qubit: usize, clbit: usize) -> &mut Self {
        self.instructions.push(Instruction::Measure { qubit, clbit });
        self
    }

    /// Measure every qubit into the classical bit of the same index.
    pub fn measure_all(&mut self) -> &mut Self {
        for index in 0..self.num_qubits.min(self.num_clbits) {
            self.measure(index, index);
        }
        self
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of classical bits in the register.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// The instruction list in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Whether the circuit contains at least one measurement.
    pub fn has_measurements(&self) -> bool {
        self.instructions
            .iter()
            .any(|instruction| matches!(instruction, Instruction::Measure { .. }))
    }

    /// Iterate over `(qubit, clbit)` measurement pairs in circuit order.
    pub fn measurements(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.instructions.iter().filter_map(|instruction| match *instruction {
            Instruction::Measure { qubit, clbit } => Some((qubit, clbit)),
            _ => None,
        })
    }

    /// Check register sizes and instruction indices.
    pub fn validate(&self) -> Result<()> {
        if self.num_qubits == 0 {
            return Err(QrngError::invalid_parameter(
                "num_qubits",
                "must be at least 1",
            ));
        }
        for instruction in &self.instructions {
            match *instruction {
                Instruction::Hadamard { qubit } if qubit >= self.num_qubits => {
                    return Err(QrngError::qubit_out_of_range(qubit, self.num_qubits));
                }
                Instruction::Measure { qubit, clbit } => {
                    if qubit >= self.num_qubits {
                        return Err(QrngError::qubit_out_of_range(qubit, self.num_qubits));
                    }
                    if clbit >= self.num_clbits {
                        return Err(QrngError::clbit_out_of_range(clbit, self.num_clbits));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Smallest k such that 2^k >= `num_outcomes`, never less than 1.
///
/// Computed by incremental doubling from k = 1, so one- and two-outcome
/// requests both use a single qubit.
///
/// # Errors
///
/// [`QrngError::InvalidOutcomeCount`] when `num_outcomes` is zero; the range
/// [0, 0) has nothing to sample.
pub fn bit_width(num_outcomes: u64) -> Result<u32> {
    if num_outcomes == 0 {
        return Err(QrngError::InvalidOutcomeCount { actual: 0 });
    }
    let mut k: u32 = 1;
    while (1u128 << k) < u128::from(num_outcomes) {
        k += 1;
    }
    Ok(k)
}
