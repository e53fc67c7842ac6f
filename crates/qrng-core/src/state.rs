//! Real-amplitude statevector for Hadamard-only sampling circuits.
//!
//! The sampling workload prepares each qubit with a Hadamard and measures at
//! the end, so every amplitude stays real throughout. The register holds the
//! full 2^k amplitude vector; this caps k well below what the instruction
//! format allows.

use std::f64::consts::FRAC_1_SQRT_2;

use ndarray::Array1;
use rand::Rng;

use crate::error::{QrngError, Result};

/// Largest register the statevector backend will allocate (2^20 amplitudes).
pub const MAX_QUBITS: usize = 20;

/// Real-amplitude state of a qubit register, indexed by basis state.
#[derive(Debug, Clone)]
pub struct QuantumState {
    num_qubits: usize,
    amplitudes: Array1<f64>,
}

impl QuantumState {
    /// Create the register in |0...0>.
    ///
    /// # Errors
    ///
    /// [`QrngError::CircuitTooLarge`] above [`MAX_QUBITS`];
    /// [`QrngError::InvalidParameter`] for an empty register.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QrngError::invalid_parameter(
                "num_qubits",
                "must be at least 1",
            ));
        }
        if num_qubits > MAX_QUBITS {
            return Err(QrngError::CircuitTooLarge {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let mut amplitudes = Array1::zeros(1usize << num_qubits);
        amplitudes[0] = 1.0;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Apply a Hadamard gate to `qubit`.
    ///
    /// H = 1/sqrt(2) * [[1, 1], [1, -1]], applied to every amplitude pair
    /// that differs only in the target qubit's bit.
    pub fn apply_hadamard(&mut self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(QrngError::qubit_out_of_range(qubit, self.num_qubits));
        }

        let mask = 1usize << qubit;
        for index in 0..self.amplitudes.len() {
            if index & mask == 0 {
                let partner = index | mask;
                let a0 = self.amplitudes[index];
                let a1 = self.amplitudes[partner];
                self.amplitudes[index] = FRAC_1_SQRT_2 * (a0 + a1);
                self.amplitudes[partner] = FRAC_1_SQRT_2 * (a0 - a1);
            }
        }

        // Normalize to handle numerical precision
        let norm: f64 = self.amplitudes.iter().map(|a| a * a).sum::<f64>().sqrt();
        if norm > 1e-10 {
            self.amplitudes /= norm;
        }

        Ok(())
    }

    /// Probability of each basis outcome.
    pub fn probabilities(&self) -> Array1<f64> {
        self.amplitudes.mapv(|a| a * a)
    }

    /// Draw one basis outcome according to the current distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let draw: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            cumulative += amplitude * amplitude;
            if draw < cumulative {
                return index as u64;
            }
        }
        // Floating-point tail: the cumulative sum fell short of 1.
        (self.amplitudes.len() - 1) as u64
    }
}
