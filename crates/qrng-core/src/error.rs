//! Error types for quantum random number generation.
//!
//! This module defines all error types that can occur during circuit
//! construction, measurement sampling, and outcome selection.

use thiserror::Error;

/// Result type alias for QRNG operations.
pub type Result<T> = std::result::Result<T, QrngError>;

/// Errors that can occur while building circuits, simulating measurements,
/// or selecting an outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrngError {
    /// Requested outcome count cannot form a non-empty range.
    #[error("invalid outcome count {actual}: must be at least 1")]
    InvalidOutcomeCount {
        /// Outcome count that was requested.
        actual: u64,
    },

    /// Invalid parameter value provided.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Reason why the parameter is invalid.
        reason: String,
    },

    /// Qubit index outside the circuit or state register.
    #[error("qubit {qubit} out of range for {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// Offending qubit index.
        qubit: usize,
        /// Size of the qubit register.
        num_qubits: usize,
    },

    /// Classical bit index outside the circuit register.
    #[error("classical bit {clbit} out of range for {num_clbits}-bit register")]
    ClbitOutOfRange {
        /// Offending classical bit index.
        clbit: usize,
        /// Size of the classical register.
        num_clbits: usize,
    },

    /// Circuit requires more qubits than the statevector backend supports.
    #[error("circuit uses {requested} qubits, backend supports at most {max}")]
    CircuitTooLarge {
        /// Qubits the circuit requires.
        requested: usize,
        /// Maximum the backend will allocate.
        max: usize,
    },

    /// Circuit contains no measurement instructions.
    #[error("circuit has no measurements: nothing to sample")]
    NoMeasurements,

    /// Every decoded trial fell outside the requested outcome range.
    #[error("no valid outcomes below {num_outcomes} observed in {shots} shot(s)")]
    NoValidOutcomes {
        /// Exclusive upper bound of the requested range.
        num_outcomes: u64,
        /// Number of trials that were drawn.
        shots: usize,
    },
}

impl QrngError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a qubit out-of-range error.
    pub fn qubit_out_of_range(qubit: usize, num_qubits: usize) -> Self {
        Self::QubitOutOfRange { qubit, num_qubits }
    }

    /// Create a classical bit out-of-range error.
    pub fn clbit_out_of_range(clbit: usize, num_clbits: usize) -> Self {
        Self::ClbitOutOfRange { clbit, num_clbits }
    }

    /// Create a no-valid-outcomes error.
    pub fn no_valid_outcomes(num_outcomes: u64, shots: usize) -> Self {
        Self::NoValidOutcomes {
            num_outcomes,
            shots,
        }
    }
}
