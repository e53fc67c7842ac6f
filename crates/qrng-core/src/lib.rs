//! # qrng-core — Quantum Random Number Generation
//!
//! Builds a circuit that places qubits into uniform superposition, samples
//! measurements from it, and maps the observed bit patterns onto an integer
//! in a requested range.
//!
//! ## How a value is produced
//!
//! 1. For a requested range `[0, n)`, the smallest bit width k with
//!    2^k >= n is selected.
//! 2. A circuit of k Hadamards followed by a full measurement is built and
//!    run on the statevector sampling backend for a number of shots.
//! 3. Every distinct observed pattern is decoded to an integer; values of n
//!    and above are discarded.
//! 4. One of the distinct surviving values is returned, chosen uniformly.
//!
//! Because out-of-range patterns are discarded rather than folded back, a
//! run whose every trial decodes at or above n yields
//! [`QrngError::NoValidOutcomes`] instead of a value.
//!
//! ## Quick Start
//!
//! ```
//! use qrng_core::{Qrng, QrngConfig};
//!
//! # fn main() -> qrng_core::Result<()> {
//! let config = QrngConfig {
//!     shots: 256,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let qrng = Qrng::new(config)?;
//!
//! let roll = qrng.generate(6)?;
//! assert!(roll < 6);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod circuit;
pub mod error;
pub mod generator;
pub mod histogram;
pub mod simulator;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use circuit::{bit_width, Instruction, QuantumCircuit};
pub use error::{QrngError, Result};
pub use generator::{random_number, Qrng, QrngConfig};
pub use histogram::Histogram;
pub use simulator::{SimConfig, SimulationResult, Simulator};
pub use state::{QuantumState, MAX_QUBITS};
pub use types::{BitPattern, Counts};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    //! Convenient imports for common use cases.
    pub use crate::circuit::{bit_width, QuantumCircuit};
    pub use crate::error::{QrngError, Result};
    pub use crate::generator::{random_number, Qrng, QrngConfig};
    pub use crate::simulator::{SimConfig, SimulationResult, Simulator};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
