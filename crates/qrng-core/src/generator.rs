//! Random number generation over a requested outcome range.
//!
//! Builds the uniform sampling circuit for a range, runs the measurement
//! backend for a number of shots, and selects one decoded value from the
//! trials that landed inside the range. Each call is independent; nothing is
//! carried across invocations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::circuit::QuantumCircuit;
use crate::error::{QrngError, Result};
use crate::histogram::Histogram;
use crate::simulator::{SimConfig, Simulator};
use crate::types::Counts;

/// Offset mixed into the user seed for the selection RNG, keeping the
/// measurement and selection streams distinct but jointly reproducible.
const SELECTION_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a random number generator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrngConfig {
    /// Number of measurement trials per generated value.
    pub shots: usize,
    /// Seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Print an ASCII histogram of the observed counts to stdout.
    pub visualize: bool,
}

impl Default for QrngConfig {
    fn default() -> Self {
        Self {
            shots: 1,
            seed: None,
            visualize: false,
        }
    }
}

impl QrngConfig {
    /// Config drawing `shots` trials per generated value.
    pub fn sampled(shots: usize) -> Self {
        Self {
            shots,
            ..Default::default()
        }
    }

    /// Validate the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(QrngError::invalid_parameter("shots", "must be at least 1"));
        }
        Ok(())
    }
}

/// Quantum random number generator.
///
/// Each call to [`generate`](Qrng::generate) builds a fresh circuit,
/// simulates it, and post-processes the counts; no state survives between
/// calls.
#[derive(Debug, Clone)]
pub struct Qrng {
    config: QrngConfig,
}

impl Qrng {
    /// Create a generator with the given configuration.
    pub fn new(config: QrngConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate a random integer in `[0, num_outcomes)`.
    ///
    /// Prepares `bit_width(num_outcomes)` qubits in uniform superposition,
    /// measures them for the configured number of shots, decodes every
    /// distinct observed pattern, and discards values of `num_outcomes` and
    /// above. One of the distinct surviving values is returned, chosen
    /// uniformly; observed frequencies do not weight the draw.
    ///
    /// # Errors
    ///
    /// [`QrngError::InvalidOutcomeCount`] if `num_outcomes` is zero,
    /// [`QrngError::CircuitTooLarge`] if the range needs more than
    /// [`MAX_QUBITS`](crate::state::MAX_QUBITS) qubits, and
    /// [`QrngError::NoValidOutcomes`] if every trial decoded outside the
    /// range. The latter is possible whenever `num_outcomes` is not a power
    /// of two; more shots make it exponentially unlikely.
    pub fn generate(&self, num_outcomes: u64) -> Result<u64> {
        let (circuit, width) = QuantumCircuit::qrng(num_outcomes)?;
        debug!(
            num_outcomes,
            bit_width = width,
            shots = self.config.shots,
            "built sampling circuit"
        );

        let sim_config = SimConfig {
            shots: self.config.shots,
            seed: self.config.seed,
        };
        let result = Simulator::run_with_config(&circuit, &sim_config)?;

        if self.config.visualize {
            println!("{}", Histogram::new(&result.counts));
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(SELECTION_SEED_OFFSET)),
            None => StdRng::from_entropy(),
        };
        let value = select_outcome(&result.counts, num_outcomes, self.config.shots, &mut rng)?;
        info!(value, num_outcomes, "selected outcome");
        Ok(value)
    }

    /// Get the configuration.
    pub fn config(&self) -> &QrngConfig {
        &self.config
    }
}

/// Pick one decoded value below `num_outcomes`, uniformly over the distinct
/// surviving patterns.
fn select_outcome<R: Rng + ?Sized>(
    counts: &Counts,
    num_outcomes: u64,
    shots: usize,
    rng: &mut R,
) -> Result<u64> {
    let valid: Vec<u64> = counts
        .distinct_values()
        .filter(|&value| value < num_outcomes)
        .collect();
    if valid.is_empty() {
        return Err(QrngError::no_valid_outcomes(num_outcomes, shots));
    }
    Ok(valid[rng.gen_range(0..valid.len())])
}

/// Generate one random integer in `[0, num_outcomes)` with default settings:
/// a single shot, entropy-seeded, no visualization.
pub fn random_number(num_outcomes: u64) -> Result<u64> {
    Qrng::new(QrngConfig::default())?.generate(num_outcomes)
}
