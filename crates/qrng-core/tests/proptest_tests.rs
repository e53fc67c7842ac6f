//! Property-based tests using proptest.
//!
//! Verifies invariants that must hold across the whole input space: width
//! minimality, range containment, shot accounting, and seeded
//! reproducibility.

use proptest::prelude::*;
use qrng_core::{bit_width, Qrng, QrngConfig, QrngError, QuantumCircuit, SimConfig, Simulator};

proptest! {
    /// Property: 2^k covers the range and k never drops below 1.
    #[test]
    fn bit_width_covers_range(n in 1u64..=1_000_000) {
        let k = bit_width(n).unwrap();
        prop_assert!(k >= 1);
        prop_assert!((1u128 << k) >= u128::from(n), "2^{} < {}", k, n);
        if n >= 2 {
            prop_assert!((1u128 << (k - 1)) < u128::from(n), "width {} not minimal for {}", k, n);
        }
    }

    /// Property: bit width never decreases as the outcome count grows.
    #[test]
    fn bit_width_monotone(n in 1u64..1_000_000) {
        prop_assert!(bit_width(n).unwrap() <= bit_width(n + 1).unwrap());
    }

    /// Property: generation either returns a value inside [0, n) or reports
    /// an empty valid set, and the empty set is impossible when every
    /// pattern decodes in range (n a power of two, n >= 2).
    #[test]
    fn generated_value_in_range(
        n in 1u64..=64,
        shots in 1usize..=16,
        seed in any::<u64>(),
    ) {
        let qrng = Qrng::new(QrngConfig {
            shots,
            seed: Some(seed),
            ..Default::default()
        }).unwrap();

        match qrng.generate(n) {
            Ok(value) => prop_assert!(value < n, "{} >= {}", value, n),
            Err(QrngError::NoValidOutcomes { num_outcomes, .. }) => {
                prop_assert_eq!(num_outcomes, n);
                prop_assert!(
                    !(n >= 2 && n.is_power_of_two()),
                    "power-of-two range {} reported an empty valid set", n
                );
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Property: the tally accounts for every shot and every pattern fits
    /// the classical register.
    #[test]
    fn counts_account_for_all_shots(
        k in 1usize..=8,
        shots in 1usize..=128,
        seed in any::<u64>(),
    ) {
        let mut circuit = QuantumCircuit::new(k, k);
        for qubit in 0..k {
            circuit.h(qubit);
        }
        circuit.barrier();
        circuit.measure_all();

        let config = SimConfig { shots, seed: Some(seed) };
        let result = Simulator::run_with_config(&circuit, &config).unwrap();

        prop_assert_eq!(result.counts.total(), shots as u64);
        for (pattern, _) in result.counts.iter() {
            prop_assert!(pattern.value() < (1u64 << k));
        }
    }

    /// Property: identical configuration gives identical results.
    #[test]
    fn seeded_generation_reproduces(
        n in 2u64..=64,
        shots in 1usize..=8,
        seed in any::<u64>(),
    ) {
        let config = QrngConfig {
            shots,
            seed: Some(seed),
            ..Default::default()
        };
        let first = Qrng::new(config).unwrap().generate(n);
        let second = Qrng::new(config).unwrap().generate(n);
        prop_assert_eq!(first, second);
    }
}
