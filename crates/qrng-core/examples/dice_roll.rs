//! Roll a six-sided die with the quantum random number generator.
//!
//! Ten seeded rolls, then one run with the measurement histogram printed.
//!
//! ## Run
//! ```sh
//! cargo run -p qrng-core --example dice_roll
//! ```

use qrng_core::{Qrng, QrngConfig};

/// Deterministic base seed for reproducibility.
const SEED: u64 = 0xD1CE_0001;

/// Faces on the die.
const SIDES: u64 = 6;

fn main() -> qrng_core::Result<()> {
    println!("Rolling a {SIDES}-sided die (base seed 0x{SEED:08X})\n");

    for roll in 0..10u64 {
        // Unique seed per roll to keep the rolls independent
        let qrng = Qrng::new(QrngConfig {
            shots: 128,
            seed: Some(SEED.wrapping_add(roll)),
            ..Default::default()
        })?;
        let value = qrng.generate(SIDES)?;
        println!("  roll {:>2}: {}", roll + 1, value + 1);
    }

    println!("\nRaw measurement counts for one visualized roll:");
    let visual = Qrng::new(QrngConfig {
        shots: 1024,
        seed: Some(SEED),
        visualize: true,
        ..Default::default()
    })?;
    let value = visual.generate(SIDES)?;
    println!("final roll: {}", value + 1);

    Ok(())
}
