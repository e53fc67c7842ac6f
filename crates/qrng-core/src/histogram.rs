//! Text rendering of measurement counts.

use std::fmt;

use crate::types::Counts;

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: u64 = 40;

/// ASCII histogram over observed measurement counts.
///
/// Rows are ordered by ascending bit pattern; bars are scaled so the most
/// frequent pattern fills the full bar width.
#[derive(Debug, Clone)]
pub struct Histogram {
    rows: Vec<(String, u64)>,
    total: u64,
    max_count: u64,
}

impl Histogram {
    /// Build a histogram from a tally of measurement counts.
    pub fn new(counts: &Counts) -> Self {
        let rows = counts
            .iter()
            .map(|(pattern, count)| (pattern.to_string(), count))
            .collect();
        Self {
            rows,
            total: counts.total(),
            max_count: counts.max_count(),
        }
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "measurement counts ({} shots)", self.total)?;
        for (bitstring, count) in &self.rows {
            let bar_len = if self.max_count == 0 {
                0
            } else {
                (count * BAR_WIDTH / self.max_count) as usize
            };
            let percent = if self.total == 0 {
                0.0
            } else {
                100.0 * *count as f64 / self.total as f64
            };
            writeln!(
                f,
                "  {bitstring}  {count:>6}  {percent:>5.1}%  {}",
                "#".repeat(bar_len)
            )?;
        }
        Ok(())
    }
}
