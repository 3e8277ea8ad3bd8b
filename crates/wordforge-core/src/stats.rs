//! Seed statistics and estimation results
//!
//! `SeedStats` is the only thing the estimator needs from the seed list: one
//! pass for count and average length, never a per-character walk afterwards.
//! `EstimationResult` is derived on demand and never persisted.

use serde::{Deserialize, Serialize};

/// Summary of a seed list, computed in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedStats {
    /// Number of seeds.
    pub count: u64,
    /// Average seed length in bytes.
    pub avg_len: f64,
}

impl SeedStats {
    /// Stats for an empty seed source.
    pub fn empty() -> Self {
        Self { count: 0, avg_len: 0.0 }
    }

    /// Compute stats from an iterator of seed lengths.
    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut count = 0u64;
        let mut total = 0u64;
        for len in lengths {
            count += 1;
            total += len as u64;
        }
        let avg_len = if count == 0 { 0.0 } else { total as f64 / count as f64 };
        Self { count, avg_len }
    }
}

/// Pre-dedup, pre-filter upper bound on the output volume.
///
/// The actual emitted count after deduplication and filtering is always at
/// most `candidates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Upper bound on the number of candidates.
    pub candidates: u64,
    /// Approximate output size in bytes (one candidate per line).
    pub approx_bytes: u64,
    /// Feasibility warnings for counts or sizes above the configured limits.
    pub warnings: Vec<String>,
}

impl EstimationResult {
    /// Estimate for an empty seed source with no seed-independent rules.
    pub fn zero() -> Self {
        Self { candidates: 0, approx_bytes: 0, warnings: Vec::new() }
    }
}
