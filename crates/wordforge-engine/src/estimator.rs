//! Output volume estimator
//!
//! Predicts the final sequence's upper bound analytically from the registry
//! and the seed statistics, without generating a single candidate. Runs in
//! O(#rules); the only per-seed work is the one stats pass the caller
//! already did.

use wordforge_core::{EstimationResult, Limits, SeedStats};
use wordforge_rules::RuleRegistry;

/// Average bytes of suffix material a rule adds to a seed; feeds the
/// byte-size approximation only, never the count.
const AVG_SUFFIX_ALLOWANCE: f64 = 2.0;

/// Pre-dedup, pre-filter upper bound: the sum of factor × seed_count over
/// seed-dependent rules plus the flat counts of seed-independent ones.
/// Actual emitted volume is always ≤ this.
pub fn estimate(registry: &RuleRegistry, stats: &SeedStats, limits: &Limits) -> EstimationResult {
    let mut candidates: u64 = 0;
    for rule in registry.enabled_rules() {
        let contribution = if rule.is_seed_independent() {
            rule.factor()
        } else {
            rule.factor().saturating_mul(stats.count)
        };
        candidates = candidates.saturating_add(contribution);
    }

    let bytes_per_candidate = stats.avg_len + AVG_SUFFIX_ALLOWANCE + 1.0;
    let approx_bytes = (candidates as f64 * bytes_per_candidate) as u64;

    let mut warnings = Vec::new();
    if candidates > limits.warn_candidates {
        warnings.push(format!(
            "estimated {candidates} candidates exceeds the warning threshold of {}",
            limits.warn_candidates
        ));
    }
    if approx_bytes > limits.warn_bytes {
        warnings.push(format!(
            "estimated output of ~{approx_bytes} bytes exceeds the warning threshold of {} bytes",
            limits.warn_bytes
        ));
    }

    EstimationResult { candidates, approx_bytes, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordforge_core::{GeneratorConfig, RuleSettings};

    #[test]
    fn test_single_rule_exact_count() {
        // 100 seeds × 50 tokens = 5000.
        let tokens: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let config = GeneratorConfig::new()
            .with_rule("numeric_suffix", RuleSettings::default().with_tokens(tokens))
            .with_only_rules(["numeric_suffix"]);
        let registry = RuleRegistry::from_config(&config).unwrap();
        let stats = SeedStats { count: 100, avg_len: 8.0 };
        let result = estimate(&registry, &stats, &Limits::default());
        assert_eq!(result.candidates, 5000);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_flat_rules_ignore_seed_count() {
        let config = GeneratorConfig::new().with_only_rules(["default_passwords"]);
        let registry = RuleRegistry::from_config(&config).unwrap();
        let for_one = estimate(&registry, &SeedStats { count: 1, avg_len: 5.0 }, &Limits::default());
        let for_many =
            estimate(&registry, &SeedStats { count: 100_000, avg_len: 5.0 }, &Limits::default());
        assert_eq!(for_one.candidates, for_many.candidates);
    }

    #[test]
    fn test_empty_seed_source() {
        let config = GeneratorConfig::new().with_only_rules(["numeric_suffix"]);
        let registry = RuleRegistry::from_config(&config).unwrap();
        let result = estimate(&registry, &SeedStats::empty(), &Limits::default());
        assert_eq!(result.candidates, 0);
        assert_eq!(result.approx_bytes, 0);
    }

    #[test]
    fn test_threshold_warnings() {
        let config = GeneratorConfig::default();
        let registry = RuleRegistry::from_config(&config).unwrap();
        let limits = Limits { warn_candidates: 10, warn_bytes: 100 };
        let result = estimate(&registry, &SeedStats { count: 1000, avg_len: 8.0 }, &limits);
        assert_eq!(result.warnings.len(), 2);
    }
}
