//! End-to-end tests for the generation pipeline.
//!
//! These drive the public operations (`dry_run`, `generate`, `list_rules`)
//! over real seed lists and collecting sinks.

use std::collections::HashSet;

use wordforge_core::{CancelToken, GeneratorConfig, RuleSettings, Sink, WordforgeError};
use wordforge_engine::{dry_run, generate, generate_with_cancel, list_rules};
use wordforge_in::SeedList;
use wordforge_out::CollectingSink;
use wordforge_rules::defaults::DEFAULT_CATALOG;

fn pinned(config: GeneratorConfig) -> GeneratorConfig {
    GeneratorConfig { reference_year: Some(2026), ..config }
}

// =============================================================================
// End-to-end generation
// =============================================================================

#[test]
fn test_admin_end_to_end_set_equality() {
    let seeds = SeedList::new(["admin"]);
    let config = pinned(
        GeneratorConfig::new()
            .with_rule("numeric_suffix", RuleSettings::default().with_tokens(["1", "123"]))
            .with_only_rules(["default_passwords", "numeric_suffix"]),
    );
    let mut sink = CollectingSink::new();
    let report = generate(&seeds, &config, &mut sink).unwrap();

    let expected: HashSet<String> = DEFAULT_CATALOG
        .iter()
        .cloned()
        .chain(["admin1".to_string(), "admin123".to_string()])
        .collect();
    let produced: HashSet<String> = sink.candidates.iter().cloned().collect();
    assert_eq!(produced, expected);
    // Each candidate exactly once.
    assert_eq!(sink.candidates.len(), expected.len());
    assert_eq!(report.emitted, expected.len() as u64);
    assert_eq!(report.duplicates, 0);
}

#[test]
fn test_generate_is_deterministic() {
    let seeds = SeedList::new(["admin", "hunter2", "campiglia"]);
    let config = pinned(GeneratorConfig::default());

    let mut first = CollectingSink::new();
    let mut second = CollectingSink::new();
    generate(&seeds, &config, &mut first).unwrap();
    generate(&seeds, &config, &mut second).unwrap();

    assert_eq!(first.candidates, second.candidates);
    assert_eq!(first.batch_sizes, second.batch_sizes);
}

#[test]
fn test_digit_ending_seed_keeps_suffix_output() {
    let seeds = SeedList::new(["hunter2"]);
    let config = pinned(
        GeneratorConfig::new()
            .with_rule("numeric_suffix", RuleSettings::default().with_tokens(["1"]))
            .with_only_rules(["numeric_suffix"]),
    );
    let mut sink = CollectingSink::new();
    let report = generate(&seeds, &config, &mut sink).unwrap();

    assert_eq!(sink.candidates, vec!["hunter21"]);
    assert_eq!(report.filtered, 0);
}

#[test]
fn test_duplicate_seeds_are_suppressed() {
    let seeds = SeedList::new(["test", "test"]);
    let config = pinned(GeneratorConfig::new().with_only_rules(["numeric_suffix"]));
    let mut sink = CollectingSink::new();
    let report = generate(&seeds, &config, &mut sink).unwrap();

    // The second seed regenerates the first one's candidates verbatim.
    assert!(report.duplicates > 0);
    let unique: HashSet<&String> = sink.candidates.iter().collect();
    assert_eq!(unique.len(), sink.candidates.len());
}

#[test]
fn test_empty_seed_source_is_not_an_error() {
    let seeds = SeedList::default();
    let config = pinned(GeneratorConfig::new().with_only_rules(["numeric_suffix"]));

    let estimate = dry_run(&seeds, &config).unwrap();
    assert_eq!(estimate.candidates, 0);

    let mut sink = CollectingSink::new();
    let report = generate(&seeds, &config, &mut sink).unwrap();
    assert_eq!(report.emitted, 0);
    assert!(sink.candidates.is_empty());
}

#[test]
fn test_batching_respects_configured_size() {
    let seeds = SeedList::new(["alpha", "bravo", "charlie"]);
    let config = pinned(GeneratorConfig {
        batch_size: 7,
        ..GeneratorConfig::new().with_only_rules(["numeric_suffix", "case_variation"])
    });
    let mut sink = CollectingSink::new();
    generate(&seeds, &config, &mut sink).unwrap();

    let (last, full) = sink.batch_sizes.split_last().unwrap();
    assert!(full.iter().all(|&size| size == 7));
    assert!(*last <= 7 && *last > 0);
}

#[test]
fn test_json_config_drives_generation() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let config: GeneratorConfig = serde_json::from_str(
        r#"{
            "rules": {
                "default_passwords": { "enabled": false },
                "numeric_suffix": { "tokens": ["7"] }
            },
            "reference_year": 2026,
            "batch_size": 100
        }"#,
    )
    .unwrap();
    assert_eq!(config.batch_size, 100);
    assert_eq!(config.reference_year, Some(2026));

    let seeds = SeedList::new(["admin"]);
    let mut sink = CollectingSink::new();
    generate(&seeds, &config, &mut sink).unwrap();

    assert!(sink.candidates.contains(&"admin7".to_string()));
    // The catalog rule was switched off, so its entries never appear.
    assert!(!sink.candidates.contains(&"123456".to_string()));
}

// =============================================================================
// Estimation vs. actual
// =============================================================================

#[test]
fn test_actual_output_never_exceeds_estimate() {
    let seeds = SeedList::new(["admin", "password", "campiglia", "axido"]);
    let config = pinned(GeneratorConfig::default());

    let estimate = dry_run(&seeds, &config).unwrap();
    let mut sink = CollectingSink::new();
    let report = generate(&seeds, &config, &mut sink).unwrap();

    let processed = report.emitted + report.duplicates + report.filtered;
    assert!(processed <= estimate.candidates);
    assert!(report.emitted <= estimate.candidates);
}

#[test]
fn test_numeric_only_estimate_is_exact_upper_bound() {
    let tokens: Vec<String> = (0..50).map(|i| format!("{i:02}")).collect();
    let seeds = SeedList::new((0..100).map(|i| format!("seed{i}")));
    let config = pinned(
        GeneratorConfig::new()
            .with_rule("numeric_suffix", RuleSettings::default().with_tokens(tokens))
            .with_only_rules(["numeric_suffix"]),
    );

    let estimate = dry_run(&seeds, &config).unwrap();
    assert_eq!(estimate.candidates, 5000);

    let mut sink = CollectingSink::new();
    let report = generate(&seeds, &config, &mut sink).unwrap();
    assert!(report.emitted <= 5000);
}

// =============================================================================
// Filter interaction
// =============================================================================

#[test]
fn test_disabling_filter_only_adds_output() {
    let seeds = SeedList::new(["ab", "x!"]);
    let filtered_config = pinned(GeneratorConfig::new().with_only_rules(["special_suffix"]));
    let open_config = pinned(
        GeneratorConfig::new().with_only_rules(["special_suffix"]).without_filter(),
    );

    let mut filtered = CollectingSink::new();
    let mut open = CollectingSink::new();
    let filtered_report = generate(&seeds, &filtered_config, &mut filtered).unwrap();
    let open_report = generate(&seeds, &open_config, &mut open).unwrap();

    assert!(open_report.emitted >= filtered_report.emitted);
    assert_eq!(open_report.filtered, 0);
    assert!(filtered_report.filtered > 0);
}

// =============================================================================
// Failure and cancellation
// =============================================================================

#[test]
fn test_sink_failure_is_fatal_with_context() {
    let seeds = SeedList::new(["admin"]);
    let config = pinned(GeneratorConfig::default());
    let mut sink = CollectingSink::new();
    sink.fail_next = true;

    let err = generate(&seeds, &config, &mut sink).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("SINK/"), "unexpected error: {msg}");
    assert!(msg.contains("dropped"), "unexpected error: {msg}");
    // The sink's own SINK/ prefix is unwrapped, not nested.
    assert_eq!(msg.matches("SINK/").count(), 1, "unexpected error: {msg}");
}

/// Sink that requests cancellation once the first batch has landed.
struct CancellingSink {
    inner: CollectingSink,
    token: CancelToken,
}

impl Sink for CancellingSink {
    fn write_batch(&mut self, batch: &[String]) -> Result<(), WordforgeError> {
        self.inner.write_batch(batch)?;
        self.token.cancel();
        Ok(())
    }
}

#[test]
fn test_cancellation_flushes_and_stops() {
    let seeds = SeedList::new(["admin", "password", "campiglia"]);
    let config = pinned(GeneratorConfig { batch_size: 10, ..GeneratorConfig::default() });
    let token = CancelToken::new();
    let mut sink = CancellingSink { inner: CollectingSink::new(), token: token.clone() };

    let report = generate_with_cancel(&seeds, &config, &mut sink, &token).unwrap();
    assert!(report.cancelled);
    // Exactly one full batch made it out before the cancel took effect.
    assert_eq!(report.batches, 1);
    assert_eq!(report.emitted, 10);
    assert_eq!(sink.inner.candidates.len(), 10);
}

// =============================================================================
// Introspection
// =============================================================================

#[test]
fn test_list_rules_reports_resolved_set() {
    let config = pinned(
        GeneratorConfig::new()
            .with_rule("leetspeak", RuleSettings::disabled())
            .with_rule("year_suffix", RuleSettings::default().with_priority(2)),
    );
    let descriptors = list_rules(&config).unwrap();

    assert_eq!(descriptors.len(), 10);
    // Priority override moves year_suffix right behind default_passwords.
    assert_eq!(descriptors[0].name, "default_passwords");
    assert_eq!(descriptors[1].name, "year_suffix");
    let leet = descriptors.iter().find(|d| d.name == "leetspeak").unwrap();
    assert!(!leet.enabled);
}

#[test]
fn test_unknown_rule_name_is_ignored() {
    let config = pinned(GeneratorConfig::new().with_rule("reverse", RuleSettings::default()));
    let descriptors = list_rules(&config).unwrap();
    assert!(descriptors.iter().all(|d| d.name != "reverse"));
}
