//! Public pipeline operations
//!
//! `dry_run` estimates without generating, `generate` drives the pipeline to
//! completion or cancellation, `list_rules` exposes the resolved rule set
//! for introspection. Candidates flow from the engine through the dedup
//! cache and the plausibility filter into the sink, in bounded batches.

use tracing::{debug, info};

use wordforge_core::{
    CancelToken, DedupCache, EstimationResult, GeneratorConfig, Sink, WordforgeError,
};
use wordforge_filter::PlausibilityFilter;
use wordforge_in::SeedList;
use wordforge_rules::{RuleDescriptor, RuleRegistry};

use crate::engine::MutationEngine;
use crate::estimator;

/// Outcome summary of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Candidates handed to the sink.
    pub emitted: u64,
    /// Candidates suppressed by the dedup cache.
    pub duplicates: u64,
    /// Candidates dropped by the plausibility filter.
    pub filtered: u64,
    /// Batches the sink accepted.
    pub batches: u64,
    /// Whether the run stopped on a cancel request.
    pub cancelled: bool,
}

/// Estimate the output volume without generating anything.
pub fn dry_run(
    seeds: &SeedList,
    config: &GeneratorConfig,
) -> Result<EstimationResult, WordforgeError> {
    let registry = RuleRegistry::from_config(config)?;
    Ok(estimator::estimate(&registry, &seeds.stats(), &config.limits))
}

/// The resolved rule set in emission order, for help output.
pub fn list_rules(config: &GeneratorConfig) -> Result<Vec<RuleDescriptor>, WordforgeError> {
    Ok(RuleRegistry::from_config(config)?.descriptors())
}

/// Drive the full pipeline to completion.
pub fn generate(
    seeds: &SeedList,
    config: &GeneratorConfig,
    sink: &mut dyn Sink,
) -> Result<GenerationReport, WordforgeError> {
    generate_with_cancel(seeds, config, sink, &CancelToken::new())
}

/// Drive the pipeline until exhaustion or until the token is cancelled.
/// On cancellation the partially filled batch is still handed to the sink
/// before returning.
pub fn generate_with_cancel(
    seeds: &SeedList,
    config: &GeneratorConfig,
    sink: &mut dyn Sink,
    cancel: &CancelToken,
) -> Result<GenerationReport, WordforgeError> {
    let registry = RuleRegistry::from_config(config)?;
    let filter = PlausibilityFilter::new(config.filter.clone());
    let mut dedup = DedupCache::new(config.dedup_capacity);
    let mut report = GenerationReport::default();
    let mut batch: Vec<String> = Vec::with_capacity(config.batch_size);

    for candidate in MutationEngine::new(&registry, seeds.seeds()) {
        if cancel.is_cancelled() {
            report.cancelled = true;
            break;
        }
        if !dedup.test_and_insert(&candidate.text) {
            report.duplicates += 1;
            continue;
        }
        if !filter.accept(&candidate) {
            report.filtered += 1;
            continue;
        }
        batch.push(candidate.text);
        if batch.len() >= config.batch_size {
            flush(sink, &mut batch, &mut report)?;
            debug!(
                emitted = report.emitted,
                duplicates = report.duplicates,
                filtered = report.filtered,
                "batch flushed"
            );
        }
    }

    // Final (or interrupted) partial batch: either fully handed to the sink
    // or reported as dropped in the sink error.
    if !batch.is_empty() {
        flush(sink, &mut batch, &mut report)?;
    }

    info!(
        emitted = report.emitted,
        duplicates = report.duplicates,
        filtered = report.filtered,
        batches = report.batches,
        cancelled = report.cancelled,
        "generation finished"
    );
    Ok(report)
}

fn flush(
    sink: &mut dyn Sink,
    batch: &mut Vec<String>,
    report: &mut GenerationReport,
) -> Result<(), WordforgeError> {
    sink.write_batch(batch).map_err(|e| {
        // Re-wrap with the batch size; unwrap a sink error's own detail so
        // the SINK/ prefix appears once.
        let detail = match e {
            WordforgeError::Sink(detail) => detail,
            other => other.to_string(),
        };
        WordforgeError::sink(batch.len(), detail)
    })?;
    report.emitted += batch.len() as u64;
    report.batches += 1;
    batch.clear();
    Ok(())
}
