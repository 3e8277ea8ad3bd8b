//! WordForge Engine: lazy mutation pipeline and public operations
//!
//! Composes the rule registry over the seed stream into one lazy candidate
//! sequence, deduplicates it through the bounded cache, filters it, and
//! hands bounded batches to the sink. Single-threaded and pull-based: each
//! stage advances only when the consumer pulls, so at any instant at most
//! one in-flight candidate exists per stage plus the fixed-size dedup cache.

pub mod engine;
pub mod estimator;
pub mod pipeline;

pub use engine::MutationEngine;
pub use estimator::estimate;
pub use pipeline::{dry_run, generate, generate_with_cancel, list_rules, GenerationReport};
