//! WordForge Core: data model, configuration, dedup cache, and error model
//!
//! The generation pipeline is built from small crates; this one holds the
//! pieces every other crate shares.

pub mod cancel;
pub mod candidate;
pub mod config;
pub mod dedup;
pub mod error;
pub mod sink;
pub mod stats;

pub use cancel::CancelToken;
pub use candidate::{Candidate, RuleKind};
pub use config::{FilterSettings, GeneratorConfig, Limits, RuleSettings};
pub use dedup::DedupCache;
pub use error::WordforgeError;
pub use sink::Sink;
pub use stats::{EstimationResult, SeedStats};

/// WordForge engine version
pub const WORDFORGE_VERSION: &str = "1.0.0";
