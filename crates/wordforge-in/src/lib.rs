//! WordForge In: seed list loading and normalization
//!
//! Seeds are loaded once per run, trimmed, and owned by the list for the
//! duration of one pass. The pipeline never mutates them.

pub mod loader;

pub use loader::{SeedList, SeedLoader};
