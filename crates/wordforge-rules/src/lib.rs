//! WordForge Rules: the mutation rule catalog and its registry
//!
//! Each of the ten catalog kinds is a variant of the closed [`RuleBehavior`]
//! enum with its own module. A rule turns one seed (or no seed, for the
//! seed-independent kinds) into a small bounded lazy sequence of candidates;
//! nothing here recurses or stacks rules onto each other's output.

pub mod case_variation;
pub mod combination;
pub mod defaults;
pub mod duplication;
pub mod hybrid;
pub mod leetspeak;
pub mod patterns;
pub mod registry;
pub mod rule;
pub mod suffix;

pub use registry::{RuleDescriptor, RuleRegistry};
pub use rule::{MutationRule, RuleBehavior};

/// First letter uppercased, the rest lowercased.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
