//! Case variations
//!
//! A bounded fixed set, never the 2^n case permutation space: original,
//! all-lowercase, all-uppercase, first-letter-capitalized, and
//! each-word-capitalized.

use wordforge_core::{Candidate, RuleKind};

use crate::capitalize;

#[derive(Debug, Clone, Default)]
pub struct CaseVariation;

impl CaseVariation {
    /// At most five variants, trivially identical ones collapsed.
    pub fn produce<'a>(&'a self, seed: &'a str) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        let mut variants: Vec<String> = Vec::with_capacity(5);
        for variant in [
            seed.to_string(),
            seed.to_lowercase(),
            seed.to_uppercase(),
            capitalize(seed),
            each_word_capitalized(seed),
        ] {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
        Box::new(
            variants
                .into_iter()
                .map(|text| Candidate::whole(text, RuleKind::CaseVariation)),
        )
    }

    pub fn factor(&self) -> u64 {
        5
    }
}

/// Uppercase the first letter of every separator-delimited word.
fn each_word_capitalized(seed: &str) -> String {
    let mut out = String::with_capacity(seed.len());
    let mut at_word_start = true;
    for c in seed.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
