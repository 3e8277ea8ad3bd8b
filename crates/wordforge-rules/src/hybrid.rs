//! Hybrid suffixes: bounded case set × bounded token set
//!
//! Composes the core case variants with short suffix tokens, e.g.
//! `campiglia` → `Campiglia1!`, `CAMPIGLIA123`.

use once_cell::sync::Lazy;

use wordforge_core::{Candidate, RuleKind};

use crate::capitalize;

/// Short tokens used for the hybrid cross product.
pub static HYBRID_TOKENS: Lazy<Vec<String>> = Lazy::new(|| {
    ["1", "2", "12", "123", "1!", "!1"].iter().map(|s| s.to_string()).collect()
});

#[derive(Debug, Clone)]
pub struct HybridSuffix {
    tokens: Vec<String>,
}

impl HybridSuffix {
    pub fn new(tokens: Option<Vec<String>>) -> Self {
        Self { tokens: tokens.unwrap_or_else(|| HYBRID_TOKENS.clone()) }
    }

    /// Cross product of {original, capitalized, uppercase} and the token
    /// list. Both factors are bounded, so the product is too.
    pub fn produce<'a>(&'a self, seed: &'a str) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        let cases = [seed.to_string(), capitalize(seed), seed.to_uppercase()];
        Box::new(cases.into_iter().flat_map(move |case| {
            let stem_len = case.len();
            self.tokens.iter().map(move |token| {
                Candidate::suffixed(format!("{case}{token}"), RuleKind::HybridSuffix, stem_len)
            })
        }))
    }

    pub fn factor(&self) -> u64 {
        3 * self.tokens.len() as u64
    }
}
