//! Combinations of seeds with number tokens
//!
//! Pairs each seed with a configured number list over a small separator set,
//! e.g. `axido` + `2025` → `axido2025`, `axido*2025`, `2025axido`.
//!
//! The cross product is explicitly bounded: seeds are combined with the
//! number tokens only, never with other seeds, so the output stays linear in
//! the seed count no matter how large the input list is.

use once_cell::sync::Lazy;

use wordforge_core::{Candidate, RuleKind};

/// Default separators, including the empty one.
pub static COMBINATION_SEPARATORS: Lazy<Vec<String>> =
    Lazy::new(|| ["", "*", "_", "."].iter().map(|s| s.to_string()).collect());

#[derive(Debug, Clone)]
pub struct Combination {
    numbers: Vec<String>,
    separators: Vec<String>,
}

impl Combination {
    /// `numbers` defaults to the year tokens upstream; the registry resolves
    /// that before construction.
    pub fn new(numbers: Vec<String>, separators: Option<Vec<String>>) -> Self {
        Self {
            numbers,
            separators: separators.unwrap_or_else(|| COMBINATION_SEPARATORS.clone()),
        }
    }

    /// For every number token: one suffixed form per separator, plus one
    /// number-prefixed form.
    pub fn produce<'a>(&'a self, seed: &'a str) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        let stem_len = seed.len();
        Box::new(self.numbers.iter().flat_map(move |num| {
            self.separators
                .iter()
                .map(move |sep| {
                    Candidate::suffixed(
                        format!("{seed}{sep}{num}"),
                        RuleKind::Combination,
                        stem_len,
                    )
                })
                .chain(std::iter::once(Candidate::whole(
                    format!("{num}{seed}"),
                    RuleKind::Combination,
                )))
        }))
    }

    pub fn factor(&self) -> u64 {
        self.numbers.len() as u64 * (self.separators.len() as u64 + 1)
    }
}
