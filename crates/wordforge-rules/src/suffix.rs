//! Token-list suffix rules: numeric, special, and year suffixes
//!
//! All three share one shape: a finite, seed-independent token list, one
//! candidate per token appended to the seed.

use once_cell::sync::Lazy;

use wordforge_core::{Candidate, RuleKind};

/// Most common numeric suffixes, frequency-ordered.
pub static NUMERIC_TOKENS: Lazy<Vec<String>> = Lazy::new(|| {
    ["1", "2", "12", "123", "1234", "69", "99", "007", "01", "07"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

/// Most common special-character suffixes.
pub static SPECIAL_TOKENS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "!", "@", "#", "$", "*", ".", "!!", "!@", "!#", "**", "1!", "!1", "123!", "!123", "!@#",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

/// Long and short forms of the reference year and `back` prior years,
/// newest first.
pub fn year_tokens(reference_year: i32, back: u32) -> Vec<String> {
    let mut tokens = Vec::with_capacity(2 * (back as usize + 1));
    for offset in 0..=back as i32 {
        tokens.push((reference_year - offset).to_string());
    }
    for offset in 0..=back as i32 {
        let year = (reference_year - offset).rem_euclid(100);
        tokens.push(format!("{year:02}"));
    }
    tokens
}

/// A suffix rule over a fixed token list. The kind tag distinguishes the
/// numeric, special, and year flavors.
#[derive(Debug, Clone)]
pub struct TokenSuffix {
    kind: RuleKind,
    tokens: Vec<String>,
}

impl TokenSuffix {
    pub fn numeric(tokens: Option<Vec<String>>) -> Self {
        Self {
            kind: RuleKind::NumericSuffix,
            tokens: tokens.unwrap_or_else(|| NUMERIC_TOKENS.clone()),
        }
    }

    pub fn special(tokens: Option<Vec<String>>) -> Self {
        Self {
            kind: RuleKind::SpecialSuffix,
            tokens: tokens.unwrap_or_else(|| SPECIAL_TOKENS.clone()),
        }
    }

    pub fn year(reference_year: i32, back: u32, tokens: Option<Vec<String>>) -> Self {
        Self {
            kind: RuleKind::YearSuffix,
            tokens: tokens.unwrap_or_else(|| year_tokens(reference_year, back)),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// One candidate per token.
    pub fn produce<'a>(&'a self, seed: &'a str) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        let kind = self.kind;
        let stem_len = seed.len();
        Box::new(self.tokens.iter().map(move |token| {
            Candidate::suffixed(format!("{seed}{token}"), kind, stem_len)
        }))
    }

    pub fn factor(&self) -> u64 {
        self.tokens.len() as u64
    }
}
