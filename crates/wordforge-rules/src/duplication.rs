//! Seed duplication (axido → axidoaxido, Axido*axido)

use once_cell::sync::Lazy;

use wordforge_core::{Candidate, RuleKind};

use crate::capitalize;

pub static DUPLICATION_SEPARATORS: Lazy<Vec<String>> =
    Lazy::new(|| ["", "*"].iter().map(|s| s.to_string()).collect());

#[derive(Debug, Clone)]
pub struct Duplication {
    separators: Vec<String>,
}

impl Duplication {
    pub fn new(separators: Option<Vec<String>>) -> Self {
        Self { separators: separators.unwrap_or_else(|| DUPLICATION_SEPARATORS.clone()) }
    }

    /// Two shapes per separator: lower+lower and Capitalized+lower.
    pub fn produce<'a>(&'a self, seed: &'a str) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        let lower = seed.to_lowercase();
        let cap = capitalize(seed);
        Box::new(self.separators.iter().flat_map(move |sep| {
            [
                Candidate::whole(format!("{lower}{sep}{lower}"), RuleKind::Duplication),
                Candidate::whole(format!("{cap}{sep}{lower}"), RuleKind::Duplication),
            ]
        }))
    }

    pub fn factor(&self) -> u64 {
        2 * self.separators.len() as u64
    }
}
