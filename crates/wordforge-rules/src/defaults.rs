//! Default credential catalog
//!
//! Seed-independent: the catalog is emitted exactly once per run, no matter
//! how many seeds the input list holds.

use once_cell::sync::Lazy;

use wordforge_core::{Candidate, RuleKind};

/// Globally most common credentials plus the admin essentials.
pub static DEFAULT_CATALOG: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "123456",
        "12345678",
        "123456789",
        "12345",
        "1234",
        "password",
        "Password",
        "qwerty",
        "azerty",
        "root",
        "admin",
        "Admin",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

#[derive(Debug, Clone)]
pub struct DefaultPasswords {
    catalog: Vec<String>,
}

impl DefaultPasswords {
    pub fn new(catalog: Option<Vec<String>>) -> Self {
        Self { catalog: catalog.unwrap_or_else(|| DEFAULT_CATALOG.clone()) }
    }

    pub fn produce(&self) -> Box<dyn Iterator<Item = Candidate> + '_> {
        Box::new(
            self.catalog
                .iter()
                .map(|entry| Candidate::whole(entry.clone(), RuleKind::DefaultPasswords)),
        )
    }

    /// Flat count, not a per-seed multiplier.
    pub fn flat_count(&self) -> u64 {
        self.catalog.len() as u64
    }
}
