//! Candidate data model
//!
//! A candidate is a derived string plus the provenance needed by the
//! plausibility filter. It is value-typed: once accepted it is handed to the
//! sink as plain text and the pipeline forgets about it.

use serde::{Deserialize, Serialize};

/// The closed set of catalog rule kinds.
///
/// Adding a rule kind means adding a variant here and a match arm in the
/// rules crate, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Leetspeak,
    CaseVariation,
    NumericSuffix,
    SpecialSuffix,
    YearSuffix,
    HybridSuffix,
    Combination,
    Duplication,
    CommonPatterns,
    DefaultPasswords,
}

impl RuleKind {
    /// Parse a configuration rule name. Unknown names return `None` and are
    /// skipped with a warning by the registry.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "leetspeak" => Some(Self::Leetspeak),
            "case_variation" => Some(Self::CaseVariation),
            "numeric_suffix" => Some(Self::NumericSuffix),
            "special_suffix" => Some(Self::SpecialSuffix),
            "year_suffix" => Some(Self::YearSuffix),
            "hybrid_suffix" => Some(Self::HybridSuffix),
            "combination" => Some(Self::Combination),
            "duplication" => Some(Self::Duplication),
            "common_patterns" => Some(Self::CommonPatterns),
            "default_passwords" => Some(Self::DefaultPasswords),
            _ => None,
        }
    }

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Leetspeak => "leetspeak",
            Self::CaseVariation => "case_variation",
            Self::NumericSuffix => "numeric_suffix",
            Self::SpecialSuffix => "special_suffix",
            Self::YearSuffix => "year_suffix",
            Self::HybridSuffix => "hybrid_suffix",
            Self::Combination => "combination",
            Self::Duplication => "duplication",
            Self::CommonPatterns => "common_patterns",
            Self::DefaultPasswords => "default_passwords",
        }
    }

    /// Seed-independent kinds run exactly once per run, not once per seed.
    pub fn is_seed_independent(self) -> bool {
        matches!(self, Self::DefaultPasswords)
    }

    /// Kinds that append suffix material to a seed. The filter uses this to
    /// reject suffixes stacked onto an already-suffixed stem.
    pub fn appends_suffix(self) -> bool {
        matches!(
            self,
            Self::NumericSuffix
                | Self::SpecialSuffix
                | Self::YearSuffix
                | Self::HybridSuffix
                | Self::Combination
                | Self::CommonPatterns
        )
    }

    /// All kinds, in default priority order.
    pub fn all() -> &'static [RuleKind] {
        &[
            Self::DefaultPasswords,
            Self::Combination,
            Self::Duplication,
            Self::Leetspeak,
            Self::CaseVariation,
            Self::NumericSuffix,
            Self::HybridSuffix,
            Self::SpecialSuffix,
            Self::CommonPatterns,
            Self::YearSuffix,
        ]
    }
}

/// A derived password candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The candidate text, one future output line.
    pub text: String,
    /// Which rule kind produced it.
    pub produced_by: RuleKind,
    /// Length of the unmodified seed prefix for suffix-appending rules;
    /// equals `text.len()` for everything else.
    pub stem_len: usize,
}

impl Candidate {
    /// Candidate whose entire text is the derived value (no appended suffix).
    pub fn whole(text: String, produced_by: RuleKind) -> Self {
        let stem_len = text.len();
        Self { text, produced_by, stem_len }
    }

    /// Candidate made of a seed stem plus appended suffix material.
    pub fn suffixed(text: String, produced_by: RuleKind, stem_len: usize) -> Self {
        debug_assert!(stem_len <= text.len());
        Self { text, produced_by, stem_len }
    }

    /// The unmodified seed portion of the text.
    pub fn stem(&self) -> &str {
        &self.text[..self.stem_len]
    }
}
