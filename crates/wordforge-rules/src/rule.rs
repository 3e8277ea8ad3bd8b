//! A named, prioritized mutation rule
//!
//! The catalog is a closed tagged-variant set with one match arm per kind.
//! `produce` is the single capability every kind implements.

use wordforge_core::{Candidate, RuleKind};

use crate::case_variation::CaseVariation;
use crate::combination::Combination;
use crate::defaults::DefaultPasswords;
use crate::duplication::Duplication;
use crate::hybrid::HybridSuffix;
use crate::leetspeak::Leetspeak;
use crate::patterns::CommonPatterns;
use crate::suffix::TokenSuffix;

/// Closed set of rule behaviors, one variant per catalog kind.
#[derive(Debug, Clone)]
pub enum RuleBehavior {
    Leetspeak(Leetspeak),
    CaseVariation(CaseVariation),
    NumericSuffix(TokenSuffix),
    SpecialSuffix(TokenSuffix),
    YearSuffix(TokenSuffix),
    HybridSuffix(HybridSuffix),
    Combination(Combination),
    Duplication(Duplication),
    CommonPatterns(CommonPatterns),
    DefaultPasswords(DefaultPasswords),
}

impl RuleBehavior {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Leetspeak(_) => RuleKind::Leetspeak,
            Self::CaseVariation(_) => RuleKind::CaseVariation,
            Self::NumericSuffix(_) => RuleKind::NumericSuffix,
            Self::SpecialSuffix(_) => RuleKind::SpecialSuffix,
            Self::YearSuffix(_) => RuleKind::YearSuffix,
            Self::HybridSuffix(_) => RuleKind::HybridSuffix,
            Self::Combination(_) => RuleKind::Combination,
            Self::Duplication(_) => RuleKind::Duplication,
            Self::CommonPatterns(_) => RuleKind::CommonPatterns,
            Self::DefaultPasswords(_) => RuleKind::DefaultPasswords,
        }
    }

    /// Lazy candidate sequence for one seed, or for no seed in the
    /// seed-independent case. A seed-dependent rule asked to run without a
    /// seed produces nothing, and vice versa.
    pub fn produce<'a>(&'a self, seed: Option<&'a str>) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        match (self, seed) {
            (Self::Leetspeak(rule), Some(seed)) => rule.produce(seed),
            (Self::CaseVariation(rule), Some(seed)) => rule.produce(seed),
            (Self::NumericSuffix(rule), Some(seed)) => rule.produce(seed),
            (Self::SpecialSuffix(rule), Some(seed)) => rule.produce(seed),
            (Self::YearSuffix(rule), Some(seed)) => rule.produce(seed),
            (Self::HybridSuffix(rule), Some(seed)) => rule.produce(seed),
            (Self::Combination(rule), Some(seed)) => rule.produce(seed),
            (Self::Duplication(rule), Some(seed)) => rule.produce(seed),
            (Self::CommonPatterns(rule), Some(seed)) => rule.produce(seed),
            (Self::DefaultPasswords(rule), None) => rule.produce(),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Per-seed output multiplier, or the flat count for seed-independent
    /// kinds. Always an upper bound on what `produce` emits.
    pub fn factor(&self) -> u64 {
        match self {
            Self::Leetspeak(rule) => rule.factor(),
            Self::CaseVariation(rule) => rule.factor(),
            Self::NumericSuffix(rule) => rule.factor(),
            Self::SpecialSuffix(rule) => rule.factor(),
            Self::YearSuffix(rule) => rule.factor(),
            Self::HybridSuffix(rule) => rule.factor(),
            Self::Combination(rule) => rule.factor(),
            Self::Duplication(rule) => rule.factor(),
            Self::CommonPatterns(rule) => rule.factor(),
            Self::DefaultPasswords(rule) => rule.flat_count(),
        }
    }
}

/// A rule as the engine sees it: behavior plus scheduling attributes.
/// Constructed once by the registry and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MutationRule {
    pub name: String,
    pub enabled: bool,
    /// Lower values run first.
    pub priority: i32,
    pub behavior: RuleBehavior,
}

impl MutationRule {
    pub fn new(enabled: bool, priority: i32, behavior: RuleBehavior) -> Self {
        Self {
            name: behavior.kind().name().to_string(),
            enabled,
            priority,
            behavior,
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.behavior.kind()
    }

    pub fn is_seed_independent(&self) -> bool {
        self.kind().is_seed_independent()
    }

    pub fn produce<'a>(&'a self, seed: Option<&'a str>) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        self.behavior.produce(seed)
    }

    pub fn factor(&self) -> u64 {
        self.behavior.factor()
    }
}
