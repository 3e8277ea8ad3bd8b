//! Resolved generator configuration
//!
//! The core never parses configuration files. Callers hand it a fully
//! resolved `GeneratorConfig`; how that structure was produced (JSON file,
//! CLI flags, defaults) is their business. The structure is constructed once
//! per run and is immutable afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::candidate::RuleKind;

/// Per-rule settings: the `{enabled, priority}` scheduling pair plus the
/// kind-specific parameters. Parameters that do not apply to a kind are
/// simply ignored by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Whether the rule runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Emission order: lower priority values run first. `None` keeps the
    /// kind's built-in default.
    #[serde(default)]
    pub priority: Option<i32>,

    /// Token list for the suffix rules (`numeric_suffix`, `special_suffix`,
    /// `hybrid_suffix`).
    #[serde(default)]
    pub tokens: Option<Vec<String>>,

    /// Separator set for `combination` and `duplication`.
    #[serde(default)]
    pub separators: Option<Vec<String>>,

    /// How many years before the reference year `year_suffix` covers.
    #[serde(default)]
    pub years_back: Option<u32>,

    /// Substitution table override for `leetspeak`.
    #[serde(default)]
    pub substitutions: Option<BTreeMap<char, char>>,

    /// Number tokens for `combination`; defaults to the year tokens. This
    /// list is the explicit bound on the rule's cross product.
    #[serde(default)]
    pub numbers: Option<Vec<String>>,

    /// Credential catalog override for `default_passwords`.
    #[serde(default)]
    pub catalog: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: None,
            tokens: None,
            separators: None,
            years_back: None,
            substitutions: None,
            numbers: None,
            catalog: None,
        }
    }
}

impl RuleSettings {
    /// Settings for a disabled rule.
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    /// Override the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Override the token list.
    pub fn with_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens = Some(tokens.into_iter().map(Into::into).collect());
        self
    }
}

/// Plausibility filter settings. One toggle gates the whole heuristic set;
/// the individual bounds are tunable but not individually disableable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Candidates shorter than this are rejected.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Candidates longer than this are rejected.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Longest run of special characters tolerated.
    #[serde(default = "default_max_special_run")]
    pub max_special_run: usize,

    /// Longest run of identical characters tolerated.
    #[serde(default = "default_max_repeat")]
    pub max_repeat: usize,

    /// Longest trailing run of digits and specials tolerated on a
    /// suffix-built candidate before it counts as chained suffixing.
    #[serde(default = "default_max_tail_run")]
    pub max_tail_run: usize,
}

fn default_min_length() -> usize {
    4
}

fn default_max_length() -> usize {
    64
}

fn default_max_special_run() -> usize {
    2
}

fn default_max_repeat() -> usize {
    4
}

fn default_max_tail_run() -> usize {
    4
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_length: default_min_length(),
            max_length: default_max_length(),
            max_special_run: default_max_special_run(),
            max_repeat: default_max_repeat(),
            max_tail_run: default_max_tail_run(),
        }
    }
}

/// Feasibility thresholds for estimation warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_warn_candidates")]
    pub warn_candidates: u64,

    #[serde(default = "default_warn_bytes")]
    pub warn_bytes: u64,
}

fn default_warn_candidates() -> u64 {
    1_000_000
}

fn default_warn_bytes() -> u64 {
    1024 * 1024 * 1024
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            warn_candidates: default_warn_candidates(),
            warn_bytes: default_warn_bytes(),
        }
    }
}

/// The resolved configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Rule name -> settings. Unknown names are skipped with a warning when
    /// the registry is built. A `BTreeMap` keeps iteration deterministic.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSettings>,

    /// Plausibility filter settings.
    #[serde(default)]
    pub filter: FilterSettings,

    /// Dedup cache capacity in distinct candidate hashes.
    #[serde(default = "default_dedup_capacity")]
    pub dedup_capacity: usize,

    /// How many candidates are handed to the sink per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Reference year for the year-based rules; `None` means the current
    /// year. Pinning it makes runs reproducible across year boundaries.
    #[serde(default)]
    pub reference_year: Option<i32>,

    /// Estimation warning thresholds.
    #[serde(default)]
    pub limits: Limits,
}

fn default_dedup_capacity() -> usize {
    10_000_000
}

fn default_batch_size() -> usize {
    10_000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rules: BTreeMap::new(),
            filter: FilterSettings::default(),
            dedup_capacity: default_dedup_capacity(),
            batch_size: default_batch_size(),
            reference_year: None,
            limits: Limits::default(),
        }
    }
}

impl GeneratorConfig {
    /// Configuration with every catalog rule left at its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one rule's settings.
    pub fn with_rule(mut self, name: impl Into<String>, settings: RuleSettings) -> Self {
        self.rules.insert(name.into(), settings);
        self
    }

    /// Enable exactly the named catalog rules and disable every other one.
    /// Settings already present for a named rule are preserved.
    pub fn with_only_rules<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        let keep: Vec<&str> = names.into_iter().collect();
        for kind in RuleKind::all() {
            let name = kind.name();
            let settings = self.rules.entry(name.to_string()).or_default();
            settings.enabled = keep.contains(&name);
        }
        self
    }

    /// Disable the plausibility filter.
    pub fn without_filter(mut self) -> Self {
        self.filter.enabled = false;
        self
    }

    /// Settings for a rule name, if the caller configured it.
    pub fn rule(&self, name: &str) -> Option<&RuleSettings> {
        self.rules.get(name)
    }
}
