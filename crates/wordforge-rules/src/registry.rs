//! Rule registry
//!
//! Resolves a `GeneratorConfig` into the full, priority-ordered rule set.
//! Built once per run; immutable afterwards. Unknown rule names in the
//! config are skipped with a warning, malformed parameters are fatal.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::warn;

use wordforge_core::{GeneratorConfig, RuleKind, RuleSettings, WordforgeError};

use crate::case_variation::CaseVariation;
use crate::combination::Combination;
use crate::defaults::DefaultPasswords;
use crate::duplication::Duplication;
use crate::hybrid::HybridSuffix;
use crate::leetspeak::Leetspeak;
use crate::patterns::CommonPatterns;
use crate::rule::{MutationRule, RuleBehavior};
use crate::suffix::{year_tokens, TokenSuffix};

const DEFAULT_YEARS_BACK: u32 = 2;

/// Read-only view of one rule for introspection and help output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub name: String,
    pub kind: RuleKind,
    pub enabled: bool,
    pub priority: i32,
}

/// The resolved, ordered rule collection.
#[derive(Debug)]
pub struct RuleRegistry {
    /// All catalog rules, sorted by (priority, name). Lower priority values
    /// run first.
    rules: Vec<MutationRule>,
    reference_year: i32,
}

impl RuleRegistry {
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, WordforgeError> {
        let reference_year = config
            .reference_year
            .unwrap_or_else(|| chrono::Utc::now().year());

        for name in config.rules.keys() {
            if RuleKind::parse(name).is_none() {
                warn!(rule = %name, "unknown rule name in configuration, ignoring");
            }
        }

        let mut rules = Vec::with_capacity(RuleKind::all().len());
        for &kind in RuleKind::all() {
            let settings = config.rule(kind.name()).cloned().unwrap_or_default();
            validate(kind, &settings)?;
            let behavior = build_behavior(kind, &settings, reference_year);
            let priority = settings.priority.unwrap_or_else(|| default_priority(kind));
            rules.push(MutationRule::new(settings.enabled, priority, behavior));
        }
        rules.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

        Ok(Self { rules, reference_year })
    }

    /// Enabled rules in emission order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &MutationRule> {
        self.rules.iter().filter(|rule| rule.enabled)
    }

    /// Every catalog rule, enabled or not, in emission order.
    pub fn descriptors(&self) -> Vec<RuleDescriptor> {
        self.rules
            .iter()
            .map(|rule| RuleDescriptor {
                name: rule.name.clone(),
                kind: rule.kind(),
                enabled: rule.enabled,
                priority: rule.priority,
            })
            .collect()
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }
}

/// Built-in priorities, matching the catalog's historical ordering.
fn default_priority(kind: RuleKind) -> i32 {
    match kind {
        RuleKind::DefaultPasswords => 1,
        RuleKind::Combination => 5,
        RuleKind::Duplication => 8,
        RuleKind::Leetspeak => 10,
        RuleKind::CaseVariation => 20,
        RuleKind::NumericSuffix => 30,
        RuleKind::HybridSuffix => 35,
        RuleKind::SpecialSuffix => 40,
        RuleKind::CommonPatterns => 45,
        RuleKind::YearSuffix => 50,
    }
}

fn build_behavior(kind: RuleKind, settings: &RuleSettings, reference_year: i32) -> RuleBehavior {
    let years_back = settings.years_back.unwrap_or(DEFAULT_YEARS_BACK);
    match kind {
        RuleKind::Leetspeak => RuleBehavior::Leetspeak(match &settings.substitutions {
            Some(table) => Leetspeak::new(table.clone()),
            None => Leetspeak::default(),
        }),
        RuleKind::CaseVariation => RuleBehavior::CaseVariation(CaseVariation),
        RuleKind::NumericSuffix => {
            RuleBehavior::NumericSuffix(TokenSuffix::numeric(settings.tokens.clone()))
        }
        RuleKind::SpecialSuffix => {
            RuleBehavior::SpecialSuffix(TokenSuffix::special(settings.tokens.clone()))
        }
        RuleKind::YearSuffix => RuleBehavior::YearSuffix(TokenSuffix::year(
            reference_year,
            years_back,
            settings.tokens.clone(),
        )),
        RuleKind::HybridSuffix => {
            RuleBehavior::HybridSuffix(HybridSuffix::new(settings.tokens.clone()))
        }
        RuleKind::Combination => {
            let numbers = settings
                .numbers
                .clone()
                .unwrap_or_else(|| year_tokens(reference_year, years_back));
            RuleBehavior::Combination(Combination::new(numbers, settings.separators.clone()))
        }
        RuleKind::Duplication => {
            RuleBehavior::Duplication(Duplication::new(settings.separators.clone()))
        }
        RuleKind::CommonPatterns => {
            RuleBehavior::CommonPatterns(CommonPatterns::new(reference_year))
        }
        RuleKind::DefaultPasswords => {
            RuleBehavior::DefaultPasswords(DefaultPasswords::new(settings.catalog.clone()))
        }
    }
}

/// Malformed parameters are configuration errors, fatal before any
/// generation begins.
fn validate(kind: RuleKind, settings: &RuleSettings) -> Result<(), WordforgeError> {
    if matches!(&settings.tokens, Some(tokens) if tokens.is_empty()) {
        return Err(WordforgeError::config(kind.name(), "empty token list"));
    }
    if matches!(&settings.separators, Some(seps) if seps.is_empty()) {
        return Err(WordforgeError::config(kind.name(), "empty separator list"));
    }
    if matches!(&settings.substitutions, Some(table) if table.is_empty()) {
        return Err(WordforgeError::config(kind.name(), "empty substitution table"));
    }
    if matches!(&settings.catalog, Some(catalog) if catalog.is_empty()) {
        return Err(WordforgeError::config(kind.name(), "empty credential catalog"));
    }
    if matches!(&settings.numbers, Some(numbers) if numbers.is_empty()) {
        return Err(WordforgeError::config(kind.name(), "empty number list"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = RuleRegistry::from_config(&GeneratorConfig::default()).unwrap();
        let names: Vec<&str> = registry.enabled_rules().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "default_passwords",
                "combination",
                "duplication",
                "leetspeak",
                "case_variation",
                "numeric_suffix",
                "hybrid_suffix",
                "special_suffix",
                "common_patterns",
                "year_suffix",
            ]
        );
    }

    #[test]
    fn test_priority_override_reorders() {
        let config = GeneratorConfig::new()
            .with_rule("year_suffix", RuleSettings::default().with_priority(-1));
        let registry = RuleRegistry::from_config(&config).unwrap();
        let first = registry.enabled_rules().next().unwrap();
        assert_eq!(first.name, "year_suffix");
    }

    #[test]
    fn test_disabled_rules_excluded() {
        let config = GeneratorConfig::new().with_rule("leetspeak", RuleSettings::disabled());
        let registry = RuleRegistry::from_config(&config).unwrap();
        assert!(registry.enabled_rules().all(|r| r.name != "leetspeak"));
        // Still visible to introspection.
        assert!(registry.descriptors().iter().any(|d| d.name == "leetspeak" && !d.enabled));
    }

    #[test]
    fn test_unknown_rule_name_is_nonfatal() {
        let config = GeneratorConfig::new().with_rule("reverse", RuleSettings::default());
        let registry = RuleRegistry::from_config(&config).unwrap();
        assert_eq!(registry.descriptors().len(), RuleKind::all().len());
    }

    #[test]
    fn test_empty_tokens_is_fatal() {
        let config = GeneratorConfig::new()
            .with_rule("numeric_suffix", RuleSettings::default().with_tokens(Vec::<String>::new()));
        let err = RuleRegistry::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("numeric_suffix"));
    }

    #[test]
    fn test_substitution_override_reaches_leetspeak() {
        let table = std::collections::BTreeMap::from([('o', '0')]);
        let config = GeneratorConfig::new().with_rule(
            "leetspeak",
            RuleSettings { substitutions: Some(table), ..RuleSettings::default() },
        );
        let registry = RuleRegistry::from_config(&config).unwrap();
        let rule = registry.enabled_rules().find(|r| r.name == "leetspeak").unwrap();

        let out: Vec<String> = rule.produce(Some("root")).map(|c| c.text).collect();
        assert_eq!(out, vec!["r00t", "r0ot"]);
        // The default table is fully replaced, so a seed without 'o' yields
        // nothing instead of the built-in a/i substitutions.
        assert_eq!(rule.produce(Some("admin")).count(), 0);
    }

    #[test]
    fn test_reference_year_pinning() {
        let mut config = GeneratorConfig::default();
        config.reference_year = Some(2020);
        let registry = RuleRegistry::from_config(&config).unwrap();
        assert_eq!(registry.reference_year(), 2020);
        let year_rule = registry.enabled_rules().find(|r| r.name == "year_suffix").unwrap();
        let out: Vec<String> = year_rule.produce(Some("pw")).map(|c| c.text).collect();
        assert!(out.contains(&"pw2020".to_string()));
        assert!(out.contains(&"pw18".to_string()));
    }
}
