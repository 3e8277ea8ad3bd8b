//! Leetspeak substitutions (a→4, e→3, i→1, o→0, s→5)
//!
//! The full power set of substitution choices explodes combinatorially, so
//! this rule emits at most three variants per seed: everything substituted,
//! vowels only, and the first substitutable character only.

use std::collections::BTreeMap;

use wordforge_core::{Candidate, RuleKind};

/// Character substitution rule with a fixed table.
#[derive(Debug, Clone)]
pub struct Leetspeak {
    table: BTreeMap<char, char>,
}

impl Default for Leetspeak {
    fn default() -> Self {
        // The statistically most common single substitution per character.
        let table = BTreeMap::from([
            ('a', '4'),
            ('b', '8'),
            ('e', '3'),
            ('i', '1'),
            ('l', '1'),
            ('o', '0'),
            ('s', '5'),
            ('t', '7'),
        ]);
        Self { table }
    }
}

impl Leetspeak {
    pub fn new(table: BTreeMap<char, char>) -> Self {
        Self { table }
    }

    /// At most three variants, identical ones collapsed, the unchanged seed
    /// never re-emitted.
    pub fn produce<'a>(&'a self, seed: &'a str) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        let full = self.substitute(seed, |_| true);
        let vowels = self.substitute(seed, |c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        let first = self.substitute_first(seed);

        let mut variants = Vec::with_capacity(3);
        for variant in [full, vowels, first] {
            if variant != seed && !variants.contains(&variant) {
                variants.push(variant);
            }
        }
        Box::new(
            variants
                .into_iter()
                .map(|text| Candidate::whole(text, RuleKind::Leetspeak)),
        )
    }

    /// Upper bound on candidates per seed.
    pub fn factor(&self) -> u64 {
        3
    }

    fn substitute(&self, seed: &str, eligible: impl Fn(char) -> bool) -> String {
        seed.chars()
            .map(|c| {
                let lower = c.to_ascii_lowercase();
                if eligible(lower) {
                    self.table.get(&lower).copied().unwrap_or(c)
                } else {
                    c
                }
            })
            .collect()
    }

    fn substitute_first(&self, seed: &str) -> String {
        let mut done = false;
        seed.chars()
            .map(|c| {
                let lower = c.to_ascii_lowercase();
                match self.table.get(&lower) {
                    Some(&sub) if !done => {
                        done = true;
                        sub
                    }
                    _ => c,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(rule: &Leetspeak, seed: &str) -> Vec<String> {
        rule.produce(seed).map(|c| c.text).collect()
    }

    #[test]
    fn test_password_yields_p4ssw0rd() {
        let rule = Leetspeak::default();
        let out = texts(&rule, "password");
        assert!(out.contains(&"p4ssw0rd".to_string()), "vowel variant missing: {out:?}");
        assert!(out.contains(&"p455w0rd".to_string()), "full variant missing: {out:?}");
        assert!(out.contains(&"p4ssword".to_string()), "first-char variant missing: {out:?}");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let rule = Leetspeak::default();
        assert_eq!(texts(&rule, "secret"), texts(&rule, "secret"));
    }

    #[test]
    fn test_no_substitutable_chars() {
        let rule = Leetspeak::default();
        assert!(texts(&rule, "xyz").is_empty());
    }

    #[test]
    fn test_bounded_by_factor() {
        let rule = Leetspeak::default();
        for seed in ["administrator", "aeiou", "passwordpassword"] {
            assert!(rule.produce(seed).count() as u64 <= rule.factor());
        }
    }

    #[test]
    fn test_case_insensitive_substitution() {
        let rule = Leetspeak::default();
        let out = texts(&rule, "PASSWORD");
        assert!(out.contains(&"P455W0RD".to_string()), "{out:?}");
    }
}
