//! Mutation engine
//!
//! One lazy `Iterator` over all candidates for a run. Seed-independent rules
//! emit first, once each, in priority order; then every seed in input order
//! runs every seed-dependent rule in priority order. Each `next()` advances
//! exactly one rule/seed cursor, so nothing is ever materialized in bulk.
//! The sequence is single-pass: a fresh run rebuilds the engine.

use wordforge_core::Candidate;
use wordforge_rules::{MutationRule, RuleRegistry};

enum Phase {
    Independent,
    PerSeed,
    Done,
}

/// Lazy composition of all enabled rules over the seed stream.
pub struct MutationEngine<'a> {
    independent: Vec<&'a MutationRule>,
    dependent: Vec<&'a MutationRule>,
    seeds: &'a [String],
    current: Option<Box<dyn Iterator<Item = Candidate> + 'a>>,
    phase: Phase,
    ind_idx: usize,
    seed_idx: usize,
    rule_idx: usize,
}

impl<'a> MutationEngine<'a> {
    pub fn new(registry: &'a RuleRegistry, seeds: &'a [String]) -> Self {
        let (independent, dependent): (Vec<_>, Vec<_>) = registry
            .enabled_rules()
            .partition(|rule| rule.is_seed_independent());
        Self {
            independent,
            dependent,
            seeds,
            current: None,
            phase: Phase::Independent,
            ind_idx: 0,
            seed_idx: 0,
            rule_idx: 0,
        }
    }
}

impl<'a> Iterator for MutationEngine<'a> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(candidate) = current.next() {
                    return Some(candidate);
                }
                self.current = None;
            }

            match self.phase {
                Phase::Independent => {
                    if self.ind_idx < self.independent.len() {
                        self.current = Some(self.independent[self.ind_idx].produce(None));
                        self.ind_idx += 1;
                    } else {
                        self.phase = Phase::PerSeed;
                    }
                }
                Phase::PerSeed => {
                    if self.seed_idx >= self.seeds.len() || self.dependent.is_empty() {
                        self.phase = Phase::Done;
                    } else if self.rule_idx >= self.dependent.len() {
                        self.rule_idx = 0;
                        self.seed_idx += 1;
                        if self.seed_idx >= self.seeds.len() {
                            self.phase = Phase::Done;
                        }
                    } else {
                        let seed = self.seeds[self.seed_idx].as_str();
                        self.current = Some(self.dependent[self.rule_idx].produce(Some(seed)));
                        self.rule_idx += 1;
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}
