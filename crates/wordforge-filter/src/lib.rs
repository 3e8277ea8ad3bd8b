//! WordForge Filter: heuristic plausibility gate
//!
//! Drops candidates unlikely to be real passwords. One toggle gates the
//! whole heuristic set; disabled, every well-formed candidate passes.
//! Per-candidate rejection is a local, silent outcome, never an error.

use wordforge_core::{Candidate, FilterSettings};

/// Characters treated as "special" by the run-length heuristics.
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?`~";

/// Heuristic post-filter over generated candidates.
pub struct PlausibilityFilter {
    settings: FilterSettings,
}

impl PlausibilityFilter {
    pub fn new(settings: FilterSettings) -> Self {
        Self { settings }
    }

    /// A pass-through filter, as if the toggle were off.
    pub fn disabled() -> Self {
        Self::new(FilterSettings { enabled: false, ..FilterSettings::default() })
    }

    /// `true` keeps the candidate, `false` drops it.
    pub fn accept(&self, candidate: &Candidate) -> bool {
        if !self.settings.enabled {
            return true;
        }

        let text = &candidate.text;
        let len = text.chars().count();
        if len < self.settings.min_length || len > self.settings.max_length {
            return false;
        }
        if !text.chars().any(|c| c.is_alphanumeric()) {
            return false;
        }
        if longest_special_run(text) > self.settings.max_special_run {
            return false;
        }
        if longest_repeat_run(text) > self.settings.max_repeat {
            return false;
        }
        if self.is_chained_suffix(candidate) {
            return false;
        }
        true
    }

    /// A suffix-built candidate whose text ends in a long run of digits and
    /// specials reads as suffix stacked onto suffix. A short run is normal
    /// (`hunter21`, `admin123!`); only a run past the bound is rejected, so
    /// seeds that already end in a digit keep their suffix output.
    fn is_chained_suffix(&self, candidate: &Candidate) -> bool {
        if !candidate.produced_by.appends_suffix() {
            return false;
        }
        trailing_suffix_run(&candidate.text) > self.settings.max_tail_run
    }
}

/// Length of the trailing run of digit or special characters.
fn trailing_suffix_run(text: &str) -> usize {
    text.chars()
        .rev()
        .take_while(|&c| c.is_ascii_digit() || is_special(c))
        .count()
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

fn longest_special_run(text: &str) -> usize {
    longest_run(text, is_special)
}

/// Longest run of one identical character.
fn longest_repeat_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut last: Option<char> = None;
    for c in text.chars() {
        current = if last == Some(c) { current + 1 } else { 1 };
        longest = longest.max(current);
        last = Some(c);
    }
    longest
}

fn longest_run(text: &str, pred: impl Fn(char) -> bool) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        current = if pred(c) { current + 1 } else { 0 };
        longest = longest.max(current);
    }
    longest
}
