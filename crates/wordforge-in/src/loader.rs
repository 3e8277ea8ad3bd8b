//! Seed loading
//!
//! One seed per line, trimmed, empties skipped, optional input-level dedup.
//! Invalid UTF-8 is replaced rather than treated as fatal; wordlist files in
//! the wild come in every encoding.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use wordforge_core::{SeedStats, WordforgeError};

/// An ordered, finite seed sequence with a known count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedList {
    seeds: Vec<String>,
}

impl SeedList {
    /// Wrap pre-normalized seeds. Empty strings are skipped.
    pub fn new(seeds: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            seeds: seeds
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// One pass over lengths only; seed content is not walked.
    pub fn stats(&self) -> SeedStats {
        SeedStats::from_lengths(self.seeds.iter().map(|s| s.len()))
    }
}

/// Loader turning raw line-oriented input into a `SeedList`.
#[derive(Debug, Clone)]
pub struct SeedLoader {
    min_length: usize,
    dedup: bool,
}

impl Default for SeedLoader {
    fn default() -> Self {
        Self { min_length: 1, dedup: true }
    }
}

impl SeedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip seeds shorter than this many characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Keep duplicate input lines instead of collapsing them.
    pub fn keep_duplicates(mut self) -> Self {
        self.dedup = false;
        self
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<SeedList, WordforgeError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            WordforgeError::Seed(format!("{}: {e}", path.as_ref().display()))
        })?;
        self.load(BufReader::new(file))
    }

    pub fn load(&self, mut reader: impl Read) -> Result<SeedList, WordforgeError> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        Ok(self.load_str(&String::from_utf8_lossy(&raw)))
    }

    pub fn load_str(&self, input: &str) -> SeedList {
        let mut seeds = Vec::new();
        let mut seen = HashSet::new();
        for line in input.lines() {
            let seed = line.trim();
            if seed.chars().count() < self.min_length.max(1) {
                continue;
            }
            if self.dedup && !seen.insert(seed.to_string()) {
                continue;
            }
            seeds.push(seed.to_string());
        }
        SeedList { seeds }
    }
}
