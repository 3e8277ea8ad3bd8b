//! Common composite password patterns
//!
//! A static catalog of known pattern families (word*YY@, worD17@,
//! Word@2025, WORD1!, word_YY, Word!YY) applied over fixed token tables.
//! Everything is bounded by table sizes; the factor is computed exactly from
//! them.

use once_cell::sync::Lazy;

use wordforge_core::{Candidate, RuleKind};

use crate::capitalize;

/// Two-digit year tokens seen most often as suffixes.
pub static YEARS_SHORT: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "20", "21", "22", "23", "24", "25", "26", "93", "94", "95", "96", "97", "98", "99", "00",
        "01", "02", "03", "04", "05",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

/// Common standalone numbers.
pub static COMMON_NUMS: Lazy<Vec<String>> = Lazy::new(|| {
    ["1", "7", "13", "17", "21", "69", "77", "99"].iter().map(|s| s.to_string()).collect()
});

/// Common special endings.
pub static SPECIAL_ENDINGS: Lazy<Vec<String>> =
    Lazy::new(|| ["!", "@", "#", "!@", "@!", "!!"].iter().map(|s| s.to_string()).collect());

const MID_SPECIALS: [&str; 3] = ["@", "#", "*"];
const TAIL_SPECIALS: [&str; 2] = ["!", "@"];
const SHORT_NUMS: [&str; 3] = ["1", "12", "123"];
const YEAR_RANGE_BACK: i32 = 5;

#[derive(Debug, Clone)]
pub struct CommonPatterns {
    reference_year: i32,
}

impl CommonPatterns {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// All pattern families for one seed. Seeds shorter than two characters
    /// produce nothing, matching the factor being an upper bound.
    pub fn produce<'a>(&'a self, seed: &'a str) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        if seed.chars().count() < 2 {
            return Box::new(std::iter::empty());
        }

        let word = seed.to_string();
        let cap = capitalize(seed);
        let upper = seed.to_uppercase();
        let last_upper = last_letter_upper(seed).filter(|v| v.as_str() != seed);

        // Family 1: word*YY@ over both the raw and capitalized word.
        let f1 = {
            let word = word.clone();
            let cap = cap.clone();
            YEARS_SHORT.iter().flat_map(move |yy| {
                let word = word.clone();
                let cap = cap.clone();
                SPECIAL_ENDINGS.iter().flat_map(move |sp| {
                    [
                        suffixed(&word, &format!("*{yy}{sp}")),
                        suffixed(&cap, &format!("*{yy}{sp}")),
                    ]
                })
            })
        };

        // Family 2: worD17@, last letter uppercased, then number or year.
        let f2 = last_upper.into_iter().flat_map(move |lu| {
            let nums = {
                let lu = lu.clone();
                COMMON_NUMS.iter().flat_map(move |num| {
                    let lu = lu.clone();
                    SPECIAL_ENDINGS.iter().map(move |sp| suffixed(&lu, &format!("{num}{sp}")))
                })
            };
            let years = YEARS_SHORT.iter().flat_map(move |yy| {
                let lu = lu.clone();
                TAIL_SPECIALS.iter().map(move |sp| suffixed(&lu, &format!("{yy}{sp}")))
            });
            nums.chain(years)
        });

        // Family 3: Word@2025, a full year behind a mid separator.
        let f3 = {
            let cap = cap.clone();
            let start = self.reference_year - YEAR_RANGE_BACK;
            (start..=self.reference_year).flat_map(move |year| {
                let cap = cap.clone();
                MID_SPECIALS.iter().map(move |sp| suffixed(&cap, &format!("{sp}{year}")))
            })
        };

        // Family 4: WORD1!, uppercase plus short number and ending.
        let f4 = {
            let upper = upper.clone();
            SHORT_NUMS.iter().flat_map(move |num| {
                let upper = upper.clone();
                SPECIAL_ENDINGS.iter().map(move |sp| suffixed(&upper, &format!("{num}{sp}")))
            })
        };

        // Family 5: word_YY over both case forms.
        let f5 = {
            let word = word.clone();
            let cap = cap.clone();
            YEARS_SHORT
                .iter()
                .flat_map(move |yy| [suffixed(&word, &format!("_{yy}")), suffixed(&cap, &format!("_{yy}"))])
        };

        // Family 6: Word!YY, a special between word and short year.
        let f6 = YEARS_SHORT.iter().flat_map(move |yy| {
            let cap = cap.clone();
            ["!", "@", "#"].into_iter().map(move |sp| suffixed(&cap, &format!("{sp}{yy}")))
        });

        Box::new(f1.chain(f2).chain(f3).chain(f4).chain(f5).chain(f6))
    }

    /// Per-seed output count; exact for a qualifying seed whose last letter
    /// is lowercase, an upper bound otherwise.
    pub fn factor(&self) -> u64 {
        let y = YEARS_SHORT.len() as u64;
        let n = COMMON_NUMS.len() as u64;
        let s = SPECIAL_ENDINGS.len() as u64;
        let full_years = YEAR_RANGE_BACK as u64 + 1;

        2 * y * s // family 1
            + n * s + y * TAIL_SPECIALS.len() as u64 // family 2
            + full_years * MID_SPECIALS.len() as u64 // family 3
            + SHORT_NUMS.len() as u64 * s // family 4
            + 2 * y // family 5
            + 3 * y // family 6
    }
}

fn suffixed(stem: &str, tail: &str) -> Candidate {
    Candidate::suffixed(format!("{stem}{tail}"), RuleKind::CommonPatterns, stem.len())
}

/// Last character uppercased, rest untouched.
fn last_letter_upper(seed: &str) -> Option<String> {
    if seed.is_empty() {
        return None;
    }
    let mut chars: Vec<char> = seed.chars().collect();
    let last = chars.len() - 1;
    chars[last] = chars[last].to_ascii_uppercase();
    Some(chars.into_iter().collect())
}
