//! Deterministic candidate corpus used to seed the precomputed lookup tables.
//!
//! Sections are emitted in a fixed precedence (curated words, keyboard walks,
//! numbers, hex bytes, prefixed numbers, dates, core-word variants). The corpus
//! is de-duplicated keeping the first occurrence and capped at
//! [`WordlistOptions::max_candidates`], so truncation always drops the tail.

use serde::Deserialize;
use std::collections::HashSet;
use std::ops::RangeInclusive;

mod words;

pub use words::{CORE_WORDS, CURATED, KEYBOARD_WALKS, PATTERN_AFFIXES};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WordlistOptions {
    pub max_candidates: usize,
    /// Largest plain number emitted.
    pub numeric_max: u32,
    /// Largest byte value emitted as two-digit hex.
    pub hex_max: u8,
    /// Largest number combined with the affix set.
    pub pattern_max: u32,
    pub year_start: u16,
    pub year_end: u16,
}

impl Default for WordlistOptions {
    fn default() -> Self {
        WordlistOptions {
            max_candidates: 50_000,
            numeric_max: 9_999,
            hex_max: 255,
            pattern_max: 999,
            year_start: 1970,
            year_end: 2030,
        }
    }
}

impl WordlistOptions {
    pub fn years(&self) -> RangeInclusive<u16> { self.year_start..=self.year_end }
}

struct Corpus {
    seen: HashSet<String>,
    out: Vec<String>,
    cap: usize,
}

impl Corpus {
    fn new(cap: usize) -> Self {
        Corpus { seen: HashSet::new(), out: Vec::new(), cap }
    }

    fn full(&self) -> bool { self.out.len() >= self.cap }

    fn push(&mut self, s: String) {
        if self.full() { return; }
        if self.seen.insert(s.clone()) {
            self.out.push(s);
        }
    }

    fn extend<I: IntoIterator<Item = String>>(&mut self, it: I) {
        for s in it {
            if self.full() { break; }
            self.push(s);
        }
    }
}

/// Build the candidate corpus. Same options, same sequence.
pub fn build(opts: &WordlistOptions) -> Vec<String> {
    let mut c = Corpus::new(opts.max_candidates);

    c.extend(CURATED.iter().map(|w| w.to_string()));
    c.extend(KEYBOARD_WALKS.iter().map(|w| w.to_string()));

    for i in 0..=opts.numeric_max {
        if c.full() { break; }
        c.push(i.to_string());
        if i <= 99 { c.push(format!("{:02}", i)); }
        if i <= 999 { c.push(format!("{:03}", i)); }
        if i <= 9_999 { c.push(format!("{:04}", i)); }
    }

    for b in 0..=opts.hex_max {
        c.push(format!("{:02x}", b));
        c.push(format!("{:02X}", b));
    }

    for affix in PATTERN_AFFIXES {
        c.extend((0..=opts.pattern_max).map(|n| format!("{}{}", affix, n)));
        c.extend((0..=opts.pattern_max).map(|n| format!("{}{}", n, affix)));
    }

    for year in opts.years() {
        for month in 1..=12u8 {
            c.push(format!("{}{:02}", year, month));
            c.push(format!("{:02}{}", month, year));
            c.push(format!("{}-{:02}", year, month));
            c.push(format!("{:02}/{}", month, year));
        }
    }

    for word in CORE_WORDS {
        c.extend(variants(word));
    }

    tracing::debug!(candidates = c.out.len(), cap = opts.max_candidates, "wordlist built");
    c.out
}

/// Case, suffix and leetspeak variants of one word, in emission order.
pub fn variants(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    let upper = word.to_uppercase();
    let cap = capitalize(&lower);
    let mut out = vec![lower.clone(), upper, cap.clone()];
    for base in [&lower, &cap] {
        out.push(format!("{}!", base));
        out.push(format!("{}123", base));
        out.push(format!("{}1", base));
        out.push(format!("123{}", base));
    }
    out.push(leetspeak(&lower));
    out
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fixed substitution a→4 e→3 i→1 o→0 s→5 t→7.
pub fn leetspeak(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            'a' => '4',
            'e' => '3',
            'i' => '1',
            'o' => '0',
            's' => '5',
            't' => '7',
            other => other,
        })
        .collect()
}

/// Line count and distinct-entry count of a wordlist file's content.
pub fn wordlist_stats(content: &str) -> (usize, usize) {
    let mut total = 0usize;
    let mut set = HashSet::new();
    for line in content.lines() {
        let w = line.trim();
        if w.is_empty() || w.starts_with('#') { continue; }
        total += 1;
        set.insert(w);
    }
    (total, set.len())
}
