use hashlab_core::{Algorithm, HashKind};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use wordlist::WordlistOptions;

use crate::{normalize, DynamicCache, StaticTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found { algorithm: Algorithm, plaintext: String },
    NotFound,
}

impl LookupResult {
    pub fn is_found(&self) -> bool { matches!(self, LookupResult::Found { .. }) }

    pub fn plaintext(&self) -> Option<&str> {
        match self {
            LookupResult::Found { plaintext, .. } => Some(plaintext.as_str()),
            LookupResult::NotFound => None,
        }
    }
}

/// One row of a batch decode. `original_value` is `Some("")` for the empty-input
/// digest and `None` only when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecord {
    pub hash: String,
    pub hash_type: HashKind,
    pub found: bool,
    pub original_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStats {
    pub algorithm: Algorithm,
    pub static_entries: usize,
    pub dynamic_entries: usize,
}

/// Static tables plus the learning cache. Build once at startup and share
/// behind an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct LookupEngine {
    tables: Vec<StaticTable>,
    dynamic: DynamicCache,
}

impl LookupEngine {
    pub fn build(opts: &WordlistOptions) -> Self {
        Self::from_candidates(wordlist::build(opts))
    }

    pub fn from_candidates(candidates: Vec<String>) -> Self {
        let started = Instant::now();
        let tables: Vec<StaticTable> = Algorithm::ALL
            .into_par_iter()
            .map(|a| StaticTable::build(a, &candidates))
            .collect();
        tracing::info!(
            candidates = candidates.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "static lookup tables built"
        );
        LookupEngine { tables, dynamic: DynamicCache::new() }
    }

    pub fn static_table(&self, algorithm: Algorithm) -> &StaticTable {
        &self.tables[algorithm.index()]
    }

    pub fn dynamic(&self) -> &DynamicCache { &self.dynamic }

    fn probe(&self, algorithm: Algorithm, digest: &str) -> Option<String> {
        self.dynamic
            .get(algorithm, digest)
            .or_else(|| self.static_table(algorithm).get(digest).map(str::to_string))
    }

    /// Detected kind of the normalized input alongside the result.
    pub fn lookup_detailed(&self, raw: &str) -> (HashKind, LookupResult) {
        let digest = normalize(raw);
        let kind = detect::detect_hash(&digest);
        let hit = match kind.algorithm() {
            Some(a) => self.probe(a, &digest).map(|p| (a, p)),
            None if kind == HashKind::Unknown => self.scan_all(&digest),
            // bcrypt is salted, nothing to reverse
            None => None,
        };
        let result = match hit {
            Some((algorithm, plaintext)) => LookupResult::Found { algorithm, plaintext },
            None => LookupResult::NotFound,
        };
        (kind, result)
    }

    fn scan_all(&self, digest: &str) -> Option<(Algorithm, String)> {
        Algorithm::ALL
            .iter()
            .find_map(|&a| self.dynamic.get(a, digest).map(|p| (a, p)))
            .or_else(|| {
                Algorithm::ALL
                    .iter()
                    .find_map(|&a| self.static_table(a).get(digest).map(|p| (a, p.to_string())))
            })
    }

    pub fn lookup_one(&self, raw: &str) -> LookupResult {
        self.lookup_detailed(raw).1
    }

    /// One record per non-empty input, in input order. Blank entries are skipped,
    /// so the output may be shorter than the input.
    pub fn lookup_batch<S: AsRef<str>>(&self, raw: &[S]) -> Vec<BatchRecord> {
        raw.iter()
            .map(AsRef::as_ref)
            .filter(|h| !h.trim().is_empty())
            .map(|h| {
                let (kind, result) = self.lookup_detailed(h);
                match result {
                    LookupResult::Found { algorithm, plaintext } => BatchRecord {
                        hash: h.to_string(),
                        hash_type: algorithm.into(),
                        found: true,
                        original_value: Some(plaintext),
                    },
                    LookupResult::NotFound => BatchRecord {
                        hash: h.to_string(),
                        hash_type: kind,
                        found: false,
                        original_value: None,
                    },
                }
            })
            .collect()
    }

    pub fn learn(&self, algorithm: Algorithm, digest: &str, plaintext: &str) -> bool {
        let inserted = self.dynamic.learn(algorithm, digest, plaintext);
        if inserted {
            tracing::debug!(%algorithm, "learned digest");
        }
        inserted
    }

    /// Learn only for reversible kinds; bcrypt and unknown are ignored.
    pub fn learn_kind(&self, kind: HashKind, digest: &str, plaintext: &str) -> bool {
        match kind.algorithm() {
            Some(a) => self.learn(a, digest, plaintext),
            None => false,
        }
    }

    pub fn stats(&self) -> Vec<TableStats> {
        Algorithm::ALL
            .iter()
            .map(|&a| TableStats {
                algorithm: a,
                static_entries: self.static_table(a).len(),
                dynamic_entries: self.dynamic.len(a),
            })
            .collect()
    }
}
