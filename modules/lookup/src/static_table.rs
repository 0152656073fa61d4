use hashlab_core::Algorithm;
use rayon::prelude::*;
use std::collections::HashMap;

/// Immutable digest → plaintext dictionary for one algorithm.
#[derive(Debug, Clone)]
pub struct StaticTable {
    algorithm: Algorithm,
    entries: HashMap<String, String>,
}

impl StaticTable {
    /// Digest every candidate. On a digest collision the earlier candidate is kept.
    pub fn build(algorithm: Algorithm, candidates: &[String]) -> Self {
        let hashed: Vec<String> = candidates
            .par_iter()
            .map(|c| digests::digest_hex(algorithm, c.as_bytes()))
            .collect();
        let mut entries = HashMap::with_capacity(candidates.len());
        for (digest, plain) in hashed.into_iter().zip(candidates) {
            entries.entry(digest).or_insert_with(|| plain.clone());
        }
        StaticTable { algorithm, entries }
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// `digest` must already be normalized.
    pub fn get(&self, digest: &str) -> Option<&str> {
        self.entries.get(digest).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercase_hex_of_fixed_length() {
        let words: Vec<String> = ["", "a", "Hello"].iter().map(|s| s.to_string()).collect();
        for a in Algorithm::ALL {
            let t = StaticTable::build(a, &words);
            assert_eq!(t.len(), 3);
            for w in &words {
                let d = digests::digest_hex(a, w.as_bytes());
                assert_eq!(d.len(), a.hex_len());
                assert_eq!(d, d.to_ascii_lowercase());
                assert_eq!(t.get(&d), Some(w.as_str()));
            }
        }
    }

    #[test]
    fn duplicate_candidates_keep_first() {
        let words: Vec<String> = vec!["x".into(), "x".into()];
        let t = StaticTable::build(Algorithm::Md5, &words);
        assert_eq!(t.len(), 1);
    }
}
