use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use hashlab_core::Algorithm;

/// Runtime-learned digest → plaintext maps, one per algorithm.
///
/// Entries are append-only and the first writer wins. Inserts go through the
/// shard-locked entry API, so a reader never sees a partially written pair.
#[derive(Debug)]
pub struct DynamicCache {
    tables: [DashMap<String, String>; 4],
}

impl Default for DynamicCache {
    fn default() -> Self { Self::new() }
}

impl DynamicCache {
    pub fn new() -> Self {
        DynamicCache { tables: std::array::from_fn(|_| DashMap::new()) }
    }

    /// Record `digest → plaintext` unless the digest is already known.
    /// Returns whether a new entry was inserted.
    pub fn learn(&self, algorithm: Algorithm, digest: &str, plaintext: &str) -> bool {
        let key = crate::normalize(digest);
        match self.tables[algorithm.index()].entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(plaintext.to_string());
                true
            }
        }
    }

    /// `digest` must already be normalized.
    pub fn get(&self, algorithm: Algorithm, digest: &str) -> Option<String> {
        self.tables[algorithm.index()].get(digest).map(|v| v.value().clone())
    }

    pub fn len(&self, algorithm: Algorithm) -> usize {
        self.tables[algorithm.index()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_write_wins() {
        let c = DynamicCache::new();
        assert!(c.learn(Algorithm::Sha1, "ABCD", "first"));
        assert!(!c.learn(Algorithm::Sha1, "abcd", "second"));
        assert_eq!(c.get(Algorithm::Sha1, "abcd").as_deref(), Some("first"));
        assert_eq!(c.len(Algorithm::Sha1), 1);
        assert_eq!(c.len(Algorithm::Md5), 0);
        assert_eq!(c.get(Algorithm::Md5, "abcd"), None);
    }

    #[test]
    fn concurrent_learners_agree_on_one_value() {
        let c = Arc::new(DynamicCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let c = c.clone();
                std::thread::spawn(move || c.learn(Algorithm::Md5, "ff", &format!("writer{}", i)))
            })
            .collect();
        let inserted = handles.into_iter().map(|h| h.join().unwrap()).filter(|b| *b).count();
        assert_eq!(inserted, 1);
        let v = c.get(Algorithm::Md5, "ff").unwrap();
        assert!(v.starts_with("writer"));
    }
}
