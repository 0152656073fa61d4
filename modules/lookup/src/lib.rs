//! Reverse lookup of unsalted digests.
//!
//! A flat precomputed dictionary (digest → plaintext) per algorithm, built once
//! from the [`wordlist`] corpus, plus a per-algorithm cache that learns every
//! digest the host computes at runtime. Despite the common "rainbow table"
//! label this is a direct dictionary: there are no reduction chains.

mod dynamic;
mod engine;
mod static_table;

pub use dynamic::DynamicCache;
pub use engine::{BatchRecord, LookupEngine, LookupResult, TableStats};
pub use static_table::StaticTable;

/// Trim and lowercase a digest the way every table key is stored.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
