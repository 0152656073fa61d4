//! Structural hash-type detection, format validation and comparison.

use hashlab_core::HashKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RE_MD5: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)[a-f0-9]{32}$").unwrap());
static RE_SHA1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)[a-f0-9]{40}$").unwrap());
static RE_SHA256: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)[a-f0-9]{64}$").unwrap());
static RE_SHA512: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)[a-f0-9]{128}$").unwrap());
static RE_BCRYPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$2[ayb]\$[0-9]{2}\$[A-Za-z0-9./]{53}$").unwrap());

fn pattern(kind: HashKind) -> Option<&'static Regex> {
    match kind {
        HashKind::Md5 => Some(&*RE_MD5),
        HashKind::Sha1 => Some(&*RE_SHA1),
        HashKind::Sha256 => Some(&*RE_SHA256),
        HashKind::Sha512 => Some(&*RE_SHA512),
        HashKind::Bcrypt => Some(&*RE_BCRYPT),
        HashKind::Unknown => None,
    }
}

/// Detection order; the first matching pattern wins.
const ORDER: [HashKind; 5] = [HashKind::Md5, HashKind::Sha1, HashKind::Sha256, HashKind::Sha512, HashKind::Bcrypt];

/// Classify `s` by length and character set. The input is taken as-is, callers trim.
pub fn detect_hash(s: &str) -> HashKind {
    ORDER
        .into_iter()
        .find(|k| pattern(*k).map_or(false, |re| re.is_match(s)))
        .unwrap_or(HashKind::Unknown)
}

pub fn is_plausible_hash(s: &str) -> bool { detect_hash(s) != HashKind::Unknown }

/// Outcome of checking a string against one or all known formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub valid: bool,
    pub detected_type: HashKind,
    pub length: usize,
}

/// Check `hash` against `expected` when it names a concrete format, otherwise autodetect.
pub fn validate(hash: &str, expected: Option<HashKind>) -> Validation {
    let length = hash.chars().count();
    match expected.and_then(|k| pattern(k).map(|re| (k, re))) {
        Some((kind, re)) => Validation { valid: re.is_match(hash), detected_type: kind, length },
        None => {
            let kind = detect_hash(hash);
            Validation { valid: kind != HashKind::Unknown, detected_type: kind, length }
        }
    }
}

/// Hex digests compare case-insensitively; surrounding whitespace is ignored.
pub fn compare(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
