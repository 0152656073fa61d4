//! Request handling on top of the lookup engine and digest primitives.
//!
//! Every digest this layer computes for md5/sha1/sha256/sha512 is fed back into
//! the engine's learning cache, so anything generated here becomes reversible.

use anyhow::{anyhow, Result};
use digests::GenerateKind;
use hashlab_core::{Algorithm, HashKind};
use lookup::{BatchRecord, LookupEngine, TableStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| String::new())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generated {
    pub hash_results: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub input: String,
    pub hashes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchGenerated {
    pub results: Vec<BatchItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub found: bool,
    pub original_value: Option<String>,
    pub hash_type: HashKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    #[serde(rename = "match")]
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    pub detected_type: HashKind,
    pub length: usize,
    pub format: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HmacResponse {
    pub hmac: String,
    pub algorithm: Algorithm,
    pub key_length: usize,
}

#[derive(Clone)]
pub struct HashService {
    engine: Arc<LookupEngine>,
    bcrypt_cost: u32,
}

impl HashService {
    pub fn new(engine: Arc<LookupEngine>, bcrypt_cost: u32) -> Self {
        HashService { engine, bcrypt_cost }
    }

    pub fn engine(&self) -> &LookupEngine { &self.engine }

    fn hash_text(&self, text: &str, kinds: &[GenerateKind]) -> Result<BTreeMap<String, String>> {
        let mut out = BTreeMap::new();
        for &k in kinds {
            let digest = match k {
                GenerateKind::Plain(a) => {
                    let d = digests::digest_hex(a, text.as_bytes());
                    self.engine.learn(a, &d, text);
                    d
                }
                GenerateKind::Bcrypt => digests::bcrypt_hash(text, self.bcrypt_cost)?,
            };
            out.insert(k.name().to_string(), digest);
        }
        Ok(out)
    }

    /// Digest `text` with each requested type. Unrecognised type names are skipped.
    pub fn generate_text<S: AsRef<str>>(&self, text: &str, types: &[S]) -> Result<Generated> {
        if text.is_empty() || types.is_empty() {
            return Err(anyhow!("Invalid input"));
        }
        let hash_results = self.hash_text(text, &digests::parse_kinds(types))?;
        Ok(Generated { hash_results, file_name: None, file_size: None, generated_at: now_rfc3339() })
    }

    /// Digest a file's bytes. The learned plaintext is the file *name*, not its
    /// content; bcrypt is not offered for files.
    pub fn generate_file<S: AsRef<str>>(&self, path: &Path, types: &[S]) -> Result<Generated> {
        if types.is_empty() {
            return Err(anyhow!("File and hash types required"));
        }
        let size = std::fs::metadata(path)?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let mut hash_results = BTreeMap::new();
        for k in digests::parse_kinds(types) {
            if let GenerateKind::Plain(a) = k {
                let d = digests::digest_file(a, path)?;
                self.engine.learn(a, &d, &file_name);
                hash_results.insert(a.name().to_string(), d);
            }
        }
        Ok(Generated { hash_results, file_name: Some(file_name), file_size: Some(size), generated_at: now_rfc3339() })
    }

    pub fn generate_batch<I: AsRef<str>, S: AsRef<str>>(&self, inputs: &[I], types: &[S]) -> Result<BatchGenerated> {
        if types.is_empty() {
            return Err(anyhow!("Invalid inputs or hash types"));
        }
        let kinds = digests::parse_kinds(types);
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let input = input.as_ref();
            results.push(BatchItem { input: input.to_string(), hashes: self.hash_text(input, &kinds)? });
        }
        Ok(BatchGenerated { results })
    }

    pub fn lookup(&self, hash: &str) -> Result<LookupResponse> {
        if hash.trim().is_empty() {
            return Err(anyhow!("Hash required"));
        }
        let (kind, result) = self.engine.lookup_detailed(hash);
        let hash_type = match &result {
            lookup::LookupResult::Found { algorithm, .. } => (*algorithm).into(),
            lookup::LookupResult::NotFound => kind,
        };
        Ok(LookupResponse {
            found: result.is_found(),
            original_value: result.plaintext().map(str::to_string),
            hash_type,
        })
    }

    /// Decode a JSON array as received from a client. Non-string and blank
    /// elements produce no record, so positions do not line up with the input.
    pub fn batch_decode(&self, values: &[serde_json::Value]) -> Vec<BatchRecord> {
        let hashes: Vec<&str> = values.iter().filter_map(serde_json::Value::as_str).collect();
        self.engine.lookup_batch(&hashes)
    }

    pub fn stats(&self) -> Vec<TableStats> { self.engine.stats() }
}

pub fn compare(hash1: &str, hash2: &str) -> Result<CompareResponse> {
    if hash1.is_empty() || hash2.is_empty() {
        return Err(anyhow!("Both hashes required"));
    }
    Ok(CompareResponse { matched: detect::compare(hash1, hash2) })
}

/// An unrecognised `kind` falls back to autodetection.
pub fn validate(hash: &str, kind: Option<&str>) -> Result<ValidateResponse> {
    if hash.is_empty() {
        return Err(anyhow!("Hash is required"));
    }
    let expected = kind.and_then(|k| k.parse::<HashKind>().ok()).filter(|k| *k != HashKind::Unknown);
    let v = detect::validate(hash, expected);
    Ok(ValidateResponse {
        valid: v.valid,
        detected_type: v.detected_type,
        length: v.length,
        format: if v.valid { "valid" } else { "invalid" },
    })
}

pub fn hmac(message: &str, key: &str, algorithm: Option<&str>) -> Result<HmacResponse> {
    if message.is_empty() || key.is_empty() {
        return Err(anyhow!("Message and key are required"));
    }
    let algorithm: Algorithm = algorithm.unwrap_or("sha256").parse()?;
    let hmac = digests::hmac_hex(algorithm, key.as_bytes(), message.as_bytes())?;
    Ok(HmacResponse { hmac, algorithm, key_length: key.len() })
}
