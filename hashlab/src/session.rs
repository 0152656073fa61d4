//! Line-oriented JSON session: one request per stdin line, one response per
//! stdout line, all against a single engine so learned digests carry over.

use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::service::{self, HashService};

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    Generate { input_text: String, hash_types: Vec<String> },
    GenerateFile { path: PathBuf, hash_types: Vec<String> },
    Batch { inputs: Vec<String>, hash_types: Vec<String> },
    Lookup { hash: String },
    Decode { hashes: Vec<Value> },
    Compare { hash1: String, hash2: String },
    Validate {
        hash: String,
        #[serde(rename = "type")]
        kind: Option<String>,
    },
    Hmac { message: String, key: String, algorithm: Option<String> },
    Stats,
}

fn to_value<T: serde::Serialize>(r: Result<T>) -> Value {
    match r.and_then(|v| Ok(serde_json::to_value(v)?)) {
        Ok(v) => v,
        Err(e) => json!({ "error": e.to_string() }),
    }
}

/// Answer one request line. Malformed requests become `{"error": ...}`.
pub fn handle(svc: &HashService, line: &str) -> Value {
    let req: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => return json!({ "error": format!("bad request: {}", e) }),
    };
    match req {
        Request::Generate { input_text, hash_types } => to_value(svc.generate_text(&input_text, &hash_types)),
        Request::GenerateFile { path, hash_types } => to_value(svc.generate_file(&path, &hash_types)),
        Request::Batch { inputs, hash_types } => to_value(svc.generate_batch(&inputs, &hash_types)),
        Request::Lookup { hash } => to_value(svc.lookup(&hash)),
        Request::Decode { hashes } => json!({ "results": svc.batch_decode(&hashes) }),
        Request::Compare { hash1, hash2 } => to_value(service::compare(&hash1, &hash2)),
        Request::Validate { hash, kind } => to_value(service::validate(&hash, kind.as_deref())),
        Request::Hmac { message, key, algorithm } => to_value(service::hmac(&message, &key, algorithm.as_deref())),
        Request::Stats => json!({ "stats": svc.stats() }),
    }
}

pub async fn run(svc: Arc<HashService>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();
    let mut handled = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() { continue; }
        let svc = svc.clone();
        // bcrypt and file hashing are CPU/IO bound
        let resp = tokio::task::spawn_blocking(move || handle(&svc, &line)).await?;
        out.write_all(format!("{}\n", resp).as_bytes()).await?;
        out.flush().await?;
        handled += 1;
    }
    tracing::info!(requests = handled, "session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookup::LookupEngine;

    fn service() -> HashService {
        HashService::new(Arc::new(LookupEngine::from_candidates(vec!["test".into()])), 4)
    }

    #[test]
    fn learning_persists_across_requests() {
        let svc = service();
        let gen = handle(&svc, r#"{"op":"generate","inputText":"session secret","hashTypes":["sha1"]}"#);
        let digest = gen["hashResults"]["sha1"].as_str().unwrap().to_string();
        let found = handle(&svc, &format!(r#"{{"op":"lookup","hash":"{}"}}"#, digest));
        assert_eq!(found["found"], true);
        assert_eq!(found["originalValue"], "session secret");
        assert_eq!(found["hashType"], "sha1");
    }

    #[test]
    fn decode_and_stats() {
        let svc = service();
        let r = handle(&svc, r#"{"op":"decode","hashes":["098f6bcd4621d373cade4e832627b4f6", 7, "nope"]}"#);
        let rows = r["results"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["originalValue"], "test");
        assert_eq!(rows[1]["found"], false);
        assert_eq!(rows[1]["originalValue"], Value::Null);

        let s = handle(&svc, r#"{"op":"stats"}"#);
        assert_eq!(s["stats"].as_array().unwrap().len(), 4);
        assert_eq!(s["stats"][0]["staticEntries"], 1);
    }

    #[test]
    fn validate_compare_hmac_requests() {
        let svc = service();
        let v = handle(&svc, r#"{"op":"validate","hash":"abc","type":"md5"}"#);
        assert_eq!(v["valid"], false);
        assert_eq!(v["length"], 3);
        let c = handle(&svc, r#"{"op":"compare","hash1":"AA","hash2":"aa"}"#);
        assert_eq!(c["match"], true);
        let h = handle(&svc, r#"{"op":"hmac","message":"m","key":"k","algorithm":"md5"}"#);
        assert_eq!(h["hmac"].as_str().unwrap().len(), 32);
    }

    #[test]
    fn errors_are_reported_inline() {
        let svc = service();
        assert!(handle(&svc, "not json")["error"].as_str().unwrap().starts_with("bad request"));
        assert!(handle(&svc, r#"{"op":"reverse"}"#)["error"].is_string());
        assert_eq!(handle(&svc, r#"{"op":"lookup","hash":""}"#)["error"], "Hash required");
    }
}
