//! End-to-end checks against the full default corpus.
//!
//! The engine is built once via `OnceLock` and shared; building the four
//! static tables is the expensive part.

use std::sync::{Arc, OnceLock};

use digests::digest_hex;
use hashlab_core::{Algorithm, HashKind};
use lookup::{LookupEngine, LookupResult};
use proptest::prelude::*;
use wordlist::WordlistOptions;

fn engine() -> &'static LookupEngine {
    static ENGINE: OnceLock<LookupEngine> = OnceLock::new();
    ENGINE.get_or_init(|| LookupEngine::build(&WordlistOptions::default()))
}

#[test]
fn every_candidate_reverses_for_every_algorithm() {
    let e = engine();
    let corpus = wordlist::build(&WordlistOptions::default());
    for a in Algorithm::ALL {
        assert_eq!(e.static_table(a).len(), corpus.len());
        for word in &corpus {
            let d = digest_hex(a, word.as_bytes());
            match e.lookup_one(&d) {
                LookupResult::Found { algorithm, plaintext } => {
                    assert_eq!(algorithm, a);
                    assert_eq!(&plaintext, word);
                }
                LookupResult::NotFound => panic!("{} {:?} not found", a, word),
            }
        }
    }
}

#[test]
fn known_scenarios() {
    let e = engine();
    assert_eq!(
        e.lookup_one("5d41402abc4b2a76b9719d911017c592"),
        LookupResult::Found { algorithm: Algorithm::Md5, plaintext: "hello".into() }
    );
    assert_eq!(
        e.lookup_one("d41d8cd98f00b204e9800998ecf8427e"),
        LookupResult::Found { algorithm: Algorithm::Md5, plaintext: String::new() }
    );
    assert_eq!(
        detect::detect_hash("$2a$10$N9qo8uLOickgx2ZMRZoMye.jKbQK1CfSrFoqo4C2i3OoVmPqWDlSS"),
        HashKind::Bcrypt
    );

    let out = e.lookup_batch(&["5d41402abc4b2a76b9719d911017c592", "notahash"]);
    assert_eq!(out.len(), 2);
    assert!(out[0].found);
    assert_eq!(out[0].original_value.as_deref(), Some("hello"));
    assert!(!out[1].found);
    assert_eq!(out[1].hash_type, HashKind::Unknown);
}

#[test]
fn batch_records_serialize_like_the_api() {
    let e = engine();
    let out = e.lookup_batch(&["D41D8CD98F00B204E9800998ECF8427E"]);
    let v = serde_json::to_value(&out[0]).unwrap();
    assert_eq!(v["hash"], "D41D8CD98F00B204E9800998ECF8427E");
    assert_eq!(v["hashType"], "md5");
    assert_eq!(v["found"], true);
    assert_eq!(v["originalValue"], "");
}

#[test]
fn learned_digest_outside_corpus_is_found() {
    let e = engine();
    let secret = "correct horse battery staple";
    let d = digest_hex(Algorithm::Sha512, secret.as_bytes());
    assert_eq!(e.lookup_one(&d), LookupResult::NotFound);
    assert!(e.learn(Algorithm::Sha512, &d, secret));
    assert!(!e.learn(Algorithm::Sha512, &d, "impostor"));
    assert_eq!(e.lookup_one(&d).plaintext(), Some(secret));
}

#[test]
fn concurrent_learn_and_lookup() {
    let e = Arc::new(LookupEngine::from_candidates(vec!["seed".into()]));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let e = e.clone();
            std::thread::spawn(move || {
                for i in 0..250 {
                    let s = format!("word-{}", i);
                    let d = digest_hex(Algorithm::Sha256, s.as_bytes());
                    e.learn(Algorithm::Sha256, &d, &s);
                    if let Some(p) = e.lookup_one(&d).plaintext() {
                        assert_eq!(p, s, "thread {}", t);
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(e.dynamic().len(Algorithm::Sha256), 250);
}

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Md5),
        Just(Algorithm::Sha1),
        Just(Algorithm::Sha256),
        Just(Algorithm::Sha512),
    ]
}

proptest! {
    #[test]
    fn learn_then_lookup_round_trips(s in ".{0,40}", a in any_algorithm()) {
        let e = engine();
        let d = digest_hex(a, s.as_bytes());
        e.learn(a, &d, &s);
        prop_assert_eq!(e.lookup_one(&d), LookupResult::Found { algorithm: a, plaintext: s.clone() });
    }

    #[test]
    fn detection_is_deterministic(s in "\\PC{0,140}") {
        prop_assert_eq!(detect::detect_hash(&s), detect::detect_hash(&s));
    }
}
