//! Digest primitives: unsalted hex digests, bcrypt and HMAC.

use hashlab_core::{Algorithm, Error, Result};
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowercase hex digest of `input`.
pub fn digest_hex(algorithm: Algorithm, input: &[u8]) -> String {
    match algorithm {
        Algorithm::Md5 => hex::encode(Md5::digest(input)),
        Algorithm::Sha1 => hex::encode(Sha1::digest(input)),
        Algorithm::Sha256 => hex::encode(Sha256::digest(input)),
        Algorithm::Sha512 => hex::encode(Sha512::digest(input)),
    }
}

fn stream<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 { break; }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Digest of a reader's full contents, read in 8 KiB chunks.
pub fn digest_reader<R: Read>(algorithm: Algorithm, reader: R) -> Result<String> {
    match algorithm {
        Algorithm::Md5 => stream::<Md5, _>(reader),
        Algorithm::Sha1 => stream::<Sha1, _>(reader),
        Algorithm::Sha256 => stream::<Sha256, _>(reader),
        Algorithm::Sha512 => stream::<Sha512, _>(reader),
    }
}

pub fn digest_file(algorithm: Algorithm, path: &Path) -> Result<String> {
    let f = File::open(path)?;
    digest_reader(algorithm, BufReader::new(f))
}

pub fn bcrypt_hash(input: &str, cost: u32) -> Result<String> {
    bcrypt::hash(input, cost).map_err(|e| Error::Bcrypt(e.to_string()))
}

pub fn bcrypt_verify(input: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(input, hash).map_err(|e| Error::Bcrypt(e.to_string()))
}

fn mac_hex<M: Mac + hmac::digest::KeyInit>(key: &[u8], message: &[u8]) -> Result<String> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| Error::InvalidKey)?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// HMAC over `message` keyed with `key`, hex encoded.
pub fn hmac_hex(algorithm: Algorithm, key: &[u8], message: &[u8]) -> Result<String> {
    match algorithm {
        Algorithm::Md5 => mac_hex::<Hmac<Md5>>(key, message),
        Algorithm::Sha1 => mac_hex::<Hmac<Sha1>>(key, message),
        Algorithm::Sha256 => mac_hex::<Hmac<Sha256>>(key, message),
        Algorithm::Sha512 => mac_hex::<Hmac<Sha512>>(key, message),
    }
}

/// Anything a generation request may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerateKind {
    Plain(Algorithm),
    Bcrypt,
}

impl GenerateKind {
    pub fn name(self) -> &'static str {
        match self {
            GenerateKind::Plain(a) => a.name(),
            GenerateKind::Bcrypt => "bcrypt",
        }
    }
}

impl FromStr for GenerateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("bcrypt") {
            return Ok(GenerateKind::Bcrypt);
        }
        s.parse::<Algorithm>().map(GenerateKind::Plain)
    }
}

/// Parse request type names, dropping unrecognised ones and duplicates.
pub fn parse_kinds<S: AsRef<str>>(names: &[S]) -> Vec<GenerateKind> {
    let mut out = Vec::new();
    for n in names {
        if let Ok(k) = n.as_ref().parse::<GenerateKind>() {
            if !out.contains(&k) { out.push(k); }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn known_digests() {
        assert_eq!(digest_hex(Algorithm::Md5, b"hello"), "5d41402abc4b2a76b9719d911017c592");
        assert_eq!(digest_hex(Algorithm::Sha1, b"hello"), "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
        assert_eq!(
            digest_hex(Algorithm::Sha256, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        for a in Algorithm::ALL {
            assert_eq!(digest_hex(a, b"x").len(), a.hex_len());
        }
    }

    #[test]
    fn file_digest_matches_in_memory() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        let data = vec![7u8; 20_000];
        f.write_all(&data).unwrap();
        for a in Algorithm::ALL {
            assert_eq!(digest_file(a, f.path()).unwrap(), digest_hex(a, &data));
        }
    }

    #[test]
    fn hmac_sha256_reference() {
        // RFC 4231 test case 2
        let out = hmac_hex(Algorithm::Sha256, b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(out, "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843");
    }

    #[test]
    fn bcrypt_round_trip() {
        let h = bcrypt_hash("hunter2", 4).unwrap();
        assert!(h.starts_with("$2"));
        assert!(bcrypt_verify("hunter2", &h).unwrap());
        assert!(!bcrypt_verify("hunter3", &h).unwrap());
    }

    #[test]
    fn kinds_parse_and_dedup() {
        let ks = parse_kinds(&["MD5", "bcrypt", "crc32", "md5"]);
        assert_eq!(ks, vec![GenerateKind::Plain(Algorithm::Md5), GenerateKind::Bcrypt]);
    }
}
