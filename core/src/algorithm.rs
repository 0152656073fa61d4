use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Unsalted digest algorithms that can be precomputed and reversed by lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Fixed scan order used whenever every table has to be consulted.
    pub const ALL: [Algorithm; 4] = [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512];

    /// Length of the lowercase hex digest.
    pub const fn hex_len(self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha256 => 64,
            Algorithm::Sha512 => 128,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Position inside [`Algorithm::ALL`], handy for per-algorithm arrays.
    pub const fn index(self) -> usize {
        match self {
            Algorithm::Md5 => 0,
            Algorithm::Sha1 => 1,
            Algorithm::Sha256 => 2,
            Algorithm::Sha512 => 3,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Result of structural hash detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Bcrypt,
    Unknown,
}

impl HashKind {
    pub const fn algorithm(self) -> Option<Algorithm> {
        match self {
            HashKind::Md5 => Some(Algorithm::Md5),
            HashKind::Sha1 => Some(Algorithm::Sha1),
            HashKind::Sha256 => Some(Algorithm::Sha256),
            HashKind::Sha512 => Some(Algorithm::Sha512),
            HashKind::Bcrypt | HashKind::Unknown => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashKind::Md5 => "md5",
            HashKind::Sha1 => "sha1",
            HashKind::Sha256 => "sha256",
            HashKind::Sha512 => "sha512",
            HashKind::Bcrypt => "bcrypt",
            HashKind::Unknown => "unknown",
        }
    }
}

impl From<Algorithm> for HashKind {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::Md5 => HashKind::Md5,
            Algorithm::Sha1 => HashKind::Sha1,
            Algorithm::Sha256 => HashKind::Sha256,
            Algorithm::Sha512 => HashKind::Sha512,
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(HashKind::Bcrypt),
            "unknown" => Ok(HashKind::Unknown),
            other => other.parse::<Algorithm>().map(HashKind::from),
        }
    }
}
