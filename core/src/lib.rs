//! Core tags and shared types for the hashlab engine.

pub mod algorithm;
pub mod error;

pub use algorithm::{Algorithm, HashKind};
pub use error::{Error, Result};

pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!version().is_empty());
    }
}
