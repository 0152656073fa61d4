use serde::Deserialize;
use std::fs;
use std::path::Path;
use wordlist::WordlistOptions;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct GenerateConfig {
    pub types: Option<Vec<String>>,
    pub bcrypt_cost: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    pub wordlist: Option<WordlistOptions>,
    pub generate: Option<GenerateConfig>,
    pub output: Option<OutputConfig>,
}

/// Load `path`, or `./hashlab.yaml` when no path is given and the file exists.
/// A file that cannot be read or parsed is reported and ignored.
pub fn load_config(path: Option<&Path>) -> Option<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = Path::new("hashlab.yaml");
            if p.exists() { p.to_path_buf() } else { return None; }
        }
    };
    let s = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config not readable");
            return None;
        }
    };
    match serde_yaml::from_str(&s) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config not parsed");
            None
        }
    }
}

impl Config {
    pub fn wordlist_options(&self) -> WordlistOptions {
        self.wordlist.clone().unwrap_or_default()
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.generate.as_ref().and_then(|g| g.bcrypt_cost).unwrap_or(digests::DEFAULT_BCRYPT_COST)
    }

    pub fn default_types(&self) -> Vec<String> {
        self.generate
            .as_ref()
            .and_then(|g| g.types.clone())
            .unwrap_or_else(|| ["md5", "sha1", "sha256", "sha512"].iter().map(|s| s.to_string()).collect())
    }

    pub fn format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "wordlist:\n  max_candidates: 1000\ngenerate:\n  bcrypt_cost: 4\noutput:\n  format: json").unwrap();
        let cfg = load_config(Some(f.path())).unwrap();
        let opts = cfg.wordlist_options();
        assert_eq!(opts.max_candidates, 1000);
        assert_eq!(opts.numeric_max, WordlistOptions::default().numeric_max);
        assert_eq!(cfg.bcrypt_cost(), 4);
        assert_eq!(cfg.format(), Some("json"));
        assert_eq!(cfg.default_types().len(), 4);
    }

    #[test]
    fn broken_yaml_is_ignored() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "wordlist: [unclosed").unwrap();
        assert!(load_config(Some(f.path())).is_none());
    }
}
