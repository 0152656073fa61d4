use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lookup::LookupEngine;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod config;
mod service;
#[cfg(feature = "session")]
mod session;

use service::HashService;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat { Text, Json, Jsonl }

impl OutputFormat {
    fn from_config(s: &str) -> Self {
        match s { "json" => OutputFormat::Json, "jsonl" => OutputFormat::Jsonl, _ => OutputFormat::Text }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hashlab", version, about = "Digest generation and dictionary-backed hash reversal")]
struct Cli {
    /// Optional config file (YAML). If omitted, loads ./hashlab.yaml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format: text, json, or jsonl
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print version information
    Version,
    /// Digest text or a file; md5/sha1/sha256/sha512 results are learned
    Generate {
        /// Input text
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        /// Input file (the learned plaintext is the file name)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Comma-separated types (md5,sha1,sha256,sha512,bcrypt). Default from config or all four unsalted.
        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<String>,
    },
    /// Reverse a single hash
    Lookup { hash: String },
    /// Reverse many hashes; blank lines produce no record
    Batch {
        /// Hash string(s)
        #[arg(long)]
        hash: Vec<String>,
        /// File with newline-delimited hashes
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output file (overwrites)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Write CSV instead of text/json when --out is provided
        #[arg(long, default_value_t = false)]
        csv: bool,
    },
    /// Check a string against known hash formats
    Validate {
        hash: String,
        /// Expected type; autodetect when omitted or unrecognised
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Case-insensitive comparison of two hashes
    Compare { hash1: String, hash2: String },
    /// Keyed hash of a message
    Hmac {
        #[arg(long)]
        message: String,
        #[arg(long)]
        key: String,
        #[arg(long, default_value = "sha256")]
        algorithm: String,
    },
    /// Static and learned table sizes per algorithm
    Stats,
    /// Built-in corpus, or stats (total and unique) for an external wordlist
    Wordlist {
        /// External wordlist to count instead of the built-in corpus
        #[arg(long, conflicts_with = "out")]
        file: Option<PathBuf>,
        /// Write the built-in corpus, one candidate per line
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Read JSON requests from stdin, one per line, against one long-lived engine
    #[cfg(feature = "session")]
    Session,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_one<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json | OutputFormat::Jsonl => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

fn print_many<T: Serialize>(format: OutputFormat, rows: &[T], text: impl Fn(&T) -> String) -> Result<()> {
    match format {
        OutputFormat::Text => for r in rows { println!("{}", text(r)); },
        OutputFormat::Json => println!("{}", serde_json::to_string(rows)?),
        OutputFormat::Jsonl => for r in rows { println!("{}", serde_json::to_string(r)?); },
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref()).unwrap_or_default();
    let format = cli.format.or_else(|| cfg.format().map(OutputFormat::from_config)).unwrap_or(OutputFormat::Text);
    let build_service = || {
        let started = Instant::now();
        let engine = LookupEngine::build(&cfg.wordlist_options());
        tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "engine ready");
        HashService::new(Arc::new(engine), cfg.bcrypt_cost())
    };

    match cli.command {
        Commands::Version => {
            println!("hashlab {} (core {})", env!("CARGO_PKG_VERSION"), hashlab_core::version());
        }
        Commands::Generate { text, file, types } => {
            let types = if types.is_empty() { cfg.default_types() } else { types };
            let svc = build_service();
            let out = match (text, file) {
                (Some(t), _) => svc.generate_text(&t, &types)?,
                (None, Some(p)) => svc.generate_file(&p, &types)?,
                (None, None) => return Err(anyhow!("provide --text or --file")),
            };
            print_one(format, &out, || {
                out.hash_results.iter().map(|(k, v)| format!("{:<7} {}", k, v)).collect::<Vec<_>>().join("\n")
            })?;
        }
        Commands::Lookup { hash } => {
            let svc = build_service();
            let r = svc.lookup(&hash)?;
            print_one(format, &r, || match &r.original_value {
                Some(v) => format!("{}: found ({}) {:?}", hash.trim(), r.hash_type, v),
                None => format!("{}: not found ({})", hash.trim(), r.hash_type),
            })?;
        }
        Commands::Batch { hash, file, out, csv } => {
            let mut inputs = hash;
            if let Some(p) = file {
                let s = std::fs::read_to_string(&p)?;
                inputs.extend(s.lines().map(|l| l.to_string()));
            }
            let svc = build_service();
            let records = svc.engine().lookup_batch(&inputs);
            match out {
                Some(path) if csv => {
                    let mut wtr = csv::Writer::from_writer(std::fs::File::create(&path)?);
                    wtr.write_record(["hash", "hash_type", "found", "original_value"])?;
                    for r in &records {
                        wtr.write_record([
                            r.hash.as_str(),
                            r.hash_type.name(),
                            if r.found { "true" } else { "false" },
                            r.original_value.as_deref().unwrap_or_default(),
                        ])?;
                    }
                    wtr.flush()?;
                }
                Some(path) => {
                    let mut w = BufWriter::new(std::fs::File::create(&path)?);
                    for r in &records { writeln!(w, "{}", serde_json::to_string(r)?)?; }
                    w.flush()?;
                }
                None => {
                    if csv { eprintln!("--csv requires --out <file>"); }
                    print_many(format, &records, |r| match &r.original_value {
                        Some(v) => format!("{} {} {:?}", r.hash, r.hash_type, v),
                        None => format!("{} {} -", r.hash, r.hash_type),
                    })?;
                }
            }
        }
        Commands::Validate { hash, kind } => {
            let v = service::validate(&hash, kind.as_deref())?;
            print_one(format, &v, || format!("{} ({}, length {})", v.format, v.detected_type, v.length))?;
        }
        Commands::Compare { hash1, hash2 } => {
            let c = service::compare(&hash1, &hash2)?;
            print_one(format, &c, || if c.matched { "match".into() } else { "no match".into() })?;
        }
        Commands::Hmac { message, key, algorithm } => {
            let h = service::hmac(&message, &key, Some(algorithm.as_str()))?;
            print_one(format, &h, || format!("{} {}", h.algorithm, h.hmac))?;
        }
        Commands::Stats => {
            let svc = build_service();
            print_many(format, &svc.stats(), |s| {
                format!("{:<7} static={} learned={}", s.algorithm, s.static_entries, s.dynamic_entries)
            })?;
        }
        Commands::Wordlist { file, out } => {
            if let Some(p) = file {
                let s = std::fs::read_to_string(&p)?;
                let (total, unique) = wordlist::wordlist_stats(&s);
                let obj = serde_json::json!({ "file": p, "total": total, "unique": unique });
                print_one(format, &obj, || format!("{}: {} total, {} unique", p.display(), total, unique))?;
            } else {
                let corpus = wordlist::build(&cfg.wordlist_options());
                if let Some(path) = out {
                    let mut w = BufWriter::new(std::fs::File::create(&path)?);
                    for c in &corpus { writeln!(w, "{}", c)?; }
                    w.flush()?;
                }
                let obj = serde_json::json!({ "candidates": corpus.len() });
                print_one(format, &obj, || format!("{} candidates", corpus.len()))?;
            }
        }
        #[cfg(feature = "session")]
        Commands::Session => {
            let svc = Arc::new(build_service());
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(session::run(svc))?;
        }
    }
    Ok(())
}
