//! verdoc: tamper-evident version history for a single text document.
//!
//! Thin front end over `verdoc-chain` and `verdoc-store`. Every command
//! loads the whole chain, runs one engine operation, and (for commands that
//! change history) writes the whole chain back.
//!
//! Usage:
//!   verdoc init "first draft"
//!   echo "second draft" | verdoc add
//!   verdoc show
//!   verdoc version 1
//!   verdoc diff 0 1
//!   verdoc validate

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use verdoc_chain::{Chain, ChainStore, DiffStats, VersionRecord};
use verdoc_contracts::{VerdocError, VerdocResult};
use verdoc_store::{JsonFileStore, StoreConfig};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Hash-chained version history for one text document.
#[derive(Parser)]
#[command(
    name = "verdoc",
    about = "Tamper-evident version history for a single text document",
    long_about = "Records each edit of a document as a SHA-256 hash-linked version,\n\
                  reconstructs any past version, and detects edits to stored history."
)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Chain file to operate on; overrides `chain_file` from the configuration.
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new history. Reads the document from stdin when TEXT is omitted.
    Init { text: Option<String> },
    /// Record a new version. Reads the document from stdin when TEXT is omitted.
    Add { text: Option<String> },
    /// List every version with its timestamp and hash prefix.
    Show,
    /// Print the most recent version record.
    Latest,
    /// Print the document as of version INDEX.
    Version { index: usize },
    /// Print the positional diff between two versions.
    Diff { from: usize, to: usize },
    /// Check that no stored version has been altered.
    Validate,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("verdoc: {}", e);
            std::process::exit(1);
        }
    };

    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run(cli.command, &config) {
        eprintln!("verdoc: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> VerdocResult<StoreConfig> {
    let mut config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::default(),
    };
    if let Some(file) = &cli.file {
        config.chain_file = file.clone();
    }
    Ok(config)
}

// ── Command dispatch ──────────────────────────────────────────────────────────

fn run(command: Command, config: &StoreConfig) -> VerdocResult<()> {
    let store = config.open_store();
    debug!(path = %store.path().display(), "using chain file");

    match command {
        Command::Init { text } => init(&store, text),
        Command::Add { text } => add(&store, text),
        Command::Show => show(&open(&store)?),
        Command::Latest => latest(&open(&store)?),
        Command::Version { index } => {
            print!("{}", open(&store)?.document_version(index)?);
            Ok(())
        }
        Command::Diff { from, to } => {
            println!("{}", open(&store)?.diff_between(from, to)?);
            Ok(())
        }
        Command::Validate => validate(&open(&store)?),
    }
}

fn init(store: &JsonFileStore, text: Option<String>) -> VerdocResult<()> {
    let content = read_text(text)?;
    let chain = Chain::new(&content);
    store.save(&chain)?;

    info!(path = %store.path().display(), "history initialized");
    println!("Initialized history in {}", store.path().display());
    Ok(())
}

fn add(store: &JsonFileStore, text: Option<String>) -> VerdocResult<()> {
    let mut chain = open(store)?;
    let content = read_text(text)?;
    let index = chain.add_version(&content).index();
    store.save(&chain)?;

    println!("Recorded version {}", index);
    Ok(())
}

fn show(chain: &Chain) -> VerdocResult<()> {
    if chain.is_empty() {
        println!("No versions recorded.");
        return Ok(());
    }
    for record in chain {
        println!("{}", summary_line(record));
    }
    Ok(())
}

fn latest(chain: &Chain) -> VerdocResult<()> {
    let record = chain.latest().ok_or(VerdocError::EmptyChain)?;
    println!("{}", summary_line(record));
    println!("previous: {}", record.previous_hash());
    println!("hash:     {}", record.hash());
    println!();
    println!("{}", record.diff());
    Ok(())
}

fn validate(chain: &Chain) -> VerdocResult<()> {
    match chain.find_violation() {
        None => println!("Chain valid: true"),
        Some(violation) => {
            println!("Chain valid: false");
            println!("  {}", violation);
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Load the chain, refusing to run against a history that was never created.
fn open(store: &JsonFileStore) -> VerdocResult<Chain> {
    if !store.exists() {
        return Err(VerdocError::Io {
            path: store.path().display().to_string(),
            reason: "no history found; run `verdoc init` first".to_string(),
        });
    }
    store.load()
}

/// Use `text` if given, otherwise read the whole of stdin.
///
/// One trailing line ending is dropped from stdin input so that
/// `echo text | verdoc add` records `text`.
fn read_text(text: Option<String>) -> VerdocResult<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| VerdocError::Io {
            path: "<stdin>".to_string(),
            reason: e.to_string(),
        })?;

    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn summary_line(record: &VersionRecord) -> String {
    let hash = record.hash();
    let prefix = hash.get(..10).unwrap_or(hash);
    let stats = DiffStats::of(record.diff());
    format!(
        "[{}] {} | hash: {}... | +{} -{} ={}",
        record.index(),
        record.timestamp().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
        prefix,
        stats.added,
        stats.removed,
        stats.unchanged
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_flag_overrides_config() {
        let cli = Cli::parse_from(["verdoc", "--file", "notes.json", "show"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.chain_file, PathBuf::from("notes.json"));
        assert!(matches!(cli.command, Command::Show));
    }

    #[test]
    fn default_config_without_flags() {
        let cli = Cli::parse_from(["verdoc", "diff", "0", "1"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(matches!(cli.command, Command::Diff { from: 0, to: 1 }));
    }

    #[test]
    fn negative_version_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["verdoc", "version", "-1"]).is_err());
    }

    #[test]
    fn summary_line_tolerates_short_hash() {
        let record = VersionRecord::from_parts(
            3,
            Chain::new("x").records()[0].timestamp(),
            "+ a\n- b",
            "0",
            "abc",
        );
        let line = summary_line(&record);
        assert!(line.starts_with("[3] "));
        assert!(line.contains("hash: abc..."));
        assert!(line.contains("+1 -1 =0"));
    }
}
