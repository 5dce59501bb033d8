use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixlore_graph::{DependencyAnalyzer, FsProvider};
use fixlore_memory::{FixData, Issue, MemoryStore};
use fixlore_suggest::SuggestionEngine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::path::PathBuf;

mod scanner;

use scanner::FileScanner;

#[derive(Parser)]
#[command(name = "fixlore")]
#[command(about = "Change-impact analysis and fix-attempt memory for issue triage", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root that analyzed paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Directory holding the fix-attempt memory documents
    #[arg(long, global = true, default_value = ".fixlore/memory")]
    memory_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze dependencies between files and print their records
    Analyze {
        /// Files to analyze, relative to the project root
        files: Vec<String>,
    },

    /// Print the closure of files affected by changing the given files
    Affected {
        /// Files whose change ripples outward
        files: Vec<String>,

        /// Candidate set to resolve references among (default: scan the root)
        #[arg(long)]
        among: Vec<String>,
    },

    /// Print change impact (dependencies, dependents, risk) per file
    Impact {
        /// Files whose impact to report
        files: Vec<String>,

        /// Candidate set to resolve references among (default: the files themselves)
        #[arg(long)]
        among: Vec<String>,
    },

    /// Record a fix attempt read as JSON from stdin
    Learn,

    /// Print suggestions for an issue read as JSON from stdin
    Suggest,

    /// List candidate source files under the project root
    Scan,
}

/// Payload for `fixlore learn`
#[derive(Deserialize)]
struct LearnRequest {
    issue: Issue,
    #[serde(default)]
    files: Vec<String>,
    #[serde(default)]
    fix: FixData,
    success: bool,
}

/// Payload for `fixlore suggest`
#[derive(Deserialize)]
struct SuggestRequest {
    issue: Issue,
    #[serde(default)]
    files: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Analyze { files } => {
            let mut analyzer = DependencyAnalyzer::new(FsProvider::new(&cli.root));
            let records = analyzer.analyze(&files).await;
            print_json(&records)?;
        }

        Commands::Affected { files, among } => {
            let candidates = if among.is_empty() {
                FileScanner::new(&cli.root).scan()
            } else {
                among
            };
            let mut analyzer = DependencyAnalyzer::new(FsProvider::new(&cli.root));
            analyzer.analyze(&candidates).await;
            print_json(&analyzer.get_affected_files(&files))?;
        }

        Commands::Impact { files, among } => {
            let candidates = if among.is_empty() {
                files.clone()
            } else {
                among
            };
            let mut analyzer = DependencyAnalyzer::new(FsProvider::new(&cli.root));
            analyzer.analyze(&candidates).await;
            print_json(&analyzer.analyze_change_impact(&files))?;
        }

        Commands::Learn => {
            let request: LearnRequest = read_json_stdin()?;
            let mut store = MemoryStore::open(&cli.memory_dir).await;
            store
                .learn_from_fix(request.issue, request.files, request.fix, request.success)
                .await
                .context("recording fix attempt")?;
            print_json(&serde_json::json!({ "recorded": true }))?;
        }

        Commands::Suggest => {
            let request: SuggestRequest = read_json_stdin()?;
            let store = MemoryStore::open(&cli.memory_dir).await;
            let suggestion =
                SuggestionEngine::default().suggest(&store, &request.issue, &request.files);
            print_json(&suggestion)?;
        }

        Commands::Scan => {
            print_json(&FileScanner::new(&cli.root).scan())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn read_json_stdin<T: DeserializeOwned>() -> Result<T> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading request from stdin")?;
    serde_json::from_str(&buffer).context("parsing request JSON")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
