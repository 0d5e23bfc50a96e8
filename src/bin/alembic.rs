//! alembic: distill a DrugBank XML dump into relational NDJSON tables
//!
//! Usage:
//!   # Parse the dump and write one file per relation
//!   alembic parse drugbank.xml ./tables
//!
//!   # Partial run over the first 100 records
//!   alembic parse drugbank.xml ./tables --limit 100
//!
//!   # Parse, then hand the relation files to the bulk loader
//!   alembic process drugbank.xml ./tables graph.example.com --user admin

// Use MiMalloc allocator for better performance on allocation-heavy decode
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use alembic::flatten::flatten_drug;
use alembic::sink::TableSink;
use alembic::stream::{count_drug_records, DrugStream};
use alembic::upload::{upload_dir, LogLoader};

#[derive(Parser, Debug)]
#[command(name = "alembic")]
#[command(about = "Distill a DrugBank XML dump into relational NDJSON tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the XML dump and write one NDJSON file per relation
    Parse {
        /// Path to the DrugBank XML dump
        path: PathBuf,

        /// Directory for the relation files (created if absent)
        output_dir: PathBuf,

        /// Stop after the first N records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Parse, then hand the relation files to the bulk loader
    Process {
        /// Path to the DrugBank XML dump
        path: PathBuf,

        /// Directory for the relation files (created if absent)
        output_dir: PathBuf,

        /// Graph store instance to load into
        host: String,

        /// Username for the graph store instance
        #[arg(long)]
        user: Option<String>,

        /// Password for the graph store instance
        #[arg(long)]
        password: Option<String>,

        /// Stop after the first N records
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Parse {
            path,
            output_dir,
            limit,
        } => parse(&path, &output_dir, limit),
        Command::Process {
            path,
            output_dir,
            host,
            user,
            password: _,
            limit,
        } => {
            parse(&path, &output_dir, limit)?;
            process(&output_dir, &host, user.as_deref())
        }
    }
}

/// Count records, then run the single decode+flatten pass and write every
/// relation file.
fn parse(path: &Path, output_dir: &Path, limit: Option<usize>) -> Result<()> {
    let started = Instant::now();

    // Counting pre-pass: a cheap line scan whose only job is to size the
    // progress bar. Must complete before progress reporting begins.
    let counting = Instant::now();
    let input = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let total = count_drug_records(BufReader::new(input))?;
    info!(records = total, elapsed = ?counting.elapsed(), "counted drug records");

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "  Parsing {bar:40.cyan/blue} {pos}/{len} drugs [{elapsed_precise}]",
        )?
        .progress_chars("##-"),
    );

    let stream = DrugStream::open(path)?;
    let mut sink = TableSink::new();
    for result in bar.wrap_iter(stream.take(limit.unwrap_or(usize::MAX))) {
        let drug = result?;
        sink.absorb(flatten_drug(&drug));
    }
    bar.finish();

    sink.write_to_dir(output_dir)
        .with_context(|| format!("failed to write tables to {}", output_dir.display()))?;

    info!(
        drugs = sink.records(),
        rows = sink.row_count(),
        elapsed = ?started.elapsed(),
        "parse complete"
    );
    Ok(())
}

/// Hand the completed relation files to the (stub) bulk loader, nodes
/// before edges.
fn process(output_dir: &Path, host: &str, user: Option<&str>) -> Result<()> {
    let started = Instant::now();
    info!(host, user = user.unwrap_or("<anonymous>"), "uploading relation files");

    let mut loader = LogLoader {
        host: host.to_string(),
    };
    upload_dir(output_dir, &mut loader)?;

    info!(elapsed = ?started.elapsed(), "upload complete");
    Ok(())
}
