//! issuedoc — build a structured catalog from plain-text magazine issues.
//!
//! Each `issue_<NNN>_<mon>_<YYYY>.txt` document is split at its divider
//! lines into header, cover-art and table-of-contents regions, parsed, and
//! collected into one JSON manifest.
//!
//! - **catalog mode** (default): `issuedoc issues/ -o data/manifest.json`
//! - **single issue**: `issuedoc --issue issues/issue_001_jan_1953.txt`

mod assemble;
mod catalog;
mod error;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "issuedoc",
    about = "Build a JSON catalog from plain-text magazine issue descriptions"
)]
struct Cli {
    /// Input files, directories or glob patterns.
    #[arg(default_value = "issues")]
    inputs: Vec<String>,

    /// Catalog destination. Use "-" for stdout.
    #[arg(short = 'o', long, default_value = "data/manifest.json")]
    output: String,

    /// Catalog title
    #[arg(long, default_value = catalog::DEFAULT_TITLE)]
    title: String,

    /// Character that makes up divider lines
    #[arg(long, default_value_t = parser::divider::DEFAULT_MARKER)]
    divider_char: char,

    /// Write single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Do not print the run summary
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Parse a single issue file and print it as JSON instead of building
    /// the catalog
    #[arg(long, value_name = "FILE", conflicts_with = "inputs")]
    issue: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Some(ref path) = cli.issue {
        return issue_mode(&cli, path);
    }

    catalog_mode(&cli)
}

/// Diagnostics go to stderr; stdout is reserved for data and the summary.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Single issue: parse one file and print its record.
fn issue_mode(cli: &Cli, path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = catalog::file_name(path);
    let issue = assemble::parse_issue(&name, &content, cli.divider_char)?;
    println!("{}", render::to_json(&issue, cli.compact)?);
    Ok(())
}

/// Catalog mode: collect inputs, assemble every issue, write the manifest.
fn catalog_mode(cli: &Cli) -> Result<()> {
    let files = expand_inputs(&cli.inputs)?;
    let catalog = catalog::build(&cli.title, &files, cli.divider_char)?;
    let json = render::to_json(&catalog, cli.compact)?;

    if cli.output == "-" {
        println!("{}", json);
        if !cli.quiet {
            eprint!("{}", render::summary(&catalog, "<stdout>"));
        }
        return Ok(());
    }

    let output = Path::new(&cli.output);
    render::write_atomic(output, &json)?;

    if !cli.quiet {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(render::summary(&catalog, &output.display().to_string()).as_bytes())
            .context("failed to write summary")?;
    }
    Ok(())
}

/// File name prefix that marks a document in a scanned directory.
const ISSUE_PREFIX: &str = "issue_";

/// Expand inputs into a list of files, ordered by file name.
///
/// Plain files are taken as-is; directories are scanned (non-recursively)
/// for names starting with `issue_`; anything else is treated as a glob.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && catalog::file_name(&p).starts_with(ISSUE_PREFIX) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    sort_by_file_name(&mut files);
    files.dedup();
    Ok(files)
}

/// Lexicographic by file name, so issue numbers come out ascending even
/// when inputs span several directories.
fn sort_by_file_name(files: &mut [PathBuf]) {
    files.sort_by(|a, b| {
        catalog::file_name(a)
            .cmp(&catalog::file_name(b))
            .then_with(|| a.cmp(b))
    });
}
