use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use matchcore::catalog::{load_catalog, save_catalog, CatalogPaths};
use matchcore::{explain_match, rank_matches, validate_postings, JobPosting, TalentProfile};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Compile job posting catalogs and rank them for a talent profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a catalog from input JSON/JSONL files or a directory
    Build {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Output catalog directory
        #[arg(long)]
        output: String,
        /// Drop postings that are not OPEN before writing
        #[arg(long, default_value_t = false)]
        open_only: bool,
    },
    /// Rank open postings for a talent profile and print JSON
    Rank {
        /// Talent profile JSON file
        #[arg(long)]
        profile: String,
        /// Catalog directory produced by `build`
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        catalog: Option<String>,
        /// Raw posting input (file or directory)
        #[arg(long)]
        input: Option<String>,
        /// Number of results to keep; non-positive values yield none
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i64,
        /// Include matched/missing skills and the location rule per result
        #[arg(long, default_value_t = false)]
        explain: bool,
        /// Pretty-print the output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output, open_only } => build_catalog(&input, &output, open_only),
        Commands::Rank { profile, catalog, input, limit, explain, pretty } => {
            rank(&profile, catalog.as_deref(), input.as_deref(), limit, explain, pretty)
        }
    }
}

fn build_catalog(input: &str, output: &str, open_only: bool) -> Result<()> {
    let mut postings = read_postings(Path::new(input))?;
    validate_postings(&postings)?;
    let total = postings.len();
    if open_only {
        postings.retain(JobPosting::is_open);
    }
    tracing::info!(total, kept = postings.len(), "ingested postings");

    let created_at = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".into());
    let meta = save_catalog(&CatalogPaths::new(output), &postings, created_at)?;

    tracing::info!(output, num_postings = meta.num_postings, num_open = meta.num_open, "catalog build complete");
    Ok(())
}

fn rank(profile: &str, catalog: Option<&str>, input: Option<&str>, limit: i64, explain: bool, pretty: bool) -> Result<()> {
    let profile: TalentProfile = serde_json::from_reader(BufReader::new(
        File::open(profile).with_context(|| format!("opening profile {profile}"))?,
    ))
    .context("parsing profile")?;

    let postings = match (catalog, input) {
        (Some(dir), _) => load_catalog(&CatalogPaths::new(dir))?.open_postings(),
        (None, Some(path)) => {
            let mut postings = read_postings(Path::new(path))?;
            validate_postings(&postings)?;
            postings.retain(JobPosting::is_open);
            postings
        }
        (None, None) => anyhow::bail!("either --catalog or --input is required"),
    };

    let ranked = rank_matches(&profile, &postings, limit);
    tracing::info!(candidates = postings.len(), returned = ranked.len(), "ranking complete");

    if explain {
        let explained: Vec<_> = ranked
            .iter()
            .filter_map(|r| postings.iter().find(|p| p.id == r.job_id))
            .map(|p| explain_match(&profile, p))
            .collect();
        print_json(&explained, pretty)
    } else {
        print_json(&ranked, pretty)
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{out}");
    Ok(())
}

fn read_postings(input_path: &Path) -> Result<Vec<JobPosting>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        anyhow::bail!("input path {} does not exist", input_path.display());
    }

    let mut postings = Vec::new();
    for file in files {
        let before = postings.len();
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file, &mut postings)?;
        } else {
            read_json(&file, &mut postings)?;
        }
        tracing::debug!(file = %file.display(), postings = postings.len() - before, "read input file");
    }
    Ok(postings)
}

fn read_jsonl(file: &Path, postings: &mut Vec<JobPosting>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let posting: JobPosting = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}", file.display(), lineno + 1))?;
        postings.push(posting);
    }
    Ok(())
}

fn read_json(file: &Path, postings: &mut Vec<JobPosting>) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let json: serde_json::Value = serde_json::from_str(&text).with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                postings.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => postings.push(serde_json::from_value(json)?),
        _ => tracing::warn!(file = %file.display(), "skipping input that is neither an object nor an array"),
    }
    Ok(())
}
