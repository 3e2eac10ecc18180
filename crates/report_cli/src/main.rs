//! fce-report: generate an evaluation report from a record JSON file

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use assets::HttpAssetSource;
use report_engine::{generate_report, AssembleOptions};

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Parser, Debug)]
#[command(
    name = "fce-report",
    about = "Assemble a functional capacity evaluation report",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a DOCX report from a collected evaluation record
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the evaluation record JSON
    #[arg(long)]
    record: PathBuf,
    /// Where to write the report
    #[arg(long)]
    out: PathBuf,
    /// Pin the report date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

async fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.record)
        .with_context(|| format!("reading record {}", args.record.display()))?;
    let request: serde_json::Value =
        serde_json::from_str(&raw).context("record file is not valid JSON")?;

    let source = Arc::new(HttpAssetSource::new(FETCH_TIMEOUT)?);
    let options = AssembleOptions {
        generated_on: args.date,
    };
    let buffer = generate_report(&request, source, options).await?;

    std::fs::write(&args.out, &buffer)
        .with_context(|| format!("writing report {}", args.out.display()))?;
    info!(out = %args.out.display(), bytes = buffer.len(), "report written");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate(args).await,
    }
}
