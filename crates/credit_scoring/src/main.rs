// Rust guideline compliant 2026-10-17

//! Credit-scoring entry point.
//!
//! Wires a customer source (credit-record CSV or synthetic generator), the
//! rule-based scorer, and a score sink (CSV file or log), then runs the batch
//! pipeline and prints a summary.
//!
//! # Usage
//!
//! ```text
//! # Score a credit-record export into a CSV file
//! cargo run -- --input credit_record.csv --output scores.csv
//!
//! # Synthetic demo, per-customer log lines
//! RUST_LOG=info cargo run -- --customers 50 --seed 7
//! ```

mod adapters;
mod cli;

use adapters::csv_sink::CsvScoreSink;
use adapters::csv_source::CreditRecordSource;
use adapters::log_sink::LogSink;
use anyhow::Context as _;
use clap::Parser as _;
use cli::Args;
use domain::{CustomerSource, ReliabilityModel};
use pipeline::{Pipeline, PipelineConfig, RunSummary};
use scorer::{RuleBasedModel, Scorer};
use synthetic::{SyntheticConfig, SyntheticSource};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Also installs the `log` bridge, so library crates' records show up here.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scorer = Scorer::new(RuleBasedModel::new(args.rule));
    let pipeline = Pipeline::new(
        PipelineConfig::builder(args.batch_size)
            .build()
            .context("failed to build pipeline config")?,
    );
    tracing::info!(model = scorer.model().name(), batch_size = args.batch_size, "main.start");

    let summary = match &args.input {
        Some(path) => {
            let source = CreditRecordSource::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            score_into_sink(&args, &pipeline, source, &scorer)?
        }
        None => {
            let mut config = SyntheticConfig::builder(args.customers);
            if let Some(seed) = args.seed {
                config = config.seed(seed);
            }
            let config = config.build().context("failed to build synthetic config")?;
            score_into_sink(&args, &pipeline, SyntheticSource::new(config), &scorer)?
        }
    };

    print_summary(&summary);
    Ok(())
}

/// Pick the sink from `--output` and run the pipeline to completion.
fn score_into_sink<S, M>(
    args: &Args,
    pipeline: &Pipeline,
    mut source: S,
    scorer: &Scorer<M>,
) -> anyhow::Result<RunSummary>
where
    S: CustomerSource,
    M: ReliabilityModel,
{
    match &args.output {
        Some(path) => {
            let mut sink = CsvScoreSink::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let summary = pipeline
                .run(&mut source, scorer, &mut sink)
                .context("scoring pipeline failed")?;
            tracing::info!(path = %path.display(), "main.scores.written");
            Ok(summary)
        }
        None => {
            let mut sink = LogSink::new();
            let summary = pipeline
                .run(&mut source, scorer, &mut sink)
                .context("scoring pipeline failed")?;
            tracing::info!(logged = sink.written(), "main.scores.logged");
            Ok(summary)
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("customers scored  : {}", summary.scored);
    println!("customers rejected: {}", summary.rejected);
    println!(
        "bad clients       : {} ({:.1}%)",
        summary.bad_clients,
        summary.bad_client_rate() * 100.0
    );
    println!("history tiers     :");
    for (tier, count) in summary.tier_histogram.iter().enumerate() {
        println!("  {tier}: {count}");
    }
}
