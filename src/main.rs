use clap::{Parser, ValueEnum};
use fanout::application::aggregator;
use fanout::interfaces::csv::plan_reader::{PlanEntry, PlanReader, build_requests};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Fail the whole aggregation if any service fails.
    FailFast,
    /// Keep successful results only.
    FailPartial,
    /// Replace each failure with the fallback token.
    FailSoft,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input fan-out plan CSV file
    input: PathBuf,

    /// Failure-handling policy to apply
    #[arg(long, value_enum, default_value = "fail-fast")]
    policy: Policy,

    /// Token substituted for failures under the fail-soft policy
    #[arg(long, default_value = "n/a")]
    fallback: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = PlanReader::new(file);
    let mut entries: Vec<PlanEntry> = Vec::new();
    for entry_result in reader.entries() {
        match entry_result {
            Ok(entry) => entries.push(entry),
            Err(e) => eprintln!("Error reading plan entry: {}", e),
        }
    }

    let (services, messages) = build_requests(&entries);

    match cli.policy {
        Policy::FailFast => {
            let result = aggregator::run_fail_fast(&services, &messages)
                .await
                .into_diagnostic()?;
            println!("{}", result);
        }
        Policy::FailPartial => {
            for value in aggregator::run_fail_partial(&services, &messages).await {
                println!("{}", value);
            }
        }
        Policy::FailSoft => {
            let result = aggregator::run_fail_soft(&services, &messages, &cli.fallback).await;
            println!("{}", result);
        }
    }

    Ok(())
}
