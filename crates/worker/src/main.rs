use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insightdeal_core::DealQualityAnalyzer;

mod report;

#[derive(Debug, Parser)]
#[command(name = "insightdeal_worker")]
struct Args {
    /// JSON array of deal objects as produced by the scrapers.
    #[arg(long)]
    input: PathBuf,

    /// Where to write the report. Defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only list deals scoring at least this much (0..=100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = insightdeal_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(args).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %format!("{err:#}"), "batch scoring failed");
        return Err(err);
    }

    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("read {} failed", args.input.display()))?;
    let payloads = report::parse_payloads(&text)?;

    let analyzer = DealQualityAnalyzer::default();
    let report = report::build_report(&analyzer, payloads, args.min_score, chrono::Utc::now());

    tracing::info!(
        total = report.total,
        listed = report.items.len(),
        suspicious = report.suspicious_count,
        "scored deal batch"
    );

    let json = serde_json::to_string_pretty(&report).context("serialize report failed")?;
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("write {} failed", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn init_sentry(settings: &insightdeal_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_flags() {
        let args = Args::try_parse_from([
            "insightdeal_worker",
            "--input",
            "deals.json",
            "--min-score",
            "70",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("deals.json"));
        assert_eq!(args.min_score, Some(70));
        assert!(args.output.is_none());
    }

    #[test]
    fn rejects_out_of_range_min_score() {
        let res = Args::try_parse_from([
            "insightdeal_worker",
            "--input",
            "deals.json",
            "--min-score",
            "101",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["insightdeal_worker"]).is_err());
    }
}
