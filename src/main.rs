//! CLI entry point for the bike-share insights tool.
//!
//! Provides subcommands for the full usage report and for each analysis
//! section on its own: KPIs, hour-of-day patterns, and weather/season means.

use anyhow::{Context, Result};
use bikeshare_insights::{
    analyzers::{categorical, filter, hourly, kpi, report},
    cache::DatasetCache,
    fetch::{BasicClient, fetch_bytes},
    output,
    records::YearKeyed,
};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_insights")]
#[command(about = "A tool to analyze bike-share usage data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every aggregate over both tables
    Report {
        /// Daily-granularity CSV, a path or URL
        #[arg(value_name = "DAY_FILE_OR_URL")]
        day_source: String,

        /// Hourly-granularity CSV, a path or URL
        #[arg(value_name = "HOUR_FILE_OR_URL")]
        hour_source: String,

        /// Years to include, e.g. "2011,2012" (default: every year present)
        #[arg(short, long, value_delimiter = ',')]
        years: Option<Vec<i32>>,

        /// Optional JSON file to export the report to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Total, average daily, and registered-ratio figures
    Kpi {
        #[arg(value_name = "DAY_FILE_OR_URL")]
        day_source: String,

        #[arg(short, long, value_delimiter = ',')]
        years: Option<Vec<i32>>,
    },
    /// Hour-of-day patterns: overall, working-day split, and top 5 hours
    Hours {
        #[arg(value_name = "HOUR_FILE_OR_URL")]
        hour_source: String,

        #[arg(short, long, value_delimiter = ',')]
        years: Option<Vec<i32>>,
    },
    /// Average usage by weather and by season
    Categories {
        #[arg(value_name = "DAY_FILE_OR_URL")]
        day_source: String,

        #[arg(short, long, value_delimiter = ',')]
        years: Option<Vec<i32>>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_insights.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_insights.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let mut cache = DatasetCache::new();

    match cli.command {
        Commands::Report {
            day_source,
            hour_source,
            years,
            output,
        } => {
            let daily = cache.daily(&read_source(&day_source)?)?;
            let hourly = cache.hourly(&read_source(&hour_source)?)?;

            let selected = match years {
                Some(list) => list.into_iter().collect(),
                None => {
                    let mut all = years_present(&daily);
                    all.extend(years_present(&hourly));
                    all
                }
            };

            let report = report::build(&daily, &hourly, &selected);
            info!(
                years = ?report.years,
                total = report.kpi.total_count,
                "Report computed"
            );

            output::print_json(&report)?;
            if let Some(path) = output {
                output::write_json(&path, &report)?;
                info!(path = %path, "Report exported");
            }
        }
        Commands::Kpi { day_source, years } => {
            let daily = cache.daily(&read_source(&day_source)?)?;
            let selected = resolve_years(years, &daily);

            let filtered = filter::by_years(&daily, &selected);
            output::print_json(&kpi::summarize(&filtered))?;
        }
        Commands::Hours { hour_source, years } => {
            let hourly_table = cache.hourly(&read_source(&hour_source)?)?;
            let selected = resolve_years(years, &hourly_table);

            let filtered = filter::by_years(&hourly_table, &selected);
            let overall = hourly::overall_by_hour(&filtered);
            let top5 = hourly::top_hours(&overall, 5);

            output::print_json(&serde_json::json!({
                "overall_by_hour": overall,
                "by_hour_and_workingday": hourly::by_hour_and_workingday(&filtered),
                "top5_hours": top5,
            }))?;
        }
        Commands::Categories { day_source, years } => {
            let daily = cache.daily(&read_source(&day_source)?)?;
            let selected = resolve_years(years, &daily);

            let filtered = filter::by_years(&daily, &selected);
            output::print_json(&serde_json::json!({
                "weather_means": categorical::weather_means(&filtered),
                "season_means": categorical::season_means(&filtered),
            }))?;
        }
    }

    Ok(())
}

/// Loads a table source from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
fn read_source(source: &str) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, source)?
    } else {
        std::fs::read(source).with_context(|| format!("reading {}", source))?
    };
    Ok(bytes)
}

/// The caller's year selection, defaulting to every year present in `rows`.
fn resolve_years<R: YearKeyed>(selected: Option<Vec<i32>>, rows: &[R]) -> BTreeSet<i32> {
    match selected {
        Some(list) => list.into_iter().collect(),
        None => years_present(rows),
    }
}

fn years_present<R: YearKeyed>(rows: &[R]) -> BTreeSet<i32> {
    rows.iter().filter_map(|r| r.year()).collect()
}
