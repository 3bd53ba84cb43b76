//! CLI entry point for the bike-share statistics tool.
//!
//! Provides a one-shot `analyze` subcommand and an `interactive` prompt loop.

mod interactive;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use bikeshare_stats::config::Settings;
use bikeshare_stats::output::{render_json, render_rows, render_text};
use bikeshare_stats::pipeline::run_city;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bike-share trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics for one city and filter choice
    Analyze {
        /// City to analyze: chicago, "new york city" or washington
        #[arg(short, long)]
        city: String,

        /// Month to keep (january..june), or "all"
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Day of week to keep (monday..sunday), or "all"
        #[arg(short, long, default_value = "all")]
        day: String,

        /// Directory holding the city CSV files (overrides BIKESHARE_DATA_DIR)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Print the reports as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also print the first N filtered rows
        #[arg(long, value_name = "N")]
        raw_rows: Option<usize>,
    },
    /// Prompt for filters, show statistics, and page through raw rows
    Interactive {
        /// Directory holding the city CSV files (overrides BIKESHARE_DATA_DIR)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing(log_file_path: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env();
    let _file_guard = init_tracing(&settings.log_file_path)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            data_dir,
            json,
            raw_rows,
        } => {
            let settings = settings.with_data_dir(data_dir);
            let output = run_city(&settings, &city, &month, &day)?;

            if json {
                println!("{}", render_json(&output)?);
            } else {
                print!("{}", render_text(&output.reports));
            }

            if let Some(n) = raw_rows {
                let shown = n.min(output.dataset.len());
                print!("{}", render_rows(&output.dataset.trips[..shown])?);
            }

            info!(rows = output.dataset.len(), "Analysis finished");
        }
        Commands::Interactive { data_dir } => {
            let settings = settings.with_data_dir(data_dir);
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut stdout = std::io::stdout();
            interactive::run_session(&settings, &mut input, &mut stdout)?;
        }
    }

    Ok(())
}
