use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use prettydate::output::{Overrides, Settings, read_inputs, render};
use prettydate::util::clock::{NaiveTimezone, parse_reference_time};
use prettydate::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "prettydate",
    version,
    about = "Turn ISO-8601 timestamps into relative-time labels"
)]
struct Cli {
    /// Timestamps to format (read from stdin, one per line, when omitted)
    timestamps: Vec<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference instant in RFC 3339 (defaults to the system clock)
    #[arg(long, value_name = "RFC3339")]
    now: Option<String>,

    /// Oldest age in days that still gets a label
    #[arg(long, value_name = "DAYS")]
    max_age_days: Option<u32>,

    /// Zone for timestamps without one: utc, local, or an offset like +05:30
    #[arg(long, value_name = "TZ")]
    naive_tz: Option<String>,

    /// Print the original timestamp after each label
    #[arg(long, overrides_with = "no_keep_original")]
    keep_original: bool,

    /// Print labels only, even if the config keeps originals
    #[arg(long, overrides_with = "keep_original")]
    no_keep_original: bool,

    /// Emit one JSON object per timestamp
    #[arg(long, overrides_with = "no_json")]
    json: bool,

    /// Emit plain lines, even if the config asks for JSON
    #[arg(long, overrides_with = "json")]
    no_json: bool,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    info!("prettydate starting");

    let now = match cli.now.as_deref() {
        Some(raw) => parse_reference_time(raw)
            .with_context(|| format!("Invalid --now value (expected RFC 3339): {raw}"))?,
        None => Utc::now(),
    };
    let settings = Settings::resolve(&config, &cli.overrides()?, now);
    debug!(
        now = %now,
        max_age_days = settings.options.max_age_days,
        naive_offset = %settings.options.naive_offset,
        json = settings.json,
        "Resolved settings"
    );

    let inputs = if cli.timestamps.is_empty() {
        read_inputs(std::io::stdin().lock())?
    } else {
        cli.timestamps.clone()
    };

    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, &inputs, now, &settings)
}

impl Cli {
    fn overrides(&self) -> Result<Overrides> {
        let naive_timezone = match self.naive_tz.as_deref() {
            Some(raw) => Some(raw.parse::<NaiveTimezone>()?),
            None => None,
        };
        Ok(Overrides {
            max_age_days: self.max_age_days,
            naive_timezone,
            keep_original: flag(self.keep_original, self.no_keep_original),
            json: flag(self.json, self.no_json),
        })
    }
}

/// `Some` only when one of a `--x` / `--no-x` pair was given.
fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "prettydate.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("prettydate=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
