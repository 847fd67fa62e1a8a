//! `callayout` CLI — lay out calendar events from the command line.
//!
//! Reads a JSON array of event records and prints the computed layout as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Week grid (all-day lanes plus per-day timed columns) for the week of a date
//! callayout week --date 2026-03-04 -i events.json
//!
//! # Monday-start weeks in a given timezone
//! callayout --first-day 1 --timezone Europe/Berlin week --date 2026-03-04 -i events.json
//!
//! # Single day
//! cat events.json | callayout day --date 2026-03-04
//!
//! # Month grid, settings from a TOML file
//! callayout --config layout.toml month --year 2026 --month 3 -i events.json
//! ```

use anyhow::{Context, Result};
use calendar_layout::prepare::{self, is_span_event};
use calendar_layout::source;
use calendar_layout::window;
use calendar_layout::{
    layout_day_ordered, layout_month, layout_week, Event, LayoutConfig, OverlapPlacement,
    WeekLayout, WeekStart, WeekWindow,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "callayout",
    version,
    about = "Lay out calendar events into week, month and day grids"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with `first_day_of_week` and `timezone`
    #[arg(long, global = true)]
    config: Option<String>,

    /// First day of the week, 0 = Sunday ... 6 = Saturday (overrides config)
    #[arg(long, global = true)]
    first_day: Option<u8>,

    /// IANA timezone events are displayed in (overrides config)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Input file with a JSON array of events (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Log layout decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out the week containing a date
    Week {
        /// Any date inside the week (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Lay out a single day
    Day {
        /// The day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Lay out every week row of a month
    Month {
        #[arg(long)]
        year: i32,
        /// 1-12
        #[arg(long)]
        month: u32,
    },
}

/// Timed event with its column assignment.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimedPlacement<'a> {
    event: &'a Event,
    #[serde(flatten)]
    placement: OverlapPlacement,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayOutput<'a> {
    date: NaiveDate,
    all_day: Vec<&'a Event>,
    timed: Vec<TimedPlacement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeekOutput<'a> {
    all_day: WeekLayout<'a>,
    days: Vec<DayOutput<'a>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    let tz = config.tz()?;
    let week_start = config.week_start();

    let raw = read_input(cli.input.as_deref())?;
    let events = source::parse_events_json(&raw, tz).context("Failed to parse events")?;
    debug!(count = events.len(), "loaded events");

    let json = match cli.command {
        Commands::Week { date } => {
            let week = WeekWindow::containing(date, week_start);
            serde_json::to_string_pretty(&week_output(&events, week))?
        }
        Commands::Day { date } => serde_json::to_string_pretty(&day_output(&events, date))?,
        Commands::Month { year, month } => {
            let layout = layout_month(&events, year, month, week_start)
                .context("Failed to lay out month")?;
            serde_json::to_string_pretty(&layout)?
        }
    };

    write_output(cli.output.as_deref(), &json)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the config file if given, then apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<LayoutConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            LayoutConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid config: {}", path))?
        }
        None => LayoutConfig::default(),
    };

    if let Some(index) = cli.first_day {
        config.first_day_of_week = WeekStart::from_index(index)?;
    }
    if let Some(tz) = &cli.timezone {
        config.timezone = tz.clone();
    }
    Ok(config)
}

fn day_output(events: &[Event], date: NaiveDate) -> DayOutput<'_> {
    let all_day = events
        .iter()
        .filter(|e| is_span_event(e) && window::clamp_to_window(e, date, date).is_some())
        .collect();

    let timed = layout_day_ordered(prepare::timed_events_for_day(events, date))
        .into_iter()
        .map(|(event, placement)| TimedPlacement { event, placement })
        .collect();

    DayOutput {
        date,
        all_day,
        timed,
    }
}

fn week_output(events: &[Event], week: WeekWindow) -> WeekOutput<'_> {
    WeekOutput {
        all_day: layout_week(prepare::events_for_week(events, week), week),
        days: week
            .days()
            .into_iter()
            .map(|day| day_output(events, day))
            .collect(),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
