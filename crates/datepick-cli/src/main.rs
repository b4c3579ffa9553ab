//! `datepick` CLI: build month grids, check disablement rules, and replay
//! date selections from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the grid for March 2025 (padding days in brackets)
//! datepick grid 2025-03
//!
//! # Three Monday-first calendars, padded to six weeks, as JSON
//! datepick grid 2025-06-01 --calendars 3 --week-start 1 --normalize --json
//!
//! # Which of these dates are disabled?
//! datepick check 2025-03-08 2025-03-10 --rules '{"every":"weekend"}'
//!
//! # Does the interval cross a disabled date?
//! datepick check 2025-03-10 2025-03-14 --range --config picker.json
//!
//! # Replay clicks in range mode and print the exported selection
//! datepick select --mode range --click 2025-03-10 --click 2025-03-05
//! ```

mod logging;

use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use datepick_core::date::weekday_from_number;
use datepick_core::{
    is_disabled, is_range_disabled, CalendarDate, CalendarLocale, DisablementRule,
    ExternalSelection, Gregorian, MonthGrid, MonthNameStyle, MonthView, PickerConfig,
    SelectionEngine, SelectionMode,
};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "datepick",
    version,
    about = "Month grids, disablement rules and date selection"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the month grid for a reference date
    Grid {
        /// Reference month (YYYY-MM) or any date inside it
        month: String,
        /// Pad every grid to six weeks
        #[arg(long)]
        normalize: bool,
        /// First weekday of each row (0 = Sunday .. 6 = Saturday)
        #[arg(long, default_value_t = 0)]
        week_start: u8,
        /// Number of consecutive months to print
        #[arg(long, default_value_t = 1)]
        calendars: usize,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Report whether dates are disabled under a rule set
    Check {
        /// Dates to check
        #[arg(required = true)]
        dates: Vec<String>,
        /// Picker configuration JSON file (its `disabledDates` are used)
        #[arg(short, long)]
        config: Option<String>,
        /// Inline disablement rule JSON (overrides --config)
        #[arg(long)]
        rules: Option<String>,
        /// Treat exactly two dates as an inclusive interval
        #[arg(long)]
        range: bool,
    },
    /// Replay clicks (and an optional final hover) and print the selection
    Select {
        /// Selection mode (defaults to the config's, or single)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
        /// Picker configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
        /// Inline disablement rule JSON (overrides --config)
        #[arg(long)]
        rules: Option<String>,
        /// Date to click; repeat for a sequence
        #[arg(long = "click")]
        clicks: Vec<String>,
        /// Date hovered after the last click
        #[arg(long)]
        hover: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Multiple,
    Range,
}

impl From<ModeArg> for SelectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => SelectionMode::Single,
            ModeArg::Multiple => SelectionMode::Multiple,
            ModeArg::Range => SelectionMode::Range,
        }
    }
}

#[derive(Serialize)]
struct SelectOutput {
    selection: ExternalSelection,
    hover: Option<CalendarDate>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Grid {
            month,
            normalize,
            week_start,
            calendars,
            json,
        } => {
            let reference = parse_month(&month)?;
            let locale = Gregorian::new(weekday_from_number(week_start)?);
            let view = MonthView::new(locale, reference, calendars, normalize)?;
            info!(reference = %view.reference(), calendars, "building grids");

            if json {
                let grids: Vec<&MonthGrid> = view.grids().collect();
                println!("{}", serde_json::to_string_pretty(&grids)?);
            } else {
                let tables: Vec<String> = view
                    .grids()
                    .map(|grid| render_grid(view.locale(), grid))
                    .collect();
                print!("{}", tables.join("\n"));
            }
        }
        Commands::Check {
            dates,
            config,
            rules,
            range,
        } => {
            let rules = load_rules(config.as_deref(), rules.as_deref())?;
            let dates = dates
                .iter()
                .map(|s| parse_date(s))
                .collect::<Result<Vec<_>>>()?;

            if range {
                let [start, end] = dates.as_slice() else {
                    bail!("--range needs exactly two dates, got {}", dates.len());
                };
                let verdict = if is_range_disabled(*start, *end, &rules) {
                    "disabled"
                } else {
                    "enabled"
                };
                println!("{}..{} {}", start, end, verdict);
            } else {
                for date in dates {
                    let verdict = if is_disabled(date, &rules) {
                        "disabled"
                    } else {
                        "enabled"
                    };
                    println!("{} {}", date, verdict);
                }
            }
        }
        Commands::Select {
            mode,
            config,
            rules,
            clicks,
            hover,
        } => {
            let picker = match config.as_deref() {
                Some(path) => load_config(path)?,
                None => PickerConfig::default(),
            };
            let mode = mode.map(SelectionMode::from).unwrap_or(picker.mode);
            let rules = match rules.as_deref() {
                Some(json) => parse_rules(json)?,
                None => picker.disabled_dates,
            };

            let mut engine = SelectionEngine::new(mode, rules);
            for click in &clicks {
                engine.on_date_activated(parse_date(click)?);
            }
            let hover = match hover.as_deref() {
                Some(h) => engine.on_hover_change(Some(parse_date(h)?)),
                None => engine.hover(),
            };

            let output = SelectOutput {
                selection: datepick_core::normalize_for_export(engine.selection()),
                hover,
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    Ok(())
}

/// Render one grid as a text table: a title line, a weekday header, then one
/// line per week with padding days in brackets.
fn render_grid<L: CalendarLocale>(locale: &L, grid: &MonthGrid) -> String {
    let reference = grid.reference();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        locale.month_name(reference.month(), MonthNameStyle::Long),
        reference.year()
    );

    let header: Vec<String> = grid.weeks()[0]
        .iter()
        .map(|cell| {
            let name = cell.date.weekday().to_string();
            format!(" {:<2} ", &name[..2])
        })
        .collect();
    let _ = writeln!(out, "{}", header.concat().trim_end());

    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if cell.belongs_to_displayed_month {
                    format!(" {:>2} ", cell.label())
                } else {
                    format!("[{:>2}]", cell.label())
                }
            })
            .collect();
        let _ = writeln!(out, "{}", row.concat().trim_end());
    }
    out
}

/// Accept `YYYY-MM` as shorthand for the first of that month.
fn parse_month(s: &str) -> Result<CalendarDate> {
    let trimmed = s.trim();
    if trimmed.matches('-').count() == 1 {
        return parse_date(&format!("{}-01", trimmed));
    }
    parse_date(trimmed)
}

fn parse_date(s: &str) -> Result<CalendarDate> {
    CalendarDate::parse(s).with_context(|| format!("Failed to parse date: {}", s))
}

fn parse_rules(json: &str) -> Result<DisablementRule> {
    serde_json::from_str(json).context("Failed to parse disablement rules")
}

fn load_config(path: &str) -> Result<PickerConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    PickerConfig::from_json(&text).with_context(|| format!("Invalid picker config: {}", path))
}

/// Rules from `--rules`, else from the config file's `disabledDates`, else none.
fn load_rules(config: Option<&str>, rules: Option<&str>) -> Result<DisablementRule> {
    if let Some(json) = rules {
        return parse_rules(json);
    }
    match config {
        Some(path) => Ok(load_config(path)?.disabled_dates),
        None => Ok(DisablementRule::new()),
    }
}
