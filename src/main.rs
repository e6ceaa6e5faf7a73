use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use serde::Serialize;
use timeduration::{ParseMode, ParseOptions, TimePeriod};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "timeduration",
    about = "Parse human-readable durations and print them as text or SQL intervals",
    version = env!("CARGO_PKG_VERSION"),
)]
#[command(group(
    ArgGroup::new("output")
        .args(&["verbose", "summary", "sql", "json"])
        .multiple(false),
))]
struct Args {
    /// Durations to parse, e.g. "2d 5h 30m", "1d2h3m4s" or "90" (bare numbers are minutes)
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<String>,

    /// Verbose mode (default) – show components, total and both renderings
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Summary mode – one line per input (e.g., "90 => 1h 30m ")
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// SQL mode – output only the interval (e.g., "interval 5400 second")
    #[arg(short = 'q', long = "sql")]
    sql: bool,

    /// JSON mode – output an array of parsed periods
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// How to treat unknown units and inputs without any number
    #[arg(
        long = "mode",
        env = "TIMEDURATION_MODE",
        value_enum,
        default_value_t = ModeArg::Permissive
    )]
    mode: ModeArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Permissive,
    Strict,
}

impl From<ModeArg> for ParseOptions {
    fn from(mode: ModeArg) -> Self {
        let mode = match mode {
            ModeArg::Permissive => ParseMode::Permissive,
            ModeArg::Strict => ParseMode::Strict,
        };
        ParseOptions { mode }
    }
}

enum Mode {
    Verbose,
    Summary,
    Sql,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(flatten)]
    period: TimePeriod,
    human: String,
    sql: String,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let mode = if args.summary {
        Mode::Summary
    } else if args.sql {
        Mode::Sql
    } else if args.json {
        Mode::Json
    } else {
        Mode::Verbose
    };
    let options = ParseOptions::from(args.mode);
    tracing::debug!(mode = ?options.mode, inputs = args.inputs.len(), "parsing durations");

    let mut reports = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let period = TimePeriod::parse_with(input, &options)
            .with_context(|| format!("Invalid duration '{input}'"))?;
        reports.push(Report {
            input,
            period,
            human: period.to_string(),
            sql: period.as_sql_interval(),
        });
    }

    match mode {
        Mode::Verbose => {
            for report in &reports {
                let period = &report.period;
                println!("{}", report.input);
                println!("  {:>13}: {:>12}", "Days", period.days());
                println!("  {:>13}: {:>12}", "Hours", period.hours());
                println!("  {:>13}: {:>12}", "Minutes", period.minutes());
                println!("  {:>13}: {:>12}", "Seconds", period.seconds());
                println!("  {:>13}: {:>12} s", "→ Total", period.total_seconds());
                println!("  {:>13}: {}", "→ Formatted", report.human);
                println!("  {:>13}: {}", "→ SQL", report.sql);
            }
        }
        Mode::Summary => {
            for report in &reports {
                println!("{} => {}", report.input, report.human);
            }
        }
        Mode::Sql => {
            for report in &reports {
                println!("{}", report.sql);
            }
        }
        Mode::Json => {
            let json = serde_json::to_string_pretty(&reports)
                .context("Failed to serialize durations")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
