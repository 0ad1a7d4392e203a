//! `meeting-finder` CLI — find meeting times for a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Every window of at least 30 minutes for ana and bo (stdin → stdout)
//! echo '{"request":{"attendees":["ana","bo"],"duration":30},
//!        "events":[{"attendees":["ana"],"start":"09:00","end":"10:00"}]}' \
//!   | meeting-finder query
//!
//! # Read from a file, print plain text, include the merged busy blocks
//! meeting-finder query -i day.json --format text --show-busy
//!
//! # Only the earliest window
//! meeting-finder first -i day.json
//!
//! # Debug logging on stderr
//! meeting-finder -vv query -i day.json
//! ```
//!
//! Event times are minutes since midnight or `"HH:MM"` strings; `end` is
//! exclusive and `"24:00"` means midnight at the end of the day.

mod payload;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing::{info, Level};

use payload::{AvailabilityDto, Payload, RangeDto};

/// Text output when no window fits the request.
const NO_WINDOW: &str = "no available window";

#[derive(Parser)]
#[command(
    name = "meeting-finder",
    version,
    about = "Find free meeting windows for a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every free window long enough for the meeting
    Query {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Also report the merged busy blocks
        #[arg(long)]
        show_busy: bool,
    },
    /// Print only the earliest free window
    First {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            show_busy,
        } => {
            let payload = Payload::parse(&read_input(input.as_deref())?)?;
            let events = payload.events()?;
            let request = payload.meeting_request();
            info!(
                events = events.len(),
                attendees = request.attendees.len(),
                duration = request.duration,
                "running query"
            );

            let availability = meeting_finder::resolve(&events, &request);
            let rendered = match format {
                Format::Json => {
                    let dto = AvailabilityDto::new(&availability, show_busy);
                    serde_json::to_string_pretty(&dto).context("Failed to encode result")?
                }
                Format::Text => {
                    let mut lines = Vec::new();
                    if show_busy {
                        lines.extend(availability.busy.iter().map(|r| format!("busy {}", r)));
                    }
                    if availability.free.is_empty() {
                        lines.push(NO_WINDOW.to_string());
                    }
                    lines.extend(
                        availability
                            .free
                            .iter()
                            .map(|r| format!("free {} ({} min)", r, r.duration())),
                    );
                    lines.join("\n")
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::First {
            input,
            output,
            format,
        } => {
            let payload = Payload::parse(&read_input(input.as_deref())?)?;
            let events = payload.events()?;
            let request = payload.meeting_request();

            let slot = meeting_finder::first_available(&events, &request);
            let rendered = match (format, slot) {
                (Format::Json, slot) => {
                    serde_json::to_string_pretty(&slot.as_ref().map(RangeDto::from))
                        .context("Failed to encode result")?
                }
                (Format::Text, Some(r)) => format!("{} ({} min)", r, r.duration()),
                (Format::Text, None) => NO_WINDOW.to_string(),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
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
