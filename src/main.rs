//! chatstamp CLI - render Unix timestamps the way a chat message list shows them

mod commands;

use anyhow::{anyhow, Result};
use chatstamp::{Config, TimestampFormatter, Zone};
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::PathBuf;

use commands::*;

#[derive(Parser)]
#[command(name = "chatstamp")]
#[command(about = "Format Unix timestamps for chat message lists", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (default: nearest .chatstamp.yaml, then ~/.chatstamp.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Render in UTC regardless of the configured zone
    #[arg(long, global = true)]
    utc: bool,

    /// Reference time as Unix seconds (default: the current time)
    #[arg(long, global = true, allow_negative_numbers = true)]
    now: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time of day for a message (default pattern "h:mm a")
    Stamp {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        /// date-fns style pattern
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Message date, with year and time for messages from another year
    Timestamp {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        /// date-fns style pattern used for messages from the current year
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Relative phrase such as "about 3 hours ago"
    Ago {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,
    },

    /// Calendar date (default pattern "MMM d, yyyy")
    Date {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        /// date-fns style pattern
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Clock time, plus the date once the message is older than the threshold
    Custom {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        /// Hours after which the date is appended (default from config: 12)
        #[arg(long)]
        hours: Option<u32>,
    },

    /// Short form like "3h" from a relative phrase or a timestamp
    Short {
        /// Relative phrase, e.g. "about 3 hours ago"
        #[arg(required_unless_present = "at", conflicts_with = "at")]
        phrase: Option<String>,

        /// Compute the short form from this timestamp instead of a phrase
        #[arg(long, allow_negative_numbers = true)]
        at: Option<i64>,

        /// Append " ago"
        #[arg(long)]
        with_ago: bool,
    },

    /// Show every rendering of one timestamp
    Show {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a default .chatstamp.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level)).init();

    if let Commands::Init = cli.command {
        return init_command();
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };

    let now = match cli.now {
        Some(ts) => Some(
            DateTime::from_timestamp(ts, 0).ok_or_else(|| anyhow!("Invalid --now timestamp: {}", ts))?,
        ),
        None => None,
    };

    let zone = if cli.utc { Zone::Utc } else { config.timezone };
    log::debug!("Rendering in {:?}", zone);

    match zone {
        Zone::Local => dispatch(cli.command, formatter(Local, &config, now), &config),
        Zone::Utc => dispatch(cli.command, formatter(Utc, &config, now), &config),
    }
}

fn formatter<Tz: TimeZone>(tz: Tz, config: &Config, now: Option<DateTime<Utc>>) -> TimestampFormatter<Tz>
where
    Tz::Offset: Display,
{
    let formatter = TimestampFormatter::from_config(tz, config);
    match now {
        Some(now) => formatter.with_now(now),
        None => formatter,
    }
}

fn dispatch<Tz: TimeZone>(command: Commands, formatter: TimestampFormatter<Tz>, config: &Config) -> Result<()>
where
    Tz::Offset: Display,
{
    match command {
        Commands::Stamp { timestamp, pattern } => stamp_command(&formatter, timestamp, pattern.as_deref())?,
        Commands::Timestamp { timestamp, pattern } => {
            timestamp_command(&formatter, timestamp, pattern.as_deref())?
        }
        Commands::Ago { timestamp } => ago_command(&formatter, timestamp)?,
        Commands::Date { timestamp, pattern } => date_command(&formatter, timestamp, pattern.as_deref())?,
        Commands::Custom { timestamp, hours } => custom_command(&formatter, timestamp, hours)?,
        Commands::Short { phrase, at, with_ago } => {
            short_command(&formatter, phrase.as_deref(), at, with_ago || config.with_ago)?
        }
        Commands::Show { timestamp, json } => show_command(&formatter, timestamp, json)?,
        Commands::Init => init_command()?,
    }

    Ok(())
}
