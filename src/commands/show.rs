use anyhow::Result;
use chatstamp::{RelativeTime, TimestampFormatter};
use chrono::TimeZone;
use colored::*;
use serde::Serialize;
use std::fmt::Display;

/// Every rendering of a single timestamp
#[derive(Debug, Serialize)]
struct Renderings {
    timestamp: i64,
    message_stamp: String,
    message_timestamp: String,
    dynamic_time: String,
    date: String,
    custom: String,
    short: String,
    short_with_ago: String,
    relative: RelativeTime,
}

pub fn show_command<Tz: TimeZone>(formatter: &TimestampFormatter<Tz>, timestamp: i64, json: bool) -> Result<()>
where
    Tz::Offset: Display,
{
    let renderings = Renderings {
        timestamp,
        message_stamp: formatter.message_stamp(timestamp, None)?,
        message_timestamp: formatter.message_timestamp(timestamp, None)?,
        dynamic_time: formatter.dynamic_time(timestamp)?,
        date: formatter.date_format(timestamp, None)?,
        custom: formatter.custom_timestamp(timestamp, None)?,
        short: formatter.short_time(timestamp, false)?,
        short_with_ago: formatter.short_time(timestamp, true)?,
        relative: formatter.relative_time(timestamp)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&renderings)?);
        return Ok(());
    }

    println!("{:<20} {}", "FORMAT".bold(), "OUTPUT".bold());
    let rows = [
        ("stamp", &renderings.message_stamp),
        ("timestamp", &renderings.message_timestamp),
        ("ago", &renderings.dynamic_time),
        ("date", &renderings.date),
        ("custom", &renderings.custom),
        ("short", &renderings.short),
        ("short --with-ago", &renderings.short_with_ago),
    ];
    for (name, output) in rows {
        println!("{:<20} {}", name, output.green());
    }

    Ok(())
}
