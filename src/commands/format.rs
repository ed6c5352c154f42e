use anyhow::{anyhow, Result};
use chatstamp::{short_timestamp, TimestampFormatter};
use chrono::TimeZone;
use std::fmt::Display;

pub fn stamp_command<Tz: TimeZone>(formatter: &TimestampFormatter<Tz>, timestamp: i64, pattern: Option<&str>) -> Result<()>
where
    Tz::Offset: Display,
{
    println!("{}", formatter.message_stamp(timestamp, pattern)?);
    Ok(())
}

pub fn timestamp_command<Tz: TimeZone>(
    formatter: &TimestampFormatter<Tz>,
    timestamp: i64,
    pattern: Option<&str>,
) -> Result<()>
where
    Tz::Offset: Display,
{
    println!("{}", formatter.message_timestamp(timestamp, pattern)?);
    Ok(())
}

pub fn ago_command<Tz: TimeZone>(formatter: &TimestampFormatter<Tz>, timestamp: i64) -> Result<()>
where
    Tz::Offset: Display,
{
    println!("{}", formatter.dynamic_time(timestamp)?);
    Ok(())
}

pub fn date_command<Tz: TimeZone>(formatter: &TimestampFormatter<Tz>, timestamp: i64, pattern: Option<&str>) -> Result<()>
where
    Tz::Offset: Display,
{
    println!("{}", formatter.date_format(timestamp, pattern)?);
    Ok(())
}

pub fn custom_command<Tz: TimeZone>(formatter: &TimestampFormatter<Tz>, timestamp: i64, hours: Option<u32>) -> Result<()>
where
    Tz::Offset: Display,
{
    println!("{}", formatter.custom_timestamp(timestamp, hours)?);
    Ok(())
}

pub fn short_command<Tz: TimeZone>(
    formatter: &TimestampFormatter<Tz>,
    phrase: Option<&str>,
    at: Option<i64>,
    with_ago: bool,
) -> Result<()>
where
    Tz::Offset: Display,
{
    let short = match (phrase, at) {
        (_, Some(timestamp)) => formatter.short_time(timestamp, with_ago)?,
        (Some(phrase), None) => short_timestamp(phrase, with_ago),
        (None, None) => return Err(anyhow!("Either a phrase or --at <timestamp> is required")),
    };

    println!("{}", short);
    Ok(())
}
