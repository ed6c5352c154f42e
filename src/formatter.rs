use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::FormatError;
use crate::models::{default_hours_threshold, Config, RelativeTime};
use crate::utils::{from_unix, render, same_year};

/// Default patterns for each formatter, in date-fns pattern syntax
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Patterns {
    #[serde(default = "default_message_stamp")]
    pub message_stamp: String,
    #[serde(default = "default_message_timestamp")]
    pub message_timestamp: String,
    /// Used by `message_timestamp` when the message is from another year
    #[serde(default = "default_other_year")]
    pub other_year: String,
    #[serde(default = "default_date")]
    pub date: String,
}

fn default_message_stamp() -> String {
    "h:mm a".to_string()
}

fn default_message_timestamp() -> String {
    "MMM d, yyyy".to_string()
}

fn default_other_year() -> String {
    "LLL d y, h:mm a".to_string()
}

fn default_date() -> String {
    "MMM d, yyyy".to_string()
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            message_stamp: default_message_stamp(),
            message_timestamp: default_message_timestamp(),
            other_year: default_other_year(),
            date: default_date(),
        }
    }
}

/// Turns Unix timestamps into display strings for a message list
///
/// "Now" is read from the wall clock on every call unless pinned with
/// [`TimestampFormatter::with_now`].
#[derive(Debug, Clone)]
pub struct TimestampFormatter<Tz: TimeZone> {
    tz: Tz,
    patterns: Patterns,
    hours_threshold: u32,
    now: Option<DateTime<Utc>>,
}

impl<Tz: TimeZone> TimestampFormatter<Tz>
where
    Tz::Offset: Display,
{
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            patterns: Patterns::default(),
            hours_threshold: default_hours_threshold(),
            now: None,
        }
    }

    pub fn from_config(tz: Tz, config: &Config) -> Self {
        Self {
            tz,
            patterns: config.patterns.clone(),
            hours_threshold: config.hours_threshold,
            now: None,
        }
    }

    pub fn with_patterns(mut self, patterns: Patterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// Pin the reference time used by relative formatters
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    fn now(&self) -> DateTime<Tz> {
        self.now.unwrap_or_else(Utc::now).with_timezone(&self.tz)
    }

    fn at(&self, timestamp: i64) -> Result<DateTime<Tz>, FormatError> {
        from_unix(timestamp, &self.tz)
    }

    /// Time of day for a message, `h:mm a` by default
    pub fn message_stamp(&self, timestamp: i64, pattern: Option<&str>) -> Result<String, FormatError> {
        let pattern = pattern.unwrap_or(&self.patterns.message_stamp);
        render(&self.at(timestamp)?, pattern)
    }

    /// Message date, switching to the `other_year` pattern for messages outside the current year
    pub fn message_timestamp(&self, timestamp: i64, pattern: Option<&str>) -> Result<String, FormatError> {
        let message_time = self.at(timestamp)?;
        let pattern = pattern.unwrap_or(&self.patterns.message_timestamp);
        let message_date = render(&message_time, pattern)?;

        if !same_year(&message_time, &self.now()) {
            return render(&message_time, &self.patterns.other_year);
        }
        Ok(message_date)
    }

    /// Relative phrase such as "about 3 hours ago" or "in 2 days"
    pub fn dynamic_time(&self, timestamp: i64) -> Result<String, FormatError> {
        Ok(self.relative_time(timestamp)?.to_phrase())
    }

    pub fn date_format(&self, timestamp: i64, pattern: Option<&str>) -> Result<String, FormatError> {
        let pattern = pattern.unwrap_or(&self.patterns.date);
        render(&self.at(timestamp)?, pattern)
    }

    /// Two-digit clock time, followed by `MM/DD/YYYY` once the message is
    /// older than `hours_threshold` hours
    pub fn custom_timestamp(&self, timestamp: i64, hours_threshold: Option<u32>) -> Result<String, FormatError> {
        let message_time = self.at(timestamp)?;
        let threshold_secs = hours_threshold.unwrap_or(self.hours_threshold) as i64 * 3600;
        let elapsed_secs = self.now().timestamp() - message_time.timestamp();

        let mut time_string = message_time.format("%I:%M %p").to_string();
        if elapsed_secs > threshold_secs {
            time_string.push(' ');
            time_string.push_str(&message_time.format("%m/%d/%Y").to_string());
        }

        Ok(time_string)
    }

    /// Short form such as `3h` computed from the elapsed time itself
    pub fn short_time(&self, timestamp: i64, with_ago: bool) -> Result<String, FormatError> {
        Ok(self.relative_time(timestamp)?.short(with_ago))
    }

    pub fn relative_time(&self, timestamp: i64) -> Result<RelativeTime, FormatError> {
        Ok(RelativeTime::between(&self.at(timestamp)?, &self.now()))
    }
}
