use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::utils::time::distance_between;

/// Approximation marker placed in front of the quantity
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    LessThan,
    About,
    Over,
    Almost,
    Exact,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// Compact unit code used by short forms
    pub fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
            TimeUnit::Month => "mo",
            TimeUnit::Year => "y",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Past,
    Future,
}

/// Elapsed time between two instants, kept as data instead of a phrase
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub qualifier: Qualifier,
    pub quantity: i64,
    pub unit: TimeUnit,
    pub direction: Direction,
}

impl RelativeTime {
    pub fn between<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        distance_between(then, now)
    }

    /// Phrase without direction, e.g. "about 3 hours"
    pub fn phrase(&self) -> String {
        if self.qualifier == Qualifier::LessThan && self.quantity == 1 {
            return format!("less than a {}", self.unit.name());
        }

        let unit = format!(
            "{}{}",
            self.unit.name(),
            if self.quantity == 1 { "" } else { "s" }
        );
        match self.qualifier {
            Qualifier::LessThan => format!("less than {} {}", self.quantity, unit),
            Qualifier::About => format!("about {} {}", self.quantity, unit),
            Qualifier::Over => format!("over {} {}", self.quantity, unit),
            Qualifier::Almost => format!("almost {} {}", self.quantity, unit),
            Qualifier::Exact => format!("{} {}", self.quantity, unit),
        }
    }

    /// Phrase with "ago" for the past and "in" for the future
    pub fn to_phrase(&self) -> String {
        match self.direction {
            Direction::Past => format!("{} ago", self.phrase()),
            Direction::Future => format!("in {}", self.phrase()),
        }
    }

    /// Compact form like `3h` or `3h ago`; anything under a minute is `now`
    pub fn short(&self, with_ago: bool) -> String {
        if self.qualifier == Qualifier::LessThan && self.unit == TimeUnit::Minute {
            return "now".to_string();
        }

        let short = format!("{}{}", self.quantity, self.unit.abbreviation());
        match self.direction {
            Direction::Future => format!("in {}", short),
            Direction::Past if with_ago => format!("{} ago", short),
            Direction::Past => short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past(qualifier: Qualifier, quantity: i64, unit: TimeUnit) -> RelativeTime {
        RelativeTime {
            qualifier,
            quantity,
            unit,
            direction: Direction::Past,
        }
    }

    #[test]
    fn test_phrase_wording() {
        assert_eq!(
            past(Qualifier::LessThan, 1, TimeUnit::Minute).to_phrase(),
            "less than a minute ago"
        );
        assert_eq!(past(Qualifier::Exact, 1, TimeUnit::Minute).to_phrase(), "1 minute ago");
        assert_eq!(past(Qualifier::About, 3, TimeUnit::Hour).to_phrase(), "about 3 hours ago");
        assert_eq!(past(Qualifier::Over, 2, TimeUnit::Year).to_phrase(), "over 2 years ago");
        assert_eq!(
            past(Qualifier::Almost, 5, TimeUnit::Year).to_phrase(),
            "almost 5 years ago"
        );
    }

    #[test]
    fn test_future_phrase() {
        let rt = RelativeTime {
            direction: Direction::Future,
            ..past(Qualifier::Exact, 4, TimeUnit::Day)
        };
        assert_eq!(rt.to_phrase(), "in 4 days");
        assert_eq!(rt.short(true), "in 4d");
        assert_eq!(rt.short(false), "in 4d");
    }

    #[test]
    fn test_short_forms() {
        assert_eq!(past(Qualifier::About, 3, TimeUnit::Hour).short(false), "3h");
        assert_eq!(past(Qualifier::About, 3, TimeUnit::Hour).short(true), "3h ago");
        assert_eq!(past(Qualifier::Exact, 12, TimeUnit::Month).short(true), "12mo ago");
        assert_eq!(past(Qualifier::Almost, 2, TimeUnit::Year).short(false), "2y");
    }

    #[test]
    fn test_short_now_ignores_ago() {
        let rt = past(Qualifier::LessThan, 1, TimeUnit::Minute);
        assert_eq!(rt.short(false), "now");
        assert_eq!(rt.short(true), "now");
    }
}
