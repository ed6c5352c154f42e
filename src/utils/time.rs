use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::error::FormatError;
use crate::models::{Direction, Qualifier, RelativeTime, TimeUnit};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Convert Unix seconds into a date/time in the given zone
pub fn from_unix<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Result<DateTime<Tz>, FormatError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.with_timezone(tz))
        .ok_or(FormatError::InvalidTimestamp(timestamp))
}

pub fn same_year<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.year() == b.year()
}

/// Whole calendar months from `earlier` to `later`, not counting a final partial month
pub fn whole_months_between<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> i64 {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12 + later.month() as i64
        - earlier.month() as i64;

    if months > 0 {
        let later_key = (later.day(), later.num_seconds_from_midnight());
        let earlier_key = (earlier.day(), earlier.num_seconds_from_midnight());
        // Jan 31 -> Feb 28 still counts as a full month
        let later_is_month_end = later
            .date_naive()
            .succ_opt()
            .map_or(true, |next| next.month() != later.month());

        if later_key < earlier_key && !(months == 1 && later_is_month_end) {
            months -= 1;
        }
    }

    months
}

fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

/// Compute the approximate distance between `then` and `now`
pub fn distance_between<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> RelativeTime {
    let (earlier, later, direction) = if then > now {
        (now, then, Direction::Future)
    } else {
        (then, now, Direction::Past)
    };

    let seconds = later.timestamp() - earlier.timestamp();
    let minutes = rounded_div(seconds, 60);

    let (qualifier, quantity, unit) = if minutes == 0 {
        (Qualifier::LessThan, 1, TimeUnit::Minute)
    } else if minutes < 45 {
        (Qualifier::Exact, minutes, TimeUnit::Minute)
    } else if minutes < 90 {
        (Qualifier::About, 1, TimeUnit::Hour)
    } else if minutes < MINUTES_IN_DAY {
        (Qualifier::About, rounded_div(minutes, 60), TimeUnit::Hour)
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        (Qualifier::Exact, 1, TimeUnit::Day)
    } else if minutes < MINUTES_IN_MONTH {
        (Qualifier::Exact, rounded_div(minutes, MINUTES_IN_DAY), TimeUnit::Day)
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        (Qualifier::About, rounded_div(minutes, MINUTES_IN_MONTH), TimeUnit::Month)
    } else {
        let months = whole_months_between(earlier, later);
        if months < 12 {
            (Qualifier::Exact, rounded_div(minutes, MINUTES_IN_MONTH), TimeUnit::Month)
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => (Qualifier::About, years, TimeUnit::Year),
                3..=8 => (Qualifier::Over, years, TimeUnit::Year),
                _ => (Qualifier::Almost, years + 1, TimeUnit::Year),
            }
        }
    };

    RelativeTime {
        qualifier,
        quantity,
        unit,
        direction,
    }
}
