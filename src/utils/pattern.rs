use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt::Display;

use crate::error::FormatError;

/// Render a date/time with a date-fns style pattern such as `MMM d, yyyy` or `h:mm a`
///
/// Letters form tokens (a run of the same letter is one token), text inside
/// single quotes is copied verbatim, `''` is a literal quote and every other
/// character is copied as-is.
pub fn render<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: &str) -> Result<String, FormatError>
where
    Tz::Offset: Display,
{
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
                continue;
            }

            let mut closed = false;
            while let Some(c) = chars.next() {
                if c == '\'' {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        out.push('\'');
                        continue;
                    }
                    closed = true;
                    break;
                }
                out.push(c);
            }
            if !closed {
                return Err(FormatError::UnterminatedQuote(pattern.to_string()));
            }
        } else if ch.is_ascii_alphabetic() {
            let mut len = 1;
            while chars.peek() == Some(&ch) {
                chars.next();
                len += 1;
            }
            out.push_str(&render_token(dt, ch, len)?);
        } else {
            out.push(ch);
        }
    }

    Ok(out)
}

fn padded(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

fn render_token<Tz: TimeZone>(dt: &DateTime<Tz>, letter: char, len: usize) -> Result<String, FormatError>
where
    Tz::Offset: Display,
{
    let rendered = match (letter, len) {
        ('y', 1) => dt.year().to_string(),
        ('y', 2) => padded(dt.year().rem_euclid(100) as u32, 2),
        ('y', n) => format!("{:0width$}", dt.year(), width = n),

        ('M' | 'L', 1 | 2) => padded(dt.month(), len),
        ('M' | 'L', 3) => dt.format("%b").to_string(),
        ('M' | 'L', 4) => dt.format("%B").to_string(),
        ('M' | 'L', 5) => dt.format("%B").to_string().chars().take(1).collect(),

        ('d', n) => padded(dt.day(), n),

        ('E', 1..=3) => dt.format("%a").to_string(),
        ('E', 4) => dt.format("%A").to_string(),
        ('E', 5) => dt.format("%a").to_string().chars().take(1).collect(),
        ('E', 6) => dt.format("%a").to_string().chars().take(2).collect(),

        ('a', 1 | 2) => dt.format("%p").to_string(),
        ('a', 3) => dt.format("%P").to_string(),
        ('a', 4) => (if dt.hour() < 12 { "a.m." } else { "p.m." }).to_string(),
        ('a', 5) => (if dt.hour() < 12 { "a" } else { "p" }).to_string(),

        ('h', n) => padded(dt.hour12().1, n),
        ('H', n) => padded(dt.hour(), n),
        ('m', n) => padded(dt.minute(), n),
        ('s', n) => padded(dt.second(), n),

        _ => return Err(FormatError::UnsupportedToken(letter.to_string().repeat(len))),
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    #[test]
    fn test_default_message_patterns() {
        let dt = afternoon();
        assert_eq!(render(&dt, "h:mm a").unwrap(), "2:07 PM");
        assert_eq!(render(&dt, "MMM d, yyyy").unwrap(), "Mar 5, 2024");
        assert_eq!(render(&dt, "LLL d y, h:mm a").unwrap(), "Mar 5 2024, 2:07 PM");
    }

    #[test]
    fn test_numeric_padding() {
        let dt = afternoon();
        assert_eq!(render(&dt, "dd/MM/yy HH:mm:ss").unwrap(), "05/03/24 14:07:09");
        assert_eq!(render(&dt, "hh").unwrap(), "02");
        assert_eq!(render(&dt, "yyyyy").unwrap(), "02024");
    }

    #[test]
    fn test_text_tokens() {
        let dt = afternoon();
        assert_eq!(render(&dt, "MMMM").unwrap(), "March");
        assert_eq!(render(&dt, "MMMMM").unwrap(), "M");
        assert_eq!(render(&dt, "EEE").unwrap(), "Tue");
        assert_eq!(render(&dt, "EEEE").unwrap(), "Tuesday");
        assert_eq!(render(&dt, "EEEEEE").unwrap(), "Tu");
        assert_eq!(render(&dt, "aaa").unwrap(), "pm");
        assert_eq!(render(&dt, "aaaa").unwrap(), "p.m.");
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 0, 30, 0).unwrap();
        assert_eq!(render(&dt, "h:mm a").unwrap(), "12:30 AM");
    }

    #[test]
    fn test_quoted_literals() {
        let dt = afternoon();
        assert_eq!(render(&dt, "'at' h a").unwrap(), "at 2 PM");
        assert_eq!(render(&dt, "h 'o''clock'").unwrap(), "2 o'clock");
        assert_eq!(render(&dt, "''d''").unwrap(), "'5'");
    }

    #[test]
    fn test_unsupported_token() {
        let result = render(&afternoon(), "YYYY");
        assert_eq!(result, Err(FormatError::UnsupportedToken("YYYY".to_string())));
    }

    #[test]
    fn test_unterminated_quote() {
        let result = render(&afternoon(), "h 'oops");
        assert!(matches!(result, Err(FormatError::UnterminatedQuote(_))));
    }
}
