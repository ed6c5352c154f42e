/// Whole phrases with a fixed short form, checked before the general rewrite
const EXACT_PHRASES: [(&str, &str); 6] = [
    ("less than a minute ago", "now"),
    ("a minute ago", "1m"),
    ("an hour ago", "1h"),
    ("a day ago", "1d"),
    ("a month ago", "1mo"),
    ("a year ago", "1y"),
];

const QUALIFIERS: [&str; 3] = ["about", "over", "almost"];

/// Applied in order, first occurrence only
const UNIT_PHRASES: [(&str, &str); 10] = [
    (" minute ago", "m"),
    (" minutes ago", "m"),
    (" hour ago", "h"),
    (" hours ago", "h"),
    (" day ago", "d"),
    (" days ago", "d"),
    (" month ago", "mo"),
    (" months ago", "mo"),
    (" year ago", "y"),
    (" years ago", "y"),
];

/// Shorten a relative-time phrase: "about 3 hours ago" becomes `3h` (or `3h ago`)
///
/// Phrases that match nothing come back with only the qualifier words removed.
pub fn short_timestamp(phrase: &str, with_ago: bool) -> String {
    let suffix = if with_ago { " ago" } else { "" };

    if let Some((_, short)) = EXACT_PHRASES.iter().find(|(exact, _)| *exact == phrase) {
        // "now" never takes the suffix
        if *short == "now" {
            return short.to_string();
        }
        return format!("{}{}", short, suffix);
    }

    let mut result = strip_qualifiers(phrase);
    let mut matched = false;

    for (unit_phrase, abbreviation) in UNIT_PHRASES {
        if result.contains(unit_phrase) {
            result = result.replacen(unit_phrase, &format!("{}{}", abbreviation, suffix), 1);
            matched = true;
        }
    }

    if !matched {
        log::debug!("No unit found in relative phrase {:?}, returning it unshortened", phrase);
    }

    result
}

/// Remove qualifier words along with one trailing space
fn strip_qualifiers(phrase: &str) -> String {
    let mut result = phrase.to_string();
    for qualifier in QUALIFIERS {
        result = result.replace(&format!("{} ", qualifier), "");
        result = result.replace(qualifier, "");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_phrases() {
        assert_eq!(short_timestamp("a minute ago", false), "1m");
        assert_eq!(short_timestamp("a minute ago", true), "1m ago");
        assert_eq!(short_timestamp("an hour ago", false), "1h");
        assert_eq!(short_timestamp("an hour ago", true), "1h ago");
        assert_eq!(short_timestamp("a day ago", true), "1d ago");
        assert_eq!(short_timestamp("a month ago", false), "1mo");
        assert_eq!(short_timestamp("a year ago", true), "1y ago");
    }

    #[test]
    fn test_less_than_a_minute_is_always_now() {
        assert_eq!(short_timestamp("less than a minute ago", false), "now");
        assert_eq!(short_timestamp("less than a minute ago", true), "now");
    }

    #[test]
    fn test_qualified_phrases() {
        assert_eq!(short_timestamp("about 3 hours ago", false), "3h");
        assert_eq!(short_timestamp("about 3 hours ago", true), "3h ago");
        assert_eq!(short_timestamp("over 2 years ago", false), "2y");
        assert_eq!(short_timestamp("almost 5 months ago", true), "5mo ago");
    }

    #[test]
    fn test_qualifier_leaves_no_stray_space() {
        assert_eq!(short_timestamp("about 1 hour ago", false), "1h");
        assert_eq!(short_timestamp("about 3 hours", false), "3 hours");
    }

    #[test]
    fn test_every_unit_phrase() {
        let cases = [
            ("minute", "minutes", "m"),
            ("hour", "hours", "h"),
            ("day", "days", "d"),
            ("month", "months", "mo"),
            ("year", "years", "y"),
        ];

        for (singular, plural, abbreviation) in cases {
            assert_eq!(
                short_timestamp(&format!("1 {} ago", singular), false),
                format!("1{}", abbreviation)
            );
            assert_eq!(
                short_timestamp(&format!("12 {} ago", plural), true),
                format!("12{} ago", abbreviation)
            );
        }
    }

    #[test]
    fn test_unrecognized_phrase_passes_through() {
        assert_eq!(short_timestamp("in about 3 hours", true), "in 3 hours");
        assert_eq!(short_timestamp("yesterday", true), "yesterday");
        assert_eq!(short_timestamp("", false), "");
    }

    #[test]
    fn test_deterministic() {
        let first = short_timestamp("about 7 days ago", true);
        let second = short_timestamp("about 7 days ago", true);
        assert_eq!(first, second);
        assert_eq!(first, "7d ago");
    }
}
