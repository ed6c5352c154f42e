//! Error types for timestamp formatting

/// Errors produced while turning a timestamp into a display string
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid timestamp: {0} is outside the representable range")]
    InvalidTimestamp(i64),

    #[error("Unsupported pattern token '{0}'")]
    UnsupportedToken(String),

    #[error("Unterminated quote in pattern '{0}'")]
    UnterminatedQuote(String),
}
