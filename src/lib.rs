//! chatstamp - timestamp formatting helpers for chat message lists
//!
//! Renders Unix timestamps as absolute times, "time ago" phrases and
//! compact short forms like `3h ago`.

pub mod error;
pub mod formatter;
pub mod models;
pub mod utils;

pub use error::FormatError;
pub use formatter::{Patterns, TimestampFormatter};
pub use models::{Config, Direction, Qualifier, RelativeTime, TimeUnit, Zone};
pub use utils::{render, short_timestamp};
