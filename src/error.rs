//! Error types for parsing patterns, resolving zones and managing the cache.

use thiserror::Error;

/// Errors that can occur when parsing a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown pattern field at position {position}: found '{found}'")]
    UnknownField { position: usize, found: char },

    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("empty date pattern")]
    EmptyPattern,
}

/// Errors that can occur when resolving a time zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("unknown time zone identifier '{identifier}'")]
    Unknown { identifier: String },
}

/// Errors that can occur when rendering an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("formatter has no pattern")]
    MissingPattern,

    #[error("formatter has no time zone")]
    MissingTimeZone,
}

/// Errors raised by [`FormatterCache`](crate::FormatterCache) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("invalid cache entry: {missing} is not set")]
    InvalidEntry { missing: &'static str },
}
