//! tzfmt - time-zone aware date pattern formatters with a shared cache
//!
//! This crate parses Unicode date patterns (`yyyy-MM-dd HH:mm ZZZZZ`), binds
//! them to an IANA time zone, and keeps the resulting formatters in a
//! concurrent cache so each pattern/zone pair is parsed once and reused.

pub mod ast;
pub mod error;
pub mod options;
pub mod zone;

mod cache;
mod ext;
mod formatter;
mod locale;
pub mod parser;

use chrono::{DateTime, TimeZone};

pub use ast::Pattern;
pub use cache::{CacheKey, CacheStats, FormatterCache};
pub use error::{CacheError, FormatError, ParseError, ZoneError};
pub use ext::Formatted;
pub use formatter::{DateFormatter, FormatterBuilder};
pub use locale::Locale;
pub use options::CacheOptions;
pub use zone::TimeZoneId;

/// Format an instant with `pattern` in `zone`, using the global cache.
pub fn format<Z: TimeZone>(
    instant: &DateTime<Z>,
    pattern: &str,
    zone: &TimeZoneId,
) -> Result<String, ParseError>
where
    Z::Offset: std::fmt::Display,
{
    let formatter = FormatterCache::global().get_or_create(pattern, zone)?;
    Ok(formatter.format(instant))
}

/// Format an instant with `pattern` in the process-local zone.
pub fn format_local<Z: TimeZone>(
    instant: &DateTime<Z>,
    pattern: &str,
) -> Result<String, ParseError>
where
    Z::Offset: std::fmt::Display,
{
    let formatter = FormatterCache::global().get_or_create_local(pattern)?;
    Ok(formatter.format(instant))
}
