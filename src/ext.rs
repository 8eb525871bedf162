//! Formatting helpers on `chrono::DateTime`.

use chrono::{DateTime, TimeZone};

use crate::cache::FormatterCache;
use crate::error::ParseError;
use crate::zone::TimeZoneId;

/// Format instants through the process-wide [`FormatterCache`].
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzfmt::{Formatted, TimeZoneId};
///
/// let instant = Utc.with_ymd_and_hms(2023, 1, 15, 8, 0, 0).unwrap();
/// assert_eq!(instant.formatted_in("MMM d", &TimeZoneId::UTC).unwrap(), "Jan 15");
/// ```
pub trait Formatted {
    /// Render in the global cache's default zone.
    fn formatted(&self, pattern: &str) -> Result<String, ParseError>;

    /// Render in `zone`.
    fn formatted_in(&self, pattern: &str, zone: &TimeZoneId) -> Result<String, ParseError>;
}

impl<Z: TimeZone> Formatted for DateTime<Z>
where
    Z::Offset: std::fmt::Display,
{
    fn formatted(&self, pattern: &str) -> Result<String, ParseError> {
        let formatter = FormatterCache::global().get_or_create_local(pattern)?;
        Ok(formatter.format(self))
    }

    fn formatted_in(&self, pattern: &str, zone: &TimeZoneId) -> Result<String, ParseError> {
        let formatter = FormatterCache::global().get_or_create(pattern, zone)?;
        Ok(formatter.format(self))
    }
}
