//! Time zone identifiers.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::ZoneError;

/// An IANA time zone, identified by name (`UTC`, `Europe/Berlin`).
///
/// Two identifiers are equal iff their names are equal, so aliases such as
/// `UTC` and `Etc/UTC` are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeZoneId(Tz);

impl TimeZoneId {
    /// Coordinated Universal Time.
    pub const UTC: TimeZoneId = TimeZoneId(Tz::UTC);

    /// The process's current local time zone.
    ///
    /// Falls back to UTC when the system zone cannot be determined or is not
    /// a known IANA name.
    pub fn local() -> Self {
        match iana_time_zone::get_timezone() {
            Ok(name) => name.parse::<TimeZoneId>().unwrap_or_else(|err| {
                tracing::debug!(%err, "system time zone not recognised, using UTC");
                TimeZoneId::UTC
            }),
            Err(err) => {
                tracing::debug!(%err, "system time zone unavailable, using UTC");
                TimeZoneId::UTC
            }
        }
    }

    /// The IANA identifier of this zone.
    pub fn identifier(&self) -> &'static str {
        self.0.name()
    }

    /// The underlying `chrono-tz` zone.
    pub fn tz(&self) -> Tz {
        self.0
    }
}

impl From<Tz> for TimeZoneId {
    fn from(tz: Tz) -> Self {
        TimeZoneId(tz)
    }
}

impl FromStr for TimeZoneId {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Tz>()
            .map(TimeZoneId)
            .map_err(|_| ZoneError::Unknown {
                identifier: s.to_string(),
            })
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
