//! Cache options and configuration.

use crate::locale::Locale;
use crate::zone::TimeZoneId;

/// Options for a [`FormatterCache`](crate::FormatterCache).
#[derive(Debug, Clone)]
pub struct CacheOptions {
    /// Number of catalog slots to allocate up front.
    pub initial_capacity: usize,
    /// Zone used by `get_or_create_local`. `None` means the process-local zone,
    /// resolved on each call.
    pub default_time_zone: Option<TimeZoneId>,
    /// The locale every formatter built by the cache renders with.
    pub locale: Locale,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            default_time_zone: None,
            locale: Locale::default(),
        }
    }
}

impl CacheOptions {
    /// Returns the zone to use when a caller does not name one.
    pub fn resolve_time_zone(&self) -> TimeZoneId {
        self.default_time_zone.unwrap_or_else(TimeZoneId::local)
    }
}
