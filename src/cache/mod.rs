//! Formatter caching.
//!
//! The catalog is read-mostly: lookups share a read lock, and writes
//! (publishing a new formatter, `register`, `clear`) take the write lock one
//! at a time. A miss builds its formatter outside the lock, so two threads
//! missing on the same key may both build one. The last publish wins, and
//! both formatters render identically.

mod key;
mod stats;

pub use key::CacheKey;
pub use stats::CacheStats;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;

use crate::ast::Pattern;
use crate::error::{CacheError, ParseError};
use crate::formatter::DateFormatter;
use crate::options::CacheOptions;
use crate::zone::TimeZoneId;
use stats::Counters;

/// Process-wide cache used by the convenience functions.
static GLOBAL: Lazy<FormatterCache> = Lazy::new(FormatterCache::default);

/// A concurrent store of [`DateFormatter`]s keyed by pattern and time zone.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzfmt::{FormatterCache, TimeZoneId};
///
/// let cache = FormatterCache::default();
/// let fmt = cache.get_or_create("yyyy-MM-dd", &TimeZoneId::UTC).unwrap();
/// let instant = Utc.with_ymd_and_hms(2023, 1, 15, 8, 0, 0).unwrap();
/// assert_eq!(fmt.format(&instant), "2023-01-15");
/// ```
#[derive(Debug)]
pub struct FormatterCache {
    catalog: RwLock<HashMap<CacheKey, Arc<DateFormatter>>>,
    options: CacheOptions,
    local_zone: OnceCell<TimeZoneId>,
    counters: Counters,
}

impl Default for FormatterCache {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

impl FormatterCache {
    /// Create an empty cache.
    pub fn new(options: CacheOptions) -> Self {
        Self {
            catalog: RwLock::new(HashMap::with_capacity(options.initial_capacity)),
            options,
            local_zone: OnceCell::new(),
            counters: Counters::default(),
        }
    }

    /// The cache shared by the whole process.
    pub fn global() -> &'static FormatterCache {
        &GLOBAL
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    /// Get the formatter for `pattern` in `zone`, building and publishing it
    /// on a miss.
    ///
    /// Pattern errors from construction are returned unchanged and nothing
    /// is published. Two calls with the same key return formatters that
    /// render identically, but not necessarily the same `Arc`.
    pub fn get_or_create(
        &self,
        pattern: &str,
        zone: &TimeZoneId,
    ) -> Result<Arc<DateFormatter>, ParseError> {
        let key = CacheKey::new(pattern, *zone);

        if let Some(found) = self.lookup(&key) {
            tracing::trace!(%key, "formatter cache hit");
            return Ok(found);
        }

        let formatter = Arc::new(DateFormatter::with_locale(
            pattern,
            *zone,
            self.options.locale.clone(),
        )?);
        self.counters.record_construction();
        tracing::debug!(
            %key,
            time_fields = formatter.pattern().is_some_and(Pattern::has_time_fields),
            zone_fields = formatter.pattern().is_some_and(Pattern::has_zone_fields),
            "constructed formatter"
        );

        self.publish(key, Arc::clone(&formatter));
        Ok(formatter)
    }

    /// Like [`get_or_create`](Self::get_or_create) in the cache's default zone.
    ///
    /// Without a configured `default_time_zone`, the system zone is looked
    /// up on the first call and reused for the lifetime of the cache.
    pub fn get_or_create_local(&self, pattern: &str) -> Result<Arc<DateFormatter>, ParseError> {
        let zone = self.default_zone();
        self.get_or_create(pattern, &zone)
    }

    /// The zone used when a caller does not name one.
    pub fn default_zone(&self) -> TimeZoneId {
        match self.options.default_time_zone {
            Some(zone) => zone,
            None => *self.local_zone.get_or_init(TimeZoneId::local),
        }
    }

    /// Get the formatter for `pattern` in `zone` without building one.
    pub fn get(&self, pattern: &str, zone: &TimeZoneId) -> Option<Arc<DateFormatter>> {
        self.lookup(&CacheKey::new(pattern, *zone))
    }

    /// Store `entry` under the key derived from its own pattern and zone,
    /// replacing any entry already there.
    ///
    /// Fails with [`CacheError::InvalidEntry`] if the entry has no pattern
    /// or no time zone; the catalog is left untouched.
    pub fn register(&self, entry: impl Into<Arc<DateFormatter>>) -> Result<(), CacheError> {
        let entry = entry.into();

        let pattern = entry
            .pattern()
            .ok_or(CacheError::InvalidEntry { missing: "pattern" })?;
        let zone = entry.time_zone().ok_or(CacheError::InvalidEntry {
            missing: "time zone",
        })?;

        let key = CacheKey::new(pattern.as_str(), zone);
        tracing::debug!(%key, "registered formatter");

        self.publish(key, entry);
        self.counters.record_registration();
        Ok(())
    }

    /// Remove every entry. Handles already returned stay usable.
    pub fn clear(&self) {
        let removed = {
            let mut catalog = self.catalog.write();
            let removed = catalog.len();
            catalog.clear();
            removed
        };
        self.counters.record_clear();
        tracing::debug!(removed, "cleared formatter cache");
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.catalog.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len())
    }

    fn lookup(&self, key: &CacheKey) -> Option<Arc<DateFormatter>> {
        let found = self.catalog.read().get(key).cloned();
        if found.is_some() {
            self.counters.record_hit();
        } else {
            self.counters.record_miss();
        }
        found
    }

    fn publish(&self, key: CacheKey, formatter: Arc<DateFormatter>) {
        self.catalog.write().insert(key, formatter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_hit_does_not_construct() {
        let cache = FormatterCache::default();
        let first = cache.get_or_create("yyyy", &TimeZoneId::UTC).unwrap();
        let second = cache.get_or_create("yyyy", &TimeZoneId::UTC).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        let stats = cache.stats();
        assert_eq!(stats.constructions, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_failed_construction_publishes_nothing() {
        let cache = FormatterCache::default();
        let err = cache.get_or_create("yyyy 'oops", &TimeZoneId::UTC).unwrap_err();
        assert_eq!(err, ParseError::UnterminatedQuote { position: 5 });
        assert!(cache.is_empty());
        assert_eq!(cache.stats().constructions, 0);
    }

    #[test]
    fn test_get_never_constructs() {
        let cache = FormatterCache::default();
        assert!(cache.get("d", &TimeZoneId::UTC).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_local_uses_configured_default() {
        let paris: TimeZoneId = "Europe/Paris".parse().unwrap();
        let cache = FormatterCache::new(CacheOptions {
            default_time_zone: Some(paris),
            ..CacheOptions::default()
        });

        let fmt = cache.get_or_create_local("HH").unwrap();
        assert_eq!(fmt.time_zone(), Some(paris));
        assert!(cache.get("HH", &paris).is_some());
    }

    #[test]
    fn test_local_zone_resolved_once() {
        let cache = FormatterCache::default();
        assert!(cache.local_zone.get().is_none());

        let fmt = cache.get_or_create_local("HH").unwrap();
        assert_eq!(cache.local_zone.get(), Some(&TimeZoneId::local()));
        assert_eq!(fmt.time_zone(), Some(TimeZoneId::local()));

        cache.get_or_create_local("HH").unwrap();
        assert_eq!(cache.stats().constructions, 1);
    }

    #[test]
    fn test_configured_zone_skips_local_lookup() {
        let cache = FormatterCache::new(CacheOptions {
            default_time_zone: Some(TimeZoneId::UTC),
            ..CacheOptions::default()
        });
        assert_eq!(cache.default_zone(), TimeZoneId::UTC);
        assert!(cache.local_zone.get().is_none());
    }

    #[test]
    fn test_cache_locale_reaches_formatters() {
        let mut locale = Locale::en_us();
        locale.am_string = "a.m.";
        let cache = FormatterCache::new(CacheOptions {
            locale: locale.clone(),
            ..CacheOptions::default()
        });

        let fmt = cache.get_or_create("h a", &TimeZoneId::UTC).unwrap();
        assert_eq!(fmt.locale(), &locale);
    }

    #[test]
    fn test_clear_retains_capacity() {
        let cache = FormatterCache::default();
        for pattern in ["d", "dd", "M", "MM", "y", "yy"] {
            cache.get_or_create(pattern, &TimeZoneId::UTC).unwrap();
        }
        let capacity = cache.catalog.read().capacity();

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.catalog.read().capacity(), capacity);
    }
}
