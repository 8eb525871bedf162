//! Catalog keys.

use std::fmt;

use crate::zone::TimeZoneId;

/// Identifies one formatting specification: a pattern in a time zone.
///
/// Keys compare field by field, so no pattern text can make two different
/// specifications collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pattern: Box<str>,
    zone: TimeZoneId,
}

impl CacheKey {
    pub fn new(pattern: &str, zone: TimeZoneId) -> Self {
        CacheKey {
            pattern: pattern.into(),
            zone,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn zone(&self) -> TimeZoneId {
        self.zone
    }
}

/// Renders as `pattern:identifier`.
impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pattern, self.zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let key = CacheKey::new("HH:mm", TimeZoneId::UTC);
        assert_eq!(key.to_string(), "HH:mm:UTC");
    }

    #[test]
    fn test_same_inputs_equal() {
        let zone: TimeZoneId = "Europe/Paris".parse().unwrap();
        assert_eq!(
            CacheKey::new("yyyy", zone),
            CacheKey::new("yyyy", "Europe/Paris".parse().unwrap())
        );
    }

    #[test]
    fn test_no_delimiter_ambiguity() {
        let a = CacheKey::new("HH:mm", TimeZoneId::UTC);
        let b = CacheKey::new("HH", TimeZoneId::UTC);
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());

        let etc: TimeZoneId = "Etc/UTC".parse().unwrap();
        assert_ne!(CacheKey::new("d", TimeZoneId::UTC), CacheKey::new("d", etc));
    }

    #[test]
    fn test_colon_pattern_keeps_fields() {
        let key = CacheKey::new("mm:ss:", TimeZoneId::UTC);
        assert_eq!(key.pattern(), "mm:ss:");
        assert_eq!(key.zone(), TimeZoneId::UTC);
    }
}
