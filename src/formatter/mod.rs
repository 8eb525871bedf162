//! Date formatters: a parsed pattern bound to a time zone and locale.

mod date;

pub use date::format_pattern;

use chrono::{DateTime, TimeZone};

use crate::ast::Pattern;
use crate::error::{FormatError, ParseError};
use crate::locale::Locale;
use crate::zone::TimeZoneId;

/// A reusable formatter for one pattern in one time zone.
///
/// Formatters are immutable once built and are shared between threads as
/// `Arc<DateFormatter>`. Construction parses the pattern, which is the
/// expensive step [`FormatterCache`](crate::FormatterCache) avoids repeating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    pattern: Option<Pattern>,
    time_zone: Option<TimeZoneId>,
    locale: Locale,
}

impl DateFormatter {
    /// Build a formatter for `pattern` in `time_zone` with the default locale.
    pub fn new(pattern: &str, time_zone: TimeZoneId) -> Result<Self, ParseError> {
        Self::with_locale(pattern, time_zone, Locale::default())
    }

    /// Build a formatter for `pattern` in `time_zone` with an explicit locale.
    pub fn with_locale(
        pattern: &str,
        time_zone: TimeZoneId,
        locale: Locale,
    ) -> Result<Self, ParseError> {
        Ok(DateFormatter {
            pattern: Some(Pattern::parse(pattern)?),
            time_zone: Some(time_zone),
            locale,
        })
    }

    /// Start building a formatter field by field.
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::default()
    }

    /// The parsed pattern, if one was configured.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// The time zone, if one was configured.
    pub fn time_zone(&self) -> Option<TimeZoneId> {
        self.time_zone
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Render an instant in this formatter's zone.
    ///
    /// This is an infallible method. An unconfigured formatter renders the
    /// instant as RFC 3339 instead; use `try_format()` to detect that case.
    pub fn format<Z: TimeZone>(&self, instant: &DateTime<Z>) -> String
    where
        Z::Offset: std::fmt::Display,
    {
        match self.try_format(instant) {
            Ok(result) => result,
            Err(_) => instant.to_rfc3339(),
        }
    }

    /// Try to render an instant in this formatter's zone.
    ///
    /// Returns an error if the pattern or time zone was never set.
    pub fn try_format<Z: TimeZone>(&self, instant: &DateTime<Z>) -> Result<String, FormatError> {
        let pattern = self.pattern.as_ref().ok_or(FormatError::MissingPattern)?;
        let zone = self.time_zone.ok_or(FormatError::MissingTimeZone)?;

        let local = instant.with_timezone(&zone.tz());
        Ok(format_pattern(&local, pattern, &self.locale))
    }
}

/// Builder for [`DateFormatter`] values whose parts may be left unset.
#[derive(Debug, Clone, Default)]
pub struct FormatterBuilder {
    pattern: Option<String>,
    time_zone: Option<TimeZoneId>,
    locale: Option<Locale>,
}

impl FormatterBuilder {
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn time_zone(mut self, time_zone: TimeZoneId) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Build the formatter, parsing the pattern if one was given.
    pub fn build(self) -> Result<DateFormatter, ParseError> {
        let pattern = match self.pattern {
            Some(source) => Some(Pattern::parse(&source)?),
            None => None,
        };

        Ok(DateFormatter {
            pattern,
            time_zone: self.time_zone,
            locale: self.locale.unwrap_or_default(),
        })
    }
}
