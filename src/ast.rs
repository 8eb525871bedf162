//! AST types for parsed date patterns.

use crate::error::ParseError;

/// Width of a textual field such as a month or weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWidth {
    /// `MMM`, `EEE` - Abbreviated name (Jan, Sun)
    Short,
    /// `MMMM`, `EEEE` - Full name (January, Sunday)
    Full,
    /// `MMMMM`, `EEEEE` - Single letter (J, S)
    Narrow,
}

/// Which hour numbering a field uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    /// `H` - 0-23
    H23,
    /// `h` - 1-12
    H12,
    /// `K` - 0-11
    H11,
    /// `k` - 1-24
    H24,
}

/// How a UTC offset is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetStyle {
    /// `X`, `x` - Hours only, minutes appended when non-zero (`-08`, `+0530`)
    Hours { utc_z: bool },
    /// `Z`, `XX`, `xx` - Hours and minutes without separator (`-0800`)
    Basic { utc_z: bool },
    /// `ZZZZZ`, `XXX`, `xxx` - Hours and minutes with separator (`-08:00`)
    Extended { utc_z: bool },
    /// `ZZZZ` - Localized GMT format (`GMT-08:00`, or `GMT` at zero)
    Gmt,
}

/// A calendar or clock field in a pattern.
///
/// Numeric variants carry the pattern width, which is the minimum number of
/// digits rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// `G` - Era (AD, BC)
    Era(TextWidth),
    /// `y` - Calendar year; width 2 renders the last two digits
    Year(u8),
    /// `Y` - ISO week-numbering year; width 2 renders the last two digits
    WeekYear(u8),
    /// `Q` - Quarter as a number when width <= 2
    Quarter(u8),
    /// `QQQ`, `QQQQ` - Quarter as text (Q1, 1st quarter)
    QuarterText(TextWidth),
    /// `M`, `MM` - Month number
    Month(u8),
    /// `MMM`, `MMMM`, `MMMMM` - Month name
    MonthText(TextWidth),
    /// `w` - ISO week of year
    WeekOfYear(u8),
    /// `d` - Day of month
    Day(u8),
    /// `D` - Day of year
    DayOfYear(u8),
    /// `E` - Weekday name
    Weekday(TextWidth),
    /// `a` - AM/PM marker
    AmPm,
    /// `H`, `h`, `K`, `k` - Hour in the given cycle
    Hour { cycle: HourCycle, width: u8 },
    /// `m` - Minute
    Minute(u8),
    /// `s` - Second
    Second(u8),
    /// `S` - Fractional second, truncated to the given number of digits
    Fraction(u8),
    /// `Z`, `X`, `x` - UTC offset
    ZoneOffset(OffsetStyle),
    /// `z` - Zone abbreviation (Short) or identifier (Full)
    ZoneName(TextWidth),
}

impl DateField {
    /// Returns true if rendering this field depends on the time zone's offset
    /// rather than only the local wall-clock time.
    pub fn is_zone_field(&self) -> bool {
        matches!(self, DateField::ZoneOffset(_) | DateField::ZoneName(_))
    }

    /// Returns true if this field renders a clock component.
    pub fn is_time_field(&self) -> bool {
        matches!(
            self,
            DateField::AmPm
                | DateField::Hour { .. }
                | DateField::Minute(_)
                | DateField::Second(_)
                | DateField::Fraction(_)
        )
    }
}

/// A single part of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// Literal text to display as-is (from punctuation or quoted text)
    Literal(String),
    /// Date/time field
    Field(DateField),
}

/// A parsed date pattern.
///
/// This is the compiled form of a pattern string. It can be reused to render
/// any number of instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    parts: Vec<PatternPart>,
}

impl Pattern {
    /// Create a Pattern from its source text and parsed parts.
    pub(crate) fn from_parts(source: &str, parts: Vec<PatternPart>) -> Self {
        Pattern {
            source: source.to_string(),
            parts,
        }
    }

    /// Parse a date pattern string.
    pub fn parse(pattern: &str) -> Result<Pattern, ParseError> {
        crate::parser::parse(pattern)
    }

    /// The pattern text this was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Get the parts of this pattern.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    fn fields(&self) -> impl Iterator<Item = &DateField> {
        self.parts.iter().filter_map(|p| match p {
            PatternPart::Field(field) => Some(field),
            PatternPart::Literal(_) => None,
        })
    }

    /// Returns true if this pattern renders any clock component.
    pub fn has_time_fields(&self) -> bool {
        self.fields().any(DateField::is_time_field)
    }

    /// Returns true if this pattern renders an offset or zone name.
    pub fn has_zone_fields(&self) -> bool {
        self.fields().any(DateField::is_zone_field)
    }
}
