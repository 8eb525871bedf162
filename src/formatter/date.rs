//! Date and time field rendering

use chrono::{DateTime, Datelike, Offset, Timelike};
use chrono_tz::Tz;

use crate::ast::{DateField, HourCycle, OffsetStyle, Pattern, PatternPart, TextWidth};
use crate::locale::Locale;

/// Render a zoned instant using the given pattern.
pub fn format_pattern(local: &DateTime<Tz>, pattern: &Pattern, locale: &Locale) -> String {
    let mut result = String::with_capacity(pattern.as_str().len() + 8);

    for part in pattern.parts() {
        match part {
            PatternPart::Literal(s) => result.push_str(s),
            PatternPart::Field(field) => push_field(&mut result, *field, local, locale),
        }
    }

    result
}

/// Render a single field onto the output.
fn push_field(out: &mut String, field: DateField, local: &DateTime<Tz>, locale: &Locale) {
    match field {
        DateField::Era(width) => {
            let index = usize::from(local.year() > 0);
            match width {
                TextWidth::Short => out.push_str(locale.era_names_short[index]),
                TextWidth::Full => out.push_str(locale.era_names_full[index]),
                TextWidth::Narrow => push_first_char(out, locale.era_names_short[index]),
            }
        }

        DateField::Year(width) => push_year(out, year_of_era(local.year()), width),
        DateField::WeekYear(width) => push_year(out, local.iso_week().year(), width),

        DateField::Quarter(width) => push_padded(out, i64::from(quarter(local)), width),
        DateField::QuarterText(width) => {
            let q = quarter(local);
            match width {
                TextWidth::Full => out.push_str(locale.quarter_names_full[(q - 1) as usize]),
                _ => {
                    out.push('Q');
                    push_padded(out, i64::from(q), 1);
                }
            }
        }

        DateField::Month(width) => push_padded(out, i64::from(local.month()), width),
        DateField::MonthText(width) => {
            let index = local.month0() as usize;
            match width {
                TextWidth::Short => out.push_str(locale.month_names_short[index]),
                TextWidth::Full => out.push_str(locale.month_names_full[index]),
                TextWidth::Narrow => push_first_char(out, locale.month_names_full[index]),
            }
        }

        DateField::WeekOfYear(width) => push_padded(out, i64::from(local.iso_week().week()), width),
        DateField::Day(width) => push_padded(out, i64::from(local.day()), width),
        DateField::DayOfYear(width) => push_padded(out, i64::from(local.ordinal()), width),

        DateField::Weekday(width) => {
            // Locale tables start at Sunday
            let index = local.weekday().num_days_from_sunday() as usize;
            match width {
                TextWidth::Short => out.push_str(locale.day_names_short[index]),
                TextWidth::Full => out.push_str(locale.day_names_full[index]),
                TextWidth::Narrow => push_first_char(out, locale.day_names_full[index]),
            }
        }

        DateField::AmPm => {
            if local.hour() >= 12 {
                out.push_str(locale.pm_string);
            } else {
                out.push_str(locale.am_string);
            }
        }

        DateField::Hour { cycle, width } => {
            push_padded(out, i64::from(hour_in_cycle(local.hour(), cycle)), width)
        }
        DateField::Minute(width) => push_padded(out, i64::from(local.minute()), width),
        DateField::Second(width) => push_padded(out, i64::from(local.second()), width),
        DateField::Fraction(digits) => push_fraction(out, local.nanosecond(), digits),

        DateField::ZoneOffset(style) => {
            let seconds = local.offset().fix().local_minus_utc();
            push_offset(out, seconds, style, locale);
        }
        DateField::ZoneName(TextWidth::Full) => out.push_str(local.timezone().name()),
        DateField::ZoneName(_) => out.push_str(&local.offset().to_string()),
    }
}

/// Proleptic Gregorian year counted within its era: year 0 is 1 BC.
fn year_of_era(year: i32) -> i32 {
    if year > 0 {
        year
    } else {
        1 - year
    }
}

/// Calendar quarter (1-4) of the instant.
fn quarter(local: &DateTime<Tz>) -> u32 {
    local.month0() / 3 + 1
}

/// Push a number zero-padded to at least `width` digits.
fn push_padded(out: &mut String, value: i64, width: u8) {
    let width = usize::from(width);
    if value < 0 {
        out.push('-');
        out.push_str(&format!("{:0width$}", value.unsigned_abs(), width = width));
    } else {
        out.push_str(&format!("{:0width$}", value, width = width));
    }
}

/// Years are unpadded at width 1 and truncated to two digits at width 2.
fn push_year(out: &mut String, year: i32, width: u8) {
    if width == 2 {
        push_padded(out, i64::from(year.rem_euclid(100)), 2);
    } else {
        push_padded(out, i64::from(year), width);
    }
}

/// Push the leading `digits` digits of the fractional second.
fn push_fraction(out: &mut String, nanos: u32, digits: u8) {
    // Leap seconds are represented as nanos >= 1_000_000_000
    let nanos = nanos % 1_000_000_000;
    let full = format!("{:09}", nanos);
    let digits = usize::from(digits);

    if digits <= full.len() {
        out.push_str(&full[..digits]);
    } else {
        out.push_str(&full);
        out.extend(std::iter::repeat('0').take(digits - full.len()));
    }
}

fn push_first_char(out: &mut String, name: &str) {
    if let Some(ch) = name.chars().next() {
        out.push(ch);
    }
}

/// Convert 24-hour time to the requested hour cycle.
fn hour_in_cycle(hour: u32, cycle: HourCycle) -> u32 {
    match cycle {
        HourCycle::H23 => hour,
        HourCycle::H11 => hour % 12,
        HourCycle::H12 => match hour % 12 {
            0 => 12,
            h => h,
        },
        HourCycle::H24 => match hour {
            0 => 24,
            h => h,
        },
    }
}

/// Render a UTC offset given in seconds east of UTC.
fn push_offset(out: &mut String, seconds: i32, style: OffsetStyle, locale: &Locale) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let total_minutes = seconds.unsigned_abs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match style {
        OffsetStyle::Hours { utc_z: true }
        | OffsetStyle::Basic { utc_z: true }
        | OffsetStyle::Extended { utc_z: true }
            if total_minutes == 0 =>
        {
            out.push('Z');
        }
        OffsetStyle::Hours { .. } => {
            out.push(sign);
            out.push_str(&format!("{:02}", hours));
            if minutes != 0 {
                out.push_str(&format!("{:02}", minutes));
            }
        }
        OffsetStyle::Basic { .. } => {
            out.push(sign);
            out.push_str(&format!("{:02}{:02}", hours, minutes));
        }
        OffsetStyle::Extended { .. } => {
            out.push(sign);
            out.push_str(&format!("{:02}:{:02}", hours, minutes));
        }
        OffsetStyle::Gmt => {
            out.push_str(locale.gmt_string);
            if total_minutes != 0 {
                out.push(sign);
                out.push_str(&format!("{:02}:{:02}", hours, minutes));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_in_cycle() {
        assert_eq!(hour_in_cycle(0, HourCycle::H12), 12);
        assert_eq!(hour_in_cycle(1, HourCycle::H12), 1);
        assert_eq!(hour_in_cycle(12, HourCycle::H12), 12);
        assert_eq!(hour_in_cycle(13, HourCycle::H12), 1);
        assert_eq!(hour_in_cycle(23, HourCycle::H12), 11);

        assert_eq!(hour_in_cycle(0, HourCycle::H11), 0);
        assert_eq!(hour_in_cycle(12, HourCycle::H11), 0);
        assert_eq!(hour_in_cycle(0, HourCycle::H24), 24);
        assert_eq!(hour_in_cycle(23, HourCycle::H24), 23);
        assert_eq!(hour_in_cycle(7, HourCycle::H23), 7);
    }

    #[test]
    fn test_push_padded() {
        let mut out = String::new();
        push_padded(&mut out, 7, 3);
        out.push(' ');
        push_padded(&mut out, -7, 3);
        out.push(' ');
        push_padded(&mut out, 1234, 2);
        assert_eq!(out, "007 -007 1234");
    }

    #[test]
    fn test_push_year_two_digit() {
        let mut out = String::new();
        push_year(&mut out, 2005, 2);
        assert_eq!(out, "05");
    }

    #[test]
    fn test_year_of_era() {
        assert_eq!(year_of_era(2023), 2023);
        assert_eq!(year_of_era(1), 1);
        assert_eq!(year_of_era(0), 1);
        assert_eq!(year_of_era(-5), 6);
    }

    #[test]
    fn test_push_fraction() {
        let mut out = String::new();
        push_fraction(&mut out, 123_456_789, 3);
        assert_eq!(out, "123");

        let mut out = String::new();
        push_fraction(&mut out, 5_000_000, 1);
        assert_eq!(out, "0");

        let mut out = String::new();
        push_fraction(&mut out, 1, 11);
        assert_eq!(out, "00000000100");
    }

    #[test]
    fn test_push_offset_styles() {
        let locale = Locale::default();
        let render = |seconds, style| {
            let mut out = String::new();
            push_offset(&mut out, seconds, style, &locale);
            out
        };

        let pst = -8 * 3600;
        let ist = 5 * 3600 + 30 * 60;
        assert_eq!(render(pst, OffsetStyle::Basic { utc_z: false }), "-0800");
        assert_eq!(render(pst, OffsetStyle::Extended { utc_z: true }), "-08:00");
        assert_eq!(render(pst, OffsetStyle::Hours { utc_z: true }), "-08");
        assert_eq!(render(ist, OffsetStyle::Hours { utc_z: false }), "+0530");
        assert_eq!(render(pst, OffsetStyle::Gmt), "GMT-08:00");
        assert_eq!(render(0, OffsetStyle::Gmt), "GMT");
        assert_eq!(render(0, OffsetStyle::Basic { utc_z: false }), "+0000");
        assert_eq!(render(0, OffsetStyle::Extended { utc_z: true }), "Z");
    }
}
