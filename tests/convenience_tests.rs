use chrono::{TimeZone, Utc};
use tzfmt::{format, format_local, Formatted, ParseError, TimeZoneId};

#[test]
fn test_format_convenience() {
    let instant = Utc.with_ymd_and_hms(2023, 1, 15, 13, 4, 5).unwrap();
    let tokyo: TimeZoneId = "Asia/Tokyo".parse().unwrap();
    let result = format(&instant, "yyyy-MM-dd HH:mm", &tokyo).unwrap();
    assert_eq!(result, "2023-01-15 22:04");
}

#[test]
fn test_format_local_matches_local_zone() {
    let instant = Utc.with_ymd_and_hms(2023, 1, 15, 13, 4, 5).unwrap();
    let expected = format(&instant, "yyyy-MM-dd HH:mm ZZZZZ", &TimeZoneId::local()).unwrap();
    assert_eq!(format_local(&instant, "yyyy-MM-dd HH:mm ZZZZZ").unwrap(), expected);
}

#[test]
fn test_formatted_extension() {
    let instant = Utc.with_ymd_and_hms(2023, 1, 15, 13, 4, 5).unwrap();
    assert_eq!(
        instant.formatted_in("EEE, d MMM yyyy", &TimeZoneId::UTC).unwrap(),
        "Sun, 15 Jan 2023"
    );
    assert_eq!(
        instant.formatted("yyyy").unwrap(),
        format_local(&instant, "yyyy").unwrap()
    );
}

#[test]
fn test_format_invalid_pattern() {
    let instant = Utc.with_ymd_and_hms(2023, 1, 15, 13, 4, 5).unwrap();
    // Empty pattern should error
    let result = format(&instant, "", &TimeZoneId::UTC);
    assert_eq!(result, Err(ParseError::EmptyPattern));
}
