use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use tzfmt::{DateFormatter, TimeZoneId, ZoneError};

#[test]
fn test_identifier_round_trip() {
    for id in ["UTC", "Europe/Berlin", "America/Argentina/Buenos_Aires"] {
        let zone: TimeZoneId = id.parse().unwrap();
        assert_eq!(zone.identifier(), id);
        assert_eq!(zone.to_string(), id);
    }
}

#[test]
fn test_from_chrono_tz() {
    let zone = TimeZoneId::from(Tz::Australia__Sydney);
    assert_eq!(zone.identifier(), "Australia/Sydney");
}

#[test]
fn test_unknown_identifier() {
    assert!(matches!(
        "Not/AZone".parse::<TimeZoneId>(),
        Err(ZoneError::Unknown { identifier }) if identifier == "Not/AZone"
    ));
}

#[test]
fn test_southern_hemisphere_offset() {
    // January is daylight time in Sydney (UTC+11).
    let instant = Utc.with_ymd_and_hms(2023, 1, 15, 13, 4, 5).unwrap();
    let sydney = TimeZoneId::from(Tz::Australia__Sydney);
    let fmt = DateFormatter::new("yyyy-MM-dd HH:mm xxx", sydney).unwrap();
    assert_eq!(fmt.format(&instant), "2023-01-16 00:04 +11:00");
}
