use tzfmt::{CacheError, FormatError, ParseError, ZoneError};

#[test]
fn test_parse_error_display() {
    let err = ParseError::UnknownField {
        position: 5,
        found: 'J',
    };
    let msg = format!("{}", err);
    assert!(msg.contains("position 5"));
    assert!(msg.contains("'J'"));
}

#[test]
fn test_unterminated_quote_display() {
    let err = ParseError::UnterminatedQuote { position: 3 };
    assert!(err.to_string().contains("position 3"));
}

#[test]
fn test_zone_error_display() {
    let err = ZoneError::Unknown {
        identifier: "Nowhere/Special".to_string(),
    };
    assert!(err.to_string().contains("Nowhere/Special"));
}

#[test]
fn test_invalid_entry_display() {
    let err = CacheError::InvalidEntry {
        missing: "time zone",
    };
    assert_eq!(err.to_string(), "invalid cache entry: time zone is not set");
}

#[test]
fn test_format_error_display() {
    assert_eq!(FormatError::MissingPattern.to_string(), "formatter has no pattern");
}
