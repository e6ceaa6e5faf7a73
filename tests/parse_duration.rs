// Integration tests for the duration scanner.
// Runs as part of `cargo test` and uses the public crate API.

use timeduration::scanner::{total_seconds, Accumulator, Scanner};
use timeduration::{parse_seconds, parse_seconds_with, ParseDurationError, ParseMode, ParseOptions};

#[test]
fn integration_parse_seconds_various() {
    assert_eq!(parse_seconds("0").unwrap(), 0);
    assert_eq!(parse_seconds("2h 30m 15s").unwrap(), 9015);
    assert_eq!(parse_seconds("1d2h3m4s").unwrap(), 93_784);
    assert_eq!(parse_seconds("1mo 2d").unwrap(), 2_592_000);
    assert_eq!(parse_seconds("1y").unwrap(), 31_536_000);
    assert_eq!(parse_seconds("2hours 5minutes 1seconds").unwrap(), 7501);
    assert_eq!(parse_seconds("1days, 3months").unwrap(), 86_400 + 3 * 2_419_200);
}

#[test]
fn integration_parse_seconds_bare_number_is_minutes() {
    assert_eq!(parse_seconds("90").unwrap(), 5400);
    assert_eq!(parse_seconds("1h 5").unwrap(), 3600 + 300);
}

#[test]
fn integration_parse_seconds_skips_noise() {
    assert_eq!(parse_seconds("").unwrap(), 0);
    assert_eq!(parse_seconds("hello").unwrap(), 0);
    assert_eq!(parse_seconds("abc12s!!3h").unwrap(), 12 + 3 * 3600);
    assert_eq!(parse_seconds("5h ✓ 3m").unwrap(), 5 * 3600 + 180);
}

#[test]
fn integration_parse_seconds_ignores_unknown_units() {
    assert_eq!(parse_seconds("5xyz").unwrap(), 0);
    assert_eq!(parse_seconds("5min 10s").unwrap(), 10);
    assert_eq!(parse_seconds("1M").unwrap(), 0, "units are case-sensitive");
}

#[test]
fn integration_scanner_accumulates_by_multiplier() {
    let accumulator = Scanner::new("5m 10m 2minutes 3s", ParseOptions::default())
        .scan_tokens()
        .unwrap();

    let expected = Accumulator::from([(1, 3), (60, 17)]);
    assert_eq!(accumulator, expected);
    assert_eq!(total_seconds(&accumulator).unwrap(), 17 * 60 + 3);
}

#[test]
fn integration_strict_mode_rejects_unknown_input() {
    let strict = ParseOptions::strict();

    assert_eq!(parse_seconds_with("90", &strict).unwrap(), 5400);
    assert_eq!(parse_seconds_with("1d 2h", &strict).unwrap(), 93_600);
    assert_eq!(
        parse_seconds_with("5xyz", &strict),
        Err(ParseDurationError::UnsupportedUnit("xyz".to_string()))
    );
    assert_eq!(parse_seconds_with("hello", &strict), Err(ParseDurationError::Empty));
    assert_eq!(parse_seconds_with("", &strict), Err(ParseDurationError::Empty));
    assert_eq!(
        parse_seconds_with("1.5h", &strict),
        Err(ParseDurationError::InvalidNumber("1.5".to_string()))
    );
    assert_eq!(
        parse_seconds_with("2h 1,25m", &strict),
        Err(ParseDurationError::InvalidNumber("1,25".to_string()))
    );
    assert_eq!(
        parse_seconds_with("-5m", &strict),
        Err(ParseDurationError::InvalidNumber("-5".to_string()))
    );
    assert_eq!(
        parse_seconds_with("+5m", &strict),
        Err(ParseDurationError::InvalidNumber("+5".to_string()))
    );
    // Separators between tokens are still fine.
    assert_eq!(parse_seconds_with("1h,2m. 3s", &strict).unwrap(), 3600 + 120 + 3);
}

#[test]
fn integration_permissive_mode_splits_malformed_numbers() {
    // "1.5h" is a bare 1 (one minute) followed by 5h; the sign of "-5m" is noise.
    assert_eq!(parse_seconds("1.5h").unwrap(), 60 + 5 * 3600);
    assert_eq!(parse_seconds("-5m").unwrap(), 300);
}

#[test]
fn integration_parse_seconds_overflow() {
    for options in [ParseOptions::permissive(), ParseOptions::strict()] {
        assert_eq!(
            parse_seconds_with("99999999999999999999s", &options),
            Err(ParseDurationError::InvalidNumber("99999999999999999999".to_string()))
        );
    }
    assert_eq!(
        parse_seconds("18446744073709551615y"),
        Err(ParseDurationError::Overflow)
    );
    assert_eq!(
        parse_seconds("18446744073709551615s 1s"),
        Err(ParseDurationError::Overflow)
    );
    assert_eq!(parse_seconds("18446744073709551615s").unwrap(), u64::MAX);
}

#[test]
fn integration_parse_options_from_json() {
    let options: ParseOptions = serde_json::from_str(r#"{"mode": "strict"}"#).unwrap();
    assert_eq!(options, ParseOptions::strict());

    let options: ParseOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.mode, ParseMode::Permissive);

    assert!(serde_json::from_str::<ParseOptions>(r#"{"mode": "lenient"}"#).is_err());

    let json = serde_json::to_string(&ParseOptions::strict()).unwrap();
    assert_eq!(json, r#"{"mode":"strict"}"#);
    assert_eq!(serde_json::from_str::<ParseOptions>(&json).unwrap(), ParseOptions::strict());
}

#[test]
fn integration_error_messages() {
    assert_eq!(
        ParseDurationError::UnsupportedUnit("xyz".to_string()).to_string(),
        "Unsupported duration unit: xyz"
    );
    assert_eq!(ParseDurationError::Overflow.to_string(), "Duration is too large");
}

#[test]
fn integration_unit_must_follow_digits() {
    // A space ends the token, so "1 days" is a bare number followed by noise.
    assert_eq!(parse_seconds("1 days").unwrap(), 60);
    assert_eq!(parse_seconds("1days").unwrap(), 86_400);
}
