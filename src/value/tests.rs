// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use chrono::{Datelike, NaiveDate, Timelike};

fn sample_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_milli_opt(14, 5, 33, 750)
        .unwrap()
}

// ===== Accessor contract =====

#[test]
fn test_integer_roundtrip_through_setter() {
    let mut value = Value::string("placeholder");
    value.set_integer(-42);
    assert_eq!(value.get_integer().unwrap(), -42);
    assert_eq!(value.kind(), ValueKind::Integer);
}

#[test]
fn test_integer_accessor_on_string_is_type_mismatch() {
    let value = Value::string("42");
    match value.get_integer() {
        Err(SconfError::TypeMismatch { expected, found, .. }) => {
            assert_eq!(expected, ValueKind::Integer);
            assert_eq!(found, ValueKind::String);
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_no_implicit_coercion_between_scalars() {
    assert!(Value::integer(1).get_string().is_err());
    assert!(Value::integer(1).get_double().is_err());
    assert!(Value::double(1.0).get_integer().is_err());
    assert!(Value::boolean(true).get_string().is_err());
    assert!(Value::string("true").get_boolean().is_err());
    assert!(Value::string("2024-01-01").get_date().is_err());
    assert!(Value::string("[a]").get_array().is_err());
    assert!(Value::array(vec![]).get_string().is_err());
}

#[test]
fn test_typed_accessors_return_payloads() {
    assert_eq!(Value::double(2.5).get_double().unwrap(), 2.5);
    assert!(Value::boolean(true).get_boolean().unwrap());
    assert_eq!(Value::string("hi").get_string().unwrap(), "hi");

    let arr = Value::array(vec![Value::string("a"), Value::integer(2)]);
    let items = arr.get_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].get_integer().unwrap(), 2);
}

#[test]
fn test_setter_replaces_array_payload() {
    let mut value = Value::array(vec![Value::string("a"), Value::string("b")]);
    assert!(value.is_array());

    value.set_string("flat");
    assert!(!value.is_array());
    assert_eq!(value, Value::String("flat".into()));

    value.set_array(vec![Value::boolean(false)]);
    assert!(value.is_array());
    assert!(value.get_string().is_err());
    assert_eq!(value.get_array().unwrap(), &[Value::Boolean(false)]);
}

#[test]
fn test_mixed_and_nested_arrays() {
    let value = Value::array(vec![
        Value::string("x"),
        Value::double(1.5),
        Value::array(vec![Value::boolean(true)]),
    ]);
    let items = value.get_array().unwrap();
    assert!(items[2].is_array());
    assert_eq!(items[2].get_array().unwrap()[0].get_boolean().unwrap(), true);
}

// ===== Dates =====

#[test]
fn test_date_roundtrip_drops_subseconds() {
    let value = Value::date(sample_datetime());
    let text = value.canonical_text().unwrap();
    assert_eq!(text, "2024-03-09 14:05:33");

    let parsed = parse_date(&text).unwrap();
    assert_eq!(
        (parsed.year(), parsed.month(), parsed.day()),
        (2024, 3, 9)
    );
    assert_eq!(
        (parsed.hour(), parsed.minute(), parsed.second()),
        (14, 5, 33)
    );
    assert_eq!(parsed, value.get_date().unwrap());
}

#[test]
fn test_date_only_defaults_to_midnight() {
    let dt = parse_date("1999-12-31").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
}

#[test]
fn test_invalid_dates_are_invalid_format() {
    for text in ["", "yesterday", "2024/01/01", "2024-1-1", "2024-01-01T10:00:00", "2024-13-01", "2024-01-01 25:00:00"] {
        match parse_date(text) {
            Err(SconfError::InvalidFormat { .. }) => {}
            other => panic!("Expected InvalidFormat for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_date_from_str() {
    let value = Value::date_from_str("2020-02-29 23:59:59").unwrap();
    assert_eq!(value.kind(), ValueKind::Date);
    assert_eq!(value.to_string(), "2020-02-29 23:59:59");
}

// ===== Canonical text =====

#[test]
fn test_canonical_text() {
    assert_eq!(Value::integer(7).canonical_text().unwrap(), "7");
    assert_eq!(Value::double(3.0).canonical_text().unwrap(), "3.0");
    assert_eq!(Value::double(0.25).canonical_text().unwrap(), "0.25");
    assert_eq!(Value::boolean(false).canonical_text().unwrap(), "false");
    assert!(Value::array(vec![]).canonical_text().is_none());
}

#[test]
fn test_display_nested_array() {
    let value = Value::array(vec![
        Value::string("a"),
        Value::array(vec![Value::string("b"), Value::integer(1)]),
    ]);
    assert_eq!(value.to_string(), "[a, [b, 1]]");
}

#[test]
fn test_number_predicates() {
    assert!(Value::is_number("42"));
    assert!(Value::is_number("-3.25"));
    assert!(!Value::is_number("3."));
    assert!(!Value::is_number("abc"));
    assert!(Value::is_integral("-7"));
    assert!(!Value::is_integral("7.0"));
}

// ===== Conversions =====

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from("s"), Value::String("s".into()));
    assert_eq!(Value::from(5i32), Value::Integer(5));
    assert_eq!(Value::from(5i64), Value::Integer(5));
    assert_eq!(Value::from(1.5), Value::Double(1.5));
    assert_eq!(Value::from(true), Value::Boolean(true));
    let d = NaiveDate::from_ymd_opt(2001, 1, 2).unwrap();
    assert_eq!(Value::from(d).to_string(), "2001-01-02 00:00:00");
}

#[test]
fn test_try_from_strict() {
    let s: Result<String, SconfError> = Value::string("x").try_into();
    assert_eq!(s.unwrap(), "x");

    let n: Result<i64, SconfError> = Value::string("12").try_into();
    assert!(n.is_err());

    let v: Result<Vec<String>, SconfError> =
        Value::array(vec![Value::string("a"), Value::string("b")]).try_into();
    assert_eq!(v.unwrap(), vec!["a", "b"]);

    let mixed: Result<Vec<String>, SconfError> =
        Value::array(vec![Value::string("a"), Value::integer(1)]).try_into();
    assert!(mixed.is_err());
}

#[test]
fn test_i32_out_of_range() {
    let r: Result<i32, SconfError> = Value::integer(i64::MAX).try_into();
    assert!(r.is_err());
}

#[test]
fn test_serialize_to_json() {
    let value = Value::array(vec![
        Value::string("a"),
        Value::integer(1),
        Value::boolean(true),
        Value::date(sample_datetime()),
    ]);
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json, serde_json::json!(["a", 1, true, "2024-03-09 14:05:33"]));
}
