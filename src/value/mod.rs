// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Value, ValueKind};
use crate::SconfError;

mod conversion;
mod date;

pub use date::{format_date, parse_date, DATE_FORMAT};

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid number pattern"));
static INTEGRAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").expect("valid integer pattern"));

impl Default for Value {
    fn default() -> Self {
        Value::String(String::new())
    }
}

impl Value {
    pub fn string<S: Into<String>>(s: S) -> Self {
        Value::String(s.into())
    }

    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    pub fn double(n: f64) -> Self {
        Value::Double(n)
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Sub-second precision is dropped.
    pub fn date(dt: NaiveDateTime) -> Self {
        Value::Date(date::truncate(dt))
    }

    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(values)
    }

    /// Build a date value from `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` text.
    pub fn date_from_str(text: &str) -> Result<Self, SconfError> {
        Ok(Value::Date(parse_date(text)?))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Date(_) => ValueKind::Date,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn get_integer(&self) -> Result<i64, SconfError> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(SconfError::type_mismatch(ValueKind::Integer, other.kind())),
        }
    }

    pub fn get_double(&self) -> Result<f64, SconfError> {
        match self {
            Value::Double(n) => Ok(*n),
            other => Err(SconfError::type_mismatch(ValueKind::Double, other.kind())),
        }
    }

    pub fn get_boolean(&self) -> Result<bool, SconfError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(SconfError::type_mismatch(ValueKind::Boolean, other.kind())),
        }
    }

    pub fn get_string(&self) -> Result<&str, SconfError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(SconfError::type_mismatch(ValueKind::String, other.kind())),
        }
    }

    pub fn get_date(&self) -> Result<NaiveDateTime, SconfError> {
        match self {
            Value::Date(dt) => Ok(date::truncate(*dt)),
            other => Err(SconfError::type_mismatch(ValueKind::Date, other.kind())),
        }
    }

    pub fn get_array(&self) -> Result<&[Value], SconfError> {
        match self {
            Value::Array(values) => Ok(values),
            other => Err(SconfError::type_mismatch(ValueKind::Array, other.kind())),
        }
    }

    pub fn set_integer(&mut self, n: i64) {
        *self = Value::Integer(n);
    }

    pub fn set_double(&mut self, n: f64) {
        *self = Value::Double(n);
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::Boolean(b);
    }

    pub fn set_string<S: Into<String>>(&mut self, s: S) {
        *self = Value::String(s.into());
    }

    pub fn set_date(&mut self, dt: NaiveDateTime) {
        *self = Value::date(dt);
    }

    pub fn set_array(&mut self, values: Vec<Value>) {
        *self = Value::Array(values);
    }

    /// Canonical text of a scalar. `None` for arrays.
    pub fn canonical_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(n) => Some(n.to_string()),
            Value::Double(n) => Some(format_double(*n)),
            Value::Boolean(b) => Some(if *b { "true" } else { "false" }.to_string()),
            Value::Date(dt) => Some(format_date(dt)),
            Value::Array(_) => None,
        }
    }

    /// Whether `text` is a plain decimal number such as `-12` or `3.5`.
    ///
    /// Text predicates only: the parser never uses them to type values.
    pub fn is_number(text: &str) -> bool {
        NUMBER_RE.is_match(text)
    }

    /// Whether `text` is a plain decimal integer such as `42` or `-7`.
    pub fn is_integral(text: &str) -> bool {
        INTEGRAL_RE.is_match(text)
    }
}

/// Finite doubles always carry a decimal point so they never read as integers.
fn format_double(n: f64) -> String {
    let text = n.to_string();
    if n.is_finite() && !text.contains('.') && !text.contains('e') {
        format!("{}.0", text)
    } else {
        text
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Array(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
            scalar => f.write_str(&scalar.canonical_text().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests;
