// Author: Dustin Pilgrim
// License: MIT

use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::ast::{Value, ValueKind};
use crate::SconfError;

use super::format_date;

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::date(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl TryFrom<Value> for String {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(SconfError::type_mismatch(ValueKind::String, other.kind())),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.get_integer()
    }
}

impl TryFrom<Value> for i32 {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = value.get_integer()?;
        i32::try_from(n).map_err(|_| SconfError::InvalidFormat {
            message: format!("Integer {} out of range for i32", n),
            hint: Some("Read it as i64 instead".into()),
            code: Some(402),
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.get_double()
    }
}

impl TryFrom<Value> for bool {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.get_boolean()
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.get_date()
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = SconfError>,
{
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(arr) => arr.into_iter().map(T::try_from).collect(),
            other => Err(SconfError::type_mismatch(ValueKind::Array, other.kind())),
        }
    }
}

/// Scalars map onto their native serde types; dates use the canonical text.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Double(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Date(dt) => serializer.serialize_str(&format_date(dt)),
            Value::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for v in values {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
        }
    }
}
