// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;

/// A single configuration value. Exactly one variant is live at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Date(NaiveDateTime), // second precision, no timezone
    Array(Vec<Value>),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Double,
    Boolean,
    Date,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// Keys of one section, in insertion order.
pub type Section = IndexMap<String, Value>;

/// The in-memory store behind a config: sections and their attached comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub sections: IndexMap<String, Section>,
    pub comments: IndexMap<String, Vec<String>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.comments.is_empty()
    }
}
