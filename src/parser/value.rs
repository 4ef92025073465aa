// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Value;
use crate::utils::trim_quotes;
use crate::SconfError;

use super::scanner::{find_structural, is_enclosed, split_top_level};

/// Decode the raw text to the right of `=` into a value.
///
/// Only strings and arrays come out of here: numeric or boolean looking
/// text stays a string.
pub(super) fn parse_value(raw: &str, line: usize) -> Result<Value, SconfError> {
    let mut text = raw.trim();

    if let Some(pos) = find_structural(text, ';') {
        text = text[..pos].trim();
    }

    parse_element(text, line)
}

fn parse_element(text: &str, line: usize) -> Result<Value, SconfError> {
    if is_quoted(text) {
        return Ok(Value::String(trim_quotes(text).to_string()));
    }

    if text.starts_with('[') {
        return parse_array(text, line);
    }

    Ok(Value::String(text.to_string()))
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// Parse `[a, "b", [c, d]]`, recursing into nested brackets.
pub(super) fn parse_array(text: &str, line: usize) -> Result<Value, SconfError> {
    if !is_enclosed(text) {
        return Err(SconfError::SyntaxError {
            message: format!("Malformed array: {}", text),
            line,
            hint: Some("Check that every '[' has a matching ']'".into()),
            code: Some(102),
        });
    }

    let inner = &text[1..text.len() - 1];
    if inner.trim().is_empty() {
        return Ok(Value::Array(Vec::new()));
    }

    let mut parts = split_top_level(inner);
    // `[a, b,]` carries no trailing element
    if parts.len() > 1 && parts.last().is_some_and(|p| p.trim().is_empty()) {
        parts.pop();
    }

    let mut values = Vec::with_capacity(parts.len());
    for part in parts {
        values.push(parse_element(part.trim(), line)?);
    }

    Ok(Value::Array(values))
}
