// Author: Dustin Pilgrim
// License: MIT

use tracing::trace;

use super::scanner::find_structural;
use super::{value, Parser};
use crate::utils::normalize_name;
use crate::SconfError;

enum Line<'t> {
    Blank,
    Comment(&'t str),
    Header(&'t str),
    Pair { key: &'t str, value: &'t str },
}

fn classify(trimmed: &str) -> Option<Line<'_>> {
    if trimmed.is_empty() {
        return Some(Line::Blank);
    }

    if let Some(rest) = trimmed.strip_prefix(';') {
        return Some(Line::Comment(rest.trim()));
    }

    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        return Some(Line::Header(&trimmed[1..trimmed.len() - 1]));
    }

    find_structural(trimmed, '=').map(|pos| Line::Pair {
        key: &trimmed[..pos],
        value: &trimmed[pos + 1..],
    })
}

pub(super) fn handle_line(parser: &mut Parser, raw: &str) -> Result<(), SconfError> {
    let trimmed = raw.trim();

    let Some(line) = classify(trimmed) else {
        return Err(SconfError::SyntaxError {
            message: format!("Invalid key-value pair: {}", trimmed),
            line: parser.line,
            hint: Some("Expected '[section]', 'key = value' or '; comment'".into()),
            code: Some(101),
        });
    };

    match line {
        Line::Blank => {}
        Line::Comment(text) => parser.comment_buffer.push(text.to_string()),
        Line::Header(interior) => enter_section(parser, interior),
        Line::Pair { key, value } => assign(parser, key, value)?,
    }

    Ok(())
}

fn enter_section(parser: &mut Parser, interior: &str) {
    let name = normalize_name(interior);
    trace!(section = %name, line = parser.line, "section header");

    parser.document.sections.entry(name.clone()).or_default();
    // comments from separate blocks before the same section accumulate
    parser
        .document
        .comments
        .entry(name.clone())
        .or_default()
        .append(&mut parser.comment_buffer);

    parser.current_section = name;
}

fn assign(parser: &mut Parser, key: &str, raw_value: &str) -> Result<(), SconfError> {
    let key = normalize_name(key);
    let value = value::parse_value(raw_value, parser.line)?;
    trace!(section = %parser.current_section, key = %key, line = parser.line, "assignment");

    parser
        .document
        .sections
        .entry(parser.current_section.clone())
        .or_default()
        .insert(key, value);

    // comments directly above a pair are dropped, they never attach to a key
    parser.comment_buffer.clear();
    Ok(())
}
