// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Document, Value};
use crate::options::{QuoteStyle, WriteOptions};
use crate::parser::scanner::is_single_quoted_run;
use crate::SconfError;

/// Render a document back to sconf text.
///
/// Sections come out in insertion order, each preceded by its comments as
/// `; text` lines. Dates use their canonical `YYYY-MM-DD HH:MM:SS` text and
/// read back as plain strings.
///
/// # Errors
/// `Unsupported` for any name, key, comment or string containing a line
/// break, and for strings that cannot be quoted so they read back unchanged.
pub fn write_document(doc: &Document, options: &WriteOptions) -> Result<String, SconfError> {
    let mut out = String::new();

    for (i, (name, keys)) in doc.sections.iter().enumerate() {
        if i > 0 && options.blank_line_between_sections {
            out.push('\n');
        }

        if let Some(comments) = doc.comments.get(name) {
            for comment in comments {
                reject_line_breaks(comment, "comment")?;
                out.push_str(&format!("; {}\n", comment));
            }
        }

        out.push_str(&format!("[{}]\n", render_section_name(name, options.quote_style)?));

        for (key, value) in keys {
            out.push_str(&format!(
                "{} = {}\n",
                render_key(key, options.quote_style)?,
                render_value(value, options.quote_style)?
            ));
        }
    }

    Ok(out)
}

/// Render one value the way it appears to the right of `=`.
pub fn render_value(value: &Value, style: QuoteStyle) -> Result<String, SconfError> {
    match value {
        Value::String(s) => render_string(s, style),
        Value::Array(values) => {
            let parts = values
                .iter()
                .map(|v| render_value(v, style))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
        scalar => Ok(scalar.canonical_text().unwrap_or_default()),
    }
}

fn render_string(s: &str, style: QuoteStyle) -> Result<String, SconfError> {
    reject_line_breaks(s, "string value")?;
    match style {
        QuoteStyle::Never => Ok(s.to_string()),
        QuoteStyle::Minimal if !needs_quotes(s) => Ok(s.to_string()),
        QuoteStyle::Minimal | QuoteStyle::Always => quote_checked(s),
    }
}

fn render_key(key: &str, style: QuoteStyle) -> Result<String, SconfError> {
    reject_line_breaks(key, "key")?;
    if style == QuoteStyle::Never || !needs_quotes(key) {
        return Ok(key.to_string());
    }
    quote_checked(key)
}

/// Header interiors lose exactly one layer of quotes on read, so wrapping
/// never needs checking here.
fn render_section_name(name: &str, style: QuoteStyle) -> Result<String, SconfError> {
    reject_line_breaks(name, "section name")?;
    if style == QuoteStyle::Never || !needs_quotes(name) {
        return Ok(name.to_string());
    }
    Ok(format!("\"{}\"", name))
}

fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.trim() != text
        || text.contains(|c| matches!(c, ';' | ',' | '[' | ']' | '=' | '"'))
}

fn quote_checked(text: &str) -> Result<String, SconfError> {
    let quoted = format!("\"{}\"", text);
    if is_single_quoted_run(&quoted) {
        Ok(quoted)
    } else {
        Err(SconfError::Unsupported {
            message: format!("Cannot quote '{}' so that it reads back unchanged", text),
            hint: Some("Avoid a '\"' directly followed by '=', ',', ']' or ';'".into()),
            code: Some(502),
        })
    }
}

fn reject_line_breaks(text: &str, what: &str) -> Result<(), SconfError> {
    if text.contains(['\n', '\r']) {
        return Err(SconfError::Unsupported {
            message: format!("A {} cannot span multiple lines: {:?}", what, text),
            hint: None,
            code: Some(503),
        });
    }
    Ok(())
}
