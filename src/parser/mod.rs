// Author: Dustin Pilgrim
// License: MIT

use tracing::debug;

use crate::ast::Document;
use crate::SconfError;

mod line;
mod value;
pub(crate) mod scanner;

/// Line-oriented parser that fills a [`Document`] as it goes.
///
/// Before the first section header, pairs land in the section named `""`.
/// Comment lines collect in a buffer until a header claims them; a key/value
/// line discards whatever is pending.
pub struct Parser<'a> {
    document: &'a mut Document,
    current_section: String,
    comment_buffer: Vec<String>,
    line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(document: &'a mut Document) -> Self {
        Self {
            document,
            current_section: String::new(),
            comment_buffer: Vec::new(),
            line: 0,
        }
    }

    /// Feed every line of `input`. Stops at the first bad line; whatever was
    /// parsed before it stays in the document.
    pub fn parse_str(&mut self, input: &str) -> Result<(), SconfError> {
        for raw in input.lines() {
            self.feed_line(raw).inspect_err(|e| {
                debug!(line = self.line, error = %e, "sconf parse failed");
            })?;
        }
        Ok(())
    }

    /// Feed a single physical line.
    pub fn feed_line(&mut self, raw: &str) -> Result<(), SconfError> {
        self.line += 1;
        line::handle_line(self, raw)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Comments seen since the last header or pair.
    pub fn pending_comments(&self) -> &[String] {
        &self.comment_buffer
    }
}

/// Parse `input` into `document`, adding to whatever it already holds.
pub fn parse_into(document: &mut Document, input: &str) -> Result<(), SconfError> {
    Parser::new(document).parse_str(input)
}

/// Parse `input` into a fresh document.
pub fn parse_document(input: &str) -> Result<Document, SconfError> {
    let mut document = Document::new();
    parse_into(&mut document, input)?;
    Ok(document)
}
