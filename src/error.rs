// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::ast::ValueKind;

/// The single error type surfaced by every fallible sconf operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SconfError {
    /// A file could not be opened for reading or writing.
    IoError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A line matched none of the grammar productions.
    SyntaxError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    NotFound {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// An accessor was called on a value of a different kind.
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidFormat {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by the writer for content the text format cannot carry.
    Unsupported {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for SconfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SconfError::IoError { message, path, hint, code } =>
                write!(f, "[SCONF] I/O Error '{}': {}{}", path, message, suffix(hint, code)),
            SconfError::SyntaxError { message, line, hint, code } =>
                write!(f, "[SCONF] Syntax Error at line {}: {}{}", line, message, suffix(hint, code)),
            SconfError::NotFound { message, hint, code } =>
                write!(f, "[SCONF] Not Found: {}{}", message, suffix(hint, code)),
            SconfError::TypeMismatch { expected, found, hint, code } =>
                write!(f, "[SCONF] Type Mismatch: expected {}, found {}{}", expected, found, suffix(hint, code)),
            SconfError::InvalidFormat { message, hint, code } =>
                write!(f, "[SCONF] Invalid Format: {}{}", message, suffix(hint, code)),
            SconfError::Unsupported { message, hint, code } =>
                write!(f, "[SCONF] Unsupported: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for SconfError {}

impl SconfError {
    pub fn file_error(message: String, path: String) -> Self {
        SconfError::IoError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(201),
        }
    }

    pub fn section_not_found(section: &str) -> Self {
        SconfError::NotFound {
            message: format!("Section not found: {}", section),
            hint: Some("Create it first with add_section".into()),
            code: Some(301),
        }
    }

    pub fn key_not_found(section: &str, key: &str) -> Self {
        SconfError::NotFound {
            message: format!("Key '{}' not found in section '{}'", key, section),
            hint: None,
            code: Some(302),
        }
    }

    pub fn type_mismatch(expected: ValueKind, found: ValueKind) -> Self {
        SconfError::TypeMismatch {
            expected,
            found,
            hint: Some(format!("Construct the value as {} before reading it as one", expected)),
            code: Some(401),
        }
    }

    /// True for the lookup failures `NotFound` carries.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SconfError::NotFound { .. })
    }
}
