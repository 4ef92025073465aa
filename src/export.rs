// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::parser;
use crate::utils::expand_home;
use crate::SconfError;

/// Export an sconf document to JSON format.
///
/// The output is an object with two members:
/// - `sections`: section name → key → value, in insertion order
/// - `comments`: section name → list of comment lines
///
/// Strings, integers, doubles and booleans map onto their JSON equivalents,
/// arrays become JSON arrays and dates become their canonical text.
///
/// # Examples
/// ```
/// use sconf::export::export_document_to_json;
/// use sconf::parser::parse_document;
///
/// let doc = parse_document("[server]\nhost = localhost").unwrap();
/// let json = export_document_to_json(&doc).unwrap();
/// assert!(json.contains("\"host\": \"localhost\""));
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, SconfError> {
    serde_json::to_string_pretty(doc).map_err(|e| SconfError::Unsupported {
        message: format!("Failed to encode JSON: {}", e),
        hint: None,
        code: Some(504),
    })
}

/// Export an sconf file directly to JSON.
///
/// # Examples
/// ```no_run
/// use sconf::export::export_sconf_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_sconf_file("config.sconf")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns error if the file cannot be read or contains invalid sconf syntax.
pub fn export_sconf_file<P: AsRef<Path>>(path: P) -> Result<String, SconfError> {
    let path = expand_home(path.as_ref());
    let input = fs::read_to_string(&path).map_err(|e| {
        SconfError::file_error(format!("Failed to read file: {}", e), path.display().to_string())
    })?;

    let doc = parser::parse_document(&input)?;
    export_document_to_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_export_keeps_order_and_types() {
        let mut doc = parser::parse_document("; about b\n[b]\nz = 1\na = [x, [y]]\n[a]\n").unwrap();
        doc.sections["a"].insert("n".into(), Value::integer(3));
        doc.sections["a"].insert("ok".into(), Value::boolean(false));

        let json_output = export_document_to_json(&doc).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["sections"]["b"]["z"], "1");
        assert_eq!(v["sections"]["b"]["a"], json!(["x", ["y"]]));
        assert_eq!(v["sections"]["a"]["n"], 3);
        assert_eq!(v["sections"]["a"]["ok"], false);
        assert_eq!(v["comments"]["b"], json!(["about b"]));

        // insertion order survives in the text
        let b_pos = json_output.find("\"b\"").unwrap();
        let a_pos = json_output.find("\"a\": {").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_export_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[s]\nk = v").unwrap();

        let json_output = export_sconf_file(file.path()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["sections"]["s"]["k"], "v");
    }

    #[test]
    fn test_export_missing_file() {
        match export_sconf_file("/definitely/not/here.sconf") {
            Err(SconfError::IoError { path, .. }) => assert!(path.contains("here.sconf")),
            other => panic!("Expected IoError, got {:?}", other),
        }
    }
}
