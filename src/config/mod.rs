// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::ast::Document;
use crate::options::WriteOptions;
use crate::utils::expand_home;
use crate::{parser, serializer};
use crate::SconfError;

mod access;
mod comments;

/// An sconf document plus the options used to write it back out.
///
/// Owned by a single caller; there is no internal locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SconfConfig {
    document: Document,
    options: WriteOptions,
}

impl SconfConfig {
    /// An empty config with default write options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an sconf file into a fresh config.
    ///
    /// # Example
    /// ```no_run
    /// # use sconf::SconfConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SconfConfig::from_file("app.sconf")?;
    /// for section in config.sections() {
    ///     println!("[{}]", section);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SconfError> {
        let mut config = Self::new();
        config.load(path)?;
        Ok(config)
    }

    /// Parse an sconf config from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, SconfError> {
        let mut config = Self::new();
        config.load_str(content)?;
        Ok(config)
    }

    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WriteOptions) {
        self.options = options;
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Read `path` and parse it into this config.
    ///
    /// Content is added to what is already loaded: existing sections gain or
    /// overwrite keys, new sections are appended. Parsing is not
    /// transactional, so on a syntax error the sections read before the bad
    /// line stay in place.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SconfError> {
        let path = expand_home(path.as_ref());
        let content = fs::read_to_string(&path).map_err(|e| SconfError::IoError {
            message: format!("Failed to open file: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(201),
        })?;

        self.load_str(&content)?;
        debug!(path = %path.display(), sections = self.document.sections.len(), "loaded sconf file");
        Ok(())
    }

    /// Parse `content` into this config, with the same merge rules as [`load`](Self::load).
    pub fn load_str(&mut self, content: &str) -> Result<(), SconfError> {
        parser::parse_into(&mut self.document, content)
    }

    /// Render the whole config as sconf text.
    pub fn to_sconf_string(&self) -> Result<String, SconfError> {
        serializer::write_document(&self.document, &self.options)
    }

    /// Write the config to `path`, replacing any existing file.
    ///
    /// The text is rendered in full before the file is touched, so a render
    /// error leaves the file as it was.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SconfError> {
        let path = expand_home(path.as_ref());
        let text = self.to_sconf_string()?;

        fs::write(&path, text).map_err(|e| SconfError::IoError {
            message: format!("Failed to open file for writing: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(202),
        })?;

        debug!(path = %path.display(), sections = self.document.sections.len(), "saved sconf file");
        Ok(())
    }
}

impl From<Document> for SconfConfig {
    fn from(document: Document) -> Self {
        Self {
            document,
            options: WriteOptions::default(),
        }
    }
}
