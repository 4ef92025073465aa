// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Section, Value};
use crate::utils::normalize_name;
use crate::SconfError;

use super::SconfConfig;

impl SconfConfig {
    /// All section names, in the order they were first seen.
    pub fn sections(&self) -> Vec<String> {
        self.document.sections.keys().cloned().collect()
    }

    /// Borrow a section's keys, if it exists.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.document.sections.get(&normalize_name(name))
    }

    /// A copy of a section's key/value map.
    ///
    /// # Errors
    /// `NotFound` if the section does not exist.
    pub fn get_section(&self, name: &str) -> Result<Section, SconfError> {
        self.section(name)
            .cloned()
            .ok_or_else(|| SconfError::section_not_found(name))
    }

    /// Same as [`get_section`](Self::get_section).
    pub fn get_section_key_pair(&self, name: &str) -> Result<Section, SconfError> {
        self.get_section(name)
    }

    /// Create a section. Adding one that already exists changes nothing.
    pub fn add_section(&mut self, name: &str) {
        self.document.sections.entry(normalize_name(name)).or_default();
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.document.sections.contains_key(&normalize_name(name))
    }

    /// Remove a section together with its comments.
    pub fn remove_section(&mut self, name: &str) -> Result<(), SconfError> {
        let name = normalize_name(name);
        if self.document.sections.shift_remove(&name).is_none() {
            return Err(SconfError::section_not_found(&name));
        }
        self.document.comments.shift_remove(&name);
        Ok(())
    }

    /// Insert or overwrite a key in an existing section.
    ///
    /// # Examples
    /// ```
    /// # use sconf::{SconfConfig, Value};
    /// let mut config = SconfConfig::new();
    /// config.add_section("server");
    /// config.set_key("server", "port", 8080).unwrap();
    /// config.set_key("server", "hosts", vec![Value::from("a"), Value::from("b")]).unwrap();
    ///
    /// assert_eq!(config.get_value("server", "port").unwrap().get_integer().unwrap(), 8080);
    /// assert!(config.set_key("missing", "k", "v").is_err());
    /// ```
    pub fn set_key<V: Into<Value>>(&mut self, section: &str, key: &str, value: V) -> Result<(), SconfError> {
        let name = normalize_name(section);
        let keys = self
            .document
            .sections
            .get_mut(&name)
            .ok_or_else(|| SconfError::section_not_found(&name))?;
        keys.insert(normalize_name(key), value.into());
        Ok(())
    }

    /// # Errors
    /// `NotFound` if either the section or the key is missing.
    pub fn remove_key(&mut self, section: &str, key: &str) -> Result<(), SconfError> {
        let name = normalize_name(section);
        let key = normalize_name(key);
        let keys = self
            .document
            .sections
            .get_mut(&name)
            .ok_or_else(|| SconfError::section_not_found(&name))?;
        keys.shift_remove(&key)
            .map(|_| ())
            .ok_or_else(|| SconfError::key_not_found(&name, &key))
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.section(section)
            .is_some_and(|keys| keys.contains_key(&normalize_name(key)))
    }

    /// Key names of a section, in insertion order.
    pub fn keys(&self, section: &str) -> Result<Vec<String>, SconfError> {
        self.section(section)
            .map(|keys| keys.keys().cloned().collect())
            .ok_or_else(|| SconfError::section_not_found(section))
    }

    /// Borrow the value stored under `section`/`key`.
    pub fn get_value(&self, section: &str, key: &str) -> Result<&Value, SconfError> {
        let keys = self
            .section(section)
            .ok_or_else(|| SconfError::section_not_found(section))?;
        let key = normalize_name(key);
        keys.get(&key)
            .ok_or_else(|| SconfError::key_not_found(section, &key))
    }

    /// Get a typed value. The stored kind must match `T` exactly: text read
    /// from a file is always a string or an array.
    ///
    /// # Examples
    /// ```
    /// # use sconf::SconfConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SconfConfig::from_str("[app]\nname = demo\ntags = [a, b]")?;
    /// let name: String = config.get("app", "name")?;
    /// let tags: Vec<String> = config.get("app", "tags")?;
    /// assert_eq!(name, "demo");
    /// assert_eq!(tags, vec!["a", "b"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get<T>(&self, section: &str, key: &str) -> Result<T, SconfError>
    where
        T: TryFrom<Value, Error = SconfError>,
    {
        T::try_from(self.get_value(section, key)?.clone())
    }

    /// Get a typed value, falling back to `default` on any error.
    pub fn get_or<T>(&self, section: &str, key: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = SconfError>,
    {
        self.get(section, key).unwrap_or(default)
    }

    /// # Errors
    /// `NotFound` if either the section or the key is missing.
    pub fn is_array(&self, section: &str, key: &str) -> Result<bool, SconfError> {
        Ok(self.get_value(section, key)?.is_array())
    }

    /// Whether the value is a scalar rather than an array.
    pub fn is_single_value(&self, section: &str, key: &str) -> Result<bool, SconfError> {
        Ok(!self.get_value(section, key)?.is_array())
    }
}
