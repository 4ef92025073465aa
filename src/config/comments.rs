// Author: Dustin Pilgrim
// License: MIT

use crate::utils::normalize_name;
use crate::SconfError;

use super::SconfConfig;

impl SconfConfig {
    /// Comments attached to a section header.
    ///
    /// A section read from text always has a (possibly empty) comment list.
    ///
    /// # Errors
    /// `NotFound` if the section has no comment entry at all.
    pub fn get_comments(&self, section: &str) -> Result<&[String], SconfError> {
        self.document
            .comments
            .get(&normalize_name(section))
            .map(Vec::as_slice)
            .ok_or_else(|| SconfError::NotFound {
                message: format!("No comments recorded for section: {}", section),
                hint: None,
                code: Some(303),
            })
    }

    /// True only when the section has at least one comment.
    pub fn has_comments(&self, section: &str) -> bool {
        self.document
            .comments
            .get(&normalize_name(section))
            .is_some_and(|c| !c.is_empty())
    }

    /// Empty a section's comment list. No-op when there is none.
    pub fn clear_comments(&mut self, section: &str) {
        if let Some(comments) = self.document.comments.get_mut(&normalize_name(section)) {
            comments.clear();
        }
    }

    /// Append a comment line above an existing section's header.
    pub fn add_comment(&mut self, section: &str, text: &str) -> Result<(), SconfError> {
        let name = normalize_name(section);
        if !self.document.sections.contains_key(&name) {
            return Err(SconfError::section_not_found(&name));
        }
        self.document
            .comments
            .entry(name)
            .or_default()
            .push(text.trim().to_string());
        Ok(())
    }
}
