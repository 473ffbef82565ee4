//! The flat output record of an extraction.

use serde::{Deserialize, Serialize};

/// A flat record of named profile fields.
///
/// Every field is derived independently from the contiguous block under its
/// named section heading; there are no cross-field dependencies. A record is
/// immutable in practice once produced and is never persisted by this crate
/// beyond what the caller does with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Text of the first top-level heading, if any.
    pub name: Option<String>,

    /// Free-text paragraph under the About section, line breaks collapsed.
    pub about: Option<String>,

    /// Bulleted items under the Education section, in order.
    pub education: Vec<String>,

    /// Non-empty lines under the Experience section, trimmed, in order.
    pub experience: Vec<String>,

    /// Bulleted items under the Projects section, in order.
    pub projects: Vec<String>,
}

impl ProfileRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field holds any data.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.about.is_none()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
    }

    /// Number of populated fields (0-5).
    pub fn field_count(&self) -> u32 {
        let mut count = 0;
        if self.name.is_some() {
            count += 1;
        }
        if self.about.is_some() {
            count += 1;
        }
        if !self.education.is_empty() {
            count += 1;
        }
        if !self.experience.is_empty() {
            count += 1;
        }
        if !self.projects.is_empty() {
            count += 1;
        }
        count
    }
}
