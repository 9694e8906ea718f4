//! Subject colour/emoji assignment.

use serde::{Deserialize, Serialize};

/// How a subject is rendered: a palette colour, a display name and an emoji.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectData {
    /// Hex colour, e.g. `#1F6DB2`
    pub color: String,
    pub pretty: String,
    pub emoji: String,
}

impl SubjectData {
    pub fn new(color: impl Into<String>, pretty: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            pretty: pretty.into(),
            emoji: emoji.into(),
        }
    }

    /// Placeholder returned for a blank subject name.
    pub fn unknown() -> Self {
        Self::new("#888888", "Matière inconnue", "❓")
    }
}
