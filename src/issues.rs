//! Drift between extracted keys and a language file.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyncIssue {
    /// An extracted key has no entry in the language file.
    MissingKey { language: String, key: String },
    /// The language file has an entry no source file uses anymore.
    SuperfluousKey { language: String, key: String },
}

impl SyncIssue {
    pub fn language(&self) -> &str {
        match self {
            SyncIssue::MissingKey { language, .. } | SyncIssue::SuperfluousKey { language, .. } => {
                language
            }
        }
    }

    pub fn key(&self) -> &str {
        match self {
            SyncIssue::MissingKey { key, .. } | SyncIssue::SuperfluousKey { key, .. } => key,
        }
    }
}

impl fmt::Display for SyncIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncIssue::MissingKey { language, key } => {
                write!(f, "Missing key in {}: {}", language, key)
            }
            SyncIssue::SuperfluousKey { language, key } => {
                write!(f, "Superfluous key in {}: {}", language, key)
            }
        }
    }
}
