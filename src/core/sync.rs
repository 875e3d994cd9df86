//! Translation-file synchronization.
//!
//! For every configured language the persisted map is compared with the keys
//! extracted from source:
//!
//! - missing keys are added (the default language gets the key text itself,
//!   other languages an empty string meaning "needs translation")
//! - superfluous keys are removed
//!
//! Each correction is recorded as a [`SyncIssue`]. In read-only mode the
//! corrections are computed and reported but nothing is written.

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use crate::config::LanguageFile;
use crate::core::parsers::json::{
    LanguageMap, load_language_map, render_language_map, write_language_map,
};
use crate::core::registry::Extractions;
use crate::issues::SyncIssue;

/// A language map brought in line with the extracted keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub entries: LanguageMap,
    pub missing: Vec<String>,
    pub superfluous: Vec<String>,
}

impl Reconciliation {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.superfluous.is_empty()
    }
}

/// Compute the corrected map for one language.
///
/// Kept entries retain their order and values; missing keys are appended in
/// extraction order.
pub fn reconcile(
    status_quo: &LanguageMap,
    extractions: &Extractions,
    is_default_language: bool,
) -> Reconciliation {
    let mut entries = LanguageMap::new();
    let mut superfluous = Vec::new();
    for (key, value) in status_quo {
        if extractions.contains_key(key) {
            entries.insert(key.clone(), value.clone());
        } else {
            superfluous.push(key.clone());
        }
    }

    let mut missing = Vec::new();
    for key in extractions.keys() {
        if status_quo.contains_key(key) {
            continue;
        }
        let seed = if is_default_language { key } else { "" };
        entries.insert(key.to_string(), Value::String(seed.to_string()));
        missing.push(key.to_string());
    }

    Reconciliation {
        entries,
        missing,
        superfluous,
    }
}

/// Outcome for a single language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSyncResult {
    pub language: String,
    /// Whether the file was (re)written.
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub read_only: bool,
    pub languages: Vec<LanguageSyncResult>,
    pub issues: Vec<SyncIssue>,
}

impl SyncReport {
    /// True if any language file had to be (or, in read-only mode, would
    /// have to be) corrected.
    pub fn is_dirty(&self) -> bool {
        !self.issues.is_empty()
    }
}

pub struct TranslationSynchronizer<'a> {
    default_language: &'a str,
    files: &'a [LanguageFile],
    read_only: bool,
}

impl<'a> TranslationSynchronizer<'a> {
    pub fn new(default_language: &'a str, files: &'a [LanguageFile], read_only: bool) -> Self {
        Self {
            default_language,
            files,
            read_only,
        }
    }

    /// Reconcile every language file with `extractions`.
    ///
    /// Unreadable or corrupt language files count as empty. Failing to write a
    /// corrected file is an error.
    pub fn sync(&self, extractions: &Extractions) -> Result<SyncReport> {
        let mut languages = Vec::with_capacity(self.files.len());
        let mut issues = Vec::new();

        for file in self.files {
            let current = load_language_map(&file.path, &file.language);
            let is_default = file.language == self.default_language;
            let reconciliation = reconcile(&current.entries, extractions, is_default);

            issues.extend(reconciliation.missing.iter().map(|key| SyncIssue::MissingKey {
                language: file.language.clone(),
                key: key.clone(),
            }));
            issues.extend(
                reconciliation
                    .superfluous
                    .iter()
                    .map(|key| SyncIssue::SuperfluousKey {
                        language: file.language.clone(),
                        key: key.clone(),
                    }),
            );

            let written = if self.read_only {
                false
            } else {
                let content = render_language_map(&reconciliation.entries)?;
                if current.raw.as_deref() == Some(content.as_str()) {
                    false
                } else {
                    write_language_map(&file.path, &content)?;
                    true
                }
            };
            debug!(
                language = %file.language,
                path = %file.path.display(),
                missing = reconciliation.missing.len(),
                superfluous = reconciliation.superfluous.len(),
                written,
                "Synchronized language file"
            );

            languages.push(LanguageSyncResult {
                language: file.language.clone(),
                written,
            });
        }

        Ok(SyncReport {
            read_only: self.read_only,
            languages,
            issues,
        })
    }
}
