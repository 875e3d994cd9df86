//! Extraction registry: every distinct key found in a run and where it occurs.

use std::collections::HashMap;

/// A source position of an extracted string (1-based line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

/// One distinct canonical key and all locations it was found at, in
/// discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub localization_key: String,
    pub locations: Vec<SourceLocation>,
}

/// Accumulates extraction records across files, deduplicated by key.
///
/// Records keep first-seen order so CLI output is deterministic.
#[derive(Debug, Default)]
pub struct Extractions {
    records: Vec<ExtractionRecord>,
    index: HashMap<String, usize>,
}

impl Extractions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `key`. The first occurrence creates the
    /// record; later ones only add a location.
    pub fn add(&mut self, key: impl Into<String>, file: impl Into<String>, line: usize) {
        let key = key.into();
        let location = SourceLocation {
            file: file.into(),
            line,
        };

        if let Some(&position) = self.index.get(&key) {
            self.records[position].locations.push(location);
            return;
        }

        self.index.insert(key.clone(), self.records.len());
        self.records.push(ExtractionRecord {
            localization_key: key,
            locations: vec![location],
        });
    }

    pub fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.localization_key.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of occurrences across all keys.
    pub fn occurrence_count(&self) -> usize {
        self.records.iter().map(|r| r.locations.len()).sum()
    }
}
