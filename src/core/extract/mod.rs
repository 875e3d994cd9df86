//! Source extraction.
//!
//! Parses each source file with swc and collects its translation template
//! calls (see [`visitor`]). Files are parsed in parallel and merged into the
//! [`Extractions`] registry in the order they were given, so the result does
//! not depend on scheduling.
//!
//! A file that fails to parse fails the whole extraction.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use crate::core::parsers::source::parse_source;
use crate::core::registry::Extractions;

pub mod visitor;

pub use visitor::{ExtractedString, TRANSLATION_TAGS, TemplateCallVisitor};


/// Extract all translation calls from one file's source text.
pub fn extract_source(code: String, file_path: &str) -> Result<Vec<ExtractedString>> {
    let parsed = parse_source(code, file_path)?;
    let found = TemplateCallVisitor::new(&parsed.source_map).analyze(&parsed.module);
    debug!(file = file_path, count = found.len(), "Extracted localized strings");
    Ok(found)
}

/// Read and extract every file under `root`.
///
/// `files` are paths relative to `root`; they are also what the registry
/// records as locations.
pub fn extract_files(root: &Path, files: &[String]) -> Result<Extractions> {
    let per_file = files
        .par_iter()
        .map(|file| {
            let path = root.join(file);
            let code = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read source file: {}", path.display()))?;
            extract_source(code, file).map(|found| (file, found))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut extractions = Extractions::new();
    for (file, found) in per_file {
        for extracted in found {
            extractions.add(extracted.localization_key, file.as_str(), extracted.line);
        }
    }
    Ok(extractions)
}
