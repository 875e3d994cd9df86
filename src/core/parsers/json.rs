use std::{fs, io, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A persisted language map: canonical key → localized text.
///
/// Kept as a JSON object so entry order and any unexpected values survive a
/// read/write cycle untouched.
pub type LanguageMap = Map<String, Value>;

/// A language file as found on disk.
#[derive(Debug, Default)]
pub struct LanguageFileContent {
    pub entries: LanguageMap,
    /// The file's text, or `None` when it does not exist or cannot be read.
    pub raw: Option<String>,
}

/// Parse the content of a language file. The root must be a JSON object.
pub fn parse_language_map(content: &str) -> Result<LanguageMap> {
    let value: Value = serde_json::from_str(content).context("Invalid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("Root of a language file must be an object"),
    }
}

/// Load a language file, treating a missing or corrupt file as empty.
pub fn load_language_map(path: &Path, language: &str) -> LanguageFileContent {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(language, path = %path.display(), "Language file does not exist yet");
            return LanguageFileContent::default();
        }
        Err(e) => {
            warn!(
                language,
                path = %path.display(),
                error = %e,
                "Failed to read language file; treating it as empty"
            );
            return LanguageFileContent::default();
        }
    };

    match parse_language_map(&raw) {
        Ok(entries) => LanguageFileContent {
            entries,
            raw: Some(raw),
        },
        Err(e) => {
            warn!(
                language,
                path = %path.display(),
                error = %format!("{:#}", e),
                "Failed to parse language file; treating it as empty"
            );
            LanguageFileContent {
                entries: LanguageMap::new(),
                raw: Some(raw),
            }
        }
    }
}

/// Serialize a language map with 2-space indentation and a trailing newline.
pub fn render_language_map(map: &LanguageMap) -> Result<String> {
    let content = serde_json::to_string_pretty(map).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Write a language file, creating parent directories as needed.
pub fn write_language_map(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
