//! Source file discovery.
//!
//! Walks the root directory and keeps every file whose root-relative path
//! matches the source pattern and none of the ignore patterns. Patterns are
//! shell-style globs with `{a,b}` alternatives, which `glob::Pattern` does not
//! support natively and are therefore expanded up front.

use std::path::Path;

use anyhow::{Context, Result, bail};
use glob::{MatchOptions, Pattern};
use tracing::warn;
use walkdir::WalkDir;

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Root-relative paths with `/` separators, sorted.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Expand `{a,b}` alternatives into separate patterns.
///
/// Groups may nest. An unbalanced `{` is kept literally.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((start, end)) = find_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..start];
    let suffix = &pattern[end + 1..];
    split_alternatives(&pattern[start + 1..end])
        .into_iter()
        .flat_map(|alternative| expand_braces(&format!("{prefix}{alternative}{suffix}")))
        .collect()
}

fn find_brace_group(pattern: &str) -> Option<(usize, usize)> {
    let bytes = pattern.as_bytes();
    let start = bytes.iter().position(|&b| b == b'{')?;

    let mut depth = 0usize;
    for (offset, &b) in bytes[start..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, start + offset));
                }
            }
            _ => {}
        }
    }
    None
}

fn split_alternatives(body: &str) -> Vec<&str> {
    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                alternatives.push(&body[last..i]);
                last = i + 1;
            }
            _ => {}
        }
    }
    alternatives.push(&body[last..]);
    alternatives
}

/// Compile a pattern into the glob patterns of all its brace alternatives.
pub fn compile_pattern(pattern: &str) -> Result<Vec<Pattern>> {
    expand_braces(pattern)
        .iter()
        .map(|expanded| {
            Pattern::new(expanded)
                .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))
        })
        .collect()
}

fn matches_any(patterns: &[Pattern], path: &str) -> bool {
    patterns
        .iter()
        .any(|p| p.matches_with(path, MATCH_OPTIONS))
}

/// Collect the source files under `root` matching `pattern`.
pub fn scan_files(root: &Path, pattern: &str, ignores: &[String]) -> Result<ScanResult> {
    if !root.is_dir() {
        bail!("Root directory does not exist: {}", root.display());
    }

    let includes = compile_pattern(pattern)?;
    let mut excludes = Vec::new();
    for ignore in ignores {
        excludes.extend(compile_pattern(ignore)?);
    }

    let mut result = ScanResult::default();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!(error = %e, "Cannot access path");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if matches_any(&includes, &relative) && !matches_any(&excludes, &relative) {
            result.files.push(relative);
        }
    }

    result.files.sort();
    Ok(result)
}
