//! Canonical localization keys.
//!
//! A key is built from a template literal's static parts with positional
//! placeholder markers (`{0}`, `{1}`, ...) inserted at each interpolation site.
//! Literal braces in the static parts are escaped with a backslash so they can
//! never be mistaken for a marker:
//!
//! - every `\` becomes `\\`
//! - every `{` becomes `\{`
//!
//! `}` is left alone: markers are only ever opened by `{`.
//!
//! Extraction and resolution both go through this module, so a key written by
//! `honolate extract` is exactly the key `lt`/`t` look up at runtime.

use std::fmt::Write as _;

/// Escape character used by the key codec.
pub const ESCAPE: char = '\\';

/// Escape literal backslashes and opening braces in a static template part.
///
/// ```
/// use honolate::core::key::escape_key;
///
/// assert_eq!(escape_key("Hello {world}"), r"Hello \{world}");
/// assert_eq!(escape_key(r"C:\temp"), r"C:\\temp");
/// assert_eq!(escape_key("No braces"), "No braces");
/// ```
pub fn escape_key(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ESCAPE || c == '{' {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Reverse [`escape_key`].
///
/// `\{` becomes `{` and `\\` becomes `\`. A backslash followed by anything
/// else is kept as-is.
pub fn unescape_key(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESCAPE
            && let Some(&next) = chars.peek()
            && (next == ESCAPE || next == '{')
        {
            unescaped.push(next);
            chars.next();
            continue;
        }
        unescaped.push(c);
    }
    unescaped
}

/// Placeholder marker for the interpolation at `index`.
pub fn placeholder(index: usize) -> String {
    format!("{{{}}}", index)
}

/// Build a canonical key from the static parts of a template literal.
///
/// A marker is written after part `i` for every `i < arity`, so a template
/// with `n` interpolations (and therefore `n + 1` static parts) gets markers
/// `{0}` to `{n-1}`. The key depends only on the static text and the number of
/// interpolations, never on the interpolated values.
///
/// `parts.len()` must be `arity + 1`; debug builds panic otherwise.
pub fn build_key<S: AsRef<str>>(parts: &[S], arity: usize) -> String {
    debug_assert_eq!(
        parts.len(),
        arity + 1,
        "a template with {} interpolation(s) needs {} static part(s)",
        arity,
        arity + 1
    );
    let mut key = String::new();
    for (index, part) in parts.iter().enumerate() {
        key.push_str(&escape_key(part.as_ref()));
        if index < arity {
            let _ = write!(key, "{{{}}}", index);
        }
    }
    key
}

/// A piece of a localized template after escape-aware tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Literal text with escapes already removed.
    Text(String),
    /// An unescaped `{n}` marker.
    Placeholder(usize),
}

/// Split a template into literal text and placeholder markers.
///
/// Escapes are honoured: `\{0}` produces the literal text `{0}`, `\\{0}`
/// produces a literal `\` followed by placeholder `0`. Braces that do not form
/// a marker (`{}`, `{name}`, a lone `{`) stay literal. Markers use canonical
/// decimal indices, so `{01}` is literal text.
pub fn parse_template(template: &str) -> Vec<TemplatePart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut rest = template;

    while let Some(c) = rest.chars().next() {
        if c == ESCAPE {
            let mut escaped = rest[1..].chars();
            match escaped.next() {
                Some(next) if next == ESCAPE || next == '{' => {
                    text.push(next);
                    rest = &rest[2..];
                }
                _ => {
                    text.push(ESCAPE);
                    rest = &rest[1..];
                }
            }
            continue;
        }

        if c == '{'
            && let Some((index, len)) = match_marker(rest)
        {
            if !text.is_empty() {
                parts.push(TemplatePart::Text(std::mem::take(&mut text)));
            }
            parts.push(TemplatePart::Placeholder(index));
            rest = &rest[len..];
            continue;
        }

        text.push(c);
        rest = &rest[c.len_utf8()..];
    }

    if !text.is_empty() {
        parts.push(TemplatePart::Text(text));
    }
    parts
}

/// Match a `{n}` marker at the start of `input`, returning the index and the
/// marker's byte length.
fn match_marker(input: &str) -> Option<(usize, usize)> {
    let body = input.strip_prefix('{')?;
    let digits = body.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || !body[digits..].starts_with('}') {
        return None;
    }
    let number = &body[..digits];
    if digits > 1 && number.starts_with('0') {
        return None;
    }
    let index = number.parse().ok()?;
    Some((index, digits + 2))
}
