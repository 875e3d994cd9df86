//! Resolution of lazy strings into display text.
//!
//! Given a locale's key → text map, a [`LazyLocalizedString`] is resolved by:
//!
//! 1. Looking up its key. A missing or empty entry falls back to the key text
//!    itself, so untranslated strings never render blank.
//! 2. Substituting every unescaped `{i}` with the i-th value. Nested lazy
//!    values are resolved first, against the same map.
//! 3. Removing the key escapes (`\{` and `\\`) from the template's own text.
//!
//! Values are inserted verbatim after tokenizing, so a value that happens to
//! contain `{0}` or a backslash is never substituted or unescaped again.

use std::collections::HashMap;

use tracing::warn;

use crate::core::key::{TemplatePart, parse_template, placeholder};
use crate::core::lazy::{LazyLocalizedString, LocalizedValue};

/// A locale's key → localized text mapping, as loaded from its language file.
pub type LocalizationMap = HashMap<String, String>;

/// Resolve a lazy string against a locale's map.
pub fn resolve(map: &LocalizationMap, lazy: &LazyLocalizedString) -> String {
    let key = lazy.localization_key();
    let template = match map.get(key) {
        Some(text) if !text.is_empty() => text.as_str(),
        _ => key,
    };

    let parts = parse_template(template);
    let values = lazy.values();
    for index in 0..values.len() {
        if !parts.contains(&TemplatePart::Placeholder(index)) {
            warn!(
                key,
                index,
                values = values.len(),
                "Localized string has no placeholder for value; check the translation"
            );
        }
    }

    let mut rendered: Vec<Option<String>> = vec![None; values.len()];
    let mut resolved = String::with_capacity(template.len());
    for part in parts {
        match part {
            TemplatePart::Text(text) => resolved.push_str(&text),
            TemplatePart::Placeholder(index) => match values.get(index) {
                Some(value) => {
                    let text = rendered[index].get_or_insert_with(|| render_value(map, value));
                    resolved.push_str(text);
                }
                None => resolved.push_str(&placeholder(index)),
            },
        }
    }
    resolved
}

fn render_value(map: &LocalizationMap, value: &LocalizedValue) -> String {
    match value {
        LocalizedValue::Lazy(nested) => resolve(map, nested),
        other => other.to_string(),
    }
}

/// Explicit resolution context: a locale and its map.
///
/// Use this wherever the locale is known at the call site. For handlers that
/// cannot thread it through, see [`crate::core::scope`].
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    locale: &'a str,
    map: &'a LocalizationMap,
}

impl<'a> Localizer<'a> {
    pub fn new(locale: &'a str, map: &'a LocalizationMap) -> Self {
        Self { locale, map }
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }

    /// Resolve a lazy string in this locale.
    pub fn t(&self, lazy: &LazyLocalizedString) -> String {
        resolve(self.map, lazy)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::lazy::lt;

    fn map(entries: &[(&str, &str)]) -> LocalizationMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitutes_positional_values() {
        let map = map(&[("greet", "Hi {0}, welcome to {1}!")]);
        let lazy = LazyLocalizedString::new("greet", vec!["Ann".into(), "Earth".into()]);

        assert_eq!(resolve(&map, &lazy), "Hi Ann, welcome to Earth!");
    }

    #[test]
    fn test_translation_may_reorder_placeholders() {
        let map = map(&[("{0} likes {1}", "{1} wird von {0} gemocht")]);
        let lazy = lt(&["", " likes ", ""], vec!["Ann".into(), "Rust".into()]);

        assert_eq!(resolve(&map, &lazy), "Rust wird von Ann gemocht");
    }

    #[test]
    fn test_repeated_placeholder_is_replaced_everywhere() {
        let map = map(&[("{0}", "{0} and {0} again")]);
        let lazy = lt(&["", ""], vec![7.into()]);

        assert_eq!(resolve(&map, &lazy), "7 and 7 again");
    }

    #[test]
    fn test_nested_lazy_values_resolve_recursively() {
        let map = map(&[
            ("This is a {0} test.", "Dies ist ein {0} Test."),
            (
                "This is an embedded {0} example.",
                "Dies ist ein eingebettetes {0} Beispiel.",
            ),
        ]);
        let inner = lt(&["This is a ", " test."], vec![42.into()]);
        let outer = lt(&["This is an embedded ", " example."], vec![inner.into()]);

        assert_eq!(
            resolve(&map, &outer),
            "Dies ist ein eingebettetes Dies ist ein 42 Test. Beispiel."
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_key_text() {
        let lazy = lt(&["Hello ", "!"], vec!["Ann".into()]);

        assert_eq!(resolve(&LocalizationMap::new(), &lazy), "Hello Ann!");
    }

    #[test]
    fn test_empty_translation_falls_back_to_key_text() {
        let map = map(&[("Untranslated text", "")]);
        let lazy = LazyLocalizedString::from("Untranslated text");

        assert_eq!(resolve(&map, &lazy), "Untranslated text");
    }

    #[test]
    fn test_escaped_braces_render_literally() {
        let lazy = lt(&["Use {", "} here"], vec!["x".into()]);
        assert_eq!(lazy.localization_key(), r"Use \{{0}} here");

        assert_eq!(resolve(&LocalizationMap::new(), &lazy), "Use {x} here");
    }

    #[test]
    fn test_escaped_placeholder_is_left_untouched() {
        let map = map(&[("key", r"literal \{0} and value {0}")]);
        let lazy = LazyLocalizedString::new("key", vec!["A".into()]);

        assert_eq!(resolve(&map, &lazy), "literal {0} and value A");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let lazy = lt(&["", " / ", ""], vec![r"{1}\{".into(), "second".into()]);

        assert_eq!(
            resolve(&LocalizationMap::new(), &lazy),
            r"{1}\{ / second"
        );
    }

    #[test]
    fn test_missing_placeholder_still_substitutes_the_rest() {
        let map = map(&[("{0} {1}", "only {1}")]);
        let lazy = lt(&["", " ", ""], vec!["dropped".into(), "kept".into()]);

        assert_eq!(resolve(&map, &lazy), "only kept");
    }

    #[test]
    fn test_placeholder_without_value_is_kept() {
        let map = map(&[("key", "{0} and {3}")]);
        let lazy = LazyLocalizedString::new("key", vec!["a".into()]);

        assert_eq!(resolve(&map, &lazy), "a and {3}");
    }

    #[test]
    fn test_localizer_binds_locale_and_map() {
        let map = map(&[("Hello world!", "Hallo Welt!")]);
        let localizer = Localizer::new("de", &map);

        assert_eq!(localizer.locale(), "de");
        assert_eq!(
            localizer.t(&LazyLocalizedString::from("Hello world!")),
            "Hallo Welt!"
        );
    }
}
