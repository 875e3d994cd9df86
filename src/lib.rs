//! Honolate - tagged-template i18n for TypeScript projects
//!
//! Source code marks translatable text with the `t` and `lt` template tags.
//! Honolate extracts those templates into canonical localization keys, keeps
//! the per-language JSON files in sync with them, and resolves lazy strings
//! against the language bound to the current request.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`extract`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key codec, extraction, synchronization and resolution
//! - `issues`: Drift between extracted keys and language files
//!
//! ## Resolving strings
//!
//! ```
//! use honolate::{Localizer, LocalizationMap, lt};
//!
//! let map = LocalizationMap::from([(
//!     "Hello {0}!".to_string(),
//!     "Hallo {0}!".to_string(),
//! )]);
//! let greeting = lt!(["Hello ", "!"], "Welt");
//!
//! assert_eq!(Localizer::new("de", &map).t(&greeting), "Hallo Welt!");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;

pub use crate::core::{
    key::{build_key, escape_key, unescape_key},
    lazy::{LazyLocalizedString, LocalizedValue, lt},
    resolve::{LocalizationMap, Localizer, resolve},
    scope::{
        LocaleBinding, LocaleError, Localizations, current_binding, current_locale,
        spawn_with_locale, sync_scope, t, with_locale,
    },
};
