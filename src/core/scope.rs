//! Request-scoped locale binding.
//!
//! Language maps are loaded once into [`Localizations`]. Each request picks a
//! language and gets a [`LocaleBinding`], which can either be passed around
//! explicitly (see [`LocaleBinding::localizer`]) or installed for the duration
//! of the request with [`with_locale`] / [`sync_scope`]. Inside such a scope the
//! ambient [`t`] resolves against the bound map.
//!
//! The binding lives in a tokio task-local: it follows the request's future
//! across `.await` points, and concurrent requests never see each other's
//! locale. Spawned tasks start without a binding; use [`spawn_with_locale`] or
//! [`current_binding`] with [`LocaleBinding::scope`] to carry it along.

use std::{
    collections::BTreeMap,
    future::Future,
    path::Path,
    sync::Arc,
};

use serde_json::Value;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::lazy::LazyLocalizedString;
use crate::core::parsers::json::{LanguageMap, load_language_map};
use crate::core::resolve::{LocalizationMap, Localizer, resolve};

/// Pseudo-locale reported when `t` runs outside of any locale scope.
pub const FALLBACK_LOCALE: &str = "default";

tokio::task_local! {
    static CURRENT_LOCALE: LocaleBinding;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("no locale is bound; run the request inside `with_locale` or `sync_scope`")]
    NoRequestContext,
    #[error("language `{0}` is not configured")]
    LocaleNotFound(String),
}

/// A locale together with its loaded map.
#[derive(Debug, Clone)]
pub struct LocaleBinding {
    locale: String,
    map: Arc<LocalizationMap>,
}

impl LocaleBinding {
    pub fn new(locale: impl Into<String>, map: Arc<LocalizationMap>) -> Self {
        Self {
            locale: locale.into(),
            map,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn map(&self) -> &LocalizationMap {
        &self.map
    }

    pub fn localizer(&self) -> Localizer<'_> {
        Localizer::new(&self.locale, &self.map)
    }

    /// Wrap `future` so that it runs with this binding as the current locale.
    pub fn scope<F: Future>(self, future: F) -> impl Future<Output = F::Output> {
        CURRENT_LOCALE.scope(self, future)
    }
}

/// Run `future` with `binding` as the current locale.
pub async fn with_locale<F: Future>(binding: LocaleBinding, future: F) -> F::Output {
    binding.scope(future).await
}

/// Run `f` synchronously with `binding` as the current locale.
pub fn sync_scope<R>(binding: LocaleBinding, f: impl FnOnce() -> R) -> R {
    CURRENT_LOCALE.sync_scope(binding, f)
}

/// The locale bound to the current request.
pub fn current_locale() -> Result<String, LocaleError> {
    CURRENT_LOCALE
        .try_with(|binding| binding.locale.clone())
        .map_err(|_| LocaleError::NoRequestContext)
}

/// The binding of the current request. Cloning shares the loaded map.
pub fn current_binding() -> Result<LocaleBinding, LocaleError> {
    CURRENT_LOCALE
        .try_with(LocaleBinding::clone)
        .map_err(|_| LocaleError::NoRequestContext)
}

/// Spawn `future` on the tokio runtime with the current request's binding.
///
/// Outside of a locale scope the task is spawned unbound.
pub fn spawn_with_locale<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    match current_binding() {
        Ok(binding) => tokio::spawn(binding.scope(future)),
        Err(_) => tokio::spawn(future),
    }
}

/// Resolve a lazy string in the current request's locale.
///
/// Never fails: outside of a locale scope it logs a warning and renders the
/// key text as if the locale were [`FALLBACK_LOCALE`] with an empty map.
pub fn t(lazy: &LazyLocalizedString) -> String {
    match CURRENT_LOCALE.try_with(|binding| resolve(&binding.map, lazy)) {
        Ok(resolved) => resolved,
        Err(_) => {
            warn!(
                locale = FALLBACK_LOCALE,
                key = lazy.localization_key(),
                "{}",
                LocaleError::NoRequestContext
            );
            resolve(&LocalizationMap::new(), lazy)
        }
    }
}

/// Resolve a template in the current request's locale.
///
/// ```
/// use honolate::{lt, t};
/// use honolate::core::scope::{LocaleBinding, sync_scope};
/// use std::sync::Arc;
///
/// let map = Arc::new([("Hello {0}!".to_string(), "Hallo {0}!".to_string())].into());
/// let greeting = sync_scope(LocaleBinding::new("de", map), || t!(["Hello ", "!"], "Ann"));
/// assert_eq!(greeting, "Hallo Ann!");
/// ```
#[macro_export]
macro_rules! t {
    ($($template:tt)+) => {
        $crate::core::scope::t(&$crate::lt!($($template)+))
    };
}

/// All configured language maps, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Localizations {
    default_language: String,
    languages: BTreeMap<String, Arc<LocalizationMap>>,
}

impl Localizations {
    /// Load every configured language file.
    ///
    /// Unreadable or corrupt files are logged and loaded as empty maps.
    pub fn load(config: &Config, base_dir: &Path) -> Self {
        let languages = config
            .language_files(base_dir)
            .into_iter()
            .map(|file| {
                let map = load_language_map(&file.path, &file.language);
                let map = string_entries(map.entries, &file.language, &file.path);
                (file.language, Arc::new(map))
            })
            .collect();
        Self {
            default_language: config.default_language.clone(),
            languages,
        }
    }

    pub fn from_maps(
        default_language: impl Into<String>,
        maps: impl IntoIterator<Item = (String, LocalizationMap)>,
    ) -> Self {
        Self {
            default_language: default_language.into(),
            languages: maps
                .into_iter()
                .map(|(language, map)| (language, Arc::new(map)))
                .collect(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Pick the configured language that best serves `requested`.
    ///
    /// An exact (case-insensitive) match wins, then a language with the same
    /// primary subtag (`de-AT` → `de`), then the default language.
    pub fn select_language(&self, requested: Option<&str>) -> &str {
        let Some(requested) = requested.map(str::trim).filter(|r| !r.is_empty()) else {
            return &self.default_language;
        };

        if let Some(language) = self
            .languages()
            .find(|language| language.eq_ignore_ascii_case(requested))
        {
            return language;
        }

        let primary = primary_subtag(requested);
        self.languages()
            .find(|language| primary_subtag(language).eq_ignore_ascii_case(primary))
            .unwrap_or(self.default_language.as_str())
    }

    /// Binding for a configured language.
    pub fn binding(&self, language: &str) -> Result<LocaleBinding, LocaleError> {
        self.languages
            .get(language)
            .map(|map| LocaleBinding::new(language, Arc::clone(map)))
            .ok_or_else(|| LocaleError::LocaleNotFound(language.to_string()))
    }

    /// Binding for a request, falling back to the default language.
    pub fn binding_for_request(&self, requested: Option<&str>) -> LocaleBinding {
        let language = self.select_language(requested).to_string();
        match self.binding(&language) {
            Ok(binding) => binding,
            Err(err) => {
                debug!(error = %err, "Using an empty map");
                LocaleBinding::new(language, Arc::new(LocalizationMap::new()))
            }
        }
    }
}

fn primary_subtag(language: &str) -> &str {
    language.split(['-', '_']).next().unwrap_or(language)
}

fn string_entries(entries: LanguageMap, language: &str, path: &Path) -> LocalizationMap {
    let mut map = LocalizationMap::with_capacity(entries.len());
    for (key, value) in entries {
        match value {
            Value::String(text) => {
                map.insert(key, text);
            }
            other => warn!(
                language,
                path = %path.display(),
                key = %key,
                value = %other,
                "Ignoring non-string translation"
            ),
        }
    }
    map
}
