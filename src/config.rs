use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::file_scanner::compile_pattern;

pub const CONFIG_FILE_NAME: &str = ".honolaterc.json";

/// Source files scanned when no pattern is configured.
pub const DEFAULT_PATTERN: &str = "**/*.{ts,tsx}";

static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").expect("language code regex is valid")
});

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Language code → path of its JSON file, relative to the config file.
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

/// A configured language and the resolved path of its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFile {
    pub language: String,
    pub path: PathBuf,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_languages() -> BTreeMap<String, String> {
    BTreeMap::from([("en".to_string(), "./locales/en.json".to_string())])
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            languages: default_languages(),
            pattern: None,
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Language codes must look like `en` or `pt-BR`, the default language must
    /// be configured, and all glob patterns must be valid.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must configure at least one language");
        }

        for language in self.languages.keys() {
            if !LANGUAGE_CODE.is_match(language) {
                bail!("Invalid language code in 'languages': \"{}\"", language);
            }
        }

        if !self.languages.contains_key(&self.default_language) {
            bail!(
                "'defaultLanguage' \"{}\" is not one of the configured languages ({})",
                self.default_language,
                self.languages.keys().cloned().collect::<Vec<_>>().join(", ")
            );
        }

        if let Some(pattern) = &self.pattern {
            validate_glob(pattern, "pattern")?;
        }

        for pattern in &self.ignores {
            validate_glob(pattern, "ignores")?;
        }

        Ok(())
    }

    /// The source pattern, falling back to [`DEFAULT_PATTERN`].
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }

    /// Language files with paths resolved against `base_dir`.
    pub fn language_files(&self, base_dir: &Path) -> Vec<LanguageFile> {
        self.languages
            .iter()
            .map(|(language, path)| LanguageFile {
                language: language.clone(),
                path: base_dir.join(normalize_path(path)),
            })
            .collect()
    }
}

fn validate_glob(pattern: &str, field: &str) -> Result<()> {
    compile_pattern(pattern).with_context(|| format!("Invalid glob pattern in '{}'", field))?;
    Ok(())
}

/// Accept `file://` URLs as plain paths.
fn normalize_path(path: &str) -> &str {
    path.strip_prefix("file://").unwrap_or(path)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory language file paths are relative to: the config file's
    /// directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
