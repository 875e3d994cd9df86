//! Core i18n engine.
//!
//! ## Module Structure
//!
//! - `key`: canonical localization keys and the escape-aware template tokenizer
//! - `lazy`: deferred translation requests (`lt`)
//! - `parsers`: swc source parsing and language file I/O
//! - `extract`: tagged-template extraction from source files
//! - `registry`: extracted keys and where they were found
//! - `file_scanner`: source file discovery
//! - `sync`: reconciling language files with the extracted keys
//! - `resolve`: rendering a lazy string against a language map
//! - `scope`: loaded languages and the request-local locale binding

pub mod extract;
pub mod file_scanner;
pub mod key;
pub mod lazy;
pub mod parsers;
pub mod registry;
pub mod resolve;
pub mod scope;
pub mod sync;
