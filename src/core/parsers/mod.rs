//! File parsers for source code and language files.
//!
//! - `source`: TS/TSX/JS source parser (uses swc for AST generation)
//! - `json`: language file reading and writing

pub mod json;
pub mod source;
