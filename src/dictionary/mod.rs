//! Per-locale translation dictionaries.
//!
//! Locale files are parsed into flat key maps ([`LocaleFile`]), merged into a
//! read-only [`DictionaryStore`] per page, and checked for completeness
//! against the base locale ([`check_coverage`]).

mod coverage;
mod parse;
mod store;
mod value;

pub use coverage::{
    CoverageDiagnostic,
    CoverageKind,
    check_coverage,
};
pub use parse::{
    LocaleFile,
    flatten_entries,
};
pub use store::{
    DictionaryStore,
    LocaleDictionary,
};
use thiserror::Error;
pub use value::TranslationValue;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read locale file: {0}")]
    Io(#[from] std::io::Error),

    #[error("No locale code found in path '{0}'")]
    UnknownLocale(String),

    #[error("Failed to parse locale file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Locale file '{0}' must contain a JSON object")]
    NotAnObject(String),
}
