//! Indexer type definitions.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{
    CatalogError,
    ContentCatalog,
};
use crate::config::MatcherError;
use crate::dictionary::{
    DictionaryStore,
    LocaleFile,
};
use crate::types::LocaleCode;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Locale file patterns could not be compiled
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    /// The catalog exists but cannot be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Everything loaded from a site root.
#[derive(Debug, Clone)]
pub struct SiteAssets {
    /// Parsed locale files, sorted by path.
    pub locale_files: Vec<LocaleFile>,
    pub catalog: Arc<ContentCatalog>,
}

impl SiteAssets {
    /// Dictionaries for a page that loads `namespaces`.
    #[must_use]
    pub fn dictionaries_for(&self, base_locale: LocaleCode, namespaces: &[String]) -> DictionaryStore {
        DictionaryStore::from_files(base_locale, &self.locale_files, namespaces)
    }

    /// Dictionaries merged across every namespace found on disk.
    #[must_use]
    pub fn all_dictionaries(&self, base_locale: LocaleCode) -> DictionaryStore {
        let mut namespaces: Vec<String> =
            self.locale_files.iter().filter_map(|file| file.namespace.clone()).collect();
        namespaces.sort();
        namespaces.dedup();
        DictionaryStore::from_files(base_locale, &self.locale_files, &namespaces)
    }
}
