use std::collections::{
    BTreeMap,
    HashMap,
};

use super::{
    LocaleFile,
    TranslationValue,
};
use crate::types::LocaleCode;

/// Key → value map of a single locale. Immutable once the store is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDictionary {
    locale: LocaleCode,
    entries: HashMap<String, TranslationValue>,
}

impl LocaleDictionary {
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self { locale, entries: HashMap::new() }
    }

    #[must_use]
    pub fn with_entries(
        locale: LocaleCode,
        entries: impl IntoIterator<Item = (String, TranslationValue)>,
    ) -> Self {
        Self { locale, entries: entries.into_iter().collect() }
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge(&mut self, entries: &HashMap<String, TranslationValue>) {
        self.entries.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// Dictionaries of every supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStore {
    base_locale: LocaleCode,
    dictionaries: BTreeMap<LocaleCode, LocaleDictionary>,
}

impl DictionaryStore {
    #[must_use]
    pub const fn new(base_locale: LocaleCode) -> Self {
        Self { base_locale, dictionaries: BTreeMap::new() }
    }

    /// Builds a store from parsed locale files.
    ///
    /// Only files whose namespace is listed in `namespaces` (plus files with no
    /// namespace) are merged, in the order given. A later file overrides an
    /// earlier one for the same key.
    #[must_use]
    pub fn from_files(base_locale: LocaleCode, files: &[LocaleFile], namespaces: &[String]) -> Self {
        let mut store = Self::new(base_locale);

        let mut selected: Vec<&LocaleFile> = files
            .iter()
            .filter(|file| file.namespace.as_ref().is_none_or(|ns| namespaces.contains(ns)))
            .collect();
        // Namespace-less files first, then the page's namespaces in manifest order.
        selected.sort_by_key(|file| {
            file.namespace
                .as_ref()
                .and_then(|ns| namespaces.iter().position(|n| n == ns))
                .map_or(0, |position| position + 1)
        });

        for file in selected {
            tracing::debug!(
                locale = %file.locale,
                namespace = ?file.namespace,
                keys = file.entries.len(),
                "Merging locale file {}",
                file.path
            );
            store
                .dictionaries
                .entry(file.locale.clone())
                .or_insert_with(|| LocaleDictionary::new(file.locale.clone()))
                .merge(&file.entries);
        }

        store
    }

    /// Adds a dictionary, merging it into an existing one of the same locale.
    pub fn insert(&mut self, dictionary: LocaleDictionary) {
        match self.dictionaries.get_mut(dictionary.locale()) {
            Some(existing) => existing.merge(&dictionary.entries),
            None => {
                self.dictionaries.insert(dictionary.locale.clone(), dictionary);
            }
        }
    }

    /// Translation of `key` in `locale`, if both are known.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&TranslationValue> {
        self.dictionaries.get(locale)?.get(key)
    }

    #[must_use]
    pub fn dictionary(&self, locale: &str) -> Option<&LocaleDictionary> {
        self.dictionaries.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.dictionaries.keys()
    }

    #[must_use]
    pub const fn base_locale(&self) -> &LocaleCode {
        &self.base_locale
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn locale(code: &str) -> LocaleCode {
        LocaleCode::parse(code).unwrap()
    }

    fn file(path: &str, content: &str) -> LocaleFile {
        LocaleFile::parse(Path::new(path), content).unwrap()
    }

    #[fixture]
    fn files() -> Vec<LocaleFile> {
        vec![
            file(
                "locales/en/home.json",
                r#"{"hero.tag": "Visual Agency", "nav.work": "Home Work"}"#,
            ),
            file("locales/id/home.json", r#"{"hero.tag": "Agensi Visual"}"#),
            file("locales/en/common.json", r#"{"nav.work": "Work", "nav.about": "About"}"#),
            file("locales/en/work.json", r#"{"work.tag": "Portfolio"}"#),
            file("locales/en.json", r#"{"footer.copy": "All rights reserved."}"#),
        ]
    }

    #[rstest]
    fn from_files_selects_page_namespaces(files: Vec<LocaleFile>) {
        let namespaces = vec!["common".to_string(), "home".to_string()];

        let store = DictionaryStore::from_files(locale("en"), &files, &namespaces);

        assert_that!(
            store.get("en", "hero.tag"),
            some(eq(&TranslationValue::Text("Visual Agency".to_string())))
        );
        assert_that!(store.get("en", "nav.about"), some(anything()));
        assert_that!(store.get("en", "footer.copy"), some(anything()));
        assert_that!(store.get("en", "work.tag"), none());
        assert_that!(
            store.get("id", "hero.tag").map(TranslationValue::as_str),
            some(eq("Agensi Visual"))
        );
    }

    #[rstest]
    fn from_files_later_namespace_overrides(files: Vec<LocaleFile>) {
        let namespaces = vec!["common".to_string(), "home".to_string()];

        let store = DictionaryStore::from_files(locale("en"), &files, &namespaces);

        assert_that!(
            store.get("en", "nav.work").map(TranslationValue::as_str),
            some(eq("Home Work"))
        );
    }

    #[rstest]
    fn unknown_locale_or_key_is_absent(files: Vec<LocaleFile>) {
        let store = DictionaryStore::from_files(locale("en"), &files, &["home".to_string()]);

        assert_that!(store.get("fr", "hero.tag"), none());
        assert_that!(store.get("id", "missing.key"), none());
        assert_that!(store.dictionary("id"), some(anything()));
        assert_that!(store.dictionary("fr"), none());
        assert_that!(
            store.locales().map(LocaleCode::as_str).collect::<Vec<_>>(),
            elements_are![eq(&"en"), eq(&"id")]
        );
    }

    #[rstest]
    fn insert_merges_same_locale() {
        let mut store = DictionaryStore::new(locale("en"));
        store.insert(LocaleDictionary::with_entries(
            locale("id"),
            [("a".to_string(), TranslationValue::Text("1".to_string()))],
        ));
        store.insert(LocaleDictionary::with_entries(
            locale("id"),
            [("b".to_string(), TranslationValue::Markup("<em>2</em>".to_string()))],
        ));

        let dictionary = store.dictionary("id").unwrap();

        assert_that!(dictionary.len(), eq(2));
        assert_that!(dictionary.get("b").map(TranslationValue::is_markup), some(eq(true)));
    }
}
