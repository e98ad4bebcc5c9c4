//! Completeness check of translations against the base locale.

use std::fmt;

use super::DictionaryStore;
use crate::types::LocaleCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoverageKind {
    /// Key of the base locale absent from another locale.
    Missing,
    /// Key of another locale absent from the base locale.
    Orphaned,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoverageDiagnostic {
    pub locale: LocaleCode,
    pub kind: CoverageKind,
    pub key: String,
}

impl fmt::Display for CoverageDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CoverageKind::Missing => {
                write!(f, "[{}] missing translation for key '{}'", self.locale, self.key)
            }
            CoverageKind::Orphaned => {
                write!(f, "[{}] key '{}' does not exist in the base locale", self.locale, self.key)
            }
        }
    }
}

/// 基準ロケールと他のロケールのキーを比較し、欠落キーと孤立キーを報告する
///
/// # Arguments
/// * `store` - 検査対象の辞書
/// * `required_locales` - 指定時はこのロケールのみ検査
/// * `optional_locales` - 指定時はこのロケールを検査しない
///
/// # Returns
/// ロケール・種別・キー順にソートされた診断のリスト
pub fn check_coverage(
    store: &DictionaryStore,
    required_locales: Option<&[String]>,
    optional_locales: Option<&[String]>,
) -> Vec<CoverageDiagnostic> {
    let base = store.base_locale();
    let Some(base_dictionary) = store.dictionary(base.as_str()) else {
        tracing::warn!("No dictionary for base locale '{}'; skipping coverage check", base);
        return Vec::new();
    };

    let mut diagnostics = Vec::new();
    for locale in store.locales().filter(|locale| *locale != base) {
        let code = locale.as_str();
        if required_locales.is_some_and(|required| !required.iter().any(|r| r == code)) {
            continue;
        }
        if optional_locales.is_some_and(|optional| optional.iter().any(|o| o == code)) {
            continue;
        }
        let Some(dictionary) = store.dictionary(code) else {
            continue;
        };

        diagnostics.extend(
            base_dictionary.keys().filter(|key| !dictionary.contains_key(key)).map(|key| {
                CoverageDiagnostic {
                    locale: locale.clone(),
                    kind: CoverageKind::Missing,
                    key: key.to_string(),
                }
            }),
        );
        diagnostics.extend(
            dictionary.keys().filter(|key| !base_dictionary.contains_key(key)).map(|key| {
                CoverageDiagnostic {
                    locale: locale.clone(),
                    kind: CoverageKind::Orphaned,
                    key: key.to_string(),
                }
            }),
        );
    }

    diagnostics.sort();
    for diagnostic in &diagnostics {
        tracing::warn!("{}", diagnostic);
    }
    diagnostics
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::dictionary::{
        LocaleDictionary,
        TranslationValue,
    };

    fn dictionary(code: &str, keys: &[&str]) -> LocaleDictionary {
        LocaleDictionary::with_entries(
            LocaleCode::parse(code).unwrap(),
            keys.iter().map(|k| ((*k).to_string(), TranslationValue::Text((*k).to_string()))),
        )
    }

    #[fixture]
    fn store() -> DictionaryStore {
        let mut store = DictionaryStore::new(LocaleCode::parse("en").unwrap());
        store.insert(dictionary("en", &["hero.tag", "hero.line1", "nav.work"]));
        store.insert(dictionary("id", &["hero.tag", "nav.work", "nav.legacy"]));
        store.insert(dictionary("ja", &["hero.tag"]));
        store
    }

    #[rstest]
    fn reports_missing_and_orphaned_keys(store: DictionaryStore) {
        let diagnostics = check_coverage(&store, Some(&["id".to_string()]), None);

        assert_that!(
            diagnostics,
            elements_are![
                all![
                    field!(CoverageDiagnostic.kind, eq(&CoverageKind::Missing)),
                    field!(CoverageDiagnostic.key, eq("hero.line1"))
                ],
                all![
                    field!(CoverageDiagnostic.kind, eq(&CoverageKind::Orphaned)),
                    field!(CoverageDiagnostic.key, eq("nav.legacy"))
                ]
            ]
        );
    }

    #[rstest]
    fn checks_every_locale_by_default(store: DictionaryStore) {
        let diagnostics = check_coverage(&store, None, None);

        let ja_missing = diagnostics
            .iter()
            .filter(|d| d.locale.as_str() == "ja" && d.kind == CoverageKind::Missing)
            .count();
        assert_that!(diagnostics, len(eq(4)));
        assert_that!(ja_missing, eq(2));
    }

    #[rstest]
    fn optional_locales_are_skipped(store: DictionaryStore) {
        let diagnostics = check_coverage(&store, None, Some(&["ja".to_string()]));

        let id = LocaleCode::parse("id").unwrap();

        assert_that!(diagnostics, each(field!(CoverageDiagnostic.locale, eq(&id))));
        assert_that!(diagnostics, len(eq(2)));
    }

    #[rstest]
    fn complete_translations_report_nothing() {
        let mut store = DictionaryStore::new(LocaleCode::parse("en").unwrap());
        store.insert(dictionary("en", &["a", "b"]));
        store.insert(dictionary("id", &["b", "a"]));

        assert_that!(check_coverage(&store, None, None), is_empty());
    }

    #[rstest]
    fn missing_base_dictionary_reports_nothing() {
        let mut store = DictionaryStore::new(LocaleCode::parse("en").unwrap());
        store.insert(dictionary("id", &["a"]));

        assert_that!(check_coverage(&store, None, None), is_empty());
    }

    #[rstest]
    fn display_names_locale_and_key() {
        let diagnostic = CoverageDiagnostic {
            locale: LocaleCode::parse("id").unwrap(),
            kind: CoverageKind::Missing,
            key: "hero.line1".to_string(),
        };

        assert_that!(diagnostic.to_string(), eq("[id] missing translation for key 'hero.line1'"));
    }
}
