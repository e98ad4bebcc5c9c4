//! Localization controller.
//!
//! Rewrites every bound element of a [`Document`] with the dictionary value
//! of the active locale, keeps the locale selectors in sync and persists the
//! choice in a [`PreferenceStore`].

use std::sync::Arc;

use serde::Serialize;

use crate::config::BindingManifest;
use crate::dictionary::DictionaryStore;
use crate::markup::Node;
use crate::storage::PreferenceStore;
use crate::surface::Document;
use crate::types::{
    ElementId,
    LocaleCode,
};

/// Outcome of applying a locale to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    pub locale: LocaleCode,
    /// Bindings whose key had an entry and were rewritten.
    pub applied: usize,
    /// Bindings left untouched because the key has no entry.
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct LocaleController {
    dictionaries: Arc<DictionaryStore>,
    bindings: BindingManifest,
    storage_key: String,
    active: LocaleCode,
}

impl LocaleController {
    /// Creates a controller whose active locale is the base locale of `dictionaries`.
    #[must_use]
    pub fn new(
        dictionaries: Arc<DictionaryStore>,
        bindings: BindingManifest,
        storage_key: impl Into<String>,
    ) -> Self {
        let active = dictionaries.base_locale().clone();
        Self { dictionaries, bindings, storage_key: storage_key.into(), active }
    }

    #[must_use]
    pub const fn active_locale(&self) -> &LocaleCode {
        &self.active
    }

    #[must_use]
    pub fn dictionaries(&self) -> &DictionaryStore {
        &self.dictionaries
    }

    /// Rewrites every bound element with the translations of `locale`.
    ///
    /// Returns `None` without touching the document when `locale` has no
    /// dictionary. Bindings whose key is missing keep their content.
    pub fn apply_locale(&self, document: &mut dyn Document, locale: &str) -> Option<ApplyReport> {
        let Some(dictionary) = self.dictionaries.dictionary(locale) else {
            tracing::debug!("Unknown locale '{}', nothing applied", locale);
            return None;
        };

        let mut report =
            ApplyReport { locale: dictionary.locale().clone(), applied: 0, skipped: 0 };

        for (id, key) in document.elements_with_attribute(&self.bindings.text_attribute) {
            if let Some(value) = dictionary.get(&key) {
                document.set_text(&id, value.as_str());
                report.applied += 1;
            } else {
                tracing::trace!(%id, %key, locale, "No translation, keeping content");
                report.skipped += 1;
            }
        }

        for (id, key) in document.elements_with_attribute(&self.bindings.markup_attribute) {
            if let Some(value) = dictionary.get(&key) {
                document.set_children(&id, vec![Node::raw(value.as_str())]);
                report.applied += 1;
            } else {
                tracing::trace!(%id, %key, locale, "No translation, keeping content");
                report.skipped += 1;
            }
        }

        document.set_root_attribute(&self.bindings.root_locale_attribute, locale);

        tracing::debug!(
            locale,
            applied = report.applied,
            skipped = report.skipped,
            "Applied locale"
        );
        Some(report)
    }

    /// Switches to `locale` at the user's request.
    ///
    /// Marks the matching selector active, persists the choice and applies
    /// it. The choice is persisted even when this page has no dictionary for
    /// `locale`; the document then keeps its content. A failed write is
    /// logged and the locale is applied anyway.
    pub fn switch_locale(
        &mut self,
        document: &mut dyn Document,
        store: &mut dyn PreferenceStore,
        locale: &str,
    ) -> Option<ApplyReport> {
        self.update_selectors(document, locale);
        if let Err(e) = store.set(&self.storage_key, locale) {
            tracing::warn!("Failed to persist locale '{}': {}", locale, e);
        }
        self.activate(document, locale)
    }

    /// Restores the persisted locale at page start.
    ///
    /// Does nothing when no locale is stored or when the stored locale is
    /// the base locale (the markup is already authored in it). Otherwise the
    /// selectors follow the stored value and its dictionary, if any, is
    /// applied.
    pub fn restore_locale(
        &mut self,
        document: &mut dyn Document,
        store: &dyn PreferenceStore,
    ) -> Option<ApplyReport> {
        let stored = store.get(&self.storage_key)?;
        if stored == self.dictionaries.base_locale().as_str() {
            return None;
        }

        self.update_selectors(document, &stored);
        self.activate(document, &stored)
    }

    /// Locale carried by a selector control, if `id` is one.
    #[must_use]
    pub fn selector_locale(&self, document: &dyn Document, id: &ElementId) -> Option<String> {
        if !document.has_class(id, &self.bindings.selector_class) {
            return None;
        }
        document.attribute(id, &self.bindings.selector_locale_attribute)
    }

    fn activate(&mut self, document: &mut dyn Document, locale: &str) -> Option<ApplyReport> {
        let Some(report) = self.apply_locale(document, locale) else {
            tracing::debug!("No dictionary for '{}', keeping locale '{}'", locale, self.active);
            return None;
        };
        self.active = report.locale.clone();
        Some(report)
    }

    fn update_selectors(&self, document: &mut dyn Document, locale: &str) {
        for (id, value) in document.elements_with_attribute(&self.bindings.selector_locale_attribute) {
            if document.has_class(&id, &self.bindings.selector_class) {
                document.set_class(&id, &self.bindings.active_class, value == locale);
            }
        }
    }
}
