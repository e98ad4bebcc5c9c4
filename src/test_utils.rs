//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のフィクスチャを提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::dictionary::{
    DictionaryStore,
    LocaleDictionary,
    TranslationValue,
};
use crate::surface::{
    Element,
    MemoryDocument,
};
use crate::types::LocaleCode;

pub(crate) fn locale(code: &str) -> LocaleCode {
    LocaleCode::parse(code).unwrap()
}

fn text(key: &str, value: &str) -> (String, TranslationValue) {
    (key.to_string(), TranslationValue::Text(value.to_string()))
}

fn markup(key: &str, value: &str) -> (String, TranslationValue) {
    (key.to_string(), TranslationValue::Markup(value.to_string()))
}

/// 英語とインドネシア語の辞書を作成する
///
/// インドネシア語には `footer.tagline` が存在しない。
pub(crate) fn sample_dictionaries() -> Arc<DictionaryStore> {
    let mut store = DictionaryStore::new(locale("en"));
    store.insert(LocaleDictionary::with_entries(
        locale("en"),
        [
            text("hero.tag", "Visual Agency"),
            markup("hero.line3", "That <em>Move</em>"),
            text("nav.work", "Work"),
            text("footer.tagline", "Crafting visual excellence since 2024."),
        ],
    ));
    store.insert(LocaleDictionary::with_entries(
        locale("id"),
        [
            text("hero.tag", "Agensi Visual"),
            markup("hero.line3", "Yang <em>Menggerakkan</em>"),
            text("nav.work", "Karya"),
        ],
    ));
    Arc::new(store)
}

/// ホームページ相当のドキュメントを作成する
///
/// 言語切り替え、翻訳バインディング、統計、ポートフォリオ、オーバーレイ、
/// カルーセル、メニューの要素をすべて含む。
pub(crate) fn home_document() -> MemoryDocument {
    let mut elements = vec![
        Element::new("body"),
        Element::new("langEn")
            .with_class("lang-btn")
            .with_class("active")
            .with_attribute("data-lang", "en")
            .with_text("EN"),
        Element::new("langId").with_class("lang-btn").with_attribute("data-lang", "id").with_text("ID"),
        Element::new("heroTag").with_attribute("data-i18n", "hero.tag").with_text("Visual Agency"),
        Element::new("heroLine3").with_attribute("data-i18n-html", "hero.line3").with_text("That Move"),
        Element::new("navWork").with_attribute("data-i18n", "nav.work").with_text("Work"),
        Element::new("footerTagline")
            .with_attribute("data-i18n", "footer.tagline")
            .with_text("Crafting visual excellence since 2024."),
        Element::new("unbound").with_attribute("data-i18n", "does.not.exist").with_text("Keep me"),
        Element::new("heroStats").with_class("hero-stats"),
        Element::new("statProjects")
            .with_parent("heroStats")
            .with_class("stat-number")
            .with_attribute("data-count", "120")
            .with_text("0"),
        Element::new("statClients")
            .with_parent("heroStats")
            .with_class("stat-number")
            .with_attribute("data-count", "85")
            .with_text("0"),
        Element::new("menuTrigger"),
        Element::new("fullscreenMenu"),
        Element::new("menuWork").with_parent("fullscreenMenu").with_class("menu-item"),
        Element::new("filterAll")
            .with_class("filter-btn")
            .with_class("active")
            .with_attribute("data-filter", "all"),
        Element::new("filterBranding").with_class("filter-btn").with_attribute("data-filter", "branding"),
        Element::new("filterMotion").with_class("filter-btn").with_attribute("data-filter", "motion"),
    ];

    for (id, category) in [(1, "branding"), (2, "uiux"), (3, "motion"), (5, "branding")] {
        elements.push(
            Element::new(format!("project{id}"))
                .with_class("portfolio-item")
                .with_class("revealed")
                .with_attribute("data-category", category),
        );
        elements.push(
            Element::new(format!("project{id}View"))
                .with_parent(format!("project{id}"))
                .with_class("portfolio-view")
                .with_attribute("data-project", &id.to_string()),
        );
    }

    elements.extend([
        Element::new("caseStudyOverlay"),
        Element::new("caseStudyClose").with_parent("caseStudyOverlay"),
        Element::new("caseStudyScroll").with_parent("caseStudyOverlay"),
        Element::new("caseStudyHero").with_parent("caseStudyScroll"),
        Element::new("csCategory").with_parent("caseStudyHero"),
        Element::new("csTitle").with_parent("caseStudyHero"),
        Element::new("csDescription").with_parent("caseStudyScroll"),
        Element::new("csCredits").with_parent("caseStudyScroll"),
        Element::new("csGallery").with_parent("caseStudyScroll"),
        Element::new("testimonialTrack"),
        Element::new("prevTestimonial"),
        Element::new("nextTestimonial"),
    ]);
    for index in 1..=3 {
        elements.push(
            Element::new(format!("testimonial{index}"))
                .with_parent("testimonialTrack")
                .with_class("testimonial-card")
                .with_width(400),
        );
    }

    MemoryDocument::from_elements(elements).unwrap()
}
