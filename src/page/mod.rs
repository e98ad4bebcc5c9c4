//! Page controller: the explicit application state of one page.
//!
//! A [`Page`] is built from the site settings and a [`PageManifest`]. It owns
//! the document, the preference store and every controller the manifest
//! enables, and routes [`UiEvent`]s to them one at a time.

mod event;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub use event::{
    PageEffect,
    UiEvent,
};
use serde::Serialize;

use crate::config::{
    PageManifest,
    SiteSettings,
};
use crate::indexer::types::SiteAssets;
use crate::localization::{
    ApplyReport,
    LocaleController,
};
use crate::overlay::{
    OverlayRenderer,
    OverlayState,
};
use crate::storage::PreferenceStore;
use crate::surface::Document;
use crate::types::{
    ElementId,
    EntryId,
    LocaleCode,
};
use crate::widgets::{
    Carousel,
    CounterState,
    Menu,
    PortfolioFilter,
    StatsCounter,
};

const ESCAPE: &str = "Escape";

/// Observable state of a page, emitted after every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub page: String,
    pub locale: LocaleCode,
    pub overlay: Option<OverlayState>,
    pub menu_open: Option<bool>,
    pub carousel_index: Option<usize>,
    pub filter: Option<String>,
    pub stats: Option<CounterState>,
}

pub struct Page<D> {
    name: String,
    document: D,
    store: Box<dyn PreferenceStore>,
    locale: LocaleController,
    overlay: Option<OverlayRenderer>,
    carousel: Option<Carousel>,
    filter: Option<PortfolioFilter>,
    menu: Option<Menu>,
    stats: Option<StatsCounter>,
}

impl<D: Document> Page<D> {
    /// Wires the controllers the manifest enables. Nothing is rendered until [`Self::start`].
    #[must_use]
    pub fn new(
        settings: &SiteSettings,
        manifest: &PageManifest,
        assets: &SiteAssets,
        document: D,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let dictionaries =
            Arc::new(assets.dictionaries_for(settings.base_locale(), &manifest.namespaces));
        let locale = LocaleController::new(
            dictionaries,
            settings.bindings.clone(),
            settings.storage_key.clone(),
        );

        let active_class = settings.bindings.active_class.as_str();
        let overlay = manifest.overlay.then(|| {
            OverlayRenderer::new(Arc::clone(&assets.catalog), settings.overlay.clone())
                .with_container_triggers(manifest.container_opens_overlay)
                .with_active_class(active_class)
        });
        let carousel =
            manifest.carousel.then(|| Carousel::new(&document, settings.carousel.clone()));
        let filter = manifest.filter.then(|| {
            PortfolioFilter::new(settings.filter.clone()).with_active_class(active_class)
        });
        let menu = manifest.menu.then(|| {
            Menu::new(settings.menu.clone(), ElementId::from(settings.overlay.body.as_str()))
                .with_item_close(manifest.menu_item_close)
                .with_active_class(active_class)
        });
        let stats = manifest.stats.then(|| StatsCounter::new(settings.stats.clone()));

        tracing::debug!(
            page = %manifest.name,
            overlay = overlay.is_some(),
            carousel = carousel.is_some(),
            filter = filter.is_some(),
            menu = menu.is_some(),
            stats = stats.is_some(),
            "Page wired"
        );

        Self {
            name: manifest.name.clone(),
            document,
            store,
            locale,
            overlay,
            carousel,
            filter,
            menu,
            stats,
        }
    }

    /// Restores the persisted locale and renders the carousel.
    pub fn start(&mut self) -> Option<ApplyReport> {
        let report = self.locale.restore_locale(&mut self.document, self.store.as_ref());
        if let Some(carousel) = &self.carousel {
            carousel.render(&mut self.document);
        }
        report
    }

    /// Carousel auto-advance period, when the page has a carousel with cards.
    #[must_use]
    pub fn auto_advance_interval(&self) -> Option<Duration> {
        self.carousel.as_ref().filter(|c| !c.is_empty()).and_then(Carousel::interval)
    }

    /// Handles one event to completion.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<PageEffect> {
        tracing::trace!(?event, page = %self.name, "Dispatching");
        match event {
            UiEvent::SelectLocale { locale } => {
                self.locale.switch_locale(&mut self.document, self.store.as_mut(), &locale);
                Vec::new()
            }
            UiEvent::Click { element } => self.click(&element),
            UiEvent::Key { key } => {
                if key == ESCAPE {
                    self.escape();
                }
                Vec::new()
            }
            UiEvent::OpenEntry { id } => {
                if let (Some(overlay), Some(id)) = (&mut self.overlay, EntryId::new(id)) {
                    overlay.open(&mut self.document, id);
                }
                Vec::new()
            }
            UiEvent::CloseOverlay => {
                if let Some(overlay) = &mut self.overlay {
                    overlay.close(&mut self.document);
                }
                Vec::new()
            }
            UiEvent::Filter { filter } => self.apply_filter(&filter),
            UiEvent::CarouselNext => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.next(&mut self.document);
                }
                Vec::new()
            }
            UiEvent::CarouselTick => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.tick(&mut self.document);
                }
                Vec::new()
            }
            UiEvent::CarouselPrev => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.prev(&mut self.document);
                }
                Vec::new()
            }
            UiEvent::ToggleMenu => {
                if let Some(menu) = &mut self.menu {
                    menu.toggle(&mut self.document);
                }
                Vec::new()
            }
            UiEvent::Reveal { element } => {
                if let Some(filter) = &self.filter {
                    filter.reveal(&mut self.document, &element);
                }
                Vec::new()
            }
            UiEvent::StopCarousel => vec![PageEffect::StopAutoAdvance],
            UiEvent::StatsVisible => {
                if let Some(stats) = &mut self.stats
                    && stats.start(&self.document)
                {
                    return vec![PageEffect::StartCounting { frame_ms: stats.frame_ms() }];
                }
                Vec::new()
            }
            UiEvent::CountFrame => {
                if let Some(stats) = &mut self.stats
                    && stats.advance(&mut self.document)
                {
                    return vec![PageEffect::StopCounting];
                }
                Vec::new()
            }
        }
    }

    fn click(&mut self, element: &ElementId) -> Vec<PageEffect> {
        if let Some(locale) = self.locale.selector_locale(&self.document, element) {
            self.locale.switch_locale(&mut self.document, self.store.as_mut(), &locale);
            return Vec::new();
        }

        if let Some(value) =
            self.filter.as_ref().and_then(|f| f.button_value(&self.document, element))
        {
            return self.apply_filter(&value);
        }

        if let Some(overlay) = &mut self.overlay {
            if overlay.is_close_control(element) {
                overlay.close(&mut self.document);
                return Vec::new();
            }
            if overlay.open_from_trigger(&mut self.document, element) {
                return Vec::new();
            }
        }

        if let Some(menu) = &mut self.menu {
            if menu.is_trigger(element) {
                menu.toggle(&mut self.document);
                return Vec::new();
            }
            if menu.is_item(&self.document, element) {
                menu.select_item(&mut self.document, element);
                return Vec::new();
            }
        }

        if let Some(carousel) = &mut self.carousel {
            if carousel.is_prev_control(element) {
                carousel.prev(&mut self.document);
                return Vec::new();
            }
            if carousel.is_next_control(element) {
                carousel.next(&mut self.document);
                return Vec::new();
            }
        }

        tracing::trace!(%element, "Click on inert element");
        Vec::new()
    }

    /// Escape closes the overlay first, then the menu.
    fn escape(&mut self) {
        if let Some(overlay) = &mut self.overlay
            && overlay.close(&mut self.document)
        {
            return;
        }
        if let Some(menu) = &mut self.menu {
            menu.close(&mut self.document);
        }
    }

    fn apply_filter(&mut self, value: &str) -> Vec<PageEffect> {
        let Some(filter) = &mut self.filter else {
            return Vec::new();
        };
        let reveals = filter.apply(&mut self.document, value);
        std::iter::once(PageEffect::CancelReveals)
            .chain(reveals.into_iter().map(PageEffect::ScheduleReveal))
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            page: self.name.clone(),
            locale: self.locale.active_locale().clone(),
            overlay: self.overlay.as_ref().map(OverlayRenderer::state),
            menu_open: self.menu.as_ref().map(Menu::is_open),
            carousel_index: self.carousel.as_ref().map(Carousel::index),
            filter: self.filter.as_ref().map(|f| f.active().to_string()),
            stats: self.stats.as_ref().map(StatsCounter::state),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleController {
        &self.locale
    }

    #[must_use]
    pub fn into_document(self) -> D {
        self.document
    }
}

impl<D> fmt::Debug for Page<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("name", &self.name)
            .field("locale", &self.locale)
            .field("overlay", &self.overlay)
            .field("carousel", &self.carousel)
            .field("filter", &self.filter)
            .field("menu", &self.menu)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
