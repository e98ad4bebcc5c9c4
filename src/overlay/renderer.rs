use std::sync::Arc;

use serde::Serialize;

use super::template::{
    credits_block,
    description_block,
    gallery_block,
};
use crate::catalog::ContentCatalog;
use crate::config::{
    DEFAULT_ACTIVE_CLASS,
    OverlaySlots,
};
use crate::surface::Document;
use crate::types::{
    ElementId,
    EntryId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "entry", rename_all = "camelCase")]
pub enum OverlayState {
    #[default]
    Closed,
    Open(EntryId),
}

/// Renders catalog entries into the overlay template.
///
/// `Closed --open(valid)--> Open`, `Open --close--> Closed`. Opening an
/// unknown entry never changes the state or the document.
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    catalog: Arc<ContentCatalog>,
    slots: OverlaySlots,
    container_triggers: bool,
    active_class: String,
    state: OverlayState,
}

impl OverlayRenderer {
    #[must_use]
    pub fn new(catalog: Arc<ContentCatalog>, slots: OverlaySlots) -> Self {
        Self {
            catalog,
            slots,
            container_triggers: false,
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            state: OverlayState::Closed,
        }
    }

    /// Class that shows the overlay.
    #[must_use]
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Lets a click on an entry container open the entry of its view control.
    #[must_use]
    pub const fn with_container_triggers(mut self, enabled: bool) -> Self {
        self.container_triggers = enabled;
        self
    }

    #[must_use]
    pub const fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    #[must_use]
    pub fn is_close_control(&self, id: &ElementId) -> bool {
        id.as_str() == self.slots.close
    }

    /// Renders `id` and shows the overlay. Returns `false` for unknown ids.
    pub fn open(&mut self, document: &mut dyn Document, id: EntryId) -> bool {
        let Some(entry) = self.catalog.get(id) else {
            tracing::debug!(%id, "Unknown catalog entry, overlay unchanged");
            return false;
        };

        let slot = |name: &str| ElementId::from(name);
        let hero = slot(&self.slots.hero);
        document.set_style(&hero, "background", entry.hero_background.as_deref());
        document.set_text(&slot(&self.slots.category), &entry.category);
        document.set_text(&slot(&self.slots.title), &entry.title);
        document.set_children(
            &slot(&self.slots.description),
            description_block(&self.slots.description_heading, &entry.description),
        );
        document.set_children(&slot(&self.slots.credits), credits_block(&entry.credits));
        document.set_children(
            &slot(&self.slots.gallery),
            gallery_block(&self.slots.gallery_heading, &entry.gallery),
        );

        document.set_scroll_top(&slot(&self.slots.scroll), 0);
        document.set_class(&slot(&self.slots.overlay), &self.active_class, true);
        document.set_style(&slot(&self.slots.body), "overflow", Some("hidden"));

        tracing::debug!(%id, title = %entry.title, "Opened overlay");
        self.state = OverlayState::Open(id);
        true
    }

    /// Opens an entry from a raw attribute value. Unparsable values count as unknown ids.
    pub fn open_raw(&mut self, document: &mut dyn Document, raw: &str) -> bool {
        match EntryId::parse(raw) {
            Some(id) => self.open(document, id),
            None => {
                tracing::debug!(raw, "Invalid entry id, overlay unchanged");
                false
            }
        }
    }

    /// Opens the entry behind a clicked element, if it is a trigger.
    ///
    /// A view control carries the entry id itself; an entry container
    /// resolves to the view control inside it when container triggers are
    /// enabled. Returns `false` when the element triggers nothing.
    pub fn open_from_trigger(&mut self, document: &mut dyn Document, element: &ElementId) -> bool {
        let trigger = if document.has_class(element, &self.slots.view_class) {
            Some(element.clone())
        } else if self.container_triggers
            && document.has_class(element, &self.slots.container_class)
        {
            document.descendant_with_class(element, &self.slots.view_class)
        } else {
            None
        };

        let Some(raw) =
            trigger.and_then(|id| document.attribute(&id, &self.slots.entry_attribute))
        else {
            return false;
        };
        self.open_raw(document, &raw);
        true
    }

    /// Hides the overlay and restores background scroll. No-op when closed.
    pub fn close(&mut self, document: &mut dyn Document) -> bool {
        if !self.is_open() {
            return false;
        }

        document.set_class(&ElementId::from(self.slots.overlay.as_str()), &self.active_class, false);
        document.set_style(&ElementId::from(self.slots.body.as_str()), "overflow", None);

        tracing::debug!("Closed overlay");
        self.state = OverlayState::Closed;
        true
    }
}
