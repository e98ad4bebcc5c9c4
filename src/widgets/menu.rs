use crate::config::{
    DEFAULT_ACTIVE_CLASS,
    MenuConfig,
    MenuItemClose,
};
use crate::surface::Document;
use crate::types::ElementId;

/// Fullscreen navigation menu.
#[derive(Debug, Clone)]
pub struct Menu {
    config: MenuConfig,
    body: ElementId,
    item_close: MenuItemClose,
    active_class: String,
    open: bool,
}

impl Menu {
    #[must_use]
    pub fn new(config: MenuConfig, body: ElementId) -> Self {
        Self {
            config,
            body,
            item_close: MenuItemClose::default(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            open: false,
        }
    }

    #[must_use]
    pub const fn with_item_close(mut self, item_close: MenuItemClose) -> Self {
        self.item_close = item_close;
        self
    }

    #[must_use]
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_trigger(&self, id: &ElementId) -> bool {
        id.as_str() == self.config.trigger
    }

    #[must_use]
    pub fn is_item(&self, document: &dyn Document, id: &ElementId) -> bool {
        document.has_class(id, &self.config.item_class)
    }

    pub fn toggle(&mut self, document: &mut dyn Document) {
        self.set_open(document, !self.open);
    }

    /// Closes the menu. Returns `false` when it was already closed.
    pub fn close(&mut self, document: &mut dyn Document) -> bool {
        if !self.open {
            return false;
        }
        self.set_open(document, false);
        true
    }

    /// Handles a click on a menu item. Returns `true` when the menu closed.
    pub fn select_item(&mut self, document: &mut dyn Document, id: &ElementId) -> bool {
        let closes = match self.item_close {
            MenuItemClose::AnyItem => true,
            MenuItemClose::InPageLinks => {
                document.attribute(id, "href").is_none_or(|href| href.starts_with('#'))
            }
            MenuItemClose::Never => false,
        };
        closes && self.close(document)
    }

    fn set_open(&mut self, document: &mut dyn Document, open: bool) {
        let active = self.active_class.as_str();
        document.set_class(&ElementId::from(self.config.panel.as_str()), active, open);
        document.set_class(&ElementId::from(self.config.trigger.as_str()), active, open);
        if self.config.lock_scroll {
            document.set_style(&self.body, "overflow", open.then_some("hidden"));
        }
        tracing::debug!(open, "Menu toggled");
        self.open = open;
    }
}
