//! Binding manifests: which elements, classes and attributes each controller
//! works with, and which of them a page enables.

use serde::{
    Deserialize,
    Serialize,
};

/// Class marking the active selector, filter button, open menu or open overlay.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Attributes and classes used by the localization controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BindingManifest {
    /// Attribute carrying a translation key for plain-text replacement.
    pub text_attribute: String,
    /// Attribute carrying a translation key for markup replacement.
    pub markup_attribute: String,
    /// Attribute set on the document root after a locale is applied.
    pub root_locale_attribute: String,
    pub selector_class: String,
    pub selector_locale_attribute: String,
    pub active_class: String,
}

impl Default for BindingManifest {
    fn default() -> Self {
        Self {
            text_attribute: "data-i18n".to_string(),
            markup_attribute: "data-i18n-html".to_string(),
            root_locale_attribute: "lang".to_string(),
            selector_class: "lang-btn".to_string(),
            selector_locale_attribute: "data-lang".to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

/// Element ids of the case-study overlay template and its triggers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlaySlots {
    pub overlay: String,
    pub close: String,
    pub scroll: String,
    pub hero: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub credits: String,
    pub gallery: String,
    /// Element whose scrolling is locked while the overlay is open.
    pub body: String,
    pub view_class: String,
    pub container_class: String,
    pub entry_attribute: String,
    pub description_heading: String,
    pub gallery_heading: String,
}

impl Default for OverlaySlots {
    fn default() -> Self {
        Self {
            overlay: "caseStudyOverlay".to_string(),
            close: "caseStudyClose".to_string(),
            scroll: "caseStudyScroll".to_string(),
            hero: "caseStudyHero".to_string(),
            category: "csCategory".to_string(),
            title: "csTitle".to_string(),
            description: "csDescription".to_string(),
            credits: "csCredits".to_string(),
            gallery: "csGallery".to_string(),
            body: "body".to_string(),
            view_class: "portfolio-view".to_string(),
            container_class: "portfolio-item".to_string(),
            entry_attribute: "data-project".to_string(),
            description_heading: "About the Project".to_string(),
            gallery_heading: "Project Gallery".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    pub track: String,
    pub card_class: String,
    pub prev: String,
    pub next: String,
    pub gap_px: u32,
    /// Auto-advance period. `0` disables auto-advance.
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track: "testimonialTrack".to_string(),
            card_class: "testimonial-card".to_string(),
            prev: "prevTestimonial".to_string(),
            next: "nextTestimonial".to_string(),
            gap_px: 32,
            interval_ms: 6000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub button_class: String,
    pub filter_attribute: String,
    pub item_class: String,
    pub category_attribute: String,
    pub all_value: String,
    pub revealed_class: String,
    /// Delay between consecutive item reveals.
    pub stagger_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            button_class: "filter-btn".to_string(),
            filter_attribute: "data-filter".to_string(),
            item_class: "portfolio-item".to_string(),
            category_attribute: "data-category".to_string(),
            all_value: "all".to_string(),
            revealed_class: "revealed".to_string(),
            stagger_ms: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuConfig {
    pub trigger: String,
    pub panel: String,
    pub item_class: String,
    /// Lock background scroll while the menu is open.
    pub lock_scroll: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            trigger: "menuTrigger".to_string(),
            panel: "fullscreenMenu".to_string(),
            item_class: "menu-item".to_string(),
            lock_scroll: true,
        }
    }
}

/// Hero statistics counted up once they first come into view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsConfig {
    pub number_class: String,
    /// Attribute holding the integer a number counts up to.
    pub count_attribute: String,
    pub duration_ms: u64,
    /// Period between two displayed values. Must not be zero.
    pub frame_ms: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            number_class: "stat-number".to_string(),
            count_attribute: "data-count".to_string(),
            duration_ms: 2000,
            frame_ms: 16,
        }
    }
}

/// Menu items that close the fullscreen menu when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuItemClose {
    #[default]
    AnyItem,
    /// Only in-page anchors (`#...`) and items without a link.
    InPageLinks,
    /// Items navigate away without touching the menu.
    Never,
}

/// One page of the site and the features it wires up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageManifest {
    pub name: String,
    /// Dictionary namespaces loaded for this page, in merge order.
    #[serde(default)]
    pub namespaces: Vec<String>,
    #[serde(default)]
    pub overlay: bool,
    /// Clicking an entry container opens the entry, not only its view control.
    #[serde(default)]
    pub container_opens_overlay: bool,
    #[serde(default)]
    pub carousel: bool,
    #[serde(default)]
    pub filter: bool,
    #[serde(default)]
    pub menu: bool,
    #[serde(default)]
    pub menu_item_close: MenuItemClose,
    #[serde(default)]
    pub stats: bool,
}

impl PageManifest {
    #[must_use]
    pub fn new(name: &str, namespaces: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            namespaces: namespaces.iter().map(|ns| (*ns).to_string()).collect(),
            overlay: false,
            container_opens_overlay: false,
            carousel: false,
            filter: false,
            menu: false,
            menu_item_close: MenuItemClose::AnyItem,
            stats: false,
        }
    }

    /// The pages of the studio site.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                overlay: true,
                container_opens_overlay: true,
                carousel: true,
                filter: true,
                menu: true,
                menu_item_close: MenuItemClose::InPageLinks,
                stats: true,
                ..Self::new("home", &["common", "home"])
            },
            Self {
                overlay: true,
                container_opens_overlay: true,
                filter: true,
                menu: true,
                ..Self::new("work", &["common", "work"])
            },
            Self {
                menu: true,
                menu_item_close: MenuItemClose::Never,
                ..Self::new("initiatives", &["common", "initiatives"])
            },
        ]
    }
}
