//! Site configuration: settings file, validation and binding manifests.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Binding and page manifests
mod manifest;
/// Locale file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use manifest::{
    BindingManifest,
    CarouselConfig,
    DEFAULT_ACTIVE_CLASS,
    FilterConfig,
    MenuConfig,
    MenuItemClose,
    OverlaySlots,
    PageManifest,
    StatsConfig,
};
pub use matcher::{
    LocaleFileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    LocaleFilesConfig,
    SiteSettings,
    ValidationError,
};
