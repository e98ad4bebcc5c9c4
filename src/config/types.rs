use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::manifest::{
    BindingManifest,
    CarouselConfig,
    FilterConfig,
    MenuConfig,
    OverlaySlots,
    PageManifest,
    StatsConfig,
};
use crate::types::LocaleCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "pages[0].name")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unknown page '{0}'")]
    UnknownPage(String),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Locale of the markup as authored; never re-applied on restore.
    pub base_locale: String,
    /// Preference key under which the chosen locale is persisted.
    pub storage_key: String,

    pub locale_files: LocaleFilesConfig,
    pub exclude_patterns: Vec<String>,

    /// Catalog of case-study entries, relative to the site root.
    pub catalog_file: String,

    /// Locales checked for completeness.
    ///
    /// - `None`: every detected locale (default)
    /// - `Some([...])`: only the listed locales
    ///
    /// Mutually exclusive with `optional_locales`.
    pub required_locales: Option<Vec<String>>,

    /// Locales whose missing keys are not reported.
    ///
    /// Mutually exclusive with `required_locales`.
    pub optional_locales: Option<Vec<String>>,

    pub bindings: BindingManifest,
    pub overlay: OverlaySlots,
    pub carousel: CarouselConfig,
    pub filter: FilterConfig,
    pub menu: MenuConfig,
    pub stats: StatsConfig,
    pub pages: Vec<PageManifest>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleFilesConfig {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl Default for LocaleFilesConfig {
    fn default() -> Self {
        Self { include_patterns: vec!["**/locales/**/*.json".to_string()], exclude_patterns: vec![] }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_locale: "en".to_string(),
            storage_key: "vnyx-lang".to_string(),
            locale_files: LocaleFilesConfig::default(),
            exclude_patterns: vec!["node_modules/**".to_string(), "target/**".to_string()],
            catalog_file: "catalog.json".to_string(),
            required_locales: None,
            optional_locales: None,
            bindings: BindingManifest::default(),
            overlay: OverlaySlots::default(),
            carousel: CarouselConfig::default(),
            filter: FilterConfig::default(),
            menu: MenuConfig::default(),
            stats: StatsConfig::default(),
            pages: PageManifest::defaults(),
        }
    }
}

impl SiteSettings {
    /// # Errors
    /// - Invalid base locale
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Duplicate page name
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if LocaleCode::parse(&self.base_locale).is_none() {
            errors.push(ValidationError::new(
                "baseLocale",
                format!("'{}' is not a valid locale code. Example: \"en\"", self.base_locale),
            ));
        }

        if self.storage_key.is_empty() {
            errors.push(ValidationError::new(
                "storageKey",
                "The storage key cannot be empty. Example: \"vnyx-lang\"",
            ));
        }

        if self.locale_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "localeFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/locales/**/*.json\"]",
            ));
        }

        let pattern_groups = [
            ("localeFiles.includePatterns", &self.locale_files.include_patterns),
            ("localeFiles.excludePatterns", &self.locale_files.exclude_patterns),
            ("excludePatterns", &self.exclude_patterns),
        ];
        for (field, patterns) in pattern_groups {
            for (index, pattern) in patterns.iter().enumerate() {
                if let Err(e) = globset::Glob::new(pattern) {
                    errors.push(ValidationError::new(
                        format!("{field}[{index}]"),
                        format!("Invalid glob pattern '{pattern}': {e}"),
                    ));
                }
            }
        }

        if self.catalog_file.is_empty() {
            errors.push(ValidationError::new(
                "catalogFile",
                "The catalog path cannot be empty. Example: \"catalog.json\"",
            ));
        }

        if self.required_locales.is_some() && self.optional_locales.is_some() {
            errors.push(ValidationError::new(
                "requiredLocales/optionalLocales",
                "Cannot specify both 'requiredLocales' and 'optionalLocales'. Please use only one",
            ));
        }

        for (field, locales) in [
            ("requiredLocales", &self.required_locales),
            ("optionalLocales", &self.optional_locales),
        ] {
            for (index, code) in locales.iter().flatten().enumerate() {
                if LocaleCode::parse(code).is_none() {
                    errors.push(ValidationError::new(
                        format!("{field}[{index}]"),
                        format!("'{code}' is not a valid locale code"),
                    ));
                }
            }
        }

        if self.stats.frame_ms == 0 {
            errors.push(ValidationError::new(
                "stats.frameMs",
                "The frame period must be greater than zero. Example: 16",
            ));
        }

        let mut seen = HashSet::new();
        for (index, page) in self.pages.iter().enumerate() {
            if page.name.is_empty() {
                errors.push(ValidationError::new(
                    format!("pages[{index}].name"),
                    "The page name cannot be empty",
                ));
            } else if !seen.insert(page.name.as_str()) {
                errors.push(ValidationError::new(
                    format!("pages[{index}].name"),
                    format!("Duplicate page name '{}'", page.name),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validated base locale. Falls back to `en` for settings that skipped validation.
    #[must_use]
    pub fn base_locale(&self) -> LocaleCode {
        LocaleCode::parse(&self.base_locale).unwrap_or_default()
    }

    #[must_use]
    pub fn page(&self, name: &str) -> Option<&PageManifest> {
        self.pages.iter().find(|page| page.name == name)
    }
}
