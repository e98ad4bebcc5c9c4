use serde::{
    Deserialize,
    Serialize,
};

/// Value of a translation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationValue {
    /// Replaces an element's text content as-is.
    Text(String),
    /// Trusted fragment that may carry inline emphasis tags (`<em>`, `<br>`, ...).
    Markup(String),
}

impl TranslationValue {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(value) | Self::Markup(value) => value,
        }
    }

    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }
}
