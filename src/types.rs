//! Core types used throughout the project.

use std::borrow::Borrow;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A validated language identifier such as `en`, `id` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parses a locale code.
    ///
    /// Accepts a 2-3 letter lowercase primary subtag optionally followed by
    /// `-` or `_` separated alphanumeric subtags of 2-8 characters.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let mut parts = code.split(['-', '_']);
        let primary = parts.next()?;
        if !(2..=3).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }
        for subtag in parts {
            if !(2..=8).contains(&subtag.len()) || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return None;
            }
        }
        Some(Self(code.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid locale code '{value}'"))
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

/// Identifier of a catalog entry. Always positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct EntryId(u32);

impl EntryId {
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 { None } else { Some(Self(id)) }
    }

    /// Parses an entry id from an attribute value (e.g. `data-project="3"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<u32>().ok().and_then(Self::new)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for EntryId {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "entry id must be positive".to_string())
    }
}

impl From<EntryId> for u32 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an element on the rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::english("en", true)]
    #[case::indonesian("id", true)]
    #[case::three_letters("kok", true)]
    #[case::region_hyphen("pt-BR", true)]
    #[case::region_underscore("en_us", true)]
    #[case::script_and_region("sr-Cyrl-BA", true)]
    #[case::empty("", false)]
    #[case::single_letter("e", false)]
    #[case::word("home", false)]
    #[case::uppercase_primary("EN", false)]
    #[case::trailing_separator("en-", false)]
    #[case::long_subtag("en-abcdefghi", false)]
    fn test_locale_code_parse(#[case] code: &str, #[case] valid: bool) {
        assert_that!(LocaleCode::parse(code).is_some(), eq(valid));
    }

    #[rstest]
    #[case::plain("3", Some(3))]
    #[case::padded(" 12 ", Some(12))]
    #[case::zero("0", None)]
    #[case::negative("-1", None)]
    #[case::text("abc", None)]
    #[case::empty("", None)]
    fn test_entry_id_parse(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_that!(EntryId::parse(value).map(EntryId::get), eq(expected));
    }

    #[googletest::test]
    fn test_locale_code_deserialize_rejects_invalid() {
        let parsed: std::result::Result<LocaleCode, _> = serde_json::from_str("\"id\"");
        let bad: std::result::Result<LocaleCode, _> = serde_json::from_str("\"Indonesian\"");

        expect_that!(parsed.map(|code| code.to_string()), ok(eq("id")));
        expect_that!(bad.is_err(), eq(true));
    }
}
