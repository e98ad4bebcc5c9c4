//! Locale file parsing.

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::Path;
use std::sync::LazyLock;

use jsonc_parser::ParseOptions;
use serde_json::Value;

use super::{
    DictionaryError,
    TranslationValue,
};
use crate::types::LocaleCode;

/// Key of the single-entry object marking a markup value: `{"html": "..."}`.
const MARKUP_KEY: &str = "html";

/// Parent directories that never name a namespace.
const COMMON_PARENTS: [&str; 6] = ["locales", "messages", "translations", "i18n", "lang", "langs"];

/// ISO 639-1 language codes
/// Based on <https://www.loc.gov/standards/iso639-2/php/code_list.php>
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
        "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce",
        "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de", "dv", "dz", "ee",
        "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
        "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
        "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is",
        "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn",
        "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
        "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms",
        "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
        "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu",
        "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
        "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta",
        "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw",
        "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
        "yo", "za", "zh", "zu",
    ]
    .into_iter()
    .collect()
});

/// A parsed locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub locale: LocaleCode,
    /// Namespace inferred from the file path (e.g., "common", "home").
    pub namespace: Option<String>,
    pub path: String,
    /// Flattened key map (e.g., "hero.tag" -> Text("Visual Agency")).
    pub entries: HashMap<String, TranslationValue>,
}

impl LocaleFile {
    /// Parses the content of a locale file found at `path`.
    ///
    /// # Errors
    /// - No locale code in the path
    /// - Invalid JSON (comments and trailing commas are accepted)
    /// - Top level is not an object
    pub fn parse(path: &Path, content: &str) -> Result<Self, DictionaryError> {
        let locale = detect_locale_from_path(path)
            .ok_or_else(|| DictionaryError::UnknownLocale(path.display().to_string()))?;

        let json = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| DictionaryError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
            .unwrap_or(Value::Object(serde_json::Map::new()));

        if !json.is_object() {
            return Err(DictionaryError::NotAnObject(path.display().to_string()));
        }

        Ok(Self {
            locale,
            namespace: detect_namespace_from_path(path),
            path: path.to_string_lossy().to_string(),
            entries: flatten_entries(&json, "."),
        })
    }

    /// Reads and parses a locale file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }
}

/// Detect the locale of a file from its path.
///
/// Splits the path by '/' and '.', then searches backwards for a part whose
/// primary subtag is a known language code.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `locales/id/home.json` → `id`
/// - `locales/home/pt-BR.json` → `pt-BR`
/// - `locales/en/faq.json` → `en`
fn detect_locale_from_path(path: &Path) -> Option<LocaleCode> {
    let path_str = path.to_string_lossy();
    path_str.split(['/', '\\', '.']).rev().find_map(known_locale)
}

/// Parses `part` as a locale code when its primary subtag is a known language.
fn known_locale(part: &str) -> Option<LocaleCode> {
    let code = LocaleCode::parse(part)?;
    let primary = code.as_str().split(['-', '_']).next()?;
    LANGUAGE_CODES.contains(primary).then_some(code)
}

/// Detect namespace from file path.
///
/// # Examples
/// - `locales/en/home.json` -> Some("home") (file name is namespace)
/// - `locales/home/en.json` -> Some("home") (directory name is namespace)
/// - `locales/en.json` -> None (single file)
fn detect_namespace_from_path(path: &Path) -> Option<String> {
    let file_stem = path.file_stem()?.to_string_lossy().to_string();
    if known_locale(&file_stem).is_none() {
        return Some(file_stem);
    }

    let parent_name = path.parent()?.file_name()?.to_string_lossy().to_string();
    if known_locale(&parent_name).is_none()
        && !COMMON_PARENTS.contains(&parent_name.to_lowercase().as_str())
    {
        return Some(parent_name);
    }

    None
}

/// Flatten a nested JSON object into a dot-separated key map.
///
/// Leaf strings become [`TranslationValue::Text`]; `{"html": "..."}` leaves
/// become [`TranslationValue::Markup`].
#[must_use]
pub fn flatten_entries(json: &Value, separator: &str) -> HashMap<String, TranslationValue> {
    let mut result = HashMap::new();
    flatten_value(json, separator, None, &mut result);
    result
}

fn flatten_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, TranslationValue>,
) {
    match json {
        Value::Object(map) => {
            if let (Some(key), Some(Value::String(html))) = (prefix, markup_leaf(map)) {
                result.insert(key.to_string(), TranslationValue::Markup(html.clone()));
                return;
            }
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), TranslationValue::Text(s.clone()));
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), TranslationValue::Text(json.to_string()));
            }
        }
    }
}

fn markup_leaf(map: &serde_json::Map<String, Value>) -> Option<&Value> {
    if map.len() == 1 { map.get(MARKUP_KEY) } else { None }
}
