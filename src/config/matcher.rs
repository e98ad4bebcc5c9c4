//! File pattern matcher for locale files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::SiteSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid locale file pattern '{pattern}': {source}")]
    InvalidLocalePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files under the site root against the configured locale file patterns.
#[derive(Debug, Clone)]
pub struct LocaleFileMatcher {
    site_root: PathBuf,
    locale_set: GlobSet,
    exclude_set: GlobSet,
    locale_exclude_set: GlobSet,
}

impl LocaleFileMatcher {
    pub fn new(site_root: PathBuf, settings: &SiteSettings) -> Result<Self, MatcherError> {
        let locale_set =
            Self::build_glob_set(&settings.locale_files.include_patterns, |pattern, source| {
                MatcherError::InvalidLocalePattern { pattern, source }
            })?;

        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        let locale_exclude_set =
            Self::build_glob_set(&settings.locale_files.exclude_patterns, |pattern, source| {
                MatcherError::InvalidExcludePattern { pattern, source }
            })?;

        Ok(Self { site_root, locale_set, exclude_set, locale_exclude_set })
    }

    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// The path must be absolute and under the site root.
    #[must_use]
    pub fn is_locale_file(&self, absolute_path: &Path) -> bool {
        let Some(relative_path) = absolute_path.strip_prefix(&self.site_root).ok() else {
            return false;
        };

        self.locale_set.is_match(relative_path)
            && !self.exclude_set.is_match(relative_path)
            && !self.locale_exclude_set.is_match(relative_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::config::LocaleFilesConfig;

    fn create_settings(include: &[&str], locale_exclude: &[&str], exclude: &[&str]) -> SiteSettings {
        SiteSettings {
            locale_files: LocaleFilesConfig {
                include_patterns: include.iter().copied().map(String::from).collect(),
                exclude_patterns: locale_exclude.iter().copied().map(String::from).collect(),
            },
            exclude_patterns: exclude.iter().copied().map(String::from).collect(),
            ..SiteSettings::default()
        }
    }

    #[rstest]
    fn is_locale_file_with_default_patterns() {
        let matcher = LocaleFileMatcher::new(PathBuf::from("/site"), &SiteSettings::default())
            .expect("valid patterns");

        assert!(matcher.is_locale_file(Path::new("/site/locales/en.json")));
        assert!(matcher.is_locale_file(Path::new("/site/locales/id/home.json")));
        assert!(matcher.is_locale_file(Path::new("/site/assets/locales/en/common.json")));

        assert!(!matcher.is_locale_file(Path::new("/site/catalog.json")));
        assert!(!matcher.is_locale_file(Path::new("/site/pages/home.json")));
        assert!(!matcher.is_locale_file(Path::new("/site/node_modules/x/locales/en.json")));
    }

    #[rstest]
    fn is_locale_file_with_locale_excludes() {
        let settings = create_settings(&["**/locales/**/*.json"], &["**/drafts/**"], &[]);
        let matcher =
            LocaleFileMatcher::new(PathBuf::from("/site"), &settings).expect("valid patterns");

        assert!(matcher.is_locale_file(Path::new("/site/locales/en/home.json")));
        assert!(!matcher.is_locale_file(Path::new("/site/locales/drafts/en.json")));
    }

    #[rstest]
    fn is_locale_file_outside_site_root() {
        let matcher = LocaleFileMatcher::new(PathBuf::from("/site"), &SiteSettings::default())
            .expect("valid patterns");

        assert!(!matcher.is_locale_file(Path::new("/other/locales/en.json")));
    }

    #[rstest]
    fn new_with_invalid_locale_pattern() {
        let settings = create_settings(&["**/*.{json"], &[], &[]);

        let result = LocaleFileMatcher::new(PathBuf::from("/site"), &settings);

        assert!(matches!(result, Err(MatcherError::InvalidLocalePattern { .. })));
    }

    #[rstest]
    fn new_with_invalid_exclude_pattern() {
        let settings = create_settings(&["**/*.json"], &[], &["[invalid"]);

        let result = LocaleFileMatcher::new(PathBuf::from("/site"), &settings);

        assert!(matches!(result, Err(MatcherError::InvalidExcludePattern { .. })));
    }
}
