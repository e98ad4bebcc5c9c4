//! Site root indexing.
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use ignore::WalkBuilder;

use crate::catalog::ContentCatalog;
use crate::config::{
    LocaleFileMatcher,
    SiteSettings,
};
use crate::dictionary::LocaleFile;
use crate::indexer::types::{
    IndexerError,
    SiteAssets,
};

/// Loads the locale files and the catalog of a site.
#[derive(Clone, Debug)]
pub struct SiteIndexer {
    site_root: PathBuf,
    matcher: LocaleFileMatcher,
    catalog_path: PathBuf,
}

impl SiteIndexer {
    /// 新しいインデクサーを作成
    ///
    /// # Errors
    /// ロケールファイルのパターンが不正な場合
    pub fn new(site_root: &Path, settings: &SiteSettings) -> Result<Self, IndexerError> {
        let matcher = LocaleFileMatcher::new(site_root.to_path_buf(), settings)?;
        Ok(Self {
            site_root: site_root.to_path_buf(),
            matcher,
            catalog_path: site_root.join(&settings.catalog_file),
        })
    }

    /// サイトをインデックス
    ///
    /// 読み込めないロケールファイルは警告を出してスキップします。
    /// カタログファイルが存在しない場合は組み込みのカタログを使います。
    ///
    /// # Errors
    /// カタログファイルが存在するが読み込めない場合
    pub async fn index_site(&self) -> Result<SiteAssets, IndexerError> {
        tracing::debug!(site_root = %self.site_root.display(), "Indexing site");

        let files = self.find_locale_files();
        // 並列処理でファイルを読み込み
        let futures: Vec<_> = files.iter().map(|file| Self::load_locale_file(file)).collect();
        let locale_files: Vec<LocaleFile> =
            futures::future::join_all(futures).await.into_iter().flatten().collect();

        tracing::debug!(count = locale_files.len(), "Loaded locale files");

        let catalog = self.load_catalog().await?;

        Ok(SiteAssets { locale_files, catalog: Arc::new(catalog) })
    }

    /// 単一のロケールファイルを読み込み
    async fn load_locale_file(file_path: &Path) -> Option<LocaleFile> {
        let content = match tokio::fs::read_to_string(file_path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read file {:?}: {}", file_path, e);
                return None;
            }
        };

        match LocaleFile::parse(file_path, &content) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!("Skipping locale file {:?}: {}", file_path, e);
                None
            }
        }
    }

    async fn load_catalog(&self) -> Result<ContentCatalog, IndexerError> {
        match tokio::fs::read_to_string(&self.catalog_path).await {
            Ok(content) => {
                tracing::debug!("Loading catalog from: {:?}", self.catalog_path);
                Ok(ContentCatalog::parse(&content)?)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No catalog at {:?}, using the studio catalog", self.catalog_path);
                Ok(ContentCatalog::studio())
            }
            Err(e) => Err(IndexerError::Catalog(e.into())),
        }
    }

    /// ロケールファイルを検索
    fn find_locale_files(&self) -> Vec<PathBuf> {
        let mut found_files = Vec::new();

        // ignore クレートでファイルを走査
        for result in WalkBuilder::new(&self.site_root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            // ファイルのみを対象
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            if self.matcher.is_locale_file(entry.path()) {
                found_files.push(entry.path().to_path_buf());
            }
        }

        found_files.sort();
        found_files
    }
}
