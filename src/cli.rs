//! Command-line interface.
//!
//! `run` drives one page from JSON-line events, `check` reports the
//! completeness of the locale dictionaries.

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use serde::Serialize;
use thiserror::Error;
use tokio::io::{
    AsyncRead,
    AsyncWrite,
    AsyncWriteExt,
};

use crate::config::{
    ConfigError,
    ConfigManager,
};
use crate::dictionary::{
    CoverageKind,
    check_coverage,
};
use crate::driver::{
    self,
    DriverError,
};
use crate::indexer::types::{
    IndexerError,
    SiteAssets,
};
use crate::indexer::workspace::SiteIndexer;
use crate::page::Page;
use crate::storage::{
    FileStore,
    MemoryStore,
    PreferenceStore,
};
use crate::surface::{
    DocumentError,
    MemoryDocument,
};

/// Directory of serialized page documents, relative to the site root.
const PAGES_DIR: &str = "pages";

#[derive(Parser, Debug)]
#[command(name = "vnyx-site", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Drive a page from JSON events on stdin, one snapshot per line on stdout.
    Run {
        /// Site root containing `.vnyx-site.json`, locales and pages.
        root: PathBuf,

        /// Page to drive.
        #[arg(long, default_value = "home")]
        page: String,

        /// JSON file persisting the locale choice. In-memory when omitted.
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Report missing and orphaned translations.
    Check {
        /// Site root containing `.vnyx-site.json` and locales.
        root: PathBuf,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Indexer(#[from] IndexerError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("Failed to serialize diagnostic: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `check` found translations missing from a checked locale.
    MissingTranslations,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::MissingTranslations => Self::FAILURE,
        }
    }
}

/// Runs `command`, reading events from `input` and writing to `output`.
pub async fn execute<R, W>(command: Command, input: R, output: &mut W) -> Result<Outcome, CliError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match command {
        Command::Run { root, page, state } => {
            run_page(&root, &page, state, input, output).await?;
            Ok(Outcome::Success)
        }
        Command::Check { root } => check_site(&root, output).await,
    }
}

async fn load_site(root: &Path) -> Result<(ConfigManager, SiteAssets), CliError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(root.to_path_buf()))?;
    let indexer = SiteIndexer::new(root, config_manager.get_settings())?;
    let assets = indexer.index_site().await?;
    Ok((config_manager, assets))
}

async fn run_page<R, W>(
    root: &Path,
    name: &str,
    state: Option<PathBuf>,
    input: R,
    output: &mut W,
) -> Result<(), CliError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (config_manager, assets) = load_site(root).await?;
    let manifest = config_manager.page(name)?;
    let document = MemoryDocument::load(&root.join(PAGES_DIR).join(format!("{name}.json")))?;
    let store: Box<dyn PreferenceStore> = match state {
        Some(path) => Box::new(FileStore::open(path)),
        None => Box::new(MemoryStore::new()),
    };

    let mut page = Page::new(config_manager.get_settings(), manifest, &assets, document, store);
    if let Some(report) = page.start() {
        tracing::info!(locale = %report.locale, applied = report.applied, "Restored locale");
    }

    driver::run(&mut page, input, output).await?;
    Ok(())
}

/// One line of `check` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckLine<'a> {
    /// `missing` or `orphaned`.
    kind: &'a str,
    locale: &'a str,
    key: &'a str,
    message: String,
}

async fn check_site<W>(root: &Path, output: &mut W) -> Result<Outcome, CliError>
where
    W: AsyncWrite + Unpin,
{
    let (config_manager, assets) = load_site(root).await?;
    let settings = config_manager.get_settings();
    let store = assets.all_dictionaries(settings.base_locale());
    let diagnostics = check_coverage(
        &store,
        settings.required_locales.as_deref(),
        settings.optional_locales.as_deref(),
    );

    for diagnostic in &diagnostics {
        let line = CheckLine {
            kind: match diagnostic.kind {
                CoverageKind::Missing => "missing",
                CoverageKind::Orphaned => "orphaned",
            },
            locale: diagnostic.locale.as_str(),
            key: &diagnostic.key,
            message: diagnostic.to_string(),
        };
        let mut payload = serde_json::to_vec(&line)?;
        payload.push(b'\n');
        output.write_all(&payload).await?;
    }
    output.flush().await?;

    if diagnostics.iter().any(|d| d.kind == CoverageKind::Missing) {
        Ok(Outcome::MissingTranslations)
    } else {
        Ok(Outcome::Success)
    }
}
