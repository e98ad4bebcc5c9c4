//! Entry point for the `vnyx-site` command.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vnyx_site::cli::{
    Cli,
    execute,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries snapshots, so logs go to stderr
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let mut stdout = tokio::io::stdout();
    match execute(cli.command, tokio::io::stdin(), &mut stdout).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
    }
}
