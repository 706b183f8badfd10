//! pstore — a terminal client for a personal file-storage service.
//!
//! This binary loads configuration, wires the core synchronizer to the
//! HTTP API and the on-disk token, and runs one subcommand.

mod app;
mod cli;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use pstore_core::{Config, FileCredentialStore, FileListSynchronizer, HttpFileApi, SessionGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "pstore_cli=info,pstore_core=info";

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<Config> {
    let path = explicit.or_else(|| std::env::var("PSTORE_CONFIG").map(PathBuf::from).ok());
    let config = match path {
        Some(path) => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    Ok(config.apply_env())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so listings on stdout stay pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let token_path = config
        .session
        .resolve_token_path()
        .context("cannot determine token location; set PSTORE_TOKEN_PATH")?;
    tracing::debug!("using token file {}", token_path.display());

    let guard = SessionGuard::new(
        Arc::new(FileCredentialStore::new(token_path)),
        config.session.logout_delay(),
    );
    let api = Arc::new(HttpFileApi::new(&config.api)?);
    let mut sync = FileListSynchronizer::new(api, guard);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let outcome = app::run(
        &mut sync,
        cli.command,
        &config.session.login_url,
        &mut stdout,
        &mut stderr,
    )
    .await?;

    Ok(outcome.into())
}
