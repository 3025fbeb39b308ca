//! Entry point for the i18n application shell.

use std::net::Ipv4Addr;

use i18n_shell::{
    MockI18nService,
    TranslationStore,
    bootstrap,
    config,
};
use thiserror::Error;
use tokio::net::TcpListener;

/// Failures that abort the shell at its outer boundary.
#[derive(Error, Debug)]
enum ShellError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] i18n_shell::store::StoreError),

    #[error("Persistence task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> Result<(), ShellError> {
    tracing_subscriber::fmt().init();

    let settings = config::load(&std::env::current_dir()?)?;

    let store = TranslationStore::new(&settings.data_dir);
    let (flags, ports, persistence) = bootstrap::attach(store);
    tracing::info!(entries = flags.translations.len(), "Translation table seeded from store");

    if settings.mock_api.enabled {
        let service = MockI18nService::new(&settings.mock_api);
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, settings.mock_api.port)).await?;
        tracing::info!(port = settings.mock_api.port, "Mock i18n API listening");
        axum::serve(listener, service.into_router()).await?;
    }

    // The embedding UI runtime receives `flags` as initial configuration
    // and publishes snapshots through `ports`. Dropping the ports closes
    // the channel and lets the persistence loop drain and finish.
    drop(ports);
    persistence.await??;

    Ok(())
}
