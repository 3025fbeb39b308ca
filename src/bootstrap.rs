//! Application bootstrap.
//!
//! Wires the local translation store to the UI runtime at the two points
//! of its lifecycle where translations cross the boundary:
//!
//! - **Startup**: the persisted table is loaded into [`InitFlags`] and
//!   handed to the runtime as initial configuration.
//! - **Ongoing**: the runtime pushes full replacement snapshots through
//!   [`AppPorts::store_translations`]; a single consumer task persists
//!   each one, in arrival order, with no acknowledgment.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::store::{
    StoreError,
    TranslationStore,
};
use crate::types::TranslationTable;

/// Initial configuration payload for the UI runtime.
#[derive(Debug, Clone, Default)]
pub struct InitFlags {
    /// Seed for the runtime's in-memory translation state.
    pub translations: TranslationTable,
}

/// Outbound channel endpoints handed to the UI runtime.
///
/// The runtime is the sole producer; dropping the ports closes the
/// channel and lets the persistence task finish.
#[derive(Debug, Clone)]
pub struct AppPorts {
    /// Fire-and-forget snapshot channel. Each message is a wholesale
    /// replacement of the translation table, never a partial merge.
    pub store_translations: mpsc::UnboundedSender<TranslationTable>,
}

/// Load the store and start the persistence loop.
///
/// Returns the runtime's initial flags, the ports to hand to it, and the
/// join handle of the consumer task. The task processes snapshots
/// strictly sequentially, so later writes always land after earlier ones.
/// It ends when the ports are dropped, or with the first [`StoreError`].
/// A failing store is fatal; there is no retry.
#[must_use]
pub fn attach(store: TranslationStore) -> (InitFlags, AppPorts, JoinHandle<Result<(), StoreError>>) {
    let flags = InitFlags { translations: store.load() };
    let (sender, receiver) = mpsc::unbounded_channel();

    let handle = tokio::spawn(persist_snapshots(store, receiver));

    (flags, AppPorts { store_translations: sender }, handle)
}

/// Sole consumer of the snapshot channel.
async fn persist_snapshots(
    store: TranslationStore,
    mut receiver: mpsc::UnboundedReceiver<TranslationTable>,
) -> Result<(), StoreError> {
    while let Some(table) = receiver.recv().await {
        // Diagnostic only, mirrors what the runtime sent
        tracing::info!(payload = ?table, "ports.store_translations");

        if let Err(error) = store.save(&table) {
            tracing::error!(%error, "Persisting translation snapshot failed, stopping");
            return Err(error);
        }
    }

    tracing::debug!("Snapshot channel closed, persistence loop done");
    Ok(())
}
