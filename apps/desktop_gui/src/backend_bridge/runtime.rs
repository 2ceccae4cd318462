//! Worker thread owning the tokio runtime for transform requests.

use std::sync::Arc;
use std::thread;

use client_core::{HttpTransformClient, TransformBackend};
use crossbeam_channel::{Receiver, Sender};
use shared::protocol::{DecryptRequest, EncryptRequest};
use tokio::task::JoinHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{RequestFailure, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerStartupFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = Arc::new(HttpTransformClient::new(server_url));
        runtime.block_on(run_transform_worker(client, cmd_rx, ui_tx));
    });
}

/// Command loop. Each request runs as its own task so an encrypt and a
/// decrypt may be in flight at the same time; the UI-side single-flight
/// guard keeps each operation to at most one outstanding request.
async fn run_transform_worker(
    backend: Arc<dyn TransformBackend>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();
    while let Ok(cmd) = cmd_rx.recv() {
        in_flight.retain(|task| !task.is_finished());
        let backend = Arc::clone(&backend);
        let ui_tx = ui_tx.clone();
        in_flight.push(tokio::spawn(async move {
            handle_command(backend.as_ref(), cmd, &ui_tx).await;
        }));
    }
    // Channel closed; let outstanding requests finish their cleanup events.
    for task in in_flight {
        let _ = task.await;
    }
}

/// Exactly one completion event per command, sent from a single point after
/// the backend call resolves, whatever the outcome.
async fn handle_command(backend: &dyn TransformBackend, cmd: BackendCommand, ui_tx: &Sender<UiEvent>) {
    let event = match cmd {
        BackendCommand::Encrypt { plaintext, key_hex } => {
            tracing::debug!(chars = plaintext.chars().count(), "backend: encrypt");
            let result = backend
                .encrypt(&EncryptRequest { plaintext, key_hex })
                .await;
            if let Err(err) = &result {
                tracing::error!("backend: encrypt failed: {err}");
            }
            UiEvent::EncryptFinished(result.map_err(RequestFailure::from))
        }
        BackendCommand::Decrypt {
            ciphertext_hex,
            key_hex,
        } => {
            tracing::debug!(hex_len = ciphertext_hex.len(), "backend: decrypt");
            let result = backend
                .decrypt(&DecryptRequest {
                    ciphertext_hex,
                    key_hex,
                })
                .await;
            if let Err(err) = &result {
                tracing::error!("backend: decrypt failed: {err}");
            }
            UiEvent::DecryptFinished(result.map_err(RequestFailure::from))
        }
    };
    let _ = ui_tx.try_send(event);
}
