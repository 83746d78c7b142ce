//! Data bridge: connects a page flow's [`ViewStream`] to TUI actions.
//!
//! Each page spawns one bridge when it mounts. The bridge pushes the
//! current state immediately, then forwards every change until the page's
//! token is cancelled or the flow is dropped.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use homedash_core::{LoadState, ViewStream};

use crate::action::Action;

/// Spawn a bridge forwarding `stream` into `action_tx`, wrapping each
/// state with `wrap` (e.g. `Action::RoomsUpdated`).
pub fn spawn_data_bridge<T, F>(
    mut stream: ViewStream<T>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
    wrap: F,
) where
    T: Clone + Send + Sync + 'static,
    F: Fn(LoadState<T>) -> Action + Send + 'static,
{
    tokio::spawn(async move {
        // Initial snapshot so the page renders without waiting for a change
        if action_tx.send(wrap(stream.current().clone())).is_err() {
            return;
        }

        loop {
            tokio::select! {
                biased;

                () = cancel.cancelled() => break,

                changed = stream.changed() => {
                    let Some(state) = changed else { break };
                    if action_tx.send(wrap(state)).is_err() {
                        break;
                    }
                }
            }
        }

        debug!("data bridge shut down");
    });
}

#[cfg(test)]
mod tests {
    use homedash_core::ViewStore;

    use super::*;

    #[tokio::test]
    async fn forwards_initial_state_then_changes() {
        let store: ViewStore<u32> = ViewStore::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        spawn_data_bridge(store.subscribe(), tx, cancel.clone(), |state| {
            Action::Notify(crate::action::Notification::info(match state {
                LoadState::Ready(v) => format!("ready {v}"),
                LoadState::Loading => "loading".into(),
                LoadState::Idle => "idle".into(),
                LoadState::Error(e) => e,
            }))
        });

        let first = rx.recv().await;
        assert!(matches!(first, Some(Action::Notify(n)) if n.message == "idle"));

        store.set_ready(3);
        let next = rx.recv().await;
        assert!(matches!(next, Some(Action::Notify(n)) if n.message == "ready 3"));

        cancel.cancel();
    }
}
