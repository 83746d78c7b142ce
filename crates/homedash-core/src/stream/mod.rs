// ── Reactive view streams ──
//
// Subscription type for consuming a page's view-state changes.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::LoadState;

/// A subscription to one page's [`LoadState`].
///
/// Provides point-in-time access and change notification via
/// [`changed()`](Self::changed) or by converting to a `Stream`.
pub struct ViewStream<T> {
    current: LoadState<T>,
    receiver: watch::Receiver<LoadState<T>>,
}

impl<T: Clone + Send + Sync + 'static> ViewStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<LoadState<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The state captured at creation time or at the last `changed()`.
    pub fn current(&self) -> &LoadState<T> {
        &self.current
    }

    /// The latest state (may have changed since creation).
    pub fn latest(&self) -> LoadState<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new state.
    /// Returns `None` once the owning flow has been dropped.
    pub async fn changed(&mut self) -> Option<LoadState<T>> {
        self.receiver.changed().await.ok()?;
        let state = self.receiver.borrow_and_update().clone();
        self.current = state.clone();
        Some(state)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> ViewWatchStream<T> {
        ViewWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`. Yields the current
/// state first, then every subsequent change.
pub struct ViewWatchStream<T> {
    inner: WatchStream<LoadState<T>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for ViewWatchStream<T> {
    type Item = LoadState<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
