// ── Reactive view-state store ──
//
// One store per page. The page's flow writes, the presentation layer reads
// through `watch` receivers and re-renders on every change.

use std::sync::Arc;

use tokio::sync::watch;

use crate::stream::ViewStream;

/// Lifecycle of a page's data: `Idle → Loading → Ready | Error`.
#[derive(Debug)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(Arc<T>),
    /// Message shown to the user as `Error: {message}`.
    Error(String),
}

// Manual impl: `derive(Clone)` would require `T: Clone`.
impl<T> Clone for LoadState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Ready(snap) => Self::Ready(Arc::clone(snap)),
            Self::Error(msg) => Self::Error(msg.clone()),
        }
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&Arc<T>> {
        match self {
            Self::Ready(snap) => Some(snap),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Holds one page's fetched entities and derived UI flags.
///
/// Every mutation publishes a new [`LoadState`] to all subscribers.
/// Ready snapshots are `Arc`-shared; [`modify`](Self::modify) clones on
/// write only when a subscriber still holds the previous snapshot.
pub struct ViewStore<T> {
    state: watch::Sender<LoadState<T>>,
}

impl<T: Clone + Send + Sync + 'static> ViewStore<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self { state }
    }

    /// Current state (cheap `Arc` clone).
    pub fn current(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    /// The ready snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<T>> {
        self.state.borrow().ready().cloned()
    }

    pub fn subscribe(&self) -> ViewStream<T> {
        ViewStream::new(self.state.subscribe())
    }

    pub fn set_loading(&self) {
        self.state.send_replace(LoadState::Loading);
    }

    pub fn set_ready(&self, value: T) -> Arc<T> {
        let snap = Arc::new(value);
        self.state.send_replace(LoadState::Ready(Arc::clone(&snap)));
        snap
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.state.send_replace(LoadState::Error(message.into()));
    }

    /// Mutate the ready snapshot in place and publish it.
    ///
    /// Returns `None` (and publishes nothing) unless the store is `Ready`.
    pub fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut out = None;
        self.state.send_if_modified(|state| match state {
            LoadState::Ready(snap) => {
                out = Some(f(Arc::make_mut(snap)));
                true
            }
            _ => false,
        });
        out
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ViewStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_then_walks_lifecycle() {
        let store: ViewStore<Vec<u32>> = ViewStore::new();
        assert!(matches!(store.current(), LoadState::Idle));

        store.set_loading();
        assert!(store.current().is_loading());

        store.set_ready(vec![1, 2]);
        assert_eq!(store.snapshot().unwrap().as_slice(), &[1, 2]);

        store.set_error("boom");
        assert_eq!(store.current().error(), Some("boom"));
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn modify_only_applies_when_ready() {
        let store: ViewStore<Vec<u32>> = ViewStore::new();
        assert_eq!(store.modify(|v| v.push(1)), None);

        store.set_ready(vec![]);
        let held = store.snapshot().unwrap();
        store.modify(|v| v.push(7)).unwrap();

        assert!(held.is_empty(), "earlier snapshot must stay untouched");
        assert_eq!(store.snapshot().unwrap().as_slice(), &[7]);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store: ViewStore<u32> = ViewStore::new();
        let mut stream = store.subscribe();

        store.set_ready(5);
        let state = stream.changed().await.unwrap();
        assert_eq!(state.ready().map(|v| **v), Some(5));
    }
}
