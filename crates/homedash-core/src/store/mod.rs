// ── Per-page view state ──

mod view_store;

pub use view_store::{LoadState, ViewStore};
