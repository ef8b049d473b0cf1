//! Shared context for the KindClub app shell.
//!
//! Provides the backend client, the session snapshot, and the active
//! view to all components via use_context.

use std::sync::Arc;

use dioxus::prelude::*;
use kindclub_core::{Backend, SessionSnapshot, SessionStore};
use tokio::sync::RwLock;

use crate::app::AppView;

/// Shared backend type for context.
///
/// The backend is wrapped in Arc<RwLock<>> so components can read
/// concurrently and auth calls can take a write guard for mutation.
pub type SharedBackend = Arc<RwLock<Option<Backend>>>;

/// Hook to access the backend client from context.
pub fn use_backend() -> Signal<SharedBackend> {
    use_context::<Signal<SharedBackend>>()
}

/// Hook to check if the backend client is initialized.
pub fn use_backend_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the session store (mutations: sign-in, sign-out,
/// profile updates).
pub fn use_session_store() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// Hook to read the current session snapshot reactively.
pub fn use_session() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}

/// Hook to read and set the active view.
///
/// Writes are synchronous; the last write wins. The session effect in
/// `App` also writes here whenever the session snapshot changes.
pub fn use_view() -> Signal<AppView> {
    use_context::<Signal<AppView>>()
}
