//! Session store
//!
//! The single owner of "who is signed in right now". Components read a
//! cloned [`SessionSnapshot`] and subscribe to change events; they never
//! reach into shared mutable auth state directly.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

use crate::types::{Profile, User};

/// Capacity of the session event channel
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Point-in-time view of the session.
///
/// `loading` is true while the initial session resolution is still in
/// flight; routing decisions are deferred until it clears.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            profile: None,
            loading: true,
        }
    }
}

/// Events broadcast whenever the session changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Changed,
}

/// Shared, subscribable session state
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionSnapshot>>,
    events: broadcast::Sender<SessionEvent>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store in the loading state.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(RwLock::new(SessionSnapshot::default())),
            events,
        }
    }

    /// Current state, by value.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().clone()
    }

    /// Subscribe to change events. Receivers that lag simply re-read the
    /// snapshot, so missed events are harmless.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Startup resolution finished; `resolved` carries the signed-in
    /// pair when a persisted session was usable.
    pub fn resolved(&self, resolved: Option<(User, Profile)>) {
        {
            let mut state = self.inner.write();
            match resolved {
                Some((user, profile)) => {
                    state.user = Some(user);
                    state.profile = Some(profile);
                }
                None => {
                    state.user = None;
                    state.profile = None;
                }
            }
            state.loading = false;
        }
        self.notify();
    }

    /// A sign-in or sign-up completed.
    pub fn signed_in(&self, user: User, profile: Option<Profile>) {
        {
            let mut state = self.inner.write();
            state.user = Some(user);
            state.profile = profile;
            state.loading = false;
        }
        self.notify();
    }

    /// The profile record changed (onboarding completed, streak bump,
    /// settings edit).
    pub fn profile_updated(&self, profile: Profile) {
        {
            let mut state = self.inner.write();
            state.profile = Some(profile);
        }
        self.notify();
    }

    /// The user signed out.
    pub fn signed_out(&self) {
        {
            let mut state = self.inner.write();
            state.user = None;
            state.profile = None;
            state.loading = false;
        }
        self.notify();
    }

    fn notify(&self) {
        // Send fails only when no component is subscribed yet
        if self.events.send(SessionEvent::Changed).is_err() {
            debug!("session changed with no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn profile(completed: bool) -> Profile {
        Profile {
            id: "u1".to_string(),
            display_name: "Ada".to_string(),
            streak: 0,
            onboarding_completed: completed,
            interests: vec![],
            push_notifications: false,
            reminder_time: None,
        }
    }

    #[test]
    fn starts_loading() {
        let store = SessionStore::new();
        let snap = store.snapshot();
        assert!(snap.loading);
        assert!(snap.user.is_none());
        assert!(snap.profile.is_none());
    }

    #[test]
    fn resolution_clears_loading() {
        let store = SessionStore::new();
        store.resolved(None);
        let snap = store.snapshot();
        assert!(!snap.loading);
        assert!(snap.user.is_none());

        store.resolved(Some((user(), profile(true))));
        let snap = store.snapshot();
        assert!(!snap.loading);
        assert!(snap.profile.unwrap().onboarding_completed);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        store.signed_in(user(), Some(profile(false)));
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Changed);

        store.signed_out();
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Changed);
        assert!(store.snapshot().user.is_none());
    }

    #[test]
    fn profile_update_keeps_user() {
        let store = SessionStore::new();
        store.signed_in(user(), Some(profile(false)));
        store.profile_updated(profile(true));
        let snap = store.snapshot();
        assert!(snap.user.is_some());
        assert!(snap.profile.unwrap().onboarding_completed);
    }
}
