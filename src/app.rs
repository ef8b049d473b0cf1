//! Root application component and view routing.
//!
//! The app shell is a single state machine over [`AppView`]. Navigation
//! writes the view signal directly; a session-driven effect re-derives
//! the route whenever the `{ user, profile }` pair changes. That effect
//! deliberately looks only at session state, so a late session change
//! can override a manual navigation (see DESIGN.md).

use std::sync::Arc;

use dioxus::prelude::*;
use kindclub_core::{Backend, OnboardingAnswers, SessionSnapshot, SessionStore};
use tokio::sync::RwLock;

use crate::components::Loading;
use crate::context::SharedBackend;
use crate::pages::{
    Collection, Health, Home, Landing, Login, Onboarding, Settings, Signup, Welcome,
};
use crate::theme::GLOBAL_STYLES;

/// The screens of the app shell. Exactly one is active at a time.
///
/// `Signup` carries the onboarding answers by value; they are immutable
/// once the wizard hands them over.
#[derive(Debug, Clone, PartialEq)]
pub enum AppView {
    Landing,
    Onboarding,
    Login,
    Signup { answers: OnboardingAnswers },
    Welcome,
    Home,
    Collection,
    Health,
    Settings,
}

/// Derive the route from the session snapshot.
///
/// Returns `None` while session resolution is pending; the shell shows
/// a loading screen and defers all routing until then.
pub fn resolve_view(snapshot: &SessionSnapshot) -> Option<AppView> {
    if snapshot.loading {
        return None;
    }
    match (&snapshot.user, &snapshot.profile) {
        (None, _) => Some(AppView::Landing),
        (Some(_), Some(profile)) if profile.onboarding_completed => Some(AppView::Home),
        (Some(_), _) => Some(AppView::Welcome),
    }
}

/// Root application component.
///
/// Provides global styles, the backend client, the session store, and
/// the active view to all descendants.
#[component]
pub fn App() -> Element {
    let backend: Signal<SharedBackend> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut backend_ready: Signal<bool> = use_signal(|| false);
    let store: Signal<SessionStore> = use_signal(SessionStore::new);
    let mut session: Signal<SessionSnapshot> = use_signal(SessionSnapshot::default);
    let mut view: Signal<AppView> = use_signal(|| AppView::Landing);

    use_context_provider(|| backend);
    use_context_provider(|| backend_ready);
    use_context_provider(|| store);
    use_context_provider(|| session);
    use_context_provider(|| view);

    // Initialize the backend and resolve the persisted session on mount
    use_effect(move || {
        spawn(async move {
            let config = crate::backend_config();
            match Backend::new(config) {
                Ok(mut client) => {
                    let resolved = match client.restore_session().await {
                        Ok(Some((auth, profile))) => Some((auth.user, profile)),
                        Ok(None) => None,
                        Err(e) => {
                            tracing::warn!("session resolution failed: {}", e);
                            None
                        }
                    };

                    let shared = backend();
                    let mut guard = shared.write().await;
                    *guard = Some(client);
                    drop(guard);
                    backend_ready.set(true);

                    store().resolved(resolved);
                    tracing::info!("backend initialized, session resolved");
                }
                Err(e) => {
                    tracing::error!("failed to initialize backend: {}", e);
                    store().resolved(None);
                }
            }
        });
    });

    // Forward session store events into the reactive snapshot signal
    use_effect(move || {
        spawn(async move {
            let mut rx = store().subscribe();
            while rx.recv().await.is_ok() {
                session.set(store().snapshot());
            }
        });
    });

    // Re-derive the route whenever the session snapshot changes. This is
    // driven by session state only, not by the current view, so it can
    // override an in-progress manual navigation.
    use_effect(move || {
        let snapshot = session();
        if let Some(next) = resolve_view(&snapshot) {
            view.set(next);
        }
    });

    let snapshot = session();

    rsx! {
        style { {GLOBAL_STYLES} }
        if snapshot.loading {
            Loading {}
        } else {
            match view() {
                AppView::Landing => rsx! { Landing {} },
                AppView::Onboarding => rsx! { Onboarding {} },
                AppView::Login => rsx! { Login {} },
                AppView::Signup { answers } => rsx! { Signup { answers } },
                AppView::Welcome => rsx! { Welcome {} },
                AppView::Home => rsx! { Home {} },
                AppView::Collection => rsx! { Collection {} },
                AppView::Health => rsx! { Health {} },
                AppView::Settings => rsx! { Settings {} },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindclub_core::{Profile, User};

    fn snapshot(user: bool, completed: Option<bool>, loading: bool) -> SessionSnapshot {
        SessionSnapshot {
            user: user.then(|| User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
            }),
            profile: completed.map(|done| Profile {
                id: "u1".to_string(),
                display_name: "Ada".to_string(),
                streak: 0,
                onboarding_completed: done,
                interests: vec![],
                push_notifications: false,
                reminder_time: None,
            }),
            loading,
        }
    }

    #[test]
    fn pending_resolution_defers_routing() {
        assert_eq!(resolve_view(&snapshot(false, None, true)), None);
        assert_eq!(resolve_view(&snapshot(true, Some(true), true)), None);
    }

    #[test]
    fn no_user_resolves_to_landing() {
        assert_eq!(
            resolve_view(&snapshot(false, None, false)),
            Some(AppView::Landing)
        );
    }

    #[test]
    fn incomplete_onboarding_resolves_to_welcome() {
        assert_eq!(
            resolve_view(&snapshot(true, Some(false), false)),
            Some(AppView::Welcome)
        );
        // A user with no profile row at all is treated the same way
        assert_eq!(
            resolve_view(&snapshot(true, None, false)),
            Some(AppView::Welcome)
        );
    }

    #[test]
    fn completed_onboarding_resolves_to_home() {
        assert_eq!(
            resolve_view(&snapshot(true, Some(true), false)),
            Some(AppView::Home)
        );
    }
}
