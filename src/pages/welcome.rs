//! Welcome page shown after signup (or login with unfinished
//! onboarding). Continuing marks onboarding complete and moves home.

use dioxus::prelude::*;

use kindclub_ui::{Button, ButtonVariant};

use crate::app::AppView;
use crate::context::{use_backend, use_session, use_session_store, use_view};

/// Welcome page component.
#[component]
pub fn Welcome() -> Element {
    let backend = use_backend();
    let store = use_session_store();
    let session = use_session();
    let mut view = use_view();

    let mut busy = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let name = session()
        .profile
        .map(|p| p.display_name)
        .unwrap_or_else(|| "friend".to_string());

    let on_continue = move |_: ()| {
        if busy() {
            return;
        }
        let Some(user) = session().user else {
            return;
        };
        busy.set(true);
        error.set(None);

        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            let Some(ref client) = *guard else {
                busy.set(false);
                return;
            };

            match client.mark_onboarding_completed(&user.id).await {
                Ok(profile) => {
                    // The session effect routes home once the profile
                    // snapshot updates
                    store().profile_updated(profile);
                    view.set(AppView::Home);
                }
                Err(e) => {
                    tracing::warn!("failed to complete onboarding: {}", e);
                    error.set(Some("Couldn't save that. Please try again.".to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        main { class: "welcome-page",
            h1 { class: "page-title", "Welcome, {name}" }
            p { class: "page-subtitle",
                "Your first challenge is waiting. Small steps, every day."
            }

            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }

            Button {
                variant: ButtonVariant::Cta,
                disabled: busy(),
                onclick: on_continue,
                if busy() { "One moment..." } else { "Start my journey" }
            }
        }
    }
}
