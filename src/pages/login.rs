//! Login page.
//!
//! On success the next view depends on the profile: complete onboarding
//! goes straight home, anything else lands on the welcome screen. The
//! session effect in `App` derives the same destination, so both writes
//! agree.

use dioxus::prelude::*;

use kindclub_core::{CoreError, Profile};
use kindclub_ui::{Button, ButtonVariant, Input};

use crate::app::AppView;
use crate::context::{use_backend, use_session_store, use_view};
use crate::pages::auth_error_message;

/// Where a successful login lands: members with finished onboarding go
/// straight home, everyone else (including a missing profile row) to
/// the welcome screen.
fn post_login_view(profile: Option<&Profile>) -> AppView {
    match profile {
        Some(p) if p.onboarding_completed => AppView::Home,
        _ => AppView::Welcome,
    }
}

/// Login form component.
#[component]
pub fn Login() -> Element {
    let backend = use_backend();
    let store = use_session_store();
    let mut view = use_view();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let mut on_submit = move |_: ()| {
        if submitting() {
            return;
        }
        let email_val = email.read().trim().to_string();
        let password_val = password.read().clone();
        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Please enter your email and password.".to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);

        spawn(async move {
            let shared = backend();
            let mut guard = shared.write().await;
            let Some(ref mut client) = *guard else {
                submitting.set(false);
                return;
            };

            match client.sign_in_with_password(&email_val, &password_val).await {
                Ok(session) => {
                    // A missing profile row routes to welcome, same as an
                    // incomplete one
                    let profile = match client.fetch_profile(&session.user.id).await {
                        Ok(profile) => Some(profile),
                        Err(CoreError::NotFound(_)) => None,
                        Err(e) => {
                            tracing::warn!("profile fetch after login failed: {}", e);
                            None
                        }
                    };
                    let next = post_login_view(profile.as_ref());
                    store().signed_in(session.user, profile);
                    view.set(next);
                }
                Err(e) => {
                    error.set(Some(auth_error_message(&e)));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        main { class: "auth-page",
            h1 { class: "page-title", "Welcome back" }

            form { class: "auth-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit(());
                },

                Input {
                    value: email(),
                    oninput: move |v| email.set(v),
                    label: "email".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    required: true,
                }
                Input {
                    value: password(),
                    oninput: move |v| password.set(v),
                    label: "password".to_string(),
                    input_type: "password".to_string(),
                    required: true,
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Signing in..." } else { "Log in" }
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| view.set(AppView::Landing),
                "Back"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn completed_onboarding_logs_in_to_home() {
        let p = profile(true);
        assert_eq!(post_login_view(Some(&p)), AppView::Home);
    }

    #[test]
    fn unfinished_onboarding_logs_in_to_welcome() {
        let p = profile(false);
        assert_eq!(post_login_view(Some(&p)), AppView::Welcome);
    }

    #[test]
    fn missing_profile_row_logs_in_to_welcome() {
        assert_eq!(post_login_view(None), AppView::Welcome);
    }
}
