//! Signup page.
//!
//! Receives the finished onboarding answers by value and turns them
//! into an account plus a profile row. The password length check runs
//! before any network call.

use dioxus::prelude::*;

use kindclub_core::{CoreError, OnboardingAnswers};
use kindclub_ui::{Button, ButtonVariant, Input};

use crate::app::AppView;
use crate::context::{use_backend, use_session_store, use_view};
use crate::pages::auth_error_message;

/// Minimum password length accepted before calling the backend
const MIN_PASSWORD_LEN: usize = 6;

/// Signup form component.
#[component]
pub fn Signup(answers: OnboardingAnswers) -> Element {
    let backend = use_backend();
    let store = use_session_store();
    let mut view = use_view();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let display_name = answers.name.trim().to_string();

    let on_submit = {
        let answers = answers.clone();
        move |_: ()| {
            if submitting() {
                return;
            }
            let email_val = email.read().trim().to_string();
            let password_val = password.read().clone();
            if email_val.is_empty() {
                error.set(Some("Please enter your email.".to_string()));
                return;
            }
            if password_val.len() < MIN_PASSWORD_LEN {
                error.set(Some(format!(
                    "Your password needs at least {MIN_PASSWORD_LEN} characters."
                )));
                return;
            }

            error.set(None);
            submitting.set(true);

            let answers = answers.clone();
            spawn(async move {
                let shared = backend();
                let mut guard = shared.write().await;
                let Some(ref mut client) = *guard else {
                    submitting.set(false);
                    return;
                };

                match client
                    .sign_up(&email_val, &password_val, answers.name.trim())
                    .await
                {
                    Ok(session) => {
                        let profile = match client
                            .create_profile_from_answers(&session.user.id, &answers)
                            .await
                        {
                            Ok(profile) => Some(profile),
                            // Row already there (retried signup); read it back
                            Err(CoreError::DuplicateRecord(_)) => {
                                client.fetch_profile(&session.user.id).await.ok()
                            }
                            Err(e) => {
                                tracing::warn!("profile creation failed: {}", e);
                                None
                            }
                        };
                        store().signed_in(session.user, profile);
                        view.set(AppView::Welcome);
                    }
                    Err(e) => {
                        error.set(Some(auth_error_message(&e)));
                    }
                }
                submitting.set(false);
            });
        }
    };

    rsx! {
        main { class: "auth-page",
            h1 { class: "page-title", "Almost there, {display_name}" }
            p { class: "page-subtitle", "Create your account to save your progress." }

            form { class: "auth-form",
                onsubmit: move |e| e.prevent_default(),

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
                    placeholder: "at least 6 characters".to_string(),
                    required: true,
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Creating account..." } else { "Create account" }
                }
            }
        }
    }
}
