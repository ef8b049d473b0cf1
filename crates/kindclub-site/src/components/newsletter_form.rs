//! Newsletter signup form.
//!
//! One insert attempt per submit, guarded by an in-flight flag; there
//! is no automatic retry. A duplicate signup stays on the page with a
//! friendly notice; only a fresh signup navigates to the confirmation
//! view.

use dioxus::prelude::*;

use kindclub_core::{CoreError, CoreResult};

use crate::app::SiteBackend;

/// What a finished subscribe attempt means for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// New subscriber; navigate to the confirmation view
    Subscribed,
    /// The backend reported a duplicate; stay put and say so
    AlreadySubscribed,
    /// Anything else; stay put with a generic notice
    Failed,
}

impl SubscribeOutcome {
    pub fn from_result(result: &CoreResult<()>) -> Self {
        match result {
            Ok(()) => SubscribeOutcome::Subscribed,
            Err(CoreError::DuplicateRecord(_)) => SubscribeOutcome::AlreadySubscribed,
            Err(_) => SubscribeOutcome::Failed,
        }
    }

    /// Inline notice for the non-navigating outcomes
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubscribeOutcome::Subscribed => None,
            SubscribeOutcome::AlreadySubscribed => {
                Some("This email is already subscribed to our newsletter!")
            }
            SubscribeOutcome::Failed => {
                Some("Something went wrong. Please try again later.")
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NewsletterFormProps {
    /// Called after a successful (non-duplicate) signup
    pub on_subscribed: EventHandler<()>,
}

/// Newsletter signup form component.
#[component]
pub fn NewsletterForm(props: NewsletterFormProps) -> Element {
    let backend = use_context::<Signal<SiteBackend>>();

    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    let mut on_submit = move |_: ()| {
        let email_val = email.read().trim().to_string();
        if email_val.is_empty() || submitting() {
            return;
        }
        let Some(client) = backend() else {
            notice.set(Some("Something went wrong. Please try again later.".to_string()));
            return;
        };

        submitting.set(true);
        notice.set(None);

        spawn(async move {
            let result = client.subscribe_newsletter(&email_val).await;
            if let Err(ref e) = result {
                tracing::warn!("newsletter subscribe failed: {}", e);
            }
            let outcome = SubscribeOutcome::from_result(&result);
            match outcome {
                SubscribeOutcome::Subscribed => {
                    email.set(String::new());
                    props.on_subscribed.call(());
                }
                _ => {
                    notice.set(outcome.notice().map(str::to_string));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form { class: "newsletter-form",
            onsubmit: move |e| {
                e.prevent_default();
                on_submit(());
            },

            input {
                class: "newsletter-input",
                r#type: "email",
                placeholder: "you@example.com",
                value: "{email}",
                required: true,
                disabled: submitting(),
                oninput: move |e| email.set(e.value()),
            }
            button {
                class: "newsletter-submit",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Joining..." } else { "Join the newsletter" }
            }

            if let Some(message) = notice() {
                p { class: "newsletter-notice", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_yields_the_already_subscribed_notice() {
        let result: CoreResult<()> =
            Err(CoreError::DuplicateRecord("newsletter_subscribers".into()));
        let outcome = SubscribeOutcome::from_result(&result);
        assert_eq!(outcome, SubscribeOutcome::AlreadySubscribed);
        assert_eq!(
            outcome.notice(),
            Some("This email is already subscribed to our newsletter!")
        );
    }

    #[test]
    fn success_navigates_with_no_notice() {
        let outcome = SubscribeOutcome::from_result(&Ok(()));
        assert_eq!(outcome, SubscribeOutcome::Subscribed);
        assert_eq!(outcome.notice(), None);
    }

    #[test]
    fn other_errors_are_generic() {
        let result: CoreResult<()> = Err(CoreError::NotSignedIn);
        let outcome = SubscribeOutcome::from_result(&result);
        assert_eq!(outcome, SubscribeOutcome::Failed);
        assert_eq!(
            outcome.notice(),
            Some("Something went wrong. Please try again later.")
        );
    }
}
