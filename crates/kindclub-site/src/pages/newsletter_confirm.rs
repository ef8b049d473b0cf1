//! Newsletter confirmation page, shown only after a fresh signup.

use dioxus::prelude::*;

use crate::app::SiteView;

#[derive(Props, Clone, PartialEq)]
pub struct NewsletterConfirmProps {
    pub on_navigate: EventHandler<SiteView>,
}

/// Confirmation page component.
#[component]
pub fn NewsletterConfirm(props: NewsletterConfirmProps) -> Element {
    rsx! {
        main { class: "site-page newsletter-confirm",
            div { class: "confirm-card",
                span { class: "confirm-icon", "\u{1F49B}" }
                h1 { class: "page-heading", "You're in!" }
                p { class: "lede",
                    "Check your inbox for a hello from us. Your first kindness \
                     prompts arrive this week."
                }
                button {
                    class: "ghost-button",
                    onclick: move |_| props.on_navigate.call(SiteView::Home),
                    "Back to the site"
                }
            }
        }
    }
}
