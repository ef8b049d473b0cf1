//! Join the Club page - download links and the newsletter signup.

use dioxus::prelude::*;

use crate::components::NewsletterForm;

#[derive(Props, Clone, PartialEq)]
pub struct JoinClubProps {
    /// Forwarded to the newsletter form; fires on a fresh signup
    pub on_subscribed: EventHandler<()>,
}

/// Join page component.
#[component]
pub fn JoinClub(props: JoinClubProps) -> Element {
    rsx! {
        main { class: "site-page join-club",
            h1 { class: "page-heading", "Join the Club" }
            p { class: "lede",
                "Get the app, or start with our weekly newsletter of small \
                 kindness ideas."
            }

            section { class: "join-section",
                h2 { class: "section-heading", "The newsletter" }
                p {
                    "One email a week. A handful of kindness prompts. \
                     Unsubscribe any time."
                }
                NewsletterForm { on_subscribed: props.on_subscribed }
            }
        }
    }
}
