//! Mission page.

use dioxus::prelude::*;

/// Mission page component.
#[component]
pub fn Mission() -> Element {
    rsx! {
        main { class: "site-page mission",
            h1 { class: "page-heading", "Our Mission" }
            p { class: "lede",
                "We believe kindness is a practice, not a personality trait. \
                 KindClub exists to make that practice effortless."
            }
            section { class: "prose",
                p {
                    "Most wellbeing apps ask you to look inward. We ask you to look \
                     outward, too. Research keeps finding the same thing: people who \
                     perform small, regular acts of kindness report less stress, \
                     stronger relationships, and a deeper sense of meaning."
                }
                p {
                    "So we built a club around it. One small act a day. No streak \
                     shaming, no paywalled compassion, no ten-step morning routine. \
                     Just a gentle daily rhythm you can keep."
                }
            }
        }
    }
}
