//! Community page.

use dioxus::prelude::*;

/// Community page component.
#[component]
pub fn Community() -> Element {
    rsx! {
        main { class: "site-page community",
            h1 { class: "page-heading", "The Community" }
            p { class: "lede",
                "Tens of thousands of members practicing kindness in over forty \
                 countries."
            }
            section { class: "stat-row",
                div { class: "stat",
                    span { class: "stat-number", "2.1M" }
                    span { class: "stat-label", "acts of kindness logged" }
                }
                div { class: "stat",
                    span { class: "stat-number", "43" }
                    span { class: "stat-label", "countries" }
                }
                div { class: "stat",
                    span { class: "stat-number", "87%" }
                    span { class: "stat-label", "say they feel more connected" }
                }
            }
        }
    }
}
