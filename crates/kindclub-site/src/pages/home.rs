//! Home page - the brand's front door.

use dioxus::prelude::*;

use crate::app::SiteView;

#[derive(Props, Clone, PartialEq)]
pub struct HomeProps {
    pub on_navigate: EventHandler<SiteView>,
}

/// Home page component.
#[component]
pub fn Home(props: HomeProps) -> Element {
    rsx! {
        main { class: "site-page home",
            section { class: "hero",
                h1 { class: "hero-title", "Kindness, one day at a time" }
                p { class: "hero-subtitle",
                    "KindClub gives you one quote to sit with, one small challenge \
                     to try, and one short lesson to explore. Every single day."
                }
                div { class: "hero-actions",
                    button {
                        class: "cta-button",
                        onclick: move |_| props.on_navigate.call(SiteView::JoinClub),
                        "Join the Club"
                    }
                    button {
                        class: "ghost-button",
                        onclick: move |_| props.on_navigate.call(SiteView::Mission),
                        "Why kindness?"
                    }
                }
            }

            section { class: "feature-row",
                div { class: "feature",
                    span { class: "feature-icon", "\u{1F4AC}" }
                    h3 { "A daily quote" }
                    p { "Words worth carrying with you through the day." }
                }
                div { class: "feature",
                    span { class: "feature-icon", "\u{2728}" }
                    h3 { "A small challenge" }
                    p { "Five minutes or less. Kindness that actually fits your day." }
                }
                div { class: "feature",
                    span { class: "feature-icon", "\u{1F331}" }
                    h3 { "A short lesson" }
                    p { "The science of why giving feels so good." }
                }
            }
        }
    }
}
