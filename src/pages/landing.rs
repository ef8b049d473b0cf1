//! Landing page - entry point for signed-out users.

use dioxus::prelude::*;

use kindclub_ui::{Button, ButtonVariant};

use crate::app::AppView;
use crate::context::use_view;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let mut view = use_view();

    rsx! {
        main { class: "landing",
            div { class: "landing-glow" }

            header { class: "landing-header",
                h1 { class: "brand-title", "KindClub" }
                p { class: "tagline", "one small act of kindness a day" }
            }

            section { class: "landing-actions",
                Button {
                    variant: ButtonVariant::Cta,
                    onclick: move |_| view.set(AppView::Onboarding),
                    "Get started"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| view.set(AppView::Login),
                    "I already have an account"
                }
            }
        }
    }
}
