//! Full-screen loading state shown while the session resolves.

use dioxus::prelude::*;

/// Loading screen component. All routing is deferred while this shows.
#[component]
pub fn Loading() -> Element {
    rsx! {
        main { class: "loading-screen",
            div { class: "loading-heart", "\u{2764}" }
            p { class: "loading-text", "warming up..." }
        }
    }
}
