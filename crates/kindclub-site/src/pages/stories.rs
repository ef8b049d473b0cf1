//! Stories page - member testimonials.

use dioxus::prelude::*;

/// A member story shown on the page
struct Story {
    quote: &'static str,
    name: &'static str,
}

const STORIES: [Story; 3] = [
    Story {
        quote: "I started leaving sticky notes for my flatmates. Three months \
                later our kitchen is a gallery and our house is a home.",
        name: "Maya, member since 2024",
    },
    Story {
        quote: "The challenges are tiny, which is the point. I can't talk myself \
                out of something that takes four minutes.",
        name: "Jonas, member since 2023",
    },
    Story {
        quote: "My streak broke at 41 days and the app just said 'pick it back \
                up'. That kindness toward me is why I stayed.",
        name: "Priya, member since 2024",
    },
];

/// Stories page component.
#[component]
pub fn Stories() -> Element {
    rsx! {
        main { class: "site-page stories",
            h1 { class: "page-heading", "Stories from the Club" }
            div { class: "story-grid",
                for (i, story) in STORIES.iter().enumerate() {
                    blockquote { key: "{i}", class: "story-card",
                        p { class: "story-quote", "\u{201C}{story.quote}\u{201D}" }
                        footer { class: "story-name", "{story.name}" }
                    }
                }
            }
        }
    }
}
