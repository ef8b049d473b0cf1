//! Cards for daily content.
//!
//! Content records are opaque; cards display them verbatim and expose a
//! save affordance. The challenge card also carries the completion
//! action that feeds the streak.

use dioxus::prelude::*;

use kindclub_core::{Challenge, Lecture, Quote};
use kindclub_ui::IconButton;

#[derive(Props, Clone, PartialEq)]
pub struct QuoteCardProps {
    pub quote: Quote,
    pub on_save: EventHandler<()>,
}

/// Today's quote.
#[component]
pub fn QuoteCard(props: QuoteCardProps) -> Element {
    rsx! {
        article { class: "content-card quote-card",
            p { class: "quote-text", "\u{201C}{props.quote.text}\u{201D}" }
            if let Some(author) = &props.quote.author {
                p { class: "quote-author", "\u{2014} {author}" }
            }
            IconButton {
                onclick: props.on_save,
                aria_label: "Save quote".to_string(),
                class: "card-save".to_string(),
                "\u{2661}"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChallengeCardProps {
    pub challenge: Challenge,
    /// Whether today's challenge is already done
    pub done: bool,
    /// Whether the completion call is in flight
    pub busy: bool,
    pub on_complete: EventHandler<()>,
    pub on_save: EventHandler<()>,
}

/// Today's kindness challenge with its completion action.
#[component]
pub fn ChallengeCard(props: ChallengeCardProps) -> Element {
    rsx! {
        article { class: "content-card challenge-card",
            span { class: "card-kicker", "today's challenge" }
            h2 { class: "card-title", "{props.challenge.title}" }
            p { class: "card-body", "{props.challenge.description}" }

            div { class: "card-actions",
                button {
                    class: if props.done { "btn-primary btn--done" } else { "btn-primary" },
                    disabled: props.done || props.busy,
                    onclick: move |_| props.on_complete.call(()),
                    if props.done {
                        "Done today \u{2713}"
                    } else if props.busy {
                        "Saving..."
                    } else {
                        "I did it"
                    }
                }
                IconButton {
                    onclick: props.on_save,
                    aria_label: "Save challenge".to_string(),
                    class: "card-save".to_string(),
                    "\u{2661}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LectureCardProps {
    pub lecture: Lecture,
    pub on_save: EventHandler<()>,
}

/// Today's short lesson.
#[component]
pub fn LectureCard(props: LectureCardProps) -> Element {
    rsx! {
        article { class: "content-card lecture-card",
            span { class: "card-kicker", "today's lesson" }
            h2 { class: "card-title", "{props.lecture.title}" }
            p { class: "card-body", "{props.lecture.summary}" }
            if let Some(minutes) = props.lecture.duration_minutes {
                span { class: "card-meta", "{minutes} min" }
            }
            IconButton {
                onclick: props.on_save,
                aria_label: "Save lesson".to_string(),
                class: "card-save".to_string(),
                "\u{2661}"
            }
        }
    }
}
