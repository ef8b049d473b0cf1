//! Individual onboarding step components.
//!
//! Each gated step renders its own continue affordance and disables it
//! until the gate is satisfied; the wizard never advances a gated step
//! from outside.

use dioxus::prelude::*;

use kindclub_core::MIN_INTERESTS;
use kindclub_ui::{Button, ButtonVariant, ChoiceList, Input, PillGrid};

use crate::components::HoldButton;

/// Moods offered on the mood-check step
const MOODS: [&str; 5] = ["Great", "Good", "Okay", "Stressed", "Low"];

/// Focus goals offered on the goal step
const GOALS: [&str; 4] = [
    "Be kinder to myself",
    "Connect with others",
    "Reduce stress",
    "Build a daily habit",
];

/// Interests offered on the interests step
const INTERESTS: [&str; 8] = [
    "Gratitude",
    "Volunteering",
    "Mindfulness",
    "Random acts",
    "Family",
    "Friendship",
    "Community",
    "Self-care",
];

/// A text-only step with a single continue button.
#[component]
pub fn InfoStep(
    title: String,
    body: String,
    cta: String,
    on_continue: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "step step-info",
            h1 { class: "step-title", "{title}" }
            p { class: "step-body", "{body}" }
            Button {
                variant: ButtonVariant::Cta,
                onclick: move |_| on_continue.call(()),
                "{cta}"
            }
        }
    }
}

/// Mood check: a single pick auto-advances (handled by the wizard).
#[component]
pub fn MoodCheckStep(selected: Option<String>, on_select: EventHandler<String>) -> Element {
    rsx! {
        section { class: "step step-mood",
            h1 { class: "step-title", "How are you feeling today?" }
            ChoiceList {
                choices: MOODS.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
                selected: selected,
                on_select: on_select,
            }
        }
    }
}

/// Interests multi-select; continue unlocks at three picks.
#[component]
pub fn InterestsStep(
    selected: Vec<String>,
    ready: bool,
    on_toggle: EventHandler<String>,
    on_continue: EventHandler<()>,
) -> Element {
    let remaining = MIN_INTERESTS.saturating_sub(selected.len());

    rsx! {
        section { class: "step step-interests",
            h1 { class: "step-title", "What speaks to you?" }
            p { class: "step-body", "Pick at least {MIN_INTERESTS}." }
            PillGrid {
                options: INTERESTS.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
                selected: selected,
                on_toggle: on_toggle,
            }
            if remaining > 0 {
                p { class: "step-hint", "{remaining} more to go" }
            }
            Button {
                variant: ButtonVariant::Cta,
                disabled: !ready,
                onclick: move |_| on_continue.call(()),
                "Continue"
            }
        }
    }
}

/// Goal pick: single selection, auto-advances like the mood check.
#[component]
pub fn GoalStep(selected: Option<String>, on_select: EventHandler<String>) -> Element {
    rsx! {
        section { class: "step step-goal",
            h1 { class: "step-title", "What brings you here?" }
            ChoiceList {
                choices: GOALS.iter().map(|g| g.to_string()).collect::<Vec<_>>(),
                selected: selected,
                on_select: on_select,
            }
        }
    }
}

/// Name entry; continue unlocks once the trimmed input is non-empty.
#[component]
pub fn NameStep(
    value: String,
    ready: bool,
    oninput: EventHandler<String>,
    on_continue: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "step step-name",
            h1 { class: "step-title", "What should we call you?" }
            Input {
                value: value,
                oninput: oninput,
                placeholder: "Your name".to_string(),
                required: true,
            }
            Button {
                variant: ButtonVariant::Cta,
                disabled: !ready,
                onclick: move |_| on_continue.call(()),
                "Continue"
            }
        }
    }
}

/// Final step: press and hold to commit to the practice.
#[component]
pub fn CommitStep(
    percent: u8,
    fired: bool,
    on_press: EventHandler<()>,
    on_release: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "step step-commit",
            h1 { class: "step-title", "Make it a promise" }
            p { class: "step-body",
                "Press and hold to commit to one small act of kindness a day."
            }
            HoldButton {
                percent: percent,
                fired: fired,
                label: if fired { "Committed".to_string() } else { "Hold to commit".to_string() },
                on_press: on_press,
                on_release: on_release,
            }
        }
    }
}
