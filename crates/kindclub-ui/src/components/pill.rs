//! Selection Pills
//!
//! Toggleable pill buttons used by the interests step (multi-select)
//! and the mood/goal steps (single-select).

use dioxus::prelude::*;

/// Properties for the PillGrid component
#[derive(Clone, PartialEq, Props)]
pub struct PillGridProps {
    /// All available options
    pub options: Vec<String>,
    /// Currently selected options
    pub selected: Vec<String>,
    /// Handler called with the toggled option
    pub on_toggle: EventHandler<String>,
}

/// Grid of toggleable pills for multi-select steps
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PillGrid {
///         options: interests(),
///         selected: answers().interests.clone(),
///         on_toggle: move |interest| toggle(interest),
///     }
/// }
/// ```
#[component]
pub fn PillGrid(props: PillGridProps) -> Element {
    rsx! {
        div {
            class: "pill-grid",
            role: "group",
            for option in props.options.iter() {
                {
                    let option_clone = option.clone();
                    let is_selected = props.selected.contains(option);
                    let on_toggle = props.on_toggle;
                    rsx! {
                        button {
                            key: "{option}",
                            class: if is_selected { "pill pill--selected" } else { "pill" },
                            "aria-pressed": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_toggle.call(option_clone.clone()),
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}

/// Properties for the ChoiceList component
#[derive(Clone, PartialEq, Props)]
pub struct ChoiceListProps {
    /// All available choices
    pub choices: Vec<String>,
    /// Currently selected choice, if any
    pub selected: Option<String>,
    /// Handler called with the picked choice
    pub on_select: EventHandler<String>,
}

/// Vertical list of single-select choices (mood check, goal step)
#[component]
pub fn ChoiceList(props: ChoiceListProps) -> Element {
    rsx! {
        div {
            class: "choice-list",
            role: "radiogroup",
            for choice in props.choices.iter() {
                {
                    let choice_clone = choice.clone();
                    let is_selected = props.selected.as_deref() == Some(choice.as_str());
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{choice}",
                            class: if is_selected { "choice selected" } else { "choice" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(choice_clone.clone()),
                            "{choice}"
                        }
                    }
                }
            }
        }
    }
}
