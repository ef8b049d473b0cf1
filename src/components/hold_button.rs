//! Press-and-hold commit button.
//!
//! Purely presentational: the wizard owns the timer and the
//! `HoldProgress` machine; this component reports press/release and
//! renders the fill.

use dioxus::prelude::*;

use kindclub_ui::FillBar;

#[derive(Props, Clone, PartialEq)]
pub struct HoldButtonProps {
    /// Current hold progress, 0-100
    pub percent: u8,
    /// Whether completion has fired (the button locks in place)
    pub fired: bool,
    /// Button label
    pub label: String,
    /// Pointer-down handler (starts the hold timer)
    pub on_press: EventHandler<()>,
    /// Pointer-up / pointer-leave handler (cancels the hold)
    pub on_release: EventHandler<()>,
}

/// Hold-to-commit button with a fill bar that tracks progress.
#[component]
pub fn HoldButton(props: HoldButtonProps) -> Element {
    let state_class = if props.fired {
        "hold-button hold-button--fired"
    } else if props.percent > 0 {
        "hold-button hold-button--holding"
    } else {
        "hold-button"
    };

    rsx! {
        div { class: "hold-button-wrap",
            button {
                class: "{state_class}",
                onpointerdown: move |_| props.on_press.call(()),
                onpointerup: move |_| props.on_release.call(()),
                // Dragging off the button counts as releasing it
                onpointerleave: move |_| props.on_release.call(()),
                "{props.label}"
            }
            FillBar { percent: props.percent }
        }
    }
}
