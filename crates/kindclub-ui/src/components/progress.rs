//! Progress Bars
//!
//! Step progress for the onboarding wizard and the fill bar inside the
//! hold-to-commit control.

use dioxus::prelude::*;

/// Properties for the StepProgress component
#[derive(Clone, PartialEq, Props)]
pub struct StepProgressProps {
    /// Zero-based index of the current step
    pub current: usize,
    /// Total number of steps
    pub total: usize,
}

/// Dots showing wizard position; steps already passed render filled.
#[component]
pub fn StepProgress(props: StepProgressProps) -> Element {
    let human_step = props.current + 1;
    rsx! {
        div {
            class: "step-progress",
            "aria-label": "Step {human_step} of {props.total}",
            for i in 0..props.total {
                span {
                    key: "{i}",
                    class: if i <= props.current { "step-dot step-dot--filled" } else { "step-dot" },
                }
            }
        }
    }
}

/// Properties for the FillBar component
#[derive(Clone, PartialEq, Props)]
pub struct FillBarProps {
    /// Fill percentage, clamped to 0-100
    pub percent: u8,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Horizontal fill bar driven by a 0-100 value
#[component]
pub fn FillBar(props: FillBarProps) -> Element {
    let percent = props.percent.min(100);
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "fill-bar".to_string()
    } else {
        format!("fill-bar {}", extra_class)
    };

    rsx! {
        div {
            class: "{full_class}",
            role: "progressbar",
            "aria-valuenow": "{percent}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            div {
                class: "fill-bar__fill",
                style: "width: {percent}%;",
            }
        }
    }
}
