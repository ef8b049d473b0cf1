//! Health tab - personal wellbeing goals.

use dioxus::prelude::*;

use kindclub_core::HealthGoal;
use kindclub_ui::{Button, ButtonVariant, Input};

use crate::components::{Tab, TabBar};
use crate::context::{use_backend, use_backend_ready, use_session};

/// Health goals page component.
#[component]
pub fn Health() -> Element {
    let backend = use_backend();
    let backend_ready = use_backend_ready();
    let session = use_session();

    let mut goals: Signal<Vec<HealthGoal>> = use_signal(Vec::new);
    let mut new_title = use_signal(String::new);
    let mut adding = use_signal(|| false);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    use_effect(move || {
        if !backend_ready() {
            return;
        }
        let Some(user) = session.peek().user.clone() else {
            return;
        };
        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            if let Some(ref client) = *guard {
                match client.list_health_goals(&user.id).await {
                    Ok(list) => goals.set(list),
                    Err(e) => tracing::warn!("health goals load failed: {}", e),
                }
            }
        });
    });

    let on_add = move |_: ()| {
        if adding() {
            return;
        }
        let title = new_title.read().trim().to_string();
        if title.is_empty() {
            return;
        }
        let Some(user) = session.peek().user.clone() else {
            return;
        };
        adding.set(true);
        notice.set(None);

        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            if let Some(ref client) = *guard {
                match client.add_health_goal(&user.id, &title).await {
                    Ok(goal) => {
                        goals.with_mut(|g| g.push(goal));
                        new_title.set(String::new());
                    }
                    Err(e) => {
                        tracing::warn!("goal creation failed: {}", e);
                        notice.set(Some("Couldn't add that goal. Please try again.".to_string()));
                    }
                }
            }
            adding.set(false);
        });
    };

    let mut on_toggle = move |(goal_id, done): (String, bool)| {
        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            if let Some(ref client) = *guard {
                match client.set_goal_done(&goal_id, done).await {
                    Ok(updated) => {
                        goals.with_mut(|list| {
                            if let Some(goal) = list.iter_mut().find(|g| g.id == updated.id) {
                                *goal = updated;
                            }
                        });
                    }
                    Err(e) => tracing::warn!("goal toggle failed: {}", e),
                }
            }
        });
    };

    rsx! {
        main { class: "tab-page health-page",
            h1 { class: "page-title", "Health goals" }

            if let Some(message) = notice() {
                p { class: "page-notice", "{message}" }
            }

            ul { class: "goal-list",
                for goal in goals() {
                    {
                        let id = goal.id.clone();
                        let done = goal.done;
                        rsx! {
                            li { key: "{goal.id}",
                                class: if done { "goal-item goal-item--done" } else { "goal-item" },
                                button {
                                    class: "goal-toggle",
                                    "aria-pressed": if done { "true" } else { "false" },
                                    onclick: move |_| on_toggle((id.clone(), !done)),
                                    if done { "\u{2713}" } else { "\u{25CB}" }
                                }
                                span { class: "goal-title", "{goal.title}" }
                            }
                        }
                    }
                }
            }

            div { class: "goal-add",
                Input {
                    value: new_title(),
                    oninput: move |v| new_title.set(v),
                    placeholder: "Add a goal, e.g. sleep 8 hours".to_string(),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: adding(),
                    onclick: on_add,
                    "Add"
                }
            }

            TabBar { current: Tab::Health }
        }
    }
}
