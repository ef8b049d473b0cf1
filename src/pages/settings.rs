//! Settings tab - notification preferences and account actions.

use dioxus::prelude::*;

use kindclub_core::ProfileUpdate;
use kindclub_ui::{Button, ButtonVariant, Input};

use crate::components::{Tab, TabBar};
use crate::context::{use_backend, use_session, use_session_store};

/// Value to seed the reminder field with, if any. Only the first
/// profile sighting seeds; later profile refreshes (a push toggle, a
/// streak bump) must not clobber an unsaved edit.
fn reminder_seed(already_seeded: bool, stored: Option<&str>) -> Option<String> {
    if already_seeded {
        None
    } else {
        Some(stored.unwrap_or_default().to_string())
    }
}

/// Settings page component.
#[component]
pub fn Settings() -> Element {
    let backend = use_backend();
    let store = use_session_store();
    let session = use_session();

    let mut reminder_input = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    // Seed the reminder field from the first profile sighting only
    let mut seeded = use_signal(|| false);
    use_effect(move || {
        let Some(profile) = session().profile else {
            return;
        };
        if let Some(value) = reminder_seed(seeded(), profile.reminder_time.as_deref()) {
            reminder_input.set(value);
            seeded.set(true);
        }
    });

    let mut apply_update = move |update: ProfileUpdate| {
        if saving() {
            return;
        }
        let Some(user) = session.peek().user.clone() else {
            return;
        };
        saving.set(true);
        notice.set(None);

        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            if let Some(ref client) = *guard {
                match client.update_profile(&user.id, &update).await {
                    Ok(profile) => store().profile_updated(profile),
                    Err(e) => {
                        tracing::warn!("settings update failed: {}", e);
                        notice.set(Some("Couldn't save that change.".to_string()));
                    }
                }
            }
            saving.set(false);
        });
    };

    let on_sign_out = move |_: ()| {
        spawn(async move {
            let shared = backend();
            let mut guard = shared.write().await;
            if let Some(ref mut client) = *guard {
                if let Err(e) = client.sign_out().await {
                    tracing::warn!("sign out failed: {}", e);
                }
            }
            drop(guard);
            // The session effect routes back to the landing page
            store().signed_out();
        });
    };

    let snapshot = session();
    let push_on = snapshot
        .profile
        .as_ref()
        .map(|p| p.push_notifications)
        .unwrap_or(false);
    let interests = snapshot
        .profile
        .as_ref()
        .map(|p| p.interests.clone())
        .unwrap_or_default();

    rsx! {
        main { class: "tab-page settings-page",
            h1 { class: "page-title", "Settings" }

            if let Some(message) = notice() {
                p { class: "page-notice", "{message}" }
            }

            section { class: "settings-section",
                h2 { class: "section-header", "Reminders" }

                div { class: "settings-row",
                    span { class: "settings-label", "Push notifications" }
                    button {
                        class: if push_on { "toggle toggle--on" } else { "toggle" },
                        "aria-pressed": if push_on { "true" } else { "false" },
                        disabled: saving(),
                        onclick: move |_| apply_update(ProfileUpdate {
                            push_notifications: Some(!push_on),
                            ..Default::default()
                        }),
                        if push_on { "On" } else { "Off" }
                    }
                }

                div { class: "settings-row",
                    Input {
                        value: reminder_input(),
                        oninput: move |v| reminder_input.set(v),
                        label: "daily reminder".to_string(),
                        input_type: "time".to_string(),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: saving(),
                        onclick: move |_| {
                            let time = reminder_input.read().trim().to_string();
                            if !time.is_empty() {
                                apply_update(ProfileUpdate {
                                    reminder_time: Some(time),
                                    ..Default::default()
                                });
                            }
                        },
                        "Save"
                    }
                }
            }

            section { class: "settings-section",
                h2 { class: "section-header", "Your interests" }
                div { class: "interest-chips",
                    for interest in interests {
                        span { key: "{interest}", class: "chip", "{interest}" }
                    }
                }
            }

            section { class: "settings-section",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: on_sign_out,
                    "Sign out"
                }
            }

            TabBar { current: Tab::Settings }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_profile_sighting_seeds_the_field() {
        assert_eq!(
            reminder_seed(false, Some("08:30")),
            Some("08:30".to_string())
        );
        assert_eq!(reminder_seed(false, None), Some(String::new()));
    }

    #[test]
    fn later_profile_refreshes_keep_the_unsaved_edit() {
        // A push toggle updates the profile mid-edit; the stored value
        // must not replace what the member is typing
        assert_eq!(reminder_seed(true, Some("09:00")), None);
        assert_eq!(reminder_seed(true, None), None);
    }
}
