//! Bottom tab bar for the signed-in portion of the app.
//!
//! Flat navigation: any tab can jump to any other tab.

use dioxus::prelude::*;

use crate::app::AppView;
use crate::context::use_view;

/// The four signed-in tabs
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tab {
    Home,
    Collection,
    Health,
    Settings,
}

impl Tab {
    /// Get the display name for this tab
    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Home => "Today",
            Tab::Collection => "Collection",
            Tab::Health => "Health",
            Tab::Settings => "Settings",
        }
    }

    /// Get the view for this tab
    pub fn view(&self) -> AppView {
        match self {
            Tab::Home => AppView::Home,
            Tab::Collection => AppView::Collection,
            Tab::Health => AppView::Health,
            Tab::Settings => AppView::Settings,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// Currently active tab
    pub current: Tab,
}

/// Bottom navigation bar
///
/// Shows: Today | Collection | Health | Settings
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let mut view = use_view();

    let tabs = [Tab::Home, Tab::Collection, Tab::Health, Tab::Settings];

    rsx! {
        nav { class: "tab-bar",
            for tab in tabs {
                button {
                    key: "{tab.display_name()}",
                    class: if tab == props.current { "tab-bar-item active" } else { "tab-bar-item" },
                    onclick: move |_| view.set(tab.view()),

                    span { class: "tab-bar-icon", {render_tab_icon(tab)} }
                    span { class: "tab-bar-label", "{tab.display_name()}" }
                }
            }
        }
    }
}

/// Render Lucide icon for a tab
fn render_tab_icon(tab: Tab) -> Element {
    match tab {
        Tab::Home => rsx! {
            // Lucide sun icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "4" }
                path { d: "M12 2v2" }
                path { d: "M12 20v2" }
                path { d: "m4.93 4.93 1.41 1.41" }
                path { d: "m17.66 17.66 1.41 1.41" }
                path { d: "M2 12h2" }
                path { d: "M20 12h2" }
                path { d: "m6.34 17.66-1.41 1.41" }
                path { d: "m19.07 4.93-1.41 1.41" }
            }
        },
        Tab::Collection => rsx! {
            // Lucide heart icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
            }
        },
        Tab::Health => rsx! {
            // Lucide activity icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2" }
            }
        },
        Tab::Settings => rsx! {
            // Lucide settings icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
                circle { cx: "12", cy: "12", r: "3" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_map_to_their_views() {
        assert_eq!(Tab::Home.view(), AppView::Home);
        assert_eq!(Tab::Collection.view(), AppView::Collection);
        assert_eq!(Tab::Health.view(), AppView::Health);
        assert_eq!(Tab::Settings.view(), AppView::Settings);
    }
}
