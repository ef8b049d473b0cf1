//! Site navigation.
//!
//! Desktop: horizontal links. Mobile: hamburger button opening a
//! full-screen overlay; any navigation closes it.

use dioxus::prelude::*;

use crate::app::SiteView;

#[derive(Props, Clone, PartialEq)]
pub struct SiteNavProps {
    /// The active view
    pub current: SiteView,
    /// Whether the mobile menu overlay is open
    pub menu_open: bool,
    /// Navigation handler (closes the menu in the root component)
    pub on_navigate: EventHandler<SiteView>,
    /// Hamburger toggle handler
    pub on_toggle_menu: EventHandler<()>,
}

/// Top navigation bar with mobile overlay.
#[component]
pub fn SiteNav(props: SiteNavProps) -> Element {
    rsx! {
        header { class: "site-nav",
            button {
                class: "nav-brand",
                onclick: move |_| props.on_navigate.call(SiteView::Home),
                "KindClub"
            }

            nav { class: "nav-links",
                for target in SiteView::NAV {
                    button {
                        key: "{target.display_name()}",
                        class: if target == props.current { "nav-link active" } else { "nav-link" },
                        onclick: move |_| props.on_navigate.call(target),
                        "{target.display_name()}"
                    }
                }
            }

            button {
                class: "nav-hamburger",
                "aria-label": "Menu",
                "aria-expanded": if props.menu_open { "true" } else { "false" },
                onclick: move |_| props.on_toggle_menu.call(()),
                "\u{2630}"
            }
        }

        if props.menu_open {
            div { class: "mobile-menu",
                for target in SiteView::NAV {
                    button {
                        key: "{target.display_name()}",
                        class: "mobile-menu-link",
                        onclick: move |_| props.on_navigate.call(target),
                        "{target.display_name()}"
                    }
                }
            }
        }
    }
}
