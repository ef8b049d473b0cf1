//! Root component and view routing for the marketing site.
//!
//! One view tag is active at a time; `navigate` is total over the view
//! set, closes the mobile menu, and scrolls the viewport back to the
//! top as an observable side effect.

use std::sync::Arc;

use dioxus::document;
use dioxus::prelude::*;
use kindclub_core::Backend;

use crate::components::SiteNav;
use crate::pages::{Community, Home, JoinClub, Mission, NewsletterConfirm, Stories};
use crate::theme::GLOBAL_STYLES;

/// The marketing site's views. Exactly one is rendered at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteView {
    Home,
    Mission,
    Stories,
    Community,
    JoinClub,
    NewsletterConfirm,
}

impl SiteView {
    /// Views that appear in the navigation (the confirmation screen is
    /// only reached through a successful signup).
    pub const NAV: [SiteView; 5] = [
        SiteView::Home,
        SiteView::Mission,
        SiteView::Stories,
        SiteView::Community,
        SiteView::JoinClub,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SiteView::Home => "Home",
            SiteView::Mission => "Our Mission",
            SiteView::Stories => "Stories",
            SiteView::Community => "Community",
            SiteView::JoinClub => "Join the Club",
            SiteView::NewsletterConfirm => "Welcome",
        }
    }
}

/// Shared backend handle for the newsletter form
pub type SiteBackend = Option<Arc<Backend>>;

/// Active view tag plus the mobile-menu flag.
///
/// Navigation is the only transition that touches both fields: the
/// target becomes the active view and the menu closes, whatever
/// opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub view: SiteView,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            view: SiteView::Home,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Activate `target` and close the mobile menu.
    pub fn navigate_to(&mut self, target: SiteView) {
        self.view = target;
        self.menu_open = false;
    }
}

/// Root site component.
#[component]
pub fn Site() -> Element {
    let mut nav: Signal<NavState> = use_signal(NavState::new);

    let backend: Signal<SiteBackend> = use_signal(|| {
        match Backend::new(crate::backend_config()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("failed to initialize backend client: {}", e);
                None
            }
        }
    });
    use_context_provider(|| backend);

    // Every navigation also returns to the top of the page, whatever
    // triggered it
    let mut navigate = move |target: SiteView| {
        nav.write().navigate_to(target);
        let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
    };

    let state = nav();

    rsx! {
        style { {GLOBAL_STYLES} }

        SiteNav {
            current: state.view,
            menu_open: state.menu_open,
            on_navigate: navigate,
            on_toggle_menu: move |_| nav.write().toggle_menu(),
        }

        match state.view {
            SiteView::Home => rsx! { Home { on_navigate: navigate } },
            SiteView::Mission => rsx! { Mission {} },
            SiteView::Stories => rsx! { Stories {} },
            SiteView::Community => rsx! { Community {} },
            SiteView::JoinClub => rsx! {
                JoinClub { on_subscribed: move |_| navigate(SiteView::NewsletterConfirm) }
            },
            SiteView::NewsletterConfirm => rsx! {
                NewsletterConfirm { on_navigate: navigate }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_excludes_confirmation_view() {
        assert!(!SiteView::NAV.contains(&SiteView::NewsletterConfirm));
        assert_eq!(SiteView::NAV.len(), 5);
    }

    #[test]
    fn display_names_are_stable() {
        assert_eq!(SiteView::JoinClub.display_name(), "Join the Club");
        assert_eq!(SiteView::Mission.display_name(), "Our Mission");
    }

    #[test]
    fn navigation_activates_the_target() {
        let mut nav = NavState::new();
        assert_eq!(nav.view, SiteView::Home);

        nav.navigate_to(SiteView::Stories);
        assert_eq!(nav.view, SiteView::Stories);

        nav.navigate_to(SiteView::NewsletterConfirm);
        assert_eq!(nav.view, SiteView::NewsletterConfirm);
    }

    #[test]
    fn navigation_closes_the_mobile_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.menu_open);

        nav.navigate_to(SiteView::Mission);
        assert!(!nav.menu_open);

        // Also closed when it was never open
        nav.navigate_to(SiteView::Community);
        assert!(!nav.menu_open);
    }

    #[test]
    fn menu_toggle_round_trips() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
        assert_eq!(nav.view, SiteView::Home);
    }
}
