//! UI components for the marketing site.

mod newsletter_form;
mod site_nav;

pub use newsletter_form::{NewsletterForm, SubscribeOutcome};
pub use site_nav::SiteNav;
