//! Page components for the marketing site.

mod community;
mod home;
mod join_club;
mod mission;
mod newsletter_confirm;
mod stories;

pub use community::Community;
pub use home::Home;
pub use join_club::JoinClub;
pub use mission::Mission;
pub use newsletter_confirm::NewsletterConfirm;
pub use stories::Stories;
