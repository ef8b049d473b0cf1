//! UI components for the KindClub app shell.

mod content_card;
mod hold_button;
mod loading;
mod tab_bar;

pub use content_card::{ChallengeCard, LectureCard, QuoteCard};
pub use hold_button::HoldButton;
pub use loading::Loading;
pub use tab_bar::{Tab, TabBar};
