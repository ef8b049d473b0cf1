//! Reusable UI components
//!
//! Buttons, inputs, selection pills, and progress bars shared across the
//! app shell's pages.

mod button;
mod input;
mod pill;
mod progress;

pub use button::*;
pub use input::*;
pub use pill::*;
pub use progress::*;
