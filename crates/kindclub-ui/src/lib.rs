//! KindClub UI Components
//!
//! Reusable Dioxus components for the KindClub desktop app, following
//! the warm, rounded aesthetic of the brand:
//! - **Coral (#ff7a59)**: primary actions, warmth
//! - **Sage (#8fbc8f)**: progress, growth, positive states
//! - **Cream (#fff8f0)**: backgrounds
//! - **Ink (#2d2a32)**: text
//!
//! Components carry structure and behavior only; all visual styling
//! lives in the app's global stylesheet keyed by these class names.

pub mod components;

pub use components::*;
