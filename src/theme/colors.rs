//! Color constants for the KindClub brand.
//!
//! Warm, rounded, friendly palette.

#![allow(dead_code)]

// === CREAM (Backgrounds) ===
pub const CREAM: &str = "#fff8f0";
pub const CREAM_DARK: &str = "#f7ecdf";
pub const CARD_BORDER: &str = "#eadfd2";

// === CORAL (Primary, Warmth) ===
pub const CORAL: &str = "#ff7a59";
pub const CORAL_SOFT: &str = "rgba(255, 122, 89, 0.15)";

// === SAGE (Growth, Progress) ===
pub const SAGE: &str = "#8fbc8f";
pub const SAGE_DEEP: &str = "#5f8f5f";

// === TEXT ===
pub const INK: &str = "#2d2a32";
pub const INK_SOFT: &str = "rgba(45, 42, 50, 0.7)";
pub const INK_MUTED: &str = "rgba(45, 42, 50, 0.5)";

// === SEMANTIC ===
pub const DANGER: &str = "#d64550";
pub const GOLD: &str = "#e9b44c";
