//! Theme for the KindClub app shell.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
