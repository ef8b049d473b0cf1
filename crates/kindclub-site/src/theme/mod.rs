//! Theme for the marketing site.

pub mod styles;

pub use styles::GLOBAL_STYLES;
