//! KindClub Core Library
//!
//! Backend client and session state for the KindClub apps (the desktop
//! app shell and the marketing site). Everything here is a thin, typed
//! layer over a hosted PostgREST-style backend; there is no local
//! business logic beyond error classification and session bookkeeping.
//!
//! ## Overview
//!
//! - [`Backend`] — auth plus CRUD on profiles, daily content,
//!   collections, health goals, and the newsletter table
//! - [`SessionStore`] — subscribable `{ user, profile, loading }` state,
//!   the one place session identity lives
//! - [`CoreError`] / [`AuthError`] — structured failure kinds; the UI
//!   maps kinds to messages, never raw strings
//!
//! ## Quick Start
//!
//! ```ignore
//! use kindclub_core::{Backend, BackendConfig, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BackendConfig::resolve(None, None, data_dir)?;
//!     let mut backend = Backend::new(config)?;
//!     let session = SessionStore::new();
//!
//!     match backend.restore_session().await? {
//!         Some((auth, profile)) => session.resolved(Some((auth.user, profile))),
//!         None => session.resolved(None),
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

// Re-exports
pub use client::Backend;
pub use config::BackendConfig;
pub use error::{AuthError, CoreError, CoreResult};
pub use session::{SessionEvent, SessionSnapshot, SessionStore};
pub use types::{
    AuthSession, Challenge, CollectionItem, CollectionKind, DailyAssignment, HealthGoal,
    Lecture, OnboardingAnswers, Profile, ProfileUpdate, Quote, User, MIN_INTERESTS,
};
