//! Page components for the KindClub app shell.

mod collection;
mod health;
mod home;
mod landing;
mod login;
mod onboarding;
mod settings;
mod signup;
mod welcome;

pub use collection::Collection;
pub use health::Health;
pub use home::Home;
pub use landing::Landing;
pub use login::Login;
pub use onboarding::Onboarding;
pub use settings::Settings;
pub use signup::Signup;
pub use welcome::Welcome;

use kindclub_core::{AuthError, CoreError};

/// Map a failed auth/data call to the inline message shown under the
/// form. Matches on error kinds, never on message text.
pub(crate) fn auth_error_message(err: &CoreError) -> String {
    match err {
        CoreError::Auth(AuthError::InvalidCredentials) => {
            "That email and password don't match.".to_string()
        }
        CoreError::Auth(AuthError::EmailNotConfirmed) => {
            "Please confirm your email before signing in.".to_string()
        }
        CoreError::Auth(AuthError::AlreadyRegistered) => {
            "An account with this email already exists. Try logging in instead.".to_string()
        }
        CoreError::Auth(AuthError::WeakPassword) => {
            "Please choose a password of at least 6 characters.".to_string()
        }
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_get_specific_messages() {
        let msg = auth_error_message(&CoreError::Auth(AuthError::InvalidCredentials));
        assert!(msg.contains("don't match"));

        let msg = auth_error_message(&CoreError::Auth(AuthError::AlreadyRegistered));
        assert!(msg.contains("already exists"));

        let msg = auth_error_message(&CoreError::Auth(AuthError::EmailNotConfirmed));
        assert!(msg.contains("confirm your email"));

        let msg = auth_error_message(&CoreError::Auth(AuthError::WeakPassword));
        assert!(msg.contains("at least 6"));
    }

    #[test]
    fn everything_else_gets_the_generic_message() {
        let msg = auth_error_message(&CoreError::NotSignedIn);
        assert_eq!(msg, "Something went wrong. Please try again.");

        let msg = auth_error_message(&CoreError::Auth(AuthError::Other("rate limited".into())));
        assert_eq!(msg, "Something went wrong. Please try again.");
    }
}
