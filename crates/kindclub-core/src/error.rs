//! Error types for the KindClub backend client

use thiserror::Error;

/// Structured authentication failure kinds.
///
/// The backend reports auth failures as a JSON payload with an
/// `error_code` and a human message; [`AuthError::classify`] maps that
/// payload to one of these kinds so the UI never matches on raw strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong email/password combination
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Account exists but the email was never confirmed
    #[error("email not confirmed")]
    EmailNotConfirmed,

    /// Signup attempted with an email that already has an account
    #[error("an account with this email already exists")]
    AlreadyRegistered,

    /// Password rejected by the backend's strength policy
    #[error("password does not meet requirements")]
    WeakPassword,

    /// Any other auth failure, carrying the backend's message
    #[error("auth error: {0}")]
    Other(String),
}

impl AuthError {
    /// Classify a backend auth error payload into a structured kind.
    ///
    /// `error_code` is the machine-readable code when the backend sends
    /// one; `message` is the human text, used as a fallback signal for
    /// older payload shapes that carry only a message.
    pub fn classify(error_code: Option<&str>, message: &str) -> Self {
        match error_code {
            Some("invalid_credentials") => return AuthError::InvalidCredentials,
            Some("email_not_confirmed") => return AuthError::EmailNotConfirmed,
            Some("user_already_exists") | Some("email_exists") => {
                return AuthError::AlreadyRegistered
            }
            Some("weak_password") => return AuthError::WeakPassword,
            _ => {}
        }
        let lower = message.to_ascii_lowercase();
        if lower.contains("invalid login credentials") {
            AuthError::InvalidCredentials
        } else if lower.contains("email not confirmed") {
            AuthError::EmailNotConfirmed
        } else if lower.contains("already registered") || lower.contains("already exists") {
            AuthError::AlreadyRegistered
        } else if lower.contains("password") && lower.contains("at least") {
            AuthError::WeakPassword
        } else {
            AuthError::Other(message.to_string())
        }
    }
}

/// Main error type for KindClub backend operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success REST response that is not a recognized kind
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Structured authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Unique-constraint conflict on insert (Postgres 23505)
    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A call requiring an authenticated session was made without one
    #[error("not signed in")]
    NotSignedIn,

    /// Record expected to exist was not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Missing or invalid backend configuration
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error (session file, data dir)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// The Postgres error code PostgREST reports for unique-constraint
/// violations. A duplicate newsletter signup surfaces this way.
pub const PG_UNIQUE_VIOLATION: &str = "23505";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_error_code() {
        assert_eq!(
            AuthError::classify(Some("invalid_credentials"), "whatever"),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            AuthError::classify(Some("email_not_confirmed"), ""),
            AuthError::EmailNotConfirmed
        );
        assert_eq!(
            AuthError::classify(Some("user_already_exists"), ""),
            AuthError::AlreadyRegistered
        );
        assert_eq!(
            AuthError::classify(Some("weak_password"), ""),
            AuthError::WeakPassword
        );
    }

    #[test]
    fn classify_by_message_fallback() {
        assert_eq!(
            AuthError::classify(None, "Invalid login credentials"),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            AuthError::classify(None, "User already registered"),
            AuthError::AlreadyRegistered
        );
        assert_eq!(
            AuthError::classify(None, "Password should be at least 6 characters"),
            AuthError::WeakPassword
        );
    }

    #[test]
    fn classify_unknown_keeps_message() {
        let err = AuthError::classify(Some("over_request_rate_limit"), "Too many requests");
        assert_eq!(err, AuthError::Other("Too many requests".to_string()));
    }

    #[test]
    fn error_display() {
        let err = CoreError::DuplicateRecord("newsletter_subscribers".to_string());
        assert_eq!(format!("{}", err), "Duplicate record: newsletter_subscribers");

        let err = CoreError::Api {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(format!("{}", err), "API error (500): internal");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
    }
}
