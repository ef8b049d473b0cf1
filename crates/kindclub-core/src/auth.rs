//! Authentication operations
//!
//! Thin wrappers over the backend's `/auth/v1` endpoints. Failures are
//! classified into [`AuthError`] kinds before they leave this module so
//! callers can match on structure instead of message text.

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::client::Backend;
use crate::error::{AuthError, CoreResult};
use crate::types::AuthSession;

/// Error payload shape the auth endpoints return.
///
/// Newer backends send `error_code` + `msg`; older ones send `error` +
/// `error_description`. Both are handled.
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AuthErrorBody {
    fn classify(self) -> AuthError {
        let message = self
            .msg
            .or(self.error_description)
            .or(self.error)
            .unwrap_or_default();
        AuthError::classify(self.error_code.as_deref(), &message)
    }
}

impl Backend {
    /// Create a new account and start a session.
    ///
    /// The display name travels in the signup metadata; the profile row
    /// itself is created separately once onboarding hands over its
    /// answers.
    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CoreResult<AuthSession> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "display_name": display_name },
        });
        let session = self.auth_request("signup", &body).await?;
        info!("signed up as {}", session.user.id);
        self.set_session(&session)?;
        Ok(session)
    }

    /// Sign in with email and password.
    pub async fn sign_in_with_password(
        &mut self,
        email: &str,
        password: &str,
    ) -> CoreResult<AuthSession> {
        let body = json!({ "email": email, "password": password });
        let session = self
            .auth_request("token?grant_type=password", &body)
            .await?;
        info!("signed in as {}", session.user.id);
        self.set_session(&session)?;
        Ok(session)
    }

    /// End the current session and forget the persisted one.
    ///
    /// The local session is cleared even if the revocation call fails;
    /// a stale server-side token is harmless compared to a client stuck
    /// signed in.
    pub async fn sign_out(&mut self) -> CoreResult<()> {
        if let Some(token) = self.access_token() {
            let result = self
                .http()
                .post(self.config().auth_url("logout"))
                .header("apikey", &self.config().anon_key)
                .bearer_auth(token)
                .send()
                .await;
            if let Err(e) = result {
                debug!("logout call failed, clearing session anyway: {}", e);
            }
        }
        self.clear_session()?;
        Ok(())
    }

    /// POST a body to an auth endpoint and parse either a session or a
    /// classified auth error.
    async fn auth_request(&self, path: &str, body: &serde_json::Value) -> CoreResult<AuthSession> {
        let response = self
            .http()
            .post(self.config().auth_url(path))
            .header("apikey", &self.config().anon_key)
            .json(body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<AuthSession>().await?)
        } else {
            let err: AuthErrorBody = response.json().await.unwrap_or(AuthErrorBody {
                error_code: None,
                msg: None,
                error_description: None,
                error: None,
            });
            Err(err.classify().into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_payload_shape_classifies_by_code() {
        let body: AuthErrorBody = serde_json::from_str(
            r#"{"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(body.classify(), AuthError::InvalidCredentials);
    }

    #[test]
    fn legacy_payload_shape_classifies_by_description() {
        let body: AuthErrorBody = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#,
        )
        .unwrap();
        assert_eq!(body.classify(), AuthError::EmailNotConfirmed);
    }

    #[test]
    fn empty_payload_is_other() {
        let body: AuthErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.classify(), AuthError::Other(String::new()));
    }
}
