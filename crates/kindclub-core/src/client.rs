//! Backend client
//!
//! `Backend` is the single entry point for everything the hosted service
//! exposes: auth (see `auth.rs`), profile/content/collection/health-goal
//! reads and writes, and the newsletter signup. Tables are addressed
//! through a small set of PostgREST helpers; every typed operation below
//! is one filtered select, insert, or update.
//!
//! # Example
//!
//! ```ignore
//! use kindclub_core::{Backend, BackendConfig};
//!
//! let mut backend = Backend::new(config)?;
//! let session = backend.sign_in_with_password("ada@example.com", "secret").await?;
//! let profile = backend.fetch_profile(&session.user.id).await?;
//! ```

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::error::{CoreError, CoreResult, PG_UNIQUE_VIOLATION};
use crate::types::{
    AuthSession, Challenge, CollectionItem, CollectionKind, DailyAssignment, HealthGoal,
    Lecture, OnboardingAnswers, Profile, ProfileUpdate, Quote,
};

const TABLE_PROFILES: &str = "profiles";
const TABLE_DAILY: &str = "daily_assignments";
const TABLE_QUOTES: &str = "quotes";
const TABLE_CHALLENGES: &str = "challenges";
const TABLE_LECTURES: &str = "lectures";
const TABLE_COLLECTION: &str = "user_collection";
const TABLE_HEALTH_GOALS: &str = "health_goals";
const TABLE_NEWSLETTER: &str = "newsletter_subscribers";

/// Error payload shape PostgREST returns for failed requests
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-success REST response to a [`CoreError`].
///
/// Unique-constraint violations (Postgres code 23505, or a bare HTTP
/// 409) become [`CoreError::DuplicateRecord`] so callers can treat
/// "already there" differently from real failures.
fn classify_rest_error(status: u16, body: &str, table: &str) -> CoreError {
    let parsed: RestErrorBody = serde_json::from_str(body).unwrap_or(RestErrorBody {
        code: None,
        message: None,
    });
    if parsed.code.as_deref() == Some(PG_UNIQUE_VIOLATION) || status == 409 {
        return CoreError::DuplicateRecord(table.to_string());
    }
    CoreError::Api {
        status,
        message: parsed.message.unwrap_or_else(|| body.to_string()),
    }
}

/// Client for the hosted KindClub backend
pub struct Backend {
    http: reqwest::Client,
    config: BackendConfig,
    access_token: Option<String>,
}

impl Backend {
    /// Create a client; the data directory is created if missing so the
    /// session file always has a home.
    pub fn new(config: BackendConfig) -> CoreResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            access_token: None,
        })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub(crate) fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Whether a user is currently signed in
    pub fn is_signed_in(&self) -> bool {
        self.access_token.is_some()
    }

    /// Adopt a fresh session and persist it for the next launch.
    pub(crate) fn set_session(&mut self, session: &AuthSession) -> CoreResult<()> {
        self.access_token = Some(session.access_token.clone());
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(self.config.session_file(), json)?;
        Ok(())
    }

    /// Drop the in-memory token and remove the persisted session file.
    pub(crate) fn clear_session(&mut self) -> CoreResult<()> {
        self.access_token = None;
        let path = self.config.session_file();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Load the persisted session, if any, and verify it by fetching the
    /// profile. Returns the signed-in pair, or `None` when there is no
    /// usable session (absent, corrupt, or rejected by the backend).
    pub async fn restore_session(&mut self) -> CoreResult<Option<(AuthSession, Profile)>> {
        let path = self.config.session_file();
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Ok(None),
        };
        let session: AuthSession = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("persisted session unreadable, discarding: {}", e);
                let _ = std::fs::remove_file(&path);
                return Ok(None);
            }
        };

        self.access_token = Some(session.access_token.clone());
        match self.fetch_profile(&session.user.id).await {
            Ok(profile) => Ok(Some((session, profile))),
            Err(CoreError::Api { status: 401, .. }) | Err(CoreError::NotFound(_)) => {
                debug!("persisted session rejected by backend, clearing");
                self.clear_session()?;
                Ok(None)
            }
            Err(e) => {
                self.access_token = None;
                Err(e)
            }
        }
    }

    // --- PostgREST helpers ---------------------------------------------

    /// Bearer token for REST calls: the user's token when signed in,
    /// the anon key otherwise.
    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.config.anon_key)
    }

    fn require_session(&self) -> CoreResult<()> {
        if self.is_signed_in() {
            Ok(())
        } else {
            Err(CoreError::NotSignedIn)
        }
    }

    /// Filtered select returning all matching rows.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> CoreResult<Vec<T>> {
        let mut query: Vec<(&str, String)> = vec![("select", "*".to_string())];
        query.extend(filters.iter().cloned());
        let response = self
            .http
            .get(self.config.rest_url(table))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(self.bearer())
            .query(&query)
            .send()
            .await?;
        self.parse_rows(table, response).await
    }

    /// Insert one row and return it.
    async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        body: &serde_json::Value,
    ) -> CoreResult<T> {
        let response = self
            .http
            .post(self.config.rest_url(table))
            .header("apikey", &self.config.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer())
            .json(body)
            .send()
            .await?;
        let mut rows: Vec<T> = self.parse_rows(table, response).await?;
        rows.pop()
            .ok_or_else(|| CoreError::NotFound(table.to_string()))
    }

    /// Patch rows matching the filters and return the updated rows.
    async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
        body: &serde_json::Value,
    ) -> CoreResult<Vec<T>> {
        let response = self
            .http
            .patch(self.config.rest_url(table))
            .header("apikey", &self.config.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer())
            .query(filters)
            .json(body)
            .send()
            .await?;
        self.parse_rows(table, response).await
    }

    async fn parse_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        response: reqwest::Response,
    ) -> CoreResult<Vec<T>> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Vec<T>>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(classify_rest_error(status.as_u16(), &body, table))
        }
    }

    // --- Profiles ------------------------------------------------------

    /// Fetch a profile by user id.
    pub async fn fetch_profile(&self, user_id: &str) -> CoreResult<Profile> {
        let rows: Vec<Profile> = self
            .select(TABLE_PROFILES, &[("id", format!("eq.{user_id}"))])
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| CoreError::NotFound(format!("profile {user_id}")))
    }

    /// Apply a partial update to a profile and return the new record.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> CoreResult<Profile> {
        self.require_session()?;
        let body = serde_json::to_value(update)?;
        let rows: Vec<Profile> = self
            .update(TABLE_PROFILES, &[("id", format!("eq.{user_id}"))], &body)
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| CoreError::NotFound(format!("profile {user_id}")))
    }

    /// Create the profile row for a freshly signed-up user from their
    /// onboarding answers.
    pub async fn create_profile_from_answers(
        &self,
        user_id: &str,
        answers: &OnboardingAnswers,
    ) -> CoreResult<Profile> {
        self.require_session()?;
        let body = json!({
            "id": user_id,
            "display_name": answers.name.trim(),
            "interests": answers.interests,
            "streak": 0,
            "onboarding_completed": false,
            "push_notifications": false,
        });
        self.insert(TABLE_PROFILES, &body).await
    }

    /// Flip `onboarding_completed` on; called once from the welcome
    /// screen's continue action.
    pub async fn mark_onboarding_completed(&self, user_id: &str) -> CoreResult<Profile> {
        self.update_profile(
            user_id,
            &ProfileUpdate {
                onboarding_completed: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    // --- Daily content -------------------------------------------------

    /// The user's content assignment for a given date, if one exists.
    pub async fn daily_assignment(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> CoreResult<Option<DailyAssignment>> {
        let rows: Vec<DailyAssignment> = self
            .select(
                TABLE_DAILY,
                &[
                    ("user_id", format!("eq.{user_id}")),
                    ("date", format!("eq.{date}")),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn fetch_quote(&self, id: &str) -> CoreResult<Quote> {
        self.fetch_content(TABLE_QUOTES, id).await
    }

    pub async fn fetch_challenge(&self, id: &str) -> CoreResult<Challenge> {
        self.fetch_content(TABLE_CHALLENGES, id).await
    }

    pub async fn fetch_lecture(&self, id: &str) -> CoreResult<Lecture> {
        self.fetch_content(TABLE_LECTURES, id).await
    }

    async fn fetch_content<T: DeserializeOwned>(&self, table: &str, id: &str) -> CoreResult<T> {
        let rows: Vec<T> = self.select(table, &[("id", format!("eq.{id}"))]).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| CoreError::NotFound(format!("{table}/{id}")))
    }

    /// Mark today's challenge done and bump the streak. Returns the
    /// updated profile so the UI can show the new count immediately.
    pub async fn complete_daily_challenge(
        &self,
        user_id: &str,
        assignment_id: &str,
        current_streak: u32,
    ) -> CoreResult<Profile> {
        self.require_session()?;
        let _: Vec<DailyAssignment> = self
            .update(
                TABLE_DAILY,
                &[("id", format!("eq.{assignment_id}"))],
                &json!({ "challenge_done": true }),
            )
            .await?;
        self.update_profile(
            user_id,
            &ProfileUpdate {
                streak: Some(current_streak + 1),
                ..Default::default()
            },
        )
        .await
    }

    // --- Collection ----------------------------------------------------

    pub async fn list_collection(&self, user_id: &str) -> CoreResult<Vec<CollectionItem>> {
        self.select(TABLE_COLLECTION, &[("user_id", format!("eq.{user_id}"))])
            .await
    }

    /// Save a piece of content to the user's collection. Saving the same
    /// item twice surfaces as [`CoreError::DuplicateRecord`].
    pub async fn add_to_collection(
        &self,
        user_id: &str,
        kind: CollectionKind,
        content_id: &str,
    ) -> CoreResult<CollectionItem> {
        self.require_session()?;
        let body = json!({
            "user_id": user_id,
            "kind": kind.as_str(),
            "content_id": content_id,
        });
        self.insert(TABLE_COLLECTION, &body).await
    }

    // --- Health goals --------------------------------------------------

    pub async fn list_health_goals(&self, user_id: &str) -> CoreResult<Vec<HealthGoal>> {
        self.select(TABLE_HEALTH_GOALS, &[("user_id", format!("eq.{user_id}"))])
            .await
    }

    pub async fn add_health_goal(&self, user_id: &str, title: &str) -> CoreResult<HealthGoal> {
        self.require_session()?;
        let body = json!({ "user_id": user_id, "title": title, "done": false });
        self.insert(TABLE_HEALTH_GOALS, &body).await
    }

    pub async fn set_goal_done(&self, goal_id: &str, done: bool) -> CoreResult<HealthGoal> {
        self.require_session()?;
        let rows: Vec<HealthGoal> = self
            .update(
                TABLE_HEALTH_GOALS,
                &[("id", format!("eq.{goal_id}"))],
                &json!({ "done": done }),
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| CoreError::NotFound(format!("health goal {goal_id}")))
    }

    // --- Newsletter ----------------------------------------------------

    /// One insert attempt into the newsletter table; needs no session.
    /// A repeat signup comes back as [`CoreError::DuplicateRecord`].
    pub async fn subscribe_newsletter(&self, email: &str) -> CoreResult<()> {
        let response = self
            .http
            .post(self.config.rest_url(TABLE_NEWSLETTER))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(self.bearer())
            .json(&json!({ "email": email }))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(classify_rest_error(status.as_u16(), &body, TABLE_NEWSLETTER))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_duplicate() {
        let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#;
        let err = classify_rest_error(409, body, TABLE_NEWSLETTER);
        assert!(matches!(err, CoreError::DuplicateRecord(t) if t == "newsletter_subscribers"));
    }

    #[test]
    fn bare_conflict_status_maps_to_duplicate() {
        let err = classify_rest_error(409, "", TABLE_COLLECTION);
        assert!(matches!(err, CoreError::DuplicateRecord(_)));
    }

    #[test]
    fn other_codes_map_to_api_error() {
        let body = r#"{"code":"42501","message":"permission denied for table profiles"}"#;
        let err = classify_rest_error(403, body, TABLE_PROFILES);
        match err {
            CoreError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "permission denied for table profiles");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn session_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = BackendConfig::new("https://x", "key", dir.path().join("data"));
        let mut backend = Backend::new(config).unwrap();
        assert!(!backend.is_signed_in());

        let session = AuthSession {
            access_token: "tok".to_string(),
            refresh_token: "ref".to_string(),
            expires_at: None,
            user: crate::types::User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
            },
        };
        backend.set_session(&session).unwrap();
        assert!(backend.is_signed_in());
        assert!(backend.config().session_file().exists());

        backend.clear_session().unwrap();
        assert!(!backend.is_signed_in());
        assert!(!backend.config().session_file().exists());
    }

    #[tokio::test]
    async fn absent_or_corrupt_session_file_resolves_to_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let config = BackendConfig::new("https://x", "key", dir.path().join("data"));
        let mut backend = Backend::new(config).unwrap();

        // No file at all
        assert!(backend.restore_session().await.unwrap().is_none());

        // Unreadable file is discarded, not propagated
        std::fs::write(backend.config().session_file(), "not json").unwrap();
        assert!(backend.restore_session().await.unwrap().is_none());
        assert!(!backend.config().session_file().exists());
        assert!(!backend.is_signed_in());
    }

    #[test]
    fn unparseable_body_keeps_raw_text() {
        let err = classify_rest_error(500, "<html>oops</html>", TABLE_QUOTES);
        match err {
            CoreError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "<html>oops</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
