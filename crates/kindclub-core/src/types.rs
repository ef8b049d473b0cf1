//! Shared types for KindClub
//!
//! Wire types mirror the backend tables one-to-one; content records
//! (quotes, challenges, lectures) are opaque to this client and displayed
//! verbatim by the UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum number of interests a member must pick during onboarding
pub const MIN_INTERESTS: usize = 3;

/// An authenticated backend user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Tokens plus user identity returned by sign-in/sign-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp when the access token expires, if reported
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

/// A member's profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Same id as the auth user
    pub id: String,
    pub display_name: String,
    /// Consecutive days with the daily challenge completed
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub push_notifications: bool,
    /// Preferred daily reminder time, "HH:MM"
    #[serde(default)]
    pub reminder_time: Option<String>,
}

/// Partial profile update; only present fields are written
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

/// A kindness quote (read-only content)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// A daily kindness challenge (read-only content)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// A short lecture/lesson (read-only content)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Per-user, per-day content assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAssignment {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub quote_id: String,
    pub challenge_id: String,
    pub lecture_id: String,
    #[serde(default)]
    pub challenge_done: bool,
}

/// The kind of content a collection entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Quote,
    Challenge,
    Lecture,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Quote => "quote",
            CollectionKind::Challenge => "challenge",
            CollectionKind::Lecture => "lecture",
        }
    }
}

/// Join record between a user and a saved piece of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: String,
    pub user_id: String,
    pub kind: CollectionKind,
    pub content_id: String,
}

/// A personal health goal tracked in the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthGoal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// Answers accumulated across the onboarding wizard.
///
/// Built incrementally, one step at a time, then handed to signup by
/// value; nothing is persisted until the account is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingAnswers {
    /// Mood picked on the mood-check step
    pub mood: Option<String>,
    /// Selected interests; kept unique, insertion-ordered
    pub interests: Vec<String>,
    /// The member's chosen focus goal
    pub goal: Option<String>,
    /// Display name entered on the name step
    pub name: String,
}

impl OnboardingAnswers {
    /// Add the interest if absent, remove it if present.
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    /// The interests step may advance once at least [`MIN_INTERESTS`]
    /// are selected.
    pub fn interests_ready(&self) -> bool {
        self.interests.len() >= MIN_INTERESTS
    }

    /// The name step may advance once the trimmed name is non-empty.
    pub fn name_ready(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_interest_twice_restores_set() {
        let mut answers = OnboardingAnswers::default();
        answers.toggle_interest("gratitude");
        answers.toggle_interest("volunteering");
        let before = answers.interests.clone();

        answers.toggle_interest("mindfulness");
        answers.toggle_interest("mindfulness");
        assert_eq!(answers.interests, before);
    }

    #[test]
    fn interests_gate_requires_three() {
        let mut answers = OnboardingAnswers::default();
        assert!(!answers.interests_ready());
        answers.toggle_interest("gratitude");
        assert!(!answers.interests_ready());
        answers.toggle_interest("volunteering");
        assert!(!answers.interests_ready());
        answers.toggle_interest("mindfulness");
        assert!(answers.interests_ready());
    }

    #[test]
    fn name_gate_ignores_whitespace() {
        let mut answers = OnboardingAnswers::default();
        assert!(!answers.name_ready());
        answers.name = "   ".to_string();
        assert!(!answers.name_ready());
        answers.name = "  Ada ".to_string();
        assert!(answers.name_ready());
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let json = r#"{"id":"u1","display_name":"Ada"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.streak, 0);
        assert!(!profile.onboarding_completed);
        assert!(profile.interests.is_empty());
        assert!(profile.reminder_time.is_none());
    }

    #[test]
    fn profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            onboarding_completed: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"onboarding_completed":true}"#);
    }

    #[test]
    fn collection_kind_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&CollectionKind::Lecture).unwrap(),
            r#""lecture""#
        );
        assert_eq!(CollectionKind::Quote.as_str(), "quote");
    }
}
