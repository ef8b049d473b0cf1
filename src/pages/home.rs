//! Home tab - today's quote, challenge, and lecture.

use dioxus::prelude::*;

use kindclub_core::{Challenge, CollectionKind, CoreError, DailyAssignment, Lecture, Quote};

use crate::components::{ChallengeCard, LectureCard, QuoteCard, Tab, TabBar};
use crate::context::{use_backend, use_backend_ready, use_session, use_session_store};

/// Home page component.
///
/// Loads the day's assignment once the backend is ready, then each
/// content record it points at. Content is opaque; it is shown verbatim.
#[component]
pub fn Home() -> Element {
    let backend = use_backend();
    let backend_ready = use_backend_ready();
    let session = use_session();
    let store = use_session_store();

    let mut assignment: Signal<Option<DailyAssignment>> = use_signal(|| None);
    let mut quote: Signal<Option<Quote>> = use_signal(|| None);
    let mut challenge: Signal<Option<Challenge>> = use_signal(|| None);
    let mut lecture: Signal<Option<Lecture>> = use_signal(|| None);
    let mut notice: Signal<Option<String>> = use_signal(|| None);
    let mut completing = use_signal(|| false);

    // Load today's content when the backend comes up
    use_effect(move || {
        if !backend_ready() {
            return;
        }
        let Some(user) = session.peek().user.clone() else {
            return;
        };
        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            let Some(ref client) = *guard else {
                return;
            };

            let today = chrono::Local::now().date_naive();
            match client.daily_assignment(&user.id, today).await {
                Ok(Some(daily)) => {
                    match client.fetch_quote(&daily.quote_id).await {
                        Ok(q) => quote.set(Some(q)),
                        Err(e) => tracing::warn!("quote load failed: {}", e),
                    }
                    match client.fetch_challenge(&daily.challenge_id).await {
                        Ok(c) => challenge.set(Some(c)),
                        Err(e) => tracing::warn!("challenge load failed: {}", e),
                    }
                    match client.fetch_lecture(&daily.lecture_id).await {
                        Ok(l) => lecture.set(Some(l)),
                        Err(e) => tracing::warn!("lecture load failed: {}", e),
                    }
                    assignment.set(Some(daily));
                }
                Ok(None) => {
                    tracing::info!("no assignment for {}", today);
                }
                Err(e) => {
                    tracing::warn!("daily assignment load failed: {}", e);
                    notice.set(Some("Couldn't load today's content.".to_string()));
                }
            }
        });
    });

    let on_complete_challenge = move |_: ()| {
        if completing() {
            return;
        }
        let Some(daily) = assignment() else {
            return;
        };
        if daily.challenge_done {
            return;
        }
        let snapshot = session.peek().clone();
        let (Some(user), Some(profile)) = (snapshot.user, snapshot.profile) else {
            return;
        };
        completing.set(true);

        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            let Some(ref client) = *guard else {
                completing.set(false);
                return;
            };

            match client
                .complete_daily_challenge(&user.id, &daily.id, profile.streak)
                .await
            {
                Ok(updated) => {
                    assignment.with_mut(|a| {
                        if let Some(a) = a {
                            a.challenge_done = true;
                        }
                    });
                    store().profile_updated(updated);
                }
                Err(e) => {
                    tracing::warn!("challenge completion failed: {}", e);
                    notice.set(Some("Couldn't mark that done. Please try again.".to_string()));
                }
            }
            completing.set(false);
        });
    };

    let mut save_to_collection = move |kind: CollectionKind, content_id: String| {
        let Some(user) = session.peek().user.clone() else {
            return;
        };
        spawn(async move {
            let shared = backend();
            let guard = shared.read().await;
            let Some(ref client) = *guard else {
                return;
            };
            match client.add_to_collection(&user.id, kind, &content_id).await {
                Ok(_) => notice.set(Some("Saved to your collection.".to_string())),
                Err(CoreError::DuplicateRecord(_)) => {
                    notice.set(Some("Already in your collection.".to_string()))
                }
                Err(e) => {
                    tracing::warn!("collection save failed: {}", e);
                    notice.set(Some("Couldn't save that. Please try again.".to_string()));
                }
            }
        });
    };

    let snapshot = session();
    let greeting_name = snapshot
        .profile
        .as_ref()
        .map(|p| p.display_name.clone())
        .unwrap_or_default();
    let streak = snapshot.profile.as_ref().map(|p| p.streak).unwrap_or(0);
    let challenge_done = assignment().map(|a| a.challenge_done).unwrap_or(false);

    rsx! {
        main { class: "tab-page home-page",
            header { class: "home-header",
                h1 { class: "page-title", "Hi {greeting_name}" }
                div { class: "streak-badge", "\u{1F525} {streak} day streak" }
            }

            if let Some(message) = notice() {
                p { class: "page-notice", "{message}" }
            }

            if let Some(q) = quote() {
                QuoteCard {
                    quote: q.clone(),
                    on_save: move |_| save_to_collection(CollectionKind::Quote, q.id.clone()),
                }
            }

            if let Some(c) = challenge() {
                ChallengeCard {
                    challenge: c.clone(),
                    done: challenge_done,
                    busy: completing(),
                    on_complete: on_complete_challenge,
                    on_save: move |_| save_to_collection(CollectionKind::Challenge, c.id.clone()),
                }
            }

            if let Some(l) = lecture() {
                LectureCard {
                    lecture: l.clone(),
                    on_save: move |_| save_to_collection(CollectionKind::Lecture, l.id.clone()),
                }
            }

            if assignment().is_none() {
                p { class: "empty-state", "Nothing assigned for today yet. Check back soon." }
            }

            TabBar { current: Tab::Home }
        }
    }
}
