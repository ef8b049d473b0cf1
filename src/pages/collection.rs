//! Collection tab - everything the member has saved.

use dioxus::prelude::*;

use kindclub_core::{CollectionItem, CollectionKind};

use crate::components::{Tab, TabBar};
use crate::context::{use_backend, use_backend_ready, use_session};

/// A saved item with its display text resolved
#[derive(Debug, Clone, PartialEq)]
struct ResolvedItem {
    kind: CollectionKind,
    text: String,
}

/// Collection page component.
#[component]
pub fn Collection() -> Element {
    let backend = use_backend();
    let backend_ready = use_backend_ready();
    let session = use_session();

    let mut items: Signal<Vec<ResolvedItem>> = use_signal(Vec::new);
    let mut loaded = use_signal(|| false);

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

            let saved: Vec<CollectionItem> = match client.list_collection(&user.id).await {
                Ok(saved) => saved,
                Err(e) => {
                    tracing::warn!("collection load failed: {}", e);
                    loaded.set(true);
                    return;
                }
            };

            let mut resolved = Vec::with_capacity(saved.len());
            for item in saved {
                let text = match item.kind {
                    CollectionKind::Quote => client
                        .fetch_quote(&item.content_id)
                        .await
                        .map(|q| q.text),
                    CollectionKind::Challenge => client
                        .fetch_challenge(&item.content_id)
                        .await
                        .map(|c| c.title),
                    CollectionKind::Lecture => client
                        .fetch_lecture(&item.content_id)
                        .await
                        .map(|l| l.title),
                };
                match text {
                    Ok(text) => resolved.push(ResolvedItem {
                        kind: item.kind,
                        text,
                    }),
                    Err(e) => tracing::warn!("saved item {} unresolvable: {}", item.id, e),
                }
            }
            items.set(resolved);
            loaded.set(true);
        });
    });

    let all = items();
    let sections = [
        ("Quotes", CollectionKind::Quote),
        ("Challenges", CollectionKind::Challenge),
        ("Lessons", CollectionKind::Lecture),
    ];

    rsx! {
        main { class: "tab-page collection-page",
            h1 { class: "page-title", "Your collection" }

            if loaded() && all.is_empty() {
                p { class: "empty-state",
                    "Nothing saved yet. Tap the heart on anything that moves you."
                }
            }

            for (heading, kind) in sections {
                {
                    let group: Vec<&ResolvedItem> =
                        all.iter().filter(|i| i.kind == kind).collect();
                    rsx! {
                        if !group.is_empty() {
                            section { class: "collection-section",
                                h2 { class: "section-header", "{heading}" }
                                ul { class: "collection-list",
                                    for (i, item) in group.iter().enumerate() {
                                        li { key: "{heading}-{i}", class: "collection-item",
                                            "{item.text}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            TabBar { current: Tab::Collection }
        }
    }
}
