//! Public shared-conversation viewer, reachable without authentication via a
//! time-limited share token.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::net::types::parse_transcript;
use crate::net::types::{Speaker, TranscriptMessage};
use crate::state::fetch::FetchState;
use crate::state::session::use_session;
use crate::util::time::{format_ist, format_time_ist};

/// Parsed shared-conversation payload ready for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
struct SharedView {
    messages: Option<Vec<TranscriptMessage>>,
    shared_at: Option<String>,
}

#[component]
pub fn SharedConversationPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();

    let conversation = RwSignal::new(FetchState::<SharedView>::Idle);

    Effect::new(move || {
        let token = params.get().get("token").unwrap_or_default();
        conversation.update(|state| *state = std::mem::take(state).begin());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_shared(&session, &token).await {
                Ok(payload) => {
                    conversation.set(FetchState::succeed(SharedView {
                        messages: parse_transcript(&payload.transcript),
                        shared_at: payload.shared_at,
                    }));
                }
                Err(err) => {
                    conversation.update(|state| {
                        *state = std::mem::take(state).fail(err.detail());
                    });
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = token;
    });

    view! {
        <div class="shared-page">
            {move || match conversation.get() {
                FetchState::Idle | FetchState::Loading(_) => {
                    view! { <div class="pulse">"Loading shared conversation..."</div> }.into_any()
                }
                FetchState::Failed { error, .. } => {
                    view! {
                        <div class="shared-page__error">
                            <h1>"Link Expired"</h1>
                            <p class="muted">{error}</p>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Loaded(data) => {
                    view! {
                        <div class="card shared-page__card">
                            <header class="page__header">
                                <h1>"Shared Conversation"</h1>
                                {data
                                    .shared_at
                                    .as_deref()
                                    .map(|ts| {
                                        view! {
                                            <p class="page__subtitle">
                                                {format!("Shared on {}", format_ist(ts))}
                                            </p>
                                        }
                                    })}
                            </header>
                            <SharedTranscript messages=data.messages/>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SharedTranscript(messages: Option<Vec<TranscriptMessage>>) -> impl IntoView {
    let Some(messages) = messages else {
        return view! { <p class="chat__empty">"No conversation data available"</p> }.into_any();
    };

    view! {
        <div class="chat">
            {messages
                .into_iter()
                .map(|msg| {
                    let is_user = msg.user_type == Speaker::User;
                    let speaker = if is_user { "Child" } else { "Doro" };
                    let timestamp = msg.timestamp.as_deref().map(format_time_ist);
                    view! {
                        <div class="chat__row" class=("chat__row--user", is_user)>
                            <div class="chat__bubble" class=("chat__bubble--user", is_user)>
                                <div class="chat__speaker">{speaker}</div>
                                <div class="chat__text">{msg.text}</div>
                                {timestamp
                                    .map(|ts| view! { <div class="chat__timestamp">{ts}</div> })}
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
