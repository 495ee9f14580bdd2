//! Session-review screen: per-child usage analytics with audio playback,
//! transcript, and share-link workflows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The snapshot is refetched wholesale for every (child filter, page)
//! combination; there is no incremental merge and no request fencing, so a
//! late response from a superseded request still lands (last writer wins).
//! Each row action is an independent API call wired to its own modal or the
//! shared audio element.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::audio_player::AudioPlayer;
use crate::components::share_modal::ShareModal;
use crate::components::transcript_modal::TranscriptModal;
use crate::components::usage_charts::{DailyUsageChart, HourlyUsageChart};
#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::net::types::parse_transcript;
use crate::net::types::{AnalyticsSnapshot, ConversationRecord, TranscriptMessage};
use crate::state::analytics::{
    AudioSession, ITEMS_PER_PAGE, SessionFilter, avg_minutes, format_showing, has_next, has_prev,
    pagination_visible, peak_usage_hour,
};
use crate::state::fetch::FetchState;
use crate::state::session::use_session;
#[cfg(feature = "csr")]
use crate::util::browser::alert;
use crate::util::time::format_ist;

/// Transcript modal payload: which child it belongs to and the parsed
/// messages (`None` when the backend sent a non-array payload).
#[derive(Clone)]
struct TranscriptView {
    child_name: String,
    messages: Option<Vec<TranscriptMessage>>,
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let session = use_session();

    // Deep links from the parents screen carry ?child={id}.
    let query = use_query_map();
    let child_from_url = query.get_untracked().get("child").unwrap_or_default();
    let filter = RwSignal::new(if child_from_url.is_empty() {
        SessionFilter::default()
    } else {
        SessionFilter::for_child(child_from_url)
    });

    let analytics = RwSignal::new(FetchState::<AnalyticsSnapshot>::Idle);
    let current_audio = RwSignal::new(None::<AudioSession>);
    let audio_ref = NodeRef::<leptos::html::Audio>::new();
    let transcript_view = RwSignal::new(None::<TranscriptView>);
    let share_url = RwSignal::new(None::<String>);

    // Fetch on mount and on every filter change. Failures keep the prior
    // snapshot and are only logged; there is no retry affordance.
    Effect::new(move || {
        let current = filter.get();
        analytics.update(|state| *state = std::mem::take(state).begin());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_analytics(&session, current.child(), current.page(), ITEMS_PER_PAGE)
                .await
            {
                Ok(snapshot) => analytics.set(FetchState::succeed(snapshot)),
                Err(err) => {
                    log::error!("failed to fetch analytics: {err}");
                    analytics.update(|state| {
                        *state = std::mem::take(state).fail(err.detail());
                    });
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = current;
    });

    let snapshot = move || analytics.get().data().cloned().unwrap_or_default();
    let child_name = move || snapshot().child_name.unwrap_or_default();
    let is_all = move || filter.with(SessionFilter::is_all);

    let on_child_change = move |ev: leptos::ev::Event| {
        filter.update(|f| f.set_child(event_target_value(&ev)));
    };

    let play_audio = move |record: ConversationRecord| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_conversation_audio(&session, &record.conversation_id).await {
                Ok(audio) => {
                    // Tear down any current playback before assigning the new
                    // source; at most one session plays at a time.
                    if let Some(el) = audio_ref.get_untracked() {
                        if !el.paused() {
                            let _ = el.pause();
                        }
                    }
                    current_audio.set(Some(AudioSession {
                        child_id: record.child_id.clone(),
                        conversation_id: record.conversation_id.clone(),
                        child_name: record.child_name.clone(),
                        url: audio.audio_url.clone(),
                        playing: false,
                    }));
                    let Some(el) = audio_ref.get_untracked() else {
                        return;
                    };
                    el.set_src(&audio.audio_url);
                    el.load();
                    // Fixed delay so the element registers the new source
                    // before play() is attempted.
                    gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                    let played = match el.play() {
                        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.is_ok(),
                        Err(_) => false,
                    };
                    if !played {
                        alert("Failed to load audio. Please try again.");
                    }
                }
                Err(err) => {
                    log::error!("audio play failed: {err}");
                    alert("Failed to load audio. Please try again.");
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = record;
    };

    let view_transcript = move |record: ConversationRecord| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_transcript(&session, &record.conversation_id).await {
                Ok(payload) => {
                    transcript_view.set(Some(TranscriptView {
                        child_name: record.child_name.clone(),
                        messages: parse_transcript(&payload),
                    }));
                }
                Err(err) => {
                    log::error!("failed to fetch transcript: {err}");
                    alert("Failed to load transcript. Please try again.");
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = record;
    };

    let share_conversation = move |record: ConversationRecord| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::share_conversation(&session, &record.conversation_id).await {
                Ok(link) => share_url.set(Some(link.share_url)),
                Err(err) => {
                    log::error!("failed to create share link: {err}");
                    alert("Failed to create share link. Please try again.");
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = record;
    };

    let on_prev = move |_| {
        filter.update(|f| f.set_page(f.page().saturating_sub(1)));
    };
    let on_next = move |_| {
        let limit = snapshot().pagination.total_pages;
        filter.update(|f| f.set_page((f.page() + 1).min(limit)));
    };

    view! {
        <div class="page page--analytics">
            <header class="page__header">
                <h1>
                    "Analytics Dashboard"
                    {move || {
                        let name = child_name();
                        if name.is_empty() { String::new() } else { format!(" - {name}") }
                    }}
                </h1>
                <p class="page__subtitle">
                    {move || {
                        if is_all() {
                            "Overall conversation analytics and usage patterns".to_owned()
                        } else {
                            format!("Individual analytics for {}", child_name())
                        }
                    }}
                </p>
            </header>

            <div class="page__filters">
                <select class="select" on:change=on_child_change prop:value=move || filter.with(|f| f.child().to_owned())>
                    <option value="all">"All Children"</option>
                    {move || {
                        let current = filter.with(|f| f.child().to_owned());
                        (current != "all")
                            .then(|| {
                                let label = {
                                    let name = child_name();
                                    if name.is_empty() { current.clone() } else { name }
                                };
                                view! { <option value=current.clone()>{label}</option> }
                            })
                    }}
                </select>
            </div>

            <Show
                when=move || !analytics.get().is_loading()
                fallback=|| view! { <div class="pulse">"Loading analytics..."</div> }
            >
                <div class="metric-grid">
                    <div class="card metric">
                        <h3>"Avg Conversation Time"</h3>
                        <p class="metric__value metric__value--primary">
                            {move || format!("{} min", avg_minutes(snapshot().avg_conversation_time))}
                        </p>
                    </div>
                    <div class="card metric">
                        <h3>"Total Conversations"</h3>
                        // Page-local count: the length of the current page's
                        // record list, not pagination.total.
                        <p class="metric__value metric__value--ok">
                            {move || snapshot().recent_conversations.len()}
                        </p>
                    </div>
                    <div class="card metric">
                        <h3>"Peak Usage Hour (IST)"</h3>
                        <p class="metric__value metric__value--warn">
                            {move || {
                                peak_usage_hour(&snapshot().hourly_usage)
                                    .map_or_else(|| "N/A".to_owned(), |hour| format!("{hour}:00 IST"))
                            }}
                        </p>
                    </div>
                </div>

                <div class="chart-grid">
                    <div class="card">
                        <h3>"Daily Conversation Time"</h3>
                        {move || view! { <DailyUsageChart data=snapshot().daily_usage/> }}
                    </div>
                    <div class="card">
                        <h3>"Hourly Usage Pattern"</h3>
                        {move || view! { <HourlyUsageChart data=snapshot().hourly_usage/> }}
                    </div>
                </div>

                <div class="card conversations">
                    <h3>"Recent Conversations"</h3>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Child"</th>
                                <th>"Date"</th>
                                <th>"Duration"</th>
                                <th>"Topics"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let records = snapshot().recent_conversations;
                                if records.is_empty() {
                                    vec![
                                        view! {
                                            <tr>
                                                <td class="table__empty" colspan="5">
                                                    "No recent conversations found"
                                                </td>
                                            </tr>
                                        }
                                            .into_any(),
                                    ]
                                } else {
                                    records
                                        .into_iter()
                                        .map(|record| {
                                            let play_record = record.clone();
                                            let transcript_record = record.clone();
                                            let share_record = record.clone();
                                            view! {
                                                <tr>
                                                    <td class="table__primary">{record.child_name.clone()}</td>
                                                    <td>{format_ist(&record.date)}</td>
                                                    <td>{record.duration.clone()}</td>
                                                    <td>{record.topics.clone()}</td>
                                                    <td>
                                                        <div class="table__actions">
                                                            <button
                                                                class="link link--play"
                                                                on:click=move |_| play_audio(play_record.clone())
                                                            >
                                                                "Play"
                                                            </button>
                                                            <button
                                                                class="link link--transcript"
                                                                on:click=move |_| view_transcript(
                                                                    transcript_record.clone(),
                                                                )
                                                            >
                                                                "Transcript"
                                                            </button>
                                                            <button
                                                                class="link link--share"
                                                                on:click=move |_| share_conversation(share_record.clone())
                                                            >
                                                                "Share"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        })
                                        .collect::<Vec<_>>()
                                }
                            }}
                        </tbody>
                    </table>

                    <Show when=move || {
                        pagination_visible(snapshot().pagination.total, ITEMS_PER_PAGE)
                    }>
                        <div class="pagination">
                            <span class="pagination__caption">
                                {move || {
                                    format_showing(
                                        filter.with(SessionFilter::page),
                                        ITEMS_PER_PAGE,
                                        snapshot().pagination.total,
                                    )
                                }}
                            </span>
                            <div class="pagination__controls">
                                <button
                                    class="btn"
                                    disabled=move || !has_prev(filter.with(SessionFilter::page))
                                    on:click=on_prev
                                >
                                    "Previous"
                                </button>
                                <span class="pagination__page">
                                    {move || {
                                        format!(
                                            "Page {} of {}",
                                            filter.with(SessionFilter::page),
                                            snapshot().pagination.total_pages,
                                        )
                                    }}
                                </span>
                                <button
                                    class="btn"
                                    disabled=move || {
                                        !has_next(
                                            filter.with(SessionFilter::page),
                                            snapshot().pagination.total_pages,
                                        )
                                    }
                                    on:click=on_next
                                >
                                    "Next"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </Show>

            <AudioPlayer current_audio=current_audio audio_ref=audio_ref/>

            {move || {
                transcript_view
                    .get()
                    .map(|tv| {
                        view! {
                            <TranscriptModal
                                child_name=tv.child_name
                                messages=tv.messages
                                on_close=Callback::new(move |()| transcript_view.set(None))
                            />
                        }
                    })
            }}

            {move || {
                share_url
                    .get()
                    .map(|url| {
                        view! {
                            <ShareModal
                                share_url=url
                                on_close=Callback::new(move |()| share_url.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
