//! Modal rendering a conversation transcript as a two-column chat.

use leptos::prelude::*;

use crate::net::types::{Speaker, TranscriptMessage};
use crate::util::time::format_time_ist;

/// Transcript modal. `messages` is `None` when the backend returned a
/// non-array payload; that renders as an empty state rather than an error.
#[component]
pub fn TranscriptModal(
    child_name: String,
    messages: Option<Vec<TranscriptMessage>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Conversation Transcript - {child_name}");
    let body = match messages {
        Some(messages) => view! {
            <div class="chat">
                {messages
                    .into_iter()
                    .map(|msg| {
                        view! { <ChatBubble msg=msg child_name=child_name.clone()/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        None => view! {
            <p class="chat__empty">"No transcript data available"</p>
        }
        .into_any(),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--transcript" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h3>{title}</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="dialog__scroll">{body}</div>
            </div>
        </div>
    }
}

#[component]
fn ChatBubble(msg: TranscriptMessage, child_name: String) -> impl IntoView {
    let is_user = msg.user_type == Speaker::User;
    let speaker = if is_user { child_name } else { "Doro".to_owned() };
    let timestamp = msg.timestamp.as_deref().map(format_time_ist);

    view! {
        <div class="chat__row" class=("chat__row--user", is_user)>
            <div class="chat__bubble" class=("chat__bubble--user", is_user)>
                <div class="chat__speaker">{speaker}</div>
                <div class="chat__text">{msg.text}</div>
                {timestamp.map(|ts| view! { <div class="chat__timestamp">{ts}</div> })}
            </div>
        </div>
    }
}
