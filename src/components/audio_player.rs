//! Floating playback card for the active conversation recording.
//!
//! The `<audio>` element here is the only shared mutable browser resource in
//! the app. It exists while an `AudioSession` is active; the session-review
//! page pauses it before assigning a new source, so at most one recording
//! plays at a time.

use leptos::prelude::*;

use crate::state::analytics::AudioSession;

/// Playback card pinned to the bottom-right corner. Play/pause state follows
/// the element's own events so the flag stays honest even when playback ends
/// or fails on its own.
#[component]
pub fn AudioPlayer(
    current_audio: RwSignal<Option<AudioSession>>,
    audio_ref: NodeRef<leptos::html::Audio>,
) -> impl IntoView {
    let playing = move || current_audio.get().is_some_and(|a| a.playing);
    let set_playing = move |value: bool| {
        current_audio.update(|session| {
            if let Some(session) = session {
                session.playing = value;
            }
        });
    };

    let on_toggle = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = audio_ref.get_untracked() {
                if el.paused() {
                    if let Ok(promise) = el.play() {
                        leptos::task::spawn_local(async move {
                            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
                        });
                    }
                } else {
                    let _ = el.pause();
                }
            }
        }
    };

    let on_stop = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = audio_ref.get_untracked() {
                let _ = el.pause();
                el.set_current_time(0.0);
            }
        }
        current_audio.set(None);
    };

    view! {
        // The card stays mounted (hidden when idle) so the <audio> element is
        // always present to receive a new source.
        <div
            class="audio-player"
            class=("audio-player--hidden", move || current_audio.get().is_none())
        >
            <div class="audio-player__row">
                <span class="audio-player__title">
                    {move || {
                        current_audio
                            .get()
                            .map(|a| format!("Playing: {}", a.child_name))
                            .unwrap_or_default()
                    }}
                </span>
                <button class="btn audio-player__toggle" on:click=on_toggle>
                    {move || if playing() { "Pause" } else { "Play" }}
                </button>
                <button class="btn btn--danger audio-player__stop" on:click=on_stop>
                    "Stop"
                </button>
            </div>
            <audio
                node_ref=audio_ref
                class="audio-player__element"
                controls
                on:play=move |_| set_playing(true)
                on:pause=move |_| set_playing(false)
                on:ended=move |_| current_audio.set(None)
                on:error=move |_| log::error!("audio element reported an error")
            ></audio>
        </div>
    }
}
