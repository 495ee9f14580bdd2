//! System prompt list with an inline editor per entry.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::PromptEntry;
use crate::state::fetch::FetchState;
use crate::state::session::use_session;
#[cfg(feature = "csr")]
use crate::util::browser::alert;

const PREVIEW_LIMIT: usize = 500;

/// Truncate long prompt bodies for the read-only preview.
fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_LIMIT {
        let cut: String = content.chars().take(PREVIEW_LIMIT).collect();
        format!("{cut}...")
    } else {
        content.to_owned()
    }
}

#[component]
pub fn PromptsPage() -> impl IntoView {
    let session = use_session();

    let prompts = RwSignal::new(FetchState::<Vec<PromptEntry>>::Idle);
    let editing_key = RwSignal::new(None::<String>);
    let edit_content = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        let _ = reload.get();
        prompts.update(|state| *state = std::mem::take(state).begin());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_prompts(&session).await {
                Ok(list) => prompts.set(FetchState::succeed(list.prompts)),
                Err(err) => {
                    log::error!("failed to fetch prompts: {err}");
                    prompts.update(|state| *state = std::mem::take(state).fail(err.detail()));
                }
            }
        });
    });

    let start_edit = move |entry: PromptEntry| {
        editing_key.set(Some(entry.key));
        edit_content.set(entry.content);
    };

    let cancel_edit = move |_| {
        editing_key.set(None);
        edit_content.set(String::new());
    };

    let save_edit = move |_| {
        let Some(key) = editing_key.get_untracked() else {
            return;
        };
        let content = edit_content.get_untracked();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::update_prompt(&session, &key, &content).await {
                Ok(()) => {
                    editing_key.set(None);
                    edit_content.set(String::new());
                    reload.update(|v| *v += 1);
                }
                Err(err) => {
                    log::error!("failed to update prompt: {err}");
                    alert("Failed to update prompt");
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (key, content);
    };

    let prompt_list = move || prompts.get().data().cloned().unwrap_or_default();

    view! {
        <div class="page page--prompts">
            <header class="page__header">
                <h1>"Prompt Management"</h1>
                <p class="page__subtitle">"View and edit system prompts"</p>
            </header>

            <Show
                when=move || !prompts.get().is_loading()
                fallback=|| view! { <div class="pulse">"Loading prompts..."</div> }
            >
                <div class="card">
                    <div class="prompt-list">
                        {move || {
                            prompt_list()
                                .into_iter()
                                .map(|entry| {
                                    let edit_entry = entry.clone();
                                    let is_editing = {
                                        let key = entry.key.clone();
                                        move || editing_key.get().as_deref() == Some(key.as_str())
                                    };
                                    view! {
                                        <div class="prompt-entry">
                                            <div class="prompt-entry__header">
                                                <div>
                                                    <h3>{entry.key.clone()}</h3>
                                                    <p class="prompt-entry__meta">
                                                        {format!(
                                                            "Last modified: {}",
                                                            entry.last_modified.as_deref().unwrap_or("unknown"),
                                                        )}
                                                    </p>
                                                </div>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| start_edit(edit_entry.clone())
                                                >
                                                    "Edit"
                                                </button>
                                            </div>
                                            <Show
                                                when=is_editing.clone()
                                                fallback={
                                                    let content = entry.content.clone();
                                                    move || {
                                                        view! {
                                                            <pre class="prompt-entry__preview">{preview(&content)}</pre>
                                                        }
                                                    }
                                                }
                                            >
                                                <div class="prompt-entry__editor">
                                                    <textarea
                                                        class="prompt-entry__textarea"
                                                        placeholder="Enter prompt content..."
                                                        prop:value=move || edit_content.get()
                                                        on:input=move |ev| edit_content.set(event_target_value(&ev))
                                                    ></textarea>
                                                    <div class="prompt-entry__actions">
                                                        <button class="btn btn--primary" on:click=save_edit>
                                                            "Save"
                                                        </button>
                                                        <button class="btn" on:click=cancel_edit>
                                                            "Cancel"
                                                        </button>
                                                    </div>
                                                </div>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
