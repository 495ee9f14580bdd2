//! Content management: subject card grid.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::Subject;
use crate::state::fetch::FetchState;
use crate::state::session::use_session;

#[component]
pub fn ContentPage() -> impl IntoView {
    let session = use_session();
    let subjects = RwSignal::new(FetchState::<Vec<Subject>>::Idle);

    Effect::new(move || {
        subjects.update(|state| *state = std::mem::take(state).begin());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_subjects(&session).await {
                Ok(list) => subjects.set(FetchState::succeed(list.subjects)),
                Err(err) => {
                    log::error!("failed to fetch subjects: {err}");
                    subjects.update(|state| {
                        *state = std::mem::take(state).fail("Failed to load subjects");
                    });
                }
            }
        });
    });

    let subject_list = move || subjects.get().data().cloned().unwrap_or_default();

    view! {
        <div class="page page--content">
            <header class="page__header">
                <h1>"Content Management"</h1>
                <p class="page__subtitle">"Manage subjects and educational content"</p>
            </header>

            {move || {
                subjects
                    .get()
                    .error()
                    .map(|message| {
                        view! { <div class="banner banner--error">{message.to_owned()}</div> }
                    })
            }}

            <Show
                when=move || !subjects.get().is_loading()
                fallback=|| view! { <div class="pulse">"Loading subjects..."</div> }
            >
                <div class="card">
                    <h3>{move || format!("Subjects ({})", subject_list().len())}</h3>
                    <div class="subject-grid">
                        {move || {
                            subject_list()
                                .into_iter()
                                .map(|subject| {
                                    view! {
                                        <div class="subject-card">
                                            <h4>{subject.name.clone()}</h4>
                                            <p class="subject-card__description">
                                                {subject.description.clone()}
                                            </p>
                                            <span class="pill pill--id">{subject.id.clone()}</span>
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
