//! Lesson authoring: subject/chapter reference data plus the creation form.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::{Chapter, NewLesson, Subject};
use crate::state::session::use_session;

#[component]
pub fn LessonsPage() -> impl IntoView {
    let session = use_session();

    let subjects = RwSignal::new(Vec::<Subject>::new());
    let chapters = RwSignal::new(Vec::<Chapter>::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let title = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let prompt = RwSignal::new(String::new());

    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // Both reference lists load together; one failure empties both.
            let loaded = async {
                let subjects = api::get_subjects(&session).await?;
                let chapters = api::get_chapters(&session).await?;
                Ok::<_, crate::net::error::ApiError>((subjects, chapters))
            }
            .await;
            match loaded {
                Ok((subject_list, chapter_list)) => {
                    subjects.set(subject_list.subjects);
                    chapters.set(chapter_list.chapters);
                }
                Err(err) => {
                    log::error!("failed to fetch lesson reference data: {err}");
                    error.set(Some("Failed to load subjects and chapters".to_owned()));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    });

    let reset_form = move || {
        title.set(String::new());
        subject.set(String::new());
        topic.set(String::new());
        description.set(String::new());
        prompt.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);
        success.set(None);

        let lesson = NewLesson {
            title: title.get(),
            subject: subject.get(),
            topic: topic.get(),
            description: description.get(),
            prompt: prompt.get(),
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::create_lesson(&session, &lesson).await {
                Ok(()) => {
                    success.set(Some("Lesson created successfully!".to_owned()));
                    reset_form();
                }
                Err(err) => {
                    log::error!("failed to create lesson: {err}");
                    error.set(Some(err.detail()));
                }
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = lesson;
            submitting.set(false);
        }
    };

    view! {
        <div class="page page--lessons">
            <header class="page__header">
                <h1>"Lesson Management"</h1>
                <p class="page__subtitle">"Create new lessons for the platform"</p>
            </header>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="banner banner--error">{message}</div> })
            }}
            {move || {
                success
                    .get()
                    .map(|message| view! { <div class="banner banner--success">{message}</div> })
            }}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="pulse">"Loading lesson data..."</div> }
            >
                <div class="card">
                    <form class="form" on:submit=on_submit>
                        <label class="form__field">
                            "Title"
                            <input
                                class="form__input"
                                type="text"
                                required
                                placeholder="Enter lesson title"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </label>

                        <div class="form__row">
                            <label class="form__field">
                                "Subject"
                                <select
                                    class="form__input"
                                    required
                                    prop:value=move || subject.get()
                                    on:change=move |ev| subject.set(event_target_value(&ev))
                                >
                                    <option value="">"Select a subject"</option>
                                    {move || {
                                        subjects
                                            .get()
                                            .into_iter()
                                            .map(|s| {
                                                view! { <option value=s.id.clone()>{s.name.clone()}</option> }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            </label>

                            <label class="form__field">
                                "Topic"
                                <input
                                    class="form__input"
                                    type="text"
                                    required
                                    placeholder="Enter topic/chapter name"
                                    prop:value=move || topic.get()
                                    on:input=move |ev| topic.set(event_target_value(&ev))
                                />
                            </label>
                        </div>

                        <label class="form__field">
                            "Description"
                            <textarea
                                class="form__input"
                                required
                                rows="3"
                                placeholder="Brief description of what the lesson should cover"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <label class="form__field">
                            "Custom Prompt (Optional)"
                            <textarea
                                class="form__input"
                                rows="6"
                                placeholder="Leave empty for AI-generated content"
                                prop:value=move || prompt.get()
                                on:input=move |ev| prompt.set(event_target_value(&ev))
                            ></textarea>
                            <span class="form__hint">
                                "If left empty, AI will generate comprehensive lesson content based on the title, subject, topic, and description."
                            </span>
                        </label>

                        <div class="form__actions">
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Creating..." } else { "Create Lesson" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
