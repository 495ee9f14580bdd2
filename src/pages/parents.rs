//! Parent & child roster: searchable parent list with a child detail panel.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::{Child, Parent, ParentPage};
use crate::state::fetch::FetchState;
use crate::state::session::use_session;
#[cfg(feature = "csr")]
use crate::util::browser::alert;
use crate::util::time::format_ist;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn ParentsPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let parents = RwSignal::new(FetchState::<ParentPage>::Idle);
    let search = RwSignal::new(String::new());
    let selected_parent = RwSignal::new(None::<Parent>);
    let children = RwSignal::new(Vec::<Child>::new());

    // List fetches degrade to an empty page with a console log; only the
    // renew action surfaces a dialog.
    let fetch_parents = move |page: u32, term: String| {
        parents.update(|state| *state = std::mem::take(state).begin());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_parents(&session, page, PAGE_SIZE, &term).await {
                Ok(data) => parents.set(FetchState::succeed(data)),
                Err(err) => {
                    log::error!("failed to fetch parents: {err}");
                    parents.set(FetchState::succeed(ParentPage::default()));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (page, term);
    };

    Effect::new(move |prev: Option<()>| {
        // Initial load only; later fetches are driven by handlers.
        if prev.is_none() {
            fetch_parents(1, String::new());
        }
    });

    let on_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        search.set(term.clone());
        fetch_parents(1, term);
    };

    let select_parent = move |parent: Parent| {
        selected_parent.set(Some(parent.clone()));
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_children(&session, &parent.id).await {
                Ok(loaded) => children.set(loaded),
                Err(err) => log::error!("failed to fetch children: {err}"),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = parent;
    };

    let renew = move |parent_id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::renew_subscription(&session, &parent_id).await {
                Ok(()) => {
                    // Refresh the current page so the new balance shows.
                    let page = parents.get_untracked().data().map_or(1, |p| p.page);
                    fetch_parents(page, search.get_untracked());
                    alert("Subscription renewed successfully!");
                }
                Err(err) => alert(&format!("Failed to renew subscription: {}", err.detail())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = parent_id;
    };

    let page_data = move || parents.get().data().cloned().unwrap_or_default();
    let change_page = move |page: u32| {
        if page >= 1 {
            fetch_parents(page, search.get_untracked());
        }
    };

    view! {
        <div class="page page--parents">
            <header class="page__header">
                <h1>"Parent & Child Management"</h1>
                <p class="page__subtitle">"Manage parent accounts and their children"</p>
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search by parent name, email, or child name..."
                    prop:value=move || search.get()
                    on:input=on_search
                />
            </header>

            <Show
                when=move || !parents.get().is_loading()
                fallback=|| view! { <div class="pulse">"Loading parents..."</div> }
            >
                <div class="split-grid">
                    <div class="card">
                        <h3>{move || format!("Parents ({})", page_data().total)}</h3>
                        <div class="parent-list">
                            {move || {
                                page_data()
                                    .data
                                    .into_iter()
                                    .map(|parent| {
                                        let row = parent.clone();
                                        let renew_id = parent.id.clone();
                                        let is_selected = {
                                            let id = parent.id.clone();
                                            move || {
                                                selected_parent
                                                    .get()
                                                    .is_some_and(|p| p.id == id)
                                            }
                                        };
                                        view! {
                                            <div
                                                class="parent-card"
                                                class=("parent-card--selected", is_selected)
                                                on:click=move |_| select_parent(row.clone())
                                            >
                                                <div class="parent-card__body">
                                                    <h4>
                                                        {format!("{} {}", parent.first_name, parent.last_name)}
                                                    </h4>
                                                    <p class="parent-card__email">{parent.email.clone()}</p>
                                                    <p class="parent-card__meta">
                                                        {format!("Minutes: {}", parent.minutes_remaining)}
                                                    </p>
                                                    {parent
                                                        .created_at
                                                        .as_deref()
                                                        .map(|joined| {
                                                            view! {
                                                                <p class="parent-card__meta">
                                                                    {format!("Joined: {}", format_ist(joined))}
                                                                </p>
                                                            }
                                                        })}
                                                </div>
                                                <button
                                                    class="pill pill--renew"
                                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                        renew(renew_id.clone());
                                                    }
                                                >
                                                    "Renew"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <div class="pagination pagination--centered">
                            <button
                                class="btn"
                                disabled=move || {
                                    let p = page_data();
                                    p.page <= 1 || p.total == 0
                                }
                                on:click=move |_| change_page(page_data().page.saturating_sub(1))
                            >
                                "Previous"
                            </button>
                            <span class="pagination__page">
                                {move || {
                                    let p = page_data();
                                    format!("{} of {}", p.page, p.pages.max(1))
                                }}
                            </span>
                            <button
                                class="btn"
                                disabled=move || {
                                    let p = page_data();
                                    p.page >= p.pages || p.total == 0
                                }
                                on:click=move |_| change_page(page_data().page + 1)
                            >
                                "Next"
                            </button>
                        </div>
                    </div>

                    <div class="card">
                        <h3>
                            {move || {
                                selected_parent
                                    .get()
                                    .map_or_else(
                                        || "Children".to_owned(),
                                        |p| format!("Children for {}", p.first_name),
                                    )
                            }}
                        </h3>
                        {
                            let navigate = navigate.clone();
                            move || {
                            if selected_parent.get().is_none() {
                                return view! {
                                    <p class="muted">"Select a parent to view their children."</p>
                                }
                                    .into_any();
                            }
                            let list = children.get();
                            if list.is_empty() {
                                return view! {
                                    <p class="muted">"No children found for this parent."</p>
                                }
                                    .into_any();
                            }
                            let navigate = navigate.clone();
                            list.into_iter()
                                .map(move |child| {
                                    let analytics_href = format!("/analytics?child={}", child.id);
                                    let go = navigate.clone();
                                    view! {
                                        <div class="child-card">
                                            <h4>
                                                {format!("{} {}", child.first_name, child.last_name)}
                                            </h4>
                                            <div class="child-card__details">
                                                <p>
                                                    {format!(
                                                        "Age: {}",
                                                        child.age.map_or_else(|| "N/A".to_owned(), |a| a.to_string()),
                                                    )}
                                                </p>
                                                <p>
                                                    {format!(
                                                        "Gender: {}",
                                                        child.gender.as_deref().unwrap_or("N/A"),
                                                    )}
                                                </p>
                                                <p>
                                                    {format!(
                                                        "Focus Area: {}",
                                                        child.focus_area.as_deref().unwrap_or("N/A"),
                                                    )}
                                                </p>
                                                {child
                                                    .created_at
                                                    .as_deref()
                                                    .map(|added| {
                                                        view! {
                                                            <p class="child-card__meta">
                                                                {format!("Added: {}", format_ist(added))}
                                                            </p>
                                                        }
                                                    })}
                                            </div>
                                            <div class="child-card__footer">
                                                <span class="pill pill--active">"Active"</span>
                                                <button
                                                    class="pill pill--analytics"
                                                    on:click=move |_| go(
                                                        &analytics_href,
                                                        NavigateOptions::default(),
                                                    )
                                                >
                                                    "View Analytics"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                            }
                        }
                    </div>
                </div>
            </Show>
        </div>
    }
}
