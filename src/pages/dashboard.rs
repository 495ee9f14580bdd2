//! Authenticated landing page: aggregate platform counters.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::StatsSummary;
use crate::state::fetch::FetchState;
use crate::state::session::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let stats = RwSignal::new(FetchState::<StatsSummary>::Idle);

    Effect::new(move || {
        stats.update(|state| *state = std::mem::take(state).begin());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_stats(&session).await {
                Ok(summary) => stats.set(FetchState::succeed(summary)),
                Err(err) => {
                    log::error!("failed to fetch stats: {err}");
                    stats.set(FetchState::succeed(StatsSummary::default()));
                }
            }
        });
    });

    let summary = move || stats.get().data().cloned().unwrap_or_default();

    view! {
        <div class="page page--dashboard">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <p class="page__subtitle">"Platform overview at a glance"</p>
            </header>

            <Show
                when=move || !stats.get().is_loading()
                fallback=|| view! { <div class="pulse">"Loading stats..."</div> }
            >
                <div class="metric-grid metric-grid--four">
                    <div class="card metric">
                        <h3>"Parents"</h3>
                        <p class="metric__value metric__value--primary">
                            {move || summary().total_parents}
                        </p>
                    </div>
                    <div class="card metric">
                        <h3>"Children"</h3>
                        <p class="metric__value metric__value--primary">
                            {move || summary().total_children}
                        </p>
                    </div>
                    <div class="card metric">
                        <h3>"Conversations"</h3>
                        <p class="metric__value metric__value--ok">
                            {move || summary().total_conversations}
                        </p>
                    </div>
                    <div class="card metric">
                        <h3>"Total Minutes"</h3>
                        <p class="metric__value metric__value--warn">
                            {move || format!("{:.0}", summary().total_minutes)}
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
