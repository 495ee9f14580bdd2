//! Platform status: overall banner, per-service health, incident history.
//! Refreshes every 30 seconds while the screen is mounted.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::SystemStatus;
use crate::state::session::use_session;
#[cfg(feature = "csr")]
use crate::util::time::now_ist_display;

/// CSS modifier for a status dot.
fn status_dot_class(status: &str) -> &'static str {
    match status {
        "operational" => "dot--ok",
        "degraded" => "dot--warn",
        "outage" => "dot--down",
        _ => "dot--unknown",
    }
}

/// Headline text for the overall banner.
fn status_headline(status: &str) -> &'static str {
    match status {
        "operational" => "All Systems Operational",
        "degraded" => "Degraded Performance",
        "outage" => "Service Outage",
        _ => "Unknown Status",
    }
}

#[component]
pub fn StatusPage() -> impl IntoView {
    let session = use_session();

    let status = RwSignal::new(SystemStatus::default());
    let loading = RwSignal::new(true);
    let last_updated = RwSignal::new(String::new());

    let fetch_status = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_system_status(&session).await {
                Ok(data) => status.set(data),
                Err(err) => {
                    log::error!("failed to fetch status: {err}");
                    status.update(|s| s.overall = "degraded".to_owned());
                }
            }
            last_updated.set(now_ist_display());
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    };

    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            fetch_status();
        }
    });

    // 30s refresh, cancelled when the screen unmounts.
    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                fetch_status();
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="page page--status">
            <header class="page__header">
                <h1>"System Status"</h1>
                <p class="page__subtitle">"Current system health and past incidents"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="pulse">"Loading system status..."</div> }
            >
                <div class="card status-banner">
                    <div class="status-banner__row">
                        <span class=move || {
                            format!("dot {}", status_dot_class(&status.get().overall))
                        }></span>
                        <h2>{move || status_headline(&status.get().overall)}</h2>
                    </div>
                    <p class="muted">{move || format!("Last updated: {}", last_updated.get())}</p>
                </div>

                <div class="card">
                    <h3>"Services"</h3>
                    <div class="status-list">
                        {move || {
                            status
                                .get()
                                .services
                                .into_iter()
                                .map(|service| {
                                    view! {
                                        <div class="status-row">
                                            <div class="status-row__name">
                                                <span class=format!(
                                                    "dot {}",
                                                    status_dot_class(&service.status),
                                                )></span>
                                                <div>
                                                    <h4>{service.name.clone()}</h4>
                                                    <p class="muted">{service.description.clone()}</p>
                                                </div>
                                            </div>
                                            <div class="status-row__state">
                                                <span>{service.status.clone()}</span>
                                                {service
                                                    .response_time
                                                    .map(|ms| {
                                                        view! { <p class="muted">{format!("{ms}ms")}</p> }
                                                    })}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>

                <div class="card">
                    <h3>"Past Incidents"</h3>
                    {move || {
                        let incidents = status.get().incidents;
                        if incidents.is_empty() {
                            return view! {
                                <p class="muted status-list__empty">
                                    "No incidents in the past 30 days"
                                </p>
                            }
                                .into_any();
                        }
                        incidents
                            .into_iter()
                            .map(|incident| {
                                let window = match (&incident.start_time, &incident.end_time) {
                                    (Some(start), Some(end)) => {
                                        format!(
                                            "{} → {}",
                                            crate::util::time::format_ist(start),
                                            crate::util::time::format_ist(end),
                                        )
                                    }
                                    (Some(start), None) => crate::util::time::format_ist(start),
                                    _ => String::new(),
                                };
                                view! {
                                    <div class="incident">
                                        <span class=format!(
                                            "dot {}",
                                            status_dot_class(&incident.severity),
                                        )></span>
                                        <div class="incident__body">
                                            <h4>{incident.title.clone()}</h4>
                                            <p>{incident.description.clone()}</p>
                                            <p class="muted">
                                                {window}
                                                {format!("  ·  {}", incident.status)}
                                            </p>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
