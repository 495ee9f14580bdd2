//! Release notes pulled from the platform's GitHub releases.

#[cfg(test)]
#[path = "releases_test.rs"]
mod releases_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::Release;
use crate::state::fetch::FetchState;
use crate::state::session::use_session;
use crate::util::time::format_release_date;

/// Render a release body (GitHub-flavored markdown subset) to HTML.
fn render_markdown(body: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    let parser = pulldown_cmark::Parser::new_ext(body, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Asset size in megabytes with one decimal, e.g. `1.4 MB`.
fn asset_size_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}

#[component]
pub fn ReleasesPage() -> impl IntoView {
    let session = use_session();
    let releases = RwSignal::new(FetchState::<Vec<Release>>::Idle);

    Effect::new(move || {
        releases.update(|state| *state = std::mem::take(state).begin());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::get_releases(&session).await {
                Ok(list) => releases.set(FetchState::succeed(list.releases)),
                Err(err) => {
                    log::error!("failed to fetch releases: {err}");
                    releases.set(FetchState::succeed(Vec::new()));
                }
            }
        });
    });

    let release_list = move || releases.get().data().cloned().unwrap_or_default();

    view! {
        <div class="page page--releases">
            <header class="page__header">
                <h1>"Release Notes"</h1>
                <p class="page__subtitle">"Latest updates and changes to the platform"</p>
            </header>

            <Show
                when=move || !releases.get().is_loading()
                fallback=|| view! { <div class="pulse">"Loading releases..."</div> }
            >
                {move || {
                    let list = release_list();
                    if list.is_empty() {
                        return view! {
                            <div class="card card--empty">
                                <p class="muted">"No releases found"</p>
                            </div>
                        }
                            .into_any();
                    }
                    list.into_iter()
                        .map(|release| view! { <ReleaseCard release=release/> }.into_any())
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </Show>
        </div>
    }
}

#[component]
fn ReleaseCard(release: Release) -> impl IntoView {
    let title = release.name.clone().unwrap_or_else(|| release.tag_name.clone());
    let date = release
        .published_at
        .as_deref()
        .map(format_release_date)
        .unwrap_or_default();
    let body_html = release.body.as_deref().map(render_markdown);

    view! {
        <div class="card release">
            <div class="release__header">
                <div>
                    <h2>{title}</h2>
                    <div class="release__meta">
                        <span class="pill pill--tag">{release.tag_name.clone()}</span>
                        <span class="muted">{date}</span>
                        {release
                            .prerelease
                            .then(|| view! { <span class="pill pill--pre">"Pre-release"</span> })}
                    </div>
                </div>
                <a class="release__link" href=release.html_url.clone() target="_blank" rel="noopener noreferrer">
                    "View on GitHub →"
                </a>
            </div>

            {body_html
                .map(|html| {
                    view! { <div class="release__body" inner_html=html></div> }
                })}

            <Show when={
                let has_assets = !release.assets.is_empty();
                move || has_assets
            }>
                <div class="release__assets">
                    <h4>"Downloads:"</h4>
                    <div class="release__asset-list">
                        {release
                            .assets
                            .iter()
                            .map(|asset| {
                                view! {
                                    <a class="pill pill--asset" href=asset.browser_download_url.clone()>
                                        {format!("{} ({})", asset.name, asset_size_mb(asset.size))}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
