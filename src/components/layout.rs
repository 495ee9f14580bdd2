//! Sidebar chrome wrapping every authenticated screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Parents & Children", "/parents"),
    ("Analytics", "/analytics"),
    ("Content Management", "/content"),
    ("Lessons", "/lessons"),
    ("Prompts", "/prompts"),
    ("System Status", "/status"),
    ("Release Notes", "/releases"),
];

/// Shell layout: brand header, navigation rail, sign-out, and the routed
/// screen in the main column. Unauthenticated visits bounce to `/login`.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let location = use_location();

    let nav_buttons = NAV_ITEMS
        .iter()
        .map(|&(label, href)| {
            let navigate = navigate.clone();
            let is_active = move || location.pathname.get() == href;
            view! {
                <button
                    class="sidebar__link"
                    class=("sidebar__link--active", is_active)
                    on:click=move |_| navigate(href, NavigateOptions::default())
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let logout_navigate = navigate.clone();
    let on_logout = move |_| {
        session.log_out();
        logout_navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="admin-shell">
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <h1>"Doro Admin"</h1>
                </div>
                <nav class="sidebar__nav">{nav_buttons}</nav>
                <div class="sidebar__footer">
                    <button class="sidebar__logout" on:click=on_logout>
                        "Sign out"
                    </button>
                </div>
            </aside>
            <main class="admin-main">
                <Outlet/>
            </main>
        </div>
    }
}
