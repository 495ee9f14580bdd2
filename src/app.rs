//! Root application component: session context + routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::AdminLayout;
use crate::pages::{
    analytics::AnalyticsPage, content::ContentPage, dashboard::DashboardPage,
    lessons::LessonsPage, login::LoginPage, parents::ParentsPage, prompts::PromptsPage,
    releases::ReleasesPage, shared::SharedConversationPage, status::StatusPage,
};
use crate::state::session::Session;

/// Root component. Loads the persisted session, provides it via context, and
/// sets up client-side routing. `/shared/:token` is the only public route
/// besides `/login`; everything else renders inside the guarded layout shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::load();
    provide_context(session);

    view! {
        <Title text="Doro Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("shared"), ParamSegment("token"))
                    view=SharedConversationPage
                />
                <ParentRoute path=StaticSegment("") view=AdminLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("parents") view=ParentsPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("content") view=ContentPage/>
                    <Route path=StaticSegment("lessons") view=LessonsPage/>
                    <Route path=StaticSegment("prompts") view=PromptsPage/>
                    <Route path=StaticSegment("status") view=StatusPage/>
                    <Route path=StaticSegment("releases") view=ReleasesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
