//! Shared auth guard for routed screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated route applies identical redirect behavior: no token in
//! the session means the browser belongs on `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Redirect to `/login` whenever the session holds no token.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
