//! Bearer-token session for the signed-in staff member.
//!
//! DESIGN
//! ======
//! The token is held in an explicit `Session` object provided via Leptos
//! context and passed to every request, instead of being looked up from
//! ambient global storage at call sites. localStorage is only touched here,
//! so the persistence story stays in one place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// localStorage key the bearer token persists under.
pub const TOKEN_STORAGE_KEY: &str = "adminToken";

/// Format a token as an `Authorization` header value.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// The one durable piece of client state: an optional bearer token.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Build a session from the persisted token, if any.
    pub fn load() -> Self {
        Self { token: RwSignal::new(read_stored_token()) }
    }

    /// Reactive: whether a token is present. Route guards track this.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Non-reactive token read for request construction.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// `Authorization` header value, when a token is present.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| bearer_value(&t))
    }

    /// Store a freshly issued token and persist it.
    pub fn log_in(&self, token: String) {
        write_stored_token(Some(&token));
        self.token.set(Some(token));
    }

    /// Drop the token and its persisted copy.
    pub fn log_out(&self) {
        write_stored_token(None);
        self.token.set(None);
    }

    /// Backend rejected the token: drop it and force the browser to the
    /// login screen. Called from the request core on any 401.
    pub fn expire(&self) {
        self.log_out();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    }
}

/// Get the session from context.
pub fn use_session() -> Session {
    expect_context::<Session>()
}

fn read_stored_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn write_stored_token(token: Option<&str>) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        match token {
            Some(value) => {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, value);
            }
            None => {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}
