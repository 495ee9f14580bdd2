//! Failure taxonomy for backend requests.
//!
//! DESIGN
//! ======
//! Screens decide presentation (inline banner, blocking alert, silent log),
//! so the error type only classifies: authentication rejection, a non-2xx
//! response, or transport failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every `net::api` operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401). The stored token has
    /// already been cleared and the browser routed to `/login` by the time
    /// callers see this.
    #[error("session expired")]
    Auth,
    /// Any other non-2xx response, with the server's detail string when the
    /// body carried one.
    #[error("{message} (status {status})")]
    Http { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// The server-provided message for `Http` errors, or the generic display
    /// form otherwise. Screens show this verbatim in banners.
    pub fn detail(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Extract a human-readable message from a non-2xx response body.
///
/// The backend wraps validation failures as `{"detail": "..."}`. Bodies that
/// are not in that shape (or not JSON at all) are used verbatim, and an empty
/// body falls back to a status-derived message.
pub fn http_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {status}")
    } else {
        trimmed.to_owned()
    }
}
