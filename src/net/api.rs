//! REST operations against the admin backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`, with the session
//! bearer token attached when present. Native builds: stubs returning a
//! network error so pure logic stays testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from any authenticated endpoint expires the session (clears the
//! stored token and routes to `/login`) before `ApiError::Auth` reaches the
//! caller; everything else is classified by `net::error`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::error::http_error_message;
use super::types::{
    AnalyticsSnapshot, AudioUrl, ChapterList, Child, Credentials, LoginResponse, NewLesson,
    ParentPage, PromptList, ReleaseList, ShareLinkResponse, SharedConversation, StatsSummary,
    SubjectList, SystemStatus,
};
use crate::state::session::Session;

/// Base path for authenticated admin resources.
pub const ADMIN_BASE: &str = "/api/admin";

/// Characters escaped when a caller-supplied value lands in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Characters escaped when a caller-supplied value lands in a query value.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

// ========================
// Endpoint builders
// ========================

pub fn parents_endpoint(page: u32, limit: u32, search: &str) -> String {
    let mut url = format!("{ADMIN_BASE}/parents?page={page}&limit={limit}");
    if !search.is_empty() {
        url.push_str(&format!("&search={}", utf8_percent_encode(search, QUERY)));
    }
    url
}

pub fn children_endpoint(parent_id: &str) -> String {
    format!("{ADMIN_BASE}/parents/{parent_id}/children")
}

pub fn renew_endpoint(parent_id: &str) -> String {
    format!("{ADMIN_BASE}/parents/{parent_id}/renew")
}

pub fn analytics_endpoint(child: &str, page: u32, limit: u32) -> String {
    format!("{ADMIN_BASE}/analytics?child={child}&page={page}&limit={limit}")
}

pub fn prompt_endpoint(key: &str) -> String {
    format!("{ADMIN_BASE}/prompts/{}", utf8_percent_encode(key, SEGMENT))
}

pub fn audio_endpoint(conversation_id: &str) -> String {
    format!("{ADMIN_BASE}/conversations/{conversation_id}/audio")
}

pub fn transcript_endpoint(conversation_id: &str) -> String {
    format!("{ADMIN_BASE}/conversations/{conversation_id}/transcript")
}

pub fn share_endpoint(conversation_id: &str) -> String {
    format!("{ADMIN_BASE}/conversations/{conversation_id}/share")
}

pub fn shared_endpoint(share_token: &str) -> String {
    format!("{ADMIN_BASE}/shared/{}", utf8_percent_encode(share_token, SEGMENT))
}

// ========================
// Request core
// ========================

#[cfg(feature = "csr")]
async fn dispatch<T: DeserializeOwned>(
    session: &Session,
    builder: gloo_net::http::RequestBuilder,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let builder = match session.bearer() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    };
    let request = match body {
        Some(json) => builder.json(&json).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status() == 401 {
        session.expire();
        return Err(ApiError::Auth);
    }
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http { status, message: http_error_message(status, &body) });
    }
    response.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(session: &Session, url: &str) -> Result<T, ApiError> {
    dispatch(session, gloo_net::http::Request::get(url), None).await
}

#[cfg(feature = "csr")]
async fn post_json<T: DeserializeOwned>(
    session: &Session,
    url: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    dispatch(session, gloo_net::http::Request::post(url), body).await
}

#[cfg(feature = "csr")]
async fn put_json<T: DeserializeOwned>(
    session: &Session,
    url: &str,
    body: serde_json::Value,
) -> Result<T, ApiError> {
    dispatch(session, gloo_net::http::Request::put(url), Some(body)).await
}

#[cfg(not(feature = "csr"))]
fn browser_only<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available outside the browser".to_owned()))
}

// ========================
// Auth
// ========================

/// Exchange credentials for a bearer token via `POST /api/admin/login`.
///
/// # Errors
///
/// Returns `ApiError::Http` with the server's detail string on rejected
/// credentials.
pub async fn login(session: &Session, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Network(e.to_string()))?;
        post_json(session, &format!("{ADMIN_BASE}/login"), Some(body)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, credentials);
        browser_only()
    }
}

// ========================
// Dashboard
// ========================

/// Fetch aggregate platform counters.
pub async fn get_stats(session: &Session) -> Result<StatsSummary, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &format!("{ADMIN_BASE}/stats")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        browser_only()
    }
}

// ========================
// Parents & children
// ========================

/// Fetch one page of parent accounts, optionally filtered by a search term.
pub async fn get_parents(
    session: &Session,
    page: u32,
    limit: u32,
    search: &str,
) -> Result<ParentPage, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &parents_endpoint(page, limit, search)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, page, limit, search);
        browser_only()
    }
}

/// Fetch the children registered under a parent account.
pub async fn get_children(session: &Session, parent_id: &str) -> Result<Vec<Child>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &children_endpoint(parent_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, parent_id);
        browser_only()
    }
}

/// Renew a parent's subscription. The response body is ignored.
pub async fn renew_subscription(session: &Session, parent_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let _: serde_json::Value = post_json(session, &renew_endpoint(parent_id), None).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, parent_id);
        browser_only()
    }
}

// ========================
// Analytics & conversations
// ========================

/// Fetch the analytics snapshot for one (child filter, page) combination.
pub async fn get_analytics(
    session: &Session,
    child: &str,
    page: u32,
    limit: u32,
) -> Result<AnalyticsSnapshot, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &analytics_endpoint(child, page, limit)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, child, page, limit);
        browser_only()
    }
}

/// Resolve a signed playback URL for a conversation recording.
pub async fn get_conversation_audio(
    session: &Session,
    conversation_id: &str,
) -> Result<AudioUrl, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &audio_endpoint(conversation_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, conversation_id);
        browser_only()
    }
}

/// Fetch a conversation transcript. The payload shape varies (array of
/// messages, error object, null), so it is returned raw for
/// `types::parse_transcript` to classify.
pub async fn get_transcript(
    session: &Session,
    conversation_id: &str,
) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &transcript_endpoint(conversation_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, conversation_id);
        browser_only()
    }
}

/// Create a 24h share link for a conversation.
pub async fn share_conversation(
    session: &Session,
    conversation_id: &str,
) -> Result<ShareLinkResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_json(session, &share_endpoint(conversation_id), None).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, conversation_id);
        browser_only()
    }
}

/// Fetch a publicly shared conversation. Unauthenticated by design; a bare
/// session still works because an absent token simply omits the header.
pub async fn get_shared(session: &Session, share_token: &str) -> Result<SharedConversation, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &shared_endpoint(share_token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, share_token);
        browser_only()
    }
}

// ========================
// Content & lessons
// ========================

pub async fn get_subjects(session: &Session) -> Result<SubjectList, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &format!("{ADMIN_BASE}/subjects")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        browser_only()
    }
}

pub async fn get_chapters(session: &Session) -> Result<ChapterList, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &format!("{ADMIN_BASE}/chapters")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        browser_only()
    }
}

/// Create a lesson via `POST /api/lessons/create` (the one endpoint outside
/// the admin base path).
pub async fn create_lesson(session: &Session, lesson: &NewLesson) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(lesson).map_err(|e| ApiError::Network(e.to_string()))?;
        let _: serde_json::Value = post_json(session, "/api/lessons/create", Some(body)).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, lesson);
        browser_only()
    }
}

// ========================
// Prompts
// ========================

pub async fn get_prompts(session: &Session) -> Result<PromptList, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &format!("{ADMIN_BASE}/prompts")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        browser_only()
    }
}

/// Replace a stored prompt's content via `PUT /api/admin/prompts/{key}`.
pub async fn update_prompt(session: &Session, key: &str, content: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "content": content });
        let _: serde_json::Value = put_json(session, &prompt_endpoint(key), body).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, key, content);
        browser_only()
    }
}

// ========================
// Status & releases
// ========================

pub async fn get_system_status(session: &Session) -> Result<SystemStatus, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &format!("{ADMIN_BASE}/status")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        browser_only()
    }
}

pub async fn get_releases(session: &Session) -> Result<ReleaseList, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, &format!("{ADMIN_BASE}/releases")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        browser_only()
    }
}
