//! Wire-schema DTOs for the admin REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend payloads exactly (a camelCase/snake_case
//! mix), renamed through serde so the Rust side stays idiomatic. Collections
//! and optional sections use `#[serde(default)]` so a partial payload renders
//! as an empty section instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// ========================
// Auth
// ========================

/// Credentials for `POST /api/admin/login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// ========================
// Dashboard
// ========================

/// Aggregate platform counters for the dashboard tiles.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default)]
    pub total_parents: u64,
    #[serde(default)]
    pub total_children: u64,
    #[serde(default)]
    pub total_conversations: u64,
    #[serde(default)]
    pub total_minutes: f64,
}

// ========================
// Parents & children
// ========================

/// One page of parent accounts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ParentPage {
    #[serde(default)]
    pub data: Vec<Parent>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl Default for ParentPage {
    fn default() -> Self {
        Self { data: Vec::new(), page: 1, limit: 10, total: 0, pages: 0 }
    }
}

/// A parent account row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Parent {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub minutes_remaining: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A child profile under a parent account.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Child {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub focus_area: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ========================
// Analytics
// ========================

/// Full analytics payload for one (child filter, page) combination.
/// Replaced wholesale on every fetch; nothing is merged incrementally.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub daily_usage: Vec<DailyUsage>,
    #[serde(default)]
    pub hourly_usage: Vec<HourlyUsage>,
    #[serde(default)]
    pub avg_conversation_time: f64,
    #[serde(default)]
    pub recent_conversations: Vec<ConversationRecord>,
    #[serde(default)]
    pub pagination: Pagination,
    /// Present when the snapshot is filtered to a single child.
    #[serde(default)]
    pub child_name: Option<String>,
}

/// Total conversation minutes for one calendar day.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUsage {
    pub date: String,
    #[serde(default)]
    pub total_minutes: f64,
}

/// Total conversation minutes for one hour-of-day bucket (IST).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HourlyUsage {
    pub hour: u8,
    #[serde(default)]
    pub duration: f64,
}

/// One row of the recent-conversations table. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    pub child_id: String,
    pub conversation_id: String,
    pub child_name: String,
    pub date: String,
    /// Preformatted by the backend; rendered verbatim.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub topics: String,
}

/// Server-side pagination cursor for the conversation table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { total: 0, page: 1, total_pages: 1 }
    }
}

// ========================
// Conversations
// ========================

/// Signed playback URL for a conversation recording.
#[derive(Clone, Debug, Deserialize)]
pub struct AudioUrl {
    pub audio_url: String,
}

/// Share-link creation payload. The URL is displayed verbatim; expiry is
/// server-enforced (24h).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkResponse {
    pub share_url: String,
}

/// Who produced a transcript message.
///
/// Read leniently: only the string `"USER"` marks the child; a missing,
/// null, or otherwise malformed field degrades that one message to the
/// tutor side instead of failing the whole transcript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Speaker {
    /// The child.
    User,
    /// The tutor (or any non-child speaker the backend reports).
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for Speaker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(if value.as_str() == Some("USER") { Self::User } else { Self::Other })
    }
}

/// One message of a conversation transcript, rendered in fetch order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TranscriptMessage {
    #[serde(default)]
    pub user_type: Speaker,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Parse a transcript payload, which is an ordered message array on the happy
/// path but can be an error object or null for missing recordings. Non-array
/// payloads degrade to `None` (the modal shows an empty state, not an error).
pub fn parse_transcript(payload: &serde_json::Value) -> Option<Vec<TranscriptMessage>> {
    if !payload.is_array() {
        return None;
    }
    serde_json::from_value(payload.clone()).ok()
}

/// Publicly shared conversation, fetched without authentication.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedConversation {
    #[serde(default)]
    pub transcript: serde_json::Value,
    #[serde(default)]
    pub shared_at: Option<String>,
}

// ========================
// Content & lessons
// ========================

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubjectList {
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChapterList {
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Lesson-creation form payload for `POST /api/lessons/create`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewLesson {
    pub title: String,
    pub subject: String,
    pub topic: String,
    pub description: String,
    /// Empty means the backend generates lesson content itself.
    pub prompt: String,
}

// ========================
// Prompts
// ========================

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PromptList {
    #[serde(default)]
    pub prompts: Vec<PromptEntry>,
}

/// An editable system prompt stored by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptEntry {
    pub key: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub last_modified: Option<String>,
}

// ========================
// Status & releases
// ========================

/// Platform health payload for the status screen.
#[derive(Clone, Debug, Deserialize)]
pub struct SystemStatus {
    #[serde(default = "default_overall")]
    pub overall: String,
    #[serde(default)]
    pub services: Vec<ServiceStatus>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

fn default_overall() -> String {
    "operational".to_owned()
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self {
            overall: default_overall(),
            services: Vec::new(),
            incidents: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_overall")]
    pub status: String,
    #[serde(default)]
    pub response_time: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReleaseList {
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// One published release, mirrored from the GitHub releases API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Release {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReleaseAsset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub browser_download_url: String,
}
