use super::*;

#[test]
fn analytics_snapshot_defaults_missing_sections() {
    let snap: AnalyticsSnapshot = serde_json::from_str("{}").unwrap();
    assert!(snap.daily_usage.is_empty());
    assert!(snap.hourly_usage.is_empty());
    assert!(snap.recent_conversations.is_empty());
    assert_eq!(snap.avg_conversation_time, 0.0);
    assert_eq!(snap.pagination, Pagination { total: 0, page: 1, total_pages: 1 });
    assert!(snap.child_name.is_none());
}

#[test]
fn analytics_snapshot_reads_camel_case_wire_names() {
    let raw = r#"{
        "dailyUsage": [{"date": "2026-01-10", "totalMinutes": 42.5}],
        "hourlyUsage": [{"hour": 18, "duration": 12.0}],
        "avgConversationTime": 7.4,
        "recentConversations": [{
            "childId": "c1",
            "conversationId": "conv9",
            "childName": "Asha",
            "date": "2026-01-10T09:30:00Z",
            "duration": "8 min",
            "topics": "fractions"
        }],
        "pagination": {"total": 25, "page": 2, "totalPages": 3},
        "childName": "Asha"
    }"#;
    let snap: AnalyticsSnapshot = serde_json::from_str(raw).unwrap();
    assert_eq!(snap.daily_usage[0].total_minutes, 42.5);
    assert_eq!(snap.hourly_usage[0].hour, 18);
    assert_eq!(snap.recent_conversations[0].conversation_id, "conv9");
    assert_eq!(snap.pagination.total_pages, 3);
    assert_eq!(snap.child_name.as_deref(), Some("Asha"));
}

#[test]
fn speaker_maps_user_and_everything_else() {
    let msg: TranscriptMessage =
        serde_json::from_str(r#"{"user_type": "USER", "text": "hi"}"#).unwrap();
    assert_eq!(msg.user_type, Speaker::User);

    let msg: TranscriptMessage =
        serde_json::from_str(r#"{"user_type": "ASSISTANT", "text": "hello"}"#).unwrap();
    assert_eq!(msg.user_type, Speaker::Other);
}

#[test]
fn missing_or_malformed_speaker_degrades_to_other() {
    let msg: TranscriptMessage = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
    assert_eq!(msg.user_type, Speaker::Other);

    let msg: TranscriptMessage =
        serde_json::from_str(r#"{"user_type": null, "text": "hi"}"#).unwrap();
    assert_eq!(msg.user_type, Speaker::Other);

    let msg: TranscriptMessage =
        serde_json::from_str(r#"{"user_type": 3, "text": "hi"}"#).unwrap();
    assert_eq!(msg.user_type, Speaker::Other);
}

#[test]
fn one_odd_message_does_not_discard_the_transcript() {
    let payload = serde_json::json!([
        {"user_type": "USER", "text": "what is 2+2"},
        {"text": "four!"}
    ]);
    let messages = parse_transcript(&payload).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].user_type, Speaker::User);
    assert_eq!(messages[1].user_type, Speaker::Other);
}

#[test]
fn parse_transcript_accepts_message_array() {
    let payload = serde_json::json!([
        {"user_type": "USER", "text": "what is 2+2", "timestamp": "2026-01-10T09:30:00Z"},
        {"user_type": "ASSISTANT", "text": "four!"}
    ]);
    let messages = parse_transcript(&payload).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].user_type, Speaker::User);
    assert!(messages[1].timestamp.is_none());
}

#[test]
fn parse_transcript_degrades_on_non_array_payload() {
    assert!(parse_transcript(&serde_json::json!({"error": "no recording"})).is_none());
    assert!(parse_transcript(&serde_json::Value::Null).is_none());
    assert!(parse_transcript(&serde_json::json!("gone")).is_none());
}

#[test]
fn parent_page_defaults_to_first_empty_page() {
    let page: ParentPage = serde_json::from_str("{}").unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total, 0);
    assert_eq!(page.pages, 0);
}

#[test]
fn system_status_defaults_to_operational() {
    let status: SystemStatus = serde_json::from_str("{}").unwrap();
    assert_eq!(status.overall, "operational");
    assert!(status.services.is_empty());
    assert!(status.incidents.is_empty());
}

#[test]
fn stats_summary_reads_camel_case_totals() {
    let raw = r#"{"totalParents": 12, "totalChildren": 30, "totalConversations": 510, "totalMinutes": 6120.0}"#;
    let stats: StatsSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.total_parents, 12);
    assert_eq!(stats.total_children, 30);
    assert_eq!(stats.total_conversations, 510);
    assert_eq!(stats.total_minutes, 6120.0);
}

#[test]
fn release_tolerates_missing_optionals() {
    let raw = r#"{"id": 1, "tag_name": "v1.2.0"}"#;
    let release: Release = serde_json::from_str(raw).unwrap();
    assert!(release.name.is_none());
    assert!(!release.prerelease);
    assert!(release.assets.is_empty());
}
