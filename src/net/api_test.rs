use super::*;

#[test]
fn parents_endpoint_omits_empty_search() {
    assert_eq!(parents_endpoint(1, 10, ""), "/api/admin/parents?page=1&limit=10");
}

#[test]
fn parents_endpoint_encodes_search_term() {
    assert_eq!(
        parents_endpoint(2, 10, "ravi kumar"),
        "/api/admin/parents?page=2&limit=10&search=ravi%20kumar"
    );
}

#[test]
fn children_and_renew_endpoints_nest_under_parent() {
    assert_eq!(children_endpoint("p42"), "/api/admin/parents/p42/children");
    assert_eq!(renew_endpoint("p42"), "/api/admin/parents/p42/renew");
}

#[test]
fn analytics_endpoint_carries_filter_and_cursor() {
    assert_eq!(
        analytics_endpoint("all", 2, 10),
        "/api/admin/analytics?child=all&page=2&limit=10"
    );
    assert_eq!(
        analytics_endpoint("c7", 1, 10),
        "/api/admin/analytics?child=c7&page=1&limit=10"
    );
}

#[test]
fn prompt_endpoint_escapes_key_segment() {
    assert_eq!(
        prompt_endpoint("tutor/greeting v2"),
        "/api/admin/prompts/tutor%2Fgreeting%20v2"
    );
    assert_eq!(prompt_endpoint("system_prompt"), "/api/admin/prompts/system_prompt");
}

#[test]
fn conversation_endpoints_share_one_shape() {
    assert_eq!(audio_endpoint("conv9"), "/api/admin/conversations/conv9/audio");
    assert_eq!(
        transcript_endpoint("conv9"),
        "/api/admin/conversations/conv9/transcript"
    );
    assert_eq!(share_endpoint("conv9"), "/api/admin/conversations/conv9/share");
}

#[test]
fn shared_endpoint_escapes_token() {
    assert_eq!(shared_endpoint("abc123"), "/api/admin/shared/abc123");
    assert_eq!(shared_endpoint("a/b"), "/api/admin/shared/a%2Fb");
}
