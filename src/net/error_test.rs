use super::*;

#[test]
fn http_error_message_prefers_detail_field() {
    assert_eq!(
        http_error_message(422, r#"{"detail": "Title is required"}"#),
        "Title is required"
    );
}

#[test]
fn http_error_message_uses_raw_body_without_detail() {
    assert_eq!(http_error_message(500, "internal error"), "internal error");
    assert_eq!(http_error_message(500, r#"{"code": 7}"#), r#"{"code": 7}"#);
}

#[test]
fn http_error_message_falls_back_to_status() {
    assert_eq!(
        http_error_message(503, "  "),
        "request failed with status 503"
    );
}

#[test]
fn api_error_display_forms() {
    assert_eq!(ApiError::Auth.to_string(), "session expired");
    assert_eq!(
        ApiError::Http { status: 404, message: "not found".to_owned() }.to_string(),
        "not found (status 404)"
    );
    assert_eq!(
        ApiError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
}

#[test]
fn detail_unwraps_server_message() {
    let err = ApiError::Http { status: 400, message: "Bad subject".to_owned() };
    assert_eq!(err.detail(), "Bad subject");
    assert_eq!(ApiError::Auth.detail(), "session expired");
}
