use super::*;

#[test]
fn bearer_value_formats_authorization_header() {
    assert_eq!(bearer_value("tok123"), "Bearer tok123");
}

#[test]
fn storage_key_is_stable() {
    assert_eq!(TOKEN_STORAGE_KEY, "adminToken");
}

#[test]
fn stored_token_is_absent_natively() {
    assert!(read_stored_token().is_none());
}
