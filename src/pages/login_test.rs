use super::*;

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  admin  ", "hunter2"),
        Ok(("admin".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(
        validate_credentials("", "hunter2"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_credentials("admin", ""),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter both username and password.")
    );
}
