use userreg_core::{NewUser, User, UserValidationError};

#[test]
fn new_user_rejects_only_the_empty_username() {
    assert_eq!(
        NewUser::new("", "a@example.com", "pw").validate(),
        Err(UserValidationError::EmptyUsername)
    );
    assert!(NewUser::new("  \t", "a@example.com", "pw").validate().is_ok());
    assert!(NewUser::new("alice", "", "").validate().is_ok());
}

#[test]
fn password_match_is_exact() {
    let user = User {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "Secret".to_string(),
        created_at: None,
    };

    assert!(user.password_matches("Secret"));
    assert!(!user.password_matches("secret"));
    assert!(!user.password_matches("Secret "));
    assert!(!user.password_matches(""));
}

#[test]
fn serialization_omits_password() {
    let user = User {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "Secret".to_string(),
        created_at: Some(1_700_000_000_000),
    };

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);
    assert!(json.get("password").is_none());
}
