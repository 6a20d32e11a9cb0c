use super::*;

#[test]
fn user_message_prefers_server_detail() {
    let err = SignupError::Rejected {
        status: 400,
        detail: Some("Email already exists".to_owned()),
    };
    assert_eq!(err.user_message(), "Email already exists");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = SignupError::Rejected {
        status: 500,
        detail: None,
    };
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn user_message_falls_back_for_transport_and_storage_failures() {
    let cases = [
        SignupError::Network("connection refused".to_owned()),
        SignupError::Encode("bad".to_owned()),
        SignupError::Decode("missing field `access_token`".to_owned()),
        SignupError::from(StorageError::Unavailable),
    ];
    for err in cases {
        assert_eq!(err.user_message(), "Signup failed. Email might already exist.");
    }
}

#[test]
fn display_includes_status_for_rejections() {
    let err = SignupError::Rejected {
        status: 409,
        detail: None,
    };
    assert_eq!(err.to_string(), "signup rejected with status 409");
}
