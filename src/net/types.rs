//! Wire DTOs for `POST /auth/signup`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials snapshot taken from the form at submit time.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful signup body.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    pub access_token: String,
}

impl std::fmt::Debug for SignupResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupResponse")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Error body returned with any non-2xx status.
///
/// `detail` stays untyped because validation failures send a list here
/// instead of a string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail, verbatim, if the server sent a non-empty string.
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()?
            .as_str()
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
    }
}

/// Extracts the `detail` message from a raw error body.
///
/// Bodies that are not JSON objects yield `None`.
pub fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.message()
}
