//! Signup failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure after local validation ends up here and is terminal for
//! that submit. The form only ever shows `user_message()`, which prefers the
//! server's `detail` and otherwise falls back to a fixed hint.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::token_store::StorageError;

/// Shown when the server gave no usable `detail`.
///
/// The wording assumes a duplicate email even for unrelated failures.
pub const FALLBACK_MESSAGE: &str = "Signup failed. Email might already exist.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    /// Server answered with a non-2xx status.
    #[error("signup rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// 2xx response whose body was not a `SignupResponse`.
    #[error("response decoding failed: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SignupError {
    /// Text for the inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_MESSAGE.to_owned(),
        }
    }
}
