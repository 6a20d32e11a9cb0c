//! Signup transport.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the HTTP client reports a network error, since the
//! endpoint is only reachable from the browser. Tests inject their own
//! `SignupApi` instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::SignupError;
use super::types::{SignupRequest, SignupResponse};
use crate::config::AppConfig;

/// Path of the signup endpoint, relative to the API base URL.
pub const SIGNUP_PATH: &str = "/auth/signup";

/// `detail` from a non-2xx body; an unreadable body is logged and yields `None`.
#[cfg(any(test, feature = "csr"))]
fn rejection_detail<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> Option<String> {
    match body {
        Ok(body) => super::types::parse_error_detail(&body),
        Err(e) => {
            leptos::logging::warn!("signup: could not read {status} error body: {e}");
            None
        }
    }
}

/// Remote side of the signup flow.
#[allow(async_fn_in_trait)]
pub trait SignupApi {
    /// Sends one signup request and resolves with the issued token.
    ///
    /// # Errors
    ///
    /// Returns a [`SignupError`] for non-2xx answers, transport failures, or
    /// undecodable bodies.
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, SignupError>;
}

/// `SignupApi` backed by `POST {API_BASE}/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSignupApi {
    endpoint: String,
}

impl HttpSignupApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.url(SIGNUP_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SignupApi for HttpSignupApi {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, SignupError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| SignupError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| SignupError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let detail = rejection_detail(status, resp.text().await);
                return Err(SignupError::Rejected { status, detail });
            }
            resp.json::<SignupResponse>()
                .await
                .map_err(|e| SignupError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(SignupError::Network("not available outside the browser".to_owned()))
        }
    }
}
