//! Signup form state and its transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SignupPage` keeps one `FormState` in a signal. Keystrokes go through
//! `set_field`, a submit goes through `begin_submit` and, once the request
//! resolves, `finish_submit`. Rendering reads `render()` only, so everything
//! the page shows is derivable from this struct.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::SignupRequest;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const SUBMIT_LABEL: &str = "Create Account";
pub const SUBMITTING_LABEL: &str = "Creating Account...";

/// Editable inputs on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

/// Current field values and UI flags.
///
/// An empty `error` means no banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error: String,
    pub submitting: bool,
}

/// Result of a submit attempt before any network traffic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation passed; the request is now in flight.
    Send(SignupRequest),
    /// Passwords differ; the mismatch error is set.
    Mismatch,
    /// A request is already in flight; nothing changed.
    Busy,
}

/// Terminal result of one submitted request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Token stored; the view should move to `redirect`.
    Authenticated { redirect: &'static str },
    /// Request or token write failed; `message` goes in the banner.
    Failed { message: String },
}

/// Everything the page needs to draw the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupView {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
}

impl FormState {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Validates and, if valid, marks the form as submitting.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.submitting {
            return SubmitDecision::Busy;
        }
        if self.password != self.confirm_password {
            self.error = PASSWORD_MISMATCH.to_owned();
            return SubmitDecision::Mismatch;
        }
        self.submitting = true;
        self.error.clear();
        SubmitDecision::Send(SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Applies the outcome of the in-flight request.
    pub fn finish_submit(&mut self, outcome: &SignupOutcome) {
        match outcome {
            SignupOutcome::Authenticated { .. } => self.error.clear(),
            SignupOutcome::Failed { message } => self.error.clone_from(message),
        }
        self.submitting = false;
    }

    pub fn render(&self) -> SignupView {
        SignupView {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            error: (!self.error.is_empty()).then(|| self.error.clone()),
            submit_label: if self.submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_disabled: self.submitting,
        }
    }
}
