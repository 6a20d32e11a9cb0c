//! Submit handler for the signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SignupPage` spawns `handle_submit` on every form submit. The controller
//! owns the two side-effecting collaborators (`SignupApi`, `TokenStore`);
//! form state is reached through `FormHandle` so the same code drives a
//! Leptos signal in the browser and a `RefCell` in tests.
//!
//! ERROR HANDLING
//! ==============
//! Failures never escape: they become `SignupOutcome::Failed` with the
//! banner text, and the form is released for another attempt.

#[cfg(test)]
#[path = "signup_controller_test.rs"]
mod signup_controller_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use super::DASHBOARD_ROUTE;
use crate::net::api::SignupApi;
use crate::net::error::SignupError;
use crate::net::types::SignupRequest;
use crate::state::signup::{FormState, SignupOutcome, SubmitDecision};
use crate::util::token_store::TokenStore;

/// Mutable access to the form a submit operates on.
pub trait FormHandle {
    /// Runs `f` against the form. `None` if the form is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormHandle for RwSignal<FormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormHandle for RefCell<FormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Clone, Debug)]
pub struct SignupController<A, S> {
    api: A,
    store: S,
}

impl<A: SignupApi, S: TokenStore> SignupController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Sends `request` and stores the issued token.
    pub async fn submit(&self, request: SignupRequest) -> SignupOutcome {
        leptos::logging::log!("signup: request sent");
        let result = match self.api.signup(&request).await {
            Ok(response) => self
                .store
                .save_token(&response.access_token)
                .map_err(SignupError::from),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                leptos::logging::log!("signup: account created, token stored");
                SignupOutcome::Authenticated {
                    redirect: DASHBOARD_ROUTE,
                }
            }
            Err(err) => {
                leptos::logging::warn!("signup: failed: {err}");
                SignupOutcome::Failed {
                    message: err.user_message(),
                }
            }
        }
    }

    /// Full submit: validate, send, apply the outcome, navigate on success.
    ///
    /// Returns `None` when no request was sent (mismatch, or one already in
    /// flight).
    pub async fn handle_submit<F, N>(&self, form: &F, navigate: N) -> Option<SignupOutcome>
    where
        F: FormHandle,
        N: FnOnce(&str),
    {
        let request = match form.with_form(FormState::begin_submit)? {
            SubmitDecision::Send(request) => request,
            SubmitDecision::Mismatch => {
                leptos::logging::log!("signup: blocked, passwords do not match");
                return None;
            }
            SubmitDecision::Busy => return None,
        };

        let outcome = self.submit(request).await;
        form.with_form(|state| state.finish_submit(&outcome));
        if let SignupOutcome::Authenticated { redirect } = &outcome {
            navigate(*redirect);
        }
        Some(outcome)
    }
}
