//! Networking modules for the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the signup transport, `error` the failure taxonomy surfaced to
//! the form, and `types` the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
