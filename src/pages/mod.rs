//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. The signup submit handler
//! lives in `signup_controller` so it runs without a browser.

pub mod dashboard;
pub mod signup;
pub mod signup_controller;

pub const SIGNUP_ROUTE: &str = "/signup";
pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
