//! Dashboard landing route reached after a successful signup.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::SIGNUP_ROUTE;
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

fn session_message(store: &impl TokenStore) -> Option<&'static str> {
    store
        .load_token()
        .filter(|token| !token.is_empty())
        .map(|_| "You're signed in.")
}

/// Dashboard page. Offers the signup link when no token is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let message = session_message(&LocalStorageTokenStore);

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            {match message {
                Some(text) => view! { <p class="dashboard-status">{text}</p> }.into_any(),
                None => {
                    view! {
                        <p class="dashboard-status">
                            "No active session. "
                            <A href=SIGNUP_ROUTE>"Create an account"</A>
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
