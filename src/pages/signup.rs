//! Signup page: email, password, and confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public entry route. Field edits land in a `FormState` signal; the submit
//! handler is delegated to `SignupController`, which stores the access token
//! and routes to the dashboard on success.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::LOGIN_ROUTE;
use super::signup_controller::SignupController;
use crate::config::AppConfig;
use crate::net::api::HttpSignupApi;
use crate::state::signup::{Field, FormState};
use crate::util::token_store::LocalStorageTokenStore;

/// Signup page. Posts to `{API_BASE}/auth/signup`.
#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let view_model = Memo::new(move |_| form.with(FormState::render));
    let controller = SignupController::new(
        HttpSignupApi::new(&AppConfig::load()),
        LocalStorageTokenStore,
    );
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let controller = controller.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                controller
                    .handle_submit(&form, |path| {
                        navigate(path, leptos_router::NavigateOptions::default());
                    })
                    .await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&controller, &navigate);
        }
    };

    let bind = move |field: Field| {
        move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)))
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1 class="signup-card__title">"Join Us"</h1>
                <p class="signup-card__subtitle">"Start your professional AI journey"</p>

                <form class="signup-form" on:submit=on_submit>
                    <label class="signup-field">
                        <span class="signup-field__label">"Email Address"</span>
                        <input
                            class="signup-input"
                            type="email"
                            placeholder="name@company.com"
                            required
                            prop:value=move || view_model.with(|v| v.email.clone())
                            on:input=bind(Field::Email)
                        />
                    </label>
                    <label class="signup-field">
                        <span class="signup-field__label">"Password"</span>
                        <input
                            class="signup-input"
                            type="password"
                            name="password"
                            id="password"
                            placeholder="Create a strong password"
                            autocomplete="new-password"
                            required
                            prop:value=move || view_model.with(|v| v.password.clone())
                            on:input=bind(Field::Password)
                        />
                    </label>
                    <label class="signup-field">
                        <span class="signup-field__label">"Confirm Password"</span>
                        <input
                            class="signup-input"
                            type="password"
                            name="confirmPassword"
                            id="confirmPassword"
                            placeholder="Confirm your password"
                            autocomplete="new-password"
                            required
                            prop:value=move || view_model.with(|v| v.confirm_password.clone())
                            on:input=bind(Field::ConfirmPassword)
                        />
                    </label>

                    <Show when=move || view_model.with(|v| v.error.is_some())>
                        <p class="signup-error" role="alert">
                            {move || view_model.with(|v| v.error.clone().unwrap_or_default())}
                        </p>
                    </Show>

                    <button
                        class="signup-button"
                        type="submit"
                        disabled=move || view_model.with(|v| v.submit_disabled)
                    >
                        {move || view_model.with(|v| v.submit_label)}
                    </button>
                </form>

                <p class="signup-footer">
                    "Already have an account? "
                    <A href=LOGIN_ROUTE>"Sign in instead"</A>
                </p>
            </div>
        </div>
    }
}
