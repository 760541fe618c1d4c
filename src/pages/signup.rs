//! Signup page with the account creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupInput;
use crate::state::auth::AuthState;
use crate::state::notify::NotifyState;

/// Signup page — creates an account and redirects home on success.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.initializing && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let input = SignupInput {
            first_name: first_name.get().trim().to_owned(),
            last_name: last_name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if input.first_name.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        crate::state::session::submit_signup(auth, notify, input);
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, notify);
    });

    view! {
        <div class="signup-page">
            <h1>"Create your account"</h1>
            <label class="signup-page__label">
                "First name"
                <input
                    class="signup-page__input"
                    type="text"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
            </label>
            <label class="signup-page__label">
                "Last name"
                <input
                    class="signup-page__input"
                    type="text"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
            </label>
            <label class="signup-page__label">
                "Email"
                <input
                    class="signup-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="signup-page__label">
                "Password"
                <input
                    class="signup-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Sign up"
            </button>
            <a class="signup-page__alt" href="/login">
                "I already have an account"
            </a>
        </div>
    }
}
