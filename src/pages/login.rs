//! Login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginInput;
use crate::state::auth::AuthState;

/// Login page — submits credentials and redirects home once authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Already signed in, or a submitted login just completed: go home.
    Effect::new(move || {
        let state = auth.get();
        if !state.initializing && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let input = LoginInput {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if input.email.is_empty() || input.password.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        crate::state::session::submit_login(auth, input);
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
    });

    view! {
        <div class="login-page">
            <h1>"Fintrack"</h1>
            <label class="login-page__label">
                "Email"
                <input
                    class="login-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    class="login-page__input"
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
                "Log in"
            </button>
            <a class="login-page__alt" href="/signup">
                "Create an account"
            </a>
        </div>
    }
}
