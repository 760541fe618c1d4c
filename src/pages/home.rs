//! Home page: greeting, balance overview, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::balance::BalancePanel;
use crate::state::auth::AuthState;

/// Home page for the signed-in user.
/// Redirects to `/login` once restoration finishes without a user.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        if auth.get().is_anonymous() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Hello, {}", user.first_name))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        crate::state::session::logout_now(auth);
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>{greeting}</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            <Show when=move || auth.get().user.is_some()>
                <BalancePanel/>
            </Show>
        </div>
    }
}
