//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notices::NoticeStrip;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::notify::NotifyState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notification contexts, starts the one-shot
/// session restoration in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(auth);
    provide_context(notify);

    // Restore the session from persisted tokens, once per page session.
    #[cfg(feature = "hydrate")]
    crate::state::session::init_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/fintrack-ui.css"/>
        <Title text="Fintrack"/>

        <Router>
            <NoticeStrip/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
    }
}
