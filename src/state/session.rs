//! Session lifecycle: startup restoration, login, signup, logout.
//!
//! The state machine has three phases — initializing, anonymous,
//! authenticated — and this module is the only place they change. The core
//! transition functions are generic over the token backend and the identity
//! gateway so they run natively under test; the browser wiring at the bottom
//! binds them to `localStorage`, the real HTTP gateway, and the shared
//! `RwSignal` state.
//!
//! ORDERING
//! ========
//! Within one operation, tokens are persisted before the user state is
//! updated, which in turn happens before dependent re-renders. A consumer
//! can never observe an authenticated user without stored credentials.
//! Concurrent in-flight logins are not deduplicated; the last response to
//! settle wins the token store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::{LoginInput, SignupInput, User};
use crate::storage::tokens::{TokenBackend, TokenPair, TokenStore};

/// Remote identity operations the session machine drives.
///
/// [`HttpGateway`] is the production implementation; tests substitute
/// canned gateways.
#[allow(async_fn_in_trait)]
pub trait IdentityGateway {
    async fn signup(&self, input: &SignupInput) -> Result<(User, TokenPair), ApiError>;
    async fn login(&self, input: &LoginInput) -> Result<(User, TokenPair), ApiError>;
    async fn fetch_current_user(&self) -> Result<User, ApiError>;
}

/// Identity gateway backed by the real HTTP channels.
#[derive(Debug, Default)]
pub struct HttpGateway;

impl IdentityGateway for HttpGateway {
    async fn signup(&self, input: &SignupInput) -> Result<(User, TokenPair), ApiError> {
        crate::net::users::signup(input).await
    }

    async fn login(&self, input: &LoginInput) -> Result<(User, TokenPair), ApiError> {
        crate::net::users::login(input).await
    }

    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        crate::net::users::fetch_current_user().await
    }
}

/// Attempt to rebuild the session from persisted tokens.
///
/// With no stored pair this is a purely local decision: no request is issued
/// and the visitor stays anonymous. With a pair, the current user is fetched
/// over the authorized channel; any failure — rejection or transport — clears
/// the stored tokens and degrades to an anonymous session. Restoration never
/// surfaces an error to the caller, only a diagnostic log line.
pub async fn restore<B: TokenBackend, G: IdentityGateway>(
    store: &mut TokenStore<B>,
    gateway: &G,
) -> Option<User> {
    store.load()?;
    match gateway.fetch_current_user().await {
        Ok(user) => Some(user),
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            store.clear();
            None
        }
    }
}

/// Log in and persist the returned tokens.
///
/// Tokens are written before the user is handed back, so callers updating
/// shared state afterwards keep the ordering guarantee. A failed attempt
/// changes neither the store nor any state; the error goes to the
/// diagnostic log only.
pub async fn login<B: TokenBackend, G: IdentityGateway>(
    store: &mut TokenStore<B>,
    gateway: &G,
    input: &LoginInput,
) -> Option<User> {
    match gateway.login(input).await {
        Ok((user, tokens)) => {
            store.save(&tokens);
            Some(user)
        }
        Err(err) => {
            leptos::logging::error!("login failed: {err}");
            None
        }
    }
}

/// Create an account and open a session with the minted tokens.
///
/// Same contract as [`login`]: persistence before user, nothing touched on
/// failure — an existing session survives a failed signup untouched.
pub async fn signup<B: TokenBackend, G: IdentityGateway>(
    store: &mut TokenStore<B>,
    gateway: &G,
    input: &SignupInput,
) -> Option<User> {
    match gateway.signup(input).await {
        Ok((user, tokens)) => {
            store.save(&tokens);
            Some(user)
        }
        Err(err) => {
            leptos::logging::error!("signup failed: {err}");
            None
        }
    }
}

/// Drop the session. Local-only and synchronous; always succeeds.
pub fn logout<B: TokenBackend>(store: &mut TokenStore<B>) {
    store.clear();
}

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{RwSignal, Update};

    use super::{HttpGateway, logout, restore};
    use crate::net::types::{LoginInput, SignupInput};
    use crate::state::auth::AuthState;
    use crate::state::notify::NotifyState;
    use crate::storage::tokens::{LocalStorage, TokenStore};

    fn store() -> TokenStore<LocalStorage> {
        TokenStore::new(LocalStorage)
    }

    /// Current access token, if a full pair is stored.
    ///
    /// The authorized channel calls this on every request instead of holding
    /// its own copy of the credentials.
    pub fn access_token() -> Option<String> {
        store().load().map(|tokens| tokens.access_token)
    }

    /// One-shot startup restoration.
    ///
    /// Runs once from the app root. `initializing` flips to false whatever
    /// the outcome, so the first render is never blocked on a slow or failing
    /// identity check. Completions use `try_update`: a response landing after
    /// the owning scope is gone is dropped silently.
    pub fn init_session(auth: RwSignal<AuthState>) {
        leptos::task::spawn_local(async move {
            let mut store = store();
            let user = restore(&mut store, &HttpGateway).await;
            let _ = auth.try_update(|state| {
                state.user = user;
                state.initializing = false;
            });
        });
    }

    /// Submit a login. On failure the state stays as it was; the error is
    /// logged by the core and not surfaced here.
    pub fn submit_login(auth: RwSignal<AuthState>, input: LoginInput) {
        leptos::task::spawn_local(async move {
            let mut store = store();
            if let Some(user) = super::login(&mut store, &HttpGateway, &input).await {
                let _ = auth.try_update(|state| state.user = Some(user));
            }
        });
    }

    /// Submit a signup and notify the UI of the outcome.
    pub fn submit_signup(
        auth: RwSignal<AuthState>,
        notify: RwSignal<NotifyState>,
        input: SignupInput,
    ) {
        leptos::task::spawn_local(async move {
            let mut store = store();
            match super::signup(&mut store, &HttpGateway, &input).await {
                Some(user) => {
                    let _ = auth.try_update(|state| state.user = Some(user));
                    let _ =
                        notify.try_update(|n| n.push_success("Account created successfully."));
                }
                None => {
                    let _ = notify.try_update(|n| n.push_error("Could not create the account."));
                }
            }
        });
    }

    /// Synchronous logout: clear the stored tokens and drop the user.
    /// No network involved; cannot fail.
    pub fn logout_now(auth: RwSignal<AuthState>) {
        logout(&mut store());
        auth.update(|state| state.user = None);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{access_token, init_session, logout_now, submit_login, submit_signup};
