use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::storage::tokens::MemoryBackend;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
    }
}

fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access_token: access.to_owned(),
        refresh_token: refresh.to_owned(),
    }
}

fn rejected() -> ApiError {
    ApiError::Status {
        status: 401,
        body: "unauthorized".to_owned(),
    }
}

/// Canned gateway counting every remote call.
#[derive(Default)]
struct MockGateway {
    me_calls: Cell<u32>,
    me_response: RefCell<Option<Result<User, ApiError>>>,
    login_response: RefCell<Option<Result<(User, TokenPair), ApiError>>>,
    signup_response: RefCell<Option<Result<(User, TokenPair), ApiError>>>,
}

impl IdentityGateway for MockGateway {
    async fn signup(&self, _input: &SignupInput) -> Result<(User, TokenPair), ApiError> {
        self.signup_response
            .borrow()
            .clone()
            .unwrap_or(Err(ApiError::Unavailable))
    }

    async fn login(&self, _input: &LoginInput) -> Result<(User, TokenPair), ApiError> {
        self.login_response
            .borrow()
            .clone()
            .unwrap_or(Err(ApiError::Unavailable))
    }

    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        self.me_calls.set(self.me_calls.get() + 1);
        self.me_response
            .borrow()
            .clone()
            .unwrap_or(Err(ApiError::Unavailable))
    }
}

fn login_input() -> LoginInput {
    LoginInput {
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
    }
}

fn signup_input() -> SignupInput {
    SignupInput {
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
    }
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_tokens_issues_no_request() {
    let mut store = TokenStore::new(MemoryBackend::default());
    let gateway = MockGateway::default();

    let user = block_on(restore(&mut store, &gateway));

    assert!(user.is_none());
    assert_eq!(gateway.me_calls.get(), 0);
}

#[test]
fn restore_success_returns_the_fetched_user() {
    let mut store = TokenStore::new(MemoryBackend::default());
    store.save(&pair("AT1", "RT1"));
    let gateway = MockGateway::default();
    *gateway.me_response.borrow_mut() = Some(Ok(sample_user()));

    let user = block_on(restore(&mut store, &gateway));

    assert_eq!(user, Some(sample_user()));
    assert_eq!(gateway.me_calls.get(), 1);
    assert_eq!(store.load(), Some(pair("AT1", "RT1")));
}

#[test]
fn restore_failure_clears_tokens_and_degrades_to_anonymous() {
    let mut store = TokenStore::new(MemoryBackend::default());
    store.save(&pair("AT1", "RT1"));
    let gateway = MockGateway::default();
    *gateway.me_response.borrow_mut() = Some(Err(rejected()));

    let user = block_on(restore(&mut store, &gateway));

    assert!(user.is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn restore_transport_failure_behaves_like_rejection() {
    let mut store = TokenStore::new(MemoryBackend::default());
    store.save(&pair("AT1", "RT1"));
    let gateway = MockGateway::default();
    *gateway.me_response.borrow_mut() =
        Some(Err(ApiError::Network("connection refused".to_owned())));

    let user = block_on(restore(&mut store, &gateway));

    assert!(user.is_none());
    assert_eq!(store.load(), None);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_tokens_and_returns_the_user() {
    let mut store = TokenStore::new(MemoryBackend::default());
    let gateway = MockGateway::default();
    *gateway.login_response.borrow_mut() = Some(Ok((sample_user(), pair("AT1", "RT1"))));

    let user = block_on(login(&mut store, &gateway, &login_input()));

    // Tokens are in the store by the time the user is handed back.
    assert_eq!(store.load(), Some(pair("AT1", "RT1")));
    assert_eq!(user, Some(sample_user()));
}

#[test]
fn login_failure_persists_nothing() {
    let mut store = TokenStore::new(MemoryBackend::default());
    let gateway = MockGateway::default();
    *gateway.login_response.borrow_mut() = Some(Err(rejected()));

    let user = block_on(login(&mut store, &gateway, &login_input()));

    assert!(user.is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn later_login_overwrites_earlier_tokens() {
    // Two settled logins: last write wins on the store.
    let mut store = TokenStore::new(MemoryBackend::default());
    let gateway = MockGateway::default();

    *gateway.login_response.borrow_mut() = Some(Ok((sample_user(), pair("AT1", "RT1"))));
    block_on(login(&mut store, &gateway, &login_input()));

    *gateway.login_response.borrow_mut() = Some(Ok((sample_user(), pair("AT2", "RT2"))));
    block_on(login(&mut store, &gateway, &login_input()));

    assert_eq!(store.load(), Some(pair("AT2", "RT2")));
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_persists_tokens_and_returns_the_user() {
    let mut store = TokenStore::new(MemoryBackend::default());
    let gateway = MockGateway::default();
    *gateway.signup_response.borrow_mut() = Some(Ok((sample_user(), pair("AT1", "RT1"))));

    let user = block_on(signup(&mut store, &gateway, &signup_input()));

    assert_eq!(user, Some(sample_user()));
    assert_eq!(store.load(), Some(pair("AT1", "RT1")));
}

#[test]
fn failed_signup_leaves_an_existing_session_untouched() {
    let mut store = TokenStore::new(MemoryBackend::default());
    store.save(&pair("AT0", "RT0"));
    let gateway = MockGateway::default();
    *gateway.signup_response.borrow_mut() = Some(Err(rejected()));

    let user = block_on(signup(&mut store, &gateway, &signup_input()));

    assert!(user.is_none());
    assert_eq!(store.load(), Some(pair("AT0", "RT0")));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_the_store() {
    let mut store = TokenStore::new(MemoryBackend::default());
    store.save(&pair("AT1", "RT1"));

    logout(&mut store);

    assert_eq!(store.load(), None);
}

#[test]
fn logout_from_empty_store_is_fine() {
    let mut store = TokenStore::new(MemoryBackend::default());
    logout(&mut store);
    assert_eq!(store.load(), None);
}
