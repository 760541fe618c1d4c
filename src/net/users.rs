//! User API service: signup, login, current user, balance.
//!
//! Stateless translation layer between domain vocabulary and the wire
//! schema. Signup and login ride the anonymous channel; the rest use the
//! authorized one. Channel errors propagate unchanged — mapping the wire
//! shape onto domain records is the only work done here.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::channel;
use crate::net::error::ApiError;
use crate::net::types::{
    Balance, BalanceWire, LoginInput, LoginRequest, SignupInput, SignupRequest, User, UserWire,
};
use crate::storage::tokens::TokenPair;

/// Create an account. Returns the new user and the minted token pair.
pub async fn signup(input: &SignupInput) -> Result<(User, TokenPair), ApiError> {
    let wire: UserWire = channel::post_json(
        "/users",
        &SignupRequest {
            first_name: &input.first_name,
            last_name: &input.last_name,
            email: &input.email,
            password: &input.password,
        },
    )
    .await?;
    map_session(wire)
}

/// Authenticate with email and password.
pub async fn login(input: &LoginInput) -> Result<(User, TokenPair), ApiError> {
    let wire: UserWire = channel::post_json(
        "/users/login",
        &LoginRequest {
            email: &input.email,
            password: &input.password,
        },
    )
    .await?;
    map_session(wire)
}

/// Fetch the user the stored access token belongs to.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let wire: UserWire = channel::get_authorized("/users/me").await?;
    Ok(map_user(wire))
}

/// Fetch the balance summary for a period (dates as `yyyy-MM-dd`).
pub async fn fetch_balance(from: &str, to: &str) -> Result<Balance, ApiError> {
    let path = format!("/users/me/balance?from={from}&to={to}");
    let wire: BalanceWire = channel::get_authorized(&path).await?;
    Ok(Balance {
        balance: wire.balance,
        earnings: wire.earnings,
        expenses: wire.expenses,
        investments: wire.investments,
    })
}

fn map_user(wire: UserWire) -> User {
    User {
        id: wire.id,
        email: wire.email,
        first_name: wire.first_name,
        last_name: wire.last_name,
    }
}

fn map_session(wire: UserWire) -> Result<(User, TokenPair), ApiError> {
    let tokens = wire
        .tokens
        .clone()
        .ok_or_else(|| ApiError::Decode("response carried no tokens".to_owned()))?;
    Ok((
        map_user(wire),
        TokenPair {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        },
    ))
}
