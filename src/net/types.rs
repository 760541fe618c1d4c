//! Wire payloads and canonical domain records.
//!
//! The server speaks snake_case identity fields and a camelCase token
//! envelope. Those shapes stop at this module and `users`: everything else
//! in the crate sees only the canonical records.

use serde::{Deserialize, Serialize};

/// Canonical user record.
///
/// Replaced wholesale on every successful identity operation, never mutated
/// field by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Aggregated balance for a reporting period.
#[derive(Clone, Debug, PartialEq)]
pub struct Balance {
    pub balance: f64,
    pub earnings: f64,
    pub expenses: f64,
    pub investments: f64,
}

/// Signup form data in domain vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

// ---- wire shapes ----

/// Identity response body for signup, login, and `/users/me`.
///
/// `tokens` is present on signup/login responses and absent on
/// `/users/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct UserWire {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub tokens: Option<TokensWire>,
}

/// Token envelope; the server uses camelCase here.
#[derive(Clone, Debug, Deserialize)]
pub struct TokensWire {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Request body for `POST /users`.
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for `POST /users/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body for `GET /users/me/balance`.
#[derive(Clone, Debug, Deserialize)]
pub struct BalanceWire {
    pub balance: f64,
    pub earnings: f64,
    pub expenses: f64,
    pub investments: f64,
}
