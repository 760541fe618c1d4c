//! The two outbound HTTP channels.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! remote API is only reachable from the browser.
//!
//! The *anonymous* channel sends no credentials and carries signup/login.
//! The *authorized* channel asks the session layer for the current access
//! token on every call and attaches it as a bearer credential; it holds no
//! credential state of its own. Both channels make a single attempt: a
//! non-2xx response becomes a typed error for the caller to interpret, with
//! no retry and no token refresh at this layer.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;

/// Base path of the remote API, shared by both channels.
pub const API_BASE: &str = "/api";

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// POST a JSON body over the anonymous channel.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&url(path))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// GET over the authorized channel.
///
/// The bearer token comes from the session accessor at call time. With no
/// stored pair the request goes out bare and the server's rejection comes
/// back as a [`ApiError::Status`].
pub async fn get_authorized<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::get(&url(path));
        if let Some(token) = crate::state::session::access_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: resp.status(),
            body,
        });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
