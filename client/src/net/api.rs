//! REST API helpers for the MediLocate backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! credential attached as a bearer header when present.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single attempt. Transport failures, non-success statuses
//! and undecodable bodies come back as distinct `ApiError` variants so callers
//! decide how much of the distinction to surface.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ApiMessage, LoginResponse, RegisterRequest, SearchRequest, SearchResult, UserProfile};
use crate::state::session::ProfileSource;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const PROFILE_PATH: &str = "/api/profile";
pub const SEARCH_MEDICINE_PATH: &str = "/api/search_medicine";
pub const SEARCH_BY_PREFIX_PATH: &str = "/api/search_by_prefix";
pub const INVENTORY_UPLOAD_PATH: &str = "/api/inventory/upload";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn prefix_query_path(encoded_prefix: &str) -> String {
    format!("{SEARCH_BY_PREFIX_PATH}?prefix={encoded_prefix}")
}

#[cfg(feature = "hydrate")]
fn request(method: gloo_net::http::Method, path: &str, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    let url = super::config::endpoint(&super::config::api_base(), path);
    let builder = gloo_net::http::RequestBuilder::new(&url).method(method);
    match token {
        Some(token) => builder.header("Authorization", &bearer_header(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    use crate::state::token_store::{BrowserTokenStore, TokenStore};
    BrowserTokenStore.get()
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status_body(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_json<B, T>(method: gloo_net::http::Method, path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let token = stored_token();
    let resp = request(method, path, token.as_deref())
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// Exchange credentials for a bearer token via `POST /login`.
///
/// # Errors
///
/// Returns the server's rejection (usually 401 "Invalid credentials") or a
/// transport/decode failure.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        send_json(gloo_net::http::Method::POST, LOGIN_PATH, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns the server's validation message (missing fields, geocoding
/// failure, duplicate email) or a transport/decode failure.
pub async fn register(form: &RegisterRequest) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(gloo_net::http::Method::POST, REGISTER_PATH, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the profile the given credential belongs to via `GET /api/profile`.
///
/// The token is passed explicitly so a freshly issued credential can be
/// verified before it is persisted.
///
/// # Errors
///
/// Any failure means the credential could not be verified.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = request(gloo_net::http::Method::GET, PROFILE_PATH, Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Delete the signed-in account via `DELETE /api/profile`.
///
/// # Errors
///
/// Returns the server's rejection or a transport failure.
pub async fn delete_account() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = stored_token();
        let resp = request(gloo_net::http::Method::DELETE, PROFILE_PATH, token.as_deref())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        // Success bodies vary between deployments; only the status matters.
        if resp.ok() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::from_status_body(resp.status(), &body))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Find pharmacies stocking a medicine near an address via
/// `POST /api/search_medicine`. Results arrive sorted by distance.
///
/// # Errors
///
/// Returns the server's message (e.g. "Invalid address") or a
/// transport/decode failure.
pub async fn search_medicine(query: &SearchRequest) -> Result<Vec<SearchResult>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::ResultsEnvelope<SearchResult> =
            send_json(gloo_net::http::Method::POST, SEARCH_MEDICINE_PATH, query).await?;
        Ok(envelope.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Medicine-name completions for a typed prefix via
/// `GET /api/search_by_prefix`.
///
/// # Errors
///
/// Returns a transport/decode failure; callers usually just log it.
pub async fn search_by_prefix(prefix: &str) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = String::from(js_sys::encode_uri_component(prefix));
        let token = stored_token();
        let resp = request(gloo_net::http::Method::GET, &prefix_query_path(&encoded), token.as_deref())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: super::types::ResultsEnvelope<String> = decode(resp).await?;
        Ok(envelope.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefix;
        Err(ApiError::Unavailable)
    }
}

/// Upload a pharmacy inventory CSV as multipart field `file` via
/// `POST /api/inventory/upload`. Column validation happens server-side.
///
/// # Errors
///
/// Returns the server's message plus per-line `details`, or a transport
/// failure.
#[cfg(feature = "hydrate")]
pub async fn upload_inventory(file: &web_sys::File) -> Result<ApiMessage, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let token = stored_token();
    let resp = request(gloo_net::http::Method::POST, INVENTORY_UPLOAD_PATH, token.as_deref())
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// Profile source backed by `GET /api/profile`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProfileSource;

impl ProfileSource for HttpProfileSource {
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        fetch_profile(token).await
    }
}
