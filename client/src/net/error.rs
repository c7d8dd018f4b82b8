//! Error types for REST calls and role resolution.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` keeps the three failure classes apart (transport, HTTP status,
//! undecodable body). The session layer collapses all of them into "signed
//! out"; pages instead show the server-provided message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// The `error` field of the response body, if any.
        message: Option<String>,
        /// Machine-readable `code` field, if the server sends one.
        code: Option<String>,
        /// Per-line problems (inventory upload) or a single detail string.
        details: Vec<String>,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// Build a `Status` error from a non-success response body.
    ///
    /// Bodies that are not JSON still yield an error with only the status set.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let details = match parsed.details {
            Some(serde_json::Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                })
                .collect(),
            Some(serde_json::Value::String(text)) => vec![text],
            _ => Vec::new(),
        };
        Self::Status { status, message: parsed.error, code: parsed.code, details }
    }

    /// HTTP status, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided `error` message.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn details(&self) -> &[String] {
        match self {
            Self::Status { details, .. } => details,
            _ => &[],
        }
    }

    /// Message suitable for direct display: the server's text or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// An account whose role cannot be mapped to a dashboard.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    #[error("unrecognized role: {0}")]
    Unrecognized(String),
    #[error("profile carries no role")]
    Missing,
}
