//! API base URL resolution.
//!
//! The host writes the configured base URL into a `<meta>` tag in the SSR
//! shell; the browser reads it back on every request.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `name` attribute of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "medilocate-api-base";

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Trim whitespace and trailing slashes; blank input maps to the default.
pub fn normalize_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Join the base URL and an absolute API path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// API base URL for the current page.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        normalize_api_base(content.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_API_BASE.to_owned()
    }
}
