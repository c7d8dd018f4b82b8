use super::*;

#[test]
fn bearer_header_prefixes_token_verbatim() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn prefix_query_path_appends_encoded_prefix() {
    assert_eq!(prefix_query_path("para%20ce"), "/api/search_by_prefix?prefix=para%20ce");
}

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(LOGIN_PATH, "/login");
    assert_eq!(REGISTER_PATH, "/api/register");
    assert_eq!(PROFILE_PATH, "/api/profile");
    assert_eq!(SEARCH_MEDICINE_PATH, "/api/search_medicine");
    assert_eq!(INVENTORY_UPLOAD_PATH, "/api/inventory/upload");
}

#[test]
fn calls_are_unavailable_off_browser() {
    futures::executor::block_on(async {
        assert_eq!(login("a@x.com", "pw").await, Err(ApiError::Unavailable));
        assert_eq!(fetch_profile("abc123").await, Err(ApiError::Unavailable));
        assert_eq!(delete_account().await, Err(ApiError::Unavailable));
        assert_eq!(search_by_prefix("pa").await, Err(ApiError::Unavailable));
    });
}

#[test]
fn http_profile_source_delegates_to_fetch_profile() {
    let outcome = futures::executor::block_on(HttpProfileSource.fetch_profile("abc123"));
    assert_eq!(outcome, Err(ApiError::Unavailable));
}
