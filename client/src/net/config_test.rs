use super::*;

#[test]
fn normalize_api_base_trims_trailing_slashes() {
    assert_eq!(normalize_api_base(Some("https://api.example.test//")), "https://api.example.test");
}

#[test]
fn normalize_api_base_defaults_when_blank_or_missing() {
    assert_eq!(normalize_api_base(None), DEFAULT_API_BASE);
    assert_eq!(normalize_api_base(Some("   ")), DEFAULT_API_BASE);
    assert_eq!(normalize_api_base(Some("/")), DEFAULT_API_BASE);
}

#[test]
fn endpoint_joins_without_doubling_slashes() {
    assert_eq!(endpoint("http://localhost:5000", "/api/profile"), "http://localhost:5000/api/profile");
    assert_eq!(endpoint("http://localhost:5000/", "login"), "http://localhost:5000/login");
}

#[test]
fn api_base_off_browser_is_default() {
    assert_eq!(api_base(), DEFAULT_API_BASE);
}
