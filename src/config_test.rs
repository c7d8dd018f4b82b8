use super::*;

// Env manipulation requires unsafe in edition 2024. All cases share the same
// process-wide variables, so they run inside one test.

fn clear_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("MEDILOCATE_API_BASE");
    }
}

#[test]
fn from_env_defaults_overrides_and_errors() {
    clear_env();
    let config = HostConfig::from_env().unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.api_base, client::net::config::DEFAULT_API_BASE);
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("MEDILOCATE_API_BASE", "https://api.medilocate.in/ ");
    }
    let config = HostConfig::from_env().unwrap();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    assert_eq!(config.api_base, "https://api.medilocate.in");

    unsafe { std::env::set_var("PORT", "eighty") };
    assert!(matches!(HostConfig::from_env(), Err(HostError::Config(_))));

    unsafe { std::env::set_var("PORT", "   ") };
    assert_eq!(HostConfig::from_env().unwrap().port, DEFAULT_PORT);

    clear_env();
}

#[test]
fn env_non_empty_ignores_blank_values() {
    unsafe { std::env::set_var("__MEDILOCATE_TEST_BLANK__", "  ") };
    assert_eq!(env_non_empty("__MEDILOCATE_TEST_BLANK__"), None);
    unsafe { std::env::set_var("__MEDILOCATE_TEST_BLANK__", " value ") };
    assert_eq!(env_non_empty("__MEDILOCATE_TEST_BLANK__"), Some("value".to_owned()));
    unsafe { std::env::remove_var("__MEDILOCATE_TEST_BLANK__") };
}
