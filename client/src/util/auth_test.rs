use super::*;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::state::token_store::{MemoryTokenStore, TokenStore};

fn user() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "A",
        "email": "a@x.com",
        "role": "individual",
    }))
    .unwrap()
}

#[test]
fn pending_while_restoring_even_with_token() {
    let store = MemoryTokenStore::with_token("abc123");
    let state = SessionState::restore(&store);
    assert_eq!(guard_decision(&state), GuardDecision::Pending);
}

#[test]
fn pending_while_verifying_never_authorizes() {
    let store = MemoryTokenStore::with_token("abc123");
    let mut state = SessionState::restore(&store);
    let ticket = state.begin_verification(&store).unwrap();
    assert_eq!(guard_decision(&state), GuardDecision::Pending);
    state.complete_verification(ticket, Ok(user()), &store);
    assert_eq!(guard_decision(&state), GuardDecision::Authorized);
}

#[test]
fn denied_when_no_token_after_boot() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::restore(&store);
    assert!(state.begin_verification(&store).is_none());
    assert_eq!(guard_decision(&state), GuardDecision::Denied);
}

#[test]
fn denied_after_rejected_token() {
    let store = MemoryTokenStore::with_token("expired");
    let mut state = SessionState::restore(&store);
    let ticket = state.begin_verification(&store).unwrap();
    state.complete_verification(ticket, Err(ApiError::from_status_body(401, "")), &store);
    assert_eq!(guard_decision(&state), GuardDecision::Denied);
    assert_eq!(store.get(), None);
}

#[test]
fn logout_resets_to_denied() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::restore(&store);
    state.login("t".to_owned(), user(), &store);
    assert_eq!(guard_decision(&state), GuardDecision::Authorized);
    state.logout(&store);
    assert_eq!(guard_decision(&state), GuardDecision::Denied);
}

#[test]
fn login_route_is_login_page() {
    assert_eq!(LOGIN_ROUTE, "/login");
}
