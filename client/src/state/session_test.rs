use std::cell::Cell;

use super::*;
use crate::state::token_store::MemoryTokenStore;

// =============================================================
// Helpers
// =============================================================

struct StubProfiles {
    outcome: Result<UserProfile, ApiError>,
    calls: Cell<usize>,
    seen_token: std::cell::RefCell<Option<String>>,
}

impl StubProfiles {
    fn ok(user: UserProfile) -> Self {
        Self { outcome: Ok(user), calls: Cell::new(0), seen_token: std::cell::RefCell::new(None) }
    }

    fn err(err: ApiError) -> Self {
        Self { outcome: Err(err), calls: Cell::new(0), seen_token: std::cell::RefCell::new(None) }
    }
}

impl ProfileSource for StubProfiles {
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.seen_token.borrow_mut() = Some(token.to_owned());
        self.outcome.clone()
    }
}

fn individual() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "A",
        "email": "a@x.com",
        "role": "individual",
    }))
    .unwrap()
}

fn pharmacy() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "id": 2,
        "name": "City Pharmacy",
        "email": "ops@city.test",
        "is_pharmacy": true,
    }))
    .unwrap()
}

/// Run the startup verification to completion.
fn boot(store: &MemoryTokenStore, profiles: &StubProfiles) -> SessionState {
    let mut state = SessionState::restore(store);
    if let Some(ticket) = state.begin_verification(store) {
        let outcome = futures::executor::block_on(profiles.fetch_profile(ticket.token()));
        state.complete_verification(ticket, outcome, store);
    }
    state
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_reads_token_and_starts_loading() {
    let store = MemoryTokenStore::with_token("abc123");
    let state = SessionState::restore(&store);
    assert!(state.loading());
    assert_eq!(state.token(), Some("abc123"));
    assert!(!state.is_authenticated());
}

#[test]
fn token_without_verified_user_is_not_authenticated() {
    let store = MemoryTokenStore::with_token("abc123");
    let mut state = SessionState::restore(&store);
    let ticket = state.begin_verification(&store);
    assert!(ticket.is_some());
    assert!(state.loading());
    assert_eq!(state.token(), Some("abc123"));
    assert!(!state.is_authenticated());
}

// =============================================================
// Startup verification
// =============================================================

#[test]
fn boot_without_token_settles_immediately_without_fetch() {
    let store = MemoryTokenStore::default();
    let profiles = StubProfiles::ok(individual());
    let state = boot(&store, &profiles);
    assert!(!state.loading());
    assert!(state.user().is_none());
    assert_eq!(profiles.calls.get(), 0);
}

#[test]
fn boot_with_valid_token_authenticates() {
    let store = MemoryTokenStore::with_token("abc123");
    let profiles = StubProfiles::ok(individual());
    let state = boot(&store, &profiles);
    assert!(state.is_authenticated());
    assert!(!state.loading());
    assert_eq!(state.user(), Some(&individual()));
    assert_eq!(state.token(), Some("abc123"));
    assert_eq!(store.get().as_deref(), Some("abc123"));
    assert_eq!(profiles.seen_token.borrow().as_deref(), Some("abc123"));
}

#[test]
fn boot_with_rejected_token_purges_store() {
    let store = MemoryTokenStore::with_token("expired");
    let profiles = StubProfiles::err(ApiError::from_status_body(401, r#"{"msg":"Token has expired"}"#));
    let state = boot(&store, &profiles);
    assert!(!state.is_authenticated());
    assert!(!state.loading());
    assert_eq!(state.token(), None);
    assert_eq!(store.get(), None);
}

#[test]
fn boot_failure_of_any_kind_purges_store() {
    let failures = [
        ApiError::Network("offline".to_owned()),
        ApiError::Decode("missing field `email`".to_owned()),
        ApiError::from_status_body(500, ""),
        ApiError::Unavailable,
    ];
    for failure in failures {
        let store = MemoryTokenStore::with_token("abc123");
        let state = boot(&store, &StubProfiles::err(failure));
        assert!(!state.is_authenticated());
        assert_eq!(store.get(), None);
    }
}

#[test]
fn purge_is_idempotent_when_store_already_empty() {
    let store = MemoryTokenStore::with_token("abc123");
    let mut state = SessionState::restore(&store);
    let ticket = state.begin_verification(&store).unwrap();
    store.clear();
    assert!(state.complete_verification(ticket, Err(ApiError::Network("x".to_owned())), &store));
    assert_eq!(store.get(), None);
    assert_eq!(state.token(), None);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_sets_token_user_and_persists() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::restore(&store);
    state.login("fresh".to_owned(), pharmacy(), &store);
    assert!(state.is_authenticated());
    assert!(!state.loading());
    assert_eq!(state.token(), Some("fresh"));
    assert_eq!(store.get().as_deref(), Some("fresh"));
}

#[test]
fn login_then_logout_is_unauthenticated_and_store_empty() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::restore(&store);
    for user in [individual(), pharmacy()] {
        state.login("t".to_owned(), user, &store);
        state.logout(&store);
        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);
        assert_eq!(store.get(), None);
    }
}

#[test]
fn logout_supersedes_in_flight_verification() {
    let store = MemoryTokenStore::with_token("abc123");
    let mut state = SessionState::restore(&store);
    let ticket = state.begin_verification(&store).unwrap();
    state.logout(&store);
    let applied = state.complete_verification(ticket, Ok(individual()), &store);
    assert!(!applied);
    assert!(!state.is_authenticated());
    assert!(!state.loading());
}

#[test]
fn stale_failure_does_not_purge_newer_login() {
    let store = MemoryTokenStore::with_token("old");
    let mut state = SessionState::restore(&store);
    let ticket = state.begin_verification(&store).unwrap();
    state.login("new".to_owned(), individual(), &store);
    let applied = state.complete_verification(ticket, Err(ApiError::from_status_body(401, "")), &store);
    assert!(!applied);
    assert!(state.is_authenticated());
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn reverification_after_external_change_drops_previous_user() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::restore(&store);
    state.login("first".to_owned(), individual(), &store);
    store.set("second");
    let ticket = state.begin_verification(&store).unwrap();
    assert_eq!(ticket.token(), "second");
    assert!(!state.is_authenticated());
    assert!(state.loading());
    state.complete_verification(ticket, Ok(pharmacy()), &store);
    assert_eq!(state.user(), Some(&pharmacy()));
}

#[test]
fn external_clear_signs_out_on_reverification() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::restore(&store);
    state.login("first".to_owned(), individual(), &store);
    store.clear();
    assert!(state.begin_verification(&store).is_none());
    assert!(!state.is_authenticated());
    assert!(!state.loading());
}
