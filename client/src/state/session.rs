//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is provided once via context by the root `App` and read by route
//! guards, the header and the dashboard. Its methods are the only write path
//! for the current user and credential.
//!
//! INVARIANTS
//! ==========
//! - `user` is present only after the current credential was verified by a
//!   profile fetch during this session lifetime (or handed over by `login`).
//! - A stored credential without a verified user is "verifying", never
//!   authenticated.
//! - Every login, logout and verification start bumps `generation`; a profile
//!   fetch that completes under an older generation is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use super::token_store::{BrowserTokenStore, TokenStore};
use crate::net::api::HttpProfileSource;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;

/// Collaborator that resolves a credential to the profile it belongs to.
pub trait ProfileSource {
    fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<UserProfile, ApiError>>;
}

/// Plain session record. Mutated only through its transition methods.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    user: Option<UserProfile>,
    token: Option<String>,
    loading: bool,
    generation: u64,
}

/// Ticket for one in-flight profile verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    generation: u64,
    token: String,
}

impl Verification {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl SessionState {
    /// Fresh session at application start: credential read from `store`,
    /// no user, verification pending.
    pub fn restore<S: TokenStore>(store: &S) -> Self {
        Self { user: None, token: store.get(), loading: true, generation: 0 }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Start verifying whatever credential `store` holds now.
    ///
    /// With no stored credential the session settles immediately as signed
    /// out and `None` is returned; no profile fetch should be issued.
    pub fn begin_verification<S: TokenStore>(&mut self, store: &S) -> Option<Verification> {
        self.generation += 1;
        self.user = None;
        self.token = store.get();
        match &self.token {
            Some(token) => {
                self.loading = true;
                Some(Verification { generation: self.generation, token: token.clone() })
            }
            None => {
                self.loading = false;
                None
            }
        }
    }

    /// Apply the outcome of a profile fetch started by `begin_verification`.
    ///
    /// Any failure purges the credential from memory and from `store`.
    /// Returns `false` when the ticket was superseded and nothing changed.
    pub fn complete_verification<S: TokenStore>(
        &mut self,
        ticket: Verification,
        outcome: Result<UserProfile, ApiError>,
        store: &S,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match outcome {
            Ok(profile) => {
                self.user = Some(profile);
            }
            Err(err) => {
                leptos::logging::warn!("session verification failed: {err}");
                store.clear();
                self.token = None;
                self.user = None;
            }
        }
        self.loading = false;
        true
    }

    /// Record a freshly issued credential and its profile.
    pub fn login<S: TokenStore>(&mut self, token: String, user: UserProfile, store: &S) {
        store.set(&token);
        self.generation += 1;
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the credential and profile, superseding any in-flight verification.
    pub fn logout<S: TokenStore>(&mut self, store: &S) {
        store.clear();
        self.generation += 1;
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}

/// Reactive handle to the single application session.
///
/// `Copy`, so views capture it freely in closures.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Session restored from the browser's stored credential.
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::restore(&BrowserTokenStore)) }
    }

    /// Run `f` against the current state, tracking the read.
    pub fn with<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        self.state.with(f)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn current_loading(&self) -> bool {
        self.state.with(SessionState::loading)
    }

    pub fn login(&self, token: String, user: UserProfile) {
        self.state.update(|s| s.login(token, user, &BrowserTokenStore));
    }

    pub fn logout(&self) {
        self.state.update(|s| s.logout(&BrowserTokenStore));
    }

    /// Verify the stored credential against `GET /api/profile`.
    pub fn verify(&self) {
        self.verify_with(HttpProfileSource);
    }

    fn verify_with<P: ProfileSource + 'static>(&self, profiles: P) {
        let mut ticket = None;
        self.state.update(|s| ticket = s.begin_verification(&BrowserTokenStore));
        let Some(ticket) = ticket else {
            return;
        };
        let state = self.state;
        leptos::task::spawn_local(async move {
            let outcome = profiles.fetch_profile(ticket.token()).await;
            state.update(|s| {
                s.complete_verification(ticket, outcome, &BrowserTokenStore);
            });
        });
    }

    /// Re-verify whenever another tab rewrites the stored credential.
    #[cfg(feature = "hydrate")]
    pub fn watch_external_changes(&self) {
        let session = *self;
        let _listener = window_event_listener(leptos::ev::storage, move |ev| {
            if ev.key().as_deref() == Some(super::token_store::TOKEN_KEY) {
                session.verify();
            }
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
