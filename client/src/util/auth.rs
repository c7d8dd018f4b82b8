//! Shared route-guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same rule: wait while the session is
//! verifying, then either admit the view or send the visitor to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

/// Entry point unauthenticated visitors are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of evaluating a protected route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Verification in flight; render neither the view nor a redirect.
    Pending,
    Authorized,
    /// Redirect to [`LOGIN_ROUTE`].
    Denied,
}

/// Decide what a protected route renders for `state`.
pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if state.loading() {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Authorized
    } else {
        GuardDecision::Denied
    }
}
