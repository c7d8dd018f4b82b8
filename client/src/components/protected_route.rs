//! Access-control wrapper for routes that need a signed-in user.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::auth::{GuardDecision, LOGIN_ROUTE, guard_decision};

/// Render `children` only for an authenticated session.
///
/// While the session is verifying a neutral indicator is shown, so the
/// wrapped view never mounts (and its effects never run) before the decision.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let decision = Memo::new(move |_| session.with(guard_decision));

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="route-pending" role="status" aria-busy="true">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Denied => view! { <Redirect path=LOGIN_ROUTE/> }.into_any(),
        GuardDecision::Authorized => children().into_any(),
    }
}
