//! Top navigation bar with session-aware links.
//!
//! Logging out from a protected page needs no explicit navigation: the
//! route guard re-evaluates and redirects to `/login`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <header class="app-header">
            <A href="/" attr:class="app-header__brand">"MediLocate"</A>
            <nav class="app-header__nav">
                <A href="/about">"About Us"</A>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/login">"Login"</A>
                            <A href="/register">"Register"</A>
                        }
                    }
                >
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/profile">"Profile"</A>
                    <button class="btn btn--link" on:click=move |_| session.logout()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
