//! Root application component with routing and the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the host for SSR; `App` hydrates in the browser.
//! Startup verification runs in an effect so it only happens client-side,
//! after hydration, and never blocks the first paint.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::protected_route::ProtectedRoute;
use crate::net::config::API_BASE_META;
use crate::pages::{
    about::AboutPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is published in a meta tag so the hydrated client talks to the
/// backend the host was configured with.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    Effect::new(move || session.verify());
    #[cfg(feature = "hydrate")]
    session.watch_external_changes();

    view! {
        <Stylesheet id="leptos" href="/pkg/medilocate.css"/>
        <Title text="MediLocate"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
