//! Login page: email + password against `POST /login`.
//!
//! ERROR HANDLING
//! ==============
//! Server rejections are shown verbatim when they carry a message. When the
//! login response omits the user, the profile is fetched with the fresh
//! token before the session is established; a failed fetch leaves the
//! session untouched.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::components::A;

use crate::components::text_field::TextField;
#[cfg(feature = "hydrate")]
use crate::state::session::Session;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both email and password.";
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Trim the email and require both fields.
///
/// The password is passed through untouched.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(feature = "hydrate")]
async fn complete_login(
    email: &str,
    password: &str,
) -> Result<(String, crate::net::types::UserProfile), crate::net::error::ApiError> {
    let reply = crate::net::api::login(email, password).await?;
    let user = match reply.user {
        Some(user) => user,
        None => crate::net::api::fetch_profile(&reply.token).await?,
    };
    Ok((reply.token, user))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<Session>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(pair) => pair,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match complete_login(&email_value, &password_value).await {
                    Ok((token, user)) => {
                        session.login(token, user);
                        navigate("/dashboard", Default::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(e.user_message(LOGIN_FALLBACK_MESSAGE));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to find medicines near you."</p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField label="Email" value=email input_type="email" name="email" autocomplete="email"/>
                    <TextField
                        label="Password"
                        value=password
                        input_type="password"
                        name="password"
                        autocomplete="current-password"
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="alert alert--error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
